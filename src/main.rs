use esg_dashboard::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
