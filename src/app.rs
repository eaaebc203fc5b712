use yew::prelude::*;

use crate::components::{Header, Sidebar, sections};
use crate::hooks::use_section::use_section;
use crate::services::auth::AuthContext;

#[function_component(App)]
pub fn app() -> Html {
    // Read once; sections receive it through the context.
    let auth = use_memo((), |_| AuthContext::load());
    let nav = use_section();

    html! {
        <ContextProvider<AuthContext> context={(*auth).clone()}>
            <div class="app-container">
                <Sidebar active={nav.section} on_select={nav.set_section.clone()} />
                <div class="app-body">
                    <Header section={nav.section} on_select={nav.set_section.clone()} />
                    <main class="app-main" id={nav.section.slug()}>
                        {sections::render(nav.section)}
                    </main>
                </div>
            </div>

            <style>
                {include_str!("style.css")}
            </style>
        </ContextProvider<AuthContext>>
    }
}
