use yew::prelude::*;

use crate::models::section::Section;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Section,
    pub on_select: Callback<Section>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="sidebar" aria-label="Dashboard sections">
            <div class="sidebar-brand">
                <span class="brand-mark">{"🌿"}</span>
                <span class="brand-name">{"ESG Dashboard"}</span>
            </div>
            <ul class="sidebar-menu">
                { for Section::all().iter().map(|section| {
                    let section = *section;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(section))
                    };
                    let active = section == props.active;
                    html! {
                        <li key={section.slug()}>
                            <button
                                class={classes!("nav-link", active.then_some("active"))}
                                aria-current={active.then_some("page")}
                                {onclick}
                            >
                                <span class="nav-icon">{section.icon()}</span>
                                {section.label()}
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}
