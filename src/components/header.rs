use yew::prelude::*;

use crate::components::section_selector::SectionSelector;
use crate::hooks::use_auth::use_auth;
use crate::mock_data::REPORTING_YEAR;
use crate::models::section::Section;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub section: Section,
    pub on_select: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let auth = use_auth();
    let (badge_class, badge_text) = if auth.is_authenticated() {
        ("badge badge-completed", "Signed in")
    } else {
        ("badge badge-missing", "Offline data")
    };

    html! {
        <header class="app-header">
            <div class="header-title">
                <h1>{props.section.label()}</h1>
                <p class="header-subtitle">{format!("Reporting year {REPORTING_YEAR}")}</p>
            </div>
            <div class="header-actions">
                <SectionSelector section={props.section} on_change={props.on_select.clone()} />
                <span class={badge_class}>{badge_text}</span>
            </div>
        </header>
    }
}
