use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::section::Section;

#[derive(Properties, PartialEq)]
pub struct SectionSelectorProps {
    pub section: Section,
    pub on_change: Callback<Section>,
}

/// Compact section dropdown used when the sidebar is hidden.
#[function_component(SectionSelector)]
pub fn section_selector(props: &SectionSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(section) = target.value().parse::<Section>() {
                callback.emit(section);
            }
        })
    };

    html! {
        <select
            class="section-selector"
            onchange={on_change}
            aria-label="Select dashboard section"
        >
            {
                Section::all().iter().map(|s| {
                    let selected = *s == props.section;
                    html! {
                        <option value={s.slug()} {selected}>{s.label()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
