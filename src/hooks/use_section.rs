use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;
use crate::models::section::Section;

/// Handle returned by `use_section` hook
#[derive(Clone, PartialEq)]
pub struct SectionHandle {
    pub section: Section,
    pub set_section: Callback<Section>,
}

/// Active-section switch, remembered across reloads
#[hook]
pub fn use_section() -> SectionHandle {
    let section = use_state(|| load_section().unwrap_or_default());

    {
        let section_value = *section;
        use_effect_with(section_value, move |section| {
            save_section(*section);
            || ()
        });
    }

    let set_section = {
        let section = section.clone();
        Callback::from(move |next| section.set(next))
    };

    SectionHandle {
        section: *section,
        set_section,
    }
}

fn load_section() -> Option<Section> {
    gloo_storage::LocalStorage::get(Config::SECTION_STORAGE_KEY).ok()
}

fn save_section(section: Section) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::SECTION_STORAGE_KEY, section) {
        gloo::console::warn!(format!("Failed to save active section: {e:?}"));
    }
}
