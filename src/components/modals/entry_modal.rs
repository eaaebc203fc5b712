use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::ModalFrame;
use crate::models::emissions::{EmissionEntry, EntryDraft, FuelType, MONTH_NAMES, Scope};

#[derive(Properties, PartialEq)]
pub struct EntryModalProps {
    /// Restricts the fuel/source options.
    pub scope: Scope,
    /// Values the form opens with.
    pub initial: EntryDraft,
    #[prop_or(false)]
    pub editing: bool,
    pub on_submit: Callback<EmissionEntry>,
    pub on_close: Callback<()>,
}

/// Add/edit form for an emission entry. Emits a validated entry; the caller
/// decides what happens next.
#[function_component(EntryModal)]
pub fn entry_modal(props: &EntryModalProps) -> Html {
    let draft = use_state(|| props.initial.clone());
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let draft = draft.clone();
        let error = error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate() {
                Ok(entry) => {
                    error.set(None);
                    on_submit.emit(entry);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let on_month = on_select(&draft, |d, v| d.month = v);
    let on_fuel = on_select(&draft, |d, v| d.fuel_type = v);
    let on_year = on_text(&draft, |d, v| d.year = v);
    let on_facility = on_text(&draft, |d, v| d.facility_id = v);
    let on_quantity = on_text(&draft, |d, v| d.quantity = v);
    let on_factor = on_text(&draft, |d, v| d.emission_factor = v);

    let on_custom = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.use_custom = input.checked();
            draft.set(next);
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let selected_fuel = draft.fuel_type.parse::<FuelType>().ok();
    let default_factor_hint = selected_fuel.map(|fuel| {
        format!(
            "Default: {} kg CO₂e per {}",
            fuel.default_factor(),
            fuel.unit()
        )
    });
    let title = if props.editing { "Edit Entry" } else { "Add Entry" };

    html! {
        <ModalFrame title={title} on_close={props.on_close.clone()}>
            <form class="modal-form" {onsubmit}>
                <div class="form-row">
                    <label class="form-control">
                        <span>{"Month"}</span>
                        <select onchange={on_month}>
                            <option value="" selected={draft.month.is_empty()}>{"Select month"}</option>
                            { for MONTH_NAMES.iter().enumerate().map(|(i, name)| {
                                let value = (i + 1).to_string();
                                let selected = draft.month == value;
                                html! { <option {value} {selected}>{*name}</option> }
                            }) }
                        </select>
                    </label>
                    <label class="form-control">
                        <span>{"Year"}</span>
                        <input type="number" value={draft.year.clone()} oninput={on_year} />
                    </label>
                </div>

                <label class="form-control">
                    <span>{"Facility ID"}</span>
                    <input
                        type="text"
                        placeholder="e.g. FAC-001"
                        value={draft.facility_id.clone()}
                        oninput={on_facility}
                    />
                </label>

                <label class="form-control">
                    <span>{"Fuel / Source"}</span>
                    <select onchange={on_fuel}>
                        <option value="" selected={draft.fuel_type.is_empty()}>{"Select type"}</option>
                        { for FuelType::options(props.scope).into_iter().map(|fuel| {
                            let selected = draft.fuel_type == fuel.code();
                            html! { <option value={fuel.code()} {selected}>{fuel.label()}</option> }
                        }) }
                    </select>
                </label>

                <label class="form-control">
                    <span>
                        {"Quantity"}
                        if let Some(fuel) = selected_fuel {
                            {format!(" ({})", fuel.unit())}
                        }
                    </span>
                    <input
                        type="number"
                        step="any"
                        min="0"
                        value={draft.quantity.clone()}
                        oninput={on_quantity}
                    />
                </label>

                <label class="form-check">
                    <input type="checkbox" checked={draft.use_custom} onchange={on_custom} />
                    <span>{"Use custom emission factor"}</span>
                </label>

                if draft.use_custom {
                    <label class="form-control">
                        <span>{"Custom factor (kg CO₂e/unit)"}</span>
                        <input
                            type="number"
                            step="any"
                            min="0"
                            value={draft.emission_factor.clone()}
                            oninput={on_factor}
                        />
                    </label>
                } else if let Some(hint) = default_factor_hint {
                    <p class="form-hint">{hint}</p>
                }

                if let Some(msg) = (*error).clone() {
                    <p class="form-error" role="alert">{msg}</p>
                }

                <div class="modal-action">
                    <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="btn btn-primary">{"Review"}</button>
                </div>
            </form>
        </ModalFrame>
    }
}

fn on_text(
    draft: &UseStateHandle<EntryDraft>,
    apply: fn(&mut EntryDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

fn on_select(
    draft: &UseStateHandle<EntryDraft>,
    apply: fn(&mut EntryDraft, String),
) -> Callback<Event> {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, select.value());
        draft.set(next);
    })
}
