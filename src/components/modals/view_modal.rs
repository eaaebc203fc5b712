use yew::prelude::*;

use super::ModalFrame;
use crate::models::emissions::EmissionEntry;
use crate::utils::format::{thousands, tonnes};

#[derive(Properties, PartialEq)]
pub struct ViewModalProps {
    pub entry: EmissionEntry,
    pub on_close: Callback<()>,
}

/// Read-only details of a table row.
#[function_component(ViewModal)]
pub fn view_modal(props: &ViewModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <ModalFrame title="Entry Details" on_close={props.on_close.clone()}>
            {entry_details(&props.entry)}
            <div class="modal-action">
                <button class="btn" onclick={close}>{"Close"}</button>
            </div>
        </ModalFrame>
    }
}

/// Definition list of an entry's fields and its computed emissions.
pub fn entry_details(entry: &EmissionEntry) -> Html {
    let factor_source = if entry.use_custom { "custom" } else { "default" };

    html! {
        <dl class="entry-details">
            <dt>{"Period"}</dt>
            <dd>{entry.period()}</dd>
            <dt>{"Facility"}</dt>
            <dd>{&entry.facility_id}</dd>
            <dt>{"Fuel / Source"}</dt>
            <dd>{format!("{} ({})", entry.fuel_type.label(), entry.fuel_type.scope().label())}</dd>
            <dt>{"Quantity"}</dt>
            <dd>{format!("{} {}", thousands(entry.quantity, 2), entry.fuel_type.unit())}</dd>
            <dt>{"Emission factor"}</dt>
            <dd>{format!("{:.3} kg CO₂e/{} ({factor_source})", entry.effective_factor(), entry.fuel_type.unit())}</dd>
            <dt>{"Emissions"}</dt>
            <dd class="emphasis">{tonnes(entry.emissions_tonnes())}</dd>
        </dl>
    }
}
