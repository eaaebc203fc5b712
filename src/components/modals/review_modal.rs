use yew::prelude::*;

use super::ModalFrame;
use super::view_modal::entry_details;
use crate::models::emissions::PendingChange;

#[derive(Properties, PartialEq)]
pub struct ReviewModalProps {
    pub change: PendingChange,
    pub on_confirm: Callback<()>,
    /// Back to the form with the staged values.
    pub on_edit: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Confirmation step between the entry form and the table.
#[function_component(ReviewModal)]
pub fn review_modal(props: &ReviewModalProps) -> Html {
    let emit = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let (title, notice) = match &props.change {
        PendingChange::Add(_) => ("Review New Entry", "This entry will be added to the table.".to_string()),
        PendingChange::Replace { index, .. } => (
            "Review Changes",
            format!("Row {} will be replaced with these values.", index + 1),
        ),
    };

    html! {
        <ModalFrame title={title} on_close={props.on_cancel.clone()}>
            <p class="review-notice">{notice}</p>
            {entry_details(props.change.entry())}
            <div class="modal-action">
                <button class="btn" onclick={emit(&props.on_cancel)}>{"Cancel"}</button>
                <button class="btn" onclick={emit(&props.on_edit)}>{"Edit"}</button>
                <button class="btn btn-primary" onclick={emit(&props.on_confirm)}>{"Confirm"}</button>
            </div>
        </ModalFrame>
    }
}
