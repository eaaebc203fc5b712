use yew::prelude::*;

use crate::components::emissions_table::EmissionsTable;
use crate::components::modals::{EntryModal, ReviewModal, ViewModal};
use crate::components::status::Status;
use crate::mock_data::REPORTING_YEAR;
use crate::models::emissions::{
    EmissionEntry, EmissionsLedger, EntryDraft, FuelType, PendingChange, Scope,
};
use crate::models::review::ReviewFlow;
use crate::utils::format::tonnes;

/// Which modal, if any, sits over the table.
#[derive(Debug, Clone, PartialEq)]
enum ModalState {
    Closed,
    /// The entry form; `target` is the row being edited.
    Form {
        draft: EntryDraft,
        target: Option<usize>,
    },
    View(usize),
}

#[derive(Properties, PartialEq)]
pub struct EmissionsManagerProps {
    pub title: AttrValue,
    pub scope: Scope,
    pub entries: Vec<EmissionEntry>,
}

/// Entry table with add/edit → review → confirm. Rows only change on confirm.
#[function_component(EmissionsManager)]
pub fn emissions_manager(props: &EmissionsManagerProps) -> Html {
    let ledger = use_state(|| EmissionsLedger::new(props.entries.clone()));
    let flow = use_state(ReviewFlow::<PendingChange>::default);
    let modal = use_state(|| ModalState::Closed);
    let error = use_state(|| None::<String>);

    let on_add = {
        let flow = flow.clone();
        let modal = modal.clone();
        let scope = props.scope;
        Callback::from(move |_: MouseEvent| {
            start_round(&flow);
            modal.set(ModalState::Form {
                draft: blank_draft(scope),
                target: None,
            });
        })
    };

    let on_edit = {
        let ledger = ledger.clone();
        let flow = flow.clone();
        let modal = modal.clone();
        Callback::from(move |index: usize| {
            if let Some(entry) = ledger.get(index) {
                start_round(&flow);
                modal.set(ModalState::Form {
                    draft: EntryDraft::from_entry(entry),
                    target: Some(index),
                });
            }
        })
    };

    let on_view = {
        let modal = modal.clone();
        Callback::from(move |index: usize| modal.set(ModalState::View(index)))
    };

    let on_delete = {
        let ledger = ledger.clone();
        let error = error.clone();
        Callback::from(move |index: usize| {
            let mut next = (*ledger).clone();
            match next.remove(index) {
                Ok(_) => ledger.set(next),
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |()| modal.set(ModalState::Closed))
    };

    let on_form_submit = {
        let flow = flow.clone();
        let modal = modal.clone();
        Callback::from(move |entry: EmissionEntry| {
            let ModalState::Form { target, .. } = &*modal else {
                return;
            };
            let change = match *target {
                Some(index) => PendingChange::Replace { index, entry },
                None => PendingChange::Add(entry),
            };
            let mut next = (*flow).clone();
            if next.submit(change) {
                flow.set(next);
                modal.set(ModalState::Closed);
            }
        })
    };

    let on_review_edit = {
        let flow = flow.clone();
        let modal = modal.clone();
        Callback::from(move |()| {
            let mut next = (*flow).clone();
            if let Some(change) = next.edit() {
                let target = match &change {
                    PendingChange::Replace { index, .. } => Some(*index),
                    PendingChange::Add(_) => None,
                };
                modal.set(ModalState::Form {
                    draft: EntryDraft::from_entry(change.entry()),
                    target,
                });
                flow.set(next);
            }
        })
    };

    let on_confirm = {
        let flow = flow.clone();
        let ledger = ledger.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let mut next = (*flow).clone();
            if let Some(change) = next.confirm() {
                let mut updated = (*ledger).clone();
                match updated.apply(change) {
                    Ok(()) => {
                        ledger.set(updated);
                        error.set(None);
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Failed to apply entry: {e}"));
                        error.set(Some(e.to_string()));
                    }
                }
                flow.set(next);
            }
        })
    };

    let on_review_cancel = {
        let flow = flow.clone();
        Callback::from(move |()| {
            let mut next = (*flow).clone();
            next.cancel();
            flow.set(next);
        })
    };

    let overlay = if let Some(change) = flow.pending() {
        html! {
            <ReviewModal
                change={change.clone()}
                {on_confirm}
                on_edit={on_review_edit}
                on_cancel={on_review_cancel}
            />
        }
    } else {
        match &*modal {
            ModalState::Form { draft, target } => html! {
                <EntryModal
                    scope={props.scope}
                    initial={draft.clone()}
                    editing={target.is_some()}
                    on_submit={on_form_submit}
                    on_close={on_close}
                />
            },
            ModalState::View(index) => match ledger.get(*index) {
                Some(entry) => html! { <ViewModal entry={entry.clone()} {on_close} /> },
                None => html! {},
            },
            ModalState::Closed => html! {},
        }
    };

    html! {
        <div class="card emissions-manager">
            <div class="card-header">
                <h3>{&props.title}</h3>
                <button class="btn btn-primary" onclick={on_add}>{"+ Add Entry"}</button>
            </div>
            if flow.is_committed() {
                <p class="notice success">{"Entry saved."}</p>
            }
            <Status error={(*error).clone().map(AttrValue::from)} />
            <EmissionsTable
                entries={ledger.entries().to_vec()}
                {on_view}
                {on_edit}
                {on_delete}
            />
            <div class="table-footer">
                <span>{format!("{} entries", ledger.len())}</span>
                <span class="fuel-totals">
                    { for ledger.totals_by_fuel().into_iter().map(|(fuel, total)| html! {
                        <span class="badge" key={fuel.code()}>{format!("{}: {}", fuel.label(), tonnes(total))}</span>
                    }) }
                </span>
                <strong>{format!("Total: {}", tonnes(ledger.total_tonnes()))}</strong>
            </div>
            {overlay}
        </div>
    }
}

/// Clears the "saved" state left by the previous confirm.
fn start_round(flow: &UseStateHandle<ReviewFlow<PendingChange>>) {
    let mut next = (**flow).clone();
    if next.reset() {
        flow.set(next);
    }
}

/// Empty form preset to the reporting year and the scope's first source.
fn blank_draft(scope: Scope) -> EntryDraft {
    EntryDraft {
        year: REPORTING_YEAR.to_string(),
        fuel_type: FuelType::options(scope)
            .first()
            .map(|fuel| fuel.code().to_string())
            .unwrap_or_default(),
        ..EntryDraft::default()
    }
}
