use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::components::status::{Status, fetch_status};
use crate::hooks::use_auth::{client_for, use_auth};
use crate::hooks::use_fetch::use_fetch;
use crate::mock_data;
use crate::models::error::AppError;
use crate::models::targets::{CustomTarget, NewCustomTarget, NewInitiative};
use crate::services::api::EsgClient;
use crate::utils::format::{percent, thousands};
use crate::utils::metrics::progress_percent;

#[function_component(TargetsSection)]
pub fn targets_section() -> Html {
    let targets = use_fetch(|client: EsgClient| async move { client.fetch_custom_targets().await });
    let initiatives = use_fetch(|client: EsgClient| async move { client.fetch_initiatives().await });

    html! {
        <div class="section targets">
            <div class="card">
                <h3>{"Science-Based Targets"}</h3>
                { for mock_data::sbti_targets().into_iter().map(|target| {
                    let progress = progress_percent(target.achieved, target.reduction_goal);
                    html! {
                        <div class="target-row" key={target.name}>
                            <div class="target-header">
                                <strong>{target.name}</strong>
                                <span class="badge">{target.label}</span>
                            </div>
                            <p class="form-hint">
                                {format!(
                                    "{}% reduction by {} against {} · {} achieved",
                                    target.reduction_goal,
                                    target.target_year,
                                    target.baseline_year,
                                    percent(target.achieved),
                                )}
                            </p>
                            <ProgressBar percent={progress} />
                        </div>
                    }
                }) }
            </div>

            <div class="card">
                <h3>{"Custom Targets"}</h3>
                {fetch_status(&targets.state, targets.refetch.clone())}
                if let Some(list) = targets.state.data() {
                    {custom_targets(list)}
                }
                <CustomTargetForm on_saved={targets.refetch.clone()} />
            </div>

            <div class="card">
                <h3>{"Reduction Initiatives"}</h3>
                {fetch_status(&initiatives.state, initiatives.refetch.clone())}
                if let Some(list) = initiatives.state.data() {
                    if list.is_empty() {
                        <p class="table-empty">{"No initiatives yet."}</p>
                    } else {
                        <ul class="initiative-list">
                            { for list.iter().map(|initiative| html! {
                                <li key={initiative.id.clone()}>
                                    <div class="target-header">
                                        <strong>{&initiative.title}</strong>
                                        <span class={classes!("badge", initiative.status.css_class())}>
                                            {initiative.status.label()}
                                        </span>
                                    </div>
                                    if !initiative.description.is_empty() {
                                        <p>{&initiative.description}</p>
                                    }
                                    <p class="form-hint">
                                        {format!("{} · expected {} tCO₂e/yr", initiative.category, thousands(initiative.expected_reduction, 1))}
                                        if let Some(start) = initiative.start_date {
                                            {format!(" · from {}", start.format("%d %b %Y"))}
                                        }
                                    </p>
                                </li>
                            }) }
                        </ul>
                    }
                }
                <InitiativeForm on_saved={initiatives.refetch.clone()} />
            </div>
        </div>
    }
}

/// Headline for the first target, then the full list.
fn custom_targets(list: &[CustomTarget]) -> Html {
    let Some(primary) = list.first() else {
        return html! { <p class="table-empty">{"No custom targets yet. Create one below."}</p> };
    };

    html! {
        <>
            <div class="target-highlight">
                <span>{"Primary target"}</span>
                <strong>{&primary.name}</strong>
                <span>{format!("{} reduction by {}", percent(primary.reduction_goal_percent()), primary.target_year)}</span>
            </div>
            { for list.iter().map(|target| html! {
                <div class="target-row" key={target.id.clone()}>
                    <div class="target-header">
                        <strong>{&target.name}</strong>
                        <span>{format!("{}–{}", target.baseline_year, target.target_year)}</span>
                    </div>
                    <p class="form-hint">
                        {format!(
                            "{} → {} {} (now {})",
                            thousands(target.baseline_value, 0),
                            thousands(target.target_value, 0),
                            target.unit,
                            thousands(target.current_value, 0),
                        )}
                    </p>
                    <ProgressBar percent={target.progress_percent()} />
                </div>
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct FormProps {
    /// Fired after the API accepted the new record.
    on_saved: Callback<()>,
}

#[function_component(InitiativeForm)]
fn initiative_form(props: &FormProps) -> Html {
    let onsubmit = use_submit(props.on_saved.clone(), |form| {
        NewInitiative::from_form(
            &field(form, "title"),
            &field(form, "description"),
            &field(form, "category"),
            &field(form, "expected_reduction"),
        )
        .map(|body| {
            move |client: EsgClient| async move { client.add_initiative(&body).await.map(|_| ()) }
        })
    });

    html! {
        <form class="inline-form" onsubmit={onsubmit.submit}>
            <h4>{"Add initiative"}</h4>
            <input name="title" type="text" placeholder="Title" />
            <input name="category" type="text" placeholder="Category, e.g. Energy" />
            <input name="expected_reduction" type="number" step="any" min="0" placeholder="Expected reduction (tCO₂e/yr)" />
            <textarea name="description" placeholder="Description" />
            <Status error={onsubmit.error} />
            <button type="submit" class="btn btn-primary" disabled={onsubmit.saving}>
                {if onsubmit.saving { "Saving..." } else { "Add Initiative" }}
            </button>
        </form>
    }
}

#[function_component(CustomTargetForm)]
fn custom_target_form(props: &FormProps) -> Html {
    let onsubmit = use_submit(props.on_saved.clone(), |form| {
        NewCustomTarget::from_form(
            &field(form, "name"),
            &field(form, "baseline_year"),
            &field(form, "target_year"),
            &field(form, "baseline_value"),
            &field(form, "target_value"),
        )
        .map(|body| {
            move |client: EsgClient| async move { client.add_custom_target(&body).await.map(|_| ()) }
        })
    });

    html! {
        <form class="inline-form" onsubmit={onsubmit.submit}>
            <h4>{"New custom target"}</h4>
            <input name="name" type="text" placeholder="Name" />
            <input name="baseline_year" type="number" placeholder="Baseline year" />
            <input name="target_year" type="number" placeholder="Target year" />
            <input name="baseline_value" type="number" step="any" min="0" placeholder="Baseline (tCO₂e)" />
            <input name="target_value" type="number" step="any" min="0" placeholder="Target (tCO₂e)" />
            <Status error={onsubmit.error} />
            <button type="submit" class="btn btn-primary" disabled={onsubmit.saving}>
                {if onsubmit.saving { "Saving..." } else { "Create Target" }}
            </button>
        </form>
    }
}

struct SubmitHandle {
    submit: Callback<SubmitEvent>,
    saving: bool,
    error: Option<AttrValue>,
}

/// Form submission that parses the fields, posts them, and reports failures
/// inline. The form is cleared and `on_saved` fires on success.
#[hook]
fn use_submit<P, R, Fut>(on_saved: Callback<()>, parse: P) -> SubmitHandle
where
    P: Fn(&FormData) -> Result<R, AppError> + 'static,
    R: FnOnce(EsgClient) -> Fut + 'static,
    Fut: Future<Output = Result<(), AppError>> + 'static,
{
    let auth = use_auth();
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let parse = use_memo((), move |_| parse);

    let submit = {
        let saving = saving.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();
            let Ok(data) = FormData::new_with_form(&form) else {
                error.set(Some("Could not read the form".to_string()));
                return;
            };

            let request = match (*parse)(&data).and_then(|req| Ok((req, client_for(&auth)?))) {
                Ok((req, client)) => req(client),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            saving.set(true);
            let saving = saving.clone();
            let error = error.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match request.await {
                    Ok(()) => {
                        gloo::console::log!("Saved");
                        form.reset();
                        error.set(None);
                        on_saved.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Save failed: {e}"));
                        error.set(Some(e.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    SubmitHandle {
        submit,
        saving: *saving,
        error: (*error).clone().map(AttrValue::from),
    }
}

fn field(form: &FormData, name: &str) -> String {
    form.get(name).as_string().unwrap_or_default()
}
