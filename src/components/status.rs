use crate::hooks::use_fetch::FetchState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    #[prop_or(false)]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_else(|| AttrValue::from("Loading data..."))]
    pub loading_text: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Loading spinner or visible error banner for a data fetch.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if let Some(msg) = &props.error {
        let retry = props.on_retry.clone().map(|on_retry| {
            let onclick = Callback::from(move |_| on_retry.emit(()));
            html! {
                <button class="btn btn-small" {onclick}>{"Try again"}</button>
            }
        });

        return html! {
            <div class="status error" role="alert">
                <p>{"❌ Error: "}{msg}</p>
                {retry}
            </div>
        };
    }

    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{&props.loading_text}</p>
            </div>
        };
    }

    html! {}
}

/// Renders the banner matching a fetch state; nothing once loaded.
pub fn fetch_status<T>(state: &FetchState<T>, on_retry: Callback<()>) -> Html {
    html! {
        <Status
            loading={state.is_loading()}
            error={state.error().map(|e| AttrValue::from(e.to_string()))}
            on_retry={Some(on_retry)}
        />
    }
}
