use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth::{client_for, use_auth};
use crate::models::error::AppError;
use crate::services::api::EsgClient;

#[derive(PartialEq, Debug)]
pub enum FetchState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

// Not derived: `T` itself need not be `Clone`.
impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Loaded(data) => FetchState::Loaded(Rc::clone(data)),
            FetchState::Error(msg) => FetchState::Error(msg.clone()),
        }
    }
}

impl<T> FetchState<T> {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(Rc::new(data)),
            Err(e) => FetchState::Error(e.to_string()),
        }
    }
}

/// Handle returned by `use_fetch`
pub struct FetchHandle<T> {
    pub state: FetchState<T>,
    pub refetch: Callback<()>,
}

/// Runs `fetch` against the API on mount, whenever credentials change, and
/// on `refetch`. Failures end up in `FetchState::Error` for the UI to show.
///
/// Only the closure passed on the first render is used.
#[hook]
pub fn use_fetch<T, F, Fut>(fetch: F) -> FetchHandle<T>
where
    T: 'static,
    F: Fn(EsgClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let auth = use_auth();
    let state = use_state(|| FetchState::Loading);
    let trigger = use_state(|| 0u32);
    let fetch = use_memo((), move |_| fetch);

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, auth), move |(_, auth)| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(FetchState::Loading);

            match client_for(auth) {
                Ok(client) => {
                    let request = (*fetch)(client);
                    spawn_local(async move {
                        let result = request.await;
                        if aborted_check.get() {
                            return; // Superseded by a newer fetch or unmounted
                        }
                        if let Err(e) = &result {
                            gloo::console::error!(format!("Fetch failed: {e}"));
                        }
                        state.set(FetchState::from_result(result));
                    });
                }
                Err(e) => state.set(FetchState::Error(e.to_string())),
            }

            move || {
                aborted.set(true);
            }
        });
    }

    let refetch = {
        let trigger = trigger.clone();
        Callback::from(move |_| trigger.set(*trigger + 1))
    };

    FetchHandle {
        state: (*state).clone(),
        refetch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let loaded = FetchState::from_result(Ok(3));
        assert_eq!(loaded.data().map(|d| **d), Some(3));

        let failed: FetchState<i32> =
            FetchState::from_result(Err(AppError::AuthError("no token".to_string())));
        assert_eq!(failed.error(), Some("Authentication error: no token"));
        assert!(failed.data().is_none());
    }

    #[test]
    fn test_loading_state() {
        let state: FetchState<()> = FetchState::Loading;
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }
}
