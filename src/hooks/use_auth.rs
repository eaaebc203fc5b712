use yew::prelude::*;

use crate::models::error::AppError;
use crate::services::{api::EsgClient, auth::AuthContext};

/// Credentials provided by the `ContextProvider<AuthContext>` at the app root.
/// Components rendered outside the provider see an anonymous context.
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_default()
}

/// Builds an API client for the current credentials.
pub fn client_for(auth: &AuthContext) -> Result<EsgClient, AppError> {
    EsgClient::new(auth.clone())
}
