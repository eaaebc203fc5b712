use gloo_storage::Storage;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::error::AppError;

/// Shape of the `"tokens"` localStorage blob.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBlob {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Credentials for API calls, read once at startup and handed down through
/// a Yew context rather than re-read from storage at each call site.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthContext {
    access_token: Option<String>,
}

impl AuthContext {
    pub fn new(access_token: Option<String>) -> Self {
        Self {
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Parses a raw `"tokens"` blob.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let blob: TokenBlob = serde_json::from_str(raw)
            .map_err(|e| AppError::AuthError(format!("Malformed token blob: {e}")))?;
        Ok(Self::new(blob.access_token))
    }

    /// Reads the token blob from localStorage. A missing or unreadable blob
    /// yields an anonymous context.
    pub fn load() -> Self {
        match gloo_storage::LocalStorage::get::<TokenBlob>(Config::TOKENS_STORAGE_KEY) {
            Ok(blob) => Self::new(blob.access_token),
            Err(e) => {
                gloo::console::warn!(format!("No stored access token: {e}"));
                Self::anonymous()
            }
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// The token for a bearer `Authorization` header.
    pub fn bearer(&self) -> Result<&str, AppError> {
        self.access_token()
            .ok_or_else(|| AppError::AuthError("Not signed in: no access token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_reads_access_token() {
        let auth = AuthContext::from_json(r#"{"accessToken":"abc.def","refreshToken":"x"}"#).unwrap();
        assert_eq!(auth.access_token(), Some("abc.def"));
        assert!(auth.is_authenticated());
        assert_eq!(auth.bearer().unwrap(), "abc.def");
    }

    #[test]
    fn test_blank_token_is_anonymous() {
        let auth = AuthContext::from_json(r#"{"accessToken":"  "}"#).unwrap();
        assert!(!auth.is_authenticated());
        assert!(matches!(auth.bearer(), Err(AppError::AuthError(_))));
    }

    #[test]
    fn test_malformed_blob_is_an_error() {
        assert!(AuthContext::from_json("not json").is_err());
        assert!(!AuthContext::from_json("{}").unwrap().is_authenticated());
    }
}
