use crate::config::Config;
use crate::models::{
    error::AppError,
    targets::{CustomTarget, DashboardData, Initiative, NewCustomTarget, NewInitiative},
};
use crate::services::{auth::AuthContext, retry::RetryPolicy};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

// ENDPOINTS
const INITIATIVES_PATH: &str = "initiatives/getInitiatives";
const ADD_INITIATIVE_PATH: &str = "initiatives/addInitiative";
const DASHBOARD_PATH: &str = "dashboard/getDashboardData";
const CUSTOM_TARGETS_PATH: &str = "custom-targets/getCustomTargets";
const ADD_CUSTOM_TARGET_PATH: &str = "custom-targets/addCustomTarget";

// API CONFIGURATION
/// Configuration for the ESG API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    retry: RetryPolicy,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    retry: Option<RetryPolicy>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the retry policy for GET requests.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
            retry: self.retry.unwrap_or_default(),
        }
    }
}

// API RESPONSE TYPES
/// Common `{success, message, ...payload}` response wrapper.
///
/// The payload keys are kept as raw JSON and only decoded once `success`
/// has been checked, so schema errors keep serde's message.
#[derive(Deserialize, Debug)]
pub(crate) struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    payload: serde_json::Value,
}

impl Envelope {
    /// Turns a `success: false` body or an undecodable payload into an error.
    pub(crate) fn into_result<T: DeserializeOwned>(self) -> Result<T, AppError> {
        if !self.success {
            return Err(AppError::ApiError(
                self.message
                    .unwrap_or_else(|| "Request was not successful".to_string()),
            ));
        }
        serde_json::from_value(self.payload)
            .map_err(|e| AppError::DataError(format!("Invalid response payload: {e}")))
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct InitiativesPayload {
    initiatives: Vec<Initiative>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct InitiativePayload {
    initiative: Initiative,
}

#[derive(Deserialize, Debug)]
pub(crate) struct DashboardPayload {
    data: DashboardData,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TargetsPayload {
    targets: Vec<CustomTarget>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TargetPayload {
    target: CustomTarget,
}

/// Creates an error based on HTTP status code.
pub fn error_for_status(status: u16, body: &str) -> AppError {
    match status {
        429 => AppError::RateLimited,
        401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ServerError {
            status,
            body: body.to_string(),
        },
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

// ESG CLIENT
/// HTTP client for the ESG backend.
#[derive(Debug, Clone)]
pub struct EsgClient {
    http: reqwest::Client,
    config: ApiConfig,
    auth: AuthContext,
}

impl EsgClient {
    /// Creates a client with default configuration.
    pub fn new(auth: AuthContext) -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default(), auth)
    }

    /// Creates a client with the specified configuration.
    pub fn with_config(config: ApiConfig, auth: AuthContext) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config, auth })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches all initiatives.
    pub async fn fetch_initiatives(&self) -> Result<Vec<Initiative>, AppError> {
        let payload: InitiativesPayload = self.get(INITIATIVES_PATH).await?;
        Ok(payload.initiatives)
    }

    /// Creates an initiative and returns the stored record.
    pub async fn add_initiative(&self, initiative: &NewInitiative) -> Result<Initiative, AppError> {
        let payload: InitiativePayload = self.post(ADD_INITIATIVE_PATH, initiative).await?;
        Ok(payload.initiative)
    }

    /// Fetches the overview headline figures.
    pub async fn fetch_dashboard_data(&self) -> Result<DashboardData, AppError> {
        let payload: DashboardPayload = self.get(DASHBOARD_PATH).await?;
        Ok(payload.data)
    }

    /// Fetches user-defined targets.
    pub async fn fetch_custom_targets(&self) -> Result<Vec<CustomTarget>, AppError> {
        let payload: TargetsPayload = self.get(CUSTOM_TARGETS_PATH).await?;
        Ok(payload.targets)
    }

    /// Creates a custom target and returns the stored record.
    pub async fn add_custom_target(
        &self,
        target: &NewCustomTarget,
    ) -> Result<CustomTarget, AppError> {
        let payload: TargetPayload = self.post(ADD_CUSTOM_TARGET_PATH, target).await?;
        Ok(payload.target)
    }

    /// GET with retries on rate limiting and server errors.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.config.endpoint(path);
        self.config
            .retry
            .run(path, || async {
                let token = self.auth.bearer()?;
                let request = self.http.get(&url).bearer_auth(token);
                self.execute(path, request).await
            })
            .await
    }

    /// POST without retries, since creation is not idempotent.
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.config.endpoint(path);
        let token = self.auth.bearer()?;
        let request = self.http.post(&url).bearer_auth(token).json(body);
        self.execute(path, request).await
    }

    /// Sends a request and unwraps the response envelope.
    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AppError> {
        let response = request.send().await.map_err(|e| {
            let error = self.classify_error(e);
            gloo::console::error!(format!("{path}: {error}"));
            error
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            let error = error_for_status(status.as_u16(), &body);
            gloo::console::error!(format!("{path}: {error}"));
            return Err(error);
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        gloo::console::log!(format!("{path}: ok"));
        envelope.into_result()
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::API_BASE_URL);
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = ApiConfig::builder()
            .base_url("https://esg.example.com/api/")
            .build();
        assert_eq!(
            config.endpoint("/dashboard/getDashboardData"),
            "https://esg.example.com/api/dashboard/getDashboardData"
        );
        assert_eq!(
            config.endpoint(INITIATIVES_PATH),
            "https://esg.example.com/api/initiatives/getInitiatives"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(error_for_status(429, ""), AppError::RateLimited));
        assert!(matches!(error_for_status(401, ""), AppError::AuthError(_)));
        assert!(matches!(error_for_status(404, "x"), AppError::NotFound(_)));
        assert!(error_for_status(503, "down").is_retryable());
        assert!(!error_for_status(422, "bad").is_retryable());
    }

    #[test]
    fn test_initiatives_envelope() {
        let json = r#"{
            "success": true,
            "initiatives": [
                {"_id": "a1", "title": "Solar PV", "status": "completed", "expectedReduction": 80},
                {"_id": "a2", "title": "Fleet EVs"}
            ]
        }"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let initiatives = envelope.into_result::<InitiativesPayload>().unwrap().initiatives;
        assert_eq!(initiatives.len(), 2);
        assert_eq!(initiatives[0].expected_reduction, 80.0);
    }

    #[test]
    fn test_unsuccessful_envelope_carries_message() {
        let json = r#"{"success": false, "message": "Token expired"}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let err = envelope.into_result::<TargetsPayload>().unwrap_err();
        assert_eq!(err.to_string(), "API error: Token expired");
    }

    #[test]
    fn test_payload_schema_error_keeps_serde_message() {
        let json = r#"{"success": true, "initiative": {"_id": "a1", "status": "planned"}}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let err = envelope.into_result::<InitiativePayload>().unwrap_err();
        assert!(matches!(err, AppError::DataError(_)));
        assert!(err.to_string().contains("missing field `title`"), "{err}");
    }

    #[test]
    fn test_server_status_is_structured() {
        match error_for_status(502, "bad gateway") {
            AppError::ServerError { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "bad gateway");
            }
            other => panic!("unexpected error: {other}"),
        }
        // Wording of other errors does not make them retryable
        assert!(!AppError::ApiError("Server error 503".to_string()).is_retryable());
    }

    #[test]
    fn test_missing_payload_is_a_data_error() {
        let json = r#"{"success": true}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert!(matches!(
            envelope.into_result::<DashboardPayload>(),
            Err(AppError::DataError(_))
        ));
    }

    #[test]
    fn test_dashboard_envelope() {
        let json = r#"{"success": true, "data": {"totalEmissions": 5230.5, "scope1": 1200}}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let data = envelope.into_result::<DashboardPayload>().unwrap().data;
        assert_eq!(data.total_emissions, 5230.5);
        assert_eq!(data.scope1, 1200.0);
    }
}
