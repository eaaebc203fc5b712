/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the ESG backend API
    pub const API_BASE_URL: &'static str = "http://localhost:5000/api";

    /// Maximum attempts for idempotent requests (first try included)
    pub const MAX_RETRY_ATTEMPTS: u32 = 3;

    /// Delay before the first retry; later retries back off from here
    pub const RETRY_INITIAL_DELAY_MS: u32 = 200;

    /// Delay before progress bars animate to their target width
    pub const PROGRESS_ANIMATION_DELAY_MS: u32 = 100;

    /// localStorage key holding the `{accessToken}` blob
    pub const TOKENS_STORAGE_KEY: &'static str = "tokens";

    /// localStorage key remembering the last active section
    pub const SECTION_STORAGE_KEY: &'static str = "activeSection";
}
