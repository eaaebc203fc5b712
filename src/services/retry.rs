use crate::config::Config;
use crate::models::error::AppError;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// Exponential backoff settings for idempotent requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay_ms: u32,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Config::MAX_RETRY_ATTEMPTS,
            initial_delay_ms: Config::RETRY_INITIAL_DELAY_MS,
            multiplier: 5,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given failed attempt (1-based).
    pub fn delay_for(&self, attempt: u32) -> u32 {
        let factor = self
            .multiplier
            .saturating_pow(attempt.saturating_sub(1));
        self.initial_delay_ms.saturating_mul(factor)
    }

    /// Runs `operation` until it succeeds, fails with a non-retryable error,
    /// or the attempts run out. The last error is returned.
    pub async fn run<F, Fut, T>(&self, label: &str, mut operation: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    let delay = self.delay_for(attempt);
                    gloo::console::warn!(format!(
                        "{label}: {e}, retrying in {delay}ms (attempt {attempt}/{max_attempts})"
                    ));
                    TimeoutFuture::new(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_delays() {
        let policy = RetryPolicy {
            max_attempts: 4,
            initial_delay_ms: 100,
            multiplier: 5,
        };
        assert_eq!(policy.delay_for(1), 100);
        assert_eq!(policy.delay_for(2), 500);
        assert_eq!(policy.delay_for(3), 2500);
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy {
            max_attempts: 40,
            initial_delay_ms: 1000,
            multiplier: 10,
        };
        assert_eq!(policy.delay_for(30), u32::MAX);
    }

    #[test]
    fn test_retryable_errors() {
        assert!(AppError::RateLimited.is_retryable());
        assert!(
            AppError::ServerError {
                status: 503,
                body: "busy".to_string()
            }
            .is_retryable()
        );
        assert!(!AppError::ApiError("Client error 400: bad".to_string()).is_retryable());
        assert!(!AppError::AuthError("expired".to_string()).is_retryable());
    }
}
