// ABOUTME: Retry policy with exponential backoff for service API calls
// ABOUTME: Retries transport failures and retryable HTTP statuses, bounded attempts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Retry policy for service calls
//!
//! The source mobile app performed every network call exactly once with no
//! retry; a transient failure surfaced straight to the user. Here retries
//! are an explicit, bounded policy: transport errors and retryable statuses
//! (429, 503) back off exponentially up to a configured attempt count, and
//! every other response is handed back to the caller untouched.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::warn;

use crate::errors::{CoachError, CoachResult};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (1 = no retries)
    pub max_attempts: u32,
    /// Initial backoff delay in milliseconds, doubled per retry
    pub initial_backoff_ms: u64,
    /// HTTP status codes that trigger a retry
    pub retryable_status_codes: Vec<StatusCode>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 500,
            retryable_status_codes: vec![
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::SERVICE_UNAVAILABLE,
            ],
        }
    }
}

/// Exponent cap keeping the doubling factor within u64
const MAX_BACKOFF_EXP: u32 = 16;

/// Upper bound on a single backoff delay
const MAX_BACKOFF_MS: u64 = 60_000;

impl RetryConfig {
    /// Policy that performs each call exactly once
    #[must_use]
    pub const fn no_retries() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff_ms: 0,
            retryable_status_codes: Vec::new(),
        }
    }

    /// Delay before the attempt after `attempt`, doubled per retry
    ///
    /// Saturates instead of overflowing and is clamped to
    /// [`MAX_BACKOFF_MS`], so arbitrarily large configured attempt counts
    /// stay safe.
    fn backoff_ms(&self, attempt: u32) -> u64 {
        let factor = 1_u64 << attempt.saturating_sub(1).min(MAX_BACKOFF_EXP);
        self.initial_backoff_ms
            .saturating_mul(factor)
            .min(MAX_BACKOFF_MS)
    }
}

/// Send a request with retries, rebuilding it per attempt
///
/// Multipart bodies are not replayable, so the caller supplies a builder
/// closure producing a fresh [`RequestBuilder`] for each attempt. Responses
/// with non-retryable statuses (including other errors) are returned to the
/// caller for status handling and error-body decoding.
///
/// # Errors
///
/// Returns [`CoachError::Unreachable`] when the transport fails on the
/// final attempt, and the last retryable response is returned as `Ok` when
/// attempts run out so the caller maps it like any other error status.
pub async fn send_with_retry<F>(
    service: &'static str,
    config: &RetryConfig,
    build: F,
) -> CoachResult<Response>
where
    F: Fn() -> RequestBuilder + Send + Sync,
{
    let mut attempt: u32 = 1;
    loop {
        let outcome = build().send().await;
        let last_attempt = attempt >= config.max_attempts;

        match outcome {
            Ok(response) => {
                let status = response.status();
                if !config.retryable_status_codes.contains(&status) || last_attempt {
                    return Ok(response);
                }
                warn!(
                    service,
                    status = status.as_u16(),
                    attempt,
                    max_attempts = config.max_attempts,
                    "retryable status from service"
                );
            }
            Err(err) => {
                if last_attempt {
                    return Err(CoachError::Unreachable {
                        service,
                        reason: err.to_string(),
                    });
                }
                warn!(
                    service,
                    attempt,
                    max_attempts = config.max_attempts,
                    error = %err,
                    "transport error, retrying"
                );
            }
        }

        tokio::time::sleep(Duration::from_millis(config.backoff_ms(attempt))).await;
        attempt += 1;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_retries_rate_limit_and_unavailable() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert!(config
            .retryable_status_codes
            .contains(&StatusCode::TOO_MANY_REQUESTS));
        assert!(config
            .retryable_status_codes
            .contains(&StatusCode::SERVICE_UNAVAILABLE));
        assert!(!config.retryable_status_codes.contains(&StatusCode::BAD_REQUEST));
    }

    #[test]
    fn no_retries_policy_is_single_attempt() {
        let config = RetryConfig::no_retries();
        assert_eq!(config.max_attempts, 1);
        assert!(config.retryable_status_codes.is_empty());
    }

    #[test]
    fn backoff_doubles_then_saturates_at_the_cap() {
        let config = RetryConfig::default();
        assert_eq!(config.backoff_ms(1), 500);
        assert_eq!(config.backoff_ms(2), 1_000);
        assert_eq!(config.backoff_ms(3), 2_000);
        // Large configured attempt counts must not overflow the multiply
        assert_eq!(config.backoff_ms(70), MAX_BACKOFF_MS);
        assert_eq!(config.backoff_ms(u32::MAX), MAX_BACKOFF_MS);

        let zero = RetryConfig {
            initial_backoff_ms: 0,
            ..RetryConfig::default()
        };
        assert_eq!(zero.backoff_ms(70), 0);
    }

    #[tokio::test]
    async fn exhausted_attempts_surface_unreachable_without_panicking() {
        // Nothing listens on this port; every attempt is a transport error
        let config = RetryConfig {
            max_attempts: 70,
            initial_backoff_ms: 0,
            retryable_status_codes: Vec::new(),
        };
        let err = send_with_retry("analysis", &config, || {
            crate::http_client::shared_client().get("http://127.0.0.1:1/health")
        })
        .await
        .unwrap_err();
        assert!(matches!(err, CoachError::Unreachable { service: "analysis", .. }));
    }
}
