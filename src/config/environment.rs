// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Service URLs, Cloudinary credentials, HTTP timeouts, and retry policy from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Environment-based configuration
//!
//! Variables and defaults:
//!
//! | Variable | Default |
//! |---|---|
//! | `ANALYSIS_SERVICE_URL` | `http://127.0.0.1:8000` |
//! | `CHATBOT_SERVICE_URL` | `http://127.0.0.1:8001` |
//! | `AUTH_SERVICE_URL` | `http://127.0.0.1:8000` |
//! | `PROFILE_STORE_URL` | `http://127.0.0.1:8000` |
//! | `CLOUDINARY_CLOUD_NAME` | unset (uploads disabled) |
//! | `CLOUDINARY_UPLOAD_PRESET` | unset (uploads disabled) |
//! | `HTTP_TIMEOUT_SECS` | `30` |
//! | `HTTP_CONNECT_TIMEOUT_SECS` | `10` |
//! | `HTTP_RETRY_MAX_ATTEMPTS` | `3` |
//! | `HTTP_RETRY_BASE_DELAY_MS` | `500` |

use anyhow::{Context, Result};
use std::env;

use formcoach_services::constants::defaults;
use formcoach_services::RetryConfig;

/// Cloudinary unsigned-upload credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinaryConfig {
    /// Cloud name embedded in the upload URL
    pub cloud_name: String,
    /// Unsigned upload preset
    pub upload_preset: String,
}

/// HTTP client timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

/// Retry policy settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicyConfig {
    /// Maximum attempts per call (1 = no retries)
    pub max_attempts: u32,
    /// Initial backoff delay in milliseconds
    pub base_delay_ms: u64,
}

impl RetryPolicyConfig {
    /// Build the services-crate retry configuration
    #[must_use]
    pub fn to_retry_config(self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts,
            initial_backoff_ms: self.base_delay_ms,
            ..RetryConfig::default()
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FormCoachConfig {
    /// Base URL of the pose/frame/audio analysis service
    pub analysis_service_url: String,
    /// Base URL of the chatbot service
    pub chatbot_service_url: String,
    /// Base URL of the login/register service
    pub auth_service_url: String,
    /// Base URL of the profile document store
    pub profile_store_url: String,
    /// Cloudinary credentials; `None` disables profile-picture uploads
    pub cloudinary: Option<CloudinaryConfig>,
    /// HTTP timeouts
    pub http: HttpConfig,
    /// Retry policy for service calls
    pub retry: RetryPolicyConfig,
}

impl Default for FormCoachConfig {
    fn default() -> Self {
        Self {
            analysis_service_url: defaults::ANALYSIS_SERVICE_URL.to_owned(),
            chatbot_service_url: defaults::CHATBOT_SERVICE_URL.to_owned(),
            auth_service_url: defaults::AUTH_SERVICE_URL.to_owned(),
            profile_store_url: defaults::PROFILE_STORE_URL.to_owned(),
            cloudinary: None,
            http: HttpConfig {
                timeout_secs: defaults::HTTP_TIMEOUT_SECS,
                connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
            },
            retry: RetryPolicyConfig {
                max_attempts: 3,
                base_delay_ms: 500,
            },
        }
    }
}

impl FormCoachConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric variable is set but unparseable, or
    /// when only one of the two Cloudinary variables is set.
    pub fn from_env() -> Result<Self> {
        let base = Self::default();

        let cloudinary = match (
            env::var("CLOUDINARY_CLOUD_NAME").ok().filter(|v| !v.is_empty()),
            env::var("CLOUDINARY_UPLOAD_PRESET").ok().filter(|v| !v.is_empty()),
        ) {
            (Some(cloud_name), Some(upload_preset)) => Some(CloudinaryConfig {
                cloud_name,
                upload_preset,
            }),
            (None, None) => None,
            _ => anyhow::bail!(
                "CLOUDINARY_CLOUD_NAME and CLOUDINARY_UPLOAD_PRESET must be set together"
            ),
        };

        Ok(Self {
            analysis_service_url: env_url("ANALYSIS_SERVICE_URL", &base.analysis_service_url),
            chatbot_service_url: env_url("CHATBOT_SERVICE_URL", &base.chatbot_service_url),
            auth_service_url: env_url("AUTH_SERVICE_URL", &base.auth_service_url),
            profile_store_url: env_url("PROFILE_STORE_URL", &base.profile_store_url),
            cloudinary,
            http: HttpConfig {
                timeout_secs: env_u64("HTTP_TIMEOUT_SECS", base.http.timeout_secs)?,
                connect_timeout_secs: env_u64(
                    "HTTP_CONNECT_TIMEOUT_SECS",
                    base.http.connect_timeout_secs,
                )?,
            },
            retry: RetryPolicyConfig {
                max_attempts: env_u32("HTTP_RETRY_MAX_ATTEMPTS", base.retry.max_attempts)?,
                base_delay_ms: env_u64("HTTP_RETRY_BASE_DELAY_MS", base.retry.base_delay_ms)?,
            },
        })
    }
}

/// Read a URL-valued variable, trimming any trailing slash so endpoint
/// paths concatenate cleanly
fn env_url(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .map_or_else(|| default.to_owned(), |v| v.trim_end_matches('/').to_owned())
}

fn env_u64(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value
            .parse()
            .with_context(|| format!("{name} must be a positive integer, got '{value}'")),
        _ => Ok(default),
    }
}

fn env_u32(name: &str, default: u32) -> Result<u32> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value
            .parse()
            .with_context(|| format!("{name} must be a positive integer, got '{value}'")),
        _ => Ok(default),
    }
}
