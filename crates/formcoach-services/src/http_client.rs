// ABOUTME: Shared HTTP client with connection pooling for service API calls
// ABOUTME: Process-wide singleton built from an HttpClientConfig set at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

use crate::constants::defaults;

/// Timeouts applied to the shared HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Total request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::HTTP_CONNECT_TIMEOUT_SECS),
        }
    }
}

static CLIENT_CONFIG: OnceLock<HttpClientConfig> = OnceLock::new();

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Install the shared client configuration
///
/// Must be called once at startup, before any service client makes a
/// request; later calls and calls after the client is built have no
/// effect. Without it the defaults apply. The source mobile app relied on
/// platform-default timeouts; here they are explicit.
pub fn initialize_shared_client(config: HttpClientConfig) {
    let _ = CLIENT_CONFIG.set(config);
}

/// Get the shared HTTP client for service API calls
///
/// Built once with connection pooling, the configured timeouts, and a
/// `formcoach/<version>` user agent.
#[must_use]
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let config = CLIENT_CONFIG.get().copied().unwrap_or_default();

        ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("formcoach/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_documented_timeouts() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }
}
