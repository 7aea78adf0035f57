// ABOUTME: Client for the login/register backend and the opaque SessionToken type
// ABOUTME: Credential validation before the call, access_token extraction after
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::constants::{endpoints, service_names};
use crate::errors::CoachResult;
use crate::http_client::shared_client;
use crate::response::{decode_json, error_from_response};
use crate::retry::{send_with_retry, RetryConfig};
use crate::validation::{require_non_empty, validate_email};

/// Opaque session token returned by the auth service
///
/// The token gates navigation between authenticated and unauthenticated
/// app states; its contents are never inspected client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value, for storage or an Authorization header
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Client for the login/register service
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    retry: RetryConfig,
}

impl AuthClient {
    /// Create a client against the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            retry: RetryConfig::default(),
        }
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Exchange credentials for a session token
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input, a service error
    /// carrying the backend's `detail` message (e.g. wrong password), or an
    /// unreachable error on transport failure.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> CoachResult<SessionToken> {
        validate_email(email)?;
        require_non_empty("password", password)?;

        let url = format!("{}{}", self.base_url, endpoints::LOGIN);
        let response = send_with_retry(service_names::AUTH, &self.retry, || {
            shared_client()
                .post(&url)
                .json(&LoginRequest { email, password })
        })
        .await?;

        if !response.status().is_success() {
            return Err(error_from_response(service_names::AUTH, response).await);
        }
        let login: LoginResponse = decode_json(service_names::AUTH, response).await?;
        info!("login succeeded");
        Ok(SessionToken::new(login.access_token))
    }

    /// Create a new account
    ///
    /// The backend returns an empty success body; registration does not log
    /// the user in.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input, a service error
    /// carrying the backend's `detail` message (e.g. email already
    /// registered), or an unreachable error on transport failure.
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, email: &str, password: &str) -> CoachResult<()> {
        require_non_empty("username", username)?;
        validate_email(email)?;
        require_non_empty("password", password)?;

        let url = format!("{}{}", self.base_url, endpoints::REGISTER);
        let response = send_with_retry(service_names::AUTH, &self.retry, || {
            shared_client().post(&url).json(&RegisterRequest {
                username,
                email,
                password,
            })
        })
        .await?;

        if !response.status().is_success() {
            return Err(error_from_response(service_names::AUTH, response).await);
        }
        info!("registration succeeded");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn requests_serialize_to_the_wire_shapes() {
        let login = serde_json::to_value(LoginRequest {
            email: "sam@example.com",
            password: "hunter2",
        })
        .unwrap();
        assert_eq!(
            login,
            serde_json::json!({"email": "sam@example.com", "password": "hunter2"})
        );

        let register = serde_json::to_value(RegisterRequest {
            username: "sam",
            email: "sam@example.com",
            password: "hunter2",
        })
        .unwrap();
        assert_eq!(register.get("username").and_then(|v| v.as_str()), Some("sam"));
    }

    #[test]
    fn token_round_trips_through_serde() {
        let token = SessionToken::new("eyJhbGciOi");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"eyJhbGciOi\"");
        let back: SessionToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_before_any_network_call() {
        let client = AuthClient::new("http://127.0.0.1:1");
        let err = client.login("not-an-email", "hunter2").await.unwrap_err();
        assert!(err.to_string().contains("email"));
    }
}
