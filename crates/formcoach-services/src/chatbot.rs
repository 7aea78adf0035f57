// ABOUTME: Client for the chatbot backend exposing a single message round-trip
// ABOUTME: JSON message in, reply out, with detail-message error surfacing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::constants::{endpoints, service_names};
use crate::errors::CoachResult;
use crate::http_client::shared_client;
use crate::response::{decode_json, error_from_response};
use crate::retry::{send_with_retry, RetryConfig};
use crate::validation::require_non_empty;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: String,
}

/// Client for the chatbot service
///
/// One endpoint, one shape: `{"message"}` in, `{"reply"}` out. The backend
/// proxies an LLM; failures come back as `{"detail"}` and surface verbatim.
#[derive(Debug, Clone)]
pub struct ChatbotClient {
    base_url: String,
    retry: RetryConfig,
}

impl ChatbotClient {
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

    /// Send one message and return the assistant's reply
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty message, a service error
    /// carrying the backend's `detail` message, or an unreachable error on
    /// transport failure.
    #[instrument(skip(self, message))]
    pub async fn send_message(&self, message: &str) -> CoachResult<String> {
        require_non_empty("message", message)?;

        let url = format!("{}{}", self.base_url, endpoints::CHATBOT);
        let response = send_with_retry(service_names::CHATBOT, &self.retry, || {
            shared_client().post(&url).json(&ChatRequest { message })
        })
        .await?;

        if !response.status().is_success() {
            return Err(error_from_response(service_names::CHATBOT, response).await);
        }
        let chat: ChatResponse = decode_json(service_names::CHATBOT, response).await?;
        Ok(chat.reply)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_the_wire_shape() {
        let json = serde_json::to_value(ChatRequest { message: "How many rest days?" }).unwrap();
        assert_eq!(json, serde_json::json!({"message": "How many rest days?"}));
    }

    #[tokio::test]
    async fn empty_message_is_rejected_before_any_network_call() {
        let client = ChatbotClient::new("http://127.0.0.1:1");
        let err = client.send_message("   ").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid message: must not be empty");
    }
}
