// ABOUTME: Error-body decoding shared by all FormCoach service clients
// ABOUTME: Maps non-2xx JSON bodies (detail/error/nested message) to CoachError::Service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Service error-body decoding
//!
//! The backends report failures with slightly different JSON shapes:
//!
//! - analysis/chatbot/auth: `{"detail": "..."}`
//! - tracker endpoints: `{"error": "..."}`
//! - Cloudinary: `{"error": {"message": "..."}}`
//!
//! [`error_from_response`] normalizes all three into
//! [`CoachError::Service`] carrying the literal server message when one is
//! present, else the error code's generic description.

use reqwest::Response;
use serde::Deserialize;

use crate::errors::{CoachError, ErrorCode};

/// Union of the error body shapes the backends produce
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<ErrorField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Message(String),
    Nested { message: String },
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.detail.or_else(|| {
            self.error.map(|field| match field {
                ErrorField::Message(msg) | ErrorField::Nested { message: msg } => msg,
            })
        })
    }
}

/// Extract the server-provided message from a raw error body
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .filter(|msg| !msg.is_empty())
}

/// Convert a non-success response into a [`CoachError::Service`]
///
/// Consumes the response body; uses the literal server message when the
/// body carries one, else a generic fallback.
pub async fn error_from_response(service: &'static str, response: Response) -> CoachError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let detail = error_message(&body)
        .unwrap_or_else(|| ErrorCode::ExternalServiceError.description().to_owned());
    CoachError::service(service, status, detail)
}

/// Decode a successful JSON response body
///
/// # Errors
///
/// Returns [`CoachError::Service`] when the body cannot be decoded as `T`,
/// since a malformed success body is a service contract violation.
pub async fn decode_json<T>(service: &'static str, response: Response) -> Result<T, CoachError>
where
    T: for<'de> Deserialize<'de> + Send,
{
    let status = response.status().as_u16();
    response.json::<T>().await.map_err(|err| {
        CoachError::service(service, status, format!("malformed response body: {err}"))
    })
}
