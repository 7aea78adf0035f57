// ABOUTME: Unified error handling system with standard error codes for the FormCoach platform
// ABOUTME: Defines ErrorCode, CoachError, and the CoachResult alias used across all crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! # Unified Error Handling
//!
//! Centralized error types for the FormCoach workspace. Every failure a
//! caller can observe maps to one [`CoachError`] variant carrying an
//! [`ErrorCode`], so user-facing surfaces (CLI, app layer) can render a
//! consistent message without matching on transport-level error types.
//!
//! Backend services report failures as non-2xx responses with a JSON body
//! carrying a `detail` (or `error`) message; that literal server message is
//! preserved in [`CoachError::Service`] so it can be surfaced verbatim.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1000-1999)
    /// Credentials or session token were rejected
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 1001,

    // Validation (3000-3999)
    /// Input failed client-side validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resources (4000-4999)
    /// The requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External services (5000-5999)
    /// A backend service reported an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// A backend service could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Configuration is invalid or missing
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Local (9000-9999)
    /// Local storage (session file) failure
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// JSON encoding/decoding failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// HTTP status code conventionally associated with this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::AuthInvalid => 401,
            Self::ResourceNotFound => 404,
            Self::ExternalServiceError => 502,
            Self::ExternalServiceUnavailable => 503,
            Self::ConfigError | Self::StorageError | Self::SerializationError => 500,
        }
    }

    /// User-friendly description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthInvalid => "The provided credentials are invalid",
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "A backend service reported an error",
            Self::ExternalServiceUnavailable => "A backend service is unreachable",
            Self::ConfigError => "The application configuration is invalid",
            Self::StorageError => "Local storage operation failed",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Result alias used across the FormCoach workspace
pub type CoachResult<T> = Result<T, CoachError>;

/// Unified error type for the FormCoach platform
#[derive(Debug, Error)]
pub enum CoachError {
    /// Client-side validation failure, caught before any network call
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A backend service returned a non-success status with a message
    #[error("{service} error ({status}): {detail}")]
    Service {
        /// Logical service name (analysis, chatbot, auth, media, profiles)
        service: &'static str,
        /// HTTP status returned by the service
        status: u16,
        /// Literal server-provided message, or a generic fallback
        detail: String,
    },

    /// A backend service could not be reached at the transport level
    #[error("{service} is unreachable: {reason}")]
    Unreachable {
        /// Logical service name
        service: &'static str,
        /// Transport-level failure description
        reason: String,
    },

    /// Authentication failed or a session token is missing
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Requested resource does not exist
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource kind (profile, exercise, ...)
        resource: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local session/profile storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization or deserialization failure
    #[error("Serialization failed for {context}")]
    Serialization {
        /// Context where serialization failed
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl CoachError {
    /// Error code associated with this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::InvalidInput,
            Self::Service { .. } => ErrorCode::ExternalServiceError,
            Self::Unreachable { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::Auth(_) => ErrorCode::AuthInvalid,
            Self::NotFound { .. } => ErrorCode::ResourceNotFound,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Storage(_) => ErrorCode::StorageError,
            Self::Serialization { .. } => ErrorCode::SerializationError,
        }
    }

    /// Create a validation error for a named field
    #[must_use]
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a service error carrying the literal server message
    #[must_use]
    pub fn service(service: &'static str, status: u16, detail: impl Into<String>) -> Self {
        Self::Service {
            service,
            status,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_map_to_expected_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::AuthInvalid.http_status(), 401);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ExternalServiceError.http_status(), 502);
        assert_eq!(ErrorCode::ExternalServiceUnavailable.http_status(), 503);
        assert_eq!(ErrorCode::StorageError.http_status(), 500);
        assert_eq!(ErrorCode::SerializationError.http_status(), 500);
    }

    #[test]
    fn service_error_preserves_server_detail() {
        let err = CoachError::service("analysis", 400, "Could not detect a person in the image.");
        assert_eq!(err.code(), ErrorCode::ExternalServiceError);
        assert_eq!(
            err.to_string(),
            "analysis error (400): Could not detect a person in the image."
        );
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = CoachError::validation("email", "must contain '@'");
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert_eq!(err.to_string(), "Invalid email: must contain '@'");
    }

    #[test]
    fn auth_error_maps_to_the_auth_code() {
        let err = CoachError::Auth("session token rejected".to_owned());
        assert_eq!(err.code(), ErrorCode::AuthInvalid);
        assert_eq!(err.code().http_status(), 401);
        assert_eq!(err.to_string(), "Authentication failed: session token rejected");
    }

    #[test]
    fn every_variant_has_a_code_with_a_description() {
        for code in [
            ErrorCode::AuthInvalid,
            ErrorCode::InvalidInput,
            ErrorCode::ResourceNotFound,
            ErrorCode::ExternalServiceError,
            ErrorCode::ExternalServiceUnavailable,
            ErrorCode::ConfigError,
            ErrorCode::StorageError,
            ErrorCode::SerializationError,
        ] {
            assert!(!code.description().is_empty());
        }
    }
}
