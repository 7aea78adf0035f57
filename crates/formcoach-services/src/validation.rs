// ABOUTME: Client-side input validation applied before any network call
// ABOUTME: Required-field, email-shape, and password-confirmation checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Client-side validation
//!
//! Validation failures are caught before any network call and surfaced as
//! [`CoachError::Validation`] naming the offending field; they never reach
//! a backend.

use crate::errors::{CoachError, CoachResult};

/// Require a non-empty value for a named field
///
/// # Errors
///
/// Returns [`CoachError::Validation`] when the trimmed value is empty.
pub fn require_non_empty(field: &'static str, value: &str) -> CoachResult<()> {
    if value.trim().is_empty() {
        return Err(CoachError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Minimal email shape check: one `@` with characters on both sides and a
/// dot in the domain part
///
/// # Errors
///
/// Returns [`CoachError::Validation`] when the value does not look like an
/// email address.
pub fn validate_email(email: &str) -> CoachResult<()> {
    require_non_empty("email", email)?;
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid {
        Ok(())
    } else {
        Err(CoachError::validation("email", "must be a valid email address"))
    }
}

/// Require that a password and its confirmation match
///
/// # Errors
///
/// Returns [`CoachError::Validation`] when they differ.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> CoachResult<()> {
    if password == confirmation {
        Ok(())
    } else {
        Err(CoachError::validation("password", "passwords do not match"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_values() {
        assert!(require_non_empty("name", "").is_err());
        assert!(require_non_empty("name", "   ").is_err());
        assert!(require_non_empty("name", "Sam").is_ok());
    }

    #[test]
    fn accepts_plausible_emails_only() {
        assert!(validate_email("sam@example.com").is_ok());
        assert!(validate_email("sam@example").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("sam").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn password_confirmation_must_match() {
        assert!(validate_password_confirmation("hunter2", "hunter2").is_ok());
        let err = validate_password_confirmation("hunter2", "hunter3").unwrap_err();
        assert_eq!(err.to_string(), "Invalid password: passwords do not match");
    }
}
