// ABOUTME: Integration tests for environment-based configuration parsing
// ABOUTME: Defaults, overrides, slash trimming, and invalid-value errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach
#![allow(missing_docs, clippy::unwrap_used)]

use serial_test::serial;
use std::env;

use formcoach::config::FormCoachConfig;

const ALL_VARS: &[&str] = &[
    "ANALYSIS_SERVICE_URL",
    "CHATBOT_SERVICE_URL",
    "AUTH_SERVICE_URL",
    "PROFILE_STORE_URL",
    "CLOUDINARY_CLOUD_NAME",
    "CLOUDINARY_UPLOAD_PRESET",
    "HTTP_TIMEOUT_SECS",
    "HTTP_CONNECT_TIMEOUT_SECS",
    "HTTP_RETRY_MAX_ATTEMPTS",
    "HTTP_RETRY_BASE_DELAY_MS",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn defaults_apply_when_nothing_is_set() {
    clear_env();
    let config = FormCoachConfig::from_env().unwrap();
    assert_eq!(config.analysis_service_url, "http://127.0.0.1:8000");
    assert_eq!(config.chatbot_service_url, "http://127.0.0.1:8001");
    assert_eq!(config.http.timeout_secs, 30);
    assert_eq!(config.http.connect_timeout_secs, 10);
    assert_eq!(config.retry.max_attempts, 3);
    assert!(config.cloudinary.is_none());
}

#[test]
#[serial]
fn overrides_are_read_and_trailing_slashes_trimmed() {
    clear_env();
    env::set_var("ANALYSIS_SERVICE_URL", "http://10.0.2.2:8000/");
    env::set_var("HTTP_TIMEOUT_SECS", "5");
    let config = FormCoachConfig::from_env().unwrap();
    assert_eq!(config.analysis_service_url, "http://10.0.2.2:8000");
    assert_eq!(config.http.timeout_secs, 5);
    clear_env();
}

#[test]
#[serial]
fn cloudinary_requires_both_variables() {
    clear_env();
    env::set_var("CLOUDINARY_CLOUD_NAME", "demo");
    assert!(FormCoachConfig::from_env().is_err());

    env::set_var("CLOUDINARY_UPLOAD_PRESET", "unsigned");
    let config = FormCoachConfig::from_env().unwrap();
    let cloudinary = config.cloudinary.unwrap();
    assert_eq!(cloudinary.cloud_name, "demo");
    assert_eq!(cloudinary.upload_preset, "unsigned");
    clear_env();
}

#[test]
#[serial]
fn unparseable_numbers_are_errors() {
    clear_env();
    env::set_var("HTTP_TIMEOUT_SECS", "soon");
    assert!(FormCoachConfig::from_env().is_err());
    clear_env();
}
