// ABOUTME: Configuration module for the FormCoach client
// ABOUTME: Re-exports the environment-based FormCoachConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Configuration management
//!
//! All configuration comes from environment variables; there is no config
//! file. See [`environment::FormCoachConfig::from_env`] for the variable
//! list and defaults.

/// Environment variable parsing into typed configuration
pub mod environment;

pub use environment::{CloudinaryConfig, FormCoachConfig, HttpConfig, RetryPolicyConfig};
