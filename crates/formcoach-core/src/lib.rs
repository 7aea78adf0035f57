// ABOUTME: Core types and constants for the FormCoach coaching platform
// ABOUTME: Foundation crate with data models, unified error handling, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

#![deny(unsafe_code)]

//! # FormCoach Core
//!
//! Foundation crate providing shared types and constants for the FormCoach
//! coaching platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `CoachError` and `ErrorCode`
//! - **constants**: Domain constants (landmark ids, decision thresholds, env names)
//! - **models**: Core data models (`Landmark`, `UserProfile`, `ExerciseRecord`, `WorkoutPlan`)

/// Unified error handling with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models shared across the workspace
pub mod models;

pub use errors::{CoachError, CoachResult, ErrorCode};
