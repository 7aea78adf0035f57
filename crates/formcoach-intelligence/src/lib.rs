// ABOUTME: Plan generation engine for the FormCoach platform
// ABOUTME: Body metrics computation, static exercise catalog, and the workout planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

#![deny(unsafe_code)]

//! # FormCoach Intelligence
//!
//! The algorithmic core of FormCoach: pure, synchronous, and free of I/O.
//!
//! - [`metrics`] derives [`metrics::BodyMetrics`] (BMI, shoulder/waist
//!   widths, waist-to-shoulder ratio) from an analysis result and profile
//! - [`catalog`] holds the static exercise table, keyed by id
//! - [`planner`] selects one of three workout templates from the derived
//!   metrics via a fixed priority chain
//!
//! Everything here is safe to call concurrently without coordination: each
//! invocation allocates a fresh result and reads only the immutable catalog.

/// Derived body metrics from landmarks and profile measurements
pub mod metrics;

/// Static exercise catalog with id-based lookup
pub mod catalog;

/// Workout plan generation from derived metrics
pub mod planner;

pub use metrics::BodyMetrics;
pub use planner::generate_plan;
