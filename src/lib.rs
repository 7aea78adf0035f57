// ABOUTME: FormCoach client library - configuration, logging, session, and coaching flows
// ABOUTME: Ties the core models, intelligence engine, and service clients into app-level flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

#![deny(unsafe_code)]

//! # FormCoach
//!
//! Client-side application layer for the FormCoach coaching product. The
//! workspace splits along the same lines as the product:
//!
//! - `formcoach-core` — shared models, errors, constants
//! - `formcoach-intelligence` — body metrics, catalog, plan generator
//! - `formcoach-services` — typed clients for the external backends
//!
//! This crate adds environment configuration, logging setup, session-token
//! persistence, and the [`coaching::CoachingService`] orchestrating the
//! end-to-end flows (photo → analysis → profile → plan; chat; auth).

/// Environment-based configuration
pub mod config;

/// Structured logging setup built on tracing
pub mod logging;

/// Session-token persistence in local storage
pub mod session;

/// End-to-end coaching flows over the service clients
pub mod coaching;

// Re-export workspace crates under stable paths
pub use formcoach_core as core;
pub use formcoach_intelligence as intelligence;
pub use formcoach_services as services;

pub use coaching::CoachingService;
pub use config::FormCoachConfig;
