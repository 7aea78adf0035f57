// ABOUTME: Core data models and types for the FormCoach platform
// ABOUTME: Re-exports Landmark, UserProfile, ExerciseRecord, WorkoutPlan and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! # Data Models
//!
//! Core data structures shared across the FormCoach workspace.
//!
//! ## Design Principles
//!
//! - **Boundary validated**: network payloads deserialize into typed records
//!   with explicit required vs. optional fields; nothing downstream touches
//!   raw JSON
//! - **Serializable**: all models support JSON for service payloads and the
//!   profile document store
//! - **Tolerant**: analysis payloads may carry extra fields per landmark;
//!   unknown fields are ignored rather than rejected

mod exercise;
mod landmark;
mod plan;
mod profile;

pub use exercise::{Difficulty, ExerciseRecord, ExerciseStep};
pub use landmark::{AnalysisResult, Landmark};
pub use plan::{WorkoutEntry, WorkoutPlan};
pub use profile::{FitnessGoal, Gender, ProfileUpdate, UserProfile};
