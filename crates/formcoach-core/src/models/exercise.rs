// ABOUTME: Exercise catalog record models consumed by the planner and detail views
// ABOUTME: ExerciseRecord with instruction steps, targets, difficulty, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

use serde::{Deserialize, Serialize};

/// Subjective difficulty rating of a catalog exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Suitable for beginners
    Easy,
    /// Requires some conditioning
    Moderate,
    /// Demanding movement
    Hard,
}

/// One numbered instruction step for performing an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseStep {
    /// Step number, starting at 1
    pub num: u32,
    /// Instruction text
    pub text: String,
}

/// A static exercise catalog record
///
/// Defined at build time, never mutated, looked up by exact `id`. Carries
/// the extended fields the workout detail view consumes (duration,
/// difficulty, targets, instruction steps, coaching tip) in addition to the
/// minimal listing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Unique catalog key (e.g. `pushup`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Exercise category (e.g. `Strength`)
    pub exercise_type: String,
    /// Primary muscle group
    pub muscle_group: String,
    /// Short description for list views
    pub description: String,
    /// Illustration URL
    pub image: String,
    /// Typical duration in minutes
    pub time_minutes: u32,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Muscles targeted, in display order
    pub targets: Vec<String>,
    /// Default number of sets outside a generated plan
    pub default_sets: u32,
    /// Default rep range outside a generated plan
    pub default_reps: String,
    /// Numbered instruction steps
    pub steps: Vec<ExerciseStep>,
    /// Single coaching tip shown in the detail view
    pub tip: String,
}
