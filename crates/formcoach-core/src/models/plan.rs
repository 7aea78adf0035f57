// ABOUTME: Workout plan models produced by the plan generator
// ABOUTME: WorkoutPlan title plus ordered (exercise, sets, reps) entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

use serde::{Deserialize, Serialize};

use super::ExerciseRecord;

/// One prescribed exercise within a generated plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Catalog record for the prescribed exercise
    pub exercise: ExerciseRecord,
    /// Number of sets
    pub sets: u32,
    /// Rep prescription; a range (`"10-12"`) or a directive
    /// (`"As many as possible"`)
    pub reps: String,
}

/// A generated workout plan
///
/// Created fresh on each generator invocation; never mutated after creation
/// and never empty for well-formed inputs (each decision branch prescribes
/// exactly three entries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Plan title (e.g. "Fat Loss Plan")
    pub title: String,
    /// Ordered exercise prescriptions
    pub workout: Vec<WorkoutEntry>,
}
