// ABOUTME: Workout plan generator selecting one of three templates from body metrics
// ABOUTME: BMI-then-ratio priority chain over the static exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Workout plan generation
//!
//! [`generate_plan`] is the platform's one pure decision kernel: given an
//! analysis result and a profile it derives [`BodyMetrics`] and selects a
//! plan through a fixed priority chain. First match wins:
//!
//! 1. `bmi > 25` selects the fat-loss template
//! 2. `waist_to_shoulder_ratio > 0.75` selects the upper-body template
//! 3. everything else selects the general-fitness template
//!
//! The chain is deliberately order-dependent: an unknown BMI derives as
//! `0.0` and falls through to the ratio check without signaling that BMI
//! was unavailable. That fallback is product behavior and must be kept.

use formcoach_core::constants::{exercise_ids, thresholds};
use formcoach_core::models::{AnalysisResult, UserProfile, WorkoutEntry, WorkoutPlan};
use tracing::debug;

use crate::catalog;
use crate::metrics::BodyMetrics;

/// Generate a workout plan from an analysis result and a user profile
///
/// Pure and deterministic: no I/O, no shared state, never fails. Malformed
/// landmark or profile data degrades to the metric fallbacks documented on
/// [`BodyMetrics::derive`]; the result always contains exactly three
/// entries.
#[must_use]
pub fn generate_plan(analysis: &AnalysisResult, profile: &UserProfile) -> WorkoutPlan {
    let metrics = BodyMetrics::derive(analysis, profile);
    plan_from_metrics(&metrics)
}

/// Select a plan template from already-derived metrics
#[must_use]
pub fn plan_from_metrics(metrics: &BodyMetrics) -> WorkoutPlan {
    let plan = if metrics.bmi > thresholds::BMI_FAT_LOSS {
        WorkoutPlan {
            title: "Fat Loss Plan".to_owned(),
            workout: vec![
                entry(exercise_ids::SQUAT, 3, "15-20"),
                entry(exercise_ids::PUSHUP, 3, "As many as possible"),
                entry(exercise_ids::BICEP_CURL, 3, "12-15"),
            ],
        }
    } else if metrics.waist_to_shoulder_ratio > thresholds::UPPER_BODY_RATIO {
        WorkoutPlan {
            title: "Upper Body Focus Plan".to_owned(),
            workout: vec![
                entry(exercise_ids::PUSHUP, 4, "8-12"),
                entry(exercise_ids::BICEP_CURL, 4, "8-12"),
                entry(exercise_ids::SQUAT, 2, "10-12"),
            ],
        }
    } else {
        WorkoutPlan {
            title: "General Fitness Plan".to_owned(),
            workout: vec![
                entry(exercise_ids::SQUAT, 3, "10-12"),
                entry(exercise_ids::PUSHUP, 3, "10-12"),
                entry(exercise_ids::BICEP_CURL, 3, "10-12"),
            ],
        }
    };
    debug!(title = %plan.title, "selected workout plan");
    plan
}

/// Build one plan entry from a fixed catalog id
///
/// The planner only passes ids present in the catalog, so the lookup
/// cannot miss; the fallback keeps the function total without a panic
/// path.
fn entry(id: &str, sets: u32, reps: &str) -> WorkoutEntry {
    let exercise = catalog::find(id).map_or_else(
        || catalog::all()[0].clone(),
        Clone::clone,
    );
    WorkoutEntry {
        exercise,
        sets,
        reps: reps.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use formcoach_core::models::Landmark;

    fn lm(id: u32, x: f64) -> Landmark {
        Landmark {
            id,
            name: None,
            x,
            y: 0.5,
            z: None,
            visibility: None,
        }
    }

    fn profile(weight: Option<f64>, height: Option<f64>) -> UserProfile {
        UserProfile {
            weight,
            height,
            ..UserProfile::default()
        }
    }

    fn body(shoulder: f64, waist: f64) -> AnalysisResult {
        AnalysisResult {
            landmarks: vec![
                lm(11, 0.30),
                lm(12, 0.30 + shoulder),
                lm(23, 0.32),
                lm(24, 0.32 + waist),
            ],
        }
    }

    #[test]
    fn high_bmi_selects_fat_loss_regardless_of_landmarks() {
        // 90kg / 1.70m -> BMI ~31.1
        let plan = generate_plan(&body(0.30, 0.18), &profile(Some(90.0), Some(170.0)));
        assert_eq!(plan.title, "Fat Loss Plan");
        let reps: Vec<&str> = plan.workout.iter().map(|e| e.reps.as_str()).collect();
        assert_eq!(reps, ["15-20", "As many as possible", "12-15"]);
        let ids: Vec<&str> = plan.workout.iter().map(|e| e.exercise.id.as_str()).collect();
        assert_eq!(ids, ["squat", "pushup", "bicep_curl"]);
    }

    #[test]
    fn high_ratio_selects_upper_body_when_bmi_is_normal() {
        // BMI ~22, ratio 0.26/0.30 ~ 0.867
        let plan = generate_plan(&body(0.30, 0.26), &profile(Some(60.0), Some(165.0)));
        assert_eq!(plan.title, "Upper Body Focus Plan");
        let sets: Vec<u32> = plan.workout.iter().map(|e| e.sets).collect();
        assert_eq!(sets, [4, 4, 2]);
    }

    #[test]
    fn balanced_inputs_select_general_fitness() {
        // BMI ~22, ratio 0.18/0.30 = 0.6
        let plan = generate_plan(&body(0.30, 0.18), &profile(Some(60.0), Some(165.0)));
        assert_eq!(plan.title, "General Fitness Plan");
        for item in &plan.workout {
            assert_eq!(item.reps, "10-12");
            assert_eq!(item.sets, 3);
        }
    }

    #[test]
    fn missing_landmarks_route_to_ratio_branch_via_default() {
        // No landmarks at all: ratio defaults to 1.0 > 0.75
        let plan = generate_plan(&AnalysisResult::default(), &profile(Some(60.0), Some(165.0)));
        assert_eq!(plan.title, "Upper Body Focus Plan");
    }

    #[test]
    fn unknown_bmi_never_selects_fat_loss() {
        let plan = generate_plan(&body(0.30, 0.18), &profile(None, None));
        assert_ne!(plan.title, "Fat Loss Plan");
    }

    #[test]
    fn plan_always_has_three_entries_from_the_catalog() {
        let plan = generate_plan(&AnalysisResult::default(), &UserProfile::default());
        assert_eq!(plan.workout.len(), 3);
        for item in &plan.workout {
            let record = catalog::find(&item.exercise.id).unwrap();
            assert_eq!(&item.exercise, record);
        }
    }

    #[test]
    fn generation_is_idempotent() {
        let analysis = body(0.30, 0.26);
        let user = profile(Some(60.0), Some(165.0));
        assert_eq!(generate_plan(&analysis, &user), generate_plan(&analysis, &user));
    }
}
