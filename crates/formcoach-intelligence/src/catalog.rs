// ABOUTME: Static exercise catalog with exact-id lookup for the planner and detail views
// ABOUTME: Push-up, bodyweight squat, and bicep curl records with steps, targets, and tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Static exercise catalog
//!
//! A fixed, read-only table built once on first access. Lookup is by exact
//! id match only; an unknown id returns `None`. The planner's fixed id set
//! (`squat`, `pushup`, `bicep_curl`) is guaranteed present.

use std::sync::OnceLock;

use formcoach_core::constants::exercise_ids;
use formcoach_core::models::{Difficulty, ExerciseRecord, ExerciseStep};

static CATALOG: OnceLock<Vec<ExerciseRecord>> = OnceLock::new();

/// All catalog records in display order
#[must_use]
pub fn all() -> &'static [ExerciseRecord] {
    CATALOG.get_or_init(build_catalog)
}

/// Look up a catalog record by exact id
#[must_use]
pub fn find(id: &str) -> Option<&'static ExerciseRecord> {
    all().iter().find(|record| record.id == id)
}

fn step(num: u32, text: &str) -> ExerciseStep {
    ExerciseStep {
        num,
        text: text.to_owned(),
    }
}

fn build_catalog() -> Vec<ExerciseRecord> {
    vec![
        ExerciseRecord {
            id: exercise_ids::PUSHUP.to_owned(),
            name: "Push-up".to_owned(),
            exercise_type: "Strength".to_owned(),
            muscle_group: "Chest".to_owned(),
            description: "A classic bodyweight exercise that builds upper body strength."
                .to_owned(),
            image: "https://images.unsplash.com/photo-1682048682610-20a91f10b29c?ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&q=80&w=687"
                .to_owned(),
            time_minutes: 5,
            difficulty: Difficulty::Moderate,
            targets: vec![
                "Chest".to_owned(),
                "Shoulders".to_owned(),
                "Triceps".to_owned(),
            ],
            default_sets: 3,
            default_reps: "8-12".to_owned(),
            steps: vec![
                step(1, "Start in a high plank position with your hands slightly wider than your shoulders."),
                step(2, "Lower your body by bending your elbows, keeping your back straight and core engaged."),
                step(3, "Push back up to the starting position, extending your arms fully."),
            ],
            tip: "Keep your elbows tucked close to your body (not flared out) to protect your shoulders."
                .to_owned(),
        },
        ExerciseRecord {
            id: exercise_ids::SQUAT.to_owned(),
            name: "Bodyweight Squat".to_owned(),
            exercise_type: "Strength".to_owned(),
            muscle_group: "Legs".to_owned(),
            description: "A fundamental lower body exercise for strength and mobility.".to_owned(),
            image: "https://images.pexels.com/photos/371049/pexels-photo-371049.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
                .to_owned(),
            time_minutes: 10,
            difficulty: Difficulty::Moderate,
            targets: vec!["Quads".to_owned(), "Glutes".to_owned(), "Core".to_owned()],
            default_sets: 3,
            default_reps: "12-15".to_owned(),
            steps: vec![
                step(1, "Stand with feet shoulder-width apart, toes pointing slightly outward. Keep your chest up."),
                step(2, "Push your hips back and bend your knees as if sitting in a chair. Keep your back straight."),
                step(3, "Lower until your thighs are parallel to the floor, ensuring your knees stay behind your toes."),
                step(4, "Push through your heels to return to the starting position. Squeeze your glutes at the top."),
            ],
            tip: "Focus on keeping your chest up and your back straight throughout the entire movement."
                .to_owned(),
        },
        ExerciseRecord {
            id: exercise_ids::BICEP_CURL.to_owned(),
            name: "Bicep Curl".to_owned(),
            exercise_type: "Strength".to_owned(),
            muscle_group: "Arms".to_owned(),
            description: "An isolation exercise that targets the biceps. Assumes dumbbells."
                .to_owned(),
            image: "https://images.pexels.com/photos/5327466/pexels-photo-5327466.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
                .to_owned(),
            time_minutes: 5,
            difficulty: Difficulty::Easy,
            targets: vec!["Biceps".to_owned()],
            default_sets: 3,
            default_reps: "10-12".to_owned(),
            steps: vec![
                step(1, "Stand or sit holding a dumbbell in each hand, palms facing forward, arms fully extended."),
                step(2, "Keeping your elbows tucked at your sides, curl the weights up toward your shoulders."),
                step(3, "Squeeze your biceps at the top of the movement for a second."),
                step(4, "Slowly lower the weights back down to the starting position with control."),
            ],
            tip: "Avoid using momentum. Do not swing your back; keep your upper body stable.".to_owned(),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn planner_ids_are_present() {
        for id in [
            exercise_ids::SQUAT,
            exercise_ids::PUSHUP,
            exercise_ids::BICEP_CURL,
        ] {
            assert!(find(id).is_some(), "missing catalog record for {id}");
        }
    }

    #[test]
    fn lookup_is_exact_match_only() {
        assert!(find("push").is_none());
        assert!(find("PUSHUP").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn records_carry_the_extended_detail_fields() {
        let squat = find(exercise_ids::SQUAT).unwrap();
        assert_eq!(squat.name, "Bodyweight Squat");
        assert_eq!(squat.steps.len(), 4);
        assert_eq!(squat.steps[0].num, 1);
        assert!(!squat.tip.is_empty());
        assert_eq!(squat.targets, ["Quads", "Glutes", "Core"]);
    }

    #[test]
    fn repeated_access_returns_the_same_records() {
        assert!(std::ptr::eq(all(), all()));
    }
}
