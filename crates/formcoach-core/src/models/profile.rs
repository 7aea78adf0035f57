// ABOUTME: User profile models backed by the external profile document store
// ABOUTME: UserProfile, Gender, FitnessGoal, and the partial ProfileUpdate patch type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported gender on the profile document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Any other or undisclosed value
    Other,
}

/// Training goal selected during profile creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Reduce body fat
    LoseWeight,
    /// Build muscle mass
    GainMuscle,
    /// Maintain current fitness
    StayFit,
}

/// User profile document held in the external profile store
///
/// Field names serialize in the document's `camelCase` convention so existing
/// stored documents round-trip unchanged. Height is centimeters, weight is
/// kilograms; both are optional and the plan generator treats missing or
/// non-positive values as "unknown" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Self-reported gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Selected training goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    /// URL of the uploaded profile picture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    /// Document creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Weight in kilograms if present and positive, else `None`
    #[must_use]
    pub fn valid_weight(&self) -> Option<f64> {
        self.weight.filter(|w| *w > 0.0)
    }

    /// Height in centimeters if present and positive, else `None`
    #[must_use]
    pub fn valid_height(&self) -> Option<f64> {
        self.height.filter(|h| *h > 0.0)
    }
}

/// Partial profile update applied with document-merge semantics
///
/// Only fields set to `Some` are written; everything else on the stored
/// document is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// New gender value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// New training goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    /// New profile picture URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

impl ProfileUpdate {
    /// Apply this patch to a profile document in place
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(ref name) = self.name {
            profile.name = Some(name.clone());
        }
        if let Some(height) = self.height {
            profile.height = Some(height);
        }
        if let Some(weight) = self.weight {
            profile.weight = Some(weight);
        }
        if let Some(gender) = self.gender {
            profile.gender = Some(gender);
        }
        if let Some(goal) = self.goal {
            profile.goal = Some(goal);
        }
        if let Some(ref pic) = self.profile_pic {
            profile.profile_pic = Some(pic.clone());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn profile_round_trips_in_camel_case() {
        let json = r#"{
            "name": "Sam",
            "email": "sam@example.com",
            "height": 170.0,
            "weight": 65.5,
            "gender": "female",
            "goal": "gain_muscle",
            "profilePic": "https://res.cloudinary.com/demo/image/upload/pic.jpg"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.gender, Some(Gender::Female));
        assert_eq!(profile.goal, Some(FitnessGoal::GainMuscle));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            back.get("profilePic").and_then(|v| v.as_str()),
            Some("https://res.cloudinary.com/demo/image/upload/pic.jpg")
        );
    }

    #[test]
    fn non_positive_measurements_are_not_valid() {
        let profile = UserProfile {
            weight: Some(-3.0),
            height: Some(0.0),
            ..UserProfile::default()
        };
        assert_eq!(profile.valid_weight(), None);
        assert_eq!(profile.valid_height(), None);
    }

    #[test]
    fn update_only_touches_set_fields() {
        let mut profile = UserProfile {
            name: Some("Sam".into()),
            weight: Some(65.0),
            height: Some(170.0),
            ..UserProfile::default()
        };
        let patch = ProfileUpdate {
            weight: Some(63.0),
            ..ProfileUpdate::default()
        };
        patch.apply_to(&mut profile);
        assert_eq!(profile.weight, Some(63.0));
        assert_eq!(profile.name.as_deref(), Some("Sam"));
        assert_eq!(profile.height, Some(170.0));
    }
}
