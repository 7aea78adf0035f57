// ABOUTME: Body metrics derivation from pose landmarks and profile measurements
// ABOUTME: Computes shoulder width, waist width, waist-to-shoulder ratio, and BMI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Derived body metrics
//!
//! The planner and its tests share a single definition of the two scalar
//! inputs to the plan decision: BMI and the waist-to-shoulder ratio. Both
//! degrade to defined fallback values rather than failing:
//!
//! - a width is `0.0` when either of its landmarks is absent or has `x <= 0`
//! - the ratio is exactly `1.0` unless both widths are positive
//! - BMI is `0.0` unless both weight and height are present and positive

use formcoach_core::constants::{landmarks, thresholds};
use formcoach_core::models::{AnalysisResult, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scalar metrics derived from one analysis result and one profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Horizontal shoulder width in normalized image units; `0.0` if unmeasurable
    pub shoulder_width: f64,
    /// Horizontal hip width in normalized image units; `0.0` if unmeasurable
    pub waist_width: f64,
    /// Waist width divided by shoulder width; `1.0` if either is unmeasurable
    pub waist_to_shoulder_ratio: f64,
    /// Body-mass index from profile weight/height; `0.0` if either is unknown
    pub bmi: f64,
}

impl BodyMetrics {
    /// Derive metrics from an analysis result and a user profile
    ///
    /// Never fails: malformed or missing inputs collapse to the documented
    /// fallback values. Note the silent interaction with the plan decision:
    /// an unknown BMI is `0.0`, which can never exceed the fat-loss
    /// threshold, so such users fall through to the ratio or
    /// general-fitness branch without any signal that BMI was unavailable.
    #[must_use]
    pub fn derive(analysis: &AnalysisResult, profile: &UserProfile) -> Self {
        let shoulder_width =
            landmark_span(analysis, landmarks::LEFT_SHOULDER, landmarks::RIGHT_SHOULDER);
        let waist_width = landmark_span(analysis, landmarks::LEFT_HIP, landmarks::RIGHT_HIP);

        let waist_to_shoulder_ratio = if shoulder_width > 0.0 && waist_width > 0.0 {
            waist_width / shoulder_width
        } else {
            thresholds::DEFAULT_RATIO
        };

        let bmi = if let (Some(weight), Some(height)) =
            (profile.valid_weight(), profile.valid_height())
        {
            let height_m = height / 100.0;
            weight / (height_m * height_m)
        } else {
            0.0
        };

        let metrics = Self {
            shoulder_width,
            waist_width,
            waist_to_shoulder_ratio,
            bmi,
        };
        debug!(
            bmi = metrics.bmi,
            ratio = metrics.waist_to_shoulder_ratio,
            "derived body metrics"
        );
        metrics
    }
}

/// Horizontal distance between two landmarks, `0.0` when unmeasurable
///
/// Both points must be present with `x > 0`; a landmark at or left of the
/// image edge is treated as not detected.
fn landmark_span(analysis: &AnalysisResult, left_id: u32, right_id: u32) -> f64 {
    match (analysis.find(left_id), analysis.find(right_id)) {
        (Some(left), Some(right)) if left.x > 0.0 && right.x > 0.0 => (right.x - left.x).abs(),
        _ => 0.0,
    }
}

#[cfg(test)]
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

    fn analysis(points: Vec<Landmark>) -> AnalysisResult {
        AnalysisResult { landmarks: points }
    }

    #[test]
    fn widths_from_well_formed_landmarks() {
        let result = analysis(vec![lm(11, 0.35), lm(12, 0.65), lm(23, 0.40), lm(24, 0.62)]);
        let metrics = BodyMetrics::derive(&result, &UserProfile::default());
        assert!((metrics.shoulder_width - 0.30).abs() < 1e-9);
        assert!((metrics.waist_width - 0.22).abs() < 1e-9);
        assert!((metrics.waist_to_shoulder_ratio - 0.22 / 0.30).abs() < 1e-9);
    }

    #[test]
    fn missing_landmark_zeroes_the_width_and_defaults_the_ratio() {
        let result = analysis(vec![lm(11, 0.35), lm(23, 0.40), lm(24, 0.62)]);
        let metrics = BodyMetrics::derive(&result, &UserProfile::default());
        assert_eq!(metrics.shoulder_width, 0.0);
        assert!(metrics.waist_width > 0.0);
        assert_eq!(metrics.waist_to_shoulder_ratio, 1.0);
    }

    #[test]
    fn non_positive_x_counts_as_not_detected() {
        let result = analysis(vec![lm(11, 0.0), lm(12, 0.65), lm(23, -0.1), lm(24, 0.62)]);
        let metrics = BodyMetrics::derive(&result, &UserProfile::default());
        assert_eq!(metrics.shoulder_width, 0.0);
        assert_eq!(metrics.waist_width, 0.0);
        assert_eq!(metrics.waist_to_shoulder_ratio, 1.0);
    }

    #[test]
    fn bmi_from_valid_profile() {
        let profile = UserProfile {
            weight: Some(90.0),
            height: Some(170.0),
            ..UserProfile::default()
        };
        let metrics = BodyMetrics::derive(&analysis(vec![]), &profile);
        assert!((metrics.bmi - 90.0 / (1.7 * 1.7)).abs() < 1e-9);
    }

    #[test]
    fn unknown_measurements_collapse_bmi_to_zero() {
        for (weight, height) in [
            (None, Some(170.0)),
            (Some(70.0), None),
            (Some(0.0), Some(170.0)),
            (Some(-5.0), Some(170.0)),
            (Some(70.0), Some(0.0)),
            (None, None),
        ] {
            let profile = UserProfile {
                weight,
                height,
                ..UserProfile::default()
            };
            let metrics = BodyMetrics::derive(&analysis(vec![]), &profile);
            assert_eq!(metrics.bmi, 0.0, "weight={weight:?} height={height:?}");
            assert!(metrics.bmi.is_finite());
        }
    }
}
