// ABOUTME: Pose landmark and analysis result models from the analysis service
// ABOUTME: Landmark keypoint coordinates and the per-photo AnalysisResult container
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

use serde::{Deserialize, Serialize};

/// One tracked body keypoint in normalized image coordinates
///
/// Produced by the analysis service per request. Coordinates are normalized
/// to the image dimensions (`0.0..=1.0` when the point lies inside the
/// frame). The service may include a human-readable landmark name, a depth
/// estimate, and a visibility score; all three are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Landmark index in the pose topology (e.g. 11 = left shoulder)
    pub id: u32,
    /// Human-readable landmark name, when provided by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Horizontal position, normalized to image width
    pub x: f64,
    /// Vertical position, normalized to image height
    pub y: f64,
    /// Estimated depth relative to the hip midpoint, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Detection confidence in `0.0..=1.0`, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

/// Result of one photo-analysis request
///
/// Transient: owned by the calling flow for the duration of one
/// analyze-then-plan round trip, never cached or persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected body keypoints; may be empty if detection was partial
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
}

impl AnalysisResult {
    /// Find a landmark by id via linear search
    ///
    /// Returns `None` when the point was not detected; callers treat absence
    /// as a zero-width measurement rather than an error.
    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Landmark> {
        self.landmarks.iter().find(|lm| lm.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_payload_with_extra_fields() {
        let json = r#"{
            "landmarks": [
                {"id": 11, "name": "LEFT_SHOULDER", "x": 0.35, "y": 0.4, "z": -0.1},
                {"id": 12, "x": 0.65, "y": 0.41, "visibility": 0.98}
            ]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.landmarks.len(), 2);
        assert_eq!(result.find(11).map(|lm| lm.x), Some(0.35));
        assert_eq!(result.find(12).and_then(|lm| lm.visibility), Some(0.98));
        assert!(result.find(23).is_none());
    }

    #[test]
    fn empty_payload_yields_no_landmarks() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert!(result.landmarks.is_empty());
    }
}
