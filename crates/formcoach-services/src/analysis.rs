// ABOUTME: Client for the pose-analysis backend (snapshot, frame, and audio endpoints)
// ABOUTME: Multipart uploads returning landmarks or tracker feedback with detail-message errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Analysis service client
//!
//! Three multipart endpoints on the analysis backend:
//!
//! - `/analyze/snapshot` — one JPEG in, pose landmarks out
//! - `/analyze_frame` — one JPEG tracker frame in, form tips out
//! - `/analyze_audio` — one WAV clip in, breathing/tempo metrics out
//!
//! Uploads are not idempotent; a resubmitted photo performs a new analysis
//! each time. Retries therefore apply only to transport failures and
//! rate-limit/unavailable statuses, where the request never reached the
//! analysis stage.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::constants::{endpoints, service_names};
use crate::errors::CoachResult;
use crate::http_client::shared_client;
use crate::models::AnalysisResult;
use crate::response::{decode_json, error_from_response};
use crate::retry::{send_with_retry, RetryConfig};

/// Per-frame feedback from the live tracker endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameFeedback {
    /// Whether the frame was analyzable
    #[serde(default)]
    pub ok: bool,
    /// Form tips for the current frame, in display order
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Audio analysis feedback from the live tracker endpoint
///
/// The backend returns either a loudness (`rms`) or a `tempo` estimate
/// depending on the clip; both are optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeedback {
    /// Whether the clip was analyzable
    #[serde(default)]
    pub ok: bool,
    /// Root-mean-square loudness, when computed
    #[serde(default)]
    pub rms: Option<f64>,
    /// Estimated tempo in BPM, when computed
    #[serde(default)]
    pub tempo: Option<f64>,
}

/// Client for the pose/frame/audio analysis service
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    base_url: String,
    retry: RetryConfig,
}

impl AnalysisClient {
    /// Create a client against the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            retry: RetryConfig::default(),
        }
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Analyze a single JPEG snapshot and return detected pose landmarks
    ///
    /// # Errors
    ///
    /// Returns a service error carrying the backend's `detail` message when
    /// analysis fails (e.g. no person detected), or an unreachable error on
    /// transport failure.
    #[instrument(skip(self, jpeg), fields(bytes = jpeg.len()))]
    pub async fn analyze_snapshot(&self, jpeg: &[u8]) -> CoachResult<AnalysisResult> {
        let url = format!("{}{}", self.base_url, endpoints::ANALYZE_SNAPSHOT);
        let response = send_with_retry(service_names::ANALYSIS, &self.retry, || {
            let part = Part::bytes(jpeg.to_vec()).file_name("snapshot.jpg");
            shared_client()
                .post(&url)
                .multipart(Form::new().part("file", part))
        })
        .await?;

        if !response.status().is_success() {
            return Err(error_from_response(service_names::ANALYSIS, response).await);
        }
        let result: AnalysisResult = decode_json(service_names::ANALYSIS, response).await?;
        debug!(landmarks = result.landmarks.len(), "snapshot analyzed");
        Ok(result)
    }

    /// Analyze one tracker frame and return form tips
    ///
    /// # Errors
    ///
    /// Returns a service error carrying the backend's `error` message, or
    /// an unreachable error on transport failure.
    #[instrument(skip(self, jpeg), fields(bytes = jpeg.len()))]
    pub async fn analyze_frame(&self, jpeg: &[u8]) -> CoachResult<FrameFeedback> {
        let url = format!("{}{}", self.base_url, endpoints::ANALYZE_FRAME);
        let response = send_with_retry(service_names::ANALYSIS, &self.retry, || {
            let part = Part::bytes(jpeg.to_vec()).file_name("frame.jpg");
            shared_client()
                .post(&url)
                .multipart(Form::new().part("file", part))
        })
        .await?;

        if !response.status().is_success() {
            return Err(error_from_response(service_names::ANALYSIS, response).await);
        }
        decode_json(service_names::ANALYSIS, response).await
    }

    /// Analyze a WAV clip for breathing loudness or rep tempo
    ///
    /// # Errors
    ///
    /// Returns a service error carrying the backend's `error` message, or
    /// an unreachable error on transport failure.
    #[instrument(skip(self, wav), fields(bytes = wav.len()))]
    pub async fn analyze_audio(&self, wav: &[u8]) -> CoachResult<AudioFeedback> {
        let url = format!("{}{}", self.base_url, endpoints::ANALYZE_AUDIO);
        let response = send_with_retry(service_names::ANALYSIS, &self.retry, || {
            let part = Part::bytes(wav.to_vec()).file_name("clip.wav");
            shared_client()
                .post(&url)
                .multipart(Form::new().part("file", part))
        })
        .await?;

        if !response.status().is_success() {
            return Err(error_from_response(service_names::ANALYSIS, response).await);
        }
        decode_json(service_names::ANALYSIS, response).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn frame_feedback_decodes_both_shapes() {
        let ok: FrameFeedback =
            serde_json::from_str(r#"{"ok": true, "tips": ["Keep your back straight"]}"#).unwrap();
        assert!(ok.ok);
        assert_eq!(ok.tips, ["Keep your back straight"]);

        // Error bodies carry no tips; defaults keep decoding tolerant
        let bare: FrameFeedback = serde_json::from_str("{}").unwrap();
        assert!(!bare.ok);
        assert!(bare.tips.is_empty());
    }

    #[test]
    fn audio_feedback_accepts_rms_or_tempo() {
        let rms: AudioFeedback = serde_json::from_str(r#"{"ok": true, "rms": 0.12}"#).unwrap();
        assert_eq!(rms.rms, Some(0.12));
        assert_eq!(rms.tempo, None);

        let tempo: AudioFeedback =
            serde_json::from_str(r#"{"ok": true, "tempo": 104.0}"#).unwrap();
        assert_eq!(tempo.tempo, Some(104.0));
    }
}
