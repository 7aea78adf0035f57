// ABOUTME: Domain constants for the FormCoach platform organized by concern
// ABOUTME: Pose landmark indices, plan decision thresholds, endpoint paths, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Application-wide constants organized by domain

/// Pose landmark indices as emitted by the analysis service
///
/// The analysis backend runs `MediaPipe` Pose; landmark ids follow its
/// 33-point topology. Only the points consumed by the plan generator are
/// named here.
pub mod landmarks {
    /// Left shoulder keypoint
    pub const LEFT_SHOULDER: u32 = 11;
    /// Right shoulder keypoint
    pub const RIGHT_SHOULDER: u32 = 12;
    /// Left hip keypoint
    pub const LEFT_HIP: u32 = 23;
    /// Right hip keypoint
    pub const RIGHT_HIP: u32 = 24;
}

/// Decision thresholds for the workout-plan generator
pub mod thresholds {
    /// BMI above which the fat-loss plan is selected
    pub const BMI_FAT_LOSS: f64 = 25.0;
    /// Waist-to-shoulder ratio above which the upper-body plan is selected
    pub const UPPER_BODY_RATIO: f64 = 0.75;
    /// Ratio used when shoulder or waist width cannot be measured
    pub const DEFAULT_RATIO: f64 = 1.0;
}

/// Fixed exercise catalog identifiers
pub mod exercise_ids {
    /// Push-up catalog id
    pub const PUSHUP: &str = "pushup";
    /// Bodyweight squat catalog id
    pub const SQUAT: &str = "squat";
    /// Bicep curl catalog id
    pub const BICEP_CURL: &str = "bicep_curl";
}

/// Endpoint paths on the FormCoach backend services
pub mod endpoints {
    /// Single-photo pose analysis (multipart `file`)
    pub const ANALYZE_SNAPSHOT: &str = "/analyze/snapshot";
    /// Per-frame form feedback for the live tracker (multipart `file`)
    pub const ANALYZE_FRAME: &str = "/analyze_frame";
    /// Breathing/tempo audio analysis for the live tracker (multipart `file`)
    pub const ANALYZE_AUDIO: &str = "/analyze_audio";
    /// Chatbot round-trip (`{"message"}` -> `{"reply"}`)
    pub const CHATBOT: &str = "/chatbot";
    /// Credential login (`{"email","password"}` -> `{"access_token"}`)
    pub const LOGIN: &str = "/login";
    /// Account registration (`{"username","email","password"}`)
    pub const REGISTER: &str = "/register";
}

/// Logical service names used in logs and error messages
pub mod service_names {
    /// Pose/frame/audio analysis backend
    pub const ANALYSIS: &str = "analysis";
    /// Chatbot backend
    pub const CHATBOT: &str = "chatbot";
    /// Login/register backend
    pub const AUTH: &str = "auth";
    /// Image upload endpoint
    pub const MEDIA: &str = "media";
    /// Profile document store
    pub const PROFILES: &str = "profiles";
}

/// Local storage keys and file names
pub mod storage {
    /// Key under which the opaque session token is persisted
    ///
    /// Matches the mobile app's `AsyncStorage` key so tokens survive a
    /// migration between clients.
    pub const SESSION_TOKEN_KEY: &str = "userToken";
    /// Application directory name under the platform data dir
    pub const APP_DIR: &str = "formcoach";
}

/// Default endpoints for local development
pub mod defaults {
    /// Analysis + auth backend (FastAPI dev server)
    pub const ANALYSIS_SERVICE_URL: &str = "http://127.0.0.1:8000";
    /// Chatbot backend
    pub const CHATBOT_SERVICE_URL: &str = "http://127.0.0.1:8001";
    /// Auth backend (shares the analysis host in development)
    pub const AUTH_SERVICE_URL: &str = "http://127.0.0.1:8000";
    /// Profile document store
    pub const PROFILE_STORE_URL: &str = "http://127.0.0.1:8000";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
}
