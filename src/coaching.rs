// ABOUTME: End-to-end coaching flows orchestrating analysis, profiles, planning, chat, and auth
// ABOUTME: CoachingService wires the service clients, session store, and plan generator together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Coaching orchestration
//!
//! [`CoachingService`] owns one client per external collaborator plus the
//! session store, all injected explicitly at construction. Flows mirror the
//! app's screens:
//!
//! - photo → `analyze_snapshot` → fresh profile fetch → `generate_plan`
//! - chat message → reply
//! - login/register → session persistence
//! - profile picture → Cloudinary upload → profile merge-patch
//!
//! Errors stop at this boundary: every public method returns a
//! [`CoachError`] whose display string is the user-facing message
//! (including literal backend `detail` text), and nothing is retried
//! beyond the explicit policy inside the service clients.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument};

use formcoach_core::models::{AnalysisResult, ProfileUpdate, UserProfile, WorkoutPlan};
use formcoach_intelligence::generate_plan;
use formcoach_services::auth::SessionToken;
use formcoach_services::errors::{CoachError, CoachResult};
use formcoach_services::{
    AnalysisClient, AuthClient, ChatbotClient, HttpClientConfig, HttpProfileStore, MediaClient,
    ProfileStore,
};

use crate::config::FormCoachConfig;
use crate::session::SessionStore;

/// Orchestrates the end-to-end coaching flows
pub struct CoachingService {
    analysis: AnalysisClient,
    chatbot: ChatbotClient,
    auth: AuthClient,
    media: Option<MediaClient>,
    profiles: Arc<dyn ProfileStore>,
    session: SessionStore,
}

impl CoachingService {
    /// Build the service from configuration, wiring the HTTP profile store
    ///
    /// Initializes the shared HTTP client timeouts; call once per process.
    #[must_use]
    pub fn from_config(config: &FormCoachConfig, session: SessionStore) -> Self {
        formcoach_services::initialize_shared_client(HttpClientConfig {
            timeout: Duration::from_secs(config.http.timeout_secs),
            connect_timeout: Duration::from_secs(config.http.connect_timeout_secs),
        });
        let retry = config.retry.to_retry_config();

        Self {
            analysis: AnalysisClient::new(&config.analysis_service_url)
                .with_retry(retry.clone()),
            chatbot: ChatbotClient::new(&config.chatbot_service_url).with_retry(retry.clone()),
            auth: AuthClient::new(&config.auth_service_url).with_retry(retry.clone()),
            media: config.cloudinary.as_ref().map(|cloudinary| {
                MediaClient::new(&cloudinary.cloud_name, &cloudinary.upload_preset)
                    .with_retry(retry.clone())
            }),
            profiles: Arc::new(
                HttpProfileStore::new(&config.profile_store_url).with_retry(retry),
            ),
            session,
        }
    }

    /// Build the service from explicit parts, for tests and custom wiring
    #[must_use]
    pub fn new(
        analysis: AnalysisClient,
        chatbot: ChatbotClient,
        auth: AuthClient,
        media: Option<MediaClient>,
        profiles: Arc<dyn ProfileStore>,
        session: SessionStore,
    ) -> Self {
        Self {
            analysis,
            chatbot,
            auth,
            media,
            profiles,
            session,
        }
    }

    /// Log in and persist the session token
    ///
    /// # Errors
    ///
    /// Returns validation, service, or storage errors; on any failure no
    /// token is persisted.
    pub async fn login(&self, email: &str, password: &str) -> CoachResult<SessionToken> {
        let token = self.auth.login(email, password).await?;
        self.session.store(&token)?;
        Ok(token)
    }

    /// Register a new account after client-side validation
    ///
    /// # Errors
    ///
    /// Returns a validation error when the confirmation does not match,
    /// else whatever the auth service reports.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> CoachResult<()> {
        formcoach_services::validation::validate_password_confirmation(
            password,
            password_confirmation,
        )?;
        self.auth.register(username, email, password).await
    }

    /// Clear the persisted session
    ///
    /// # Errors
    ///
    /// Returns a storage error when the session file cannot be removed.
    pub fn logout(&self) -> CoachResult<()> {
        self.session.clear()
    }

    /// The persisted session token, if a session exists
    ///
    /// # Errors
    ///
    /// Returns a storage error when the session file is unreadable.
    pub fn session_token(&self) -> CoachResult<Option<SessionToken>> {
        self.session.load()
    }

    /// Analyze a photo and return the detected landmarks
    ///
    /// # Errors
    ///
    /// Returns the analysis service's error (including its literal `detail`
    /// message, e.g. when no person is detected).
    pub async fn analyze_photo(&self, jpeg: &[u8]) -> CoachResult<AnalysisResult> {
        self.analysis.analyze_snapshot(jpeg).await
    }

    /// Full plan flow: analyze a photo, fetch the profile fresh, generate
    ///
    /// The generator itself never fails; errors come only from the two
    /// service calls ahead of it.
    ///
    /// # Errors
    ///
    /// Returns analysis or profile-store errors.
    #[instrument(skip(self, jpeg))]
    pub async fn plan_from_photo(&self, user_id: &str, jpeg: &[u8]) -> CoachResult<WorkoutPlan> {
        let analysis = self.analysis.analyze_snapshot(jpeg).await?;
        let profile = self.profiles.get_profile(user_id).await?;
        let plan = generate_plan(&analysis, &profile);
        info!(title = %plan.title, "workout plan generated");
        Ok(plan)
    }

    /// Generate a plan from an analysis result already in hand
    ///
    /// # Errors
    ///
    /// Returns profile-store errors.
    pub async fn plan_from_analysis(
        &self,
        user_id: &str,
        analysis: &AnalysisResult,
    ) -> CoachResult<WorkoutPlan> {
        let profile = self.profiles.get_profile(user_id).await?;
        Ok(generate_plan(analysis, &profile))
    }

    /// One chat round-trip
    ///
    /// # Errors
    ///
    /// Returns validation or chatbot-service errors.
    pub async fn chat(&self, message: &str) -> CoachResult<String> {
        self.chatbot.send_message(message).await
    }

    /// Fetch the user's profile document
    ///
    /// # Errors
    ///
    /// Returns profile-store errors, including not-found.
    pub async fn profile(&self, user_id: &str) -> CoachResult<UserProfile> {
        self.profiles.get_profile(user_id).await
    }

    /// Merge-patch the user's profile document
    ///
    /// # Errors
    ///
    /// Returns profile-store errors, including not-found.
    pub async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> CoachResult<()> {
        self.profiles.update_profile(user_id, update).await
    }

    /// Upload a new profile picture and record its URL on the profile
    ///
    /// # Errors
    ///
    /// Returns a config error when uploads are not configured, else media
    /// or profile-store errors.
    #[instrument(skip(self, jpeg))]
    pub async fn update_profile_picture(
        &self,
        user_id: &str,
        jpeg: &[u8],
    ) -> CoachResult<String> {
        let media = self.media.as_ref().ok_or_else(|| {
            CoachError::Config("Cloudinary upload is not configured".to_owned())
        })?;
        let url = media.upload_image(jpeg).await?;
        let update = ProfileUpdate {
            profile_pic: Some(url.clone()),
            ..ProfileUpdate::default()
        };
        self.profiles.update_profile(user_id, &update).await?;
        Ok(url)
    }

    /// Per-frame tracker feedback
    ///
    /// # Errors
    ///
    /// Returns analysis-service errors.
    pub async fn track_frame(
        &self,
        jpeg: &[u8],
    ) -> CoachResult<formcoach_services::FrameFeedback> {
        self.analysis.analyze_frame(jpeg).await
    }

    /// Tracker audio feedback
    ///
    /// # Errors
    ///
    /// Returns analysis-service errors.
    pub async fn track_audio(
        &self,
        wav: &[u8],
    ) -> CoachResult<formcoach_services::AudioFeedback> {
        self.analysis.analyze_audio(wav).await
    }
}
