// ABOUTME: Profile document store abstraction with HTTP and in-memory implementations
// ABOUTME: Get/put/update of user-scoped profile documents with merge-patch semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Profile document store
//!
//! Profiles live in an external, user-scoped document store. The store is
//! modeled as a trait so the app layer is independent of the backing
//! implementation: [`HttpProfileStore`] talks to the REST document API,
//! [`MemoryProfileStore`] backs tests and offline runs.
//!
//! Profiles are fetched fresh per plan-generation request; nothing here
//! caches.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::auth::SessionToken;
use crate::constants::service_names;
use crate::errors::{CoachError, CoachResult};
use crate::http_client::shared_client;
use crate::models::{ProfileUpdate, UserProfile};
use crate::response::{decode_json, error_from_response};
use crate::retry::{send_with_retry, RetryConfig};

/// User-scoped profile document store
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile document for a user
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::NotFound`] when no document exists for the
    /// user, [`CoachError::Auth`] when the store rejects the session
    /// token, or a service/transport error from the backing store.
    async fn get_profile(&self, user_id: &str) -> CoachResult<UserProfile>;

    /// Create or replace the profile document for a user
    ///
    /// # Errors
    ///
    /// Returns a service/transport error from the backing store.
    async fn put_profile(&self, user_id: &str, profile: &UserProfile) -> CoachResult<()>;

    /// Merge-patch the profile document for a user
    ///
    /// Only fields set on the patch are written; the rest of the stored
    /// document is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::NotFound`] when no document exists for the
    /// user, or a service/transport error from the backing store.
    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> CoachResult<()>;
}

/// HTTP implementation against the REST document API
///
/// Documents are addressed as `{base}/profiles/{user_id}`. The session
/// token is injected explicitly rather than read from ambient state.
#[derive(Debug, Clone)]
pub struct HttpProfileStore {
    base_url: String,
    token: Option<SessionToken>,
    retry: RetryConfig,
}

impl HttpProfileStore {
    /// Create a store client against the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            retry: RetryConfig::default(),
        }
    }

    /// Attach a session token sent as a bearer Authorization header
    #[must_use]
    pub fn with_token(mut self, token: SessionToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn document_url(&self, user_id: &str) -> String {
        format!("{}/profiles/{user_id}", self.base_url)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let Some(token) = &self.token else {
            return builder;
        };
        builder.bearer_auth(token.as_str())
    }
}

/// Map a 401 from the document store to an auth error carrying the
/// server's message
async fn unauthorized(response: reqwest::Response) -> CoachError {
    match error_from_response(service_names::PROFILES, response).await {
        CoachError::Service { detail, .. } => CoachError::Auth(detail),
        other => other,
    }
}

#[async_trait]
impl ProfileStore for HttpProfileStore {
    #[instrument(skip(self))]
    async fn get_profile(&self, user_id: &str) -> CoachResult<UserProfile> {
        let url = self.document_url(user_id);
        let response = send_with_retry(service_names::PROFILES, &self.retry, || {
            self.authorize(shared_client().get(&url))
        })
        .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(unauthorized(response).await);
        }
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CoachError::NotFound {
                resource: "profile",
                id: user_id.to_owned(),
            });
        }
        if !response.status().is_success() {
            return Err(error_from_response(service_names::PROFILES, response).await);
        }
        let profile = decode_json(service_names::PROFILES, response).await?;
        debug!("profile fetched");
        Ok(profile)
    }

    #[instrument(skip(self, profile))]
    async fn put_profile(&self, user_id: &str, profile: &UserProfile) -> CoachResult<()> {
        let url = self.document_url(user_id);
        let response = send_with_retry(service_names::PROFILES, &self.retry, || {
            self.authorize(shared_client().put(&url)).json(profile)
        })
        .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(unauthorized(response).await);
        }
        if !response.status().is_success() {
            return Err(error_from_response(service_names::PROFILES, response).await);
        }
        Ok(())
    }

    #[instrument(skip(self, update))]
    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> CoachResult<()> {
        let url = self.document_url(user_id);
        let response = send_with_retry(service_names::PROFILES, &self.retry, || {
            self.authorize(shared_client().patch(&url)).json(update)
        })
        .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(unauthorized(response).await);
        }
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CoachError::NotFound {
                resource: "profile",
                id: user_id.to_owned(),
            });
        }
        if !response.status().is_success() {
            return Err(error_from_response(service_names::PROFILES, response).await);
        }
        Ok(())
    }
}

/// In-memory implementation for tests and offline runs
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    documents: RwLock<HashMap<String, UserProfile>>,
}

impl MemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_profile(&self, user_id: &str) -> CoachResult<UserProfile> {
        let documents = self.documents.read().await;
        documents
            .get(user_id)
            .cloned()
            .ok_or_else(|| CoachError::NotFound {
                resource: "profile",
                id: user_id.to_owned(),
            })
    }

    async fn put_profile(&self, user_id: &str, profile: &UserProfile) -> CoachResult<()> {
        let mut documents = self.documents.write().await;
        documents.insert(user_id.to_owned(), profile.clone());
        Ok(())
    }

    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> CoachResult<()> {
        let mut documents = self.documents.write().await;
        let profile = documents
            .get_mut(user_id)
            .ok_or_else(|| CoachError::NotFound {
                resource: "profile",
                id: user_id.to_owned(),
            })?;
        update.apply_to(profile);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{FitnessGoal, Gender};

    #[tokio::test]
    async fn memory_store_round_trips_documents() {
        let store = MemoryProfileStore::new();
        let profile = UserProfile {
            name: Some("Sam".into()),
            email: Some("sam@example.com".into()),
            height: Some(170.0),
            weight: Some(65.0),
            gender: Some(Gender::Female),
            goal: Some(FitnessGoal::StayFit),
            ..UserProfile::default()
        };
        store.put_profile("user-1", &profile).await.unwrap();
        assert_eq!(store.get_profile("user-1").await.unwrap(), profile);
    }

    #[tokio::test]
    async fn memory_store_merge_patch_preserves_unset_fields() {
        let store = MemoryProfileStore::new();
        let profile = UserProfile {
            name: Some("Sam".into()),
            weight: Some(65.0),
            ..UserProfile::default()
        };
        store.put_profile("user-1", &profile).await.unwrap();

        let patch = ProfileUpdate {
            weight: Some(63.5),
            ..ProfileUpdate::default()
        };
        store.update_profile("user-1", &patch).await.unwrap();

        let updated = store.get_profile("user-1").await.unwrap();
        assert_eq!(updated.weight, Some(63.5));
        assert_eq!(updated.name.as_deref(), Some("Sam"));
    }

    #[tokio::test]
    async fn missing_documents_report_not_found() {
        let store = MemoryProfileStore::new();
        let err = store.get_profile("ghost").await.unwrap_err();
        assert!(matches!(err, CoachError::NotFound { resource: "profile", .. }));

        let patch = ProfileUpdate::default();
        assert!(store.update_profile("ghost", &patch).await.is_err());
    }

    #[test]
    fn http_store_addresses_user_scoped_documents() {
        let store = HttpProfileStore::new("http://127.0.0.1:8000");
        assert_eq!(
            store.document_url("user-1"),
            "http://127.0.0.1:8000/profiles/user-1"
        );
    }
}
