// ABOUTME: External service clients for the FormCoach platform
// ABOUTME: Shared HTTP client, retry policy, and typed clients for each backend collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

#![deny(unsafe_code)]

//! # FormCoach Services
//!
//! Typed async clients for every external collaborator of the FormCoach
//! app: the pose-analysis service, the chatbot service, the auth service,
//! the media upload endpoint (Cloudinary), and the profile document store.
//!
//! All clients share one pooled HTTP client with explicit request and
//! connection timeouts, and apply a uniform retry policy (exponential
//! backoff on 429/503 and transport errors). Backend-reported errors
//! (non-2xx with a JSON `detail`/`error` message) surface the literal
//! server message through [`formcoach_core::CoachError::Service`].

// Re-export core modules so service code and downstream crates share paths
pub use formcoach_core::constants;
pub use formcoach_core::errors;
pub use formcoach_core::models;

/// Shared pooled HTTP client with configured timeouts
pub mod http_client;
/// Retry policy with exponential backoff for service calls
pub mod retry;
/// Error-body decoding shared by all service clients
pub mod response;
/// Client-side input validation applied before any network call
pub mod validation;

/// Pose/frame/audio analysis service client
pub mod analysis;
/// Login/register service client and session token type
pub mod auth;
/// Chatbot service client
pub mod chatbot;
/// Cloudinary image upload client
pub mod media;
/// Profile document store trait and implementations
pub mod profile_store;

pub use analysis::{AnalysisClient, AudioFeedback, FrameFeedback};
pub use auth::{AuthClient, SessionToken};
pub use chatbot::ChatbotClient;
pub use http_client::{initialize_shared_client, shared_client, HttpClientConfig};
pub use media::MediaClient;
pub use profile_store::{HttpProfileStore, MemoryProfileStore, ProfileStore};
pub use retry::RetryConfig;
