// ABOUTME: Cloudinary unsigned image upload client for profile pictures
// ABOUTME: Multipart file plus upload_preset, returns the hosted secure_url
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::constants::service_names;
use crate::errors::CoachResult;
use crate::http_client::shared_client;
use crate::response::{decode_json, error_from_response};
use crate::retry::{send_with_retry, RetryConfig};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Client for unsigned Cloudinary image uploads
///
/// Uses the unsigned upload flow: a cloud name and an upload preset, no API
/// secret on the client. Upload errors come back as
/// `{"error": {"message"}}` and surface verbatim.
#[derive(Debug, Clone)]
pub struct MediaClient {
    cloud_name: String,
    upload_preset: String,
    retry: RetryConfig,
}

impl MediaClient {
    /// Create a client for the given Cloudinary cloud and preset
    #[must_use]
    pub fn new(cloud_name: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
            retry: RetryConfig::default(),
        }
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Upload URL for this client's cloud
    #[must_use]
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }

    /// Upload a JPEG and return its hosted secure URL
    ///
    /// # Errors
    ///
    /// Returns a service error carrying Cloudinary's error message, or an
    /// unreachable error on transport failure.
    #[instrument(skip(self, jpeg), fields(bytes = jpeg.len()))]
    pub async fn upload_image(&self, jpeg: &[u8]) -> CoachResult<String> {
        let url = self.upload_url();
        let response = send_with_retry(service_names::MEDIA, &self.retry, || {
            let part = Part::bytes(jpeg.to_vec()).file_name("profile.jpg");
            let form = Form::new()
                .part("file", part)
                .text("upload_preset", self.upload_preset.clone());
            shared_client().post(&url).multipart(form)
        })
        .await?;

        if !response.status().is_success() {
            return Err(error_from_response(service_names::MEDIA, response).await);
        }
        let upload: UploadResponse = decode_json(service_names::MEDIA, response).await?;
        info!(url = %upload.secure_url, "image uploaded");
        Ok(upload.secure_url)
    }
}
