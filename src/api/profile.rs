// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile read and update.

use serde::Deserialize;

use super::client::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::user::{ProfileUpdate, UserProfile};
use crate::ports::ImagePicker;

/// Client for the `/api/users/` surface.
#[derive(Clone)]
pub struct ProfileApi {
    api: ApiClient,
}

/// Update response carrying the fresh profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateResponse {
    pub message: String,
    pub user: UserProfile,
}

impl ProfileApi {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The caller's own profile.
    pub async fn profile(&self) -> Result<UserProfile> {
        self.api
            .get_json("/api/users/profile/", "Failed to fetch profile")
            .await
    }

    /// Apply profile edits, optionally replacing the photo.
    ///
    /// Goes out as a multipart form because of the photo; the backend
    /// reads the file part under the `profile_photo` field name.
    pub async fn update(&self, update: ProfileUpdate) -> Result<ProfileUpdateResponse> {
        let mut form = reqwest::multipart::Form::new();
        if let Some(first_name) = update.first_name {
            form = form.text("first_name", first_name);
        }
        if let Some(last_name) = update.last_name {
            form = form.text("last_name", last_name);
        }
        if let Some(gender) = update.gender {
            form = form.text("gender", gender);
        }
        if let Some(student_id) = update.student_id {
            form = form.text("student_id", student_id);
        }
        if let Some(photo) = update.photo {
            let part = reqwest::multipart::Part::bytes(photo.bytes)
                .file_name(photo.file_name)
                .mime_str(&photo.mime_type)
                .map_err(|e| ClientError::Internal(anyhow::Error::new(e)))?;
            form = form.part("profile_photo", part);
        }

        self.api
            .put_multipart("/api/users/profile/", form, "Failed to update profile")
            .await
    }

    /// Let the host pick a photo, then submit `update` with it.
    ///
    /// Cancelling the picker submits the remaining edits without a photo.
    pub async fn update_with_picked_photo(
        &self,
        picker: &dyn ImagePicker,
        mut update: ProfileUpdate,
    ) -> Result<ProfileUpdateResponse> {
        if update.photo.is_none() {
            update.photo = picker.pick_image().await?;
        }
        self.update(update).await
    }
}
