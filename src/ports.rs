// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Capability traits implemented by the host application.
//!
//! The client core reaches secure storage, the device location service, the
//! notice UI, and the image picker only through these traits, so platform
//! bindings stay outside the crate.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ClientError;
use crate::models::sos::LocationSample;

/// Storage key under which the host keeps the backend access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Read access to the host's secure credential storage.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Fetch the stored value for `key`, or `None` when absent.
    ///
    /// Looked up fresh before every request, so a rotated token takes
    /// effect on the next call without rebuilding the client.
    async fn get(&self, key: &str) -> Option<String>;
}

/// In-memory [`TokenStore`] for tests and host-less embedding.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an access token.
    pub fn with_token(token: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(ACCESS_TOKEN_KEY.to_string(), token.to_string());
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub async fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    /// Remove a stored value (e.g. on logout).
    pub async fn clear(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }
}

/// Failure modes of a location fix attempt.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// The user declined the permission prompt.
    #[error("Location permission denied")]
    PermissionDenied,

    /// Permission granted, but no fix could be produced.
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

impl From<LocationError> for ClientError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::PermissionDenied => Self::PermissionDenied(err.to_string()),
            LocationError::Unavailable(_) => Self::Internal(anyhow::Error::new(err)),
        }
    }
}

/// One-shot access to the device's position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Request permission if needed and return the current position.
    async fn current_position(&self) -> Result<LocationSample, LocationError>;
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A user-facing notice. The host renders it (toast, banner, log line);
/// the client core only decides when one is due and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// An image chosen by the user, ready for upload.
#[derive(Debug, Clone)]
pub struct PickedImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// One-shot image selection for the profile photo.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Open the host's picker. `None` means the user cancelled.
    async fn pick_image(&self) -> anyhow::Result<Option<PickedImage>>;
}
