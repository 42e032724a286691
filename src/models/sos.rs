// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SOS alert records and notification settings.

use serde::{Deserialize, Serialize};

/// A captured device position. Also the exact alert-creation request body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
}

/// Alert record echoed back when an alert is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertReceipt {
    pub id: u64,
    pub latitude: f64,
    pub longitude: f64,
    /// "active" on creation
    pub status: String,
    /// When the alert was recorded (ISO 8601)
    pub timestamp: String,
    /// Fan-out summary, e.g. "Notifications sent to 3 users"
    #[serde(default)]
    pub notification_status: Option<String>,
}

/// Live alert of another user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveAlert {
    pub id: u64,
    /// ID of the user who raised the alert
    pub user: u64,
    pub latitude: f64,
    pub longitude: f64,
    /// When the alert was raised (ISO 8601)
    pub timestamp: String,
    pub status: String,
}

/// Per-user SOS notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SosSettings {
    pub sound_enabled: bool,
    pub location_enabled: bool,
    pub notifications_enabled: bool,
    pub vibration_enabled: bool,
    /// Message pushed to notified contacts, `None` for the backend default
    #[serde(default)]
    pub emergency_message: Option<String>,
}

/// Partial settings update; unset fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibration_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_message: Option<String>,
}
