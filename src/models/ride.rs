// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride records as the backend serializes them.

use serde::{Deserialize, Serialize};

use super::user::UserProfile;

/// A ride group.
///
/// Everything here is backend-owned; the client re-fetches instead of
/// deriving state locally, so a stale record is at worst one refresh old.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: u64,
    pub host: UserProfile,
    /// One of the backend's vehicle choices ("Private Car", "CNG", ...)
    pub vehicle_type: String,
    pub pickup_name: String,
    #[serde(default)]
    pub pickup_longitude: Option<f64>,
    #[serde(default)]
    pub pickup_latitude: Option<f64>,
    pub destination_name: String,
    #[serde(default)]
    pub destination_longitude: Option<f64>,
    #[serde(default)]
    pub destination_latitude: Option<f64>,
    /// Departure date/time (ISO 8601)
    pub departure_time: String,
    /// Decimal carried exactly as the backend renders it, e.g. "450.00"
    pub total_fare: String,
    /// Backend-computed share: total fare over host plus members
    pub per_person_fare: f64,
    pub seats_available: u32,
    pub is_female_only: bool,
    #[serde(default)]
    pub vehicle_number_plate: Option<String>,
    /// 6-character join code
    pub ride_code: String,
    pub is_completed: bool,
    /// When the ride was created (ISO 8601)
    pub created_at: String,
    /// Joined users; the backend lists the host first
    #[serde(default)]
    pub members: Vec<UserProfile>,
}

impl Ride {
    /// Whether `user_id` hosts this ride.
    pub fn is_host(&self, user_id: u64) -> bool {
        self.host.id == user_id
    }

    /// Whether `user_id` appears in the member list.
    ///
    /// The backend includes the host in `members`, so hosting implies
    /// membership here.
    pub fn is_member(&self, user_id: u64) -> bool {
        self.members.iter().any(|m| m.id == user_id)
    }

    /// Departure time parsed for sorting and display.
    pub fn departure(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.departure_time)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .ok()
    }
}

/// Fields the create-ride form submits.
#[derive(Debug, Clone, Serialize)]
pub struct RideDraft {
    pub vehicle_type: String,
    pub pickup_name: String,
    pub destination_name: String,
    /// Departure date/time (ISO 8601)
    pub departure_time: String,
    pub total_fare: f64,
    pub is_female_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number_plate: Option<String>,
}
