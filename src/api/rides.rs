// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride membership operations.
//!
//! Thin wrappers over the ride endpoints: every call fetches the bearer
//! token fresh, sends exactly one request, and never updates anything
//! locally. Screens re-fetch when they need fresh membership.

use serde::Deserialize;

use super::client::{ApiClient, MessageResponse};
use crate::error::{ClientError, Result};
use crate::models::ride::{Ride, RideDraft};
use crate::models::user::PublicUser;

/// Client for the `/api/rides/` surface.
#[derive(Clone)]
pub struct RideApi {
    api: ApiClient,
}

/// Response for actions that return the affected ride.
#[derive(Debug, Clone, Deserialize)]
pub struct RideActionResponse {
    pub message: String,
    pub ride: Ride,
}

/// Rides split by the caller's role on them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartitionedRides {
    #[serde(default)]
    pub hosted_rides: Vec<Ride>,
    #[serde(default)]
    pub member_rides: Vec<Ride>,
}

impl RideApi {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Host a new ride.
    pub async fn create(&self, draft: &RideDraft) -> Result<Ride> {
        self.api
            .post_json("/api/rides/create/", draft, "Failed to create ride")
            .await
    }

    /// Join an open ride by its ID.
    pub async fn join_by_id(&self, ride_id: u64) -> Result<RideActionResponse> {
        self.api
            .post_empty(
                &format!("/api/rides/join/{}/", ride_id),
                "Failed to join ride",
            )
            .await
    }

    /// Join a ride by its 6-character code.
    ///
    /// Codes are stored upper-case, so the input is trimmed and upper-cased
    /// before it goes out; an empty code never leaves the device.
    pub async fn join_by_code(&self, code: &str) -> Result<RideActionResponse> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(ClientError::PreconditionFailed(
                "Please enter a ride code".to_string(),
            ));
        }

        let body = serde_json::json!({ "ride_code": code });
        self.api
            .post_json("/api/rides/join-by-code/", &body, "Failed to join ride")
            .await
    }

    /// Open rides the caller can join.
    pub async fn list(&self) -> Result<Vec<Ride>> {
        self.api
            .get_json("/api/rides/list/", "Failed to fetch rides")
            .await
    }

    /// Full record of one ride.
    pub async fn details(&self, ride_id: u64) -> Result<Ride> {
        self.api
            .get_json(
                &format!("/api/rides/{}/", ride_id),
                "Failed to fetch ride details",
            )
            .await
    }

    /// Leave a ride the caller is a member of.
    pub async fn leave(&self, ride_id: u64) -> Result<MessageResponse> {
        self.api
            .post_empty(
                &format!("/api/rides/leave/{}/", ride_id),
                "Failed to leave ride",
            )
            .await
    }

    /// Mark a hosted ride as completed. The backend rejects non-hosts.
    pub async fn complete(&self, ride_id: u64) -> Result<RideActionResponse> {
        self.api
            .post_empty(
                &format!("/api/rides/{}/complete/", ride_id),
                "Failed to complete ride",
            )
            .await
    }

    /// Delete a hosted ride.
    pub async fn delete(&self, ride_id: u64) -> Result<MessageResponse> {
        self.api
            .delete_empty(
                &format!("/api/rides/delete/{}/", ride_id),
                "Failed to delete ride",
            )
            .await
    }

    /// The caller's ongoing rides, split by role.
    pub async fn current(&self) -> Result<PartitionedRides> {
        self.api
            .get_json("/api/rides/current/", "Failed to fetch current rides")
            .await
    }

    /// The caller's completed rides, split by role.
    pub async fn history(&self) -> Result<PartitionedRides> {
        self.api
            .get_json("/api/rides/history/", "Failed to fetch ride history")
            .await
    }

    /// Fellow riders the caller has not reviewed yet.
    pub async fn unreviewed_users(&self, ride_id: u64) -> Result<Vec<PublicUser>> {
        self.api
            .get_json(
                &format!("/api/rides/{}/unreviewed-users/", ride_id),
                "Failed to fetch unreviewed users",
            )
            .await
    }
}
