// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SOS endpoints: alerts, emergency contacts, settings, contact search.

use super::client::{ApiClient, MessageResponse};
use crate::error::Result;
use crate::models::contact::{ContactRelation, EmergencyContact};
use crate::models::sos::{ActiveAlert, AlertReceipt, LocationSample, SettingsUpdate, SosSettings};
use crate::models::user::UserProfile;

/// Client for the `/api/sos/` surface.
#[derive(Clone)]
pub struct SosApi {
    api: ApiClient,
}

impl SosApi {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The caller's emergency contacts, flattened for display.
    pub async fn emergency_contacts(&self) -> Result<Vec<EmergencyContact>> {
        let relations: Vec<ContactRelation> = self
            .api
            .get_json(
                "/api/sos/emergency-contacts/",
                "Failed to fetch emergency contacts",
            )
            .await?;

        Ok(relations.into_iter().map(EmergencyContact::from).collect())
    }

    /// Raise an alert at `position`. The backend notifies the caller's
    /// emergency contacts and reports the fan-out in the receipt.
    pub async fn create_alert(&self, position: LocationSample) -> Result<AlertReceipt> {
        let receipt: AlertReceipt = self
            .api
            .post_json("/api/sos/create/", &position, "Failed to send SOS")
            .await?;

        tracing::info!(alert_id = receipt.id, "SOS alert created");
        Ok(receipt)
    }

    /// Live alerts raised by other users.
    pub async fn active_alerts(&self) -> Result<Vec<ActiveAlert>> {
        self.api
            .get_json("/api/sos/active/", "Failed to fetch active alerts")
            .await
    }

    /// Add a user as an emergency contact.
    pub async fn add_contact(&self, user_id: u64) -> Result<EmergencyContact> {
        let body = serde_json::json!({ "contact_id": user_id });
        let relation: ContactRelation = self
            .api
            .post_json(
                "/api/sos/emergency-contacts/",
                &body,
                "Failed to add emergency contact",
            )
            .await?;

        Ok(relation.into())
    }

    /// Remove a contact by its relation ID (the `id` of a fetched contact).
    /// The backend reads the ID from the request body, not the path.
    pub async fn remove_contact(&self, relation_id: u64) -> Result<MessageResponse> {
        let body = serde_json::json!({ "contact_id": relation_id });
        self.api
            .delete_json(
                "/api/sos/emergency-contacts/",
                &body,
                "Failed to remove emergency contact",
            )
            .await
    }

    /// Search other users by name or email as contact candidates.
    pub async fn search_users(&self, query: &str) -> Result<Vec<UserProfile>> {
        self.api
            .get_json_query(
                "/api/sos/users/",
                &[("search", query)],
                "Failed to search users",
            )
            .await
    }

    /// The caller's SOS notification settings.
    pub async fn settings(&self) -> Result<SosSettings> {
        self.api
            .get_json("/api/sos/settings/", "Failed to fetch settings")
            .await
    }

    /// Update settings; unset fields keep their stored value.
    pub async fn update_settings(&self, update: &SettingsUpdate) -> Result<MessageResponse> {
        self.api
            .post_json("/api/sos/settings/", update, "Failed to update settings")
            .await
    }
}
