// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Emergency contact records.
//!
//! The backend stores contacts as user-to-user relations; the client
//! flattens them into what the SOS screen renders.

use serde::{Deserialize, Serialize};

use super::user::UserProfile;

/// Contact relation as the backend serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRelation {
    /// Relation ID (what removal refers to)
    pub id: u64,
    /// The contact's user record
    pub contact: UserProfile,
    /// When the relation was created (ISO 8601)
    pub added_at: String,
}

/// Flattened contact for display and the SOS snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyContact {
    /// Relation ID, passed back when removing the contact
    pub id: u64,
    /// The contact's own user ID
    pub contact_id: u64,
    /// "First Last"
    pub name: String,
    /// Phone number, "N/A" when the contact has none on file
    pub phone: String,
}

impl From<ContactRelation> for EmergencyContact {
    fn from(relation: ContactRelation) -> Self {
        Self {
            id: relation.id,
            contact_id: relation.contact.id,
            name: relation.contact.full_name(),
            phone: relation
                .contact
                .phone_number
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}
