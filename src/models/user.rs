//! User records as the backend serializes them.

use serde::{Deserialize, Serialize};

use crate::ports::PickedImage;

/// Full user record, attached to rides and returned by the profile endpoint.
///
/// The backend serializes slightly different field sets per endpoint (the
/// contact search omits `gender` and `student_id`, for instance), so every
/// field beyond the identity block is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// "Male" / "Female" as the backend stores it
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// URL of the uploaded profile photo
    #[serde(default)]
    pub profile_photo: Option<String>,
    /// Push handle for SOS notifications
    #[serde(default)]
    pub expo_push_token: Option<String>,
    /// Last shared position, used for nearby-alert fan-out
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl UserProfile {
    /// "First Last", as every screen renders user names.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Reduced user record used by review listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Fields the profile editor can change. Unset fields keep their stored
/// value; the photo replaces the stored one when present.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub student_id: Option<String>,
    pub photo: Option<PickedImage>,
}
