// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the client.

pub mod contact;
pub mod ride;
pub mod sos;
pub mod user;

pub use contact::{ContactRelation, EmergencyContact};
pub use ride::{Ride, RideDraft};
pub use sos::{ActiveAlert, AlertReceipt, LocationSample, SettingsUpdate, SosSettings};
pub use user::{ProfileUpdate, PublicUser, UserProfile};
