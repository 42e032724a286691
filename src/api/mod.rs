// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend REST surfaces.

pub mod client;
pub mod profile;
pub mod rides;
pub mod sos;

pub use client::{ApiClient, MessageResponse};
pub use profile::{ProfileApi, ProfileUpdateResponse};
pub use rides::{PartitionedRides, RideActionResponse, RideApi};
pub use sos::SosApi;
