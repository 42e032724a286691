// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride-share client core: the SOS alert lifecycle and the backend REST
//! surfaces.
//!
//! This crate owns everything between the screens and the backend: the
//! armed-countdown SOS state machine with its async driver, and stateless
//! clients for rides, emergency contacts, settings and profiles. Platform
//! services (secure storage, location, notices, image picking) plug in
//! through the traits in [`ports`].

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod sos;

use std::sync::Arc;

use api::{ApiClient, ProfileApi, RideApi, SosApi};
use config::Config;
use ports::TokenStore;

/// The backend surfaces bundled for embedding.
pub struct RideShareClient {
    pub rides: RideApi,
    pub sos: SosApi,
    pub profile: ProfileApi,
}

impl RideShareClient {
    /// Build every surface over one shared HTTP client and token store.
    pub fn new(config: &Config, tokens: Arc<dyn TokenStore>) -> error::Result<Self> {
        let api = ApiClient::new(config, tokens)?;
        Ok(Self {
            rides: RideApi::new(api.clone()),
            sos: SosApi::new(api.clone()),
            profile: ProfileApi::new(api),
        })
    }
}
