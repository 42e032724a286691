// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Async driver for the SOS screen.
//!
//! Owns one [`AlertSession`] plus the collaborators a cycle touches: the
//! contact snapshot, the location sample, the token store and the alert
//! endpoint. Button presses arrive on a channel, the countdown runs on a
//! one-second interval, and every state change is published on a `watch`
//! channel for the screen to render.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time;

use crate::api::SosApi;
use crate::error::ClientError;
use crate::models::contact::EmergencyContact;
use crate::models::sos::LocationSample;
use crate::ports::{LocationProvider, Notice, Notifier, TokenStore, ACCESS_TOKEN_KEY};

use super::session::{AlertSession, AlertState, PressOutcome, TickOutcome};

/// Position sent when no fix is available (Dhaka city center).
pub const FALLBACK_LOCATION: LocationSample = LocationSample {
    latitude: 23.797911,
    longitude: 90.414391,
};

/// One countdown step.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Input events for the driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SosEvent {
    /// The SOS button.
    Press,
}

/// Controller for one mounted SOS screen.
pub struct SosController {
    session: AlertSession,
    contacts: Vec<EmergencyContact>,
    position: Option<LocationSample>,
    sos: SosApi,
    tokens: Arc<dyn TokenStore>,
    location: Arc<dyn LocationProvider>,
    notifier: Arc<dyn Notifier>,
    state_tx: watch::Sender<AlertState>,
}

impl SosController {
    /// Build a controller and the state receiver the screen renders from.
    pub fn new(
        sos: SosApi,
        tokens: Arc<dyn TokenStore>,
        location: Arc<dyn LocationProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> (Self, watch::Receiver<AlertState>) {
        let (state_tx, state_rx) = watch::channel(AlertState::Idle);
        let controller = Self {
            session: AlertSession::new(),
            contacts: Vec::new(),
            position: None,
            sos,
            tokens,
            location,
            notifier,
            state_tx,
        };
        (controller, state_rx)
    }

    pub fn state(&self) -> AlertState {
        self.session.state()
    }

    /// Seconds the screen renders on the button.
    pub fn remaining(&self) -> u8 {
        self.session.remaining()
    }

    /// The contact snapshot taken at mount.
    pub fn contacts(&self) -> &[EmergencyContact] {
        &self.contacts
    }

    /// The location sample taken at mount, if one was available.
    pub fn position(&self) -> Option<LocationSample> {
        self.position
    }

    /// Load the contact snapshot and one location sample.
    ///
    /// Also serves as a refresh when the screen regains focus; both
    /// snapshots are replaced wholesale.
    pub async fn mount(&mut self) {
        match self.sos.emergency_contacts().await {
            Ok(contacts) => {
                if contacts.is_empty() {
                    self.notifier
                        .notify(Notice::info("No emergency contacts found"));
                }
                self.contacts = contacts;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Emergency contact fetch failed");
                self.notifier.notify(Notice::error(err.to_string()));
            }
        }

        match self.location.current_position().await {
            Ok(sample) => self.position = Some(sample),
            Err(err) => {
                self.position = None;
                self.notifier.notify(Notice::error(err.to_string()));
            }
        }
    }

    /// Handle the SOS button and surface the matching notice.
    pub fn press(&mut self) -> PressOutcome {
        let outcome = self.session.press(self.contacts.len());
        match outcome {
            PressOutcome::Rejected => {
                self.notifier.notify(Notice::error(
                    "Please add emergency contacts in Settings first",
                ));
            }
            PressOutcome::Armed { seconds } => {
                let count = self.contacts.len();
                let plural = if count > 1 { "s" } else { "" };
                self.notifier.notify(Notice::info(format!(
                    "SOS will be sent to {} contact{} in {} seconds. Tap again to cancel.",
                    count, plural, seconds
                )));
            }
            PressOutcome::Cancelled => {
                self.notifier.notify(Notice::info("Emergency alert cancelled"));
            }
            PressOutcome::InFlight => {}
        }
        self.publish_state();
        outcome
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.session.tick();
        self.publish_state();
        outcome
    }

    /// Send the alert and close the cycle. Ends `Idle` regardless of outcome.
    pub async fn fire(&mut self) {
        Self::perform_fire(
            self.sos.clone(),
            self.tokens.clone(),
            self.notifier.clone(),
            self.contacts.len(),
            self.position,
        )
        .await;
        self.resolve();
    }

    /// Drive the screen until the event channel closes.
    ///
    /// The one-second ticker exists only while armed; leaving `Armed` for
    /// any reason drops it before the next await, so a cancelled countdown
    /// can never tick again. Firing runs as its own task so presses keep
    /// being answered (and swallowed) while the request is in flight.
    pub async fn run(mut self, mut events: mpsc::Receiver<SosEvent>) {
        let mut ticker: Option<time::Interval> = None;

        loop {
            match self.session.state() {
                AlertState::Idle => {
                    ticker = None;
                    match events.recv().await {
                        Some(SosEvent::Press) => {
                            self.press();
                        }
                        None => break,
                    }
                }
                AlertState::Armed { .. } => {
                    let interval = ticker.get_or_insert_with(|| {
                        time::interval_at(time::Instant::now() + TICK_PERIOD, TICK_PERIOD)
                    });
                    tokio::select! {
                        event = events.recv() => match event {
                            Some(SosEvent::Press) => {
                                self.press();
                            }
                            None => break,
                        },
                        _ = interval.tick() => {
                            self.tick();
                        }
                    }
                }
                AlertState::Firing => {
                    ticker = None;
                    let mut task = tokio::spawn(Self::perform_fire(
                        self.sos.clone(),
                        self.tokens.clone(),
                        self.notifier.clone(),
                        self.contacts.len(),
                        self.position,
                    ));

                    let mut channel_closed = false;
                    loop {
                        tokio::select! {
                            event = events.recv(), if !channel_closed => match event {
                                Some(SosEvent::Press) => {
                                    self.press();
                                }
                                None => channel_closed = true,
                            },
                            joined = &mut task => {
                                if let Err(err) = joined {
                                    tracing::error!(error = %err, "SOS fire task failed");
                                }
                                break;
                            }
                        }
                    }

                    self.resolve();
                    if channel_closed {
                        break;
                    }
                }
            }
        }

        tracing::debug!("SOS controller stopped");
    }

    /// The firing flow. At most one alert request leaves here, and only
    /// after the local prechecks pass.
    async fn perform_fire(
        sos: SosApi,
        tokens: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        contact_count: usize,
        position: Option<LocationSample>,
    ) {
        // 1. Credential precheck: nothing goes out without a token
        if tokens.get(ACCESS_TOKEN_KEY).await.is_none() {
            notifier.notify(Notice::error("Please log in to send SOS"));
            return;
        }

        // 2. Nobody to notify
        if contact_count == 0 {
            notifier.notify(Notice::error("No emergency contacts available to notify"));
            return;
        }

        // 3. Position, or the fallback pair
        let position = match position {
            Some(sample) => sample,
            None => {
                notifier.notify(Notice::info(
                    "Location unavailable. Using default coordinates.",
                ));
                FALLBACK_LOCATION
            }
        };

        // 4. The one request of this cycle
        match sos.create_alert(position).await {
            Ok(receipt) => {
                let message = receipt
                    .notification_status
                    .unwrap_or_else(|| "SOS sent to emergency contacts successfully".to_string());
                notifier.notify(Notice::success(message));
            }
            Err(ClientError::AuthMissing) => {
                notifier.notify(Notice::error("Please log in to send SOS"));
            }
            Err(ClientError::BackendRejected(reason)) => {
                notifier.notify(Notice::error(reason));
            }
            Err(err) => {
                tracing::warn!(error = %err, "SOS alert request failed");
                notifier.notify(Notice::error("Failed to send SOS"));
            }
        }
    }

    fn resolve(&mut self) {
        self.session.resolve();
        self.publish_state();
    }

    fn publish_state(&self) {
        self.state_tx.send_replace(self.session.state());
    }
}
