// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The SOS countdown state machine.
//!
//! Pure transitions only: timers and the alert request live in the
//! controller, which feeds `press`, `tick` and `resolve` in. One instance
//! covers one screen mount; every cycle ends back in `Idle`.

/// Seconds between arming and the automatic fire.
pub const COUNTDOWN_SECONDS: u8 = 5;

/// Lifecycle of one SOS cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertState {
    /// Nothing armed; the screen shows the full countdown.
    #[default]
    Idle,

    /// Counting down; fires when the countdown is exhausted.
    Armed { remaining: u8 },

    /// The alert request is on its way. Presses are swallowed here, so
    /// a second alert cannot be armed mid-flight.
    Firing,
}

/// What a button press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Rejected: no emergency contacts to notify.
    Rejected,

    /// Countdown armed.
    Armed { seconds: u8 },

    /// Armed countdown cancelled.
    Cancelled,

    /// An alert is already in flight; nothing changed.
    InFlight,
}

/// What a one-second tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting.
    Counting { remaining: u8 },

    /// Countdown exhausted: exactly one alert must be sent now.
    Fire,

    /// No countdown is running (stale tick).
    Disarmed,
}

/// State for one mounted SOS screen.
#[derive(Debug, Default)]
pub struct AlertSession {
    state: AlertState,
}

impl AlertSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AlertState {
        self.state
    }

    /// Seconds the screen renders: the live countdown while armed, the
    /// full countdown otherwise.
    pub fn remaining(&self) -> u8 {
        match self.state {
            AlertState::Armed { remaining } => remaining,
            AlertState::Idle | AlertState::Firing => COUNTDOWN_SECONDS,
        }
    }

    /// Handle the SOS button.
    ///
    /// Arms from `Idle` when there is at least one contact to notify,
    /// cancels a running countdown, and does nothing while an alert is
    /// in flight.
    pub fn press(&mut self, contact_count: usize) -> PressOutcome {
        match self.state {
            AlertState::Idle => {
                if contact_count == 0 {
                    return PressOutcome::Rejected;
                }
                self.state = AlertState::Armed {
                    remaining: COUNTDOWN_SECONDS,
                };
                tracing::debug!(seconds = COUNTDOWN_SECONDS, "SOS armed");
                PressOutcome::Armed {
                    seconds: COUNTDOWN_SECONDS,
                }
            }
            AlertState::Armed { .. } => {
                self.state = AlertState::Idle;
                tracing::debug!("SOS cancelled");
                PressOutcome::Cancelled
            }
            AlertState::Firing => PressOutcome::InFlight,
        }
    }

    /// Advance the countdown by one second.
    ///
    /// The final tick moves to `Firing` and returns [`TickOutcome::Fire`];
    /// the caller owns sending the alert and must close the cycle with
    /// [`resolve`](Self::resolve) afterwards.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            AlertState::Armed { remaining: 1 } => {
                self.state = AlertState::Firing;
                tracing::debug!("SOS countdown exhausted, firing");
                TickOutcome::Fire
            }
            AlertState::Armed { remaining } => {
                let remaining = remaining - 1;
                self.state = AlertState::Armed { remaining };
                TickOutcome::Counting { remaining }
            }
            AlertState::Idle | AlertState::Firing => TickOutcome::Disarmed,
        }
    }

    /// Close the cycle once the alert request finished, success or not.
    pub fn resolve(&mut self) {
        self.state = AlertState::Idle;
    }
}
