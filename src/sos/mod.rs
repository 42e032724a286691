// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SOS alert lifecycle: the countdown state machine and its async driver.

pub mod controller;
pub mod session;

pub use controller::{SosController, SosEvent, FALLBACK_LOCATION};
pub use session::{AlertSession, AlertState, PressOutcome, TickOutcome, COUNTDOWN_SECONDS};
