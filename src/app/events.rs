//! Outbound application events.
//!
//! The [`SignalService`](super::service::SignalService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use serde::{Deserialize, Serialize};

use crate::fsm::State;
use crate::replay::Transition;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppEvent {
    /// The service has started (carries initial state).
    Started(State),

    /// The signal changed colour.
    StateChanged(Transition),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryData {
    pub state: State,
    pub elapsed: u32,
    pub ticks_remaining: u32,
    pub total_ticks: u64,
}
