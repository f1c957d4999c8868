//! Application service — the hexagonal core.
//!
//! [`SignalService`] owns the controller and the driver configuration.
//! The caller supplies ticks; the service reports what changed through
//! the [`EventSink`] port injected at each call site.
//!
//! ```text
//!  tick source ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                  │    SignalService     │
//!                  │  TrafficLight · cfg  │
//!                  └──────────────────────┘
//! ```

use log::info;

use crate::config::DriverConfig;
use crate::error::Result;
use crate::fsm::{State, TrafficLight};
use crate::replay::Transition;

use super::events::{AppEvent, TelemetryData};
use super::ports::EventSink;

// ───────────────────────────────────────────────────────────────
// SignalService
// ───────────────────────────────────────────────────────────────

/// Drives one traffic light controller and reports on it.
pub struct SignalService {
    light: TrafficLight,
    config: DriverConfig,
    total_ticks: u64,
}

impl SignalService {
    /// Construct the service with a fresh controller.
    ///
    /// Does **not** announce anything — call [`start`](Self::start) or
    /// [`start_from`](Self::start_from) next.
    pub fn new(config: DriverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            light: TrafficLight::new(),
            config,
            total_ticks: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the initial state (Red).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.light.state()));
        info!("SignalService started in {}", self.light.state());
    }

    /// Replace the controller with `light` (e.g. a decoded snapshot) and
    /// announce its state.
    pub fn start_from(&mut self, light: TrafficLight, sink: &mut impl EventSink) {
        self.light = light;
        sink.emit(&AppEvent::Started(light.state()));
        info!(
            "SignalService started from {} ({} ticks elapsed)",
            light.state(),
            light.elapsed()
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Advance the controller one tick and report the result.
    pub fn tick(&mut self, sink: &mut impl EventSink) -> State {
        self.total_ticks += 1;
        let prev = self.light.state();
        let state = self.light.tick();

        if state != prev {
            sink.emit(&AppEvent::StateChanged(Transition {
                from: prev,
                to: state,
                at_tick: self.total_ticks,
            }));
        }

        let every = u64::from(self.config.telemetry_interval_ticks);
        if every != 0 && self.total_ticks % every == 0 {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }

        state
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            state: self.light.state(),
            elapsed: self.light.elapsed(),
            ticks_remaining: self.light.ticks_remaining(),
            total_ticks: self.total_ticks,
        }
    }

    /// Current signal state.
    pub fn state(&self) -> State {
        self.light.state()
    }

    /// Ticks driven through this service since construction.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Copy of the controller (for snapshots).
    pub fn controller(&self) -> TrafficLight {
        self.light
    }

    /// Seconds spent in the current state at the configured tick rate.
    pub fn secs_in_state(&self) -> f32 {
        self.light.elapsed() as f32 * self.config.tick_secs()
    }

    /// Configuration the service was built with.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }
}
