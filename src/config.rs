//! Driver configuration.
//!
//! Parameters for whatever supplies the tick cadence and consumes the
//! reported state.  The per-state durations are fixed policy constants in
//! [`fsm::states`](crate::fsm::states) and cannot be configured.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tick-driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    // --- Timing ---
    /// Wall-clock length of one tick (milliseconds).  Only used to report
    /// seconds-in-state; the controller itself counts ticks.
    pub tick_interval_ms: u32,

    // --- Reporting ---
    /// Emit a telemetry event every N ticks (0 = never).
    pub telemetry_interval_ticks: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,       // 1 Hz
            telemetry_interval_ticks: 10, // every 10 s at 1 Hz
        }
    }
}

impl DriverConfig {
    /// Reject values the service cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("tick_interval_ms must be non-zero"));
        }
        Ok(())
    }

    /// Length of one tick in seconds.
    pub fn tick_secs(&self) -> f32 {
        self.tick_interval_ms as f32 / 1000.0
    }
}
