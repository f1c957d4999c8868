//! Table-driven traffic light state machine.
//!
//! Classic embedded FSM pattern expressed in Rust:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  STATE_TABLE                                │
//! │  ┌─────────┬──────────┬──────────┐          │
//! │  │ State   │ duration │ next     │          │
//! │  ├─────────┼──────────┼──────────┤          │
//! │  │ Red     │ 30       │ Green    │          │
//! │  │ Yellow  │ 5        │ Red      │          │
//! │  │ Green   │ 25       │ Yellow   │          │
//! │  └─────────┴──────────┴──────────┘          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Each call to [`TrafficLight::tick`] consumes exactly one tick of
//! logical time.  Once the ticks spent in the current state reach that
//! state's duration the controller moves to the row's `next` state and
//! the counter restarts at zero.  At most one transition happens per tick.

pub mod states;

use core::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// The colour the signal is currently showing.
///
/// Discriminants are stable and index [`states::STATE_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum State {
    Red = 0,
    Yellow = 1,
    Green = 2,
}

impl State {
    /// Total number of states — used to size the table array.
    pub const COUNT: usize = 3;

    /// Convert a raw discriminant back to a `State`.
    pub fn from_u8(raw: u8) -> Result<Self> {
        match raw {
            0 => Ok(Self::Red),
            1 => Ok(Self::Yellow),
            2 => Ok(Self::Green),
            _ => Err(Error::InvalidState(raw)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
        }
    }
}

impl TryFrom<u8> for State {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self> {
        Self::from_u8(raw)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single signal state.
#[derive(Debug)]
pub struct StateDescriptor {
    pub state: State,
    pub name: &'static str,
    /// Ticks the state is held before moving on.
    pub duration: u32,
    pub next: State,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// A single traffic light controller.
///
/// Plain value: two fields, no owned resources, no allocation.  Callers
/// that share one across threads must serialise access themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Parts")]
pub struct TrafficLight {
    state: State,
    /// Ticks elapsed since the last transition.
    elapsed: u32,
}

impl TrafficLight {
    /// A controller showing Red with no ticks elapsed.
    pub const fn new() -> Self {
        Self {
            state: State::Red,
            elapsed: 0,
        }
    }

    /// Rebuild a controller mid-state.
    ///
    /// `elapsed` must be below the duration of `state`, since any larger
    /// value would already have caused a transition.
    pub fn resume(state: State, elapsed: u32) -> Result<Self> {
        if elapsed >= states::duration(state) {
            return Err(Error::ElapsedOutOfRange { state, elapsed });
        }
        Ok(Self { state, elapsed })
    }

    /// Advance logical time by one tick and return the resulting state.
    ///
    /// 1. Increment the elapsed counter.
    /// 2. Look up the current state's row in the table.
    /// 3. If the counter has reached the duration, move to `next` and
    ///    reset the counter.
    pub fn tick(&mut self) -> State {
        self.elapsed = self.elapsed.saturating_add(1);

        let row = states::descriptor(self.state);
        if self.elapsed >= row.duration {
            debug!("signal transition: {} -> {}", self.state, row.next);
            self.state = row.next;
            self.elapsed = 0;
        }

        debug_assert!(
            self.elapsed < states::duration(self.state),
            "elapsed {} not below duration of {}",
            self.elapsed,
            self.state
        );
        self.state
    }

    /// The current state.  Does not advance time.
    pub fn state(&self) -> State {
        self.state
    }

    /// Ticks spent in the current state.
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Ticks left until the next transition.
    pub fn ticks_remaining(&self) -> u32 {
        states::duration(self.state).saturating_sub(self.elapsed)
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated wire form; decoding goes through [`TrafficLight::resume`].
#[derive(Deserialize)]
struct Parts {
    state: State,
    elapsed: u32,
}

impl TryFrom<Parts> for TrafficLight {
    type Error = Error;

    fn try_from(parts: Parts) -> Result<Self> {
        Self::resume(parts.state, parts.elapsed)
    }
}
