//! Unified error type for the traffic light crate.
//!
//! The controller itself cannot fail: `tick` and `state` are total over
//! the closed [`State`] set.  Errors only arise where raw data crosses into
//! the crate (a byte that should name a state, a snapshot rebuilt from
//! parts, a driver configuration).  All variants are `Copy` so they can be
//! passed around without allocation.

use core::fmt;

use crate::fsm::State;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A raw byte does not name one of the three signal states.
    InvalidState(u8),
    /// An elapsed-tick count that could never be observed after a tick:
    /// it has already reached the state's duration.
    ElapsedOutOfRange { state: State, elapsed: u32 },
    /// Driver configuration failed validation.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(raw) => write!(f, "invalid signal state: {raw}"),
            Self::ElapsedOutOfRange { state, elapsed } => write!(
                f,
                "elapsed {elapsed} out of range for {state} (duration {})",
                crate::fsm::states::duration(*state)
            ),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
