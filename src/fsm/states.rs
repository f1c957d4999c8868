//! Duration constants and the static state table.
//!
//! Each state is one plain row: how long it is held and which state
//! follows it.  No closures, no dynamic dispatch, no heap.
//!
//! ```text
//!   RED ──[30 ticks]──▶ GREEN ──[25 ticks]──▶ YELLOW
//!    ▲                                           │
//!    └────────────────[5 ticks]──────────────────┘
//! ```

use super::{State, StateDescriptor};

/// Ticks the signal is held at Red.
pub const RED_DURATION_TICKS: u32 = 30;
/// Ticks the signal is held at Green.
pub const GREEN_DURATION_TICKS: u32 = 25;
/// Ticks the signal is held at Yellow.
pub const YELLOW_DURATION_TICKS: u32 = 5;

/// Length of one full Red → Green → Yellow → Red cycle.
pub const CYCLE_TICKS: u32 = RED_DURATION_TICKS + GREEN_DURATION_TICKS + YELLOW_DURATION_TICKS;

/// States in the order the cycle visits them, starting from the initial state.
pub const CYCLE_ORDER: [State; State::COUNT] = [State::Red, State::Green, State::Yellow];

// ═══════════════════════════════════════════════════════════════════════════
//  Table
// ═══════════════════════════════════════════════════════════════════════════

/// Fixed-size table indexed by `State as usize`.
pub static STATE_TABLE: [StateDescriptor; State::COUNT] = [
    // Index 0 — Red
    StateDescriptor {
        state: State::Red,
        name: State::Red.name(),
        duration: RED_DURATION_TICKS,
        next: State::Green,
    },
    // Index 1 — Yellow
    StateDescriptor {
        state: State::Yellow,
        name: State::Yellow.name(),
        duration: YELLOW_DURATION_TICKS,
        next: State::Red,
    },
    // Index 2 — Green
    StateDescriptor {
        state: State::Green,
        name: State::Green.name(),
        duration: GREEN_DURATION_TICKS,
        next: State::Yellow,
    },
];

/// Table row for `state`.
pub fn descriptor(state: State) -> &'static StateDescriptor {
    let row = &STATE_TABLE[state as usize];
    debug_assert_eq!(row.state, state, "state table out of order");
    row
}

/// Ticks `state` is held before the controller moves on.
pub fn duration(state: State) -> u32 {
    descriptor(state).duration
}

/// The state that follows `state` in the cycle.
pub fn next_state(state: State) -> State {
    descriptor(state).next
}
