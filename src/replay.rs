//! Closed-form replay of the duration table.
//!
//! Computes where a fresh controller must be after N ticks without
//! stepping a [`TrafficLight`](crate::fsm::TrafficLight).  The service and
//! the simulator use it as an oracle to cross-check the controller
//! tick-for-tick.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::fsm::State;
use crate::fsm::states::{CYCLE_ORDER, CYCLE_TICKS, duration, next_state};

/// One state change, stamped with the tick (counted from 1) that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: State,
    pub to: State,
    pub at_tick: u64,
}

/// State of a fresh controller after `ticks` calls to `tick`.
pub fn state_after(ticks: u64) -> State {
    let mut rem = ticks % u64::from(CYCLE_TICKS);
    for state in CYCLE_ORDER {
        let held = u64::from(duration(state));
        if rem < held {
            return state;
        }
        rem -= held;
    }

    debug_assert!(false, "cycle order does not cover CYCLE_TICKS");
    State::Red
}

/// Transitions a fresh controller goes through within its first `ticks`
/// ticks.  Collection stops early once `N` entries are recorded.
pub fn transitions_within<const N: usize>(ticks: u64) -> Vec<Transition, N> {
    let mut out = Vec::new();
    let mut state = State::Red;
    let mut at_tick = u64::from(duration(state));

    while at_tick <= ticks {
        let to = next_state(state);
        if out.push(Transition { from: state, to, at_tick }).is_err() {
            break;
        }
        state = to;
        at_tick += u64::from(duration(state));
    }

    out
}
