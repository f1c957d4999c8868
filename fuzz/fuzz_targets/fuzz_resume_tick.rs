//! Fuzz target: `State::from_u8` → `TrafficLight::resume` → `tick`
//!
//! Treats the input as a raw snapshot (state byte, little-endian elapsed)
//! followed by a tick count, and asserts the controller never panics,
//! never skips a state, and never leaves `elapsed` at or above the
//! current state's duration.
//!
//! cargo fuzz run fuzz_resume_tick

#![no_main]

use libfuzzer_sys::fuzz_target;
use trafficlight::fsm::states::{duration, next_state};
use trafficlight::{State, TrafficLight};

fuzz_target!(|data: &[u8]| {
    if data.len() < 7 {
        return;
    }

    let Ok(state) = State::from_u8(data[0]) else {
        return;
    };
    let elapsed = u32::from_le_bytes([data[1], data[2], data[3], data[4]]);
    let ticks = u16::from_le_bytes([data[5], data[6]]);

    let Ok(mut light) = TrafficLight::resume(state, elapsed) else {
        assert!(elapsed >= duration(state), "rejected a reachable snapshot");
        return;
    };

    for _ in 0..ticks {
        let before = light.state();
        let now = light.tick();
        assert!(now == before || now == next_state(before), "skipped a state");
        assert!(light.elapsed() < duration(now), "elapsed escaped its bound");
    }
});
