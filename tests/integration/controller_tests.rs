//! Controller behaviour through the public API only.

use trafficlight::fsm::states::{CYCLE_TICKS, duration, next_state};
use trafficlight::replay;
use trafficlight::{State, TrafficLight};

// ── Initialisation and exact durations ────────────────────────

#[test]
fn fresh_controller_reports_red() {
    let light = TrafficLight::new();
    assert_eq!(light.state(), State::Red);
}

#[test]
fn red_lasts_exactly_thirty_ticks() {
    let mut light = TrafficLight::new();
    for n in 1..30 {
        assert_eq!(light.tick(), State::Red, "left Red early at tick {n}");
    }
    assert_eq!(light.tick(), State::Green);
}

#[test]
fn sixty_ticks_is_a_full_cycle() {
    let mut light = TrafficLight::new();
    for _ in 0..CYCLE_TICKS {
        light.tick();
    }
    assert_eq!(light.state(), State::Red);
    assert_eq!(light.elapsed(), 0);
}

// ── Order and replay agreement ────────────────────────────────

#[test]
fn visits_states_in_cycle_order() {
    let mut light = TrafficLight::new();
    let mut seen = vec![light.state()];
    for _ in 0..(2 * CYCLE_TICKS) {
        let s = light.tick();
        if Some(&s) != seen.last() {
            seen.push(s);
        }
    }
    assert_eq!(
        seen,
        [
            State::Red,
            State::Green,
            State::Yellow,
            State::Red,
            State::Green,
            State::Yellow,
            State::Red,
        ]
    );
}

#[test]
fn agrees_with_replay_for_ten_cycles() {
    let mut light = TrafficLight::new();
    for n in 1..=u64::from(10 * CYCLE_TICKS) {
        assert_eq!(light.tick(), replay::state_after(n), "tick {n}");
    }
}

#[test]
fn transitions_match_replay_trace() {
    let ticks = 3 * u64::from(CYCLE_TICKS) + 7;
    let expected: heapless::Vec<replay::Transition, 16> = replay::transitions_within(ticks);

    let mut light = TrafficLight::new();
    let mut actual = Vec::new();
    for n in 1..=ticks {
        let from = light.state();
        let to = light.tick();
        if to != from {
            actual.push(replay::Transition { from, to, at_tick: n });
        }
    }
    assert_eq!(actual.as_slice(), expected.as_slice());
}

// ── Resume ────────────────────────────────────────────────────

#[test]
fn resumed_controller_finishes_remaining_ticks() {
    for state in [State::Red, State::Yellow, State::Green] {
        let held = duration(state);
        let mut light = TrafficLight::resume(state, held - 3).unwrap();
        assert_eq!(light.ticks_remaining(), 3);
        light.tick();
        light.tick();
        assert_eq!(light.state(), state);
        assert_eq!(light.tick(), next_state(state));
    }
}

#[test]
fn snapshot_roundtrips_through_postcard() {
    let mut light = TrafficLight::new();
    for _ in 0..42 {
        light.tick();
    }
    let bytes = postcard::to_allocvec(&light).unwrap();
    let back: TrafficLight = postcard::from_bytes(&bytes).unwrap();
    assert_eq!(back, light);
    assert_eq!(back.state(), State::Green);
    assert_eq!(back.elapsed(), 12);
}
