//! Integration tests for the SignalService → controller → sink pipeline.

use crate::mock_sink::RecordingSink;

use trafficlight::app::events::AppEvent;
use trafficlight::app::service::SignalService;
use trafficlight::config::DriverConfig;
use trafficlight::fsm::states::CYCLE_TICKS;
use trafficlight::replay::{self, Transition};
use trafficlight::{State, TrafficLight};

fn make_app(telemetry_interval_ticks: u32) -> (SignalService, RecordingSink) {
    let config = DriverConfig {
        telemetry_interval_ticks,
        ..DriverConfig::default()
    };
    let mut app = SignalService::new(config).unwrap();
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, sink)
}

#[test]
fn start_announces_red() {
    let (app, sink) = make_app(0);
    assert_eq!(sink.events, [AppEvent::Started(State::Red)]);
    assert_eq!(app.state(), State::Red);
    assert_eq!(app.total_ticks(), 0);
}

#[test]
fn one_state_change_per_transition() {
    let (mut app, mut sink) = make_app(0);
    for _ in 0..CYCLE_TICKS {
        app.tick(&mut sink);
    }
    assert_eq!(
        sink.transitions(),
        [
            Transition { from: State::Red, to: State::Green, at_tick: 30 },
            Transition { from: State::Green, to: State::Yellow, at_tick: 55 },
            Transition { from: State::Yellow, to: State::Red, at_tick: 60 },
        ]
    );
}

#[test]
fn state_changes_agree_with_replay() {
    let (mut app, mut sink) = make_app(0);
    let ticks = 5 * u64::from(CYCLE_TICKS);
    for _ in 0..ticks {
        app.tick(&mut sink);
    }
    let expected: heapless::Vec<Transition, 32> = replay::transitions_within(ticks);
    assert_eq!(sink.transitions().as_slice(), expected.as_slice());
}

#[test]
fn telemetry_follows_configured_cadence() {
    let (mut app, mut sink) = make_app(7);
    for _ in 0..50 {
        app.tick(&mut sink);
    }
    assert_eq!(sink.telemetry_count(), 7);

    let Some(AppEvent::Telemetry(last)) = sink
        .events
        .iter()
        .rev()
        .find(|e| matches!(e, AppEvent::Telemetry(_)))
    else {
        panic!("no telemetry emitted");
    };
    assert_eq!(last.total_ticks, 49);
    assert_eq!(last.state, State::Green);
    assert_eq!(last.elapsed, 19);
}

#[test]
fn zero_interval_disables_telemetry() {
    let (mut app, mut sink) = make_app(0);
    for _ in 0..200 {
        app.tick(&mut sink);
    }
    assert_eq!(sink.telemetry_count(), 0);
}

#[test]
fn start_from_snapshot_resumes_mid_state() {
    let mut app = SignalService::new(DriverConfig::default()).unwrap();
    let mut sink = RecordingSink::new();
    let snapshot = TrafficLight::resume(State::Yellow, 3).unwrap();
    app.start_from(snapshot, &mut sink);

    assert_eq!(sink.events, [AppEvent::Started(State::Yellow)]);
    assert_eq!(app.tick(&mut sink), State::Yellow);
    assert_eq!(app.tick(&mut sink), State::Red);
    assert_eq!(
        sink.transitions(),
        [Transition { from: State::Yellow, to: State::Red, at_tick: 2 }]
    );
    assert_eq!(app.controller(), TrafficLight::new());
}
