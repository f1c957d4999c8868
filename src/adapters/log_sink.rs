//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! whatever logger the binary installed.  A lamp driver would implement
//! the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | tick={} | state={} | elapsed={} | remaining={}",
                    t.total_ticks, t.state, t.elapsed, t.ticks_remaining,
                );
            }
            AppEvent::StateChanged(t) => {
                info!("STATE | {} -> {} at tick {}", t.from, t.to, t.at_tick);
            }
            AppEvent::Started(state) => {
                info!("START | initial_state={}", state);
            }
        }
    }
}
