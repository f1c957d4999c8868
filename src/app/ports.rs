//! Port traits — the boundary between the signal core and the outside world.
//!
//! ```text
//!   SignalService ──▶ EventSink ──▶ Adapter (log, lamp driver, test recorder)
//! ```

use super::events::AppEvent;

/// The domain emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
