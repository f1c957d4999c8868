//! Application core — signal orchestration, zero I/O.
//!
//! Wraps the controller in a service that counts ticks and reports what
//! happened through the [`ports::EventSink`] port, keeping this layer
//! testable without any real tick source or lamp driver.

pub mod events;
pub mod ports;
pub mod service;
