//! Traffic light controller library.
//!
//! A deterministic, tick-driven state machine for embedded targets plus
//! the thin service layer and adapters used to drive it.  The library is
//! `no_std` and never allocates; the host simulator binary lives in
//! `main.rs`.

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod replay;

pub use error::{Error, Result};
pub use fsm::{State, TrafficLight};
