//! Session flow module
//!
//! Contains the screen-state machine that drives a visitor through the
//! TalkMatch demo.

pub mod session;

pub use session::{Event, Screen, Session};
