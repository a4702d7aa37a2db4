//! TalkMatch - anonymous voice-matching demo
//!
//! A TUI walkthrough of the TalkMatch flow: a landing page, a topic-entry
//! form, a mock match list, a simulated incoming call, a five-minute call
//! countdown, and a post-call screen. Matching is a keyword filter over a
//! built-in candidate pool and calls are simulated with timers; there is
//! no audio transport, signaling, or server.

use std::fmt;

// Public re-exports
pub mod app;
pub mod flow;
pub mod matching;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum TalkMatchError {
    /// Terminal I/O failed
    IoError(std::io::Error),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Built-in data could not be loaded
    DataError(String),
}

impl fmt::Display for TalkMatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TalkMatchError::IoError(err) => write!(f, "I/O error: {}", err),
            TalkMatchError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            TalkMatchError::DataError(msg) => write!(f, "Data error: {}", msg),
        }
    }
}

impl std::error::Error for TalkMatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TalkMatchError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TalkMatchError {
    fn from(err: std::io::Error) -> Self {
        TalkMatchError::IoError(err)
    }
}

impl From<serde_json::Error> for TalkMatchError {
    fn from(err: serde_json::Error) -> Self {
        TalkMatchError::DataError(format!("JSON parsing error: {}", err))
    }
}

/// Result type alias for TalkMatch operations
pub type Result<T> = std::result::Result<T, TalkMatchError>;

// Common constants
pub const APP_NAME: &str = "talkmatch";
/// Seconds spent on the match list before the simulated incoming call fires
pub const INCOMING_CALL_DELAY_SECS: u64 = 5;
/// Length of a simulated call in seconds
pub const CALL_DURATION_SECS: u64 = 300;
/// Display name used for the simulated incoming caller
pub const ANONYMOUS_CALLER: &str = "Anonymous User";
