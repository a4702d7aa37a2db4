//! Shared data models
//!
//! Small value types passed between the session core and the screens.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// The other party in a call, real or simulated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Anonymous display name shown on the alert and call screens
    pub username: String,
}

impl Caller {
    /// Create a caller from a display name
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Record of a finished call, shown on the post-call screen
#[derive(Debug, Clone)]
pub struct CallSummary {
    /// When the call ended
    pub ended_at: DateTime<Utc>,
    /// Display name of the other party
    pub partner: String,
    /// How long the two sides actually talked
    pub duration: Duration,
}

impl CallSummary {
    /// Create a summary stamped with the current time
    pub fn new(partner: impl Into<String>, duration: Duration) -> Self {
        Self {
            ended_at: Utc::now(),
            partner: partner.into(),
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_from_str_and_string() {
        let a = Caller::new("Quiet Listener");
        let b = Caller::new(String::from("Quiet Listener"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_call_summary_keeps_partner_and_duration() {
        let summary = CallSummary::new("Kind Soul", Duration::from_secs(120));
        assert_eq!(summary.partner, "Kind Soul");
        assert_eq!(summary.duration.as_secs(), 120);
        assert!(summary.ended_at <= Utc::now());
    }
}
