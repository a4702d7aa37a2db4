//! Utility modules
//!
//! Shared formatting helpers used by the screens.

pub mod units;
