//! TUI application module
//!
//! Contains the terminal wrapper, the screen components, and the
//! controller that routes keys to the active screen and applies the
//! resulting events to the session.

pub mod app;
pub mod screens;
pub mod tui;

pub use app::App;
pub use screens::{
    CallAlertPopup, CallScreen, JoinScreen, LandingScreen, MatchingScreen, PostCallAction,
    PostCallScreen,
};
pub use tui::{Tui, TuiEvent};
