//! TUI screen components
//!
//! One component per screen state plus the modal incoming-call popup.
//! Components hold display-only local state (text inputs, list selection,
//! button focus) and translate key presses into flow events.

pub mod call;
pub mod call_alert;
pub mod join;
pub mod landing;
pub mod matching;
pub mod postcall;

pub use call::CallScreen;
pub use call_alert::CallAlertPopup;
pub use join::JoinScreen;
pub use landing::LandingScreen;
pub use matching::MatchingScreen;
pub use postcall::{PostCallAction, PostCallScreen};
