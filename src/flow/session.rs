//! Session state machine
//!
//! Owns the screen flow for a single visitor: landing, join form, match
//! list, active call, and post-call. Transitions are pure steps over an
//! owned `Session`, so the flow is testable without a terminal, and all
//! timer behaviour is driven by explicit `Event::Tick`s instead of
//! wall-clock callbacks.

use crate::matching::{self, Candidate};
use crate::models::{CallSummary, Caller};
use crate::{ANONYMOUS_CALLER, CALL_DURATION_SECS, INCOMING_CALL_DELAY_SECS};
use std::time::Duration;

/// Screens a visitor can be on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing page with the start prompt
    Landing,
    /// Display name and topic entry form
    Join,
    /// Mock match list for the submitted topic
    Matching,
    /// Active simulated call with countdown
    Calling,
    /// Post-call screen with talk-again/exit choices
    PostCall,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Landing
    }
}

/// User intents and timer events consumed by the session
#[derive(Debug, Clone)]
pub enum Event {
    /// Start button on the landing page
    StartClick,
    /// Join form submitted with both fields filled in
    JoinSubmit { username: String, topic: String },
    /// Back button (join and matching screens)
    Back,
    /// Call a candidate from the match list
    CallUser(Candidate),
    /// Accept the incoming-call alert
    AcceptCall,
    /// Decline the incoming-call alert
    DeclineCall,
    /// Hang up the active call
    EndCall,
    /// Flip the display-only mute flag
    ToggleMute,
    /// Return to the join form from the post-call screen
    TalkAgain,
    /// Leave the post-call screen and reset the session
    Exit,
    /// One simulated second of elapsed time
    Tick,
}

/// Controller-owned state for the current visitor's flow
///
/// Both delays (the simulated incoming call and the call countdown) live
/// here as plain counters scoped to their owning screen, so leaving that
/// screen cancels them by construction.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Read-only candidate pool the filter runs against
    pool: Vec<Candidate>,
    screen: Screen,
    username: String,
    topic: String,
    /// Candidates matching the submitted topic, in pool order
    matches: Vec<Candidate>,
    /// The other party while a call is active or proposed
    caller: Option<Caller>,
    /// True while an incoming-call prompt awaits accept/decline
    call_alert: bool,
    /// Seconds until the simulated incoming call fires, armed on entering Matching
    incoming_delay: Option<u64>,
    /// Seconds left on the active call, armed on entering Calling
    call_remaining: Option<u64>,
    muted: bool,
    /// Record of the most recently finished call
    last_call: Option<CallSummary>,
}

impl Session {
    /// Create a fresh session on the landing screen
    pub fn new(pool: Vec<Candidate>) -> Self {
        Self {
            pool,
            ..Self::default()
        }
    }

    /// Get the currently active screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Get the visitor's chosen display name
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the submitted topic text
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Get the candidates matching the submitted topic
    pub fn matches(&self) -> &[Candidate] {
        &self.matches
    }

    /// Get the current call counterpart, if any
    pub fn caller(&self) -> Option<&Caller> {
        self.caller.as_ref()
    }

    /// Check whether the incoming-call alert is visible
    pub fn call_alert(&self) -> bool {
        self.call_alert
    }

    /// Get the seconds left on the active call
    pub fn call_remaining(&self) -> Option<u64> {
        self.call_remaining
    }

    /// Check the display-only mute flag
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get the summary of the most recently finished call
    pub fn last_call(&self) -> Option<&CallSummary> {
        self.last_call.as_ref()
    }

    /// Apply one event to the session, returning the next session state.
    ///
    /// Events with no handler in the current screen are no-ops; structural
    /// invariants are checked with debug assertions after every step.
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::StartClick if self.screen == Screen::Landing => {
                self.screen = Screen::Join;
            }
            Event::JoinSubmit { username, topic } if self.screen == Screen::Join => {
                self.matches = matching::filter_candidates(&topic, &self.pool);
                self.username = username;
                self.topic = topic;
                self.enter_matching();
            }
            Event::Back if self.screen == Screen::Join => {
                self.screen = Screen::Landing;
            }
            Event::Back if self.screen == Screen::Matching && !self.call_alert => {
                self.screen = Screen::Join;
                self.incoming_delay = None;
                self.caller = None;
            }
            Event::CallUser(candidate) if self.screen == Screen::Matching && !self.call_alert => {
                self.enter_calling(Caller::new(&candidate.username));
            }
            Event::AcceptCall if self.call_alert => {
                debug_assert!(self.caller.is_some(), "call alert visible without a caller");
                self.call_alert = false;
                if let Some(caller) = self.caller.take() {
                    self.enter_calling(caller);
                }
            }
            Event::DeclineCall if self.call_alert => {
                // Only the alert goes away; the underlying screen is untouched
                // and the delay is not re-armed until Matching is re-entered.
                self.call_alert = false;
            }
            Event::EndCall if self.screen == Screen::Calling => {
                self.finish_call();
            }
            Event::ToggleMute if self.screen == Screen::Calling => {
                // Display-only stub; there is no audio to mute.
                self.muted = !self.muted;
            }
            Event::TalkAgain if self.screen == Screen::PostCall => {
                self.screen = Screen::Join;
            }
            Event::Exit if self.screen == Screen::PostCall => {
                let pool = std::mem::take(&mut self.pool);
                self = Self::new(pool);
            }
            Event::Tick => self.tick(),
            _ => {}
        }

        debug_assert!(self.invariants_hold(), "session invariants violated");
        self
    }

    /// Advance both screen-scoped timers by one simulated second
    fn tick(&mut self) {
        match self.screen {
            Screen::Matching => {
                if let Some(delay) = self.incoming_delay {
                    if delay <= 1 {
                        self.incoming_delay = None;
                        self.caller = Some(Caller::new(ANONYMOUS_CALLER));
                        self.call_alert = true;
                    } else {
                        self.incoming_delay = Some(delay - 1);
                    }
                }
            }
            Screen::Calling => {
                if let Some(left) = self.call_remaining {
                    let left = left.saturating_sub(1);
                    self.call_remaining = Some(left);
                    if left == 0 {
                        self.finish_call();
                    }
                }
            }
            _ => {}
        }
    }

    fn enter_matching(&mut self) {
        self.screen = Screen::Matching;
        self.call_alert = false;
        self.caller = None;
        self.incoming_delay = Some(INCOMING_CALL_DELAY_SECS);
    }

    fn enter_calling(&mut self, caller: Caller) {
        debug_assert!(!caller.username.is_empty(), "caller must have a username");
        self.screen = Screen::Calling;
        self.caller = Some(caller);
        self.call_alert = false;
        self.incoming_delay = None;
        self.call_remaining = Some(CALL_DURATION_SECS);
        self.muted = false;
    }

    /// Shared exit path for manual hang-up and the countdown reaching zero
    fn finish_call(&mut self) {
        let remaining = self.call_remaining.take().unwrap_or(0);
        let talked = CALL_DURATION_SECS.saturating_sub(remaining);
        if let Some(caller) = self.caller.take() {
            self.last_call = Some(CallSummary::new(
                caller.username,
                Duration::from_secs(talked),
            ));
        }
        self.screen = Screen::PostCall;
        self.muted = false;
    }

    fn invariants_hold(&self) -> bool {
        if self.call_alert && self.caller.is_none() {
            return false;
        }
        if self.call_alert && self.screen == Screen::Calling {
            return false;
        }
        if self.screen == Screen::Calling
            && (self.caller.is_none() || self.call_remaining.is_none())
        {
            return false;
        }
        if self.incoming_delay.is_some() && self.screen != Screen::Matching {
            return false;
        }
        if self.call_remaining.is_some() && self.screen != Screen::Calling {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Candidate> {
        matching::seed_candidates().expect("seed pool should parse")
    }

    fn joined(topic: &str) -> Session {
        Session::new(pool())
            .apply(Event::StartClick)
            .apply(Event::JoinSubmit {
                username: "Alex".to_string(),
                topic: topic.to_string(),
            })
    }

    #[test]
    fn test_session_starts_on_landing() {
        let session = Session::new(pool());
        assert_eq!(session.screen(), Screen::Landing);
        assert!(session.username().is_empty());
        assert!(session.caller().is_none());
        assert!(!session.call_alert());
    }

    #[test]
    fn test_start_click_opens_join() {
        let session = Session::new(pool()).apply(Event::StartClick);
        assert_eq!(session.screen(), Screen::Join);
    }

    #[test]
    fn test_join_submit_stores_fields_and_filters() {
        let session = joined("feeling lonely");
        assert_eq!(session.screen(), Screen::Matching);
        assert_eq!(session.username(), "Alex");
        assert_eq!(session.topic(), "feeling lonely");
        // "feeling" (len > 3) matches the first seed candidate's topic.
        assert!(!session.matches().is_empty());
        assert!(session.matches()[0].topic.to_lowercase().contains("feeling"));
    }

    #[test]
    fn test_join_submit_with_short_tokens_yields_no_matches() {
        let session = joined("so sad");
        assert_eq!(session.screen(), Screen::Matching);
        assert!(session.matches().is_empty());
    }

    #[test]
    fn test_back_from_join_and_matching() {
        let session = Session::new(pool()).apply(Event::StartClick).apply(Event::Back);
        assert_eq!(session.screen(), Screen::Landing);

        let session = joined("burnout").apply(Event::Back);
        assert_eq!(session.screen(), Screen::Join);
    }

    #[test]
    fn test_call_user_enters_calling_with_caller() {
        let session = joined("burnout");
        let candidate = session.matches()[0].clone();
        let session = session.apply(Event::CallUser(candidate.clone()));

        assert_eq!(session.screen(), Screen::Calling);
        assert_eq!(session.caller().unwrap().username, candidate.username);
        assert_eq!(session.call_remaining(), Some(CALL_DURATION_SECS));
        assert!(!session.is_muted());
    }

    #[test]
    fn test_incoming_call_fires_after_delay() {
        let mut session = joined("burnout");
        for _ in 0..INCOMING_CALL_DELAY_SECS - 1 {
            session = session.apply(Event::Tick);
            assert!(!session.call_alert());
        }
        session = session.apply(Event::Tick);
        assert!(session.call_alert());
        assert_eq!(session.screen(), Screen::Matching);
        assert_eq!(session.caller().unwrap().username, ANONYMOUS_CALLER);
    }

    #[test]
    fn test_accept_call_enters_calling() {
        let mut session = joined("burnout");
        for _ in 0..INCOMING_CALL_DELAY_SECS {
            session = session.apply(Event::Tick);
        }
        let session = session.apply(Event::AcceptCall);
        assert_eq!(session.screen(), Screen::Calling);
        assert!(!session.call_alert());
        assert_eq!(session.caller().unwrap().username, ANONYMOUS_CALLER);
    }

    #[test]
    fn test_decline_call_clears_only_the_alert() {
        let mut session = joined("burnout");
        for _ in 0..INCOMING_CALL_DELAY_SECS {
            session = session.apply(Event::Tick);
        }
        let mut session = session.apply(Event::DeclineCall);
        assert_eq!(session.screen(), Screen::Matching);
        assert!(!session.call_alert());

        // The delay is armed once per Matching entry; no second call comes.
        for _ in 0..INCOMING_CALL_DELAY_SECS * 2 {
            session = session.apply(Event::Tick);
        }
        assert!(!session.call_alert());
    }

    #[test]
    fn test_back_from_matching_cancels_pending_call() {
        let mut session = joined("burnout").apply(Event::Tick).apply(Event::Back);
        assert_eq!(session.screen(), Screen::Join);
        for _ in 0..INCOMING_CALL_DELAY_SECS * 2 {
            session = session.apply(Event::Tick);
        }
        assert!(!session.call_alert());
    }

    #[test]
    fn test_end_call_reaches_postcall_with_summary() {
        let session = joined("burnout");
        let candidate = session.matches()[0].clone();
        let session = session
            .apply(Event::CallUser(candidate.clone()))
            .apply(Event::Tick)
            .apply(Event::Tick)
            .apply(Event::EndCall);

        assert_eq!(session.screen(), Screen::PostCall);
        assert!(session.caller().is_none());
        let summary = session.last_call().unwrap();
        assert_eq!(summary.partner, candidate.username);
        assert_eq!(summary.duration.as_secs(), 2);
    }

    #[test]
    fn test_countdown_ends_call_after_full_duration() {
        let session = joined("burnout");
        let candidate = session.matches()[0].clone();
        let mut session = session.apply(Event::CallUser(candidate));

        for _ in 0..CALL_DURATION_SECS - 1 {
            session = session.apply(Event::Tick);
            assert_eq!(session.screen(), Screen::Calling);
        }
        session = session.apply(Event::Tick);
        assert_eq!(session.screen(), Screen::PostCall);
        assert_eq!(session.last_call().unwrap().duration.as_secs(), CALL_DURATION_SECS);
    }

    #[test]
    fn test_toggle_mute_is_calling_only() {
        let session = joined("burnout");
        let candidate = session.matches()[0].clone();
        let session = session.apply(Event::CallUser(candidate));

        let session = session.apply(Event::ToggleMute);
        assert!(session.is_muted());
        let session = session.apply(Event::ToggleMute);
        assert!(!session.is_muted());

        // Outside Calling the toggle is a no-op.
        let landing = Session::new(pool()).apply(Event::ToggleMute);
        assert!(!landing.is_muted());
    }

    #[test]
    fn test_talk_again_returns_to_join() {
        let session = joined("burnout");
        let candidate = session.matches()[0].clone();
        let session = session
            .apply(Event::CallUser(candidate))
            .apply(Event::EndCall)
            .apply(Event::TalkAgain);
        assert_eq!(session.screen(), Screen::Join);
    }

    #[test]
    fn test_exit_resets_session_fields() {
        let session = joined("burnout");
        let candidate = session.matches()[0].clone();
        let session = session
            .apply(Event::CallUser(candidate))
            .apply(Event::EndCall)
            .apply(Event::Exit);

        assert_eq!(session.screen(), Screen::Landing);
        assert!(session.username().is_empty());
        assert!(session.topic().is_empty());
        assert!(session.matches().is_empty());
        assert!(session.caller().is_none());
        // The pool survives the reset so a fresh join can still match.
        let session = session.apply(Event::StartClick).apply(Event::JoinSubmit {
            username: "Sam".to_string(),
            topic: "burnout".to_string(),
        });
        assert!(!session.matches().is_empty());
    }

    #[test]
    fn test_invalid_events_are_no_ops() {
        let session = Session::new(pool())
            .apply(Event::EndCall)
            .apply(Event::AcceptCall)
            .apply(Event::TalkAgain)
            .apply(Event::Tick);
        assert_eq!(session.screen(), Screen::Landing);
        assert!(!session.call_alert());
    }
}
