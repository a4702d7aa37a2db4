//! Active-call screen implementation
//!
//! Shows who the visitor is talking to, the remaining time as an m:ss
//! clock with a draining gauge, and the mute/end controls. Mute is a
//! display-only stub; there is no audio path behind it.

use crate::flow::Event;
use crate::models::Caller;
use crate::util::units::format_clock;
use crate::CALL_DURATION_SECS;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Active-call screen component
#[derive(Debug, Default)]
pub struct CallScreen;

impl CallScreen {
    /// Create a new call screen
    pub fn new() -> Self {
        Self
    }

    /// Translate a key press into a flow event
    pub fn handle_key(&self, key: KeyEvent) -> Option<Event> {
        match key.code {
            KeyCode::Char('m') | KeyCode::Char('M') => Some(Event::ToggleMute),
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('e') | KeyCode::Char('E') => {
                Some(Event::EndCall)
            }
            _ => None,
        }
    }

    /// Render the call screen
    pub fn render(&self, f: &mut Frame, caller: &Caller, remaining: u64, muted: bool) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Who we are talking with
                Constraint::Length(5), // Countdown clock
                Constraint::Length(3), // Time-left gauge
                Constraint::Min(3),    // Mute status
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let header = Paragraph::new(Line::from(vec![
            Span::raw("Talking with "),
            Span::styled(
                caller.username.clone(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, chunks[0]);

        self.render_clock(f, chunks[1], remaining);
        self.render_gauge(f, chunks[2], remaining);
        self.render_mute_status(f, chunks[3], muted);
        self.render_help(f, chunks[4], muted);
    }

    fn render_clock(&self, f: &mut Frame, area: ratatui::layout::Rect, remaining: u64) {
        let color = if remaining <= 30 {
            Color::Red
        } else {
            Color::Magenta
        };
        let clock = Paragraph::new(format_clock(remaining))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(clock, area);
    }

    fn render_gauge(&self, f: &mut Frame, area: ratatui::layout::Rect, remaining: u64) {
        let ratio = (remaining.min(CALL_DURATION_SECS) as f64) / (CALL_DURATION_SECS as f64);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Time Left"))
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio(ratio)
            .label(format_clock(remaining));
        f.render_widget(gauge, area);
    }

    fn render_mute_status(&self, f: &mut Frame, area: ratatui::layout::Rect, muted: bool) {
        let (text, color) = if muted {
            ("Microphone muted", Color::Yellow)
        } else {
            ("Microphone live", Color::Green)
        };
        let status = Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(status, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect, muted: bool) {
        let mute_label = if muted { " Unmute  " } else { " Mute  " };
        let help_text = vec![Line::from(vec![
            Span::styled(
                "M",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(mute_label),
            Span::styled(
                "E",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" End Call"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_mute_key() {
        let screen = CallScreen::new();
        let event = screen.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE));
        assert!(matches!(event, Some(Event::ToggleMute)));
    }

    #[test]
    fn test_end_call_keys() {
        let screen = CallScreen::new();
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char('e')] {
            let event = screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
            assert!(matches!(event, Some(Event::EndCall)));
        }
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let screen = CallScreen::new();
        assert!(screen
            .handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE))
            .is_none());
    }
}
