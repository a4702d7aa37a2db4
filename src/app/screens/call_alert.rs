//! Incoming-call alert popup
//!
//! Modal dialog drawn over whatever screen is active. While visible it
//! owns the keyboard, so the only choices are accept and decline.

use crate::flow::Event;
use crate::models::Caller;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Incoming-call popup component
#[derive(Debug, Default)]
pub struct CallAlertPopup;

impl CallAlertPopup {
    /// Create a new popup component
    pub fn new() -> Self {
        Self
    }

    /// Translate a key press into accept or decline
    pub fn handle_key(&self, key: KeyEvent) -> Option<Event> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('a') => Some(Event::AcceptCall),
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('d') => Some(Event::DeclineCall),
            _ => None,
        }
    }

    /// Render the popup centered over the current frame
    pub fn render(&self, f: &mut Frame, caller: &Caller) {
        let area = centered_rect(50, 9, f.size());

        // Clear whatever the underlying screen drew in the popup area.
        f.render_widget(Clear, area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{} wants to talk to you about a shared topic.",
                    caller.username
                ),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Accept  "),
                Span::styled(
                    "Esc",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Decline"),
            ]),
        ];

        let popup = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Incoming Call")
                    .border_style(Style::default().fg(Color::Magenta)),
            );
        f.render_widget(popup, area);
    }
}

/// Center a fixed-height popup horizontally by percentage
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
