//! Post-call screen implementation
//!
//! Thanks the visitor, shows a short summary of the finished call, and
//! offers the talk-again and exit choices.

use crate::flow::Event;
use crate::models::CallSummary;
use crate::util::units::format_clock;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Available actions on the post-call screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostCallAction {
    TalkAgain,
    Exit,
}

impl PostCallAction {
    /// Get all available actions
    pub fn all() -> Vec<Self> {
        vec![Self::TalkAgain, Self::Exit]
    }

    /// Get display text for the action
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::TalkAgain => "Talk to Someone Else",
            Self::Exit => "Exit",
        }
    }

    fn to_event(&self) -> Event {
        match self {
            Self::TalkAgain => Event::TalkAgain,
            Self::Exit => Event::Exit,
        }
    }
}

/// Post-call screen component
#[derive(Debug)]
pub struct PostCallScreen {
    selected_action: PostCallAction,
}

impl PostCallScreen {
    /// Create a new post-call screen
    pub fn new() -> Self {
        Self {
            selected_action: PostCallAction::TalkAgain,
        }
    }

    /// Reset the selection, used on entering the screen
    pub fn reset(&mut self) {
        self.selected_action = PostCallAction::TalkAgain;
    }

    /// Get the selected action
    pub fn selected_action(&self) -> &PostCallAction {
        &self.selected_action
    }

    /// Select the next action
    pub fn select_next_action(&mut self) {
        let actions = PostCallAction::all();
        let current = actions
            .iter()
            .position(|a| a == &self.selected_action)
            .unwrap_or(0);
        self.selected_action = actions[(current + 1) % actions.len()].clone();
    }

    /// Select the previous action
    pub fn select_previous_action(&mut self) {
        let actions = PostCallAction::all();
        let current = actions
            .iter()
            .position(|a| a == &self.selected_action)
            .unwrap_or(0);
        let prev = if current == 0 {
            actions.len() - 1
        } else {
            current - 1
        };
        self.selected_action = actions[prev].clone();
    }

    /// Translate a key press into a flow event
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Event> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_previous_action();
                None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.select_next_action();
                None
            }
            KeyCode::Enter => Some(self.selected_action.to_event()),
            KeyCode::Esc => Some(Event::Exit),
            _ => None,
        }
    }

    /// Render the post-call screen
    pub fn render(&self, f: &mut Frame, last_call: Option<&CallSummary>) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Message and summary
                Constraint::Min(5),    // Action buttons
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let title = Paragraph::new("Thanks for sharing your thoughts")
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        self.render_message(f, chunks[1], last_call);
        self.render_actions(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_message(
        &self,
        f: &mut Frame,
        area: ratatui::layout::Rect,
        last_call: Option<&CallSummary>,
    ) {
        let mut lines = vec![Line::from(
            "We hope you had a meaningful conversation. Want to connect again?",
        )];
        if let Some(summary) = last_call {
            lines.push(Line::from(Span::styled(
                format!(
                    "You talked with {} for {}.",
                    summary.partner,
                    format_clock(summary.duration.as_secs())
                ),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let message = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(message, area);
    }

    fn render_actions(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (action, button_area) in PostCallAction::all().iter().zip(buttons.iter()) {
            let selected = action == &self.selected_action;
            let style = if selected {
                Style::default()
                    .bg(Color::Magenta)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let button = Paragraph::new(action.display_text())
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(button, *button_area);
        }
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "←→",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Choose  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Confirm  "),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
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

impl Default for PostCallScreen {
    fn default() -> Self {
        Self::new()
    }
}
