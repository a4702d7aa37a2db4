//! Join screen implementation
//!
//! Two-field form for the display name and the topic the visitor wants
//! to talk about. Submission requires both fields to be non-empty.

use crate::flow::Event;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Which form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JoinField {
    Name,
    Topic,
}

/// Join screen component with editable name and topic inputs
#[derive(Debug)]
pub struct JoinScreen {
    username: String,
    topic: String,
    focus: JoinField,
}

impl JoinScreen {
    /// Create a new join screen with empty inputs
    pub fn new() -> Self {
        Self {
            username: String::new(),
            topic: String::new(),
            focus: JoinField::Name,
        }
    }

    /// Clear both inputs and reset focus, used on (re-)entering the screen
    pub fn reset(&mut self) {
        self.username.clear();
        self.topic.clear();
        self.focus = JoinField::Name;
    }

    /// Translate a key press into a flow event, editing the inputs as a
    /// side effect. Submission is refused while either field is blank.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Event> {
        match key.code {
            KeyCode::Esc => Some(Event::Back),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.focus = match self.focus {
                    JoinField::Name => JoinField::Topic,
                    JoinField::Topic => JoinField::Name,
                };
                None
            }
            KeyCode::Enter => {
                let username = self.username.trim();
                let topic = self.topic.trim();
                if username.is_empty() || topic.is_empty() {
                    return None;
                }
                Some(Event::JoinSubmit {
                    username: username.to_string(),
                    topic: topic.to_string(),
                })
            }
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
                None
            }
            KeyCode::Char(c) => {
                self.focused_field_mut().push(c);
                None
            }
            _ => None,
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            JoinField::Name => &mut self.username,
            JoinField::Topic => &mut self.topic,
        }
    }

    /// Render the join screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Name input
                Constraint::Min(5),    // Topic input
                Constraint::Length(2), // Matching hint
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let title = Paragraph::new("Join a Conversation")
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        self.render_input(
            f,
            chunks[1],
            "Your Display Name",
            &self.username,
            "Anonymous Panda",
            self.focus == JoinField::Name,
        );
        self.render_input(
            f,
            chunks[2],
            "What would you like to talk about?",
            &self.topic,
            "Feeling lonely, struggling with burnout, excited about my new job...",
            self.focus == JoinField::Topic,
        );

        let hint = Paragraph::new("Your topic will be used to match you with others.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hint, chunks[3]);

        self.render_help(f, chunks[4]);
    }

    fn render_input(
        &self,
        f: &mut Frame,
        area: ratatui::layout::Rect,
        label: &str,
        value: &str,
        placeholder: &str,
        focused: bool,
    ) {
        let border_style = if focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = if value.is_empty() {
            Line::from(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        } else if focused {
            Line::from(vec![
                Span::raw(value.to_string()),
                Span::styled("_", Style::default().fg(Color::Magenta)),
            ])
        } else {
            Line::from(Span::raw(value.to_string()))
        };

        let input = Paragraph::new(text).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(border_style),
        );
        f.render_widget(input, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "Tab",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Switch Field  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Search for Matches  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Back"),
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

impl Default for JoinScreen {
    fn default() -> Self {
        Self::new()
    }
}
