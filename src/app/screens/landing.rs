//! Landing screen implementation
//!
//! Title, tagline, the three feature cards, and the start prompt.

use crate::flow::Event;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Landing screen component
#[derive(Debug, Default)]
pub struct LandingScreen;

impl LandingScreen {
    /// Create a new landing screen
    pub fn new() -> Self {
        Self
    }

    /// Translate a key press into a flow event
    pub fn handle_key(&self, key: KeyEvent) -> Option<Event> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Event::StartClick),
            _ => None,
        }
    }

    /// Render the landing screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title
                Constraint::Length(3), // Tagline
                Constraint::Min(7),    // Feature cards
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_tagline(f, chunks[1]);
        self.render_features(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = Paragraph::new("TalkMatch")
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            );
        f.render_widget(title, area);
    }

    fn render_tagline(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let tagline =
            Paragraph::new("Talk to someone who just gets it. No signups. Just a shared voice.")
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
        f.render_widget(tagline, area);
    }

    fn render_features(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        for (card, text) in cards
            .iter()
            .zip(["Anonymous", "5-Minute Chats", "Topic-Matched"])
        {
            let feature = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(feature, *card);
        }
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Start Talking  "),
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
