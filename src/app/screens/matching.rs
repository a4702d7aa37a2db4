//! Matching screen implementation
//!
//! Shows the candidates whose topics matched the visitor's keywords as a
//! selectable list, or the "no matches yet" state while waiting for the
//! simulated incoming call.

use crate::flow::Event;
use crate::matching::Candidate;
use crate::util::units::ellipsize;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Widest a topic line may get inside a list row
const TOPIC_PREVIEW_CHARS: usize = 70;

/// Matching screen component with candidate selection
#[derive(Debug)]
pub struct MatchingScreen {
    selected_index: usize,
    list_state: ListState,
}

impl MatchingScreen {
    /// Create a new matching screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// Reset the selection for a fresh match list
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    /// Move selection up, wrapping at the top
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = len - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down, wrapping at the bottom
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected_index < len - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Translate a key press into a flow event
    pub fn handle_key(&mut self, key: KeyEvent, matches: &[Candidate]) -> Option<Event> {
        match key.code {
            KeyCode::Esc => Some(Event::Back),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous(matches.len());
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(matches.len());
                None
            }
            KeyCode::Enter => matches
                .get(self.selected_index)
                .cloned()
                .map(Event::CallUser),
            _ => None,
        }
    }

    /// Render the matching screen
    pub fn render(&mut self, f: &mut Frame, matches: &[Candidate]) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Match list or empty state
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let title = Paragraph::new("Who's Talking?")
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        if matches.is_empty() {
            self.render_empty_state(f, chunks[1]);
        } else {
            self.render_matches(f, chunks[1], matches);
        }

        self.render_help(f, chunks[2], matches.is_empty());
    }

    fn render_matches(&mut self, f: &mut Frame, area: ratatui::layout::Rect, matches: &[Candidate]) {
        let items: Vec<ListItem> = matches
            .iter()
            .map(|candidate| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        candidate.username.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        ellipsize(&candidate.topic, TOPIC_PREVIEW_CHARS),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Matches"))
            .highlight_style(Style::default().bg(Color::Magenta).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_empty_state(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No matches yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("You'll be notified if someone else is thinking like you."),
        ];
        let empty = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect, empty: bool) {
        let mut spans = Vec::new();
        if !empty {
            spans.extend([
                Span::styled(
                    "↑↓",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Navigate  "),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Call  "),
            ]);
        }
        spans.extend([
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Back  "),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ]);

        let help = Paragraph::new(vec![Line::from(spans)])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}

impl Default for MatchingScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::seed_candidates;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_navigation_wraps() {
        let mut screen = MatchingScreen::new();
        let len = 3;

        screen.select_previous(len);
        assert_eq!(screen.selected_index, 2);

        screen.select_next(len);
        assert_eq!(screen.selected_index, 0);
        screen.select_next(len);
        assert_eq!(screen.selected_index, 1);
    }

    #[test]
    fn test_enter_calls_selected_candidate() {
        let pool = seed_candidates().unwrap();
        let mut screen = MatchingScreen::new();
        screen.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &pool);

        let event = screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &pool);
        match event {
            Some(Event::CallUser(candidate)) => assert_eq!(candidate.id, pool[1].id),
            other => panic!("expected CallUser, got {:?}", other),
        }
    }

    #[test]
    fn test_enter_with_no_matches_is_noop() {
        let mut screen = MatchingScreen::new();
        let event = screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &[]);
        assert!(event.is_none());
    }

    #[test]
    fn test_esc_goes_back() {
        let mut screen = MatchingScreen::new();
        let event = screen.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &[]);
        assert!(matches!(event, Some(Event::Back)));
    }
}
