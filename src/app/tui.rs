//! Terminal management system
//!
//! Handles crossterm backend initialization, raw-mode and alternate-screen
//! setup, and turns polled input plus elapsed time into a single event
//! stream for the controller.

use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Events surfaced to the controller
#[derive(Debug)]
pub enum TuiEvent {
    /// A key press from the terminal
    Key(KeyEvent),
    /// One second of wall-clock time elapsed
    Tick,
}

/// Terminal wrapper that manages the crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    last_tick: Instant,
    tick_rate: Duration,
}

impl Tui {
    /// Create a new TUI instance with a crossterm backend
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            last_tick: Instant::now(),
            // The session countdowns advance once per second.
            tick_rate: Duration::from_secs(1),
        })
    }

    /// Initialize the terminal with raw mode and the alternate screen
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal to its original state
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Get the terminal size for responsive layout handling
    pub fn size(&self) -> io::Result<ratatui::layout::Rect> {
        Ok(self.terminal.size()?)
    }

    /// Check if the terminal meets minimum size requirements (80x24)
    pub fn is_size_adequate(&self) -> io::Result<bool> {
        let size = self.size()?;
        Ok(size.width >= 80 && size.height >= 24)
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Block until the next key press or the next one-second tick.
    ///
    /// Input polling is bounded by the time left until the tick, so key
    /// presses are delivered immediately and ticks never drift behind
    /// input handling.
    pub fn next_event(&mut self) -> io::Result<TuiEvent> {
        loop {
            let timeout = self.tick_rate.saturating_sub(self.last_tick.elapsed());

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    return Ok(TuiEvent::Key(key));
                }
                // Resize and mouse events only trigger a redraw on the
                // next loop iteration; fall through to the tick check.
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(TuiEvent::Tick);
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure the terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}
