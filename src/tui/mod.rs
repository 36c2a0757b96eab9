//! Interactive terminal UI for sentiment analysis.
//!
//! A single screen with a multi-line input box, Analyze and Clear buttons,
//! and a results area showing the overall verdict, the score table, the
//! per-word table and a distribution chart.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sentiscope::sentiment::SentimentAnalyzer;
//! use sentiscope::tui::SentimentExplorer;
//!
//! let mut explorer = SentimentExplorer::new(SentimentAnalyzer::vader(), 2)?;
//! explorer.run()?;
//! // Terminal is restored on drop
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod actions;
pub mod app;
pub mod input;
pub mod theme;
pub mod view;

use crate::observability::set_tui_active;
use crate::sentiment::{PolarityScorer, SentimentAnalyzer, VaderScorer};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub use app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the terminal and the application state for one interactive session.
pub struct SentimentExplorer<S: PolarityScorer = VaderScorer> {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App<S>,
}

impl<S: PolarityScorer> SentimentExplorer<S> {
    /// Switch the terminal to raw mode and the alternate screen.
    pub fn new(analyzer: SentimentAnalyzer<S>, precision: usize) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        set_tui_active(true);

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::new(analyzer, precision),
        })
    }

    /// Pre-fill the input box before the session starts.
    pub fn with_input(mut self, text: &str) -> Self {
        self.app.set_input(text);
        self
    }

    /// Event loop: redraw, wait for a key, apply it. Returns when the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.terminal.draw(|frame| view::render(frame, &self.app))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                // Resize needs no handling; the next draw uses the new size
                _ => {}
            }
        }
        Ok(())
    }

    /// Restore the terminal.
    pub fn cleanup(&mut self) -> io::Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl<S: PolarityScorer> Drop for SentimentExplorer<S> {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
