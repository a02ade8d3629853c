//! Viewer module - trait, events, and main entry point
//!
//! The Viewer trait defines a common interface for UI components that:
//! - Render themselves given the session and an area
//! - Handle keyboard input and return events
//!
//! This module also contains the terminal loop that hosts the App.

use super::app::App;
use super::overlay::Overlay;
use super::ui;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use ratatui::Frame;
use std::io;
use std::time::Duration;
use twoproblems_config::AppConfig;
use twoproblems_core::{MatchEngine, Session};

use super::theme::Theme;

/// Events that can be emitted by viewers
///
/// These represent session or layout changes that the App applies after
/// handling input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The pattern input changed
    SetPattern(String),
    /// The test-string input changed
    SetPendingInput(String),
    /// Add the pending test string (Enter or the "Test" action)
    AddTestString,
    /// Load a preset pattern into the pattern input
    LoadPreset(String),
    /// Show or hide the header menu
    ToggleMenu,
    /// Open an overlay panel
    OpenOverlay(Overlay),
    /// Close the open overlay or menu
    Close,
    /// No change to the session
    NoChange,
}

/// Trait for UI viewers
///
/// A viewer is a component that:
/// - Knows how to render itself given the session
/// - Knows how to interpret keyboard input
/// - Emits ViewerEvents when user interactions require state changes
pub trait Viewer {
    /// Render this viewer to the given area
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session, theme: &Theme);

    /// Handle a keyboard event and return the resulting event
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<ViewerEvent>;
}

/// Everything needed to start the interactive lab
pub struct ViewerOptions {
    pub config: AppConfig,
    pub engine: MatchEngine,
    /// Initial pattern
    pub pattern: Option<String>,
    /// Initial test strings, added in order
    pub tests: Vec<String>,
}

/// Build the App described by `options` without touching the terminal
pub fn build_app(options: ViewerOptions) -> App {
    let mut session = Session::with_engine(options.engine);
    for test in options.tests {
        session.set_pending_input(test);
        session.add_test_string();
    }
    if let Some(pattern) = options.pattern {
        session.set_pattern(pattern);
    }
    App::new(session, &options.config)
}

/// Run the interactive lab until the user quits
pub fn run_viewer(options: ViewerOptions) -> io::Result<()> {
    let tick_rate = Duration::from_millis(options.config.viewer.tick_rate_ms);
    let mut app = build_app(options);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    tracing::info!("viewer started");
    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        // Render the full UI every frame
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                // The next draw() picks up the new dimensions
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }
}
