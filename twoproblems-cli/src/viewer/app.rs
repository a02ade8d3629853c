//! Main application state and event handling
//!
//! The App struct brings together:
//! - Session (pattern, test strings and results)
//! - The two inputs, the header and the overlays (the UI components)
//! - Focus management (which input has keyboard focus)
//! - Global key handling (quit, menu, overlays, delegating to components)

use super::header::Header;
use super::input::{InputField, TextInput};
use super::overlay::{CheatsheetPanel, Overlay, PresetPicker};
use super::theme::Theme;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use twoproblems_config::{AppConfig, ViewerConfig};
use std::cell::Cell;
use twoproblems_core::Session;

/// Which input currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    PatternInput,
    TestInput,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::PatternInput => Focus::TestInput,
            Focus::TestInput => Focus::PatternInput,
        }
    }
}

/// The main application
pub struct App {
    pub session: Session,

    pub pattern_input: TextInput,
    pub test_input: TextInput,

    pub header: Header,
    pub cheatsheet: CheatsheetPanel,
    pub presets: PresetPicker,

    /// Open popup, drawn over everything and receiving keys first
    pub overlay: Option<Overlay>,

    pub focus: Focus,
    pub theme: Theme,
    pub settings: ViewerConfig,

    /// First visible row of the results list
    pub results_scroll: u16,
    /// Wrapped result rows that did not fit at the last render
    pub results_overflow: Cell<u16>,

    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, config: &AppConfig) -> Self {
        let mut pattern_input = TextInput::new(InputField::Pattern);
        pattern_input.set_value(session.pattern());
        pattern_input.set_focused(true);
        let mut test_input = TextInput::new(InputField::TestString);
        test_input.set_value(session.pending_input());

        App {
            session,
            pattern_input,
            test_input,
            header: Header::new(config.viewer.header_collapse_width),
            cheatsheet: CheatsheetPanel::new(),
            presets: PresetPicker::new(config.presets.clone()),
            overlay: None,
            focus: Focus::default(),
            theme: Theme::default(),
            settings: config.viewer.clone(),
            results_scroll: 0,
            results_overflow: Cell::new(0),
            should_quit: false,
        }
    }

    /// Toggle focus between the pattern and test inputs
    pub fn toggle_focus(&mut self) {
        self.set_focus(self.focus.toggle());
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.pattern_input.set_focused(focus == Focus::PatternInput);
        self.test_input.set_focused(focus == Focus::TestInput);
    }

    /// Handle a keyboard event
    ///
    /// Returns whether the state changed (needed for re-rendering)
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        let global = match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if control => {
                self.should_quit = true;
                return true;
            }
            KeyCode::F(1) => Some(ViewerEvent::ToggleMenu),
            KeyCode::F(2) => Some(ViewerEvent::OpenOverlay(Overlay::CommonPatterns)),
            KeyCode::F(3) => Some(ViewerEvent::OpenOverlay(Overlay::Cheatsheet)),
            _ => None,
        };
        if let Some(event) = global {
            return self.process_viewer_event(event);
        }

        // Popups take the keyboard while open
        let event = if let Some(overlay) = self.overlay {
            match overlay {
                Overlay::Cheatsheet => self.cheatsheet.handle_key(key, &self.session),
                Overlay::CommonPatterns => self.presets.handle_key(key, &self.session),
            }
        } else if self.header.is_menu_open() {
            self.header.handle_key(key, &self.session)
        } else {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    self.toggle_focus();
                    return true;
                }
                KeyCode::PageUp => {
                    self.results_scroll = self.results_scroll.saturating_sub(5);
                    return true;
                }
                KeyCode::PageDown => {
                    let last = self.results_overflow.get();
                    self.results_scroll = self.results_scroll.saturating_add(5).min(last);
                    return true;
                }
                _ => {}
            }
            match self.focus {
                Focus::PatternInput => self.pattern_input.handle_key(key, &self.session),
                Focus::TestInput => self.test_input.handle_key(key, &self.session),
            }
        };

        if let Some(event) = event {
            self.process_viewer_event(event)
        } else {
            false
        }
    }

    /// Process a viewer event and update the session
    fn process_viewer_event(&mut self, event: ViewerEvent) -> bool {
        match event {
            ViewerEvent::SetPattern(pattern) => {
                self.session.set_pattern(pattern);
                true
            }
            ViewerEvent::SetPendingInput(text) => {
                self.session.set_pending_input(text);
                true
            }
            ViewerEvent::AddTestString => {
                let added = self.session.add_test_string();
                // the session clears its pending input after adding
                self.test_input.set_value(self.session.pending_input());
                added
            }
            ViewerEvent::LoadPreset(pattern) => {
                tracing::debug!(pattern = %pattern, "preset loaded");
                self.pattern_input.set_value(&pattern);
                self.session.set_pattern(pattern);
                self.overlay = None;
                self.set_focus(Focus::PatternInput);
                true
            }
            ViewerEvent::ToggleMenu => {
                self.header.toggle_menu();
                true
            }
            ViewerEvent::OpenOverlay(overlay) => {
                self.header.close_menu();
                match overlay {
                    Overlay::Cheatsheet => self.cheatsheet.reset(),
                    Overlay::CommonPatterns => self.presets.reset(),
                }
                self.overlay = Some(overlay);
                true
            }
            ViewerEvent::Close => {
                let open = self.overlay.is_some() || self.header.is_menu_open();
                self.overlay = None;
                self.header.close_menu();
                open
            }
            ViewerEvent::NoChange => false,
        }
    }
}
