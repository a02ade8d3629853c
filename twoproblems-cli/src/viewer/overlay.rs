//! Popup panels opened from the header
//!
//! - Cheatsheet: the whole token catalog, grouped by category
//! - Common Patterns: the configured presets; Enter loads one into the lab

use super::theme::Theme;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use twoproblems_config::Preset;
use twoproblems_core::catalog::{self, Category};
use twoproblems_core::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Cheatsheet,
    CommonPatterns,
}

/// Centered popup area, clamped to the frame
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(vertical);
    popup
}

fn framed(frame: &mut Frame, area: Rect, title: &'static str, theme: &Theme) -> Rect {
    let block = Block::bordered()
        .title(title)
        .title_bottom(Line::from(" [Esc] Close ").right_aligned())
        .border_style(theme.overlay_border());
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    inner
}

/// Scrollable view of every catalog entry
#[derive(Debug, Default)]
pub struct CheatsheetPanel {
    scroll: u16,
}

impl CheatsheetPanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    fn lines(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for category in Category::ALL {
            lines.push(Line::styled(category.heading(), theme.category_heading()));
            for entry in catalog::entries_in(category) {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<8}", entry.token), theme.token()),
                    Span::styled(entry.explanation, theme.explanation()),
                ]));
            }
            lines.push(Line::default());
        }
        lines
    }
}

impl Viewer for CheatsheetPanel {
    fn render(&self, frame: &mut Frame, area: Rect, _session: &Session, theme: &Theme) {
        let popup = popup_area(area, 64, area.height.saturating_sub(4));
        let inner = framed(frame, popup, " Cheatsheet ", theme);
        let paragraph = Paragraph::new(Self::lines(theme)).scroll((self.scroll, 0));
        frame.render_widget(paragraph, inner);
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Option<ViewerEvent> {
        match key.code {
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Home => self.scroll = 0,
            KeyCode::Esc => return Some(ViewerEvent::Close),
            _ => {}
        }
        Some(ViewerEvent::NoChange)
    }
}

/// Selectable list of presets
#[derive(Debug)]
pub struct PresetPicker {
    presets: Vec<Preset>,
    selected: usize,
}

impl PresetPicker {
    pub fn new(presets: Vec<Preset>) -> Self {
        PresetPicker {
            presets,
            selected: 0,
        }
    }

    #[allow(dead_code)]
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn selected(&self) -> Option<&Preset> {
        self.presets.get(self.selected)
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Name and pattern of each preset, its description underneath
    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (index, preset) in self.presets.iter().enumerate() {
            if index == self.selected {
                lines.push(Line::styled(
                    format!(" {:<20} {}", preset.name, preset.pattern),
                    theme.preset_selected(),
                ));
            } else {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {:<20} ", preset.name), theme.menu_item()),
                    Span::styled(preset.pattern.clone(), theme.preset_pattern()),
                ]));
            }
            if !preset.description.is_empty() {
                lines.push(Line::styled(format!("   {}", preset.description), theme.explanation()));
            }
        }
        lines
    }
}

impl Viewer for PresetPicker {
    fn render(&self, frame: &mut Frame, area: Rect, _session: &Session, theme: &Theme) {
        let lines = self.lines(theme);
        let height = (lines.len() as u16).max(1) + 2;
        let popup = popup_area(area, 72, height);
        let inner = framed(frame, popup, " Common Patterns ", theme);

        if self.presets.is_empty() {
            let hint = Paragraph::new(Line::styled("No presets configured", theme.hint()));
            frame.render_widget(hint, inner);
            return;
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Option<ViewerEvent> {
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.presets.len().saturating_sub(1))
            }
            KeyCode::Enter => {
                return Some(match self.selected() {
                    Some(preset) => ViewerEvent::LoadPreset(preset.pattern.clone()),
                    None => ViewerEvent::NoChange,
                });
            }
            KeyCode::Esc => return Some(ViewerEvent::Close),
            _ => {}
        }
        Some(ViewerEvent::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn preset(name: &str, pattern: &str) -> Preset {
        Preset {
            name: name.to_string(),
            pattern: pattern.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn picker_loads_selected_preset() {
        let session = Session::new();
        let mut picker =
            PresetPicker::new(vec![preset("Digits", r"\d+"), preset("Vowels", "[aeiou]")]);
        picker.handle_key(key(KeyCode::Down), &session);
        picker.handle_key(key(KeyCode::Down), &session);
        assert_eq!(picker.selected().map(|p| p.name.as_str()), Some("Vowels"));
        assert_eq!(
            picker.handle_key(key(KeyCode::Enter), &session),
            Some(ViewerEvent::LoadPreset("[aeiou]".to_string()))
        );
    }

    #[test]
    fn empty_picker_does_nothing_on_enter() {
        let session = Session::new();
        let mut picker = PresetPicker::new(Vec::new());
        picker.handle_key(key(KeyCode::Down), &session);
        assert!(picker.selected().is_none());
        assert_eq!(
            picker.handle_key(key(KeyCode::Enter), &session),
            Some(ViewerEvent::NoChange)
        );
    }

    #[test]
    fn esc_closes_either_panel() {
        let session = Session::new();
        let mut picker = PresetPicker::new(Vec::new());
        let mut cheatsheet = CheatsheetPanel::new();
        assert_eq!(picker.handle_key(key(KeyCode::Esc), &session), Some(ViewerEvent::Close));
        assert_eq!(cheatsheet.handle_key(key(KeyCode::Esc), &session), Some(ViewerEvent::Close));
    }

    #[test]
    fn cheatsheet_scroll_stops_at_top() {
        let session = Session::new();
        let mut cheatsheet = CheatsheetPanel::new();
        cheatsheet.handle_key(key(KeyCode::Up), &session);
        assert_eq!(cheatsheet.scroll(), 0);
        cheatsheet.handle_key(key(KeyCode::PageDown), &session);
        assert_eq!(cheatsheet.scroll(), 10);
        cheatsheet.reset();
        assert_eq!(cheatsheet.scroll(), 0);
    }

    #[test]
    fn popup_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 30);
        let popup = popup_area(area, 60, 10);
        assert_eq!(popup, Rect::new(20, 10, 60, 10));

        let small = popup_area(Rect::new(0, 0, 40, 5), 60, 10);
        assert_eq!(small.width, 40);
        assert_eq!(small.height, 5);
    }
}
