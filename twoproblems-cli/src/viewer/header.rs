//! Header bar with the brand and navigation
//!
//! Wide terminals show the navigation inline. Narrow ones collapse it behind
//! a menu toggle (F1); the opened menu drops down under the bar and is
//! navigated with the arrow keys.

use super::overlay::Overlay;
use super::theme::Theme;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use twoproblems_core::Session;

pub const BRAND: &str = "NowYouHaveTwoProblems";

/// Navigation entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    CommonPatterns,
    Cheatsheet,
    CommunityPatterns,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [
        NavItem::CommonPatterns,
        NavItem::Cheatsheet,
        NavItem::CommunityPatterns,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::CommonPatterns => "Common Patterns",
            NavItem::Cheatsheet => "Cheatsheet",
            NavItem::CommunityPatterns => "Community Patterns",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NavItem::CommonPatterns => "#",
            NavItem::Cheatsheet => "≣",
            NavItem::CommunityPatterns => "@",
        }
    }

    fn hotkey(&self) -> Option<&'static str> {
        match self {
            NavItem::CommonPatterns => Some("F2"),
            NavItem::Cheatsheet => Some("F3"),
            NavItem::CommunityPatterns => None,
        }
    }

    /// The overlay this entry opens; Community Patterns has none
    pub fn overlay(&self) -> Option<Overlay> {
        match self {
            NavItem::CommonPatterns => Some(Overlay::CommonPatterns),
            NavItem::Cheatsheet => Some(Overlay::Cheatsheet),
            NavItem::CommunityPatterns => None,
        }
    }

    fn text(&self) -> String {
        match self.hotkey() {
            Some(key) => format!("{} {} [{}]", self.icon(), self.label(), key),
            None => format!("{} {}", self.icon(), self.label()),
        }
    }
}

#[derive(Debug)]
pub struct Header {
    menu_open: bool,
    selected: usize,
    /// Below this width the navigation collapses behind the toggle
    collapse_width: u16,
}

impl Header {
    pub fn new(collapse_width: u16) -> Self {
        Header {
            menu_open: false,
            selected: 0,
            collapse_width,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn selected(&self) -> NavItem {
        NavItem::ALL[self.selected]
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.selected = 0;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_collapsed(&self, width: u16) -> bool {
        width < self.collapse_width
    }

    /// Rows the dropdown needs below the bar (zero when closed)
    pub fn menu_height(&self) -> u16 {
        if self.menu_open {
            NavItem::ALL.len() as u16 + 1
        } else {
            0
        }
    }

    /// Render the dropdown menu
    pub fn render_menu(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines: Vec<Line> = NavItem::ALL
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let style = if index == self.selected {
                    theme.menu_selected()
                } else {
                    theme.menu_item()
                };
                Line::styled(format!(" {}", item.text()), style)
            })
            .collect();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.card_border());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Viewer for Header {
    /// Render the one-line bar
    fn render(&self, frame: &mut Frame, area: Rect, _session: &Session, theme: &Theme) {
        let mut spans = vec![
            Span::styled(" </> ", theme.header_brand()),
            Span::styled(BRAND, theme.header_brand()),
        ];

        let nav = if self.is_collapsed(area.width) {
            let toggle = if self.menu_open { "✕ Close" } else { "☰ Menu" };
            format!("{} [F1] ", toggle)
        } else {
            let items: Vec<String> = NavItem::ALL.iter().map(NavItem::text).collect();
            format!("{} ", items.join("   "))
        };

        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let gap = (area.width as usize).saturating_sub(used + nav.chars().count());
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(nav, theme.header_nav()));

        let paragraph = Paragraph::new(Line::from(spans)).style(theme.header_bar());
        frame.render_widget(paragraph, area);
    }

    /// Keys while the dropdown is open
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Option<ViewerEvent> {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Some(ViewerEvent::NoChange)
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(NavItem::ALL.len() - 1);
                Some(ViewerEvent::NoChange)
            }
            KeyCode::Enter => match self.selected().overlay() {
                Some(overlay) => Some(ViewerEvent::OpenOverlay(overlay)),
                None => Some(ViewerEvent::NoChange),
            },
            KeyCode::Esc => Some(ViewerEvent::Close),
            _ => Some(ViewerEvent::NoChange),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn menu_toggle_resets_selection() {
        let mut header = Header::new(100);
        assert!(!header.is_menu_open());
        assert_eq!(header.menu_height(), 0);

        header.toggle_menu();
        assert!(header.is_menu_open());
        assert_eq!(header.menu_height(), 4);
        assert_eq!(header.selected(), NavItem::CommonPatterns);
    }

    #[test]
    fn menu_navigation_is_clamped() {
        let session = Session::new();
        let mut header = Header::new(100);
        header.toggle_menu();
        header.handle_key(key(KeyCode::Up), &session);
        assert_eq!(header.selected(), NavItem::CommonPatterns);
        for _ in 0..5 {
            header.handle_key(key(KeyCode::Down), &session);
        }
        assert_eq!(header.selected(), NavItem::CommunityPatterns);
    }

    #[test]
    fn enter_opens_the_selected_overlay() {
        let session = Session::new();
        let mut header = Header::new(100);
        header.toggle_menu();
        header.handle_key(key(KeyCode::Down), &session);
        assert_eq!(
            header.handle_key(key(KeyCode::Enter), &session),
            Some(ViewerEvent::OpenOverlay(Overlay::Cheatsheet))
        );

        header.handle_key(key(KeyCode::Down), &session);
        assert_eq!(
            header.handle_key(key(KeyCode::Enter), &session),
            Some(ViewerEvent::NoChange),
            "community patterns has nothing behind it"
        );
    }

    #[test]
    fn collapse_threshold() {
        let header = Header::new(100);
        assert!(header.is_collapsed(99));
        assert!(!header.is_collapsed(100));
    }
}
