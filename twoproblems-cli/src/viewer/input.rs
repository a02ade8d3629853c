//! Single-line text input
//!
//! Used for both the pattern field and the test-string field. The input owns
//! its buffer and cursor; every edit emits an event carrying the whole new
//! value so the session always sees the same text the user sees.

use super::theme::Theme;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use twoproblems_core::Session;

/// Which session field an input feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Pattern,
    TestString,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Pattern => "Your Regular Expression:",
            InputField::TestString => "Test string",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            InputField::Pattern => "/your regex pattern/g",
            InputField::TestString => "Enter test string...",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextInput {
    field: InputField,
    value: String,
    /// Cursor position in characters (0..=len)
    cursor: usize,
    focused: bool,
}

impl TextInput {
    pub fn new(field: InputField) -> Self {
        TextInput {
            field,
            value: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    pub fn field(&self) -> InputField {
        self.field
    }

    #[allow(dead_code)]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[allow(dead_code)]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Replace the buffer and put the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    fn clear(&mut self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        self.value.clear();
        self.cursor = 0;
        true
    }

    fn changed(&self) -> ViewerEvent {
        match self.field {
            InputField::Pattern => ViewerEvent::SetPattern(self.value.clone()),
            InputField::TestString => ViewerEvent::SetPendingInput(self.value.clone()),
        }
    }

    fn content_line(&self, theme: &Theme) -> Line<'static> {
        let cursor_style = theme.input_cursor();

        if self.value.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(self.field.placeholder(), theme.input_placeholder()));
            return Line::from(spans);
        }

        if !self.focused {
            return Line::styled(self.value.clone(), theme.input_text());
        }

        let before: String = self.value.chars().take(self.cursor).collect();
        let at: String = self
            .value
            .chars()
            .nth(self.cursor)
            .map(String::from)
            .unwrap_or_else(|| " ".to_string());
        let after: String = self.value.chars().skip(self.cursor + 1).collect();

        Line::from(vec![
            Span::styled(before, theme.input_text()),
            Span::styled(at, cursor_style),
            Span::styled(after, theme.input_text()),
        ])
    }

    /// Render into `area` using `block` as the frame
    pub fn render_in_block(&self, frame: &mut Frame, area: Rect, block: Block, theme: &Theme) {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // keep the cursor in view for values wider than the field
        let width = inner.width.max(1) as usize;
        let offset = (self.cursor + 1).saturating_sub(width) as u16;
        let paragraph = Paragraph::new(self.content_line(theme)).scroll((0, offset));
        frame.render_widget(paragraph, inner);
    }
}

impl Viewer for TextInput {
    fn render(&self, frame: &mut Frame, area: Rect, _session: &Session, theme: &Theme) {
        let block = Block::bordered()
            .title(self.field.label())
            .border_style(theme.input_border(self.focused));
        self.render_in_block(frame, area, block, theme);
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Option<ViewerEvent> {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if control => {
                return Some(if self.clear() {
                    self.changed()
                } else {
                    ViewerEvent::NoChange
                });
            }
            KeyCode::Char('a') if control => self.cursor = 0,
            KeyCode::Char('e') if control => self.cursor = self.len(),
            KeyCode::Char(ch) if !control && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert(ch);
                return Some(self.changed());
            }
            KeyCode::Backspace => {
                if self.backspace() {
                    return Some(self.changed());
                }
            }
            KeyCode::Delete => {
                if self.delete() {
                    return Some(self.changed());
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            KeyCode::Enter if self.field == InputField::TestString => {
                return Some(ViewerEvent::AddTestString);
            }
            _ => {}
        }
        Some(ViewerEvent::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(input: &mut TextInput, text: &str) -> Option<ViewerEvent> {
        let session = Session::new();
        let mut last = None;
        for ch in text.chars() {
            last = input.handle_key(key(KeyCode::Char(ch)), &session);
        }
        last
    }

    #[test]
    fn typing_in_pattern_emits_set_pattern() {
        let mut input = TextInput::new(InputField::Pattern);
        let event = type_text(&mut input, r"\d+");
        assert_eq!(event, Some(ViewerEvent::SetPattern(r"\d+".to_string())));
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn typing_in_test_field_emits_pending_input() {
        let mut input = TextInput::new(InputField::TestString);
        let event = type_text(&mut input, "abc");
        assert_eq!(event, Some(ViewerEvent::SetPendingInput("abc".to_string())));
    }

    #[test]
    fn enter_adds_only_from_test_field() {
        let session = Session::new();
        let mut test_input = TextInput::new(InputField::TestString);
        assert_eq!(
            test_input.handle_key(key(KeyCode::Enter), &session),
            Some(ViewerEvent::AddTestString)
        );

        let mut pattern_input = TextInput::new(InputField::Pattern);
        assert_eq!(
            pattern_input.handle_key(key(KeyCode::Enter), &session),
            Some(ViewerEvent::NoChange)
        );
    }

    #[test]
    fn editing_in_the_middle() {
        let session = Session::new();
        let mut input = TextInput::new(InputField::Pattern);
        type_text(&mut input, "ac");
        input.handle_key(key(KeyCode::Left), &session);
        let event = input.handle_key(key(KeyCode::Char('b')), &session);
        assert_eq!(event, Some(ViewerEvent::SetPattern("abc".to_string())));

        input.handle_key(key(KeyCode::Home), &session);
        let event = input.handle_key(key(KeyCode::Delete), &session);
        assert_eq!(event, Some(ViewerEvent::SetPattern("bc".to_string())));

        input.handle_key(key(KeyCode::End), &session);
        let event = input.handle_key(key(KeyCode::Backspace), &session);
        assert_eq!(event, Some(ViewerEvent::SetPattern("b".to_string())));
    }

    #[test]
    fn multibyte_characters_are_edited_whole() {
        let session = Session::new();
        let mut input = TextInput::new(InputField::TestString);
        type_text(&mut input, "héé");
        input.handle_key(key(KeyCode::Left), &session);
        let event = input.handle_key(key(KeyCode::Backspace), &session);
        assert_eq!(event, Some(ViewerEvent::SetPendingInput("hé".to_string())));
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn backspace_at_start_changes_nothing() {
        let session = Session::new();
        let mut input = TextInput::new(InputField::Pattern);
        assert_eq!(
            input.handle_key(key(KeyCode::Backspace), &session),
            Some(ViewerEvent::NoChange)
        );
    }

    #[test]
    fn ctrl_u_clears_the_line() {
        let session = Session::new();
        let mut input = TextInput::new(InputField::Pattern);
        type_text(&mut input, "abc");
        let event = input.handle_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            &session,
        );
        assert_eq!(event, Some(ViewerEvent::SetPattern(String::new())));
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut input = TextInput::new(InputField::Pattern);
        input.set_value("[aeiou]");
        assert_eq!(input.value(), "[aeiou]");
        assert_eq!(input.cursor(), 7);
    }
}
