//! Bordered container around the lab
//!
//! The card size only changes the inner padding.

use super::theme::Theme;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Padding};
use ratatui::Frame;
use twoproblems_config::CardSize;

#[derive(Debug, Clone, Copy)]
pub struct Card {
    size: CardSize,
}

impl Card {
    pub fn new(size: CardSize) -> Self {
        Card { size }
    }

    pub fn padding(&self) -> Padding {
        match self.size {
            CardSize::Sm => Padding::new(1, 1, 0, 0),
            CardSize::Md => Padding::new(2, 2, 1, 1),
            CardSize::Lg => Padding::new(3, 3, 1, 1),
        }
    }

    /// Draw the card frame and return the area left for its content
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) -> Rect {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.card_border())
            .padding(self.padding());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }
}
