//! Theme for the regex lab
//!
//! Three layers, so the palette can change without touching rendering code:
//!
//! **Presentation Layer:** concrete `Style` values grouped by semantic role
//! (`accent`, `muted`, `highlight`, `error`, ...). Colors are tweaked here.
//!
//! **Semantic Layer:** implicit, defined by which UI elements share a
//! presentation style. The breakdown token and the header brand are both
//! "accent", so they always look alike.
//!
//! **Application Layer:** methods named after where the style is used
//! (`pattern_input_border()`, `match_highlight()`, `count_line()`), which is
//! all the rendering code ever calls.

use ratatui::style::{Color, Modifier, Style};

/// Presentation layer: actual Style values
#[derive(Debug, Clone)]
pub struct PresentationStyles {
    /// Brand color for headings, tokens, the focused border
    pub accent: Style,

    /// Section headings (accent, bold)
    pub heading: Style,

    /// Regular content
    pub normal: Style,

    /// Secondary text (explanations, count lines, hints)
    pub muted: Style,

    /// Placeholder text inside empty inputs
    pub placeholder: Style,

    /// Characters covered by a match
    pub highlight: Style,

    /// The text cursor inside the focused input
    pub cursor: Style,

    /// Selected row in menus and pickers
    pub selected: Style,

    /// Error banner
    pub error: Style,

    /// Header bar
    pub bar: Style,

    /// Unfocused borders
    pub border: Style,
}

/// Application and semantic layers
#[derive(Debug, Clone)]
pub struct Theme {
    presentation: PresentationStyles,
}

impl Theme {
    // Header

    pub fn header_bar(&self) -> Style {
        self.presentation.bar
    }

    /// Semantic: accent on the bar background
    pub fn header_brand(&self) -> Style {
        self.presentation
            .bar
            .patch(self.presentation.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_nav(&self) -> Style {
        self.presentation.bar.patch(self.presentation.accent)
    }

    pub fn menu_item(&self) -> Style {
        self.presentation.accent
    }

    /// Semantic: selected (same as preset_selected)
    pub fn menu_selected(&self) -> Style {
        self.presentation.selected
    }

    // Hero

    pub fn hero_title(&self) -> Style {
        self.presentation.heading
    }

    pub fn hero_quote(&self) -> Style {
        self.presentation.muted.add_modifier(Modifier::ITALIC)
    }

    // Card and inputs

    pub fn card_border(&self) -> Style {
        self.presentation.accent
    }

    pub fn section_heading(&self) -> Style {
        self.presentation.heading
    }

    /// Semantic: accent when focused, plain border otherwise
    pub fn input_border(&self, focused: bool) -> Style {
        if focused {
            self.presentation.accent
        } else {
            self.presentation.border
        }
    }

    pub fn input_text(&self) -> Style {
        self.presentation.normal
    }

    pub fn input_placeholder(&self) -> Style {
        self.presentation.placeholder
    }

    pub fn input_cursor(&self) -> Style {
        self.presentation.cursor
    }

    pub fn error_banner(&self) -> Style {
        self.presentation.error
    }

    // Pattern breakdown

    /// Semantic: heading (same as section_heading)
    pub fn category_heading(&self) -> Style {
        self.presentation.heading
    }

    pub fn token(&self) -> Style {
        self.presentation.accent
    }

    pub fn explanation(&self) -> Style {
        self.presentation.muted
    }

    // Test laboratory

    pub fn match_highlight(&self) -> Style {
        self.presentation.highlight
    }

    pub fn match_plain(&self) -> Style {
        self.presentation.muted
    }

    /// Semantic: muted (same as explanation)
    pub fn count_line(&self) -> Style {
        self.presentation.muted
    }

    pub fn hint(&self) -> Style {
        self.presentation.placeholder
    }

    // Overlays

    pub fn overlay_border(&self) -> Style {
        self.presentation.accent
    }

    pub fn preset_selected(&self) -> Style {
        self.presentation.selected
    }

    pub fn preset_pattern(&self) -> Style {
        self.presentation.accent
    }

    /// Create a theme with a custom presentation layer
    #[allow(dead_code)]
    pub fn with_presentation(presentation: PresentationStyles) -> Self {
        Theme { presentation }
    }
}

impl Default for Theme {
    /// Purple on the terminal's own background, yellow match highlights
    fn default() -> Self {
        Theme {
            presentation: PresentationStyles {
                accent: Style::default().fg(Color::Magenta),
                heading: Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
                normal: Style::default(),
                muted: Style::default().fg(Color::Gray),
                placeholder: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
                highlight: Style::default().bg(Color::Yellow).fg(Color::Magenta),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                selected: Style::default()
                    .bg(Color::Magenta)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                bar: Style::default().bg(Color::White).fg(Color::Black),
                border: Style::default().fg(Color::DarkGray),
            },
        }
    }
}
