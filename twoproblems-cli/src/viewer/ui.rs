//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Header bar (1 line, fixed), with the dropdown menu under it when open
//! - Hero (title and quote)
//! - Card (remaining space):
//!   - Pattern input, error banner under it when the pattern is rejected
//!   - Pattern Breakdown | Test Laboratory (side by side when wide enough,
//!     stacked otherwise)
//! - Overlay popup on top of everything when open

use super::app::{App, Focus};
use super::card::Card;
use super::overlay::Overlay;
use super::theme::Theme;
use super::viewer::Viewer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use twoproblems_core::{group_by_category, Session};

pub const TITLE: &str = "Now You Have Two Problems";
pub const QUOTE: &str = "Some people, when confronted with a problem, think 'I know, I'll use regular expressions.'. Now they have 2 problems";

/// Height of a bordered single-line input
const INPUT_HEIGHT: u16 = 3;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Check minimum width
    if size.width < app.settings.min_width {
        render_error_too_narrow(frame, size, app.settings.min_width);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                        // Header bar
            Constraint::Length(app.header.menu_height()), // Dropdown menu
            Constraint::Length(hero_height(size.width)),  // Hero
            Constraint::Min(1),                           // Card
        ])
        .split(size);

    app.header.render(frame, chunks[0], &app.session, &app.theme);
    if app.header.is_menu_open() {
        app.header.render_menu(frame, chunks[1], &app.theme);
    }
    render_hero(frame, chunks[2], &app.theme);
    render_card(frame, chunks[3], app);

    match app.overlay {
        Some(Overlay::Cheatsheet) => app.cheatsheet.render(frame, size, &app.session, &app.theme),
        Some(Overlay::CommonPatterns) => app.presets.render(frame, size, &app.session, &app.theme),
        None => {}
    }
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect, min_width: u16) {
    let msg = format!("Terminal too narrow: {} < {} chars", area.width, min_width);
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

/// Title, wrapped quote and a blank separator line
fn hero_height(width: u16) -> u16 {
    let quote_rows = (QUOTE.chars().count() as u16).div_ceil(width.max(1));
    // word wrapping can need one row more than the raw division
    1 + quote_rows + 1 + 1
}

fn render_hero(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::styled(TITLE, theme.hero_title()).centered(),
        Line::styled(QUOTE, theme.hero_quote()).centered(),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_card(frame: &mut Frame, area: Rect, app: &App) {
    let inner = Card::new(app.settings.card_size).render(frame, area, &app.theme);

    let banner = app
        .session
        .error()
        .map(|error| error_banner(error, &app.theme));
    let banner_height = banner
        .as_ref()
        .map_or(0, |banner| banner.line_count(inner.width) as u16);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),  // Pattern input
            Constraint::Length(banner_height), // Error banner
            Constraint::Min(1),                // Breakdown and laboratory
        ])
        .split(inner);

    app.pattern_input.render(frame, chunks[0], &app.session, &app.theme);
    if let Some(banner) = banner {
        frame.render_widget(banner, chunks[1]);
    }

    let direction = if frame.area().width >= app.settings.two_column_width {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let panels = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_breakdown(frame, panels[0], &app.session, &app.theme);
    render_laboratory(frame, panels[1], app);
}

/// Engine diagnostic, wrapped so the whole message stays readable
fn error_banner<'a>(error: &str, theme: &Theme) -> Paragraph<'a> {
    let line = Line::styled(format!("⚠ {}", error), theme.error_banner());
    Paragraph::new(line).wrap(Wrap { trim: true })
}

fn section(title: &'static str, theme: &Theme) -> Block<'static> {
    Block::bordered()
        .title(Span::styled(title, theme.section_heading()))
        .border_style(theme.input_border(false))
}

fn render_breakdown(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let block = section("Pattern Breakdown", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (category, explanations) in group_by_category(session.breakdown()) {
        lines.push(Line::styled(category.heading(), theme.category_heading()));
        for explanation in explanations {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", explanation.token), theme.token()),
                Span::raw("  "),
                Span::styled(explanation.explanation.clone(), theme.explanation()),
            ]));
        }
    }
    if lines.is_empty() {
        lines.push(Line::styled("Known tokens in your pattern are explained here", theme.hint()));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_laboratory(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = section("Test Laboratory", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT), // Test string input
            Constraint::Min(0),               // Results
        ])
        .split(inner);

    let input_block = Block::bordered()
        .title(app.test_input.field().label())
        .title(Line::from(" [Enter] Test ").right_aligned())
        .border_style(theme.input_border(app.focus == Focus::TestInput));
    app.test_input.render_in_block(frame, chunks[0], input_block, theme);

    let mut lines = Vec::new();
    for result in app.session.results() {
        let spans: Vec<Span> = result
            .segments()
            .into_iter()
            .map(|segment| {
                let style = if segment.highlighted {
                    theme.match_highlight()
                } else {
                    theme.match_plain()
                };
                Span::styled(segment.text, style)
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::styled(format!("  {}", result.summary()), theme.count_line()));
        lines.push(Line::default());
    }
    if lines.is_empty() {
        lines.push(Line::styled("Add a test string and press Enter", theme.hint()));
    }

    let results = Paragraph::new(lines).wrap(Wrap { trim: false });
    let area = chunks[1];
    let overflow = (results.line_count(area.width) as u16).saturating_sub(area.height);
    app.results_overflow.set(overflow);
    let results = results.scroll((app.results_scroll.min(overflow), 0));
    frame.render_widget(results, area);
}
