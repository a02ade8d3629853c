//! Highlighting helpers shared by the terminal UI and the one-shot commands
//!
//! A character is highlighted when its index falls inside any match record.
//! Consecutive characters with the same state are merged into one segment so
//! renderers emit one styled span per run instead of one per character.

use crate::matcher::MatchRecord;

/// A run of characters that are either all highlighted or all plain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

/// Whether the character at `index` is covered by any of `matches`
pub fn is_highlighted(index: usize, matches: &[MatchRecord]) -> bool {
    matches.iter().any(|m| m.covers(index))
}

/// Split `subject` into highlighted and plain runs
pub fn segments(subject: &str, matches: &[MatchRecord]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for (index, ch) in subject.chars().enumerate() {
        let highlighted = is_highlighted(index, matches);
        match segments.last_mut() {
            Some(last) if last.highlighted == highlighted => last.text.push(ch),
            _ => segments.push(Segment {
                text: ch.to_string(),
                highlighted,
            }),
        }
    }

    segments
}

/// "No matches", "Found 1 match" or "Found N matches"
pub fn match_summary(count: usize) -> String {
    match count {
        0 => "No matches".to_string(),
        1 => "Found 1 match".to_string(),
        n => format!("Found {} matches", n),
    }
}

/// Plain-text rendering with each highlighted run wrapped in `open`/`close`
pub fn mark(subject: &str, matches: &[MatchRecord], open: &str, close: &str) -> String {
    segments(subject, matches)
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                format!("{}{}{}", open, segment.text, close)
            } else {
                segment.text
            }
        })
        .collect()
}
