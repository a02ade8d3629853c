//! Match engine adapter
//!
//! Runs a user pattern against test strings using `fancy-regex`, which
//! supports the lookaround groups the catalog explains. Only global
//! iteration is used: case-sensitive, no multi-line `^`/`$` unless the
//! pattern asks for it with an inline flag.
//!
//! The engine reports byte offsets; [`MatchRecord`] converts them to
//! character offsets so the UIs can highlight character by character.

use crate::error::PatternError;
use crate::highlight;
use fancy_regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::trace;

/// Backtracking budget used when none is configured
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// One occurrence of the pattern within a test string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    #[serde(rename = "match")]
    pub text: String,
    /// Start position, in characters
    pub index: usize,
    /// Length, in characters
    pub length: usize,
}

impl MatchRecord {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        let text = text.into();
        let length = text.chars().count();
        MatchRecord {
            text,
            index,
            length,
        }
    }

    /// End position (exclusive), in characters
    pub fn end(&self) -> usize {
        self.index + self.length
    }

    /// Whether the character at `index` lies inside this match
    pub fn covers(&self, index: usize) -> bool {
        index >= self.index && index < self.end()
    }
}

/// All matches of the current pattern within one test string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResultSet {
    pub match_string: String,
    pub matches: Vec<MatchRecord>,
}

impl MatchResultSet {
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    /// The count line shown under each test string
    pub fn summary(&self) -> String {
        highlight::match_summary(self.count())
    }

    /// The test string split into highlighted and plain runs
    pub fn segments(&self) -> Vec<highlight::Segment> {
        highlight::segments(&self.match_string, &self.matches)
    }
}

/// Compiles user patterns with a fixed backtracking budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEngine {
    backtrack_limit: usize,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self::with_backtrack_limit(DEFAULT_BACKTRACK_LIMIT)
    }

    pub fn with_backtrack_limit(backtrack_limit: usize) -> Self {
        MatchEngine { backtrack_limit }
    }

    pub fn backtrack_limit(&self) -> usize {
        self.backtrack_limit
    }

    /// Compile `pattern`, reporting the engine's diagnostic on failure
    pub fn compile(&self, pattern: &str) -> Result<CompiledPattern, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .backtrack_limit(self.backtrack_limit)
            .build()?;
        Ok(CompiledPattern { regex })
    }

    /// Match `pattern` against every test string, in order
    ///
    /// Fails as a whole if the pattern does not compile or if matching any
    /// string exceeds the backtracking budget.
    pub fn test_all<S: AsRef<str>>(
        &self,
        pattern: &str,
        test_strings: &[S],
    ) -> Result<Vec<MatchResultSet>, PatternError> {
        let compiled = self.compile(pattern)?;
        test_strings
            .iter()
            .map(|subject| -> Result<MatchResultSet, PatternError> {
                let subject = subject.as_ref();
                Ok(MatchResultSet {
                    match_string: subject.to_string(),
                    matches: compiled.find_all(subject)?,
                })
            })
            .collect()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A successfully compiled pattern
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Every non-overlapping match in `subject`, left to right
    pub fn find_all(&self, subject: &str) -> Result<Vec<MatchRecord>, PatternError> {
        let mut records = Vec::new();
        // running (byte offset, char offset) so conversion stays linear
        let mut byte_pos = 0;
        let mut char_pos = 0;

        for found in self.regex.find_iter(subject) {
            let found = found?;
            char_pos += subject[byte_pos..found.start()].chars().count();
            byte_pos = found.start();
            records.push(MatchRecord::new(found.as_str(), char_pos));
        }

        trace!(
            pattern = self.as_str(),
            subject,
            matches = records.len(),
            "matched test string"
        );
        Ok(records)
    }
}

/// Match with the default engine
pub fn test_all<S: AsRef<str>>(
    pattern: &str,
    test_strings: &[S],
) -> Result<Vec<MatchResultSet>, PatternError> {
    MatchEngine::new().test_all(pattern, test_strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(set: &MatchResultSet) -> Vec<(&str, usize, usize)> {
        set.matches
            .iter()
            .map(|m| (m.text.as_str(), m.index, m.length))
            .collect()
    }

    #[test]
    fn digits_in_mixed_string() {
        let results = test_all(r"\d+", &["abc123def456"]).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_string, "abc123def456");
        assert_eq!(spans(&results[0]), vec![("123", 3, 3), ("456", 9, 3)]);
        assert_eq!(results[0].summary(), "Found 2 matches");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let results = test_all("[a-z]+", &["ABC"]).unwrap();
        assert!(results[0].matches.is_empty());
        assert_eq!(results[0].summary(), "No matches");
    }

    #[test]
    fn one_result_set_per_test_string_in_order() {
        let results = test_all("o", &["foo", "bar", "foo"]).unwrap();
        let strings: Vec<&str> = results.iter().map(|r| r.match_string.as_str()).collect();
        assert_eq!(strings, vec!["foo", "bar", "foo"]);
        assert_eq!(results[0].count(), 2);
        assert_eq!(results[1].count(), 0);
        assert_eq!(results[1].summary(), "No matches");
    }

    #[test]
    fn anchors_are_not_multi_line() {
        let results = test_all("^a", &["a\na"]).unwrap();
        assert_eq!(spans(&results[0]), vec![("a", 0, 1)]);

        let results = test_all("(?m)^a", &["a\na"]).unwrap();
        assert_eq!(spans(&results[0]), vec![("a", 0, 1), ("a", 2, 1)]);
    }

    #[test]
    fn lookaround_is_supported() {
        let results = test_all(r"(?<=\$)\d+(?!\d)", &["cost: $42"]).unwrap();
        assert_eq!(spans(&results[0]), vec![("42", 7, 2)]);
    }

    #[test]
    fn indices_are_character_offsets() {
        let results = test_all("b+", &["ééabbé"]).unwrap();
        assert_eq!(spans(&results[0]), vec![("bb", 3, 2)]);

        let results = test_all("é", &["aéé"]).unwrap();
        assert_eq!(spans(&results[0]), vec![("é", 1, 1), ("é", 2, 1)]);
    }

    #[test]
    fn shorthand_classes_are_unicode_aware() {
        let results = test_all(r"\d+", &["٣٤٥"]).unwrap();
        assert_eq!(spans(&results[0]), vec![("٣٤٥", 0, 3)]);

        let results = test_all(r"\w+", &["café"]).unwrap();
        assert_eq!(spans(&results[0]), vec![("café", 0, 4)]);

        let results = test_all("[0-9]+", &["٣4"]).unwrap();
        assert_eq!(spans(&results[0]), vec![("4", 1, 1)]);
    }

    #[test]
    fn empty_match_after_a_match_is_skipped() {
        let results = test_all("a*", &["baaa"]).unwrap();
        assert_eq!(spans(&results[0]), vec![("", 0, 0), ("aaa", 1, 3)]);
    }

    #[test]
    fn unbalanced_group_is_a_compile_error() {
        let err = test_all("(", &["anything"]).unwrap_err();
        assert!(matches!(err, PatternError::Compile { .. }));
        assert!(!err.message().is_empty());
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn compile_error_without_test_strings() {
        let empty: [&str; 0] = [];
        assert!(test_all("[", &empty).is_err());
    }

    #[test]
    fn exhausted_backtracking_is_a_runtime_error() {
        let engine = MatchEngine::with_backtrack_limit(10);
        let err = engine
            .test_all(r"(a+)+\1b", &["aaaaaaaaaaaaaaaaaaaaaaaa"])
            .unwrap_err();
        assert!(matches!(err, PatternError::Runtime { .. }));
    }

    #[test]
    fn record_coverage() {
        let record = MatchRecord::new("123", 3);
        assert!(!record.covers(2));
        assert!(record.covers(3));
        assert!(record.covers(5));
        assert!(!record.covers(6));
        assert_eq!(record.end(), 6);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let results = test_all(r"\d", &["a1"]).unwrap();
        let json = serde_json::to_string(&results).unwrap();
        assert_eq!(
            json,
            r#"[{"matchString":"a1","matches":[{"match":"1","index":1,"length":1}]}]"#
        );
    }
}
