//! Session state controller
//!
//! The Session holds everything the user has typed and the last computed
//! results. It is only mutated through the transitions below; any change to
//! the pattern or the test-string list re-runs matching synchronously before
//! the transition returns, so callers never observe results for a pattern
//! other than the current one.
//!
//! When the pattern fails to compile the error is recorded and the previous
//! results stay in place: the UI keeps showing the last good matches next to
//! the error.

use crate::analyzer::{self, Explanation};
use crate::matcher::{MatchEngine, MatchResultSet};
use tracing::{debug, warn};

/// Outcome of the most recent recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No pattern entered
    #[default]
    Idle,
    /// Pattern compiled and matched every test string
    Valid,
    /// Pattern was rejected; results are from the last valid pattern
    Invalid,
}

/// The state behind one regex lab
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: MatchEngine,
    pattern: String,
    pending_input: String,
    test_strings: Vec<String>,
    error: Option<String>,
    results: Vec<MatchResultSet>,
    breakdown: Vec<Explanation>,
    status: SessionStatus,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that compiles patterns with `engine`
    pub fn with_engine(engine: MatchEngine) -> Self {
        Session {
            engine,
            ..Self::default()
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn test_strings(&self) -> &[String] {
        &self.test_strings
    }

    /// The engine diagnostic for the current pattern, if it was rejected
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> &[MatchResultSet] {
        &self.results
    }

    /// Pattern breakdown for the current pattern
    pub fn breakdown(&self) -> &[Explanation] {
        &self.breakdown
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Replace the pattern and recompute if it changed
    pub fn set_pattern(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.pattern {
            return;
        }
        self.pattern = text;
        self.breakdown = analyzer::analyze(&self.pattern);
        self.recompute();
    }

    /// Replace the not-yet-added test string; never recomputes
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Append the trimmed pending input as a test string
    ///
    /// Blank input is ignored and leaves the pending input untouched.
    /// Returns whether a string was added.
    pub fn add_test_string(&mut self) -> bool {
        let trimmed = self.pending_input.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.test_strings.push(trimmed.to_string());
        self.pending_input.clear();
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        if self.pattern.is_empty() {
            self.error = None;
            self.results.clear();
            self.status = SessionStatus::Idle;
            return;
        }

        match self.engine.test_all(&self.pattern, &self.test_strings) {
            Ok(results) => {
                debug!(
                    pattern = %self.pattern,
                    test_strings = self.test_strings.len(),
                    matches = results.iter().map(MatchResultSet::count).sum::<usize>(),
                    "recomputed matches"
                );
                self.results = results;
                self.error = None;
                self.status = SessionStatus::Valid;
            }
            Err(err) => {
                warn!(pattern = %self.pattern, error = %err, "pattern rejected");
                self.error = Some(err.message().to_string());
                self.status = SessionStatus::Invalid;
            }
        }
    }
}
