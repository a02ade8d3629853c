//! # twoproblems-core
//!
//! The engine-agnostic half of the twoproblems regex lab:
//!
//! - [`catalog`]: the static table of regex tokens and their explanations
//! - [`analyzer`]: the "explain this pattern" scan over that table
//! - [`matcher`]: a thin adapter over `fancy-regex` that runs a pattern
//!   against a list of test strings
//! - [`highlight`]: turns match ranges into highlighted runs for rendering
//! - [`session`]: the state controller the user interfaces drive
//!
//! Nothing here knows about terminals or command lines; the `twoproblems`
//! binary renders a [`session::Session`] however it likes.

pub mod analyzer;
pub mod catalog;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod session;

pub use analyzer::{analyze, group_by_category, Explanation};
pub use catalog::{Category, TokenEntry};
pub use error::PatternError;
pub use matcher::{test_all, CompiledPattern, MatchEngine, MatchRecord, MatchResultSet};
pub use session::{Session, SessionStatus};
