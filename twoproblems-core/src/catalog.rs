//! Token catalog
//!
//! A fixed table of regex syntax elements grouped by category. The table is
//! declared once and never changes; both the analyzer and the cheatsheet
//! views enumerate it in declaration order.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The category a catalog token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Characters,
    Anchors,
    Quantifiers,
    Groups,
    CharacterSets,
}

impl Category {
    /// Every category, in catalog declaration order
    pub const ALL: [Category; 5] = [
        Category::Characters,
        Category::Anchors,
        Category::Quantifiers,
        Category::Groups,
        Category::CharacterSets,
    ];

    /// The key used in serialized output (`characterSets`, not `character_sets`)
    pub fn name(&self) -> &'static str {
        match self {
            Category::Characters => "characters",
            Category::Anchors => "anchors",
            Category::Quantifiers => "quantifiers",
            Category::Groups => "groups",
            Category::CharacterSets => "characterSets",
        }
    }

    /// Upper-cased label shown above each group of breakdown cards
    pub fn heading(&self) -> String {
        self.name().to_uppercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a category name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of: characters, anchors, quantifiers, groups, characterSets)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the camelCase key as well as kebab/snake spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.name().to_lowercase() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One row of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenEntry {
    pub category: Category,
    pub token: &'static str,
    pub explanation: &'static str,
}

const fn entry(category: Category, token: &'static str, explanation: &'static str) -> TokenEntry {
    TokenEntry {
        category,
        token,
        explanation,
    }
}

use Category::{Anchors, CharacterSets, Characters, Groups, Quantifiers};

static CATALOG: [TokenEntry; 30] = [
    // characters
    entry(Characters, ".", "Matches any character except newline"),
    entry(
        Characters,
        r"\w",
        "Matches any word character (equivalent to [a-zA-Z0-9_])",
    ),
    entry(Characters, r"\W", "Matches any non-word character"),
    entry(Characters, r"\d", "Matches any digit (equivalent to [0-9])"),
    entry(Characters, r"\D", "Matches any non-digit"),
    entry(Characters, r"\s", "Matches any whitespace character"),
    entry(Characters, r"\S", "Matches any non-whitespace character"),
    entry(Characters, r"\t", "Matches a tab character"),
    entry(Characters, r"\r", "Matches a carriage return"),
    entry(Characters, r"\n", "Matches a linefeed"),
    // anchors
    entry(Anchors, "^", "Matches the beginning of the string"),
    entry(Anchors, "$", "Matches the end of the string"),
    entry(Anchors, r"\b", "Matches a word boundary"),
    entry(Anchors, r"\B", "Matches a non-word boundary"),
    // quantifiers
    entry(Quantifiers, "*", "Matches 0 or more times"),
    entry(Quantifiers, "+", "Matches 1 or more times"),
    entry(Quantifiers, "?", "Matches 0 or 1 time"),
    entry(Quantifiers, "{n}", "Matches exactly n times"),
    entry(Quantifiers, "{n,}", "Matches n or more times"),
    entry(Quantifiers, "{n,m}", "Matches from n to m times"),
    // groups
    entry(
        Groups,
        "(...)",
        "Groups multiple tokens together and creates a capture group",
    ),
    entry(
        Groups,
        "(?:...)",
        "Groups multiple tokens together without creating a capture group",
    ),
    entry(Groups, "(?=...)", "Positive lookahead"),
    entry(Groups, "(?!...)", "Negative lookahead"),
    entry(Groups, "(?<=...)", "Positive lookbehind"),
    entry(Groups, "(?<!...)", "Negative lookbehind"),
    // character sets
    entry(CharacterSets, "[...]", "Matches any character in the set"),
    entry(CharacterSets, "[^...]", "Matches any character not in the set"),
    entry(CharacterSets, "[a-z]", "Matches any character in the range"),
    entry(CharacterSets, "|", "Acts as an OR operator"),
];

/// All catalog entries in declaration order
pub fn entries() -> impl Iterator<Item = &'static TokenEntry> {
    CATALOG.iter()
}

/// Entries of a single category, in declaration order
pub fn entries_in(category: Category) -> impl Iterator<Item = &'static TokenEntry> {
    CATALOG.iter().filter(move |e| e.category == category)
}

/// Find the entry for an exact token string
pub fn lookup(token: &str) -> Option<&'static TokenEntry> {
    CATALOG.iter().find(|e| e.token == token)
}
