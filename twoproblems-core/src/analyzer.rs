//! Pattern analyzer
//!
//! Produces the "Pattern Breakdown" for a pattern string. This is not a regex
//! parser: a catalog token is reported when it occurs in the pattern as a
//! literal substring. The placeholder tokens (`{n}`, `(...)`, `[a-z]`) are
//! therefore only reported when the pattern spells them out verbatim, so
//! `\w{3}` yields no quantifier entry.
//!
//! On top of the catalog scan, every bracket expression `[...]` found in the
//! pattern gets its own character-set entry listing its contents.

use crate::catalog::{self, Category};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A bracket expression with no nested `]`
static CHARACTER_SET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("character set regex is valid"));

const CHARACTER_SET_PREFIX: &str = "Matches any of: ";

/// One line of the pattern breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub category: Category,
    pub token: String,
    pub explanation: String,
}

impl Explanation {
    fn new(category: Category, token: impl Into<String>, explanation: impl Into<String>) -> Self {
        Explanation {
            category,
            token: token.into(),
            explanation: explanation.into(),
        }
    }
}

/// Explain which known tokens `pattern` contains
///
/// Catalog hits come first, in catalog order, followed by one
/// [`Category::CharacterSets`] entry per bracket expression in order of
/// appearance.
pub fn analyze(pattern: &str) -> Vec<Explanation> {
    let mut explanations: Vec<Explanation> = catalog::entries()
        .filter(|entry| pattern.contains(entry.token))
        .map(|entry| Explanation::new(entry.category, entry.token, entry.explanation))
        .collect();

    explanations.extend(CHARACTER_SET_REGEX.captures_iter(pattern).map(|caps| {
        Explanation::new(
            Category::CharacterSets,
            &caps[0],
            format!("{}{}", CHARACTER_SET_PREFIX, &caps[1]),
        )
    }));

    explanations
}

/// Group explanations by category, in catalog category order
///
/// Categories without hits are left out.
pub fn group_by_category(explanations: &[Explanation]) -> Vec<(Category, Vec<&Explanation>)> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let hits: Vec<&Explanation> = explanations
                .iter()
                .filter(|e| e.category == category)
                .collect();
            (!hits.is_empty()).then_some((category, hits))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens(explanations: &[Explanation]) -> Vec<&str> {
        explanations.iter().map(|e| e.token.as_str()).collect()
    }

    #[test]
    fn empty_pattern_has_no_explanations() {
        assert!(analyze("").is_empty());
    }

    #[test]
    fn digit_plus() {
        let result = analyze(r"\d+");
        assert_eq!(tokens(&result), vec![r"\d", "+"]);
        assert_eq!(result[0].category, Category::Characters);
        assert_eq!(result[1].category, Category::Quantifiers);
    }

    #[test]
    fn word_boundary_pattern_has_no_quantifier_entry() {
        let result = analyze(r"\b\w{3}\b");
        assert_eq!(tokens(&result), vec![r"\w", r"\b"]);
        assert_eq!(result[1].category, Category::Anchors);
        assert!(result.iter().all(|e| e.category != Category::Quantifiers));
    }

    #[test]
    fn literal_placeholder_is_reported() {
        let result = analyze("a{n,m}");
        // neither `{n}` nor `{n,}` occurs literally inside `{n,m}`
        assert_eq!(tokens(&result), vec!["{n,m}"]);
    }

    #[test]
    fn bracket_expression_gets_custom_entry() {
        let result = analyze("[aeiou]");
        assert_eq!(
            result,
            vec![Explanation::new(
                Category::CharacterSets,
                "[aeiou]",
                "Matches any of: aeiou"
            )]
        );
    }

    #[test]
    fn bracket_contents_are_not_interpreted() {
        let result = analyze("[^0-9]x[a-z]");
        assert_eq!(
            tokens(&result),
            vec!["^", "[a-z]", "[^0-9]", "[a-z]"],
            "catalog hits first, then each bracket expression left to right"
        );
        assert_eq!(result[2].explanation, "Matches any of: ^0-9");
        assert_eq!(result[3].explanation, "Matches any of: a-z");
    }

    #[test]
    fn empty_brackets_are_not_a_character_set() {
        let result = analyze("[]");
        assert!(result.is_empty());
    }

    #[test]
    fn lookaround_groups() {
        let result = analyze("(?<=...)");
        assert_eq!(tokens(&result), vec![".", "?", "(?<=...)"]);
    }

    #[test]
    fn rendered_breakdown() {
        let rendered = analyze(r"^\d+|[xyz]$")
            .iter()
            .map(|e| format!("{} {} => {}", e.category, e.token, e.explanation))
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(rendered, @r"
        characters \d => Matches any digit (equivalent to [0-9])
        anchors ^ => Matches the beginning of the string
        anchors $ => Matches the end of the string
        quantifiers + => Matches 1 or more times
        characterSets | => Acts as an OR operator
        characterSets [xyz] => Matches any of: xyz
        ");
    }

    #[test]
    fn grouping_skips_empty_categories() {
        let result = analyze(r"\b\w{3}\b");
        let groups = group_by_category(&result);
        let categories: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, vec![Category::Characters, Category::Anchors]);
        assert_eq!(groups[1].1[0].token, r"\b");
    }

    #[test]
    fn grouping_preserves_order_within_category() {
        let result = analyze("[ab]|[cd]");
        let groups = group_by_category(&result);
        assert_eq!(groups.len(), 1);
        let tokens: Vec<&str> = groups[0].1.iter().map(|e| e.token.as_str()).collect();
        assert_eq!(tokens, vec!["|", "[ab]", "[cd]"]);
    }

    #[test]
    fn serializes_with_camel_case_category() {
        let json = serde_json::to_string(&analyze("[ab]")).unwrap();
        assert_eq!(
            json,
            r#"[{"category":"characterSets","token":"[ab]","explanation":"Matches any of: ab"}]"#
        );
    }

    proptest! {
        #[test]
        fn analysis_is_idempotent(pattern in ".{0,40}") {
            prop_assert_eq!(analyze(&pattern), analyze(&pattern));
        }

        #[test]
        fn every_contained_token_is_reported(
            prefix in "[a-z]{0,8}",
            index in 0usize..30,
            suffix in "[a-z]{0,8}",
        ) {
            let entry = catalog::entries().nth(index).unwrap();
            let pattern = format!("{}{}{}", prefix, entry.token, suffix);
            let result = analyze(&pattern);
            prop_assert!(result.iter().any(|e| e.token == entry.token && e.category == entry.category));
        }
    }
}
