//! One-shot commands: print a breakdown, test results, the catalog or the
//! configured presets and exit.
//!
//! Each command renders to a `String` so the output can be tested without
//! spawning the binary.

use anyhow::bail;
use serde::Serialize;
use twoproblems_config::Preset;
use twoproblems_core::catalog::{self, Category, TokenEntry};
use twoproblems_core::highlight;
use twoproblems_core::{group_by_category, Explanation, MatchEngine, MatchResultSet, Session};

/// Output flavor shared by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// `twoproblems explain`
pub fn explain(pattern: &str, format: OutputFormat) -> anyhow::Result<String> {
    let explanations = twoproblems_core::analyze(pattern);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&explanations)?),
        OutputFormat::Text => Ok(render_breakdown(&explanations)),
    }
}

fn render_breakdown(explanations: &[Explanation]) -> String {
    if explanations.is_empty() {
        return "No known tokens".to_string();
    }
    let mut lines = Vec::new();
    for (category, hits) in group_by_category(explanations) {
        lines.push(category.heading());
        let width = hits.iter().map(|e| e.token.chars().count()).max().unwrap_or(0);
        for hit in hits {
            lines.push(format!(
                "  {:<width$}  {}",
                hit.token,
                hit.explanation,
                width = width
            ));
        }
    }
    lines.join("\n")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TestReport<'a> {
    pattern: &'a str,
    results: &'a [MatchResultSet],
}

/// `twoproblems test`
///
/// Runs the strings through a [`Session`] exactly as the interactive lab
/// does. An invalid pattern is an error carrying the engine's message.
pub fn test(
    pattern: &str,
    test_strings: &[String],
    engine: MatchEngine,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut session = Session::with_engine(engine);
    for test_string in test_strings {
        session.set_pending_input(test_string.as_str());
        session.add_test_string();
    }
    session.set_pattern(pattern);

    if let Some(message) = session.error() {
        bail!("{}", message);
    }

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&TestReport {
            pattern: session.pattern(),
            results: session.results(),
        })?),
        OutputFormat::Text => Ok(render_results(session.results())),
    }
}

fn render_results(results: &[MatchResultSet]) -> String {
    if results.is_empty() {
        return "No test strings".to_string();
    }
    results
        .iter()
        .map(|result| {
            format!(
                "{}\n  {}",
                highlight::mark(&result.match_string, &result.matches, "[", "]"),
                result.summary()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `twoproblems catalog`
pub fn catalog(category: Option<Category>, format: OutputFormat) -> anyhow::Result<String> {
    let entries: Vec<&TokenEntry> = match category {
        Some(category) => catalog::entries_in(category).collect(),
        None => catalog::entries().collect(),
    };
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => Ok(render_catalog(&entries)),
    }
}

fn render_catalog(entries: &[&TokenEntry]) -> String {
    let width = entries.iter().map(|e| e.token.len()).max().unwrap_or(0);
    let mut lines = Vec::new();
    for category in Category::ALL {
        let rows: Vec<&&TokenEntry> = entries.iter().filter(|e| e.category == category).collect();
        if rows.is_empty() {
            continue;
        }
        lines.push(category.heading());
        for entry in rows {
            lines.push(format!(
                "  {:<width$}  {}",
                entry.token,
                entry.explanation,
                width = width
            ));
        }
    }
    lines.join("\n")
}

/// `twoproblems presets`
pub fn presets(presets: &[Preset], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(presets)?),
        OutputFormat::Text => {
            if presets.is_empty() {
                return Ok("No presets configured".to_string());
            }
            let name_width = presets.iter().map(|p| p.name.chars().count()).max().unwrap_or(0);
            let pattern_width = presets
                .iter()
                .map(|p| p.pattern.chars().count())
                .max()
                .unwrap_or(0);
            Ok(presets
                .iter()
                .map(|p| {
                    format!(
                        "{:<nw$}  {:<pw$}  {}",
                        p.name,
                        p.pattern,
                        p.description,
                        nw = name_width,
                        pw = pattern_width
                    )
                    .trim_end()
                    .to_string()
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}
