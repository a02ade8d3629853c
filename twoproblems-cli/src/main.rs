//! Command-line interface for twoproblems
//!
//! Usage:
//!   twoproblems [view] [--pattern `<pattern>`] [--test `<string>`]...  - Open the interactive regex lab
//!   twoproblems explain `<pattern>` [--json]                          - Print the pattern breakdown
//!   twoproblems test `<pattern>` `<string>`... [--json]                 - Highlight matches in each string
//!   twoproblems catalog [--category `<name>`] [--json]                - Print the token cheatsheet
//!   twoproblems presets [--json]                                    - List the common patterns
mod commands;
mod logging;
mod viewer;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueHint};
use commands::OutputFormat;
use logging::{LogConfig, LogTarget};
use std::path::PathBuf;
use std::process::ExitCode;
use twoproblems_config::{AppConfig, Loader};
use twoproblems_core::{Category, MatchEngine};

#[derive(Parser)]
#[command(name = "twoproblems")]
#[command(version, about = "Now you have two problems: explain and test regular expressions")]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, short = 'c', global = true, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Backtracking budget per match attempt, overriding the configuration
    #[arg(long, global = true)]
    backtrack_limit: Option<u32>,

    /// Append logs to this file
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive regex lab (default)
    View {
        /// Start with this pattern
        #[arg(long, short = 'p', allow_hyphen_values = true)]
        pattern: Option<String>,
        /// Start with this test string (repeatable)
        #[arg(long = "test", short = 't')]
        tests: Vec<String>,
    },
    /// Explain which known tokens a pattern contains
    Explain {
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run a pattern against test strings and highlight the matches
    Test {
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        #[arg(required = true)]
        strings: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the token cheatsheet
    Catalog {
        /// Only show one category (e.g. anchors, characterSets)
        #[arg(long)]
        category: Option<Category>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the configured common patterns
    Presets {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref(), cli.backtrack_limit)?;
    let command = cli.command.unwrap_or(Commands::View {
        pattern: None,
        tests: Vec::new(),
    });

    let target = match command {
        Commands::View { .. } => LogTarget::FileOnly,
        _ => LogTarget::Stderr,
    };
    let log_file = cli.log_file.or_else(|| config.logging.file.clone());
    logging::init_logging(&LogConfig::resolve(
        &config.logging.level,
        cli.verbose,
        log_file,
        target,
    ))?;

    let engine = MatchEngine::with_backtrack_limit(config.engine.backtrack_limit);
    tracing::info!(
        backtrack_limit = engine.backtrack_limit(),
        presets = config.presets.len(),
        "configuration loaded"
    );

    let output = match command {
        Commands::View { pattern, tests } => {
            let options = viewer::viewer::ViewerOptions {
                config,
                engine,
                pattern,
                tests,
            };
            return viewer::viewer::run_viewer(options).context("terminal viewer failed");
        }
        Commands::Explain { pattern, json } => {
            commands::explain(&pattern, OutputFormat::from_json_flag(json))?
        }
        Commands::Test {
            pattern,
            strings,
            json,
        } => commands::test(&pattern, &strings, engine, OutputFormat::from_json_flag(json))?,
        Commands::Catalog { category, json } => {
            commands::catalog(category, OutputFormat::from_json_flag(json))?
        }
        Commands::Presets { json } => {
            commands::presets(&config.presets, OutputFormat::from_json_flag(json))?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Project file picked up from the working directory when present
const LOCAL_CONFIG: &str = "twoproblems.toml";

/// Defaults, then `./twoproblems.toml`, then `--config`, then flag overrides
fn load_config(path: Option<&PathBuf>, backtrack_limit: Option<u32>) -> anyhow::Result<AppConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(limit) = backtrack_limit {
        loader = loader
            .set_override("engine.backtrack_limit", i64::from(limit))
            .context("invalid --backtrack-limit")?;
    }
    loader.build().context("failed to load configuration")
}
