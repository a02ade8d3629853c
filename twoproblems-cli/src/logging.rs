//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The interactive viewer owns the terminal, so while it runs logs can only
//! go to a file. One-shot commands log to stderr.
//!
//! # Levels
//!
//! - `warn`: rejected patterns
//! - `info`: start-up and configuration
//! - `debug`: every recomputation of the match results
//! - `trace`: per-string match counts

use anyhow::{anyhow, Context};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for commands that print and exit
    Stderr,
    /// Only a log file; nothing is logged without one
    FileOnly,
}

/// Resolved logging settings
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `twoproblems_core=trace`
    pub filter: String,
    pub log_file: Option<PathBuf>,
    pub target: LogTarget,
}

impl LogConfig {
    /// Combine the configured level with the `-v` count from the command line.
    ///
    /// - 0: the configured level
    /// - 1 (`-v`): debug
    /// - 2+ (`-vv`): trace
    pub fn resolve(
        configured_level: &str,
        verbosity: u8,
        log_file: Option<PathBuf>,
        target: LogTarget,
    ) -> Self {
        let filter = match verbosity {
            0 => configured_level.to_string(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        };
        LogConfig {
            filter,
            log_file,
            target,
        }
    }

    /// Whether any subscriber will be installed
    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some() || self.target == LogTarget::Stderr
    }
}

/// Install the global subscriber described by `config`.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    if !config.is_enabled() {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter '{}'", config.filter))?;

    let result = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|err| anyhow!("failed to initialise logging: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_level() {
        let config = LogConfig::resolve("warn", 0, None, LogTarget::Stderr);
        assert_eq!(config.filter, "warn");

        let config = LogConfig::resolve("warn", 1, None, LogTarget::Stderr);
        assert_eq!(config.filter, "debug");

        let config = LogConfig::resolve("warn", 3, None, LogTarget::Stderr);
        assert_eq!(config.filter, "trace");
    }

    #[test]
    fn viewer_without_file_logs_nothing() {
        let config = LogConfig::resolve("info", 0, None, LogTarget::FileOnly);
        assert!(!config.is_enabled());
        assert!(init_logging(&config).is_ok());

        let config = LogConfig::resolve(
            "info",
            0,
            Some(PathBuf::from("lab.log")),
            LogTarget::FileOnly,
        );
        assert!(config.is_enabled());
    }

    #[test]
    fn invalid_filter_is_reported() {
        let config = LogConfig::resolve("twoproblems=loud", 0, None, LogTarget::Stderr);
        let err = init_logging(&config).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }
}
