//! Shared configuration loader for twoproblems.
//!
//! `defaults/twoproblems.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. Users layer their own
//! files on top via [`Loader`] before deserializing into [`AppConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/twoproblems.default.toml");

/// Top-level configuration consumed by the twoproblems binary.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub viewer: ViewerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

/// Knobs handed to the match engine.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub backtrack_limit: usize,
}

/// Terminal viewer layout and behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    pub card_size: CardSize,
    pub tick_rate_ms: u64,
    pub min_width: u16,
    pub two_column_width: u16,
    pub header_collapse_width: u16,
}

/// Padding of the main card, mirroring the small/medium/large card variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Sm,
    Md,
    #[default]
    Lg,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

/// A named pattern offered under "Common Patterns".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub description: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AppConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.engine.backtrack_limit, 1_000_000);
        assert_eq!(config.viewer.card_size, CardSize::Lg);
        assert_eq!(config.viewer.tick_rate_ms, 100);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn default_presets_are_listed_in_file_order() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.presets.len(), 7);
        assert_eq!(config.presets[0].name, "Digits");
        assert_eq!(config.presets[0].pattern, r"\d+");
        assert_eq!(config.presets[6].pattern, "[aeiou]");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("viewer.card_size", "sm")
            .expect("override to apply")
            .set_override("engine.backtrack_limit", 42_i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.viewer.card_size, CardSize::Sm);
        assert_eq!(config.engine.backtrack_limit, 42);
    }

    #[test]
    fn user_file_is_layered_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "[viewer]\ncard_size = \"md\"\n\n[logging]\nfile = \"lab.log\""
        )
        .expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.viewer.card_size, CardSize::Md);
        assert_eq!(config.viewer.tick_rate_ms, 100);
        assert_eq!(config.logging.file, Some(PathBuf::from("lab.log")));
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/definitely/not/here/twoproblems.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/twoproblems.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.viewer.card_size, CardSize::Lg);
    }
}
