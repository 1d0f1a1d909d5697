//! Configuration loader for notemark.
//!
//! `defaults/notemark.default.toml` is embedded into the binary so that docs
//! and runtime behavior stay in sync.

use crate::markup::lexing::ColumnMode;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../../defaults/notemark.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NotemarkConfig {
    pub lexer: LexerConfig,
    pub output: OutputConfig,
}

/// Knobs for the lexer itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LexerConfig {
    pub column_mode: ColumnMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered token format
    pub format: String,
}

/// Builds a [`NotemarkConfig`] from the embedded defaults, an optional
/// user file, and whatever the command line pinned down, in that order of
/// precedence (later wins).
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn from_defaults() -> Self {
        Loader {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a user TOML file. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        debug!(path = %path.display(), "layering config file");
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self
    }

    /// Pin the output format, whatever the files say.
    pub fn with_format(self, name: &str) -> Result<Self, ConfigError> {
        self.pin("output.format", name)
    }

    /// Pin the column mode, whatever the files say.
    pub fn with_column_mode(self, mode: ColumnMode) -> Result<Self, ConfigError> {
        self.pin("lexer.column_mode", mode.as_str())
    }

    fn pin(mut self, key: &str, value: &str) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<NotemarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        write!(file, "{contents}").expect("write config");
        file
    }

    #[test]
    fn defaults_are_simple_post_advance() {
        let config = Loader::from_defaults().build().expect("defaults to deserialize");
        assert_eq!(config.lexer, LexerConfig::default());
        assert_eq!(config.lexer.column_mode, ColumnMode::PostAdvance);
        assert_eq!(config.output.format, "simple");
    }

    #[test]
    fn pinned_values_replace_defaults() {
        let config = Loader::from_defaults()
            .with_column_mode(ColumnMode::TokenStart)
            .expect("column mode to apply")
            .with_format("json")
            .expect("format to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.lexer.column_mode, ColumnMode::TokenStart);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn user_file_keeps_unset_defaults() {
        let file = toml_file("[output]\nformat = \"yaml\"\n");
        let config = Loader::from_defaults()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "yaml");
        assert_eq!(config.lexer.column_mode, ColumnMode::PostAdvance);
    }

    #[test]
    fn pinned_values_beat_user_file() {
        let file = toml_file(
            "[lexer]\ncolumn_mode = \"token-start\"\n[output]\nformat = \"yaml\"\n",
        );
        let config = Loader::from_defaults()
            .with_file(file.path())
            .with_column_mode(ColumnMode::PostAdvance)
            .expect("column mode to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.lexer.column_mode, ColumnMode::PostAdvance);
        assert_eq!(config.output.format, "yaml");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = Loader::from_defaults().with_file("/nonexistent/notemark.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn unknown_column_mode_in_file_is_an_error() {
        let file = toml_file("[lexer]\ncolumn_mode = \"sideways\"\n");
        let result = Loader::from_defaults().with_file(file.path()).build();
        assert!(result.is_err());
    }
}
