//! Output formats for a lex pass
//!
//!     - `simple`: one `Kind(value, line, column)` per line, the dump a note
//!       preview shows
//!     - `json` / `yaml`: tokens, or the errors of a failed pass, serialized
//!       with serde
//!     - `source`: the detokenized text, for round-trip checks
//!
//! Every format renders both outcomes of a pass. The text formats print
//! failed passes as caret diagnostics; the serde formats emit the error
//! records so tooling can consume them.

use crate::markup::lexing::{detokenize, LexErrors};
use crate::markup::token::Token;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    NotFound(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A named way to print the outcome of a lex pass
pub trait TokenFormatter: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn tokens(&self, tokens: &[Token]) -> Result<String, FormatError>;

    /// Defaults to the rendered caret diagnostics.
    fn diagnostics(&self, errors: &LexErrors) -> Result<String, FormatError> {
        Ok(errors.to_string())
    }
}

struct SimpleFormatter;

impl TokenFormatter for SimpleFormatter {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn description(&self) -> &'static str {
        "One Kind(value, line, column) entry per line"
    }

    fn tokens(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(tokens.iter().map(|token| format!("{token}\n")).collect())
    }
}

struct JsonFormatter;

impl JsonFormatter {
    fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        Ok(json)
    }
}

impl TokenFormatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn description(&self) -> &'static str {
        "Pretty-printed JSON array of tokens or errors"
    }

    fn tokens(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Self::pretty(tokens)
    }

    fn diagnostics(&self, errors: &LexErrors) -> Result<String, FormatError> {
        Self::pretty(errors)
    }
}

struct YamlFormatter;

impl TokenFormatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn description(&self) -> &'static str {
        "YAML sequence of tokens or errors"
    }

    fn tokens(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(tokens)?)
    }

    fn diagnostics(&self, errors: &LexErrors) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(errors)?)
    }
}

struct SourceFormatter;

impl TokenFormatter for SourceFormatter {
    fn name(&self) -> &'static str {
        "source"
    }

    fn description(&self) -> &'static str {
        "Source text rebuilt from the tokens"
    }

    fn tokens(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(detokenize(tokens))
    }
}

/// The built-in formats, in name order.
pub struct FormatRegistry {
    formatters: Vec<Box<dyn TokenFormatter>>,
}

impl FormatRegistry {
    pub fn with_defaults() -> Self {
        FormatRegistry {
            formatters: vec![
                Box::new(JsonFormatter),
                Box::new(SimpleFormatter),
                Box::new(SourceFormatter),
                Box::new(YamlFormatter),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Result<&dyn TokenFormatter, FormatError> {
        self.formatters
            .iter()
            .map(Box::as_ref)
            .find(|formatter| formatter.name() == name)
            .ok_or_else(|| FormatError::NotFound(name.to_string()))
    }

    pub fn formatters(&self) -> impl Iterator<Item = &dyn TokenFormatter> {
        self.formatters.iter().map(Box::as_ref)
    }

    pub fn serialize(&self, tokens: &[Token], format: &str) -> Result<String, FormatError> {
        self.get(format)?.tokens(tokens)
    }

    pub fn serialize_errors(&self, errors: &LexErrors, format: &str) -> Result<String, FormatError> {
        self.get(format)?.diagnostics(errors)
    }
}
