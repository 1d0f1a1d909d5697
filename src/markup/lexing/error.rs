//! Lexical errors
//!
//! Errors are collected over a whole pass and handed back together as
//! [`LexErrors`]. Each one keeps a copy of its source line so it can be
//! rendered on its own, after the source buffer is gone.

use crate::markup::token::MAX_HEADER_LEVEL;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// What went wrong
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum LexErrorKind {
    #[error("Header level cannot be greater than {}", MAX_HEADER_LEVEL)]
    HeaderTooDeep { level: usize },
}

/// A single positioned lexical error
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{line}:{column}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
    pub column: usize,
    pub line_text: String,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: usize, column: usize, line_text: impl Into<String>) -> Self {
        LexError {
            kind,
            line,
            column,
            line_text: line_text.into(),
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Render as the source line, prefixed by its number, with a caret under
    /// the error column followed by the message:
    ///
    /// ```text
    /// 3: =======
    ///          ^ Header level cannot be greater than 6
    /// ```
    pub fn render(&self) -> String {
        let prefix = format!("{}: ", self.line);
        let offset = prefix.chars().count() + self.column.saturating_sub(1);
        format!(
            "{}{}\n{}^ {}\n",
            prefix,
            self.line_text,
            " ".repeat(offset),
            self.kind
        )
    }
}

/// Every error found during one lex pass, in detection order.
///
/// Displays as the rendered diagnostics concatenated together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct LexErrors {
    errors: Vec<LexError>,
}

impl LexErrors {
    pub fn new(errors: Vec<LexError>) -> Self {
        LexErrors { errors }
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for LexErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            f.write_str(&error.render())?;
        }
        Ok(())
    }
}

impl std::error::Error for LexErrors {}
