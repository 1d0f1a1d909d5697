//! Errors for everything around the lexer: loading input and configuration,
//! formatting output.

use crate::markup::formats::FormatError;
use crate::markup::lexing::LexErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotemarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Format(#[from] FormatError),

    /// The document has lexical errors; displays as the rendered diagnostics.
    #[error("{0}")]
    Lex(#[from] LexErrors),
}

pub type Result<T> = std::result::Result<T, NotemarkError>;
