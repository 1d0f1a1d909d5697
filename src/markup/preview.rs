//! Note preview
//!
//! What a note editor shows next to the markup: after every edit the whole
//! text is lexed again and either the token dump or the diagnostics replace
//! the previous output. Nothing is carried over between edits.

use crate::markup::config::NotemarkConfig;
use crate::markup::error::Result;
use crate::markup::formats::FormatRegistry;
use crate::markup::lexing::lex_with;
use once_cell::sync::Lazy;
use tracing::debug;

static DEFAULT_FORMATS: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

/// The output of one preview pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// The formatted token stream
    Tokens(String),
    /// The errors of a failed pass; caret diagnostics for the text formats
    Diagnostics(String),
}

impl Preview {
    pub fn text(&self) -> &str {
        match self {
            Preview::Tokens(text) | Preview::Diagnostics(text) => text,
        }
    }

    pub fn is_diagnostics(&self) -> bool {
        matches!(self, Preview::Diagnostics(_))
    }
}

/// Lex `source` and print the outcome in the configured format.
///
/// Lexical errors are not an `Err` here, they are a [`Preview::Diagnostics`];
/// only an unknown format or a serialization failure is. The format is
/// resolved before lexing, so an unknown name fails the same way for clean
/// and broken documents.
pub fn render(source: &str, config: &NotemarkConfig) -> Result<Preview> {
    let formatter = DEFAULT_FORMATS.get(&config.output.format)?;
    match lex_with(source, &config.lexer) {
        Ok(tokens) => Ok(Preview::Tokens(formatter.tokens(&tokens)?)),
        Err(errors) => {
            debug!(errors = errors.len(), "preview shows diagnostics");
            Ok(Preview::Diagnostics(formatter.diagnostics(&errors)?))
        }
    }
}
