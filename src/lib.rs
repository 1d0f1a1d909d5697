//! # notemark
//!
//! A lexer for the markup used in graph note bodies: headers, rules,
//! emphasis markers, links and tables.
//!
//! ```text
//! let tokens = notemark::lex("== Title\n---\n")?;
//! ```
//!
//! The lexer reports every error in a document at once; see
//! [`markup::lexing`] for the details.

pub mod markup;

pub use markup::config::{Loader, NotemarkConfig};
pub use markup::error::{NotemarkError, Result};
pub use markup::lexing::{detokenize, lex, lex_with, LexError, LexErrors, Lexer};
pub use markup::preview::{render, Preview};
pub use markup::token::{Token, TokenKind};
