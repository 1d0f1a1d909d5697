//! Lexer
//!
//! This module turns note markup into a flat token stream.
//!
//! Structure:
//!     The lexer is hand written. A [`cursor::Cursor`] walks the source line by
//!     line and synthesizes the line breaks between lines; [`lexer::Lexer`]
//!     drives it and classifies characters.
//!
//! Recognized markup:
//!     - `=` runs are headers, one level per `=`, six at most
//!     - exactly `---` is a horizontal rule
//!     - `: { } * _ ^ [ ] | #` are single character markers
//!     - line breaks are tokens of their own
//!     - everything else is free text, grouped into the longest possible spans
//!
//! Error Handling
//!
//!     Lexical errors never stop a pass. They are collected and returned all
//!     together at the end, so one edit shows every problem in the document.
//!     A pass that found errors yields no tokens to the caller.

pub mod cursor;
pub mod detokenizer;
pub mod error;
pub mod lexer;

pub use cursor::{Cursor, Position, SourceBuffer};
pub use detokenizer::detokenize;
pub use error::{LexError, LexErrorKind, LexErrors};
pub use lexer::{ColumnMode, Lexer};

use crate::markup::config::LexerConfig;
use crate::markup::token::Token;

/// Lex a whole document with default settings.
pub fn lex(source: &str) -> Result<Vec<Token>, LexErrors> {
    Lexer::new(source).lex()
}

/// Lex a whole document with the given settings.
pub fn lex_with(source: &str, config: &LexerConfig) -> Result<Vec<Token>, LexErrors> {
    Lexer::new(source).with_column_mode(config.column_mode).lex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::token::TokenKind;

    #[test]
    fn test_lex_with_token_start_columns() {
        let config = LexerConfig {
            column_mode: ColumnMode::TokenStart,
        };
        let tokens = lex_with("x ===", &config).unwrap();
        assert_eq!(tokens[1], Token::new(TokenKind::Header3, "===", 1, 3));

        let tokens = lex("x ===").unwrap();
        assert_eq!(tokens[1], Token::new(TokenKind::Header3, "===", 1, 5));
    }

    #[test]
    fn test_failed_pass_returns_only_errors() {
        let errors = lex("ok\n=======\n").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].line, 2);
    }
}
