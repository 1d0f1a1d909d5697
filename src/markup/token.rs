//! Token definitions for the note markup
//!
//! Every token carries the literal text it was produced from together with
//! the line (1-based) and column it was reported at. Kinds are a flat set:
//! the lexer does not nest anything, that is left to whatever consumes the
//! stream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deepest header level the markup supports.
pub const MAX_HEADER_LEVEL: usize = 6;

/// All possible token kinds in the note markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Headers, one per `=` in the run
    Header1,
    Header2,
    Header3,
    Header4,
    Header5,
    Header6,

    // Structural
    HRule,
    LineBreak,

    // Single character markers
    Colon,
    LBrace,
    RBrace,
    Star,
    Underscore,
    Caret,
    LBracket,
    RBracket,
    Pipe,
    Hash,

    // Free text (catch-all for everything not recognized above)
    TextSpan,
}

impl TokenKind {
    /// Map a header run length onto a header kind.
    ///
    /// Runs deeper than [`MAX_HEADER_LEVEL`] are clamped to `Header6`; the
    /// lexer reports those separately. A zero length is treated as level 1.
    pub fn header(level: usize) -> Self {
        match level.clamp(1, MAX_HEADER_LEVEL) {
            1 => TokenKind::Header1,
            2 => TokenKind::Header2,
            3 => TokenKind::Header3,
            4 => TokenKind::Header4,
            5 => TokenKind::Header5,
            _ => TokenKind::Header6,
        }
    }

    /// Kind of a one-character marker, if `c` is one
    pub fn punctuation(c: char) -> Option<Self> {
        let kind = match c {
            ':' => TokenKind::Colon,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '*' => TokenKind::Star,
            '_' => TokenKind::Underscore,
            '^' => TokenKind::Caret,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '|' => TokenKind::Pipe,
            '#' => TokenKind::Hash,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A classified, positioned piece of markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            line,
            column,
        }
    }
}

/// Renders as `Kind(value, line, column)`, with control characters in the
/// value escaped so a line break token stays on one line.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.kind,
            self.value.escape_debug(),
            self.line,
            self.column
        )
    }
}
