//! The markup tokenizer
//!
//! A single pass over the [`Cursor`] that classifies every character. Free
//! text accumulates in a pending span which is flushed as one `TextSpan`
//! whenever a structural character shows up, so there is never an empty text
//! token and punctuation is never split by one.
//!
//! Errors do not stop the scan. They are collected and the caller decides
//! what to do with them; [`Lexer::lex`] turns a non-empty list into a failed
//! result carrying all of them and drops the tokens.

use super::cursor::{Cursor, Position};
use super::error::{LexError, LexErrorKind, LexErrors};
use crate::markup::token::{Token, TokenKind, MAX_HEADER_LEVEL};
use serde::Deserialize;
use tracing::{debug, trace};

/// Length of a horizontal rule
const RULE_LEN: usize = 3;

/// Which column multi-character tokens report.
///
/// Single characters and text spans are unaffected: both modes give the
/// 1-based column of their first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnMode {
    /// Column of the cursor after the whole token was consumed, so `===` at
    /// the start of a line reports column 3.
    #[default]
    PostAdvance,
    /// Column of the token's first character.
    TokenStart,
}

impl ColumnMode {
    pub const ALL: [ColumnMode; 2] = [ColumnMode::PostAdvance, ColumnMode::TokenStart];

    /// Name used in configuration files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnMode::PostAdvance => "post-advance",
            ColumnMode::TokenStart => "token-start",
        }
    }
}

pub struct Lexer {
    cursor: Cursor,
    column_mode: ColumnMode,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
    span: String,
    span_start: Position,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            column_mode: ColumnMode::default(),
            tokens: Vec::new(),
            errors: Vec::new(),
            span: String::new(),
            span_start: Position::default(),
        }
    }

    pub fn with_column_mode(mut self, column_mode: ColumnMode) -> Self {
        self.column_mode = column_mode;
        self
    }

    /// Run the pass and return everything it produced, tokens and errors alike.
    pub fn scan(mut self) -> (Vec<Token>, Vec<LexError>) {
        debug!(
            lines = self.cursor.buffer().line_count(),
            column_mode = ?self.column_mode,
            "lex pass started"
        );

        while let Some(c) = self.cursor.advance() {
            match c {
                '\n' => {
                    self.flush_span();
                    self.emit(TokenKind::LineBreak, "\n");
                }
                '\r' => {}
                '=' => self.header(),
                '-' => self.rule_or_text(),
                c => match TokenKind::punctuation(c) {
                    Some(kind) => {
                        self.flush_span();
                        self.emit(kind, c.to_string());
                    }
                    None => {
                        let at = self.cursor.position();
                        self.push_span(c, at);
                    }
                },
            }
        }
        self.flush_span();

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "lex pass finished"
        );
        (self.tokens, self.errors)
    }

    /// Run the pass, failing with every collected error if there were any.
    pub fn lex(self) -> Result<Vec<Token>, LexErrors> {
        let (tokens, errors) = self.scan();
        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(LexErrors::new(errors))
        }
    }

    /// Called with the first `=` already consumed.
    fn header(&mut self) {
        let start = self.cursor.position();
        self.flush_span();

        let mut level = 1;
        while self.cursor.peek() == Some('=') {
            self.cursor.advance();
            level += 1;
        }

        let column = self.column_for(start);
        if level > MAX_HEADER_LEVEL {
            let error = LexError::new(
                LexErrorKind::HeaderTooDeep { level },
                start.line,
                column,
                self.cursor.current_line_text(),
            );
            trace!(line = error.line, column = error.column, level, "header too deep");
            self.errors.push(error);
        }

        self.tokens.push(Token::new(
            TokenKind::header(level),
            "=".repeat(level),
            start.line,
            column,
        ));
    }

    /// Called with the first `-` already consumed. Only an exact `---`
    /// becomes a rule; a shorter run goes back into the text span.
    fn rule_or_text(&mut self) {
        let start = self.cursor.position();

        let mut run = 1;
        while run < RULE_LEN && self.cursor.peek() == Some('-') {
            self.cursor.advance();
            run += 1;
        }

        if run == RULE_LEN {
            self.flush_span();
            let column = self.column_for(start);
            self.tokens.push(Token::new(
                TokenKind::HRule,
                "-".repeat(RULE_LEN),
                start.line,
                column,
            ));
        } else {
            for _ in 0..run {
                self.push_span('-', start);
            }
        }
    }

    fn column_for(&self, start: Position) -> usize {
        match self.column_mode {
            ColumnMode::PostAdvance => self.cursor.index(),
            ColumnMode::TokenStart => start.index,
        }
    }

    /// Emit a token at the cursor's current position.
    fn emit(&mut self, kind: TokenKind, value: impl Into<String>) {
        self.tokens
            .push(Token::new(kind, value, self.cursor.line(), self.cursor.index()));
    }

    /// `at` is the position right after `c`; it becomes the span start if
    /// the span is empty.
    fn push_span(&mut self, c: char, at: Position) {
        if self.span.is_empty() {
            self.span_start = at;
        }
        self.span.push(c);
    }

    fn flush_span(&mut self) {
        if self.span.is_empty() {
            return;
        }
        let value = std::mem::take(&mut self.span);
        self.tokens.push(Token::new(
            TokenKind::TextSpan,
            value,
            self.span_start.line,
            self.span_start.index,
        ));
    }
}
