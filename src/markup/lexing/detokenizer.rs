//! Detokenizer for the note markup
//!
//! Converts a token stream back into source text. Every token carries the
//! literal text it was lexed from, line breaks included, so this is a plain
//! concatenation. The only thing lost on the way through the lexer is `\r`.
//!
//! Used for round-trip testing and by the `source` output format.

use crate::markup::token::Token;

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.value.as_str()).collect()
}
