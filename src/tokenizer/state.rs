use std::fmt;

use crate::tokenizer::{
    core::Tokenizer,
    scanner::Scanner,
    token::{Token, TokenKind},
};

/// A lexical state: consumes the characters of one token.
///
/// The tokenizer hands control to a state when the next pending character
/// is registered to it. The state reads as many characters as belong to its
/// token and pushes back anything it over-read. A state that cannot make
/// sense of its input may hand the scanner to another state of the same
/// tokenizer, typically the symbol state.
pub trait TokenizerState: fmt::Debug + Send + Sync {
    /// Reads one token starting at the scanner's cursor.
    ///
    /// # Parameters
    /// - `scanner`: Cursor positioned before the token's first character.
    /// - `tokenizer`: The tokenizer driving this state, for delegation.
    ///
    /// # Returns
    /// The token read. An empty token makes the tokenizer fall back to a
    /// one-character unknown token.
    fn next_token(&self, scanner: &mut Scanner, tokenizer: &Tokenizer) -> Token;
}

/// A lexical state for quoted strings that also knows the quoting rules.
pub trait QuoteState: TokenizerState {
    /// Wraps `value` in `quote`, escaping it as this state expects.
    fn encode_string(&self, value: &str, quote: char) -> String;

    /// Strips the `quote` delimiters from `value` and undoes any escaping.
    ///
    /// Text that is not delimited by `quote` is returned unchanged.
    fn decode_string(&self, value: &str, quote: char) -> String;
}

/// A lexical state for operators that can learn new spellings.
pub trait SymbolState: TokenizerState {
    /// Registers a multi-character symbol.
    fn add(&mut self, spelling: &str, kind: TokenKind);
}
