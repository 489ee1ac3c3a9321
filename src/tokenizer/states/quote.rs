use crate::tokenizer::{
    core::Tokenizer,
    scanner::Scanner,
    state::{QuoteState, TokenizerState},
    token::{Token, TokenKind},
};

/// Reads a string that runs from a quote character to the next occurrence
/// of the same character. There is no way to escape the delimiter.
///
/// An unterminated string runs to the end of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainQuoteState;

impl PlainQuoteState {
    /// Creates the state.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TokenizerState for PlainQuoteState {
    fn next_token(&self, scanner: &mut Scanner, _tokenizer: &Tokenizer) -> Token {
        let Some(quote) = scanner.read() else {
            return Token::new(TokenKind::Quoted, "", scanner.line(), scanner.column());
        };
        let (line, column) = (scanner.line(), scanner.column());

        let mut value = String::from(quote);
        while let Some(chr) = scanner.read() {
            value.push(chr);
            if chr == quote {
                break;
            }
        }

        Token::new(TokenKind::Quoted, value, line, column)
    }
}

impl QuoteState for PlainQuoteState {
    fn encode_string(&self, value: &str, quote: char) -> String {
        format!("{quote}{value}{quote}")
    }

    fn decode_string(&self, value: &str, quote: char) -> String {
        strip_quotes(value, quote).unwrap_or(value).to_string()
    }
}

/// Returns the text between a leading and a trailing `quote`.
pub(crate) fn strip_quotes(value: &str, quote: char) -> Option<&str> {
    value.strip_prefix(quote)?.strip_suffix(quote)
}
