use crate::tokenizer::{
    core::Tokenizer,
    scanner::Scanner,
    state::TokenizerState,
    token::{Token, TokenKind},
};

/// Reads an optionally negative integer or decimal number.
///
/// Accepts a leading `-`, a run of digits, and an optional `.` followed by
/// more digits. Input that contains no digit at all (a lone `-` or `.`) is
/// pushed back and handed to the symbol state.
///
/// # Example
/// ```
/// use reckon::tokenizer::{generic::generic_tokenizer, token::TokenKind};
///
/// let tokens = generic_tokenizer().tokenize("-12.5");
/// assert_eq!(tokens[0].kind(), TokenKind::Float);
/// assert_eq!(tokens[0].value(), "-12.5");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberState;

impl NumberState {
    /// Creates the state.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TokenizerState for NumberState {
    fn next_token(&self, scanner: &mut Scanner, tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let mut value = String::new();

        if scanner.peek() == Some('-') {
            scanner.read();
            value.push('-');
        }

        let mut got_digit = read_digits(scanner, &mut value);
        let mut absorbed_dot = false;
        if scanner.peek() == Some('.') {
            scanner.read();
            value.push('.');
            absorbed_dot = true;
            got_digit |= read_digits(scanner, &mut value);
        }

        if !got_digit {
            scanner.unread_many(value.chars().count());
            return tokenizer.symbol_state().next_token(scanner, tokenizer);
        }

        let kind = if absorbed_dot { TokenKind::Float } else { TokenKind::Integer };
        Token::new(kind, value, line, column)
    }
}

/// Appends a run of ASCII digits to `value`.
///
/// Returns `true` if at least one digit was read.
pub(crate) fn read_digits(scanner: &mut Scanner, value: &mut String) -> bool {
    let mut any = false;
    while let Some(chr) = scanner.peek()
          && chr.is_ascii_digit()
    {
        scanner.read();
        value.push(chr);
        any = true;
    }
    any
}
