use crate::tokenizer::{
    core::{StateKind, States, Tokenizer},
    states::{LineCommentState, NumberState, PlainQuoteState, TrieSymbolState, WhitespaceState,
             WordState},
};

/// Builds a tokenizer for loosely structured text.
///
/// - Words are letters, digits, `-`, `_` and anything from U+00C0 upwards,
///   and start with a letter.
/// - Numbers may carry a leading `-` and a decimal part.
/// - `"` and `'` delimit strings without escapes.
/// - `#` starts a comment that runs to the end of the line.
/// - `<>`, `<=` and `>=` are recognised as single symbols.
///
/// # Example
/// ```
/// use reckon::tokenizer::{generic::generic_tokenizer, token::TokenKind};
///
/// let mut tokenizer = generic_tokenizer();
/// tokenizer.options.skip_whitespaces = true;
/// tokenizer.options.skip_eof = true;
///
/// let tokens = tokenizer.tokenize("total >= -5 # limit");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Word, TokenKind::Symbol, TokenKind::Integer, TokenKind::Comment]);
/// ```
#[must_use]
pub fn generic_tokenizer() -> Tokenizer {
    let states = States { whitespace: Box::new(WhitespaceState::new()),
                          word:       Box::new(WordState::new()),
                          number:     Box::new(NumberState::new()),
                          quote:      Box::new(PlainQuoteState::new()),
                          comment:    Box::new(LineCommentState::new()),
                          symbol:     Box::new(TrieSymbolState::with_symbols(&["<>", "<=", ">="])), };

    let mut tokenizer = Tokenizer::new(states);
    tokenizer.set_character_state('\0', char::MAX, StateKind::Symbol);
    tokenizer.set_character_state('\0', ' ', StateKind::Whitespace);

    tokenizer.set_character_state('a', 'z', StateKind::Word);
    tokenizer.set_character_state('A', 'Z', StateKind::Word);
    tokenizer.set_character_state('\u{c0}', char::MAX, StateKind::Word);

    tokenizer.set_character_state('-', '-', StateKind::Number);
    tokenizer.set_character_state('0', '9', StateKind::Number);
    tokenizer.set_character_state('.', '.', StateKind::Number);

    tokenizer.set_character_state('"', '"', StateKind::Quote);
    tokenizer.set_character_state('\'', '\'', StateKind::Quote);

    tokenizer.set_character_state('#', '#', StateKind::Comment);

    tokenizer
}
