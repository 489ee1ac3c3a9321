use crate::tokenizer::{
    char_map::CharMap,
    core::Tokenizer,
    scanner::Scanner,
    state::TokenizerState,
    states::read_run,
    token::{Token, TokenKind},
};

/// Reads an identifier made of word characters.
///
/// Which characters may *start* a word is decided by the tokenizer's
/// dispatch table; this state only decides which characters continue one.
///
/// # Example
/// ```
/// use reckon::tokenizer::{generic::generic_tokenizer, scanner::Scanner, state::TokenizerState,
///                         states::WordState};
///
/// let tokenizer = generic_tokenizer();
/// let mut scanner = Scanner::new("x_1-y+z");
/// assert_eq!(WordState::new().next_token(&mut scanner, &tokenizer).value(), "x_1-y");
/// ```
#[derive(Debug, Clone)]
pub struct WordState {
    chars: CharMap<()>,
}

impl WordState {
    /// Creates a state accepting ASCII letters and digits, `-`, `_` and
    /// every character from U+00C0 upwards.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self { chars: CharMap::new() };
        state.set_word_chars('a', 'z', true);
        state.set_word_chars('A', 'Z', true);
        state.set_word_chars('0', '9', true);
        state.set_word_chars('-', '-', true);
        state.set_word_chars('_', '_', true);
        state.set_word_chars('\u{c0}', char::MAX, true);
        state
    }

    /// Creates a state with an empty character class.
    #[must_use]
    pub fn empty() -> Self {
        Self { chars: CharMap::new() }
    }

    /// Adds or removes `start..=end` from the word class.
    pub fn set_word_chars(&mut self, start: char, end: char, enable: bool) {
        if enable {
            self.chars.add_interval(start, end, ());
        } else {
            self.chars.remove_interval(start, end);
        }
    }

    /// Empties the word class.
    pub fn clear_word_chars(&mut self) {
        self.chars.clear();
    }

    /// Whether `chr` may appear inside a word.
    #[must_use]
    pub fn is_word_char(&self, chr: char) -> bool {
        self.chars.lookup(chr).is_some()
    }
}

impl Default for WordState {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerState for WordState {
    fn next_token(&self, scanner: &mut Scanner, _tokenizer: &Tokenizer) -> Token {
        read_run(scanner, &self.chars, TokenKind::Word)
    }
}
