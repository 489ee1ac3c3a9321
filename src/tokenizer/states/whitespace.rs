use crate::tokenizer::{
    char_map::CharMap,
    core::Tokenizer,
    scanner::Scanner,
    state::TokenizerState,
    states::read_run,
    token::{Token, TokenKind},
};

/// Reads a run of whitespace characters.
///
/// By default every control character and the space (`\0` through `' '`)
/// counts as whitespace.
#[derive(Debug, Clone)]
pub struct WhitespaceState {
    chars: CharMap<()>,
}

impl WhitespaceState {
    /// Creates a state treating `\0..=' '` as whitespace.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self { chars: CharMap::new() };
        state.set_whitespace_chars('\0', ' ', true);
        state
    }

    /// Adds or removes `start..=end` from the whitespace class.
    pub fn set_whitespace_chars(&mut self, start: char, end: char, enable: bool) {
        if enable {
            self.chars.add_interval(start, end, ());
        } else {
            self.chars.remove_interval(start, end);
        }
    }

    /// Empties the whitespace class.
    pub fn clear_whitespace_chars(&mut self) {
        self.chars.clear();
    }
}

impl Default for WhitespaceState {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerState for WhitespaceState {
    fn next_token(&self, scanner: &mut Scanner, _tokenizer: &Tokenizer) -> Token {
        read_run(scanner, &self.chars, TokenKind::Whitespace)
    }
}
