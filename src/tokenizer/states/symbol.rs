use crate::tokenizer::{
    core::Tokenizer,
    scanner::Scanner,
    state::{SymbolState, TokenizerState},
    symbol_trie::SymbolTrie,
    token::{Token, TokenKind},
};

/// Reads operators by longest match against a [`SymbolTrie`].
#[derive(Debug, Clone, Default)]
pub struct TrieSymbolState {
    symbols: SymbolTrie,
}

impl TrieSymbolState {
    /// Creates a state that knows no multi-character symbols.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: SymbolTrie::new() }
    }

    /// Creates a state with `spellings` registered as plain symbols.
    #[must_use]
    pub fn with_symbols(spellings: &[&str]) -> Self {
        let mut state = Self::new();
        for spelling in spellings {
            state.add(spelling, TokenKind::Symbol);
        }
        state
    }
}

impl TokenizerState for TrieSymbolState {
    fn next_token(&self, scanner: &mut Scanner, _tokenizer: &Tokenizer) -> Token {
        self.symbols.next_token(scanner)
    }
}

impl SymbolState for TrieSymbolState {
    fn add(&mut self, spelling: &str, kind: TokenKind) {
        self.symbols.add(spelling, kind);
    }
}
