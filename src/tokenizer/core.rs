use crate::tokenizer::{
    char_map::CharMap,
    scanner::Scanner,
    state::{QuoteState, SymbolState, TokenizerState},
    token::{Token, TokenKind},
};

/// Switches that control which tokens the tokenizer emits and how.
///
/// All switches are off by default, in which case the token stream
/// reproduces the source text exactly, followed by one end-of-stream token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct TokenizerOptions {
    /// Drop characters no state claimed.
    pub skip_unknown:      bool,
    /// Drop whitespace tokens.
    pub skip_whitespaces:  bool,
    /// Drop comment tokens.
    pub skip_comments:     bool,
    /// Do not emit the end-of-stream token.
    pub skip_eof:          bool,
    /// Replace every whitespace run with a single space.
    pub merge_whitespaces: bool,
    /// Report integers and floats as [`TokenKind::Number`].
    pub unify_numbers:     bool,
    /// Replace quoted tokens with their unescaped contents.
    pub decode_strings:    bool,
}

/// Identifies which of the tokenizer's states handles a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Runs of blank characters.
    Whitespace,
    /// Identifiers and keywords.
    Word,
    /// Numeric literals.
    Number,
    /// Quoted strings.
    Quote,
    /// Comments.
    Comment,
    /// Operators and punctuation.
    Symbol,
}

/// The lexical states a tokenizer dispatches to.
#[derive(Debug)]
pub struct States {
    /// Reads whitespace runs.
    pub whitespace: Box<dyn TokenizerState>,
    /// Reads identifiers.
    pub word:       Box<dyn TokenizerState>,
    /// Reads numbers.
    pub number:     Box<dyn TokenizerState>,
    /// Reads quoted strings and decodes them.
    pub quote:      Box<dyn QuoteState>,
    /// Reads comments.
    pub comment:    Box<dyn TokenizerState>,
    /// Reads operators.
    pub symbol:     Box<dyn SymbolState>,
}

/// A character-driven tokenizer.
///
/// For every token, the tokenizer peeks at the next character, looks up the
/// state registered for it and lets that state read the token. The result is
/// then filtered and rewritten according to the [`TokenizerOptions`].
///
/// A tokenizer holds no per-input state, so one instance can tokenize any
/// number of sources, including from several threads at once.
///
/// # Example
/// ```
/// use reckon::tokenizer::generic::generic_tokenizer;
///
/// let tokenizer = generic_tokenizer();
/// assert_eq!(tokenizer.tokenize_to_strings("a <= 10"),
///            vec!["a", " ", "<=", " ", "10", ""]);
/// ```
#[derive(Debug)]
pub struct Tokenizer {
    /// Filtering and rewriting switches.
    pub options: TokenizerOptions,
    states:      States,
    dispatch:    CharMap<StateKind>,
}

impl Tokenizer {
    /// Creates a tokenizer over `states` with an empty dispatch table.
    #[must_use]
    pub fn new(states: States) -> Self {
        Self { options: TokenizerOptions::default(),
               states,
               dispatch: CharMap::new() }
    }

    /// Routes the characters in `start..=end` to the state of `kind`.
    ///
    /// Later registrations take precedence over earlier ones.
    pub fn set_character_state(&mut self, start: char, end: char, kind: StateKind) {
        self.dispatch.add_interval(start, end, kind);
    }

    /// Removes every character registration.
    pub fn clear_character_states(&mut self) {
        self.dispatch.clear();
    }

    /// The state registered for `chr`, if any.
    #[must_use]
    pub fn character_state(&self, chr: char) -> Option<StateKind> {
        self.dispatch.lookup(chr).copied()
    }

    /// Returns the state of the given kind.
    #[must_use]
    pub fn state(&self, kind: StateKind) -> &dyn TokenizerState {
        match kind {
            StateKind::Whitespace => self.states.whitespace.as_ref(),
            StateKind::Word => self.states.word.as_ref(),
            StateKind::Number => self.states.number.as_ref(),
            StateKind::Quote => self.states.quote.as_ref(),
            StateKind::Comment => self.states.comment.as_ref(),
            StateKind::Symbol => self.states.symbol.as_ref(),
        }
    }

    /// The state other states hand over to when their input is not theirs.
    #[must_use]
    pub fn symbol_state(&self) -> &dyn SymbolState {
        self.states.symbol.as_ref()
    }

    /// Mutable access to the symbol state, for registering operators.
    pub fn symbol_state_mut(&mut self) -> &mut dyn SymbolState {
        self.states.symbol.as_mut()
    }

    /// The state that knows how to encode and decode quoted strings.
    #[must_use]
    pub fn quote_state(&self) -> &dyn QuoteState {
        self.states.quote.as_ref()
    }

    /// Returns a lazy token stream over `source`.
    #[must_use]
    pub fn tokens<'t>(&'t self, source: &str) -> Tokens<'t> {
        Tokens { tokenizer: self,
                 scanner:   Scanner::new(source),
                 last_kind: TokenKind::Unknown, }
    }

    /// Tokenizes `source` into a list.
    #[must_use]
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        self.tokens(source).collect()
    }

    /// Tokenizes `source` and keeps only the token values.
    #[must_use]
    pub fn tokenize_to_strings(&self, source: &str) -> Vec<String> {
        self.tokens(source).map(|token| token.value().to_string()).collect()
    }

    /// Reads the next token that survives the configured filters.
    fn read_next_token(&self, scanner: &mut Scanner, last_kind: &mut TokenKind) -> Option<Token> {
        let mut result = None;

        while let Some(next) = scanner.peek() {
            let (line, column) = (scanner.peek_line(), scanner.peek_column());
            let kind = self.character_state(next);

            let mut token = match kind.map(|kind| self.state(kind).next_token(scanner, self)) {
                Some(token) if !token.value().is_empty() => token,
                _ => {
                    let chr = scanner.read().unwrap_or(next);
                    Token::new(TokenKind::Unknown, chr.to_string(), line, column)
                },
            };

            if kind == Some(StateKind::Quote) && self.options.decode_strings {
                let decoded = self.quote_state().decode_string(token.value(), next);
                token = Token::new(token.kind(), decoded, token.line(), token.column());
            }

            let skip = match token.kind() {
                TokenKind::Unknown => self.options.skip_unknown,
                TokenKind::Comment => self.options.skip_comments,
                TokenKind::Whitespace => self.options.skip_whitespaces,
                _ => false,
            };
            if skip {
                *last_kind = token.kind();
                continue;
            }

            if token.kind() == TokenKind::Whitespace && self.options.merge_whitespaces {
                token = Token::new(TokenKind::Whitespace, " ", token.line(), token.column());
            }

            if self.options.unify_numbers
               && matches!(token.kind(), TokenKind::Integer | TokenKind::Float)
            {
                token = Token::new(TokenKind::Number, token.value(), token.line(), token.column());
            }

            result = Some(token);
            break;
        }

        if result.is_none() && *last_kind != TokenKind::Eof && !self.options.skip_eof {
            result = Some(Token::new(TokenKind::Eof, "", scanner.peek_line(), scanner.peek_column()));
        }

        *last_kind = result.as_ref().map_or(TokenKind::Eof, Token::kind);
        result
    }
}

/// A lazily consumed token stream.
///
/// Produced by [`Tokenizer::tokens`]. The stream can be rewound with
/// [`Tokens::reset`].
#[derive(Debug)]
pub struct Tokens<'t> {
    tokenizer: &'t Tokenizer,
    scanner:   Scanner,
    last_kind: TokenKind,
}

impl Tokens<'_> {
    /// Rewinds the stream to the start of the source.
    pub const fn reset(&mut self) {
        self.scanner.reset();
        self.last_kind = TokenKind::Unknown;
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokenizer.read_next_token(&mut self.scanner, &mut self.last_kind)
    }
}
