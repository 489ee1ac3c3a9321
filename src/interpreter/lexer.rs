use crate::tokenizer::{
    core::{StateKind, States, Tokenizer},
    scanner::Scanner,
    state::{QuoteState, TokenizerState},
    states::{NumberState, SlashCommentState, TrieSymbolState, WhitespaceState, WordState,
             quote::strip_quotes},
    token::{Token, TokenKind},
};

/// Reserved words of the expression language, compared case-insensitively.
pub const KEYWORDS: &[&str] = &["AND", "OR", "NOT", "XOR", "LIKE", "IS", "IN", "NULL", "TRUE", "FALSE"];

/// Two-character operators the expression language recognises as one token.
pub const OPERATORS: &[&str] = &["<=", ">=", "<>", "!=", ">>", "<<"];

/// Builds the tokenizer for the expression language.
///
/// All filtering options are off, so the token stream reproduces the source
/// text. The parser switches on whitespace, comment and end-of-stream
/// skipping and string decoding for its own use.
///
/// # Example
/// ```
/// use reckon::{interpreter::lexer::expression_tokenizer, tokenizer::token::TokenKind};
///
/// let tokens = expression_tokenizer().tokenize("a<>'it''s'");
/// assert_eq!(tokens[0].kind(), TokenKind::Word);
/// assert_eq!(tokens[1].value(), "<>");
/// assert_eq!(tokens[2].kind(), TokenKind::Quoted);
/// assert_eq!(tokens[2].value(), "'it''s'");
/// ```
#[must_use]
pub fn expression_tokenizer() -> Tokenizer {
    let states = States { whitespace: Box::new(WhitespaceState::new()),
                          word:       Box::new(KeywordWordState::new()),
                          number:     Box::new(ScientificNumberState),
                          quote:      Box::new(DoubledQuoteState),
                          comment:    Box::new(SlashCommentState::new()),
                          symbol:     Box::new(TrieSymbolState::with_symbols(OPERATORS)), };

    let mut tokenizer = Tokenizer::new(states);
    tokenizer.set_character_state('\0', char::MAX, StateKind::Symbol);
    tokenizer.set_character_state('\0', ' ', StateKind::Whitespace);

    tokenizer.set_character_state('a', 'z', StateKind::Word);
    tokenizer.set_character_state('A', 'Z', StateKind::Word);
    tokenizer.set_character_state('\u{c0}', '\u{ff}', StateKind::Word);
    tokenizer.set_character_state('_', '_', StateKind::Word);

    tokenizer.set_character_state('0', '9', StateKind::Number);
    tokenizer.set_character_state('-', '-', StateKind::Number);
    tokenizer.set_character_state('.', '.', StateKind::Number);

    tokenizer.set_character_state('"', '"', StateKind::Quote);
    tokenizer.set_character_state('\'', '\'', StateKind::Quote);

    tokenizer.set_character_state('/', '/', StateKind::Comment);

    tokenizer
}

/// Whether `word` is one of the [`KEYWORDS`].
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(word))
}

/// Identifiers, reclassified as keywords when they spell a reserved word.
#[derive(Debug, Clone)]
struct KeywordWordState {
    word: WordState,
}

impl KeywordWordState {
    fn new() -> Self {
        let mut word = WordState::empty();
        word.set_word_chars('a', 'z', true);
        word.set_word_chars('A', 'Z', true);
        word.set_word_chars('0', '9', true);
        word.set_word_chars('_', '_', true);
        word.set_word_chars('\u{c0}', '\u{ff}', true);
        word.set_word_chars('\u{100}', '\u{ffff}', true);
        Self { word }
    }
}

impl TokenizerState for KeywordWordState {
    fn next_token(&self, scanner: &mut Scanner, tokenizer: &Tokenizer) -> Token {
        let token = self.word.next_token(scanner, tokenizer);
        if is_keyword(token.value()) {
            return Token::new(TokenKind::Keyword, token.value(), token.line(), token.column());
        }
        token
    }
}

/// Numbers with an optional exponent. A leading `-` is always an operator.
///
/// The exponent (`e` or `E`, an optional sign, then digits) is only taken
/// when it is complete; otherwise its characters are left for the next
/// token, so `1e` reads as `1` followed by the word `e`.
#[derive(Debug, Clone, Copy)]
struct ScientificNumberState;

impl TokenizerState for ScientificNumberState {
    fn next_token(&self, scanner: &mut Scanner, tokenizer: &Tokenizer) -> Token {
        if scanner.peek() == Some('-') {
            return tokenizer.symbol_state().next_token(scanner, tokenizer);
        }

        let token = NumberState::new().next_token(scanner, tokenizer);
        if !matches!(token.kind(), TokenKind::Integer | TokenKind::Float) {
            return token;
        }

        let Some(marker @ ('e' | 'E')) = scanner.peek() else {
            return token;
        };
        scanner.read();
        let mut exponent = String::from(marker);

        if let Some(sign @ ('+' | '-')) = scanner.peek() {
            scanner.read();
            exponent.push(sign);
        }

        if !scanner.peek().is_some_and(|chr| chr.is_ascii_digit()) {
            scanner.unread_many(exponent.chars().count());
            return token;
        }
        while let Some(digit) = scanner.peek()
              && digit.is_ascii_digit()
        {
            scanner.read();
            exponent.push(digit);
        }

        Token::new(TokenKind::Float,
                   format!("{}{exponent}", token.value()),
                   token.line(),
                   token.column())
    }
}

/// Quoted text where a doubled delimiter stands for the delimiter itself.
///
/// `'...'` is a string literal. `"..."` is a quoted identifier and is
/// reported as a word.
#[derive(Debug, Clone, Copy)]
struct DoubledQuoteState;

impl TokenizerState for DoubledQuoteState {
    fn next_token(&self, scanner: &mut Scanner, _tokenizer: &Tokenizer) -> Token {
        let Some(quote) = scanner.read() else {
            return Token::new(TokenKind::Quoted, "", scanner.line(), scanner.column());
        };
        let (line, column) = (scanner.line(), scanner.column());

        let mut value = String::from(quote);
        while let Some(chr) = scanner.read() {
            value.push(chr);
            if chr == quote {
                if scanner.peek() != Some(quote) {
                    break;
                }
                scanner.read();
                value.push(quote);
            }
        }

        let kind = if quote == '"' { TokenKind::Word } else { TokenKind::Quoted };
        Token::new(kind, value, line, column)
    }
}

impl QuoteState for DoubledQuoteState {
    fn encode_string(&self, value: &str, quote: char) -> String {
        let single = quote.to_string();
        format!("{quote}{}{quote}", value.replace(&single, &single.repeat(2)))
    }

    fn decode_string(&self, value: &str, quote: char) -> String {
        let single = quote.to_string();
        strip_quotes(value, quote).map_or_else(|| value.to_string(),
                                               |inner| inner.replace(&single.repeat(2), &single))
    }
}
