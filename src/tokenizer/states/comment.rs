use crate::tokenizer::{
    core::Tokenizer,
    scanner::Scanner,
    state::TokenizerState,
    token::{Token, TokenKind},
};

/// Reads a comment that runs from its first character to the end of the line.
///
/// The line break itself is left for the next token.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCommentState;

impl LineCommentState {
    /// Creates the state.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TokenizerState for LineCommentState {
    fn next_token(&self, scanner: &mut Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let mut value = String::new();
        read_to_line_end(scanner, &mut value);
        Token::new(TokenKind::Comment, value, line, column)
    }
}

/// Reads `/* ... */` comments.
///
/// A `/` that does not open a comment is handed to the symbol state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockCommentState;

impl BlockCommentState {
    /// Creates the state.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TokenizerState for BlockCommentState {
    fn next_token(&self, scanner: &mut Scanner, tokenizer: &Tokenizer) -> Token {
        read_slash_comment(scanner, tokenizer, false)
    }
}

/// Reads `// ...` line comments and `/* ... */` block comments.
///
/// A `/` that does not open a comment is handed to the symbol state.
///
/// # Example
/// ```
/// use reckon::{interpreter::lexer::expression_tokenizer, tokenizer::token::TokenKind};
///
/// let tokens = expression_tokenizer().tokenize("1 // one\n/ 2 /* two */");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Integer,
///                 TokenKind::Whitespace,
///                 TokenKind::Comment,
///                 TokenKind::Whitespace,
///                 TokenKind::Symbol,
///                 TokenKind::Whitespace,
///                 TokenKind::Integer,
///                 TokenKind::Whitespace,
///                 TokenKind::Comment,
///                 TokenKind::Eof]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SlashCommentState;

impl SlashCommentState {
    /// Creates the state.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TokenizerState for SlashCommentState {
    fn next_token(&self, scanner: &mut Scanner, tokenizer: &Tokenizer) -> Token {
        read_slash_comment(scanner, tokenizer, true)
    }
}

fn read_slash_comment(scanner: &mut Scanner, tokenizer: &Tokenizer, line_comments: bool) -> Token {
    let (line, column) = (scanner.peek_line(), scanner.peek_column());
    let mut value = String::new();

    if scanner.peek() == Some('/') {
        scanner.read();
        match scanner.peek() {
            Some('*') => {
                value.push('/');
                read_to_block_end(scanner, &mut value);
                return Token::new(TokenKind::Comment, value, line, column);
            },
            Some('/') if line_comments => {
                value.push('/');
                read_to_line_end(scanner, &mut value);
                return Token::new(TokenKind::Comment, value, line, column);
            },
            _ => scanner.unread(),
        }
    }

    tokenizer.symbol_state().next_token(scanner, tokenizer)
}

/// Consumes everything up to, but excluding, the next line break.
fn read_to_line_end(scanner: &mut Scanner, value: &mut String) {
    while let Some(chr) = scanner.peek()
          && chr != '\n'
          && chr != '\r'
    {
        scanner.read();
        value.push(chr);
    }
}

/// Consumes everything up to and including the closing `*/`.
///
/// The opening `*` is consumed here too, so `/*/` does not close itself.
fn read_to_block_end(scanner: &mut Scanner, value: &mut String) {
    let mut last = None;
    while let Some(chr) = scanner.read() {
        value.push(chr);
        if last == Some('*') && chr == '/' && value.len() > 3 {
            break;
        }
        last = Some(chr);
    }
}
