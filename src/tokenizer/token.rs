use std::fmt;

/// A location in the source text.
///
/// `line` starts at 1. `column` is the scanner column of the first character,
/// so ordinary characters start at 1 and 0 marks a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Source line, starting at 1.
    pub line:   usize,
    /// Column within the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character no state claimed.
    Unknown,
    /// End of the token stream.
    Eof,
    /// A number with a fractional part or an exponent.
    Float,
    /// A whole number.
    Integer,
    /// Any number, when the tokenizer unifies numeric kinds.
    Number,
    /// An operator or punctuation.
    Symbol,
    /// A quoted string literal.
    Quoted,
    /// An identifier.
    Word,
    /// A reserved word.
    Keyword,
    /// A run of whitespace.
    Whitespace,
    /// A comment, including its delimiters.
    Comment,
}

/// One lexical unit produced by the tokenizer.
///
/// Tokens are immutable once created. Equality compares kind and value and
/// ignores the position.
///
/// # Example
/// ```
/// use reckon::tokenizer::token::{Token, TokenKind};
///
/// let a = Token::new(TokenKind::Word, "x", 1, 1);
/// let b = Token::new(TokenKind::Word, "x", 3, 7);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Eq)]
pub struct Token {
    kind:     TokenKind,
    value:    String,
    position: Position,
}

impl Token {
    /// Creates a token at the given line and column.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               value: value.into(),
               position: Position::new(line, column) }
    }

    /// The token's lexical category.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's text, or its decoded value for quoted strings.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Line of the token's first character.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.position.line
    }

    /// Column of the token's first character.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.position.column
    }

    /// Line and column of the token's first character.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The position just past the token's last character.
    ///
    /// Assumes the token does not span lines.
    #[must_use]
    pub fn end(&self) -> Position {
        Position::new(self.position.line,
                      self.position.column + self.value.chars().count())
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
