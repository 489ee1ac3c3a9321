use crate::{
    error::SyntaxError,
    interpreter::{parser::core::ParseResult, value::core::Variant},
    tokenizer::token::{Position, Token, TokenKind},
};

/// Grammatical category of a [`Lexeme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    /// A literal value.
    Constant,
    /// An identifier. Becomes a function call when followed by `(`.
    Identifier,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `=`
    Equal,
    /// `<>` and `!=`
    NotEqual,
    /// `>`
    More,
    /// `<`
    Less,
    /// `>=`
    EqualMore,
    /// `<=`
    EqualLess,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `XOR`
    Xor,
    /// `NOT`
    Not,
    /// `IS`
    Is,
    /// `IN`
    In,
    /// `NULL`
    Null,
    /// `LIKE`
    Like,
}

/// A token classified for the parser.
///
/// Constants carry their typed value and identifiers their name; every other
/// kind carries [`Variant::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    kind:     LexemeKind,
    value:    Variant,
    text:     String,
    position: Position,
    end:      Position,
}

impl Lexeme {
    /// The lexeme's category.
    #[must_use]
    pub const fn kind(&self) -> LexemeKind {
        self.kind
    }

    /// The constant value or identifier name.
    #[must_use]
    pub const fn value(&self) -> &Variant {
        &self.value
    }

    /// The token text the lexeme was made from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the lexeme starts.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The position just past the lexeme.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }
}

/// Classifies raw tokens for the parser.
///
/// Whitespace, comments and the end-of-stream marker are dropped, so the
/// result is the same whether or not the tokenizer filtered them already.
///
/// # Errors
/// Returns [`SyntaxError::UnknownSymbol`] for the first token that has no
/// meaning in the expression grammar.
///
/// # Example
/// ```
/// use reckon::{interpreter::{lexer::expression_tokenizer,
///                            parser::lexical::{LexemeKind, classify_tokens}},
///              tokenizer::token::{Token, TokenKind}};
///
/// let tokens = expression_tokenizer().tokenize("a <> TRUE");
/// let kinds: Vec<_> = classify_tokens(&tokens).unwrap()
///                                             .iter()
///                                             .map(|lexeme| lexeme.kind())
///                                             .collect();
/// assert_eq!(kinds, [LexemeKind::Identifier, LexemeKind::NotEqual, LexemeKind::Constant]);
///
/// let unknown = [Token::new(TokenKind::Symbol, "$", 1, 3)];
/// assert!(classify_tokens(&unknown).is_err());
/// ```
pub fn classify_tokens(tokens: &[Token]) -> ParseResult<Vec<Lexeme>> {
    tokens.iter()
          .filter(|token| {
              !matches!(token.kind(),
                        TokenKind::Whitespace | TokenKind::Comment | TokenKind::Eof)
          })
          .map(classify_token)
          .collect()
}

fn classify_token(token: &Token) -> ParseResult<Lexeme> {
    let (kind, value) = match token.kind() {
        TokenKind::Word => (LexemeKind::Identifier, Variant::from(token.value())),
        TokenKind::Quoted => (LexemeKind::Constant, Variant::from(token.value())),
        TokenKind::Keyword => match keyword(token.value()) {
            Some(keyword) => keyword,
            None => return Err(unknown(token)),
        },
        TokenKind::Symbol => match symbol(token.value()) {
            Some(kind) => (kind, Variant::Null),
            None => return Err(unknown(token)),
        },
        TokenKind::Integer | TokenKind::Float | TokenKind::Number => {
            match number(token.value()) {
                Some(value) => (LexemeKind::Constant, value),
                None => return Err(unknown(token)),
            }
        },
        TokenKind::Unknown | TokenKind::Whitespace | TokenKind::Comment | TokenKind::Eof => {
            return Err(unknown(token));
        },
    };

    Ok(Lexeme { kind,
                value,
                text: token.value().to_string(),
                position: token.position(),
                end: token.end() })
}

fn keyword(word: &str) -> Option<(LexemeKind, Variant)> {
    let kind = match word.to_ascii_uppercase().as_str() {
        "AND" => LexemeKind::And,
        "OR" => LexemeKind::Or,
        "XOR" => LexemeKind::Xor,
        "NOT" => LexemeKind::Not,
        "IS" => LexemeKind::Is,
        "IN" => LexemeKind::In,
        "NULL" => LexemeKind::Null,
        "LIKE" => LexemeKind::Like,
        "TRUE" => return Some((LexemeKind::Constant, Variant::Boolean(true))),
        "FALSE" => return Some((LexemeKind::Constant, Variant::Boolean(false))),
        _ => return None,
    };
    Some((kind, Variant::Null))
}

fn symbol(text: &str) -> Option<LexemeKind> {
    let kind = match text {
        "(" => LexemeKind::LeftParen,
        ")" => LexemeKind::RightParen,
        "[" => LexemeKind::LeftBracket,
        "]" => LexemeKind::RightBracket,
        "," => LexemeKind::Comma,
        "+" => LexemeKind::Plus,
        "-" => LexemeKind::Minus,
        "*" => LexemeKind::Star,
        "/" => LexemeKind::Slash,
        "%" => LexemeKind::Percent,
        "^" => LexemeKind::Caret,
        "=" => LexemeKind::Equal,
        "<>" | "!=" => LexemeKind::NotEqual,
        ">" => LexemeKind::More,
        "<" => LexemeKind::Less,
        ">=" => LexemeKind::EqualMore,
        "<=" => LexemeKind::EqualLess,
        "<<" => LexemeKind::ShiftLeft,
        ">>" => LexemeKind::ShiftRight,
        _ => return None,
    };
    Some(kind)
}

/// Integers take the narrowest of Integer and Long that holds them and fall
/// back to Double. Anything with a fraction or exponent is a Double.
fn number(text: &str) -> Option<Variant> {
    if let Ok(value) = text.parse::<i32>() {
        return Some(Variant::Integer(value));
    }
    if let Ok(value) = text.parse::<i64>() {
        return Some(Variant::Long(value));
    }
    text.parse::<f64>().ok().map(Variant::Double)
}

fn unknown(token: &Token) -> SyntaxError {
    SyntaxError::UnknownSymbol { symbol:   token.value().to_string(),
                                 position: token.position(), }
}

