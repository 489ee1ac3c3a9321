use crate::{error::at, tokenizer::token::Position};

/// Represents all errors that can occur while compiling an expression.
///
/// Every variant records the position the parser stopped at. For errors
/// caused by running out of input the position points just past the last
/// consumed token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The expression ended in the middle of a construct.
    #[error("Unexpected end of expression{}", at(.position))]
    UnexpectedEnd {
        /// Where the input ran out.
        position: Position,
    },
    /// A token that has no meaning in the expression grammar.
    #[error("Unknown symbol {symbol}{}", at(.position))]
    UnknownSymbol {
        /// The offending token text.
        symbol:   String,
        /// Where the token starts.
        position: Position,
    },
    /// Tokens were left over after a complete expression was parsed.
    #[error("Syntax error near {token}{}", at(.position))]
    ErrorNear {
        /// The first unconsumed token.
        token:    String,
        /// Where the token starts.
        position: Position,
    },
    /// A token appeared where an operand was expected.
    #[error("Syntax error at {token}{}", at(.position))]
    ErrorAt {
        /// The offending token.
        token:    String,
        /// Where the token starts.
        position: Position,
    },
    /// An opening `(` was never closed.
    #[error("Missing close parenthesis{}", at(.position))]
    MissingCloseParenthesis {
        /// Where the `)` was expected.
        position: Position,
    },
    /// An opening `[` was never closed.
    #[error("Missing close bracket{}", at(.position))]
    MissingCloseBracket {
        /// Where the `]` was expected.
        position: Position,
    },
}

impl SyntaxError {
    /// Returns the position the error refers to.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::SyntaxError, interpreter::parser::core::parse};
    ///
    /// let err = parse("2 + )").unwrap_err();
    /// assert!(matches!(err, SyntaxError::ErrorAt { .. }));
    /// assert_eq!(err.position().column, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedEnd { position }
            | Self::UnknownSymbol { position, .. }
            | Self::ErrorNear { position, .. }
            | Self::ErrorAt { position, .. }
            | Self::MissingCloseParenthesis { position }
            | Self::MissingCloseBracket { position } => *position,
        }
    }
}
