use std::fmt;

use crate::tokenizer::token::Position;

/// Evaluation errors.
///
/// Contains every error that can be raised while a compiled instruction
/// stream runs: unresolved names, arity mismatches, coercion failures,
/// recovered function faults and evaluator contract violations.
pub mod eval_error;
/// Syntax errors.
///
/// Defines the errors raised while lexing and parsing an expression. Every
/// syntax error points at the token (or the end of input) where the parser
/// gave up.
pub mod syntax_error;

pub use eval_error::{EvalError, EvalResult};
pub use syntax_error::SyntaxError;

/// Either failure family, for callers that compile and evaluate in one step.
///
/// # Example
/// ```
/// use reckon::{calculate, error::Error};
///
/// assert!(matches!(calculate("2 +"), Err(Error::Syntax(_))));
/// assert!(matches!(calculate("x + 1"), Err(Error::Eval(_))));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The expression could not be compiled.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The compiled expression failed while running.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Formats an optional source position as an error-message suffix.
pub(crate) struct At(Option<Position>);

/// Suffix for errors that always know where they happened.
pub(crate) const fn at(position: &Position) -> At {
    At(Some(*position))
}

/// Suffix for errors that may or may not carry a position.
#[allow(clippy::ref_option)]
pub(crate) const fn at_opt(position: &Option<Position>) -> At {
    At(*position)
}

impl fmt::Display for At {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(Position { line, column }) => write!(f, " at line {line} and column {column}"),
            None => Ok(()),
        }
    }
}
