/// Parser entry points and the compiled program.
///
/// Defines [`Program`](core::Program), the [`ExpressionParser`](core::ExpressionParser)
/// and the shared [`parse`](core::parse) shortcut.
pub mod core;

/// Token classification.
///
/// Maps raw tokens to the lexemes the grammar works with: operators,
/// keywords, typed constants and identifiers.
pub mod lexical;

/// Binary operator precedence levels.
///
/// Implements the logical, comparison, additive, multiplicative and power
/// levels of the grammar.
pub mod binary;

/// Signs, primaries and element access.
pub mod unary;

/// Parser working state.
pub mod utils;
