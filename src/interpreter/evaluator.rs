/// Core evaluation logic and context management.
///
/// Contains the evaluation [`Context`](core::Context), the instruction loop
/// and the [`evaluate`](core::evaluate) entry point.
pub mod core;

/// The value stack.
pub mod stack;

/// Binary operator evaluation.
///
/// Maps binary instructions onto the coercion policy, including the negated
/// membership and pattern tests.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles negation, logical NOT and the null tests.
pub mod unary;

/// Function call instructions.
///
/// Unpacks the argument count and arguments, resolves the function and
/// recovers from panics inside it.
pub mod call;

/// Conversion helpers for function arguments.
///
/// Wraps the coercion policy's `convert` with typed results.
pub mod utils;

/// The standard function library.
///
/// Provides the builtin table and the implementations of every builtin.
pub mod function;
