//! # reckon
//!
//! reckon is a small expression language written in Rust.
//! It tokenizes, compiles and evaluates expressions such as
//! `price * (1 + rate) > 100 AND name LIKE 'A%'` over dynamically typed
//! values, with pluggable variables, functions and type coercion rules.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        bindings::{functions::FunctionCollection, variables::VariableCollection},
        coercion::PermissivePolicy,
        evaluator::core::evaluate,
        parser::core::parse,
        value::core::Variant,
    },
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines the two error families of the crate, syntax errors
/// raised while compiling and evaluation errors raised while running, plus
/// an umbrella type for callers that do both.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches line and column information for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Compiles and evaluates expressions.
///
/// This module ties together the expression lexer, the parser, the value
/// type, the coercion policies, the evaluator and the standard library.
///
/// # Responsibilities
/// - Coordinates all phases from source text to result.
/// - Provides entry points for parsing and evaluating expressions.
pub mod interpreter;
/// A configurable, character-driven tokenizer engine.
///
/// This module is independent of the expression language. It provides the
/// scanner, the dispatch table, the lexical states and a generic preset that
/// other small grammars can build on.
///
/// # Responsibilities
/// - Reads characters with line and column tracking and pushback.
/// - Dispatches each token to the state registered for its first character.
/// - Filters and rewrites tokens according to the tokenizer options.
pub mod tokenizer;
/// General utilities.
///
/// Explicit numeric casts, the `LIKE` pattern translator and timestamp
/// helpers shared by the coercion engine and the standard library.
pub mod util;

/// Compiles and evaluates `source` in one step.
///
/// Evaluation uses the permissive policy, the standard library and no
/// variables.
///
/// # Errors
/// Returns [`Error::Syntax`] if the expression does not compile and
/// [`Error::Eval`] if it fails while running.
///
/// # Examples
/// ```
/// use reckon::{calculate, interpreter::value::core::Variant};
///
/// assert_eq!(calculate("2 + 2").unwrap(), Variant::Integer(4));
/// assert_eq!(calculate("'abc'[1]").unwrap(), Variant::from("b"));
/// assert_eq!(calculate("5 NOT IN ARRAY(1, 2, 3)").unwrap(), Variant::Boolean(true));
///
/// // 'x' is not defined
/// assert!(calculate("x + 1").is_err());
/// ```
pub fn calculate(source: &str) -> Result<Variant, Error> {
    let program = parse(source)?;
    let result = evaluate(program.instructions(),
                          &VariableCollection::new(),
                          &FunctionCollection::with_defaults(),
                          &PermissivePolicy)?;
    Ok(result)
}
