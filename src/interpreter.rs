/// The expression tokenizer.
///
/// Configures the generic tokenizer engine for the expression language:
/// keywords, scientific number literals, doubled-quote strings, quoted
/// identifiers, C-style comments and the two-character operators.
pub mod lexer;
/// The compiled instruction set.
///
/// Declares the postfix instructions the parser emits and the evaluator
/// executes. Each instruction keeps the source position it came from.
pub mod instruction;
/// The runtime value type.
///
/// Declares `Variant`, its eleven type tags and the opaque `Object` handle.
pub mod value;
/// Type conversion and operator semantics.
///
/// Defines the `CoercionPolicy` trait with its strict and permissive
/// implementations. Every operator the evaluator runs is answered here.
///
/// # Responsibilities
/// - Converts values between type tags, or refuses to.
/// - Implements arithmetic, logic, comparison, membership, indexing and
///   pattern matching on top of that conversion.
pub mod coercion;
/// Variable and function bindings.
///
/// Provides the lookup traits the evaluator resolves names through and the
/// collections that implement them.
pub mod bindings;
/// The parser compiles tokens into postfix instructions.
///
/// A recursive-descent parser over seven precedence levels. Instead of
/// building a tree it emits each operator after its operands, and it
/// collects the names of the variables the expression references.
///
/// # Responsibilities
/// - Classifies raw tokens into operators, constants and identifiers.
/// - Validates the grammar, reporting errors with line and column.
/// - Emits the instruction stream and the variable list.
pub mod parser;
/// The evaluator runs compiled instructions on a value stack.
///
/// # Responsibilities
/// - Resolves variables and functions through the caller's bindings.
/// - Applies operators through the coercion policy.
/// - Hosts the standard function library.
pub mod evaluator;
/// A compile-once, evaluate-many front end.
///
/// Ties the parser and the evaluator together with default bindings and
/// configurable options.
pub mod calculator;
