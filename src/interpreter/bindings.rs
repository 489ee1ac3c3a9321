/// Named values an expression can read.
///
/// Defines the [`Variable`](variables::Variable) record, the lookup trait
/// the evaluator resolves names through and an ordered collection with
/// case-insensitive lookup.
pub mod variables;
/// Named functions an expression can call.
///
/// Defines the [`Function`](functions::Function) trait, a closure-backed
/// implementation, the lookup trait the evaluator resolves calls through and
/// an ordered collection with case-insensitive lookup.
pub mod functions;

/// Compares two names the way bindings are looked up, ignoring case.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.chars()
     .flat_map(char::to_lowercase)
     .eq(b.chars().flat_map(char::to_lowercase))
}
