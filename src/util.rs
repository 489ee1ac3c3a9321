/// Numeric conversion helpers.
///
/// The expression language works with fixed-width integers and floats that
/// convert into each other by truncation and wrapping. This module keeps
/// every lossy `as` cast in one place so the rest of the crate stays free of
/// cast lints.
pub mod num;
/// SQL `LIKE` pattern support.
///
/// Translates `%`/`_` wildcard patterns into anchored, case-insensitive
/// regular expressions.
pub mod pattern;
/// Timestamp and duration helpers.
///
/// Converts between numeric values and `time` types using the conventions of
/// the permissive coercion policy: timestamps are whole seconds since the
/// Unix epoch and durations are whole milliseconds.
pub mod temporal;
