/// Numeric builtins.
///
/// Constants, `Abs`, trigonometry, logarithms, rounding and `Rnd`. Every
/// function except `Abs` and `Trunc` converts its argument to `Double` and
/// returns a `Double`.
pub mod builtin;
/// `If` and `Choose`.
///
/// Select one of their arguments by a condition or a 1-based index.
pub mod choose;
/// The builtin table.
///
/// Declares every standard library function with its arity and exposes them
/// as [`Function`](crate::interpreter::bindings::functions::Function)s.
pub mod core;
/// `Min`, `Max` and `Sum`.
///
/// Fold their arguments with the active policy's comparison and addition,
/// so they work on any type those operators accept.
pub mod min_max;
/// Date and time builtins.
///
/// `Ticks`, `Now`, `Date`, `TimeSpan` and `DayOfWeek`. Timestamps are UTC.
pub mod temporal;
/// `Empty`, `Null`, `Contains` and `Array`.
pub mod values;
