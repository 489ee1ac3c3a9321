/// The `CoercionPolicy` trait.
///
/// Declares every operator the evaluator needs from a policy. Only
/// conversion is policy specific; every other operator has a default
/// implementation built on top of it.
pub mod core;
/// Arithmetic and shift operators.
///
/// `+ - * / % ^`, unary negation and the two shifts. The right operand is
/// converted to the left operand's type first, except for `^`, which works
/// in `Double`, and the shifts, whose count is always an `Integer`.
pub mod arithmetic;
/// Logical and bitwise operators.
///
/// `AND`, `OR`, `XOR` and `NOT` act on booleans and bitwise on integers.
pub mod logic;
/// Equality and ordering.
pub mod comparison;
/// Membership, indexing and pattern matching.
pub mod collection;
/// Conversions limited to numeric widening.
pub mod strict;
/// Conversions between any two types with a natural mapping.
pub mod permissive;

pub use self::{core::CoercionPolicy, permissive::PermissivePolicy, strict::StrictPolicy};
