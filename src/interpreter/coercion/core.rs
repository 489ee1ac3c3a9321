use std::fmt;

use crate::{
    error::eval_error::EvalResult,
    interpreter::{
        coercion::{arithmetic, collection, comparison, logic},
        value::core::{Variant, VariantType},
    },
};

/// Defines how values of different types combine.
///
/// Implementors decide which implicit conversions are legal by providing
/// [`convert`](CoercionPolicy::convert). Every operator is defined once,
/// in terms of `convert`, and shared by all policies; a policy may still
/// override an individual operator.
///
/// Binary operators follow the same shape: a null operand yields
/// [`Variant::Null`] (equality excepted), the right operand is converted to
/// the left operand's type, then the operator is applied to the two
/// payloads.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{CoercionPolicy, PermissivePolicy, StrictPolicy},
///     value::core::{Variant, VariantType},
/// };
///
/// let text = Variant::from("42");
/// assert!(StrictPolicy.convert(&text, VariantType::Integer).is_err());
/// assert_eq!(PermissivePolicy.convert(&text, VariantType::Integer).unwrap(),
///            Variant::Integer(42));
///
/// assert_eq!(PermissivePolicy.add(&Variant::Integer(40), &text).unwrap(),
///            Variant::Integer(82));
/// ```
pub trait CoercionPolicy: fmt::Debug + Send + Sync {
    /// Converts `value` to `target`.
    ///
    /// Converting to [`VariantType::Null`] always yields null, and
    /// converting to the value's own type or to [`VariantType::Object`]
    /// returns it unchanged.
    fn convert(&self, value: &Variant, target: VariantType) -> EvalResult<Variant>;

    /// `lhs + rhs`. Concatenates strings.
    fn add(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        arithmetic::add(self, lhs, rhs)
    }

    /// `lhs - rhs`. Subtracting two timestamps gives a time span.
    fn sub(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        arithmetic::sub(self, lhs, rhs)
    }

    /// `lhs * rhs`
    fn mul(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        arithmetic::mul(self, lhs, rhs)
    }

    /// `lhs / rhs`. Integer division truncates.
    fn div(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        arithmetic::div(self, lhs, rhs)
    }

    /// `lhs % rhs`
    fn rem(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        arithmetic::rem(self, lhs, rhs)
    }

    /// `lhs ^ rhs`, computed as a `Double`.
    fn pow(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        arithmetic::pow(self, lhs, rhs)
    }

    /// `-operand`
    fn negate(&self, operand: &Variant) -> EvalResult<Variant> {
        arithmetic::negate(operand)
    }

    /// `lhs << count`
    fn shl(&self, lhs: &Variant, count: &Variant) -> EvalResult<Variant> {
        arithmetic::shl(self, lhs, count)
    }

    /// `lhs >> count`
    fn shr(&self, lhs: &Variant, count: &Variant) -> EvalResult<Variant> {
        arithmetic::shr(self, lhs, count)
    }

    /// `lhs AND rhs`
    fn and(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        logic::and(self, lhs, rhs)
    }

    /// `lhs OR rhs`
    fn or(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        logic::or(self, lhs, rhs)
    }

    /// `lhs XOR rhs`
    fn xor(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        logic::xor(self, lhs, rhs)
    }

    /// `NOT operand`. `NOT NULL` is `true`.
    fn not(&self, operand: &Variant) -> EvalResult<Variant> {
        logic::not(operand)
    }

    /// `lhs = rhs`. Never null.
    fn equal(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        comparison::equal(self, lhs, rhs)
    }

    /// `lhs <> rhs`. Never null.
    fn not_equal(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        comparison::not_equal(self, lhs, rhs)
    }

    /// `lhs > rhs`
    fn greater(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        comparison::greater(self, lhs, rhs)
    }

    /// `lhs < rhs`
    fn less(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        comparison::less(self, lhs, rhs)
    }

    /// `lhs >= rhs`
    fn greater_equal(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        comparison::greater_equal(self, lhs, rhs)
    }

    /// `lhs <= rhs`
    fn less_equal(&self, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant> {
        comparison::less_equal(self, lhs, rhs)
    }

    /// Whether `needle` is an element of `collection`, or equal to it when
    /// `collection` is not an array.
    fn is_in(&self, collection: &Variant, needle: &Variant) -> EvalResult<Variant> {
        collection::is_in(self, collection, needle)
    }

    /// `collection[index]` for arrays and strings.
    fn element(&self, collection: &Variant, index: &Variant) -> EvalResult<Variant> {
        collection::element(self, collection, index)
    }

    /// `value LIKE pattern`
    fn like(&self, value: &Variant, pattern: &Variant) -> EvalResult<Variant> {
        collection::like(self, value, pattern)
    }
}
