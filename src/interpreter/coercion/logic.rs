use crate::{
    error::eval_error::{EvalError, EvalResult},
    interpreter::{coercion::core::CoercionPolicy, value::core::Variant},
    util::num::i64_to_i32_wrapping,
};

/// Applies a bitwise/boolean operator after aligning the operand types.
fn bitwise<P>(policy: &P,
              operator: &str,
              lhs: &Variant,
              rhs: &Variant,
              int: fn(i64, i64) -> i64,
              boolean: fn(bool, bool) -> bool)
              -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    if lhs.is_null() || rhs.is_null() {
        return Ok(Variant::Null);
    }

    match (lhs, policy.convert(rhs, lhs.variant_type())?) {
        (Variant::Integer(a), Variant::Integer(b)) => {
            Ok(Variant::Integer(i64_to_i32_wrapping(int(i64::from(*a), i64::from(b)))))
        },
        (Variant::Long(a), Variant::Long(b)) => Ok(Variant::Long(int(*a, b))),
        (Variant::Boolean(a), Variant::Boolean(b)) => Ok(Variant::Boolean(boolean(*a, b))),
        _ => Err(EvalError::unsupported(operator, lhs.variant_type(), Some(rhs.variant_type()))),
    }
}

/// Logical conjunction of booleans, bitwise AND of integers.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{PermissivePolicy, logic::and},
///     value::core::Variant,
/// };
///
/// let policy = PermissivePolicy;
/// assert_eq!(and(&policy, &true.into(), &false.into()).unwrap(), Variant::Boolean(false));
/// assert_eq!(and(&policy, &Variant::Integer(6), &Variant::Integer(3)).unwrap(),
///            Variant::Integer(2));
/// assert_eq!(and(&policy, &true.into(), &Variant::Null).unwrap(), Variant::Null);
/// ```
pub fn and<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    bitwise(policy, "AND", lhs, rhs, |a, b| a & b, |a, b| a && b)
}

/// Logical disjunction of booleans, bitwise OR of integers.
pub fn or<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    bitwise(policy, "OR", lhs, rhs, |a, b| a | b, |a, b| a || b)
}

/// Exclusive or of booleans or integers.
pub fn xor<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    bitwise(policy, "XOR", lhs, rhs, |a, b| a ^ b, |a, b| a != b)
}

/// Negates a boolean or complements an integer. `NOT NULL` is `true`.
pub fn not(operand: &Variant) -> EvalResult<Variant> {
    match operand {
        Variant::Null => Ok(Variant::Boolean(true)),
        Variant::Integer(value) => Ok(Variant::Integer(!value)),
        Variant::Long(value) => Ok(Variant::Long(!value)),
        Variant::Boolean(value) => Ok(Variant::Boolean(!value)),
        _ => Err(EvalError::unsupported("NOT", operand.variant_type(), None)),
    }
}
