use crate::{
    error::eval_error::{EvalError, EvalResult},
    interpreter::{
        coercion::core::CoercionPolicy,
        value::core::{Variant, VariantType},
    },
    util::num::shift_count,
};

/// Converts `rhs` to the type of `lhs`, or returns `None` when either
/// operand is null.
fn align<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Option<Variant>>
    where P: CoercionPolicy + ?Sized
{
    if lhs.is_null() || rhs.is_null() {
        return Ok(None);
    }
    policy.convert(rhs, lhs.variant_type()).map(Some)
}

fn unsupported(operator: &str, lhs: &Variant, rhs: &Variant) -> EvalError {
    EvalError::unsupported(operator, lhs.variant_type(), Some(rhs.variant_type()))
}

fn out_of_range() -> EvalError {
    EvalError::calculation("timestamp is out of range")
}

/// Adds two values.
///
/// Integer addition wraps on overflow. Strings concatenate, time spans add,
/// and a time span added to a timestamp moves it forward.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{PermissivePolicy, arithmetic::add},
///     value::core::Variant,
/// };
///
/// let policy = PermissivePolicy;
/// assert_eq!(add(&policy, &Variant::Integer(2), &Variant::Integer(2)).unwrap(),
///            Variant::Integer(4));
/// assert_eq!(add(&policy, &"x".into(), &Variant::Integer(1)).unwrap(), Variant::from("x1"));
/// assert_eq!(add(&policy, &Variant::Null, &Variant::Integer(1)).unwrap(), Variant::Null);
/// assert_eq!(add(&policy, &Variant::Integer(i32::MAX), &Variant::Integer(1)).unwrap(),
///            Variant::Integer(i32::MIN));
/// ```
pub fn add<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    if let (Variant::DateTime(date), Variant::TimeSpan(span)) = (lhs, rhs) {
        return date.checked_add(*span)
                   .map(Variant::DateTime)
                   .ok_or_else(out_of_range);
    }
    let Some(right) = align(policy, lhs, rhs)? else {
        return Ok(Variant::Null);
    };

    match (lhs, &right) {
        (Variant::Integer(a), Variant::Integer(b)) => Ok(Variant::Integer(a.wrapping_add(*b))),
        (Variant::Long(a), Variant::Long(b)) => Ok(Variant::Long(a.wrapping_add(*b))),
        (Variant::Float(a), Variant::Float(b)) => Ok(Variant::Float(a + b)),
        (Variant::Double(a), Variant::Double(b)) => Ok(Variant::Double(a + b)),
        (Variant::TimeSpan(a), Variant::TimeSpan(b)) => Ok(Variant::TimeSpan(a.saturating_add(*b))),
        (Variant::String(a), Variant::String(b)) => Ok(Variant::String(format!("{a}{b}"))),
        _ => Err(unsupported("+", lhs, rhs)),
    }
}

/// Subtracts `rhs` from `lhs`.
///
/// The difference of two timestamps is a time span; a time span subtracted
/// from a timestamp moves it back.
pub fn sub<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    if let (Variant::DateTime(date), Variant::TimeSpan(span)) = (lhs, rhs) {
        return date.checked_sub(*span)
                   .map(Variant::DateTime)
                   .ok_or_else(out_of_range);
    }
    let Some(right) = align(policy, lhs, rhs)? else {
        return Ok(Variant::Null);
    };

    match (lhs, &right) {
        (Variant::Integer(a), Variant::Integer(b)) => Ok(Variant::Integer(a.wrapping_sub(*b))),
        (Variant::Long(a), Variant::Long(b)) => Ok(Variant::Long(a.wrapping_sub(*b))),
        (Variant::Float(a), Variant::Float(b)) => Ok(Variant::Float(a - b)),
        (Variant::Double(a), Variant::Double(b)) => Ok(Variant::Double(a - b)),
        (Variant::TimeSpan(a), Variant::TimeSpan(b)) => Ok(Variant::TimeSpan(a.saturating_sub(*b))),
        (Variant::DateTime(a), Variant::DateTime(b)) => Ok(Variant::TimeSpan(*a - *b)),
        _ => Err(unsupported("-", lhs, rhs)),
    }
}

/// Multiplies two numbers.
pub fn mul<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    let Some(right) = align(policy, lhs, rhs)? else {
        return Ok(Variant::Null);
    };

    match (lhs, &right) {
        (Variant::Integer(a), Variant::Integer(b)) => Ok(Variant::Integer(a.wrapping_mul(*b))),
        (Variant::Long(a), Variant::Long(b)) => Ok(Variant::Long(a.wrapping_mul(*b))),
        (Variant::Float(a), Variant::Float(b)) => Ok(Variant::Float(a * b)),
        (Variant::Double(a), Variant::Double(b)) => Ok(Variant::Double(a * b)),
        _ => Err(unsupported("*", lhs, rhs)),
    }
}

/// Divides `lhs` by `rhs`.
///
/// Integer division truncates toward zero and fails on a zero divisor.
/// Float division follows IEEE 754.
///
/// # Example
/// ```
/// use reckon::{
///     error::EvalError,
///     interpreter::{
///         coercion::{PermissivePolicy, arithmetic::div},
///         value::core::Variant,
///     },
/// };
///
/// let policy = PermissivePolicy;
/// assert_eq!(div(&policy, &Variant::Integer(7), &Variant::Integer(2)).unwrap(),
///            Variant::Integer(3));
/// assert!(matches!(div(&policy, &Variant::Integer(1), &Variant::Integer(0)),
///                  Err(EvalError::DivisionByZero { .. })));
/// ```
pub fn div<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    let Some(right) = align(policy, lhs, rhs)? else {
        return Ok(Variant::Null);
    };

    match (lhs, &right) {
        (Variant::Integer(_), Variant::Integer(0)) | (Variant::Long(_), Variant::Long(0)) => {
            Err(EvalError::DivisionByZero { position: None })
        },
        (Variant::Integer(a), Variant::Integer(b)) => Ok(Variant::Integer(a.wrapping_div(*b))),
        (Variant::Long(a), Variant::Long(b)) => Ok(Variant::Long(a.wrapping_div(*b))),
        (Variant::Float(a), Variant::Float(b)) => Ok(Variant::Float(a / b)),
        (Variant::Double(a), Variant::Double(b)) => Ok(Variant::Double(a / b)),
        _ => Err(unsupported("/", lhs, rhs)),
    }
}

/// The remainder of `lhs / rhs`, with the sign of `lhs`.
pub fn rem<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    let Some(right) = align(policy, lhs, rhs)? else {
        return Ok(Variant::Null);
    };

    match (lhs, &right) {
        (Variant::Integer(_), Variant::Integer(0)) | (Variant::Long(_), Variant::Long(0)) => {
            Err(EvalError::DivisionByZero { position: None })
        },
        (Variant::Integer(a), Variant::Integer(b)) => Ok(Variant::Integer(a.wrapping_rem(*b))),
        (Variant::Long(a), Variant::Long(b)) => Ok(Variant::Long(a.wrapping_rem(*b))),
        (Variant::Float(a), Variant::Float(b)) => Ok(Variant::Float(a % b)),
        (Variant::Double(a), Variant::Double(b)) => Ok(Variant::Double(a % b)),
        _ => Err(unsupported("%", lhs, rhs)),
    }
}

/// Raises `lhs` to the power `rhs`.
///
/// Both operands are converted to `Double` and the result is a `Double`.
/// The base must be numeric.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{StrictPolicy, arithmetic::pow},
///     value::core::Variant,
/// };
///
/// assert_eq!(pow(&StrictPolicy, &Variant::Integer(2), &Variant::Integer(10)).unwrap(),
///            Variant::Double(1024.0));
/// ```
pub fn pow<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    if lhs.is_null() || rhs.is_null() {
        return Ok(Variant::Null);
    }
    if !lhs.variant_type().is_numeric() {
        return Err(unsupported("^", lhs, rhs));
    }

    let base = policy.convert(lhs, VariantType::Double)?;
    let exponent = policy.convert(rhs, VariantType::Double)?;

    match (base, exponent) {
        (Variant::Double(base), Variant::Double(exponent)) => Ok(Variant::Double(base.powf(exponent))),
        _ => Err(unsupported("^", lhs, rhs)),
    }
}

/// Negates a number. Integer negation wraps.
pub fn negate(operand: &Variant) -> EvalResult<Variant> {
    match operand {
        Variant::Null => Ok(Variant::Null),
        Variant::Integer(value) => Ok(Variant::Integer(value.wrapping_neg())),
        Variant::Long(value) => Ok(Variant::Long(value.wrapping_neg())),
        Variant::Float(value) => Ok(Variant::Float(-value)),
        Variant::Double(value) => Ok(Variant::Double(-value)),
        Variant::TimeSpan(value) => Ok(Variant::TimeSpan(value.saturating_mul(-1))),
        _ => Err(EvalError::unsupported("-", operand.variant_type(), None)),
    }
}

/// Converts a shift count to an `Integer`, or `None` for a null operand.
fn count<P>(policy: &P, lhs: &Variant, count: &Variant) -> EvalResult<Option<u32>>
    where P: CoercionPolicy + ?Sized
{
    if lhs.is_null() || count.is_null() {
        return Ok(None);
    }

    match policy.convert(count, VariantType::Integer)? {
        Variant::Integer(count) => Ok(Some(shift_count(count))),
        other => Err(EvalError::conversion(other.variant_type(), VariantType::Integer)),
    }
}

/// Shifts an integer left. The count is taken modulo the operand width.
pub fn shl<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    let Some(bits) = count(policy, lhs, rhs)? else {
        return Ok(Variant::Null);
    };

    match lhs {
        Variant::Integer(value) => Ok(Variant::Integer(value.wrapping_shl(bits))),
        Variant::Long(value) => Ok(Variant::Long(value.wrapping_shl(bits))),
        _ => Err(unsupported("<<", lhs, rhs)),
    }
}

/// Shifts an integer right, extending the sign. The count is taken modulo
/// the operand width.
pub fn shr<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    let Some(bits) = count(policy, lhs, rhs)? else {
        return Ok(Variant::Null);
    };

    match lhs {
        Variant::Integer(value) => Ok(Variant::Integer(value.wrapping_shr(bits))),
        Variant::Long(value) => Ok(Variant::Long(value.wrapping_shr(bits))),
        _ => Err(unsupported(">>", lhs, rhs)),
    }
}
