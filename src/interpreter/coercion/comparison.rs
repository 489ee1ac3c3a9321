use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    error::eval_error::{EvalError, EvalResult},
    interpreter::{coercion::core::CoercionPolicy, value::core::Variant},
};

/// Whether two values are equal once `rhs` is converted to the type of
/// `lhs`.
///
/// Two nulls are equal and a null never equals a non-null value. Objects
/// compare by identity and arrays element by element.
///
/// # Errors
/// Fails when the conversion fails or the type has no equality.
pub fn values_equal<P>(policy: &P, operator: &str, lhs: &Variant, rhs: &Variant) -> EvalResult<bool>
    where P: CoercionPolicy + ?Sized
{
    match (lhs, rhs) {
        (Variant::Null, Variant::Null) => return Ok(true),
        (Variant::Null, _) | (_, Variant::Null) => return Ok(false),
        _ => {},
    }

    let right = policy.convert(rhs, lhs.variant_type())?;

    match (lhs, &right) {
        (Variant::Integer(a), Variant::Integer(b)) => Ok(a == b),
        (Variant::Long(a), Variant::Long(b)) => Ok(a == b),
        (Variant::Float(a), Variant::Float(b)) => Ok(a == b),
        (Variant::Double(a), Variant::Double(b)) => Ok(a == b),
        (Variant::String(a), Variant::String(b)) => Ok(a == b),
        (Variant::Boolean(a), Variant::Boolean(b)) => Ok(a == b),
        (Variant::DateTime(a), Variant::DateTime(b)) => Ok(a == b),
        (Variant::TimeSpan(a), Variant::TimeSpan(b)) => Ok(a == b),
        (Variant::Object(a), Variant::Object(b)) => Ok(a.ptr_eq(b)),
        (Variant::Array(a), Variant::Array(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }
            for (x, y) in a.iter().zip(b) {
                if !values_equal(policy, operator, x, y)? {
                    return Ok(false);
                }
            }
            Ok(true)
        },
        (Variant::Object(_), _) => Ok(false),
        _ => Err(EvalError::unsupported(operator, lhs.variant_type(), Some(rhs.variant_type()))),
    }
}

/// `lhs = rhs`
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{PermissivePolicy, comparison::equal},
///     value::core::Variant,
/// };
///
/// let policy = PermissivePolicy;
/// assert_eq!(equal(&policy, &Variant::Integer(1), &"1".into()).unwrap(), Variant::Boolean(true));
/// assert_eq!(equal(&policy, &Variant::Null, &Variant::Null).unwrap(), Variant::Boolean(true));
/// assert_eq!(equal(&policy, &Variant::Null, &Variant::Integer(0)).unwrap(),
///            Variant::Boolean(false));
/// ```
pub fn equal<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    values_equal(policy, "=", lhs, rhs).map(Variant::Boolean)
}

/// `lhs <> rhs`
pub fn not_equal<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    values_equal(policy, "<>", lhs, rhs).map(|equal| Variant::Boolean(!equal))
}

/// Orders two values once `rhs` is converted to the type of `lhs`, or
/// returns `None` when either is null.
///
/// Floats are ordered totally, with NaN above every other value.
pub fn compare<P>(policy: &P,
                  operator: &str,
                  lhs: &Variant,
                  rhs: &Variant)
                  -> EvalResult<Option<Ordering>>
    where P: CoercionPolicy + ?Sized
{
    if lhs.is_null() || rhs.is_null() {
        return Ok(None);
    }

    let ordering = match (lhs, &policy.convert(rhs, lhs.variant_type())?) {
        (Variant::Integer(a), Variant::Integer(b)) => a.cmp(b),
        (Variant::Long(a), Variant::Long(b)) => a.cmp(b),
        (Variant::Float(a), Variant::Float(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
        (Variant::Double(a), Variant::Double(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
        (Variant::String(a), Variant::String(b)) => a.cmp(b),
        (Variant::Boolean(a), Variant::Boolean(b)) => a.cmp(b),
        (Variant::DateTime(a), Variant::DateTime(b)) => a.cmp(b),
        (Variant::TimeSpan(a), Variant::TimeSpan(b)) => a.cmp(b),
        _ => {
            return Err(EvalError::unsupported(operator, lhs.variant_type(), Some(rhs.variant_type())));
        },
    };

    Ok(Some(ordering))
}

fn ordered<P>(policy: &P,
              operator: &str,
              lhs: &Variant,
              rhs: &Variant,
              test: fn(Ordering) -> bool)
              -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    Ok(compare(policy, operator, lhs, rhs)?.map_or(Variant::Null, |ordering| Variant::Boolean(test(ordering))))
}

/// `lhs > rhs`
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{PermissivePolicy, comparison::greater},
///     value::core::Variant,
/// };
///
/// let policy = PermissivePolicy;
/// assert_eq!(greater(&policy, &Variant::Double(2.5), &Variant::Integer(2)).unwrap(),
///            Variant::Boolean(true));
/// assert_eq!(greater(&policy, &"b".into(), &"a".into()).unwrap(), Variant::Boolean(true));
/// assert_eq!(greater(&policy, &Variant::Null, &Variant::Integer(2)).unwrap(), Variant::Null);
/// ```
pub fn greater<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    ordered(policy, ">", lhs, rhs, Ordering::is_gt)
}

/// `lhs < rhs`
pub fn less<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    ordered(policy, "<", lhs, rhs, Ordering::is_lt)
}

/// `lhs >= rhs`
pub fn greater_equal<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    ordered(policy, ">=", lhs, rhs, Ordering::is_ge)
}

/// `lhs <= rhs`
pub fn less_equal<P>(policy: &P, lhs: &Variant, rhs: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    ordered(policy, "<=", lhs, rhs, Ordering::is_le)
}
