use time::OffsetDateTime;

use crate::{
    error::eval_error::{EvalError, EvalResult},
    interpreter::{
        coercion::core::CoercionPolicy,
        value::core::{Variant, VariantType},
    },
};

/// Converts `value` with `policy` and extracts the payload with `extract`.
///
/// A policy that returns a value of the wrong type breaks its contract;
/// that is reported as a failed conversion rather than trusted.
fn convert_with<T>(policy: &dyn CoercionPolicy,
                   value: &Variant,
                   target: VariantType,
                   extract: impl FnOnce(&Variant) -> Option<T>)
                   -> EvalResult<T> {
    let converted = policy.convert(value, target)?;
    extract(&converted).ok_or_else(|| EvalError::conversion(value.variant_type(), target))
}

/// The value as an `i32`, converted by `policy`.
pub fn to_integer(policy: &dyn CoercionPolicy, value: &Variant) -> EvalResult<i32> {
    convert_with(policy, value, VariantType::Integer, Variant::as_integer)
}

/// The value as an `i64`, converted by `policy`.
pub fn to_long(policy: &dyn CoercionPolicy, value: &Variant) -> EvalResult<i64> {
    convert_with(policy, value, VariantType::Long, Variant::as_long)
}

/// The value as an `f64`, converted by `policy`.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{PermissivePolicy, StrictPolicy},
///     evaluator::utils::to_double,
///     value::core::Variant,
/// };
///
/// assert_eq!(to_double(&StrictPolicy, &Variant::Integer(2)).unwrap(), 2.0);
/// assert_eq!(to_double(&PermissivePolicy, &"2.5".into()).unwrap(), 2.5);
/// assert!(to_double(&StrictPolicy, &"2.5".into()).is_err());
/// ```
pub fn to_double(policy: &dyn CoercionPolicy, value: &Variant) -> EvalResult<f64> {
    convert_with(policy, value, VariantType::Double, Variant::as_double)
}

/// The value as a `bool`, converted by `policy`.
pub fn to_boolean(policy: &dyn CoercionPolicy, value: &Variant) -> EvalResult<bool> {
    convert_with(policy, value, VariantType::Boolean, Variant::as_boolean)
}

/// The value as a `String`, converted by `policy`.
pub fn to_text(policy: &dyn CoercionPolicy, value: &Variant) -> EvalResult<String> {
    convert_with(policy, value, VariantType::String, |text| text.as_str().map(str::to_string))
}

/// The value as a timestamp, converted by `policy`.
pub fn to_datetime(policy: &dyn CoercionPolicy, value: &Variant) -> EvalResult<OffsetDateTime> {
    convert_with(policy, value, VariantType::DateTime, Variant::as_datetime)
}

/// Whether a comparison result is `true`. Null counts as `false`.
pub const fn is_true(value: &Variant) -> bool {
    matches!(value, Variant::Boolean(true))
}
