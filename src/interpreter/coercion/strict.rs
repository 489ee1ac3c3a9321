use crate::{
    error::eval_error::{EvalError, EvalResult},
    interpreter::{
        coercion::core::CoercionPolicy,
        value::core::{Variant, VariantType},
    },
    util::num::{i32_to_f32, i64_to_f32, i64_to_f64},
};

/// A policy that only widens numbers.
///
/// `Integer` widens to `Long`, `Float` and `Double`; `Long` to `Float` and
/// `Double`; `Float` to `Double`. Any other conversion between distinct
/// types fails, so `'1' + 1` is an error under this policy.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{CoercionPolicy, StrictPolicy},
///     value::core::{Variant, VariantType},
/// };
///
/// assert_eq!(StrictPolicy.convert(&Variant::Integer(3), VariantType::Double).unwrap(),
///            Variant::Double(3.0));
/// assert!(StrictPolicy.convert(&Variant::Double(3.0), VariantType::Integer).is_err());
/// assert!(StrictPolicy.add(&"a".into(), &Variant::Integer(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictPolicy;

impl CoercionPolicy for StrictPolicy {
    fn convert(&self, value: &Variant, target: VariantType) -> EvalResult<Variant> {
        let from = value.variant_type();
        if target == VariantType::Null {
            return Ok(Variant::Null);
        }
        if target == from || target == VariantType::Object {
            return Ok(value.clone());
        }

        match (value, target) {
            (Variant::Integer(v), VariantType::Long) => Ok(Variant::Long(i64::from(*v))),
            (Variant::Integer(v), VariantType::Float) => Ok(Variant::Float(i32_to_f32(*v))),
            (Variant::Integer(v), VariantType::Double) => Ok(Variant::Double(f64::from(*v))),
            (Variant::Long(v), VariantType::Float) => Ok(Variant::Float(i64_to_f32(*v))),
            (Variant::Long(v), VariantType::Double) => Ok(Variant::Double(i64_to_f64(*v))),
            (Variant::Float(v), VariantType::Double) => Ok(Variant::Double(f64::from(*v))),
            _ => Err(EvalError::conversion(from, target)),
        }
    }
}
