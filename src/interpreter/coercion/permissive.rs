use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    error::eval_error::{EvalError, EvalResult},
    interpreter::{
        coercion::core::CoercionPolicy,
        value::core::{Variant, VariantType},
    },
    util::{
        num::{f64_to_f32, f64_to_i32, f64_to_i64, i32_to_f32, i64_to_f32, i64_to_f64,
              i64_to_i32_wrapping},
        temporal::{from_millis, from_unix_seconds, unix_seconds, whole_millis},
    },
};

/// A policy that converts between any two types with a natural mapping.
///
/// On top of numeric widening it allows:
/// - narrowing, where floats truncate toward zero and `Long` wraps into
///   `Integer`;
/// - any value to `String` through its display form, and `String` to any
///   scalar type by parsing;
/// - numbers to and from `Boolean` (zero is `false`);
/// - numbers to and from `DateTime` as seconds since the Unix epoch;
/// - numbers to and from `TimeSpan` as milliseconds;
/// - null to the zero value of every type.
///
/// This is the calculator's default policy.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{CoercionPolicy, PermissivePolicy},
///     value::core::{Variant, VariantType},
/// };
///
/// let policy = PermissivePolicy;
/// assert_eq!(policy.convert(&Variant::Double(-2.7), VariantType::Integer).unwrap(),
///            Variant::Integer(-2));
/// assert_eq!(policy.convert(&"yes".into(), VariantType::Boolean).unwrap(),
///            Variant::Boolean(true));
/// assert_eq!(policy.convert(&Variant::Null, VariantType::Long).unwrap(), Variant::Long(0));
/// assert!(policy.convert(&"abc".into(), VariantType::Integer).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissivePolicy;

impl CoercionPolicy for PermissivePolicy {
    fn convert(&self, value: &Variant, target: VariantType) -> EvalResult<Variant> {
        let from = value.variant_type();
        if target == VariantType::Null {
            return Ok(Variant::Null);
        }
        if target == from || target == VariantType::Object {
            return Ok(value.clone());
        }
        if target == VariantType::String {
            return Ok(Variant::String(value.to_string()));
        }

        let converted = match value {
            Variant::Null => Some(zero(target)),
            Variant::Integer(v) => from_long(i64::from(*v), target),
            Variant::Long(v) => from_long(*v, target),
            Variant::Float(v) => from_double(f64::from(*v), target),
            Variant::Double(v) => from_double(*v, target),
            Variant::Boolean(v) => from_boolean(*v, target),
            Variant::DateTime(v) => from_long(unix_seconds(*v), target).filter(|_| target.is_numeric()),
            Variant::TimeSpan(v) => from_long(whole_millis(*v), target).filter(|_| target.is_numeric()),
            Variant::String(text) => from_string(text, target),
            Variant::Object(_) | Variant::Array(_) => None,
        };

        converted.ok_or_else(|| EvalError::conversion(from, target))
    }
}

/// The value a null converts to.
fn zero(target: VariantType) -> Variant {
    match target {
        VariantType::Integer => Variant::Integer(0),
        VariantType::Long => Variant::Long(0),
        VariantType::Float => Variant::Float(0.0),
        VariantType::Double => Variant::Double(0.0),
        VariantType::String => Variant::String(String::new()),
        VariantType::Boolean => Variant::Boolean(false),
        VariantType::DateTime => Variant::DateTime(OffsetDateTime::UNIX_EPOCH),
        VariantType::TimeSpan => Variant::TimeSpan(time::Duration::ZERO),
        VariantType::Array => Variant::Array(Vec::new()),
        VariantType::Null | VariantType::Object => Variant::Null,
    }
}

fn from_long(value: i64, target: VariantType) -> Option<Variant> {
    match target {
        VariantType::Integer => Some(Variant::Integer(i64_to_i32_wrapping(value))),
        VariantType::Long => Some(Variant::Long(value)),
        VariantType::Float => Some(Variant::Float(i64_to_f32(value))),
        VariantType::Double => Some(Variant::Double(i64_to_f64(value))),
        VariantType::Boolean => Some(Variant::Boolean(value != 0)),
        VariantType::DateTime => from_unix_seconds(value).map(Variant::DateTime),
        VariantType::TimeSpan => Some(Variant::TimeSpan(from_millis(value))),
        _ => None,
    }
}

fn from_double(value: f64, target: VariantType) -> Option<Variant> {
    match target {
        VariantType::Integer => Some(Variant::Integer(f64_to_i32(value))),
        VariantType::Float => Some(Variant::Float(f64_to_f32(value))),
        VariantType::Double => Some(Variant::Double(value)),
        VariantType::Boolean => Some(Variant::Boolean(value != 0.0)),
        _ => from_long(f64_to_i64(value), target),
    }
}

fn from_boolean(value: bool, target: VariantType) -> Option<Variant> {
    match target {
        VariantType::Integer => Some(Variant::Integer(i32::from(value))),
        VariantType::Long => Some(Variant::Long(i64::from(value))),
        VariantType::Float => Some(Variant::Float(i32_to_f32(i32::from(value)))),
        VariantType::Double => Some(Variant::Double(f64::from(u8::from(value)))),
        _ => None,
    }
}

/// Parses `text` as a value of type `target`.
fn from_string(text: &str, target: VariantType) -> Option<Variant> {
    let text = text.trim();

    match target {
        VariantType::Integer => text.parse::<i32>()
                                    .ok()
                                    .or_else(|| text.parse::<f64>().ok().map(f64_to_i32))
                                    .map(Variant::Integer),
        VariantType::Long => text.parse::<i64>()
                                 .ok()
                                 .or_else(|| text.parse::<f64>().ok().map(f64_to_i64))
                                 .map(Variant::Long),
        VariantType::Float => text.parse::<f32>().ok().map(Variant::Float),
        VariantType::Double => text.parse::<f64>().ok().map(Variant::Double),
        VariantType::Boolean => parse_boolean(text).map(Variant::Boolean),
        VariantType::DateTime => OffsetDateTime::parse(text, &Rfc3339).ok().map(Variant::DateTime),
        VariantType::TimeSpan => text.parse::<i64>().ok().map(|millis| Variant::TimeSpan(from_millis(millis))),
        _ => None,
    }
}

fn parse_boolean(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "t" | "y" | "1" => Some(true),
        "false" | "no" | "f" | "n" | "0" => Some(false),
        _ => None,
    }
}
