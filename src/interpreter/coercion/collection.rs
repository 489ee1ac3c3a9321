use unicode_segmentation::UnicodeSegmentation;

use crate::{
    error::eval_error::{EvalError, EvalResult},
    interpreter::{
        coercion::{comparison::values_equal, core::CoercionPolicy},
        value::core::{Variant, VariantType},
    },
    util::{
        num::checked_index,
        pattern::like_regex,
    },
};

/// Tests whether `needle` occurs in `collection`.
///
/// Arrays are searched element by element, converting each element to the
/// needle's type. Any other collection, null included, is compared to the
/// needle directly.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{PermissivePolicy, collection::is_in},
///     value::core::Variant,
/// };
///
/// let policy = PermissivePolicy;
/// let numbers = Variant::from(vec![Variant::Integer(1), Variant::Integer(2)]);
/// assert_eq!(is_in(&policy, &numbers, &Variant::Integer(2)).unwrap(), Variant::Boolean(true));
/// assert_eq!(is_in(&policy, &numbers, &"1".into()).unwrap(), Variant::Boolean(true));
/// assert_eq!(is_in(&policy, &numbers, &Variant::Integer(5)).unwrap(), Variant::Boolean(false));
/// assert_eq!(is_in(&policy, &Variant::Null, &Variant::Integer(5)).unwrap(), Variant::Boolean(false));
/// ```
pub fn is_in<P>(policy: &P, collection: &Variant, needle: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    let Variant::Array(items) = collection else {
        return values_equal(policy, "IN", collection, needle).map(Variant::Boolean);
    };

    for item in items {
        if values_equal(policy, "IN", needle, item)? {
            return Ok(Variant::Boolean(true));
        }
    }

    Ok(Variant::Boolean(false))
}

/// Reads `collection[index]`.
///
/// Arrays are indexed directly. Strings are indexed by grapheme cluster and
/// yield a one-grapheme string. The index is converted to an `Integer`.
///
/// # Errors
/// - [`EvalError::IndexOutOfBounds`] for a negative or too large index.
/// - [`EvalError::ConversionNotSupported`] when `collection` is neither an
///   array nor a string.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{PermissivePolicy, collection::element},
///     value::core::Variant,
/// };
///
/// let policy = PermissivePolicy;
/// assert_eq!(element(&policy, &"abc".into(), &Variant::Integer(1)).unwrap(), Variant::from("b"));
/// assert_eq!(element(&policy, &"ne\u{301}e".into(), &Variant::Integer(1)).unwrap(),
///            Variant::from("e\u{301}"));
/// assert!(element(&policy, &"abc".into(), &Variant::Integer(3)).is_err());
/// ```
pub fn element<P>(policy: &P, collection: &Variant, index: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    if collection.is_null() || index.is_null() {
        return Ok(Variant::Null);
    }

    let index = match policy.convert(index, VariantType::Integer)? {
        Variant::Integer(index) => index,
        other => return Err(EvalError::conversion(other.variant_type(), VariantType::Integer)),
    };
    let out_of_bounds = |length| EvalError::IndexOutOfBounds { index: i64::from(index),
                                                               length,
                                                               position: None };

    match collection {
        Variant::Array(items) => checked_index(index, items.len()).map(|at| items[at].clone())
                                                                  .ok_or_else(|| out_of_bounds(items.len())),
        Variant::String(text) => {
            let graphemes = text.graphemes(true).collect::<Vec<_>>();
            checked_index(index, graphemes.len()).map(|at| Variant::from(graphemes[at]))
                                                 .ok_or_else(|| out_of_bounds(graphemes.len()))
        },
        other => Err(EvalError::conversion(other.variant_type(), VariantType::Array)),
    }
}

/// Matches `value` against a SQL `LIKE` pattern.
///
/// Both operands are converted to strings. Matching ignores case.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::{PermissivePolicy, collection::like},
///     value::core::Variant,
/// };
///
/// let policy = PermissivePolicy;
/// assert_eq!(like(&policy, &"Hello".into(), &"h%o".into()).unwrap(), Variant::Boolean(true));
/// assert_eq!(like(&policy, &Variant::Integer(123), &"1_3".into()).unwrap(),
///            Variant::Boolean(true));
/// assert_eq!(like(&policy, &Variant::Null, &"%".into()).unwrap(), Variant::Null);
/// ```
pub fn like<P>(policy: &P, value: &Variant, pattern: &Variant) -> EvalResult<Variant>
    where P: CoercionPolicy + ?Sized
{
    if value.is_null() || pattern.is_null() {
        return Ok(Variant::Null);
    }

    let text = policy.convert(value, VariantType::String)?;
    let pattern = policy.convert(pattern, VariantType::String)?;
    let (Variant::String(text), Variant::String(pattern)) = (&text, &pattern) else {
        return Err(EvalError::unsupported("LIKE", value.variant_type(), Some(pattern.variant_type())));
    };

    let regex = like_regex(pattern).map_err(|err| EvalError::calculation(err.to_string()))?;
    Ok(Variant::Boolean(regex.is_match(text)))
}
