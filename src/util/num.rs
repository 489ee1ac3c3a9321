//! Truncating and wrapping casts.
//!
//! Float to integer casts truncate toward zero and saturate at the target
//! range, with NaN mapping to zero. Integer narrowing wraps.

/// Truncates `value` toward zero into an `i32`.
///
/// # Example
/// ```
/// use reckon::util::num::f64_to_i32;
///
/// assert_eq!(f64_to_i32(2.9), 2);
/// assert_eq!(f64_to_i32(-2.9), -2);
/// assert_eq!(f64_to_i32(1e20), i32::MAX);
/// assert_eq!(f64_to_i32(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_i32(value: f64) -> i32 {
    value as i32
}

/// Truncates `value` toward zero into an `i64`.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_i64(value: f64) -> i64 {
    value as i64
}

/// Narrows `value` to the nearest `f32`.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_f32(value: f64) -> f32 {
    value as f32
}

/// Keeps the low 32 bits of `value`.
///
/// # Example
/// ```
/// use reckon::util::num::i64_to_i32_wrapping;
///
/// assert_eq!(i64_to_i32_wrapping(7), 7);
/// assert_eq!(i64_to_i32_wrapping(1 << 32), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn i64_to_i32_wrapping(value: i64) -> i32 {
    value as i32
}

/// Converts `value` to the nearest `f64`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts `value` to the nearest `f32`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f32(value: i64) -> f32 {
    value as f32
}

/// Converts `value` to the nearest `f32`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i32_to_f32(value: i32) -> f32 {
    value as f32
}

/// Reinterprets a shift count so that `wrapping_shl`/`wrapping_shr` mask it
/// to the operand width.
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub const fn shift_count(count: i32) -> u32 {
    count as u32
}

/// Returns `index` as a position into a collection of `len` items, or `None`
/// when it falls outside.
///
/// # Example
/// ```
/// use reckon::util::num::checked_index;
///
/// assert_eq!(checked_index(2, 3), Some(2));
/// assert_eq!(checked_index(3, 3), None);
/// assert_eq!(checked_index(-1, 3), None);
/// ```
#[must_use]
pub fn checked_index(index: i32, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&index| index < len)
}
