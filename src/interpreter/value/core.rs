use std::fmt;

use time::{Duration, OffsetDateTime, format_description::well_known::Rfc3339};

use crate::interpreter::value::object::Object;

/// The type tag of a [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantType {
    /// No value.
    Null,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Text.
    String,
    /// `true` or `false`.
    Boolean,
    /// A point in time.
    DateTime,
    /// A length of time.
    TimeSpan,
    /// An opaque host value.
    Object,
    /// A list of variants.
    Array,
}

impl VariantType {
    /// Whether the tag is one of the four numeric types.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Long | Self::Float | Self::Double)
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "Null",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::DateTime => "DateTime",
            Self::TimeSpan => "TimeSpan",
            Self::Object => "Object",
            Self::Array => "Array",
        };
        f.write_str(name)
    }
}

/// A dynamically typed value.
///
/// Every value an expression produces or consumes is a `Variant`. The tag
/// and the payload always agree; converting between tags is the job of a
/// [`CoercionPolicy`](crate::interpreter::coercion::core::CoercionPolicy).
///
/// Variants are plain values: storing one in an array or a variable copies
/// it. Only [`Object`] payloads are shared.
///
/// `PartialEq` compares tag and payload exactly. Expression-level equality,
/// which coerces operands, lives on the coercion policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Variant {
    /// No value.
    #[default]
    Null,
    /// A 32-bit signed integer.
    Integer(i32),
    /// A 64-bit signed integer.
    Long(i64),
    /// A 32-bit float.
    Float(f32),
    /// A 64-bit float.
    Double(f64),
    /// Text.
    String(String),
    /// A truth value.
    Boolean(bool),
    /// A point in time.
    DateTime(OffsetDateTime),
    /// A length of time.
    TimeSpan(Duration),
    /// An opaque host value.
    Object(Object),
    /// A list of variants.
    Array(Vec<Self>),
}

impl Variant {
    /// The value's type tag.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::{Variant, VariantType};
    ///
    /// assert_eq!(Variant::from(1.5).variant_type(), VariantType::Double);
    /// assert_eq!(Variant::from("x").variant_type(), VariantType::String);
    /// assert_eq!(Variant::Null.variant_type(), VariantType::Null);
    /// ```
    #[must_use]
    pub const fn variant_type(&self) -> VariantType {
        match self {
            Self::Null => VariantType::Null,
            Self::Integer(_) => VariantType::Integer,
            Self::Long(_) => VariantType::Long,
            Self::Float(_) => VariantType::Float,
            Self::Double(_) => VariantType::Double,
            Self::String(_) => VariantType::String,
            Self::Boolean(_) => VariantType::Boolean,
            Self::DateTime(_) => VariantType::DateTime,
            Self::TimeSpan(_) => VariantType::TimeSpan,
            Self::Object(_) => VariantType::Object,
            Self::Array(_) => VariantType::Array,
        }
    }

    /// Whether the value is [`Variant::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the value is null, an empty string or an empty array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(text) => text.is_empty(),
            Self::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// The payload of an `Integer`.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The payload of a `Long`.
    #[must_use]
    pub const fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(value) => Some(*value),
            _ => None,
        }
    }

    /// The payload of a `Float`.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The payload of a `Double`.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(value) => Some(*value),
            _ => None,
        }
    }

    /// The payload of a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// The payload of a `Boolean`.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// The payload of a `DateTime`.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<OffsetDateTime> {
        match self {
            Self::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    /// The payload of a `TimeSpan`.
    #[must_use]
    pub const fn as_timespan(&self) -> Option<Duration> {
        match self {
            Self::TimeSpan(value) => Some(*value),
            _ => None,
        }
    }

    /// The payload of an `Object`.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(value) => Some(value),
            _ => None,
        }
    }

    /// The payload of an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    /// Formats the value the way string conversion renders it.
    ///
    /// Null renders as the empty string, timestamps as RFC 3339 and time
    /// spans as whole milliseconds. Timestamps outside years 0 to 9999 keep
    /// the RFC 3339 layout with a signed year.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Long(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::DateTime(value) => match value.format(&Rfc3339) {
                Ok(text) => f.write_str(&text),
                Err(_) => write_extended_datetime(f, *value),
            },
            Self::TimeSpan(value) => write!(f, "{}", value.whole_milliseconds()),
            Self::Object(_) => f.write_str("[object]"),
            Self::Array(items) => {
                write!(f, "[")?;

                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{item}")?;
                }

                write!(f, "]")
            },
        }
    }
}

/// Writes a timestamp RFC 3339 cannot express, such as one before year 0,
/// in the same layout with an explicitly signed year.
fn write_extended_datetime(f: &mut fmt::Formatter<'_>, value: OffsetDateTime) -> fmt::Result {
    write!(f,
           "{:+05}-{:02}-{:02}T{:02}:{:02}:{:02}",
           value.year(),
           u8::from(value.month()),
           value.day(),
           value.hour(),
           value.minute(),
           value.second())?;

    if value.millisecond() != 0 {
        write!(f, ".{:03}", value.millisecond())?;
    }

    let offset = value.offset();
    if offset.is_utc() {
        return f.write_str("Z");
    }

    let sign = if offset.is_negative() { '-' } else { '+' };
    write!(f,
           "{sign}{:02}:{:02}",
           offset.whole_hours().unsigned_abs(),
           offset.minutes_past_hour().unsigned_abs())
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<i64> for Variant {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for Variant {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Variant {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Variant {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<OffsetDateTime> for Variant {
    fn from(v: OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<Duration> for Variant {
    fn from(v: Duration) -> Self {
        Self::TimeSpan(v)
    }
}

impl From<Object> for Variant {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Vec<Self>> for Variant {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Variant {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
