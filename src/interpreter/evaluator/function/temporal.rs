use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

use crate::{
    error::eval_error::{EvalError, EvalResult},
    interpreter::{
        coercion::core::CoercionPolicy,
        evaluator::utils::{to_datetime, to_integer, to_long},
        value::core::Variant,
    },
    util::temporal::{from_millis, from_unix_seconds, unix_seconds},
};

/// Seconds since the Unix epoch, as a `Long`.
pub fn ticks(_args: &[Variant], _policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    Ok(Variant::Long(unix_seconds(OffsetDateTime::now_utc())))
}

/// The current time in UTC.
pub fn now(_args: &[Variant], _policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    Ok(Variant::DateTime(OffsetDateTime::now_utc()))
}

/// Builds a time span.
///
/// `TimeSpan(ms)` takes milliseconds. `TimeSpan(d, h, m)`,
/// `TimeSpan(d, h, m, s)` and `TimeSpan(d, h, m, s, ms)` take days, hours,
/// minutes and optionally seconds and milliseconds.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::PermissivePolicy, evaluator::function::temporal::time_span,
///     value::core::Variant,
/// };
/// use time::Duration;
///
/// let args = [1, 2, 3, 4, 5].map(Variant::Integer);
/// assert_eq!(time_span(&args, &PermissivePolicy).unwrap(),
///            Variant::TimeSpan(Duration::days(1) + Duration::hours(2) + Duration::minutes(3)
///                              + Duration::seconds(4) + Duration::milliseconds(5)));
/// ```
pub fn time_span(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    let parts = args.iter()
                    .map(|arg| to_long(policy, arg))
                    .collect::<EvalResult<Vec<_>>>()?;

    let millis = match parts.as_slice() {
        [millis] => Some(*millis),
        [days, hours, minutes, rest @ ..] => {
            let seconds = rest.first().copied().unwrap_or(0);
            let millis = rest.get(1).copied().unwrap_or(0);
            days.checked_mul(24)
                .and_then(|total| total.checked_add(*hours))
                .and_then(|total| total.checked_mul(60))
                .and_then(|total| total.checked_add(*minutes))
                .and_then(|total| total.checked_mul(60))
                .and_then(|total| total.checked_add(seconds))
                .and_then(|total| total.checked_mul(1000))
                .and_then(|total| total.checked_add(millis))
        },
        _ => return Err(EvalError::parameter_count("1, 3, 4 or 5", args.len())),
    };

    millis.map(|millis| Variant::TimeSpan(from_millis(millis)))
          .ok_or_else(|| EvalError::calculation("time span is out of range"))
}

/// Builds a UTC timestamp.
///
/// `Date(seconds)` counts seconds from the Unix epoch.
/// `Date(year, month[, day[, hour[, minute[, second[, millisecond]]]]])`
/// builds a calendar date; the day defaults to 1 and the time to midnight.
///
/// # Errors
/// Returns `CalculationFailed` for a date that does not exist.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::PermissivePolicy, evaluator::function::temporal::date, value::core::Variant,
/// };
///
/// let args = [2024, 2, 29].map(Variant::Integer);
/// let leap_day = date(&args, &PermissivePolicy).unwrap();
/// assert_eq!(leap_day.to_string(), "2024-02-29T00:00:00Z");
///
/// let args = [2023, 2, 29].map(Variant::Integer);
/// assert!(date(&args, &PermissivePolicy).is_err());
/// ```
pub fn date(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    if let [seconds] = args {
        let seconds = to_long(policy, seconds)?;
        return from_unix_seconds(seconds).map(Variant::DateTime)
                                         .ok_or_else(|| EvalError::calculation("timestamp is out of range"));
    }

    let parts = args.iter()
                    .map(|arg| to_integer(policy, arg))
                    .collect::<EvalResult<Vec<_>>>()?;
    let part = |index: usize, default: i32| parts.get(index).copied().unwrap_or(default);
    let invalid = |what: &str| EvalError::calculation(format!("invalid {what} in date"));

    let month = u8::try_from(part(1, 1)).ok()
                                        .and_then(|month| Month::try_from(month).ok())
                                        .ok_or_else(|| invalid("month"))?;
    let day = u8::try_from(part(2, 1)).map_err(|_| invalid("day"))?;
    let hour = u8::try_from(part(3, 0)).map_err(|_| invalid("hour"))?;
    let minute = u8::try_from(part(4, 0)).map_err(|_| invalid("minute"))?;
    let second = u8::try_from(part(5, 0)).map_err(|_| invalid("second"))?;
    let milli = u16::try_from(part(6, 0)).map_err(|_| invalid("millisecond"))?;

    let date = Date::from_calendar_date(part(0, 1), month, day).map_err(|err| {
                                                                    EvalError::calculation(err.to_string())
                                                                })?;
    let time = Time::from_hms_milli(hour, minute, second, milli).map_err(|err| {
                                                                     EvalError::calculation(err.to_string())
                                                                 })?;

    Ok(Variant::DateTime(PrimitiveDateTime::new(date, time).assume_utc()))
}

/// The weekday of a timestamp, from 0 for Sunday to 6 for Saturday.
pub fn day_of_week(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    let date = to_datetime(policy, &args[0])?;
    Ok(Variant::Integer(i32::from(date.weekday().number_days_from_sunday())))
}
