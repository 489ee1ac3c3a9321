use time::{Duration, OffsetDateTime};

/// The timestamp `seconds` after the Unix epoch, in UTC.
///
/// Returns `None` outside the range `time` can represent.
///
/// # Example
/// ```
/// use reckon::util::temporal::{from_unix_seconds, unix_seconds};
///
/// let date = from_unix_seconds(86_400).unwrap();
/// assert_eq!(date.day(), 2);
/// assert_eq!(unix_seconds(date), 86_400);
/// ```
#[must_use]
pub fn from_unix_seconds(seconds: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(seconds).ok()
}

/// Whole seconds between the Unix epoch and `date`.
#[must_use]
pub const fn unix_seconds(date: OffsetDateTime) -> i64 {
    date.unix_timestamp()
}

/// A duration of `millis` milliseconds.
#[must_use]
pub const fn from_millis(millis: i64) -> Duration {
    Duration::milliseconds(millis)
}

/// Whole milliseconds in `span`, saturating at the `i64` range.
///
/// # Example
/// ```
/// use reckon::util::temporal::whole_millis;
/// use time::Duration;
///
/// assert_eq!(whole_millis(Duration::seconds(2)), 2_000);
/// assert_eq!(whole_millis(Duration::MAX), i64::MAX);
/// ```
#[must_use]
pub fn whole_millis(span: Duration) -> i64 {
    let millis = span.whole_milliseconds();
    i64::try_from(millis).unwrap_or(if millis < 0 { i64::MIN } else { i64::MAX })
}
