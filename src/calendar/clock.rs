//! Timezone-stable date normalization.
//!
//! All "which day is this" decisions in the engine go through
//! [`CalendarClock`], which pins a single reference timezone. The server's
//! runtime timezone and the daylight-saving rules of any other zone never
//! influence holiday matching or day boundaries.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, EngineResult};

/// The fixed reference timezone for the whole engine.
pub const REFERENCE_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

/// A date-like input accepted by [`CalendarClock::normalize`].
///
/// Built via `From` conversions so call sites can pass a `NaiveDate`, a
/// `DateTime<Utc>`, or a string directly.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// An already-normalized wall-clock date.
    Day(NaiveDate),
    /// An absolute instant, projected into the reference zone.
    Instant(DateTime<Utc>),
    /// Text: either `YYYY-MM-DD` (taken as a wall-clock date, never
    /// shifted through any timezone) or an RFC 3339 timestamp.
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Day(date)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(instant: DateTime<Utc>) -> Self {
        DateInput::Instant(instant)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// Produces stable local-midnight dates for any date-like input.
///
/// One clock instance is shared across the engine; tests may construct a
/// clock over a different zone to prove the logic does not depend on the
/// environment.
///
/// # Example
///
/// ```
/// use timebank_engine::calendar::CalendarClock;
/// use chrono::NaiveDate;
///
/// let clock = CalendarClock::default();
/// let day = clock.normalize("2024-12-25").unwrap();
/// assert_eq!(day, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CalendarClock {
    tz: Tz,
}

impl Default for CalendarClock {
    fn default() -> Self {
        Self {
            tz: REFERENCE_TIMEZONE,
        }
    }
}

impl CalendarClock {
    /// Creates a clock over an explicit timezone.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Returns the clock's timezone.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Normalizes any date-like input to a wall-clock date in the
    /// reference zone.
    ///
    /// - A `YYYY-MM-DD` string is taken as a wall-clock date directly;
    ///   it is never routed through a timestamp parser that could apply
    ///   a UTC or server-local shift.
    /// - An RFC 3339 timestamp or a `DateTime<Utc>` is projected into the
    ///   reference zone first, then truncated to its date.
    /// - A `NaiveDate` passes through unchanged.
    ///
    /// Fails with [`EngineError::InvalidDate`] when text cannot be parsed
    /// either way.
    pub fn normalize(&self, input: impl Into<DateInput>) -> EngineResult<NaiveDate> {
        match input.into() {
            DateInput::Day(date) => Ok(date),
            DateInput::Instant(instant) => Ok(instant.with_timezone(&self.tz).date_naive()),
            DateInput::Text(text) => {
                if let Ok(date) = NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
                    return Ok(date);
                }
                if let Ok(stamp) = DateTime::parse_from_rfc3339(&text) {
                    return Ok(stamp.with_timezone(&self.tz).date_naive());
                }
                Err(EngineError::InvalidDate { input: text })
            }
        }
    }

    /// Projects an absolute instant to its wall-clock datetime in the
    /// reference zone. Used by the late-night overtime rule, where the
    /// 22:00 boundary is a local time.
    pub fn local_datetime(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.tz).naive_local()
    }

    /// Returns the UTC instants spanning one reference-zone calendar day:
    /// local midnight (inclusive) to the next local midnight (exclusive).
    ///
    /// On a spring-forward day where midnight does not exist, the first
    /// valid local time is used instead.
    pub fn day_bounds(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.local_midnight(date), self.local_midnight(date + chrono::Duration::days(1)))
    }

    fn local_midnight(&self, date: NaiveDate) -> DateTime<Utc> {
        use chrono::TimeZone;

        let midnight = date.and_time(chrono::NaiveTime::MIN);
        match self.tz.from_local_datetime(&midnight) {
            chrono::LocalResult::Single(t) | chrono::LocalResult::Ambiguous(t, _) => {
                t.with_timezone(&Utc)
            }
            // Skipped by a DST gap; take the first instant of the day.
            chrono::LocalResult::None => self
                .tz
                .from_local_datetime(&(midnight + chrono::Duration::hours(1)))
                .earliest()
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(&midnight)),
        }
    }
}
