//! Overtime bucket classification.
//!
//! Splits one day's worked hours into the 50%-premium and 100%-premium
//! buckets per the bank-hours policy: expected-shift baselines on
//! weekdays, full premium on Saturdays, Sundays and holidays, and the
//! late-night rule that prices work after 22:00 local time at 100%.
//!
//! Both functions return *raw* hours; the premium factors (1.5 / 2.0)
//! are applied once at the monthly roll-up.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarClock;

use super::worked_hours::WorkedInterval;

/// Expected shift length Monday through Thursday, in hours.
pub const EXPECTED_HOURS_MON_THU: Decimal = Decimal::from_parts(9, 0, 0, false, 0);

/// Expected shift length on Friday, in hours.
pub const EXPECTED_HOURS_FRIDAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Local hour after which weekday work counts in the 100% bucket.
pub const NIGHT_BOUNDARY_HOUR: u32 = 22;

/// Reporting factor for the 50%-premium bucket.
pub const PREMIUM_FACTOR_50: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Reporting factor for the 100%-premium bucket.
pub const PREMIUM_FACTOR_100: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// The classification context for one day: its date and whether the
/// holiday calendar resolved it as a holiday.
///
/// # Example
///
/// ```
/// use timebank_engine::calculation::DayContext;
/// use chrono::NaiveDate;
///
/// // 2024-07-02 is a Tuesday.
/// let day = DayContext::new(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(), false);
/// assert_eq!(day.day_of_week(), 2);
/// assert!(!day.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayContext {
    /// The calendar day being classified.
    pub date: NaiveDate,
    /// Whether the day is a holiday under the employee's state scope.
    pub is_holiday: bool,
}

impl DayContext {
    /// Creates a day context.
    pub fn new(date: NaiveDate, is_holiday: bool) -> Self {
        Self { date, is_holiday }
    }

    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.date.weekday().num_days_from_sunday()
    }

    /// Whether the day is a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Sundays and holidays are entirely 100%-premium days.
    pub fn is_full_premium(&self) -> bool {
        self.is_holiday || self.date.weekday() == Weekday::Sun
    }
}

/// Computes raw 50%-premium hours for one day.
///
/// - Sunday or holiday: zero (the whole day is 100%-premium instead).
/// - Monday-Thursday: hours beyond the 9h expected shift.
/// - Friday: hours beyond the 8h expected shift.
/// - Saturday: every worked hour (no expected baseline).
pub fn compute_overtime50(worked_hours: Decimal, day: &DayContext) -> Decimal {
    if day.is_full_premium() {
        return Decimal::ZERO;
    }
    match day.date.weekday() {
        Weekday::Sat => worked_hours,
        Weekday::Fri => (worked_hours - EXPECTED_HOURS_FRIDAY).max(Decimal::ZERO),
        _ => (worked_hours - EXPECTED_HOURS_MON_THU).max(Decimal::ZERO),
    }
}

/// Computes raw 100%-premium hours for one day.
///
/// Sundays and holidays contribute every worked hour. On other days the
/// paired intervals are evaluated against the 22:00 local boundary: an
/// interval fully before it contributes nothing, one fully after it
/// contributes its whole duration, and one straddling it contributes
/// only the portion from 22:00 to its end.
pub fn compute_overtime100(
    worked_hours: Decimal,
    day: &DayContext,
    intervals: &[WorkedInterval],
    clock: &CalendarClock,
) -> Decimal {
    if day.is_full_premium() {
        return worked_hours;
    }

    let boundary = match day.date.and_hms_opt(NIGHT_BOUNDARY_HOUR, 0, 0) {
        Some(boundary) => boundary,
        None => return Decimal::ZERO,
    };
    intervals
        .iter()
        .map(|interval| night_portion(interval, boundary, clock))
        .sum()
}

/// Hours of one interval falling after the local night boundary.
fn night_portion(
    interval: &WorkedInterval,
    boundary: NaiveDateTime,
    clock: &CalendarClock,
) -> Decimal {
    let start = clock.local_datetime(interval.start);
    let end = clock.local_datetime(interval.end);
    if end <= boundary {
        return Decimal::ZERO;
    }
    let from = start.max(boundary);
    let minutes = (end - from).num_minutes();
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}
