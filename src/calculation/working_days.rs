//! Working-day counting.
//!
//! A pure function over a pre-resolved holiday set so it has no hidden
//! dependency on store state; the holiday calendar resolves the set and
//! delegates here.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Counts business days in `[start, end]` inclusive.
///
/// A day counts iff it is not a Saturday or Sunday and its date is not
/// present in `holidays`. An inverted range counts zero days.
///
/// # Example
///
/// ```
/// use timebank_engine::calculation::count_working_days;
/// use chrono::NaiveDate;
/// use std::collections::HashSet;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// let holidays = HashSet::from([start]); // Jan 1
///
/// // Mon Jan 1 is a holiday; Tue-Fri count; Sat/Sun do not.
/// assert_eq!(count_working_days(start, end, &holidays), 4);
/// ```
pub fn count_working_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HashSet<NaiveDate>,
) -> u32 {
    let mut count = 0;
    let mut day = start;
    while day <= end {
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
        if !weekend && !holidays.contains(&day) {
            count += 1;
        }
        day += Duration::days(1);
    }
    count
}
