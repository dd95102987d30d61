//! Easter Sunday computation.
//!
//! Implements the Meeus/Jones/Butcher Gregorian algorithm, which the
//! variable Brazilian holidays (Carnival, Good Friday, Corpus Christi)
//! are offset from.

use chrono::NaiveDate;

/// Computes Easter Sunday for the given Gregorian year.
///
/// Pure integer arithmetic; valid for any year in the Gregorian
/// calendar's range.
///
/// # Example
///
/// ```
/// use timebank_engine::calendar::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     easter_sunday(2024),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
/// );
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    // Month is always 3 or 4, day always in range; the algorithm cannot
    // produce an invalid Gregorian date.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .unwrap_or_else(|| unreachable!("Meeus/Jones/Butcher produced an invalid date"))
}
