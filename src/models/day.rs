//! Derived per-day and per-month result models.
//!
//! These types are computed from punch events and the holiday calendar;
//! nothing here is persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The classification of one worked calendar day.
///
/// Hour fields carry *raw* hours: premium factors (1.5 / 2.0) are applied
/// once, at the monthly roll-up, so per-day accounting and priced
/// reporting stay separable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The calendar day.
    pub date: NaiveDate,
    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u32,
    /// Whether the day is a Saturday or Sunday.
    pub is_weekend: bool,
    /// Whether the holiday calendar resolved the day as a holiday.
    pub is_holiday: bool,
    /// Total worked hours paired from punch events.
    pub total_hours: Decimal,
    /// Worked hours that fall in neither premium bucket.
    ///
    /// Clamped at zero: a 21:00-23:00 interval on a long weekday counts
    /// the 22:00-23:00 hour in both buckets.
    pub regular_hours: Decimal,
    /// Raw hours in the 50%-premium bucket.
    pub overtime50_hours: Decimal,
    /// Raw hours in the 100%-premium bucket.
    pub overtime100_hours: Decimal,
}

/// Monthly bank-hours totals for one employee, priced and rounded.
///
/// Hour totals here are *reported* hours: raw premium hours multiplied by
/// their factor (1.5 for the 50% bucket, 2.0 for the 100% bucket). All
/// fields are rounded to 2 decimal places at this boundary only; the
/// accumulation behind them runs at full precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBankHours {
    /// The employee the totals belong to.
    pub employee_id: String,
    /// Calendar year of the period.
    pub year: i32,
    /// Calendar month of the period (1-12).
    pub month: u32,
    /// Hourly rate: (base + danger + unhealthy) / 220.
    pub hourly_rate: Decimal,
    /// Reported 50%-premium hours (raw * 1.5).
    pub he50_hours: Decimal,
    /// Monetary value of the 50% bucket.
    pub he50_value: Decimal,
    /// Reported 100%-premium hours (raw * 2.0).
    pub he100_hours: Decimal,
    /// Monetary value of the 100% bucket.
    pub he100_value: Decimal,
}
