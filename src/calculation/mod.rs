//! The calculation pipeline: working-day counting, punch pairing,
//! per-day overtime classification, and monthly aggregation.
//!
//! Functions here are pure where possible; the ordering is always
//! pairing first ([`pair_intervals`]), then classification
//! ([`compute_overtime50`] / [`compute_overtime100`]), then pricing
//! ([`BankHoursAggregator`]). Premium factors and rounding are applied
//! once, at the aggregation boundary.

mod bank_hours;
mod overtime;
mod worked_hours;
mod working_days;

pub use bank_hours::BankHoursAggregator;
pub use overtime::{
    compute_overtime50, compute_overtime100, DayContext, EXPECTED_HOURS_FRIDAY,
    EXPECTED_HOURS_MON_THU, NIGHT_BOUNDARY_HOUR, PREMIUM_FACTOR_50, PREMIUM_FACTOR_100,
};
pub use worked_hours::{compute_worked_hours, pair_intervals, WorkedInterval};
pub use working_days::count_working_days;
