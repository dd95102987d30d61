//! Data models for the work-time and overtime engine.
//!
//! This module contains the holiday record and its query types, the raw
//! punch event consumed from the time-clock store, the derived per-day
//! and per-month result types, and employee compensation inputs.

mod day;
mod employee;
mod holiday;
mod punch;

pub use day::{DayClassification, MonthlyBankHours};
pub use employee::{CompensationInput, EmployeeProfile};
pub use holiday::{Holiday, HolidayFilter, HolidayType, NewHoliday, StateScope};
pub use punch::{PunchType, RawPunchEvent};
