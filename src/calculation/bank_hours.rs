//! Monthly bank-hours aggregation.
//!
//! Drives the per-day pipeline — holiday resolution, punch pairing,
//! overtime classification — across a payroll month and rolls the raw
//! buckets up into priced totals.

use chrono::{Duration, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::calendar::HolidayCalendar;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationInput, DayClassification, MonthlyBankHours};
use crate::store::{EmployeeDirectory, HolidayStore, PunchStore};

use super::overtime::{
    compute_overtime50, compute_overtime100, DayContext, PREMIUM_FACTOR_50, PREMIUM_FACTOR_100,
};
use super::worked_hours::{pair_intervals, WorkedInterval};

/// Aggregates one employee's bank hours over a payroll month.
///
/// Each invocation is independent: all accumulators are local to the
/// call, so aggregations for different employees or periods may run
/// concurrently.
///
/// # Example
///
/// ```
/// use timebank_engine::calculation::BankHoursAggregator;
/// use timebank_engine::calendar::{CalendarClock, HolidayCalendar};
/// use timebank_engine::config::EngineConfig;
/// use timebank_engine::store::{
///     InMemoryEmployeeDirectory, InMemoryHolidayStore, InMemoryPunchStore,
/// };
///
/// let calendar = HolidayCalendar::new(InMemoryHolidayStore::new(), CalendarClock::default());
/// let punches = InMemoryPunchStore::new();
/// let directory = InMemoryEmployeeDirectory::new();
/// let config = EngineConfig::default();
///
/// let aggregator = BankHoursAggregator::new(&calendar, &punches, &directory, &config);
/// ```
#[derive(Debug)]
pub struct BankHoursAggregator<'a, H, P, D>
where
    H: HolidayStore,
    P: PunchStore,
    D: EmployeeDirectory,
{
    calendar: &'a HolidayCalendar<H>,
    punches: &'a P,
    directory: &'a D,
    config: &'a EngineConfig,
}

impl<'a, H, P, D> BankHoursAggregator<'a, H, P, D>
where
    H: HolidayStore,
    P: PunchStore,
    D: EmployeeDirectory,
{
    /// Creates an aggregator over the given collaborators.
    pub fn new(
        calendar: &'a HolidayCalendar<H>,
        punches: &'a P,
        directory: &'a D,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            calendar,
            punches,
            directory,
            config,
        }
    }

    /// Computes the priced monthly totals for one employee.
    ///
    /// The hourly rate is `(base + danger + unhealthy) / 220` (the
    /// configured monthly baseline); raw premium hours are multiplied by
    /// 1.5 / 2.0 here, at the aggregation boundary, and every output is
    /// rounded to 2 decimal places at this point only — accumulation
    /// runs at full precision.
    pub fn calculate_for_month(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
        comp: &CompensationInput,
    ) -> EngineResult<MonthlyBankHours> {
        let days = self.classify_month(employee_id, year, month)?;

        let mut overtime50_raw = Decimal::ZERO;
        let mut overtime100_raw = Decimal::ZERO;
        for day in &days {
            overtime50_raw += day.overtime50_hours;
            overtime100_raw += day.overtime100_hours;
        }

        let hourly_rate = comp.total() / self.config.monthly_hour_baseline;
        let he50_hours = overtime50_raw * PREMIUM_FACTOR_50;
        let he100_hours = overtime100_raw * PREMIUM_FACTOR_100;

        debug!(
            employee_id,
            year,
            month,
            worked_days = days.len(),
            %overtime50_raw,
            %overtime100_raw,
            "monthly bank hours aggregated"
        );

        Ok(MonthlyBankHours {
            employee_id: employee_id.to_string(),
            year,
            month,
            hourly_rate: round_money(hourly_rate),
            he50_hours: round_money(he50_hours),
            he50_value: round_money(he50_hours * hourly_rate),
            he100_hours: round_money(he100_hours),
            he100_value: round_money(he100_hours * hourly_rate),
        })
    }

    /// Computes the unrounded per-day breakdown for audit use.
    ///
    /// Hour fields are raw (no premium factor applied); days without
    /// pairable worked time are omitted, not reported as errors.
    pub fn calculate_detailed(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Vec<DayClassification>> {
        self.classify_month(employee_id, year, month)
    }

    fn classify_month(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Vec<DayClassification>> {
        let profile = self.directory.profile(employee_id)?;
        let state = self.config.state_for_hub(profile.work_hub.as_deref());
        let clock = self.calendar.clock();

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            EngineError::InvalidDate {
                input: format!("{year}-{month:02}"),
            }
        })?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| EngineError::InvalidDate {
            input: format!("{year}-{month:02}"),
        })?;

        let mut days = Vec::new();
        let mut day = first;
        while day < next_month {
            let (start, end) = clock.day_bounds(day);
            let events = self.punches.events_in_range(employee_id, start, end)?;
            let intervals = pair_intervals(&events);
            let total: Decimal = intervals.iter().map(WorkedInterval::duration_hours).sum();

            // Days without pairable work contribute to neither bucket.
            if total > Decimal::ZERO {
                let context = DayContext::new(day, self.calendar.is_holiday(day, state)?);
                let overtime50 = compute_overtime50(total, &context);
                let overtime100 = compute_overtime100(total, &context, &intervals, clock);
                days.push(DayClassification {
                    date: day,
                    day_of_week: context.day_of_week(),
                    is_weekend: context.is_weekend(),
                    is_holiday: context.is_holiday,
                    total_hours: total,
                    regular_hours: (total - overtime50 - overtime100).max(Decimal::ZERO),
                    overtime50_hours: overtime50,
                    overtime100_hours: overtime100,
                });
            }
            day += Duration::days(1);
        }
        Ok(days)
    }
}

/// Rounds a monetary or reported-hour quantity to 2 decimal places.
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
