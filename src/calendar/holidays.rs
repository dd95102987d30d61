//! Holiday calendar service.
//!
//! Resolves fixed-date, state-scoped, and recurring holidays over a
//! [`HolidayStore`], computes the variable Catholic holidays from Easter,
//! and seeds the canonical Brazilian national calendar.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::count_working_days;
use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidayFilter, HolidayType, NewHoliday, StateScope};
use crate::store::HolidayStore;

use super::clock::{CalendarClock, DateInput};
use super::easter::easter_sunday;

/// The outcome of seeding one holiday during a bulk operation.
///
/// A duplicate (date, name) pair is an expected outcome of reseeding,
/// not a failure; it is tagged here instead of being string-matched out
/// of an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SeedOutcome {
    /// A new row was created.
    Created {
        /// The created row.
        holiday: Holiday,
    },
    /// An active or inactive row already carried this (date, name).
    AlreadyExists {
        /// The name of the existing holiday.
        name: String,
        /// The date of the existing holiday.
        date: NaiveDate,
    },
}

/// Per-item report of a bulk seeding operation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeedReport {
    /// One outcome per attempted holiday, in seeding order.
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
    /// Number of rows actually created.
    pub fn created_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SeedOutcome::Created { .. }))
            .count()
    }

    /// Number of rows skipped because they already existed.
    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.created_count()
    }
}

/// Holiday calendar over a holiday store.
///
/// All date inputs are normalized through the engine's [`CalendarClock`]
/// before matching, so the server's runtime timezone never leaks into
/// day-boundary decisions.
///
/// # Example
///
/// ```
/// use timebank_engine::calendar::{CalendarClock, HolidayCalendar};
/// use timebank_engine::store::InMemoryHolidayStore;
///
/// let calendar = HolidayCalendar::new(InMemoryHolidayStore::new(), CalendarClock::default());
/// calendar.import_national_holidays(2024, None).unwrap();
/// assert!(calendar.is_holiday("2024-12-25", None).unwrap());
/// assert!(calendar.is_holiday("2024-03-29", None).unwrap()); // Good Friday
/// ```
#[derive(Debug)]
pub struct HolidayCalendar<S: HolidayStore> {
    store: S,
    clock: CalendarClock,
}

impl<S: HolidayStore> HolidayCalendar<S> {
    /// Creates a calendar over the given store and clock.
    pub fn new(store: S, clock: CalendarClock) -> Self {
        Self { store, clock }
    }

    /// Returns the calendar's clock.
    pub fn clock(&self) -> &CalendarClock {
        &self.clock
    }

    /// Creates a holiday.
    ///
    /// The date is normalized through the clock; the store enforces the
    /// (date, name) uniqueness invariant and reports a collision as
    /// [`EngineError::DuplicateHoliday`].
    pub fn create(&self, input: NewHoliday) -> EngineResult<Holiday> {
        let date = self.clock.normalize(input.date)?;
        let holiday = Holiday {
            id: Uuid::new_v4(),
            name: input.name,
            date,
            holiday_type: input.holiday_type,
            is_recurring: input.is_recurring,
            state: input.state,
            city: input.city,
            is_active: input.is_active,
            created_by: input.created_by,
        };
        self.store.insert(holiday)
    }

    /// Fetches a holiday by id; absence is not an error.
    pub fn get_holiday(&self, id: Uuid) -> EngineResult<Option<Holiday>> {
        self.store.get(id)
    }

    /// Lists holidays matching the filter, sorted by date then name.
    pub fn get_holidays(&self, filter: &HolidayFilter) -> EngineResult<Vec<Holiday>> {
        let mut matched: Vec<Holiday> = self
            .store
            .all()?
            .into_iter()
            .filter(|h| filter.matches(h))
            .collect();
        matched.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        Ok(matched)
    }

    /// Whether the given date is a holiday under the given state scope.
    ///
    /// `Some(uf)` matches nationwide holidays plus holidays scoped to
    /// that state; `None` matches nationwide holidays only.
    pub fn is_holiday(
        &self,
        date: impl Into<DateInput>,
        state: Option<&str>,
    ) -> EngineResult<bool> {
        Ok(self.get_holiday_by_date(date, state)?.is_some())
    }

    /// Resolves the holiday on a given date, if any.
    ///
    /// Matching order: an exact active row on the normalized date wins;
    /// otherwise active recurring rows are scanned by month and
    /// day-of-month, ignoring year. Within a phase ties are broken by
    /// name for determinism.
    pub fn get_holiday_by_date(
        &self,
        date: impl Into<DateInput>,
        state: Option<&str>,
    ) -> EngineResult<Option<Holiday>> {
        let date = self.clock.normalize(date)?;
        let scope = StateScope::from_query(state);

        let mut exact: Vec<Holiday> = self
            .store
            .find_active_on(date)?
            .into_iter()
            .filter(|h| scope.matches(h.state.as_deref()))
            .collect();
        exact.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(found) = exact.into_iter().next() {
            return Ok(Some(found));
        }

        let mut recurring: Vec<Holiday> = self
            .store
            .find_active_recurring()?
            .into_iter()
            .filter(|h| scope.matches(h.state.as_deref()) && h.recurs_on(date))
            .collect();
        recurring.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(recurring.into_iter().next())
    }

    /// Lists the holidays effective in `[start, end]` inclusive.
    ///
    /// The result is the union of exact rows in the range and, for every
    /// active recurring holiday, one synthetic occurrence per spanned
    /// year — minus occurrences whose resolved date is already covered by
    /// an exact row (so a recurring holiday that also has a concrete row
    /// for that year is not counted twice). Sorted ascending by date,
    /// then name.
    pub fn get_holidays_by_period(
        &self,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
        state: Option<&str>,
    ) -> EngineResult<Vec<Holiday>> {
        let start = self.clock.normalize(start)?;
        let end = self.clock.normalize(end)?;
        if end < start {
            return Err(EngineError::InvalidRange { start, end });
        }
        let scope = StateScope::from_query(state);

        let mut result: Vec<Holiday> = self
            .store
            .find_in_range(start, end)?
            .into_iter()
            .filter(|h| scope.matches(h.state.as_deref()))
            .collect();
        let exact_dates: HashSet<NaiveDate> = result.iter().map(|h| h.date).collect();

        for recurring in self.store.find_active_recurring()? {
            if !scope.matches(recurring.state.as_deref()) {
                continue;
            }
            for year in start.year()..=end.year() {
                let Some(occurrence) = recurring.occurrence_in(year) else {
                    continue;
                };
                if occurrence < start || occurrence > end || exact_dates.contains(&occurrence) {
                    continue;
                }
                let mut synthetic = recurring.clone();
                synthetic.date = occurrence;
                result.push(synthetic);
            }
        }

        result.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        Ok(result)
    }

    /// Counts business days in `[start, end]` inclusive: days that are
    /// neither weekend days nor holidays under the given state scope.
    pub fn count_working_days(
        &self,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
        state: Option<&str>,
    ) -> EngineResult<u32> {
        let start = self.clock.normalize(start)?;
        let end = self.clock.normalize(end)?;
        let holidays = self.get_holidays_by_period(start, end, state)?;
        let holiday_dates: HashSet<NaiveDate> = holidays.into_iter().map(|h| h.date).collect();
        Ok(count_working_days(start, end, &holiday_dates))
    }

    /// Replaces an existing holiday's fields, keeping its id and creator.
    ///
    /// The date is re-normalized and the (date, name) invariant
    /// re-checked. Fails with [`EngineError::HolidayNotFound`] for an
    /// unknown id.
    pub fn update(&self, id: Uuid, changes: NewHoliday) -> EngineResult<Holiday> {
        let existing = self
            .store
            .get(id)?
            .ok_or_else(|| EngineError::HolidayNotFound { id: id.to_string() })?;
        let date = self.clock.normalize(changes.date)?;
        let updated = Holiday {
            id,
            name: changes.name,
            date,
            holiday_type: changes.holiday_type,
            is_recurring: changes.is_recurring,
            state: changes.state,
            city: changes.city,
            is_active: changes.is_active,
            created_by: existing.created_by,
        };
        self.store.replace(updated)
    }

    /// Hard-deletes a holiday. Fails with
    /// [`EngineError::HolidayNotFound`] for an unknown id.
    pub fn delete(&self, id: Uuid) -> EngineResult<()> {
        self.store.remove(id)
    }

    /// Seeds the twelve canonical Brazilian holidays for one year: nine
    /// fixed dates plus Carnival (Easter − 47), Good Friday (Easter − 2)
    /// and Corpus Christi (Easter + 60).
    ///
    /// Reseeding is idempotent: rows that already exist are reported as
    /// [`SeedOutcome::AlreadyExists`] and skipped. Any other error aborts
    /// the batch and propagates.
    pub fn import_national_holidays(
        &self,
        year: i32,
        created_by: Option<&str>,
    ) -> EngineResult<SeedReport> {
        let mut report = SeedReport::default();
        for input in self.national_holidays_for(year, created_by)? {
            let outcome = self.seed_one(input)?;
            report.outcomes.push(outcome);
        }
        info!(
            year,
            created = report.created_count(),
            skipped = report.skipped_count(),
            "imported national holidays"
        );
        Ok(report)
    }

    /// Projects every active recurring holiday into `year` as a new
    /// non-recurring row, carrying over name, type, state, and city.
    ///
    /// Idempotent the same way as
    /// [`import_national_holidays`](Self::import_national_holidays).
    pub fn generate_recurring_holidays(
        &self,
        year: i32,
        created_by: Option<&str>,
    ) -> EngineResult<SeedReport> {
        let mut report = SeedReport::default();
        for source in self.store.find_active_recurring()? {
            let Some(occurrence) = source.occurrence_in(year) else {
                debug!(name = %source.name, year, "recurring date does not exist in target year");
                continue;
            };
            let input = NewHoliday {
                name: source.name,
                date: occurrence.into(),
                holiday_type: source.holiday_type,
                is_recurring: false,
                state: source.state,
                city: source.city,
                is_active: true,
                created_by: created_by.map(ToString::to_string),
            };
            let outcome = self.seed_one(input)?;
            report.outcomes.push(outcome);
        }
        info!(
            year,
            created = report.created_count(),
            skipped = report.skipped_count(),
            "generated recurring holidays"
        );
        Ok(report)
    }

    /// Attempts one creation, mapping the duplicate error variant to a
    /// skip outcome. Every other error aborts the batch.
    fn seed_one(&self, input: NewHoliday) -> EngineResult<SeedOutcome> {
        match self.create(input) {
            Ok(holiday) => Ok(SeedOutcome::Created { holiday }),
            Err(EngineError::DuplicateHoliday { name, date }) => {
                Ok(SeedOutcome::AlreadyExists { name, date })
            }
            Err(other) => Err(other),
        }
    }

    fn national_holidays_for(
        &self,
        year: i32,
        created_by: Option<&str>,
    ) -> EngineResult<Vec<NewHoliday>> {
        let fixed: [(&str, u32, u32); 9] = [
            ("Confraternização Universal", 1, 1),
            ("Tiradentes", 4, 21),
            ("Dia do Trabalho", 5, 1),
            ("Independência do Brasil", 9, 7),
            ("Nossa Senhora Aparecida", 10, 12),
            ("Finados", 11, 2),
            ("Proclamação da República", 11, 15),
            ("Dia da Consciência Negra", 11, 20),
            ("Natal", 12, 25),
        ];

        let mut inputs: Vec<NewHoliday> = fixed
            .iter()
            .map(|(name, month, day)| {
                let date = NaiveDate::from_ymd_opt(year, *month, *day).ok_or_else(|| {
                    EngineError::InvalidDate {
                        input: format!("{year}-{month:02}-{day:02}"),
                    }
                })?;
                Ok(NewHoliday {
                    name: (*name).to_string(),
                    date: date.into(),
                    holiday_type: HolidayType::National,
                    is_recurring: false,
                    state: None,
                    city: None,
                    is_active: true,
                    created_by: created_by.map(ToString::to_string),
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        // Normalize through the clock before applying offsets, so they
        // are wall-clock day offsets rather than UTC-instant arithmetic.
        let easter = self.clock.normalize(easter_sunday(year))?;
        let variable = [
            ("Carnaval", easter - Duration::days(47), HolidayType::Optional),
            ("Sexta-feira Santa", easter - Duration::days(2), HolidayType::National),
            ("Corpus Christi", easter + Duration::days(60), HolidayType::Optional),
        ];
        for (name, date, holiday_type) in variable {
            inputs.push(NewHoliday {
                name: name.to_string(),
                date: date.into(),
                holiday_type,
                is_recurring: false,
                state: None,
                city: None,
                is_active: true,
                created_by: created_by.map(ToString::to_string),
            });
        }

        Ok(inputs)
    }
}
