//! Holiday model and query types.
//!
//! This module defines the [`Holiday`] record stored in the holiday store,
//! along with the input and filter types used by the holiday calendar.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The legal category of a holiday.
///
/// # Example
///
/// ```
/// use timebank_engine::models::HolidayType;
///
/// let kind = HolidayType::National;
/// assert_eq!(format!("{:?}", kind), "National");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// Holiday observed nationwide by law.
    National,
    /// Optional observance ("ponto facultativo"), e.g. Carnival.
    Optional,
    /// Holiday declared by a state.
    State,
    /// Holiday declared by a municipality.
    Municipal,
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayType::National => write!(f, "national"),
            HolidayType::Optional => write!(f, "optional"),
            HolidayType::State => write!(f, "state"),
            HolidayType::Municipal => write!(f, "municipal"),
        }
    }
}

/// A holiday record as stored in the holiday store.
///
/// The `date` is always a wall-clock date normalized to midnight in the
/// engine's reference timezone; time-of-day is never meaningful. For
/// recurring holidays only the month and day-of-month are meaningful and
/// the stored year is a carrier value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique identifier.
    pub id: Uuid,
    /// Holiday name; (date, name) is unique among stored holidays.
    pub name: String,
    /// Normalized calendar date.
    pub date: NaiveDate,
    /// Legal category.
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    /// Whether the holiday repeats every year on the same month and day.
    pub is_recurring: bool,
    /// Two-letter state code; `None` means the holiday applies nationwide.
    pub state: Option<String>,
    /// City name, informational only — never used in matching.
    pub city: Option<String>,
    /// Inactive holidays are excluded from every query.
    pub is_active: bool,
    /// Identifier of the user that created the record, when known.
    pub created_by: Option<String>,
}

impl Holiday {
    /// Checks whether this holiday, treated as recurring, falls on the
    /// given date's month and day-of-month (year is ignored).
    pub fn recurs_on(&self, date: NaiveDate) -> bool {
        self.date.month() == date.month() && self.date.day() == date.day()
    }

    /// Resolves this recurring holiday to its occurrence in `year`.
    ///
    /// Returns `None` for dates that do not exist in the target year
    /// (a Feb 29 recurring row projected into a non-leap year).
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
    }
}

/// Input for creating a holiday (or fully replacing one on update).
///
/// The date here is whatever the caller has — a `YYYY-MM-DD` string, an
/// absolute instant, or an already-normalized date; the holiday calendar
/// normalizes it through the engine clock before persisting.
#[derive(Debug, Clone)]
pub struct NewHoliday {
    /// Holiday name.
    pub name: String,
    /// Date input, normalized on create/update.
    pub date: crate::calendar::DateInput,
    /// Legal category.
    pub holiday_type: HolidayType,
    /// Whether the holiday repeats every year.
    pub is_recurring: bool,
    /// State scope; `None` means nationwide.
    pub state: Option<String>,
    /// Informational city name.
    pub city: Option<String>,
    /// Whether the holiday participates in queries. Defaults to `true`.
    pub is_active: bool,
    /// Acting user, when known.
    pub created_by: Option<String>,
}

impl NewHoliday {
    /// Creates a new holiday input with the common defaults:
    /// non-recurring, nationwide, active, no city, no creator.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<crate::calendar::DateInput>,
        holiday_type: HolidayType,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            holiday_type,
            is_recurring: false,
            state: None,
            city: None,
            is_active: true,
            created_by: None,
        }
    }

    /// Marks the holiday as recurring every year.
    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }

    /// Scopes the holiday to a two-letter state code.
    pub fn for_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// State scoping for holiday list queries.
///
/// Point queries (`is_holiday`, `get_holiday_by_date`) use an
/// `Option<&str>` where `None` means "nationwide holidays only"; list
/// queries use this explicit tri-state so that "no state filtering" and
/// "nationwide only" are distinct at the type level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateScope {
    /// No state filtering: holidays of every scope match.
    #[default]
    Any,
    /// Only nationwide holidays (no state code) match.
    Nationwide,
    /// Nationwide holidays and holidays scoped to this state match.
    State(String),
}

impl StateScope {
    /// Builds the scope used by point queries: `Some(uf)` matches
    /// nationwide-or-that-state, `None` matches nationwide only.
    pub fn from_query(state: Option<&str>) -> Self {
        match state {
            Some(uf) => StateScope::State(uf.to_string()),
            None => StateScope::Nationwide,
        }
    }

    /// Checks whether a holiday's state field satisfies this scope.
    pub fn matches(&self, holiday_state: Option<&str>) -> bool {
        match self {
            StateScope::Any => true,
            StateScope::Nationwide => holiday_state.is_none(),
            StateScope::State(uf) => {
                holiday_state.is_none() || holiday_state == Some(uf.as_str())
            }
        }
    }
}

/// Fully-enumerated filter for holiday list queries.
///
/// Every supported filter combination is visible here; absent fields do
/// not constrain the result.
#[derive(Debug, Clone, Default)]
pub struct HolidayFilter {
    /// Restrict to holidays whose stored date falls in this year.
    pub year: Option<i32>,
    /// Restrict to holidays whose stored date falls in this month (1-12).
    pub month: Option<u32>,
    /// Restrict to one legal category.
    pub holiday_type: Option<HolidayType>,
    /// Restrict to an exact city name.
    pub city: Option<String>,
    /// Restrict by active flag.
    pub is_active: Option<bool>,
    /// Restrict by recurring flag.
    pub is_recurring: Option<bool>,
    /// State scoping (see [`StateScope`]).
    pub scope: StateScope,
}

impl HolidayFilter {
    /// Checks whether a holiday satisfies every populated filter field.
    pub fn matches(&self, holiday: &Holiday) -> bool {
        if let Some(year) = self.year {
            if holiday.date.year() != year {
                return false;
            }
        }
        if let Some(month) = self.month {
            if holiday.date.month() != month {
                return false;
            }
        }
        if let Some(kind) = self.holiday_type {
            if holiday.holiday_type != kind {
                return false;
            }
        }
        if let Some(city) = &self.city {
            if holiday.city.as_deref() != Some(city.as_str()) {
                return false;
            }
        }
        if let Some(active) = self.is_active {
            if holiday.is_active != active {
                return false;
            }
        }
        if let Some(recurring) = self.is_recurring {
            if holiday.is_recurring != recurring {
                return false;
            }
        }
        self.scope.matches(holiday.state.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn sample_holiday() -> Holiday {
        Holiday {
            id: Uuid::new_v4(),
            name: "Proclamação da República".to_string(),
            date: make_date("2020-11-15"),
            holiday_type: HolidayType::National,
            is_recurring: true,
            state: None,
            city: None,
            is_active: true,
            created_by: None,
        }
    }

    #[test]
    fn test_recurs_on_ignores_year() {
        let holiday = sample_holiday();
        assert!(holiday.recurs_on(make_date("2024-11-15")));
        assert!(holiday.recurs_on(make_date("1999-11-15")));
        assert!(!holiday.recurs_on(make_date("2024-11-16")));
        assert!(!holiday.recurs_on(make_date("2024-12-15")));
    }

    #[test]
    fn test_occurrence_in_target_year() {
        let holiday = sample_holiday();
        assert_eq!(holiday.occurrence_in(2026), Some(make_date("2026-11-15")));
    }

    #[test]
    fn test_occurrence_in_handles_feb_29() {
        let mut holiday = sample_holiday();
        holiday.date = make_date("2024-02-29");
        assert_eq!(holiday.occurrence_in(2028), Some(make_date("2028-02-29")));
        assert_eq!(holiday.occurrence_in(2025), None);
    }

    #[test]
    fn test_scope_any_matches_everything() {
        assert!(StateScope::Any.matches(None));
        assert!(StateScope::Any.matches(Some("DF")));
    }

    #[test]
    fn test_scope_nationwide_rejects_state_scoped() {
        assert!(StateScope::Nationwide.matches(None));
        assert!(!StateScope::Nationwide.matches(Some("DF")));
    }

    #[test]
    fn test_scope_state_uses_null_or_equal_rule() {
        let scope = StateScope::State("DF".to_string());
        assert!(scope.matches(None));
        assert!(scope.matches(Some("DF")));
        assert!(!scope.matches(Some("GO")));
    }

    #[test]
    fn test_scope_from_query() {
        assert_eq!(StateScope::from_query(None), StateScope::Nationwide);
        assert_eq!(
            StateScope::from_query(Some("SP")),
            StateScope::State("SP".to_string())
        );
    }

    #[test]
    fn test_filter_by_year_and_month() {
        let holiday = sample_holiday();
        let filter = HolidayFilter {
            year: Some(2020),
            month: Some(11),
            ..Default::default()
        };
        assert!(filter.matches(&holiday));

        let wrong_year = HolidayFilter {
            year: Some(2021),
            ..Default::default()
        };
        assert!(!wrong_year.matches(&holiday));
    }

    #[test]
    fn test_filter_by_type_and_flags() {
        let holiday = sample_holiday();
        let filter = HolidayFilter {
            holiday_type: Some(HolidayType::National),
            is_active: Some(true),
            is_recurring: Some(true),
            ..Default::default()
        };
        assert!(filter.matches(&holiday));

        let optional_only = HolidayFilter {
            holiday_type: Some(HolidayType::Optional),
            ..Default::default()
        };
        assert!(!optional_only.matches(&holiday));
    }

    #[test]
    fn test_filter_by_city() {
        let mut holiday = sample_holiday();
        holiday.city = Some("Goiânia".to_string());
        let filter = HolidayFilter {
            city: Some("Goiânia".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&holiday));

        let other_city = HolidayFilter {
            city: Some("Anápolis".to_string()),
            ..Default::default()
        };
        assert!(!other_city.matches(&holiday));
    }

    #[test]
    fn test_filter_default_matches_everything() {
        assert!(HolidayFilter::default().matches(&sample_holiday()));
    }

    #[test]
    fn test_holiday_type_serialization() {
        let json = serde_json::to_string(&HolidayType::Optional).unwrap();
        assert_eq!(json, "\"optional\"");
        let deserialized: HolidayType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, HolidayType::Optional);
    }

    #[test]
    fn test_holiday_serialization_uses_type_field() {
        let holiday = sample_holiday();
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"type\":\"national\""));
        assert!(json.contains("\"date\":\"2020-11-15\""));

        let deserialized: Holiday = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, holiday);
    }

    #[test]
    fn test_new_holiday_defaults() {
        let input = NewHoliday::new("Natal", make_date("2024-12-25"), HolidayType::National);
        assert!(input.is_active);
        assert!(!input.is_recurring);
        assert!(input.state.is_none());
        assert!(input.city.is_none());
    }

    #[test]
    fn test_new_holiday_builders() {
        let input = NewHoliday::new("Fundação de Brasília", make_date("2024-04-21"), HolidayType::State)
            .recurring()
            .for_state("DF");
        assert!(input.is_recurring);
        assert_eq!(input.state.as_deref(), Some("DF"));
    }
}
