//! Worked-hours computation from raw punch events.
//!
//! Reconstructs worked intervals for one calendar day by pairing
//! interval-opening events (entry, lunch end, break end) with
//! interval-closing events (exit, lunch start, break start), then sums
//! their durations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RawPunchEvent;

/// A worked time span reconstructed from a punch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedInterval {
    /// Interval start (an opening punch).
    pub start: DateTime<Utc>,
    /// Interval end (the closing punch that followed).
    pub end: DateTime<Utc>,
}

impl WorkedInterval {
    /// The interval duration in hours.
    pub fn duration_hours(&self) -> Decimal {
        let minutes = (self.end - self.start).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }
}

/// Pairs one day's punch events into worked intervals.
///
/// Invalid events are discarded first and the rest sorted by timestamp.
/// The walk keeps one "open interval start" pointer: an opening event
/// sets (or overwrites) it, a closing event that follows an open pointer
/// emits an interval and clears it. A closing event with no open pointer
/// and a pointer still open at end of day contribute nothing — no
/// negative or speculative time is invented.
///
/// # Example
///
/// ```
/// use timebank_engine::calculation::pair_intervals;
/// use timebank_engine::models::{PunchType, RawPunchEvent};
/// use chrono::{TimeZone, Utc};
///
/// let punch = |hour, punch_type| RawPunchEvent {
///     employee_id: "emp_001".to_string(),
///     timestamp: Utc.with_ymd_and_hms(2024, 7, 2, hour, 0, 0).unwrap(),
///     punch_type,
///     is_valid: true,
/// };
///
/// let intervals = pair_intervals(&[
///     punch(11, PunchType::Entry),
///     punch(15, PunchType::LunchStart),
///     punch(16, PunchType::LunchEnd),
///     punch(21, PunchType::Exit),
/// ]);
/// assert_eq!(intervals.len(), 2);
/// ```
pub fn pair_intervals(events: &[RawPunchEvent]) -> Vec<WorkedInterval> {
    let mut valid: Vec<&RawPunchEvent> = events.iter().filter(|e| e.is_valid).collect();
    valid.sort_by_key(|e| e.timestamp);

    let mut intervals = Vec::new();
    let mut open: Option<DateTime<Utc>> = None;
    for event in valid {
        if event.punch_type.opens_interval() {
            open = Some(event.timestamp);
        } else if event.punch_type.closes_interval() {
            if let Some(start) = open.take() {
                intervals.push(WorkedInterval {
                    start,
                    end: event.timestamp,
                });
            }
        }
        // Absence markers fall through: neither open nor close.
    }
    intervals
}

/// Computes total worked hours for one day's punch events.
///
/// Zero is a valid result and signifies no pairable work.
pub fn compute_worked_hours(events: &[RawPunchEvent]) -> Decimal {
    pair_intervals(events)
        .iter()
        .map(WorkedInterval::duration_hours)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PunchType;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn punch(hour: u32, minute: u32, punch_type: PunchType) -> RawPunchEvent {
        RawPunchEvent {
            employee_id: "emp_001".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 7, 2, hour, minute, 0).unwrap(),
            punch_type,
            is_valid: true,
        }
    }

    // ==========================================================================
    // WH-001: full day with lunch
    // ==========================================================================
    #[test]
    fn test_wh_001_entry_lunch_exit() {
        let events = vec![
            punch(11, 0, PunchType::Entry),
            punch(15, 0, PunchType::LunchStart),
            punch(16, 0, PunchType::LunchEnd),
            punch(21, 0, PunchType::Exit),
        ];
        // 4h morning + 5h afternoon.
        assert_eq!(compute_worked_hours(&events), dec("9"));
    }

    // ==========================================================================
    // WH-002: events out of order are sorted before pairing
    // ==========================================================================
    #[test]
    fn test_wh_002_unsorted_events() {
        let events = vec![
            punch(21, 0, PunchType::Exit),
            punch(11, 0, PunchType::Entry),
            punch(16, 0, PunchType::LunchEnd),
            punch(15, 0, PunchType::LunchStart),
        ];
        assert_eq!(compute_worked_hours(&events), dec("9"));
    }

    // ==========================================================================
    // WH-003: invalid events are excluded
    // ==========================================================================
    #[test]
    fn test_wh_003_invalid_events_excluded() {
        let mut bogus_exit = punch(13, 0, PunchType::Exit);
        bogus_exit.is_valid = false;
        let events = vec![
            punch(11, 0, PunchType::Entry),
            bogus_exit,
            punch(19, 0, PunchType::Exit),
        ];
        assert_eq!(compute_worked_hours(&events), dec("8"));
    }

    // ==========================================================================
    // WH-004: dangling open pointer contributes nothing
    // ==========================================================================
    #[test]
    fn test_wh_004_missing_exit() {
        let events = vec![punch(11, 0, PunchType::Entry)];
        assert_eq!(compute_worked_hours(&events), Decimal::ZERO);
    }

    // ==========================================================================
    // WH-005: closing event with no open pointer contributes nothing
    // ==========================================================================
    #[test]
    fn test_wh_005_orphan_exit() {
        let events = vec![punch(19, 0, PunchType::Exit)];
        assert_eq!(compute_worked_hours(&events), Decimal::ZERO);
    }

    // ==========================================================================
    // WH-006: consecutive openings keep the latest
    // ==========================================================================
    #[test]
    fn test_wh_006_double_entry_overwrites_pointer() {
        let events = vec![
            punch(11, 0, PunchType::Entry),
            punch(12, 0, PunchType::Entry),
            punch(19, 0, PunchType::Exit),
        ];
        // The 12:00 entry overwrites the 11:00 one.
        assert_eq!(compute_worked_hours(&events), dec("7"));
    }

    #[test]
    fn test_no_events_is_zero() {
        assert_eq!(compute_worked_hours(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_absence_marker_contributes_nothing() {
        let events = vec![punch(11, 0, PunchType::Absence)];
        assert_eq!(compute_worked_hours(&events), Decimal::ZERO);
    }

    #[test]
    fn test_absence_between_pair_does_not_break_it() {
        let events = vec![
            punch(11, 0, PunchType::Entry),
            punch(14, 0, PunchType::Absence),
            punch(19, 0, PunchType::Exit),
        ];
        assert_eq!(compute_worked_hours(&events), dec("8"));
    }

    #[test]
    fn test_fractional_hours() {
        let events = vec![
            punch(11, 0, PunchType::Entry),
            punch(19, 45, PunchType::Exit),
        ];
        assert_eq!(compute_worked_hours(&events), dec("8.75"));
    }

    #[test]
    fn test_breaks_split_the_day_into_three_intervals() {
        let events = vec![
            punch(11, 0, PunchType::Entry),
            punch(13, 0, PunchType::BreakStart),
            punch(13, 15, PunchType::BreakEnd),
            punch(15, 0, PunchType::LunchStart),
            punch(16, 0, PunchType::LunchEnd),
            punch(20, 0, PunchType::Exit),
        ];
        let intervals = pair_intervals(&events);
        assert_eq!(intervals.len(), 3);
        // 2h + 1.75h + 4h.
        assert_eq!(compute_worked_hours(&events), dec("7.75"));
    }

    #[test]
    fn test_interval_endpoints() {
        let events = vec![
            punch(11, 0, PunchType::Entry),
            punch(19, 0, PunchType::Exit),
        ];
        let intervals = pair_intervals(&events);
        assert_eq!(intervals.len(), 1);
        assert_eq!(
            intervals[0].start,
            Utc.with_ymd_and_hms(2024, 7, 2, 11, 0, 0).unwrap()
        );
        assert_eq!(
            intervals[0].end,
            Utc.with_ymd_and_hms(2024, 7, 2, 19, 0, 0).unwrap()
        );
    }
}
