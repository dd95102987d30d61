//! Raw punch event model.
//!
//! Punch events are produced by an external time-clock system and consumed
//! read-only by this engine. The engine only cares whether an event opens
//! or closes a worked interval; capture details (photos, geofencing) are
//! the time-clock's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of a punch event.
///
/// ENTRY / LUNCH_END / BREAK_END open a worked interval;
/// EXIT / LUNCH_START / BREAK_START close one. [`PunchType::Absence`]
/// marks a justified non-working day and never participates in pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchType {
    /// Start of the working day.
    Entry,
    /// End of the working day.
    Exit,
    /// Start of the lunch break (stops the worked interval).
    LunchStart,
    /// End of the lunch break (resumes work).
    LunchEnd,
    /// Start of a short break (stops the worked interval).
    BreakStart,
    /// End of a short break (resumes work).
    BreakEnd,
    /// Justified absence marker; contributes no worked time.
    Absence,
}

impl PunchType {
    /// Whether this event opens a worked interval.
    pub fn opens_interval(&self) -> bool {
        matches!(
            self,
            PunchType::Entry | PunchType::LunchEnd | PunchType::BreakEnd
        )
    }

    /// Whether this event closes a worked interval.
    pub fn closes_interval(&self) -> bool {
        matches!(
            self,
            PunchType::Exit | PunchType::LunchStart | PunchType::BreakStart
        )
    }
}

/// A raw punch event for one employee.
///
/// # Example
///
/// ```
/// use timebank_engine::models::{PunchType, RawPunchEvent};
/// use chrono::{TimeZone, Utc};
///
/// let event = RawPunchEvent {
///     employee_id: "emp_001".to_string(),
///     timestamp: Utc.with_ymd_and_hms(2024, 7, 2, 11, 0, 0).unwrap(),
///     punch_type: PunchType::Entry,
///     is_valid: true,
/// };
/// assert!(event.punch_type.opens_interval());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPunchEvent {
    /// The employee this event belongs to.
    pub employee_id: String,
    /// Absolute instant at which the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// The kind of event.
    #[serde(rename = "type")]
    pub punch_type: PunchType,
    /// Invalid events are excluded before pairing.
    pub is_valid: bool,
}
