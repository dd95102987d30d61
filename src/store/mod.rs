//! External store seams.
//!
//! The engine is a library: holidays, punch events, and employee profiles
//! live in stores it does not own. These traits describe exactly the
//! query shapes the engine needs; `memory` provides in-process
//! implementations used in tests and as a default backend.

mod memory;

pub use memory::{InMemoryEmployeeDirectory, InMemoryHolidayStore, InMemoryPunchStore};

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{EmployeeProfile, Holiday, RawPunchEvent};

/// Read/write access to holiday rows.
///
/// Implementations must enforce the (date, name) uniqueness invariant at
/// the storage layer — the insert itself, not a separate pre-check — so
/// concurrent creates for the same pair surface as
/// [`crate::error::EngineError::DuplicateHoliday`] rather than a generic
/// failure.
pub trait HolidayStore: Send + Sync {
    /// Inserts a holiday row. Fails with `DuplicateHoliday` when an
    /// active or inactive row already carries the same (date, name).
    fn insert(&self, holiday: Holiday) -> EngineResult<Holiday>;

    /// Fetches a row by id; absence is not an error.
    fn get(&self, id: Uuid) -> EngineResult<Option<Holiday>>;

    /// Returns every stored row, active and inactive.
    fn all(&self) -> EngineResult<Vec<Holiday>>;

    /// Active rows whose stored date equals `date` exactly.
    fn find_active_on(&self, date: NaiveDate) -> EngineResult<Vec<Holiday>>;

    /// Every active row flagged recurring, for month/day scans.
    fn find_active_recurring(&self) -> EngineResult<Vec<Holiday>>;

    /// Active rows whose stored date falls in `[start, end]` inclusive.
    fn find_in_range(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<Holiday>>;

    /// Replaces an existing row, keeping its id. Fails with
    /// `HolidayNotFound` when the id is unknown and with
    /// `DuplicateHoliday` when the new (date, name) collides with a
    /// different row.
    fn replace(&self, holiday: Holiday) -> EngineResult<Holiday>;

    /// Hard-deletes a row. Fails with `HolidayNotFound` when unknown.
    fn remove(&self, id: Uuid) -> EngineResult<()>;
}

/// Read access to raw punch events.
pub trait PunchStore: Send + Sync {
    /// Valid punch events for one employee with timestamps in
    /// `[start, end)`, sorted ascending. Invalid events are never
    /// returned.
    fn events_in_range(
        &self,
        employee_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Vec<RawPunchEvent>>;
}

/// Read access to employee compensation and work-hub data.
pub trait EmployeeDirectory: Send + Sync {
    /// Resolves an employee id to its profile. Fails with
    /// `EmployeeNotFound` for unknown ids.
    fn profile(&self, employee_id: &str) -> EngineResult<EmployeeProfile>;
}
