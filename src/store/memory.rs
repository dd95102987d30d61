//! In-memory store implementations.
//!
//! Used by the test suites and as a default backend for deployments that
//! load holidays from configuration at startup. The holiday store keeps
//! a unique (date, name) index inside its write lock, which is what makes
//! the duplicate check race-free under concurrent creates.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeProfile, Holiday, RawPunchEvent};

use super::{EmployeeDirectory, HolidayStore, PunchStore};

/// In-memory holiday store with a unique (date, name) index.
#[derive(Debug, Default)]
pub struct InMemoryHolidayStore {
    inner: RwLock<HolidayRows>,
}

#[derive(Debug, Default)]
struct HolidayRows {
    by_id: HashMap<Uuid, Holiday>,
    unique: HashSet<(NaiveDate, String)>,
}

impl InMemoryHolidayStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned() -> EngineError {
        EngineError::StoreError {
            message: "holiday store lock poisoned".to_string(),
        }
    }
}

impl HolidayStore for InMemoryHolidayStore {
    fn insert(&self, holiday: Holiday) -> EngineResult<Holiday> {
        let mut rows = self.inner.write().map_err(|_| Self::lock_poisoned())?;
        let key = (holiday.date, holiday.name.clone());
        if rows.unique.contains(&key) {
            return Err(EngineError::DuplicateHoliday {
                name: holiday.name,
                date: holiday.date,
            });
        }
        rows.unique.insert(key);
        rows.by_id.insert(holiday.id, holiday.clone());
        Ok(holiday)
    }

    fn get(&self, id: Uuid) -> EngineResult<Option<Holiday>> {
        let rows = self.inner.read().map_err(|_| Self::lock_poisoned())?;
        Ok(rows.by_id.get(&id).cloned())
    }

    fn all(&self) -> EngineResult<Vec<Holiday>> {
        let rows = self.inner.read().map_err(|_| Self::lock_poisoned())?;
        Ok(rows.by_id.values().cloned().collect())
    }

    fn find_active_on(&self, date: NaiveDate) -> EngineResult<Vec<Holiday>> {
        let rows = self.inner.read().map_err(|_| Self::lock_poisoned())?;
        Ok(rows
            .by_id
            .values()
            .filter(|h| h.is_active && h.date == date)
            .cloned()
            .collect())
    }

    fn find_active_recurring(&self) -> EngineResult<Vec<Holiday>> {
        let rows = self.inner.read().map_err(|_| Self::lock_poisoned())?;
        Ok(rows
            .by_id
            .values()
            .filter(|h| h.is_active && h.is_recurring)
            .cloned()
            .collect())
    }

    fn find_in_range(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<Holiday>> {
        let rows = self.inner.read().map_err(|_| Self::lock_poisoned())?;
        Ok(rows
            .by_id
            .values()
            .filter(|h| h.is_active && h.date >= start && h.date <= end)
            .cloned()
            .collect())
    }

    fn replace(&self, holiday: Holiday) -> EngineResult<Holiday> {
        let mut rows = self.inner.write().map_err(|_| Self::lock_poisoned())?;
        let previous = rows
            .by_id
            .get(&holiday.id)
            .cloned()
            .ok_or_else(|| EngineError::HolidayNotFound {
                id: holiday.id.to_string(),
            })?;

        let new_key = (holiday.date, holiday.name.clone());
        let old_key = (previous.date, previous.name.clone());
        if new_key != old_key && rows.unique.contains(&new_key) {
            return Err(EngineError::DuplicateHoliday {
                name: holiday.name,
                date: holiday.date,
            });
        }

        rows.unique.remove(&old_key);
        rows.unique.insert(new_key);
        rows.by_id.insert(holiday.id, holiday.clone());
        Ok(holiday)
    }

    fn remove(&self, id: Uuid) -> EngineResult<()> {
        let mut rows = self.inner.write().map_err(|_| Self::lock_poisoned())?;
        let removed = rows
            .by_id
            .remove(&id)
            .ok_or_else(|| EngineError::HolidayNotFound { id: id.to_string() })?;
        rows.unique.remove(&(removed.date, removed.name));
        Ok(())
    }
}

/// In-memory punch event store.
#[derive(Debug, Default)]
pub struct InMemoryPunchStore {
    events: RwLock<Vec<RawPunchEvent>>,
}

impl InMemoryPunchStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a punch event.
    pub fn record(&self, event: RawPunchEvent) -> EngineResult<()> {
        let mut events = self.events.write().map_err(|_| EngineError::StoreError {
            message: "punch store lock poisoned".to_string(),
        })?;
        events.push(event);
        Ok(())
    }
}

impl PunchStore for InMemoryPunchStore {
    fn events_in_range(
        &self,
        employee_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Vec<RawPunchEvent>> {
        let events = self.events.read().map_err(|_| EngineError::StoreError {
            message: "punch store lock poisoned".to_string(),
        })?;
        let mut matched: Vec<RawPunchEvent> = events
            .iter()
            .filter(|e| {
                e.is_valid
                    && e.employee_id == employee_id
                    && e.timestamp >= start
                    && e.timestamp < end
            })
            .cloned()
            .collect();
        matched.sort_by_key(|e| e.timestamp);
        Ok(matched)
    }
}

/// In-memory employee directory.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeDirectory {
    profiles: RwLock<HashMap<String, EmployeeProfile>>,
}

impl InMemoryEmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces a profile.
    pub fn upsert(&self, profile: EmployeeProfile) -> EngineResult<()> {
        let mut profiles = self.profiles.write().map_err(|_| EngineError::StoreError {
            message: "employee directory lock poisoned".to_string(),
        })?;
        profiles.insert(profile.id.clone(), profile);
        Ok(())
    }
}

impl EmployeeDirectory for InMemoryEmployeeDirectory {
    fn profile(&self, employee_id: &str) -> EngineResult<EmployeeProfile> {
        let profiles = self.profiles.read().map_err(|_| EngineError::StoreError {
            message: "employee directory lock poisoned".to_string(),
        })?;
        profiles
            .get(employee_id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })
    }
}
