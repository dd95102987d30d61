//! Error types for the work-time and overtime engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during holiday resolution and
//! overtime calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timebank_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     input: "2024-13-40".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date: '2024-13-40'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date-like input could not be parsed.
    ///
    /// The engine never coerces an unparseable date to "today" or any other
    /// default; parse failures surface as this variant.
    #[error("Invalid date: '{input}'")]
    InvalidDate {
        /// The input that failed to parse.
        input: String,
    },

    /// A range query was made with the end date before the start date.
    #[error("Invalid range: end date {end} is before start date {start}")]
    InvalidRange {
        /// The start of the requested range.
        start: NaiveDate,
        /// The end of the requested range.
        end: NaiveDate,
    },

    /// A holiday with the same (date, name) pair already exists.
    ///
    /// Bulk-seeding callers treat this variant as "already exists, skip"
    /// and continue with the remaining items.
    #[error("Holiday '{name}' already exists on {date}")]
    DuplicateHoliday {
        /// The name of the conflicting holiday.
        name: String,
        /// The normalized date of the conflicting holiday.
        date: NaiveDate,
    },

    /// No holiday exists with the given identifier.
    #[error("Holiday not found: {id}")]
    HolidayNotFound {
        /// The identifier that was not found.
        id: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was not found.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An external store (holiday or punch store) failed.
    #[error("Store error: {message}")]
    StoreError {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
