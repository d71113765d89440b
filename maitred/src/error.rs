//! Error types for the maitred library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the maitred library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::slot::TimeOfDay;

/// Result type alias for operations that may fail with a maitred error.
///
/// # Examples
///
/// ```
/// use maitred::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the maitred library.
///
/// This enum encompasses all possible error conditions that can occur
/// during reservation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced record (restaurant, table, or reservation) was absent.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A requested slot falls outside the establishment's operating hours.
    #[error("outside operating hours {opening}-{closing}")]
    OutOfHours {
        /// The configured opening time.
        opening: TimeOfDay,
        /// The configured closing time.
        closing: TimeOfDay,
    },

    /// A requested duration exceeds an applicable peak-hour rule.
    #[error("peak limit ({window_start}-{window_end}): {max_minutes}m")]
    PeakLimitExceeded {
        /// Start of the peak window the request landed in.
        window_start: TimeOfDay,
        /// End of the peak window the request landed in.
        window_end: TimeOfDay,
        /// The maximum duration in minutes that window allows.
        max_minutes: u32,
    },

    /// No viable table exists for the exact request, or a write lost a
    /// race at commit time.
    #[error("reservation conflict: {details}")]
    Conflict {
        /// Details about the conflict.
        details: String,
    },

    /// A storage-level invariant was violated (duplicate table number,
    /// second configuration row, table ceiling reached).
    #[error("invariant violation: {details}")]
    InvariantViolation {
        /// Details about the violation.
        details: String,
    },

    /// A field-level validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

// Additional conversions for better ergonomics

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::slot::InvalidTimeOfDayError> for Error {
    fn from(err: crate::slot::InvalidTimeOfDayError) -> Self {
        Self::Validation {
            field: "time_of_day".into(),
            message: format!("{}: {}", err.value, err.reason),
        }
    }
}

impl From<crate::slot::InvalidSlotError> for Error {
    fn from(err: crate::slot::InvalidSlotError) -> Self {
        Self::Validation {
            field: "slot".into(),
            message: err.reason,
        }
    }
}

impl Error {
    /// Check if the error indicates a missing record.
    ///
    /// # Examples
    ///
    /// ```
    /// use maitred::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation 7".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is a reservation conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use maitred::Error;
    ///
    /// let err = Error::Conflict { details: "no table free".into() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Check if the error is a constraint failure (hours or peak rules).
    #[must_use]
    pub fn is_constraint_failure(&self) -> bool {
        matches!(
            self,
            Self::OutOfHours { .. } | Self::PeakLimitExceeded { .. }
        )
    }
}
