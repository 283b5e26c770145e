//! Error types for the Itinera date engine

use chrono::NaiveDate;
use thiserror::Error;

/// Main validator error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// An interval whose start date falls after its end date.
    ///
    /// Raised for trips and candidate ranges alike. Intervals are never
    /// silently swapped: a reversed interval is a caller bug that must
    /// stay visible.
    #[error("invalid interval for {label}: start {start} is after end {end}")]
    InvalidInterval {
        /// What the interval belongs to ("candidate range", a trip label, ...)
        label: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Result type alias for validator operations
pub type ValidatorResult<T> = Result<T, ValidatorError>;
