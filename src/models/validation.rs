//! Validation verdict and conflict details

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One overlapping trip in a validation verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateConflict {
    /// Identifier of the conflicting trip
    pub trip_id: String,
    /// Destination label of the conflicting trip
    pub country: String,
    /// First shared day
    pub overlap_start: NaiveDate,
    /// Last shared day (inclusive)
    pub overlap_end: NaiveDate,
    /// Inclusive count of shared days
    pub overlap_days: i64,
}

/// Outcome of validating a candidate range against existing trips
///
/// A derived value, recomputed on every query. `is_valid` and the
/// conflict list are the contract; `message` is display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff the candidate shares no day with any trip
    pub is_valid: bool,
    /// Human-readable summary of the verdict
    pub message: String,
    /// One record per overlapping trip, in trip input order
    pub conflicts: Vec<DateConflict>,
}
