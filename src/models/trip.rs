//! Trip model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::date_range::DateRange;
use crate::error::ValidatorResult;

/// A travel interval owned by the surrounding application
///
/// The engine only ever reads trips; creating, editing and persisting
/// them is the host's business. Dates are timezone-free calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Opaque unique identifier
    pub id: String,
    /// Destination label, used only in conflict reporting
    pub country: String,
    /// First day of the trip
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive)
    pub end_date: NaiveDate,
}

impl Trip {
    pub fn new(
        id: impl Into<String>,
        country: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            country: country.into(),
            start_date,
            end_date,
        }
    }

    /// Build a trip from UTC timestamps, stripping the time of day.
    ///
    /// This is the only timestamp entry point; everything past it works
    /// on calendar days, so midnight boundaries cannot shift a trip by
    /// a day.
    pub fn from_timestamps(
        id: impl Into<String>,
        country: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self::new(id, country, start.date_naive(), end.date_naive())
    }

    /// The trip's interval as a range value
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Whether the trip covers `date`
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.date_range().contains(date)
    }

    pub(crate) fn check_well_formed(&self) -> ValidatorResult<()> {
        self.date_range()
            .check_well_formed(&format!("trip {} ({})", self.id, self.country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_timestamps_strips_time() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 23, 45, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 10, 0, 5, 0).unwrap();
        let trip = Trip::from_timestamps("t1", "France", start, end);
        assert_eq!(trip.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(trip.end_date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_deserialization() {
        let json = r#"
            {
                "id": "t1",
                "country": "Germany",
                "start_date": "2024-06-01",
                "end_date": "2024-06-14"
            }
        "#;
        let trip: Trip = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(trip.country, "Germany");
        assert_eq!(trip.date_range().duration_days(), 14);
    }
}
