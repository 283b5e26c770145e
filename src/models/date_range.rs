//! Inclusive calendar date range

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ValidatorError, ValidatorResult};

/// An inclusive range of calendar days
///
/// Both endpoints count: `2024-03-01..2024-03-01` spans one day. The
/// checked constructors reject reversed intervals, but the fields stay
/// public (and serde can populate them), so every engine operation
/// re-checks well-formedness at its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range
    pub start: NaiveDate,
    /// Last day of the range (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> ValidatorResult<Self> {
        let range = Self { start, end };
        range.check_well_formed("candidate range")?;
        Ok(range)
    }

    /// A single-day range
    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// Build a range spanning exactly `duration_days` days from `start`.
    ///
    /// Returns `None` when the duration is zero or the end date would
    /// overflow the calendar.
    pub fn with_duration(start: NaiveDate, duration_days: u32) -> Option<Self> {
        if duration_days == 0 {
            return None;
        }
        let end = start.checked_add_days(Days::new(u64::from(duration_days) - 1))?;
        Some(Self { start, end })
    }

    /// Inclusive day count spanned by the range
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `date` falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Day-level intersection with another range.
    ///
    /// The intersection of two inclusive intervals runs from the later
    /// start to the earlier end; it exists iff that is still a valid
    /// interval.
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start <= end {
            Some(DateRange { start, end })
        } else {
            None
        }
    }

    /// Iterate every calendar day in the range, both endpoints included
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |d| d.succ_opt())
            .take_while(move |d| *d <= end)
    }

    /// Boundary check shared by the engine operations
    pub(crate) fn check_well_formed(&self, label: &str) -> ValidatorResult<()> {
        if self.start > self.end {
            return Err(ValidatorError::InvalidInterval {
                label: label.to_string(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_reversed() {
        assert!(DateRange::new(date(2024, 3, 10), date(2024, 3, 1)).is_err());
        assert!(DateRange::new(date(2024, 3, 1), date(2024, 3, 1)).is_ok());
    }

    #[test]
    fn test_with_duration() {
        let range = DateRange::with_duration(date(2024, 3, 1), 7).unwrap();
        assert_eq!(range.end, date(2024, 3, 7));
        assert_eq!(range.duration_days(), 7);
        assert!(DateRange::with_duration(date(2024, 3, 1), 0).is_none());
    }

    #[test]
    fn test_single_day_duration() {
        assert_eq!(DateRange::single(date(2024, 3, 1)).duration_days(), 1);
    }

    #[test]
    fn test_days_inclusive() {
        let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 2)).unwrap();
        let days: Vec<_> = range.days().collect();
        // Leap year: Feb 29 exists
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1),
                date(2024, 3, 2),
            ]
        );
    }

    #[test]
    fn test_intersection_orderings() {
        let base = DateRange::new(date(2024, 1, 10), date(2024, 1, 20)).unwrap();

        // Disjoint before / after
        let before = DateRange::new(date(2024, 1, 1), date(2024, 1, 5)).unwrap();
        let after = DateRange::new(date(2024, 1, 25), date(2024, 1, 30)).unwrap();
        assert_eq!(base.intersection(&before), None);
        assert_eq!(base.intersection(&after), None);

        // Overlapping left / right
        let left = DateRange::new(date(2024, 1, 5), date(2024, 1, 12)).unwrap();
        assert_eq!(
            base.intersection(&left),
            Some(DateRange::new(date(2024, 1, 10), date(2024, 1, 12)).unwrap())
        );
        let right = DateRange::new(date(2024, 1, 18), date(2024, 1, 25)).unwrap();
        assert_eq!(
            base.intersection(&right),
            Some(DateRange::new(date(2024, 1, 18), date(2024, 1, 20)).unwrap())
        );

        // Containment both ways
        let inner = DateRange::new(date(2024, 1, 12), date(2024, 1, 15)).unwrap();
        assert_eq!(base.intersection(&inner), Some(inner));
        let outer = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert_eq!(base.intersection(&outer), Some(base));
    }

    #[test]
    fn test_adjacent_ranges_do_not_intersect() {
        let a = DateRange::new(date(2024, 1, 1), date(2024, 1, 5)).unwrap();
        let b = DateRange::new(date(2024, 1, 6), date(2024, 1, 10)).unwrap();
        assert_eq!(a.intersection(&b), None);
        assert_eq!(b.intersection(&a), None);
    }

    #[test]
    fn test_serde_shape() {
        let range = DateRange::new(date(2024, 3, 5), date(2024, 3, 7)).unwrap();
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["start"], "2024-03-05");
        assert_eq!(json["end"], "2024-03-07");
    }
}
