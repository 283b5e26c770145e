//! Date-overlap validation service

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::{
    config::ValidatorConfig,
    error::{ValidatorError, ValidatorResult},
    models::{DateConflict, DateRange, Trip, ValidationResult},
};

use super::suggestions;

/// Pure computation engine over caller-supplied trip intervals
///
/// Stateless apart from its configuration: every operation recomputes
/// from its arguments, so trip lists edited elsewhere in the application
/// can never leave stale results behind. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct DateOverlapValidator {
    config: ValidatorConfig,
}

impl DateOverlapValidator {
    /// Create a validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with the given configuration
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Every calendar day covered by any trip, endpoints inclusive.
    ///
    /// Enumerates day by day, which is O(total trip-days); fine for
    /// personal-travel volumes. Calendar views should prefer
    /// [`occupied_dates_in_window`](Self::occupied_dates_in_window).
    pub fn occupied_dates(&self, trips: &[Trip]) -> ValidatorResult<BTreeSet<NaiveDate>> {
        check_trips(trips)?;

        let mut occupied = BTreeSet::new();
        for trip in trips {
            occupied.extend(trip.date_range().days());
        }
        tracing::debug!(trips = trips.len(), days = occupied.len(), "expanded occupied dates");
        Ok(occupied)
    }

    /// Occupied days restricted to a calendar window.
    ///
    /// Each trip is clipped to the window before enumeration, so a
    /// month view pays for at most one month per trip regardless of
    /// how long the trip history is.
    pub fn occupied_dates_in_window(
        &self,
        window: &DateRange,
        trips: &[Trip],
    ) -> ValidatorResult<BTreeSet<NaiveDate>> {
        window.check_well_formed("calendar window")?;
        check_trips(trips)?;

        let mut occupied = BTreeSet::new();
        for trip in trips {
            if let Some(clipped) = trip.date_range().intersection(window) {
                occupied.extend(clipped.days());
            }
        }
        Ok(occupied)
    }

    /// Whether at least one trip covers `date`
    pub fn is_date_occupied(&self, date: NaiveDate, trips: &[Trip]) -> ValidatorResult<bool> {
        check_trips(trips)?;
        Ok(trips.iter().any(|trip| trip.contains(date)))
    }

    /// Every trip covering `date`, in input order
    pub fn trips_on_date<'a>(
        &self,
        date: NaiveDate,
        trips: &'a [Trip],
    ) -> ValidatorResult<Vec<&'a Trip>> {
        check_trips(trips)?;
        Ok(trips.iter().filter(|trip| trip.contains(date)).collect())
    }

    /// Validate a candidate range against existing trips.
    ///
    /// Uses interval arithmetic per trip (no day enumeration): the
    /// overlap runs from the later start to the earlier end and exists
    /// iff that interval is non-empty. One conflict record per
    /// overlapping trip, in trip input order.
    pub fn validate_date_range(
        &self,
        range: &DateRange,
        trips: &[Trip],
    ) -> ValidatorResult<ValidationResult> {
        range.check_well_formed("candidate range")?;
        check_trips(trips)?;

        let mut conflicts = Vec::new();
        for trip in trips {
            if let Some(overlap) = range.intersection(&trip.date_range()) {
                tracing::trace!(
                    trip_id = %trip.id,
                    country = %trip.country,
                    overlap_days = overlap.duration_days(),
                    "candidate range overlaps trip"
                );
                conflicts.push(DateConflict {
                    trip_id: trip.id.clone(),
                    country: trip.country.clone(),
                    overlap_start: overlap.start,
                    overlap_end: overlap.end,
                    overlap_days: overlap.duration_days(),
                });
            }
        }

        let is_valid = conflicts.is_empty();
        let message = if is_valid {
            "Selected dates are available".to_string()
        } else {
            format!("Selected dates overlap {} existing trip(s)", conflicts.len())
        };
        tracing::debug!(is_valid, conflicts = conflicts.len(), "validated date range");

        Ok(ValidationResult {
            is_valid,
            message,
            conflicts,
        })
    }

    /// Search for non-conflicting ranges of exactly `duration_days`
    /// days near the candidate's start date.
    ///
    /// Candidates are tried closest-first, alternating backward and
    /// forward in `search_step_days` strides, up to
    /// `search_horizon_days` away. The search always terminates and may
    /// return fewer results than requested (possibly none) when the
    /// horizon is exhausted. Identical inputs produce identical output
    /// order.
    pub fn suggest_alternative_dates(
        &self,
        range: &DateRange,
        duration_days: u32,
        trips: &[Trip],
        max_suggestions: Option<usize>,
    ) -> ValidatorResult<Vec<DateRange>> {
        range.check_well_formed("candidate range")?;
        check_trips(trips)?;
        if duration_days == 0 {
            // A zero-day request describes an interval that ends before
            // it starts; reject it like any other reversed interval.
            let end = range.start.pred_opt().unwrap_or(range.start);
            return Err(ValidatorError::InvalidInterval {
                label: "suggested range".to_string(),
                start: range.start,
                end,
            });
        }

        let max = max_suggestions.unwrap_or(self.config.max_suggestions);
        let mut found = Vec::new();
        for offset in
            suggestions::outward_offsets(self.config.search_horizon_days, self.config.search_step_days)
        {
            if found.len() >= max {
                break;
            }
            let Some(start) = range.start.checked_add_signed(Duration::days(offset)) else {
                continue;
            };
            let Some(candidate) = DateRange::with_duration(start, duration_days) else {
                continue;
            };
            if self.validate_date_range(&candidate, trips)?.is_valid {
                found.push(candidate);
            }
        }
        tracing::debug!(
            requested = max,
            found = found.len(),
            "alternative-date search finished"
        );
        Ok(found)
    }
}

fn check_trips(trips: &[Trip]) -> ValidatorResult<()> {
    trips.iter().try_for_each(Trip::check_well_formed)
}
