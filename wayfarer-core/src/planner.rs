//! Planning requests, their validation and the [`Planner`] trait.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{LodgingReference, PointOfInterest, TravelTimeError, TripItinerary};

/// Parameters for a planning request.
///
/// The request captures the selected points, the traveller's lodging, the
/// first calendar day and the number of days to fill.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use wayfarer_core::{LodgingReference, PlanRequest, PointOfInterest};
///
/// let request = PlanRequest {
///     points: vec![PointOfInterest::new(1, Coord { x: 77.2, y: 28.6 })],
///     lodging: LodgingReference::default(),
///     start_date: NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date"),
///     day_count: 2,
/// };
/// assert!(request.validate().is_ok());
/// assert_eq!(request.day_dates().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanRequest {
    /// Selected points of interest. Identifiers must be unique.
    #[cfg_attr(feature = "serde", serde(default))]
    pub points: Vec<PointOfInterest>,
    /// The traveller's base.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lodging: LodgingReference,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Number of days to plan; must be at least one.
    pub day_count: u16,
}

/// Reasons a [`PlanRequest`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanRequestValidationError {
    /// The trip has no days.
    #[error("day_count must be at least 1")]
    ZeroDays,
    /// Two points share an identifier.
    #[error("point {id} appears more than once")]
    DuplicatePoint {
        /// The repeated identifier.
        id: u64,
    },
    /// The last day of the trip is not a representable date.
    #[error("trip of {day_count} days from {start_date} runs past the calendar")]
    DateOutOfRange {
        /// First day of the trip.
        start_date: NaiveDate,
        /// Requested length.
        day_count: u16,
    },
}

impl PlanRequest {
    /// Check the request before planning.
    ///
    /// # Errors
    ///
    /// Returns [`PlanRequestValidationError::ZeroDays`] when `day_count` is
    /// zero, [`PlanRequestValidationError::DuplicatePoint`] when an identifier
    /// repeats and [`PlanRequestValidationError::DateOutOfRange`] when the
    /// last date overflows.
    pub fn validate(&self) -> Result<(), PlanRequestValidationError> {
        if self.day_count == 0 {
            return Err(PlanRequestValidationError::ZeroDays);
        }
        let mut seen = HashSet::with_capacity(self.points.len());
        if let Some(repeat) = self.points.iter().find(|poi| !seen.insert(poi.id)) {
            return Err(PlanRequestValidationError::DuplicatePoint { id: repeat.id });
        }
        let last_offset = u64::from(self.day_count.saturating_sub(1));
        if self
            .start_date
            .checked_add_days(Days::new(last_offset))
            .is_none()
        {
            return Err(PlanRequestValidationError::DateOutOfRange {
                start_date: self.start_date,
                day_count: self.day_count,
            });
        }
        Ok(())
    }

    /// Calendar dates of the trip in order.
    ///
    /// Dates past the end of the calendar are skipped; [`Self::validate`]
    /// rejects such requests.
    pub fn day_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..u64::from(self.day_count))
            .map_while(|offset| self.start_date.checked_add_days(Days::new(offset)))
    }
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Request parameters were invalid, e.g. zero days.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] PlanRequestValidationError),
    /// The travel-time provider failed for a day's route.
    #[error("travel times unavailable: {0}")]
    TravelTime(#[from] TravelTimeError),
}

/// Turn a request into a day-by-day itinerary.
///
/// Implementations should return [`PlanError::InvalidRequest`] for invalid
/// parameters rather than panicking. Over-dense days are not errors: they are
/// reported through [`crate::DayOutcome::Partial`].
/// Planners must be `Send + Sync` so a UI can plan off its main thread.
pub trait Planner: Send + Sync {
    /// Plan a request, producing an itinerary or an error.
    fn plan(&self, request: &PlanRequest) -> Result<TripItinerary, PlanError>;
}
