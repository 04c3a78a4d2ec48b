//! Core domain types for the Wayfarer itinerary engine.
//!
//! The crate models the inputs (points of interest, lodging) and outputs
//! (time slots, day schedules, trip itineraries) of itinerary planning, along
//! with the leaf policies the planner builds on: great-circle metrics, the
//! display-duration policy and the travel-time provider seam.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod advisory;
pub mod duration;
pub mod geo_metrics;
pub mod planner;
pub mod poi;
pub mod preference;
pub mod schedule;
pub mod time;
pub mod travel_time;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use advisory::{crowd_advisory, is_peak_hour};
pub use duration::{DensityDurationPolicy, DurationPolicy};
pub use geo_metrics::{TravelEstimate, TravelMode, TravelOptions};
pub use planner::{PlanError, PlanRequest, PlanRequestValidationError, Planner};
pub use poi::{LodgingReference, PointOfInterest};
pub use preference::{CrowdLevel, PreferredTime};
pub use schedule::{
    DayOutcome, DaySchedule, PartialSchedule, ScheduleConflict, ScheduledVisit, TripItinerary,
};
pub use time::{QUARTER_HOUR, TimeOfDay, TimeSlot, TimeSlotError};
pub use travel_time::{
    HaversineTravelTime, TravelTimeError, TravelTimeMatrix, TravelTimeProvider, minutes_between,
};
