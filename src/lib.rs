//! Facade crate for the Wayfarer itinerary engine.
//!
//! This crate re-exports the core domain types and exposes the default
//! planner behind the `planner` feature.
//!
//! # Examples
//! ```
//! # #[cfg(feature = "planner")]
//! # {
//! use chrono::NaiveDate;
//! use geo::Coord;
//! use wayfarer_engine::{ItineraryEngine, LodgingReference, PlanRequest, Planner, PointOfInterest};
//!
//! let request = PlanRequest {
//!     points: vec![PointOfInterest::new(1, Coord { x: 77.2, y: 28.6 })],
//!     lodging: LodgingReference::default(),
//!     start_date: NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date"),
//!     day_count: 1,
//! };
//! let itinerary = ItineraryEngine::with_defaults().plan(&request)?;
//! assert!(itinerary.is_complete());
//! # }
//! # Ok::<(), wayfarer_engine::PlanError>(())
//! ```

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    CrowdLevel, DayOutcome, DaySchedule, DensityDurationPolicy, DurationPolicy,
    HaversineTravelTime, LodgingReference, PartialSchedule, PlanError, PlanRequest,
    PlanRequestValidationError, Planner, PointOfInterest, PreferredTime, ScheduleConflict,
    ScheduledVisit, TimeOfDay, TimeSlot, TimeSlotError, TravelEstimate, TravelMode,
    TravelOptions, TravelTimeError, TravelTimeMatrix, TravelTimeProvider, TripItinerary,
    crowd_advisory, is_peak_hour,
};

#[cfg(feature = "planner")]
pub use wayfarer_planner::{AnchorStrategy, EngineConfig, ItineraryEngine, suggest_day_count};
