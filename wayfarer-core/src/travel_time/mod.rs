//! Travel times between consecutive stops.
//!
//! The `TravelTimeProvider` trait abstracts where pairwise travel times come
//! from. Callers supply a day's route of
//! [`PointOfInterest`](crate::PointOfInterest) values and receive an
//! adjacency matrix of [`Duration`](std::time::Duration) values. The default
//! [`HaversineTravelTime`] derives every entry from great-circle distance.
//!
//! Errors are returned when inputs are invalid, e.g. an empty slice.

mod error;
mod haversine;
mod provider;

pub use error::TravelTimeError;
pub use haversine::HaversineTravelTime;
pub use provider::{TravelTimeMatrix, TravelTimeProvider, minutes_between};
