//! Great-circle distance and mode-based travel estimates.
//!
//! All functions are pure. Coordinates follow the `geo` convention of
//! `x = longitude`, `y = latitude`, both in degrees.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time::{QUARTER_HOUR, round_minutes_to_quarter};

/// Mean Earth radius used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average door-to-door speed assumed by the scheduler.
pub const SCHEDULING_SPEED_KMH: f64 = 30.0;

/// Fixed allowance added to every scheduled transfer.
pub const TRANSFER_BUFFER_MINUTES: u32 = 30;

const WALK_SPEED_KMH: f64 = 5.0;
const TRANSIT_SPEED_KMH: f64 = 20.0;
const CAR_SPEED_KMH: f64 = 30.0;
const CAR_FARE_PER_KM: f64 = 12.0;
const TRANSIT_SHORT_FARE: u32 = 20;
const TRANSIT_LONG_FARE: u32 = 40;
const WALK_THRESHOLD_KM: f64 = 1.0;
const SHORT_HOP_THRESHOLD_KM: f64 = 5.0;

/// Haversine great-circle distance between two coordinates in kilometres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::geo_metrics::distance_km;
///
/// let here = Coord { x: 0.0, y: 0.0 };
/// assert_eq!(distance_km(here, here), 0.0);
/// let one_degree = distance_km(here, Coord { x: 0.0, y: 1.0 });
/// assert!((one_degree - 111.19).abs() < 0.01);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let half_chord = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_KM * angle
}

/// Whole minutes needed to cover `distance` at `speed_kmh`, rounded up.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "float-to-int `as` saturates and maps NaN to zero, which is the desired clamp"
)]
fn minutes_at_speed(distance: f64, speed_kmh: f64) -> u32 {
    (distance / speed_kmh * 60.0).ceil() as u32
}

/// Scheduled transfer time between two stops in minutes.
///
/// Assumes 30 km/h transit, adds a fixed 30-minute buffer, floors at 15 and
/// rounds to the nearest quarter hour. Identical points therefore still cost
/// 30 minutes.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::geo_metrics::travel_minutes;
///
/// let here = Coord { x: 0.0, y: 0.0 };
/// assert_eq!(travel_minutes(here, here), 30);
/// ```
#[must_use]
pub fn travel_minutes(a: Coord<f64>, b: Coord<f64>) -> u32 {
    let driving = minutes_at_speed(distance_km(a, b), SCHEDULING_SPEED_KMH);
    let padded = driving
        .saturating_add(TRANSFER_BUFFER_MINUTES)
        .max(QUARTER_HOUR);
    round_minutes_to_quarter(padded)
}

/// A way of getting between two stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// On foot at 5 km/h.
    Walk,
    /// Metro or bus at 20 km/h with a flat fare.
    Transit,
    /// Auto-rickshaw or taxi at 30 km/h, charged per kilometre.
    Car,
}

impl TravelMode {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Walk => "Walking",
            Self::Transit => "Metro/Bus",
            Self::Car => "Auto/Taxi",
        }
    }
}

/// Time and fare estimate for one travel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TravelEstimate {
    /// Mode being estimated.
    pub mode: TravelMode,
    /// Minutes on the 15-minute grid, at least 15.
    pub minutes: u32,
    /// Fare in local currency units.
    pub cost: u32,
}

/// Estimates for every mode plus a distance-based recommendation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TravelOptions {
    /// Great-circle distance in kilometres.
    pub distance_km: f64,
    /// Walking estimate.
    pub walk: TravelEstimate,
    /// Public transport estimate.
    pub transit: TravelEstimate,
    /// Taxi estimate.
    pub car: TravelEstimate,
    /// Suggested mode for the distance.
    pub recommended: TravelMode,
}

impl TravelOptions {
    /// Estimate for the recommended mode.
    #[must_use]
    pub const fn recommended_estimate(&self) -> TravelEstimate {
        match self.recommended {
            TravelMode::Walk => self.walk,
            TravelMode::Transit => self.transit,
            TravelMode::Car => self.car,
        }
    }

    /// One-line annotation such as `Walking (15 min, Free)`.
    #[must_use]
    pub fn summary(&self) -> String {
        let estimate = self.recommended_estimate();
        let fare = if estimate.cost == 0 {
            "Free".to_owned()
        } else {
            format!("₹{}", estimate.cost)
        };
        format!("{} ({} min, {fare})", estimate.mode.label(), estimate.minutes)
    }
}

fn estimate(mode: TravelMode, distance: f64, speed_kmh: f64, cost: u32) -> TravelEstimate {
    let minutes = round_minutes_to_quarter(minutes_at_speed(distance, speed_kmh)).max(QUARTER_HOUR);
    TravelEstimate {
        mode,
        minutes,
        cost,
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "fares are per-kilometre products rounded up to whole units"
)]
fn car_fare(distance: f64) -> u32 {
    (distance * CAR_FARE_PER_KM).ceil() as u32
}

/// Estimate walking, transit and taxi options between two points.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::geo_metrics::travel_options;
/// use wayfarer_core::TravelMode;
///
/// let here = Coord { x: 77.20, y: 28.60 };
/// let there = Coord { x: 77.20, y: 28.605 };
/// let options = travel_options(here, there);
/// assert_eq!(options.recommended, TravelMode::Walk);
/// assert_eq!(options.walk.cost, 0);
/// ```
#[must_use]
pub fn travel_options(a: Coord<f64>, b: Coord<f64>) -> TravelOptions {
    let distance = distance_km(a, b);
    let transit_fare = if distance < SHORT_HOP_THRESHOLD_KM {
        TRANSIT_SHORT_FARE
    } else {
        TRANSIT_LONG_FARE
    };
    let recommended = if distance < WALK_THRESHOLD_KM {
        TravelMode::Walk
    } else if distance < SHORT_HOP_THRESHOLD_KM {
        TravelMode::Car
    } else {
        TravelMode::Transit
    };

    TravelOptions {
        distance_km: distance,
        walk: estimate(TravelMode::Walk, distance, WALK_SPEED_KMH, 0),
        transit: estimate(TravelMode::Transit, distance, TRANSIT_SPEED_KMH, transit_fare),
        car: estimate(TravelMode::Car, distance, CAR_SPEED_KMH, car_fare(distance)),
        recommended,
    }
}
