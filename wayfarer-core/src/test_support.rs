//! Deterministic fixtures shared by unit and behaviour tests.

use std::time::Duration;

use geo::Coord;

use crate::{
    DurationPolicy, PointOfInterest, PreferredTime, TravelTimeError, TravelTimeMatrix,
    TravelTimeProvider,
};

/// `TravelTimeProvider` returning the same edge for every distinct pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedTravelTime {
    edge: Duration,
}

impl FixedTravelTime {
    /// Every off-diagonal entry is `minutes` long.
    #[must_use]
    pub const fn minutes(minutes: u64) -> Self {
        Self {
            edge: Duration::from_secs(minutes.saturating_mul(60)),
        }
    }
}

impl TravelTimeProvider for FixedTravelTime {
    fn get_travel_time_matrix(
        &self,
        pois: &[PointOfInterest],
    ) -> Result<TravelTimeMatrix, TravelTimeError> {
        if pois.is_empty() {
            return Err(TravelTimeError::EmptyInput);
        }
        let n = pois.len();
        let mut matrix = vec![vec![self.edge; n]; n];
        for (i, row) in matrix.iter_mut().enumerate() {
            if let Some(cell) = row.get_mut(i) {
                *cell = Duration::ZERO;
            }
        }
        Ok(matrix)
    }
}

/// `TravelTimeProvider` that always fails, for error-path tests.
#[derive(Debug, Default, Copy, Clone)]
pub struct FailingTravelTime;

impl TravelTimeProvider for FailingTravelTime {
    fn get_travel_time_matrix(
        &self,
        _pois: &[PointOfInterest],
    ) -> Result<TravelTimeMatrix, TravelTimeError> {
        Err(TravelTimeError::EmptyInput)
    }
}

/// `DurationPolicy` booking the same number of hours for every point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedDuration(pub f64);

impl DurationPolicy for FixedDuration {
    fn display_duration_hours(&self, _poi: &PointOfInterest) -> f64 {
        self.0
    }
}

/// A point at `(lon, lat)` with default metadata.
#[must_use]
pub const fn poi_at(id: u64, lon: f64, lat: f64) -> PointOfInterest {
    PointOfInterest::new(id, Coord { x: lon, y: lat })
}

/// A point with a preferred time, placed at the origin.
#[must_use]
pub const fn poi_preferring(id: u64, preferred_time: PreferredTime) -> PointOfInterest {
    PointOfInterest::new(id, Coord { x: 0.0, y: 0.0 }).with_preferred_time(preferred_time)
}

/// `count` points spread along a line east of a city centre.
///
/// Identifiers start at one. Every third point prefers the morning, every
/// fifth the evening. City-centre distance grows with the identifier.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "small fixture indices convert exactly"
)]
pub fn sample_city(count: u64) -> Vec<PointOfInterest> {
    (1..=count)
        .map(|id| {
            let offset = id as f64 * 0.01;
            let preferred = if id.rem_euclid(3) == 0 {
                PreferredTime::Morning
            } else if id.rem_euclid(5) == 0 {
                PreferredTime::Evening
            } else {
                PreferredTime::Anytime
            };
            poi_at(id, 77.2 + offset, 28.6)
                .with_name(format!("Stop {id}"))
                .with_city_centre_distance_km(offset * 100.0)
                .with_preferred_time(preferred)
        })
        .collect()
}
