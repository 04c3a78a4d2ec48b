//! Proptest strategies and assertions for itinerary property tests.
//!
//! Generated points sit within a few kilometres of a city centre so that
//! transfer times stay realistic, carry unique identifiers and cover every
//! preferred time of day.

use std::collections::HashMap;

use chrono::NaiveDate;
use geo::Coord;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use wayfarer_core::{
    LodgingReference, PlanRequest, PointOfInterest, PreferredTime, TripItinerary,
};

/// First day of every generated trip.
#[must_use]
#[expect(clippy::expect_used, reason = "the date literal is valid")]
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

/// Strategy for a set of `min_count..=max_count` points with unique ids.
pub fn point_set_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Vec<PointOfInterest>> {
    proptest::collection::vec(point_strategy(), min_count..=max_count).prop_map(|points| {
        points
            .into_iter()
            .zip(1_u64..)
            .map(|(poi, id)| PointOfInterest { id, ..poi })
            .collect()
    })
}

fn point_strategy() -> impl Strategy<Value = PointOfInterest> {
    let preference = prop_oneof![
        Just(PreferredTime::Morning),
        Just(PreferredTime::Afternoon),
        Just(PreferredTime::Evening),
        Just(PreferredTime::Anytime),
    ];
    (
        77.15_f64..77.25_f64,
        28.55_f64..28.65_f64,
        0.0_f64..15.0_f64,
        0.5_f64..3.0_f64,
        preference,
    )
        .prop_map(|(lon, lat, centre_km, hours, preferred_time)| {
            PointOfInterest::new(0, Coord { x: lon, y: lat })
                .with_city_centre_distance_km(centre_km)
                .with_nominal_duration_hours(hours)
                .with_preferred_time(preferred_time)
        })
}

/// A request for `points` starting on [`start_date`].
#[must_use]
pub fn trip_request(points: Vec<PointOfInterest>, day_count: u16) -> PlanRequest {
    PlanRequest {
        points,
        lodging: LodgingReference::new(Coord { x: 77.2, y: 28.6 }, 0.0),
        start_date: start_date(),
        day_count,
    }
}

/// Assert that every requested point is either booked or reported, once.
///
/// # Errors
///
/// Returns an error naming the first point seen zero or several times.
pub fn assert_each_point_accounted_once(
    request: &PlanRequest,
    itinerary: &TripItinerary,
) -> Result<(), TestCaseError> {
    let mut seen: HashMap<u64, usize> = HashMap::new();
    let booked = itinerary.visits().map(|visit| visit.poi.id);
    let reported = itinerary.unscheduled().map(|poi| poi.id);
    for id in booked.chain(reported) {
        let count = seen.entry(id).or_insert(0);
        *count = count.saturating_add(1);
    }
    for poi in &request.points {
        let count = seen.get(&poi.id).copied().unwrap_or(0);
        prop_assert_eq!(count, 1, "point {} was accounted for {} times", poi.id, count);
    }
    prop_assert_eq!(seen.len(), request.points.len());
    Ok(())
}
