//! Benchmark support utilities for the itinerary planner.
//!
//! Provides deterministic, clustered point sets around a city centre so that
//! benchmark runs are reproducible.

use chrono::NaiveDate;
use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wayfarer_core::{LodgingReference, PlanRequest, PointOfInterest, PreferredTime};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// City centre the clusters are scattered around.
const CITY_CENTRE: Coord<f64> = Coord { x: 77.21, y: 28.61 };

/// Number of cluster centres, such as old town, riverside and museum quarter.
const CLUSTER_COUNT: usize = 5;

/// Half-width of a cluster in degrees, roughly 500 m.
const CLUSTER_SPREAD: f64 = 0.005;

/// Half-width of the area holding cluster centres in degrees, roughly 10 km.
const AREA_SPREAD: f64 = 0.1;

const PREFERENCES: [PreferredTime; 4] = [
    PreferredTime::Morning,
    PreferredTime::Afternoon,
    PreferredTime::Evening,
    PreferredTime::Anytime,
];

/// Generate `count` points spread over a handful of clusters.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "coordinate offsets are floating-point sums"
)]
pub fn generate_clustered_points(count: usize, seed: u64) -> Vec<PointOfInterest> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let centres: Vec<Coord<f64>> = (0..CLUSTER_COUNT)
        .map(|_| Coord {
            x: CITY_CENTRE.x + rng.gen_range(-AREA_SPREAD..AREA_SPREAD),
            y: CITY_CENTRE.y + rng.gen_range(-AREA_SPREAD..AREA_SPREAD),
        })
        .collect();

    (0..count)
        .zip(1_u64..)
        .map(|(index, id)| {
            let centre = centres
                .get(index.rem_euclid(CLUSTER_COUNT))
                .copied()
                .unwrap_or(CITY_CENTRE);
            let location = Coord {
                x: centre.x + rng.gen_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
                y: centre.y + rng.gen_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
            };
            let preference = PREFERENCES
                .get(index.rem_euclid(PREFERENCES.len()))
                .copied()
                .unwrap_or_default();
            PointOfInterest::new(id, location)
                .with_city_centre_distance_km(rng.gen_range(0.0..12.0))
                .with_nominal_duration_hours(rng.gen_range(0.5..3.0))
                .with_preferred_time(preference)
        })
        .collect()
}

/// Build a plan request for `points` over `day_count` days.
#[must_use]
pub fn benchmark_request(points: Vec<PointOfInterest>, day_count: u16) -> PlanRequest {
    PlanRequest {
        points,
        lodging: LodgingReference::new(CITY_CENTRE, 0.0),
        start_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap_or_default(),
        day_count,
    }
}
