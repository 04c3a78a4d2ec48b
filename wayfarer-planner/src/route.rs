//! Nearest-neighbour ordering of one day's stops.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use wayfarer_core::geo_metrics::distance_km;
use wayfarer_core::{LodgingReference, PointOfInterest};

/// How the first stop of a day is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorStrategy {
    /// Start at the point closest to the city centre.
    ///
    /// This uses each point's `city_centre_distance_km` as a stand-in for
    /// its distance from the lodging and ignores the lodging coordinates.
    #[default]
    CityCentreProxy,
    /// Start at the point with the smallest great-circle distance to the
    /// lodging.
    LodgingDistance,
}

impl AnchorStrategy {
    /// Kebab-case name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CityCentreProxy => "city-centre",
            Self::LodgingDistance => "lodging",
        }
    }
}

impl fmt::Display for AnchorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown anchor name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown anchor strategy `{0}`; expected `city-centre` or `lodging`")]
pub struct ParseAnchorStrategyError(String);

impl FromStr for AnchorStrategy {
    type Err = ParseAnchorStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "city-centre" | "city-center" | "centre" => Ok(Self::CityCentreProxy),
            "lodging" | "hotel" => Ok(Self::LodgingDistance),
            _ => Err(ParseAnchorStrategyError(s.to_owned())),
        }
    }
}

/// Greedy nearest-neighbour router.
///
/// The route is a cheap heuristic and is not minimal. Ties at every step
/// go to the point listed first.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::{LodgingReference, PointOfInterest};
/// use wayfarer_planner::NearestNeighbourRouter;
///
/// let far = PointOfInterest::new(1, Coord { x: 0.2, y: 0.0 }).with_city_centre_distance_km(22.0);
/// let near = PointOfInterest::new(2, Coord { x: 0.0, y: 0.0 }).with_city_centre_distance_km(0.5);
/// let mid = PointOfInterest::new(3, Coord { x: 0.1, y: 0.0 }).with_city_centre_distance_km(11.0);
///
/// let route = NearestNeighbourRouter::default().route(&[far, near, mid], &LodgingReference::default());
/// let ids: Vec<u64> = route.iter().map(|poi| poi.id).collect();
/// assert_eq!(ids, vec![2, 3, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NearestNeighbourRouter {
    anchor: AnchorStrategy,
}

impl NearestNeighbourRouter {
    /// Router using `anchor` to pick the first stop.
    #[must_use]
    pub const fn new(anchor: AnchorStrategy) -> Self {
        Self { anchor }
    }

    /// Order `points` into a visiting sequence.
    #[must_use]
    pub fn route(
        &self,
        points: &[PointOfInterest],
        lodging: &LodgingReference,
    ) -> Vec<PointOfInterest> {
        let mut remaining = points.to_vec();
        let mut route = Vec::with_capacity(remaining.len());

        let mut next = self.anchor_index(&remaining, lodging);
        while let Some(index) = next {
            let current = remaining.remove(index);
            next = nearest_index(&remaining, |poi| distance_km(current.location, poi.location));
            route.push(current);
        }
        route
    }

    fn anchor_index(
        &self,
        points: &[PointOfInterest],
        lodging: &LodgingReference,
    ) -> Option<usize> {
        match self.anchor {
            AnchorStrategy::CityCentreProxy => {
                nearest_index(points, |poi| poi.city_centre_distance_km)
            }
            AnchorStrategy::LodgingDistance => {
                nearest_index(points, |poi| distance_km(lodging.location, poi.location))
            }
        }
    }
}

/// Index of the first point minimising `key`.
fn nearest_index<F>(points: &[PointOfInterest], key: F) -> Option<usize>
where
    F: Fn(&PointOfInterest) -> f64,
{
    points
        .iter()
        .map(key)
        .enumerate()
        .min_by(|(_, lhs), (_, rhs)| lhs.total_cmp(rhs))
        .map(|(index, _)| index)
}
