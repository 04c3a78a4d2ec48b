//! Default provider backed by great-circle distance.

use std::time::Duration;

use crate::PointOfInterest;
use crate::geo_metrics::travel_minutes;

use super::{TravelTimeError, TravelTimeMatrix, TravelTimeProvider};

/// Derive travel times from [`travel_minutes`].
///
/// Off-diagonal entries include the fixed transfer buffer and are therefore
/// never shorter than 30 minutes. The diagonal is zero.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use wayfarer_core::{HaversineTravelTime, PointOfInterest, TravelTimeProvider};
///
/// let pois = [
///     PointOfInterest::new(1, Coord { x: 0.0, y: 0.0 }),
///     PointOfInterest::new(2, Coord { x: 0.0, y: 0.0 }),
/// ];
/// let matrix = HaversineTravelTime.get_travel_time_matrix(&pois)?;
/// assert_eq!(matrix[0][1], Duration::from_secs(30 * 60));
/// assert_eq!(matrix[1][1], Duration::ZERO);
/// # Ok::<(), wayfarer_core::TravelTimeError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HaversineTravelTime;

impl TravelTimeProvider for HaversineTravelTime {
    fn get_travel_time_matrix(
        &self,
        pois: &[PointOfInterest],
    ) -> Result<TravelTimeMatrix, TravelTimeError> {
        if pois.is_empty() {
            return Err(TravelTimeError::EmptyInput);
        }
        Ok(pois
            .iter()
            .enumerate()
            .map(|(i, from)| {
                pois.iter()
                    .enumerate()
                    .map(|(j, to)| {
                        if i == j {
                            Duration::ZERO
                        } else {
                            let minutes = travel_minutes(from.location, to.location);
                            Duration::from_secs(u64::from(minutes).saturating_mul(60))
                        }
                    })
                    .collect()
            })
            .collect())
    }
}
