//! Travel-time provider trait and adjacency-matrix alias for POI pairs.

use std::time::Duration;

use crate::PointOfInterest;

use super::error::TravelTimeError;

/// Adjacency matrix of travel times.
pub type TravelTimeMatrix = Vec<Vec<Duration>>;

/// Fetch pairwise travel times for a day's route.
///
/// Implementers must return a square `n×n` matrix where `n == pois.len()`.
/// `matrix[i][j]` is the travel time from `pois[i]` to `pois[j]`.
/// Providers are shared by planners and so must be `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use geo::Coord;
/// use wayfarer_core::{PointOfInterest, TravelTimeError, TravelTimeMatrix, TravelTimeProvider};
///
/// struct QuarterHourProvider;
///
/// impl TravelTimeProvider for QuarterHourProvider {
///     fn get_travel_time_matrix(
///         &self,
///         pois: &[PointOfInterest],
///     ) -> Result<TravelTimeMatrix, TravelTimeError> {
///         if pois.is_empty() {
///             return Err(TravelTimeError::EmptyInput);
///         }
///         let n = pois.len();
///         Ok((0..n)
///             .map(|i| {
///                 (0..n)
///                     .map(|j| if i == j { Duration::ZERO } else { Duration::from_secs(900) })
///                     .collect::<Vec<_>>()
///             })
///             .collect())
///     }
/// }
///
/// let poi = PointOfInterest::new(1, Coord { x: 0.0, y: 0.0 });
/// let matrix = QuarterHourProvider.get_travel_time_matrix(&[poi])?;
/// assert_eq!(matrix.len(), 1);
/// # Ok::<(), TravelTimeError>(())
/// ```
pub trait TravelTimeProvider: Send + Sync {
    /// Return a matrix of travel times for `pois`.
    ///
    /// Implementations must return `Err(TravelTimeError::EmptyInput)` when
    /// `pois` is empty.
    fn get_travel_time_matrix(
        &self,
        pois: &[PointOfInterest],
    ) -> Result<TravelTimeMatrix, TravelTimeError>;
}

/// Whole minutes from `matrix[from][to]`, rounded up.
///
/// Missing entries read as zero.
#[must_use]
pub fn minutes_between(matrix: &TravelTimeMatrix, from: usize, to: usize) -> u32 {
    let seconds = matrix
        .get(from)
        .and_then(|row| row.get(to))
        .map_or(0, Duration::as_secs);
    u32::try_from(seconds.div_ceil(60)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    use crate::test_support::FixedTravelTime;

    fn sample_pois() -> Vec<PointOfInterest> {
        vec![
            PointOfInterest::new(1, Coord { x: 0.0, y: 0.0 }),
            PointOfInterest::new(2, Coord { x: 1.0, y: 1.0 }),
        ]
    }

    #[rstest]
    fn returns_square_matrix() {
        let provider = FixedTravelTime::minutes(20);
        let pois = sample_pois();
        let matrix = provider
            .get_travel_time_matrix(&pois)
            .expect("expected square matrix from FixedTravelTime");
        assert_eq!(matrix.len(), pois.len());
        assert!(matrix.iter().all(|row| row.len() == pois.len()));
        assert_eq!(minutes_between(&matrix, 0, 0), 0);
        assert_eq!(minutes_between(&matrix, 0, 1), 20);
    }

    #[rstest]
    fn errors_on_empty_input() {
        let provider = FixedTravelTime::minutes(20);
        let err = provider
            .get_travel_time_matrix(&[])
            .expect_err("expected EmptyInput for empty slice");
        assert_eq!(err, TravelTimeError::EmptyInput);
    }

    #[rstest]
    #[case(Duration::from_secs(61), 2)]
    #[case(Duration::from_secs(60), 1)]
    #[case(Duration::ZERO, 0)]
    fn minutes_round_up(#[case] edge: Duration, #[case] expected: u32) {
        let matrix = vec![vec![Duration::ZERO, edge], vec![edge, Duration::ZERO]];
        assert_eq!(minutes_between(&matrix, 0, 1), expected);
        assert_eq!(minutes_between(&matrix, 5, 1), 0);
    }
}
