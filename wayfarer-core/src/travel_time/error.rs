use thiserror::Error;

/// Errors from [`crate::travel_time::TravelTimeProvider::get_travel_time_matrix`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelTimeError {
    /// No points of interest were provided.
    ///
    /// Planners skip free days, so an empty route indicates a caller bug.
    #[error("at least one point of interest is required")]
    EmptyInput,
    /// The provider returned a matrix that is not `n×n`.
    #[error("travel-time matrix must be {expected}×{expected}")]
    MalformedMatrix {
        /// Number of points the matrix should cover.
        expected: usize,
    },
}
