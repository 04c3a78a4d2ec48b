//! Display-duration policies used to size visit slots.
//!
//! A [`DurationPolicy`] decides how long the scheduler books for a visit. It
//! is a packing policy and does not claim to model how long a visit takes.

use crate::PointOfInterest;
use crate::time::{QUARTER_HOUR, round_minutes_to_quarter};

/// Map a point of interest to the number of hours booked for it.
///
/// Implementations must be pure: the same point yields the same value on
/// every call. They must be `Send + Sync` so a planner can be shared across
/// threads.
pub trait DurationPolicy: Send + Sync {
    /// Hours booked for `poi`.
    fn display_duration_hours(&self, poi: &PointOfInterest) -> f64;

    /// Slot length in minutes for `poi`.
    ///
    /// Truncates the display duration to whole minutes, rounds to the nearest
    /// quarter hour and never returns less than 15.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "float-to-int `as` truncates and saturates, which is the intended conversion"
    )]
    fn slot_minutes(&self, poi: &PointOfInterest) -> u32 {
        let minutes = (self.display_duration_hours(poi) * 60.0) as u32;
        round_minutes_to_quarter(minutes).max(QUARTER_HOUR)
    }
}

/// Density-maximising policy: every visit is booked for 1.0 to 1.5 hours.
///
/// The booked time is `min(1.0 + (id mod 10) / 20, 1.5)` and ignores the
/// nominal duration entirely. Short slots let every day hold at least four
/// stops. Long real-world visits will therefore overrun their slot.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::{DensityDurationPolicy, DurationPolicy, PointOfInterest};
///
/// let poi = PointOfInterest::new(13, Coord { x: 0.0, y: 0.0 })
///     .with_nominal_duration_hours(4.0);
/// let policy = DensityDurationPolicy;
/// assert!((policy.display_duration_hours(&poi) - 1.15).abs() < 1e-9);
/// assert_eq!(policy.slot_minutes(&poi), 75);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DensityDurationPolicy;

/// Upper bound applied by [`DensityDurationPolicy`].
pub const MAX_DISPLAY_HOURS: f64 = 1.5;

impl DurationPolicy for DensityDurationPolicy {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the remainder is below ten and converts exactly"
    )]
    fn display_duration_hours(&self, poi: &PointOfInterest) -> f64 {
        let step = poi.id.rem_euclid(10) as f64;
        (1.0 + step / 20.0).min(MAX_DISPLAY_HOURS)
    }
}
