//! Trip length suggestion from a set of selected points.

use wayfarer_core::PointOfInterest;

/// Sightseeing hours assumed per day.
const HOURS_PER_DAY: usize = 10;

/// Suggest how many days a selection needs, never fewer than one.
///
/// Activity hours (the nominal durations summed and rounded up) are padded
/// with one travel hour per three points, one buffer hour per two points
/// and a lunch hour for every estimated day, then spread over ten-hour days.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::PointOfInterest;
/// use wayfarer_planner::suggest_day_count;
///
/// assert_eq!(suggest_day_count(&[]), 1);
/// let points: Vec<_> = (1..=6)
///     .map(|id| PointOfInterest::new(id, Coord { x: 0.0, y: 0.0 }))
///     .collect();
/// assert_eq!(suggest_day_count(&points), 2);
/// ```
#[must_use]
pub fn suggest_day_count(points: &[PointOfInterest]) -> u16 {
    let count = points.len();
    let working = activity_hours(points)
        .saturating_add(count.div_ceil(3))
        .saturating_add(count.div_ceil(2));
    let lunches = working.div_ceil(HOURS_PER_DAY);
    let days = working.saturating_add(lunches).div_ceil(HOURS_PER_DAY).max(1);
    u16::try_from(days).unwrap_or(u16::MAX)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "float-to-int `as` saturates and maps NaN or negative sums to zero"
)]
fn activity_hours(points: &[PointOfInterest]) -> usize {
    points
        .iter()
        .map(|poi| poi.nominal_duration_hours)
        .sum::<f64>()
        .ceil() as usize
}
