//! Presentation hints for per-stop annotations.
//!
//! Nothing here influences scheduling.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::{CrowdLevel, PointOfInterest, TimeOfDay};

const PEAK_START: TimeOfDay = TimeOfDay::from_hm(10, 0);
const PEAK_END: TimeOfDay = TimeOfDay::from_hm(14, 0);

/// Crowd warning for visiting `poi` on `date`.
///
/// Weekends raise the expectation for busy and moderate places. Returns an
/// empty string when the crowd level is unknown.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use wayfarer_core::{CrowdLevel, PointOfInterest, crowd_advisory};
///
/// let poi = PointOfInterest::new(1, Coord { x: 0.0, y: 0.0 })
///     .with_crowd_level(CrowdLevel::Medium);
/// let saturday = NaiveDate::from_ymd_opt(2026, 10, 24).expect("valid date");
/// assert_eq!(crowd_advisory(&poi, saturday), "Moderate crowd expected (weekend)");
/// ```
#[must_use]
pub fn crowd_advisory(poi: &PointOfInterest, date: NaiveDate) -> &'static str {
    let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
    let level = poi.crowd_level;
    match (level, weekend) {
        (CrowdLevel::Unknown, _) => "",
        (_, true) if level.is_busy() => "Very high crowd expected (weekend + popular spot)",
        (_, false) if level.is_busy() => {
            "High crowd expected - Visit early morning to avoid rush"
        }
        (CrowdLevel::Medium, true) => "Moderate crowd expected (weekend)",
        (CrowdLevel::Medium, false) => "Moderate crowd - Good time to visit",
        _ => "Low crowd expected - Peaceful visit",
    }
}

/// Whether `time` falls in the midday rush at `poi`.
///
/// Only points carrying a non-empty peak-hours tag have a rush, and it runs
/// strictly between 10:00 and 14:00.
#[must_use]
pub fn is_peak_hour(time: TimeOfDay, poi: &PointOfInterest) -> bool {
    let tagged = poi
        .peak_hours
        .as_deref()
        .is_some_and(|tag| !tag.trim().is_empty());
    tagged && time > PEAK_START && time < PEAK_END
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    fn poi(level: CrowdLevel) -> PointOfInterest {
        PointOfInterest::new(1, Coord { x: 0.0, y: 0.0 }).with_crowd_level(level)
    }

    fn date(text: &str) -> NaiveDate {
        text.parse().expect("valid date")
    }

    #[rstest]
    #[case(CrowdLevel::VeryHigh, "2026-10-25", "Very high crowd expected (weekend + popular spot)")]
    #[case(CrowdLevel::High, "2026-10-21", "High crowd expected - Visit early morning to avoid rush")]
    #[case(CrowdLevel::Medium, "2026-10-21", "Moderate crowd - Good time to visit")]
    #[case(CrowdLevel::Low, "2026-10-24", "Low crowd expected - Peaceful visit")]
    #[case(CrowdLevel::Unknown, "2026-10-24", "")]
    fn advisory_depends_on_level_and_weekend(
        #[case] level: CrowdLevel,
        #[case] day: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(crowd_advisory(&poi(level), date(day)), expected);
    }

    #[rstest]
    #[case(TimeOfDay::from_hm(10, 0), false)]
    #[case(TimeOfDay::from_hm(10, 15), true)]
    #[case(TimeOfDay::from_hm(13, 45), true)]
    #[case(TimeOfDay::from_hm(14, 0), false)]
    fn peak_window_is_exclusive(#[case] time: TimeOfDay, #[case] expected: bool) {
        let tagged = poi(CrowdLevel::High).with_peak_hours("11 AM - 2 PM");
        assert_eq!(is_peak_hour(time, &tagged), expected);
    }

    #[rstest]
    fn untagged_points_have_no_peak() {
        assert!(!is_peak_hour(TimeOfDay::from_hm(12, 0), &poi(CrowdLevel::High)));
        let blank = poi(CrowdLevel::High).with_peak_hours("  ");
        assert!(!is_peak_hour(TimeOfDay::from_hm(12, 0), &blank));
    }
}
