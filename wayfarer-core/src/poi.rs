//! Points of interest and the lodging reference used to anchor routes.

use chrono::{Datelike, NaiveDate, Weekday};
use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CrowdLevel, PreferredTime};

const WEEKDAY_NAMES: [(Weekday, &str); 7] = [
    (Weekday::Mon, "monday"),
    (Weekday::Tue, "tuesday"),
    (Weekday::Wed, "wednesday"),
    (Weekday::Thu, "thursday"),
    (Weekday::Fri, "friday"),
    (Weekday::Sat, "saturday"),
    (Weekday::Sun, "sunday"),
];

/// A destination-local attraction that can be visited for a while.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// `city_centre_distance_km` is taken from reference data and stands in for
/// "distance from the lodging" when picking the first stop of a day.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::{PointOfInterest, PreferredTime};
///
/// let poi = PointOfInterest::new(7, Coord { x: 77.2295, y: 28.6129 })
///     .with_name("India Gate")
///     .with_preferred_time(PreferredTime::Evening)
///     .with_city_centre_distance_km(2.5);
///
/// assert_eq!(poi.id, 7);
/// assert_eq!(poi.preferred_time, PreferredTime::Evening);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointOfInterest {
    /// Unique identifier.
    pub id: u64,
    /// Human-readable name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Free-form category, e.g. "Historical".
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Nominal visit length in hours from reference data.
    #[cfg_attr(feature = "serde", serde(default = "default_duration_hours"))]
    pub nominal_duration_hours: f64,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Distance from the city centre in kilometres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city_centre_distance_km: f64,
    /// Preferred time of day for the visit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_time: PreferredTime,
    /// Expected crowd level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub crowd_level: CrowdLevel,
    /// Weekdays on which the place is closed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub closed_days: Vec<Weekday>,
    /// Free-form peak hours tag, e.g. "11:00 AM - 2:00 PM".
    #[cfg_attr(feature = "serde", serde(default))]
    pub peak_hours: Option<String>,
}

#[cfg(feature = "serde")]
const fn default_duration_hours() -> f64 {
    1.0
}

impl PointOfInterest {
    /// Construct a point with default metadata: one nominal hour, no
    /// preference, unknown crowd level and open every day.
    #[must_use]
    pub const fn new(id: u64, location: Coord<f64>) -> Self {
        Self {
            id,
            name: String::new(),
            category: String::new(),
            nominal_duration_hours: 1.0,
            location,
            city_centre_distance_km: 0.0,
            preferred_time: PreferredTime::Anytime,
            crowd_level: CrowdLevel::Unknown,
            closed_days: Vec::new(),
            peak_hours: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the nominal visit duration in hours.
    #[must_use]
    pub const fn with_nominal_duration_hours(mut self, hours: f64) -> Self {
        self.nominal_duration_hours = hours;
        self
    }

    /// Set the distance from the city centre in kilometres.
    #[must_use]
    pub const fn with_city_centre_distance_km(mut self, km: f64) -> Self {
        self.city_centre_distance_km = km;
        self
    }

    /// Set the preferred time of day.
    #[must_use]
    pub const fn with_preferred_time(mut self, preferred_time: PreferredTime) -> Self {
        self.preferred_time = preferred_time;
        self
    }

    /// Set the crowd level.
    #[must_use]
    pub const fn with_crowd_level(mut self, crowd_level: CrowdLevel) -> Self {
        self.crowd_level = crowd_level;
        self
    }

    /// Set the closed days from a free-form tag such as "Monday, Friday".
    ///
    /// # Examples
    /// ```
    /// use chrono::Weekday;
    /// use geo::Coord;
    /// use wayfarer_core::PointOfInterest;
    ///
    /// let poi = PointOfInterest::new(1, Coord { x: 0.0, y: 0.0 })
    ///     .with_closed_days_tag("Closed on Monday and Friday");
    /// assert_eq!(poi.closed_days, vec![Weekday::Mon, Weekday::Fri]);
    /// ```
    #[must_use]
    pub fn with_closed_days_tag(mut self, tag: &str) -> Self {
        let lowered = tag.to_lowercase();
        self.closed_days = WEEKDAY_NAMES
            .iter()
            .filter(|(_, name)| lowered.contains(name))
            .map(|(day, _)| *day)
            .collect();
        self
    }

    /// Set the peak hours tag.
    #[must_use]
    pub fn with_peak_hours(mut self, peak_hours: impl Into<String>) -> Self {
        self.peak_hours = Some(peak_hours.into());
        self
    }

    /// Whether the place is open on `date`.
    #[must_use]
    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        !self.closed_days.contains(&date.weekday())
    }
}

/// The traveller's base for a city stay.
///
/// Only used to choose the first stop of each day's route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LodgingReference {
    /// Geospatial position of the lodging.
    pub location: Coord<f64>,
    /// Distance of the lodging from the city centre in kilometres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city_centre_distance_km: f64,
}

impl LodgingReference {
    /// Construct a lodging reference.
    #[must_use]
    pub const fn new(location: Coord<f64>, city_centre_distance_km: f64) -> Self {
        Self {
            location,
            city_centre_distance_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn closed_days_tag_is_case_insensitive() {
        let poi = PointOfInterest::new(1, Coord { x: 0.0, y: 0.0 }).with_closed_days_tag("SUNDAY");
        assert_eq!(poi.closed_days, vec![Weekday::Sun]);
    }

    #[rstest]
    #[case("2026-10-19", false)] // Monday
    #[case("2026-10-20", true)]
    fn open_days_follow_closed_tag(#[case] day: &str, #[case] open: bool) {
        let poi = PointOfInterest::new(1, Coord { x: 0.0, y: 0.0 }).with_closed_days_tag("Monday");
        let date: NaiveDate = day.parse().expect("valid date");
        assert_eq!(poi.is_open_on(date), open);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn reference_data_tags_deserialise_leniently() {
        let json = r#"{
            "id": 4,
            "location": { "x": 77.2, "y": 28.6 },
            "preferred_time": "",
            "crowd_level": "Very High"
        }"#;
        let poi: PointOfInterest = serde_json::from_str(json).expect("reference point");
        assert_eq!(poi.preferred_time, PreferredTime::Anytime);
        assert_eq!(poi.crowd_level, CrowdLevel::VeryHigh);

        let early = json.replace(r#""preferred_time": """#, r#""preferred_time": "Early Morning""#);
        let poi: PointOfInterest = serde_json::from_str(&early).expect("reference point");
        assert_eq!(poi.preferred_time, PreferredTime::Morning);
    }

    #[rstest]
    fn empty_closed_tag_means_always_open() {
        let poi = PointOfInterest::new(1, Coord { x: 0.0, y: 0.0 }).with_closed_days_tag("");
        assert!(poi.closed_days.is_empty());
    }
}
