//! Test helpers for writing trip requests to temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use geo::Coord;
use tempfile::TempDir;
use wayfarer_core::{LodgingReference, PointOfInterest, PreferredTime};

use crate::plan::TripRequestFile;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// A temporary directory with a UTF-8 path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

/// Six points around Connaught Place with mixed preferences.
pub(super) fn sample_trip(day_count: Option<u16>) -> TripRequestFile {
    let preferences = [
        PreferredTime::Morning,
        PreferredTime::Anytime,
        PreferredTime::Afternoon,
        PreferredTime::Evening,
        PreferredTime::Anytime,
        PreferredTime::Morning,
    ];
    let points = preferences
        .into_iter()
        .zip(1_u64..)
        .map(|(preference, id)| {
            let offset = f64::from(u32::try_from(id).expect("small id")) * 0.01;
            PointOfInterest::new(id, Coord { x: 77.2 + offset, y: 28.6 })
                .with_name(format!("Stop {id}"))
                .with_city_centre_distance_km(offset * 100.0)
                .with_preferred_time(preference)
        })
        .collect();
    TripRequestFile {
        points,
        lodging: LodgingReference::new(Coord { x: 77.21, y: 28.63 }, 1.5),
        start_date: Some(start_date()),
        day_count,
    }
}

pub(super) fn write_trip(path: &Utf8Path, trip: &TripRequestFile) {
    let payload = serde_json::to_string_pretty(trip).expect("serialise trip");
    write_utf8(path, payload.as_bytes());
}
