//! Focused unit tests covering plan CLI configuration and request loading.

use super::helpers::{sample_trip, start_date, workspace, write_trip, write_utf8};
use super::*;
use crate::plan::{
    PlanConfig, TripRequestFile, config_from_layers_for_test, load_trip_request, run_plan_with,
};
use camino::Utf8PathBuf;
use rstest::rstest;
use wayfarer_core::TripItinerary;
use wayfarer_planner::{AnchorStrategy, EngineConfig};

fn config_for(request_path: Utf8PathBuf) -> PlanConfig {
    PlanConfig {
        request_path,
        days: None,
        start_date: None,
        engine: EngineConfig::default(),
    }
}

#[rstest]
fn converting_without_request_errors() {
    let err = PlanConfig::try_from(PlanArgs::default()).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_applies_engine_overrides() {
    let args = PlanArgs {
        request_path: Some(Utf8PathBuf::from("trip.json")),
        anchor: Some("lodging".to_owned()),
        min_per_day: Some(2),
        ..PlanArgs::default()
    };
    let config = PlanConfig::try_from(args).expect("config should build");
    assert_eq!(config.engine.anchor, AnchorStrategy::LodgingDistance);
    assert_eq!(config.engine.min_per_day, 2);
    assert_eq!(
        config.engine.repair_passes,
        EngineConfig::default().repair_passes
    );
}

#[rstest]
fn converting_rejects_unknown_anchor() {
    let args = PlanArgs {
        request_path: Some(Utf8PathBuf::from("trip.json")),
        anchor: Some("airport".to_owned()),
        ..PlanArgs::default()
    };
    let err = PlanConfig::try_from(args).expect_err("unknown anchor should error");
    assert!(matches!(err, CliError::InvalidAnchor(_)), "{err:?}");
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let (_tmp, root) = workspace();
    let err = config_for(root.join("absent.json"))
        .validate_sources()
        .expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = workspace();
    let request_path = root.join("trip.json");
    std::fs::create_dir(&request_path).expect("request directory");

    let err = config_for(request_path.clone())
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_trip_request_decodes_json() {
    let (_tmp, root) = workspace();
    let request_path = root.join("trip.json");
    let trip = sample_trip(Some(2));
    write_trip(&request_path, &trip);

    let decoded = load_trip_request(&request_path).expect("request should decode");
    assert_eq!(decoded, trip);
}

#[rstest]
fn load_trip_request_rejects_invalid_json() {
    let (_tmp, root) = workspace();
    let request_path = root.join("trip.json");
    write_utf8(&request_path, b"{ not valid json");

    let err = load_trip_request(&request_path).expect_err("invalid json should error");
    match err {
        CliError::ParseTripRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_trip_request_io_error_returns_open_error() {
    let (_tmp, root) = workspace();
    let request_path = root.join("trip.json");

    let err = load_trip_request(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenTripRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenTripRequest, found {other:?}"),
    }
}

#[rstest]
#[case::flag_wins(Some(3), Some(4), 3)]
#[case::file_value(None, Some(4), 4)]
#[case::suggested(None, None, 2)] // six one-hour points
fn day_count_prefers_flag_then_file_then_suggestion(
    #[case] flag: Option<u16>,
    #[case] file: Option<u16>,
    #[case] expected: u16,
) {
    let config = PlanConfig {
        days: flag,
        ..config_for(Utf8PathBuf::from("trip.json"))
    };
    let request = sample_trip(file)
        .into_plan_request(&config)
        .expect("request should resolve");
    assert_eq!(request.day_count, expected);
    assert_eq!(request.start_date, start_date());
}

#[rstest]
fn missing_start_date_is_reported() {
    let trip = TripRequestFile {
        start_date: None,
        ..sample_trip(Some(1))
    };
    let err = trip
        .into_plan_request(&config_for(Utf8PathBuf::from("trip.json")))
        .expect_err("start date is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_START_DATE);
            assert_eq!(env, ENV_START_DATE);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let (_tmp, root) = workspace();
    let env_request = root.join("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "days": 5,
            "anchor": "lodging",
            "start_date": "2026-12-01",
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "days": 4,
    }));
    composer.push_cli(json!({ "days": 2 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.days, Some(2));
    assert_eq!(config.start_date, chrono::NaiveDate::from_ymd_opt(2026, 12, 1));
    assert_eq!(config.engine.anchor, AnchorStrategy::LodgingDistance);
}

#[rstest]
fn run_plan_writes_pretty_itinerary() {
    let (_tmp, root) = workspace();
    let request_path = root.join("trip.json");
    write_trip(&request_path, &sample_trip(Some(2)));

    let args = PlanArgs {
        request_path: Some(request_path),
        ..PlanArgs::default()
    };
    let mut stdout = Vec::new();
    run_plan_with(args, &mut stdout).expect("plan should succeed");

    let text = String::from_utf8(stdout).expect("stdout utf-8");
    assert!(text.ends_with('\n'));
    let itinerary: TripItinerary = serde_json::from_str(&text).expect("itinerary JSON");
    assert_eq!(itinerary.days().len(), 2);
    assert_eq!(itinerary.points().len(), 6);
}
