//! Plan command implementation for the Wayfarer CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_core::{
    DensityDurationPolicy, HaversineTravelTime, LodgingReference, PlanRequest, Planner,
    PointOfInterest, TripItinerary,
};
use wayfarer_planner::{AnchorStrategy, EngineConfig, ItineraryEngine, suggest_day_count};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_ANCHOR, ARG_DAYS, ARG_MIN_PER_DAY, ARG_REQUEST, ARG_START_DATE, CliError, ENV_REQUEST,
    ENV_START_DATE,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a day-by-day itinerary from a JSON trip request \
                 holding the selected points of interest and the lodging. \
                 The trip length and start date may come from the request, \
                 CLI flags, configuration files or environment variables; \
                 without a day count one is suggested from the selection.",
    about = "Plan an itinerary"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing the trip request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Number of days, overriding the request.
    #[arg(long = ARG_DAYS, value_name = "count")]
    #[serde(default)]
    pub(crate) days: Option<u16>,
    /// First day of the trip, overriding the request.
    #[arg(long = ARG_START_DATE, value_name = "YYYY-MM-DD")]
    #[serde(default)]
    pub(crate) start_date: Option<NaiveDate>,
    /// How each day's first stop is chosen: `city-centre` or `lodging`.
    #[arg(long = ARG_ANCHOR, value_name = "strategy")]
    #[serde(default)]
    pub(crate) anchor: Option<String>,
    /// Minimum stops per day when there are enough points.
    #[arg(long = ARG_MIN_PER_DAY, value_name = "count")]
    #[serde(default)]
    pub(crate) min_per_day: Option<usize>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON trip request.
    pub(crate) request_path: Utf8PathBuf,
    /// Day count override.
    pub(crate) days: Option<u16>,
    /// Start date override.
    pub(crate) start_date: Option<NaiveDate>,
    /// Engine tuning.
    pub(crate) engine: EngineConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_REQUEST,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_REQUEST,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_REQUEST,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;
        let defaults = EngineConfig::default();
        let anchor = args
            .anchor
            .as_deref()
            .map(str::parse::<AnchorStrategy>)
            .transpose()?
            .unwrap_or(defaults.anchor);
        let engine = EngineConfig {
            anchor,
            min_per_day: args.min_per_day.unwrap_or(defaults.min_per_day),
            ..defaults
        };
        Ok(Self {
            request_path,
            days: args.days,
            start_date: args.start_date,
            engine,
        })
    }
}

/// On-disk trip request. Date and length may be supplied on the command line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct TripRequestFile {
    /// Selected points of interest.
    #[serde(default)]
    pub(crate) points: Vec<PointOfInterest>,
    /// The traveller's lodging.
    #[serde(default)]
    pub(crate) lodging: LodgingReference,
    /// First day of the trip.
    #[serde(default)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Number of days.
    #[serde(default)]
    pub(crate) day_count: Option<u16>,
}

impl TripRequestFile {
    /// Combine the file with command-line overrides.
    ///
    /// Overrides win over the file. A missing day count is suggested from
    /// the selection; a missing start date is an error.
    pub(crate) fn into_plan_request(self, config: &PlanConfig) -> Result<PlanRequest, CliError> {
        let start_date =
            config
                .start_date
                .or(self.start_date)
                .ok_or(CliError::MissingArgument {
                    field: ARG_START_DATE,
                    env: ENV_START_DATE,
                })?;
        let day_count = match config.days.or(self.day_count) {
            Some(days) => days,
            None => {
                let suggested = suggest_day_count(&self.points);
                log::info!("no day count given, suggesting {suggested}");
                suggested
            }
        };
        Ok(PlanRequest {
            points: self.points,
            lodging: self.lodging,
            start_date,
            day_count,
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let itinerary = execute_plan(args)?;
    write_itinerary(writer, &itinerary)
}

fn execute_plan(args: PlanArgs) -> Result<TripItinerary, CliError> {
    let config = resolve_plan_config(args)?;
    let request = load_trip_request(&config.request_path)?.into_plan_request(&config)?;
    log::debug!(
        "planning {} points over {} days from {}",
        request.points.len(),
        request.day_count,
        request.start_date
    );
    let engine =
        ItineraryEngine::with_config(HaversineTravelTime, DensityDurationPolicy, config.engine);
    let itinerary = engine.plan(&request)?;
    if !itinerary.is_complete() {
        log::warn!(
            "{} points could not be scheduled",
            itinerary.unscheduled().count()
        );
    }
    Ok(itinerary)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`TripRequestFile`] from disk.
pub(super) fn load_trip_request(path: &Utf8Path) -> Result<TripRequestFile, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenTripRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseTripRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_itinerary(writer: &mut dyn Write, itinerary: &TripItinerary) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(itinerary).map_err(CliError::SerialiseItinerary)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
