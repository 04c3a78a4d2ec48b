//! Error types emitted by the Wayfarer CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfarer_core::PlanError;
use wayfarer_planner::ParseAnchorStrategyError;

/// Errors emitted by the Wayfarer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The anchor strategy option was not recognised.
    #[error(transparent)]
    InvalidAnchor(#[from] ParseAnchorStrategyError),
    /// Opening the trip request file failed.
    #[error("failed to open trip request at {path:?}: {source}")]
    OpenTripRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Trip request JSON could not be decoded.
    #[error("failed to parse trip request JSON at {path:?}: {source}")]
    ParseTripRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The planner rejected the request.
    #[error("planning failed: {source}")]
    Plan {
        #[from]
        source: PlanError,
    },
    /// Serialising the itinerary failed.
    #[error("failed to serialise itinerary: {0}")]
    SerialiseItinerary(#[source] serde_json::Error),
    /// Writing the plan output failed.
    #[error("failed to write plan output: {0}")]
    WritePlanOutput(#[source] std::io::Error),
}
