//! Error types emitted by the Hailroute CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use hailroute_core::{DecodeError, EncodeError, PrecisionError};
use thiserror::Error;

/// Errors emitted by the Hailroute CLI.
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
    /// Two mutually exclusive inputs were both supplied.
    #[error("{first} and {second} cannot be used together")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },
    /// The requested precision is unsupported.
    #[error(transparent)]
    InvalidPrecision(#[from] PrecisionError),
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
    /// A referenced input path could not be opened or inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading an input file failed.
    #[error("failed to read {field} from {path:?}: {source}")]
    ReadInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The polyline could not be decoded.
    #[error("failed to decode polyline: {source}")]
    Decode {
        #[source]
        source: DecodeError,
    },
    /// The GeoJSON input could not be parsed as a line.
    #[error("failed to parse GeoJSON line at {path:?}: {source}")]
    ParseGeometry {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The route could not be encoded.
    #[error("failed to encode route from {path:?}: {source}")]
    Encode {
        path: Utf8PathBuf,
        #[source]
        source: EncodeError,
    },
    /// The directions response JSON could not be decoded.
    #[error("failed to parse directions response at {path:?}: {source}")]
    ParseDirections {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
