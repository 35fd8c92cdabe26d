//! Command-line interface for Hailroute's offline route tooling.
//!
//! The `hailroute` binary decodes encoded polylines into GeoJSON, encodes
//! GeoJSON lines back into polylines, and extracts the primary route from a
//! saved directions response. Options layer CLI flags over environment
//! variables over configuration files via `ortho_config`.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};
use hailroute_core::{Precision, RouteGeometry};
use serde::{Deserialize, Serialize};

mod decode;
mod directions;
mod encode;
mod error;
mod input;

pub use error::CliError;

use decode::{DecodeArgs, run_decode};
use directions::{DirectionsArgs, run_directions};
use encode::{EncodeArgs, run_encode};

const ARG_POLYLINE: &str = "polyline";
const ARG_INPUT: &str = "input";
const ARG_PRECISION: &str = "precision";
const ARG_FORMAT: &str = "format";
const ARG_GEOJSON: &str = "geojson";
const ARG_RESPONSE: &str = "response";
const ENV_DECODE_POLYLINE: &str = "HAILROUTE_CMDS_DECODE_POLYLINE";
const ENV_ENCODE_GEOJSON: &str = "HAILROUTE_CMDS_ENCODE_GEOJSON";
const ENV_DIRECTIONS_RESPONSE: &str = "HAILROUTE_CMDS_DIRECTIONS_RESPONSE";

/// Run the Hailroute CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Decode(args) => run_decode(args, &mut stdout),
        Command::Encode(args) => run_encode(args, &mut stdout),
        Command::Directions(args) => run_directions(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "hailroute",
    about = "Route polyline utilities for the Hailroute client",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode an encoded polyline into GeoJSON.
    Decode(DecodeArgs),
    /// Encode a GeoJSON line into a polyline.
    Encode(EncodeArgs),
    /// Extract the primary route from a saved directions response.
    Directions(DirectionsArgs),
}

/// Shape of the GeoJSON written for decoded routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum OutputFormat {
    /// A `Feature` wrapping the line, ready for a map source.
    #[default]
    Feature,
    /// The bare `LineString` geometry.
    Geometry,
}

/// Resolve an optional digit count, defaulting to five.
pub(crate) fn resolve_precision(digits: Option<u8>) -> Result<Precision, CliError> {
    Ok(digits.map(Precision::new).transpose()?.unwrap_or_default())
}

/// Write `route` in `format`, or `null` when there is no route.
pub(crate) fn write_route(
    writer: &mut dyn Write,
    route: Option<RouteGeometry>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let payload = match (route, format) {
        (None, _) => serde_json::to_string_pretty(&serde_json::Value::Null),
        (Some(route), OutputFormat::Feature) => serde_json::to_string_pretty(&route.into_feature()),
        (Some(route), OutputFormat::Geometry) => serde_json::to_string_pretty(&route),
    }
    .map_err(CliError::SerialiseOutput)?;
    write_line(writer, &payload)
}

pub(crate) fn write_line(writer: &mut dyn Write, payload: &str) -> Result<(), CliError> {
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
