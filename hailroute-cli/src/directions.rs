//! Directions command implementation for the Hailroute CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use hailroute_core::{DirectionsResponse, Precision};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::read_input;
use crate::{
    ARG_FORMAT, ARG_PRECISION, ARG_RESPONSE, CliError, ENV_DIRECTIONS_RESPONSE, OutputFormat,
    resolve_precision, write_route,
};

/// CLI arguments for the `directions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a saved directions API response and print the first \
                 route's overview polyline as GeoJSON. Prints null when the \
                 response holds no route.",
    about = "Extract the primary route from a directions response"
)]
#[ortho_config(prefix = "HAILROUTE")]
pub(crate) struct DirectionsArgs {
    /// Path to a JSON directions response.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) response: Option<Utf8PathBuf>,
    /// Decimal digits carried by the polyline (default 5).
    #[arg(long = ARG_PRECISION, value_name = "digits")]
    #[serde(default)]
    pub(crate) precision: Option<u8>,
    /// Output a GeoJSON Feature (default) or the bare geometry.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl DirectionsArgs {
    pub(crate) fn into_config(self) -> Result<DirectionsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DirectionsConfig::try_from(merged)
    }
}

/// Resolved `directions` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DirectionsConfig {
    pub(crate) response: Utf8PathBuf,
    pub(crate) precision: Precision,
    pub(crate) format: OutputFormat,
}

impl TryFrom<DirectionsArgs> for DirectionsConfig {
    type Error = CliError;

    fn try_from(args: DirectionsArgs) -> Result<Self, Self::Error> {
        let response = args.response.ok_or(CliError::MissingArgument {
            field: ARG_RESPONSE,
            env: ENV_DIRECTIONS_RESPONSE,
        })?;
        Ok(Self {
            response,
            precision: resolve_precision(args.precision)?,
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Loads a JSON-encoded [`DirectionsResponse`] from disk.
pub(crate) fn load_directions(path: &Utf8Path) -> Result<DirectionsResponse, CliError> {
    let text = read_input(path, ARG_RESPONSE)?;
    serde_json::from_str(&text).map_err(|source| CliError::ParseDirections {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn run_directions(args: DirectionsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_directions_with(&config, writer)
}

pub(crate) fn run_directions_with(
    config: &DirectionsConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = load_directions(&config.response)?;
    let route = response
        .primary_route_with_precision(config.precision)
        .map_err(|source| CliError::Decode { source })?;
    if route.is_none() {
        log::warn!("directions response at {} holds no route", config.response);
    }
    write_route(writer, route, config.format)
}
