//! Encode command implementation for the Hailroute CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use hailroute_core::{Precision, RouteFeature, RouteGeometry};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::read_input;
use crate::{
    ARG_GEOJSON, ARG_PRECISION, CliError, ENV_ENCODE_GEOJSON, resolve_precision, write_line,
};

/// CLI arguments for the `encode` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Encode a GeoJSON LineString, or a Feature wrapping one, \
                 into an encoded polyline. Positions are rounded to the \
                 requested precision.",
    about = "Encode a GeoJSON line into a polyline"
)]
#[ortho_config(prefix = "HAILROUTE")]
pub(crate) struct EncodeArgs {
    /// Path to a GeoJSON LineString geometry or Feature.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) geojson: Option<Utf8PathBuf>,
    /// Decimal digits to encode (default 5).
    #[arg(long = ARG_PRECISION, value_name = "digits")]
    #[serde(default)]
    pub(crate) precision: Option<u8>,
}

impl EncodeArgs {
    pub(crate) fn into_config(self) -> Result<EncodeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EncodeConfig::try_from(merged)
    }
}

/// Resolved `encode` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EncodeConfig {
    pub(crate) geojson: Utf8PathBuf,
    pub(crate) precision: Precision,
}

impl TryFrom<EncodeArgs> for EncodeConfig {
    type Error = CliError;

    fn try_from(args: EncodeArgs) -> Result<Self, Self::Error> {
        let geojson = args.geojson.ok_or(CliError::MissingArgument {
            field: ARG_GEOJSON,
            env: ENV_ENCODE_GEOJSON,
        })?;
        Ok(Self {
            geojson,
            precision: resolve_precision(args.precision)?,
        })
    }
}

/// GeoJSON documents accepted by `encode`.
#[derive(Deserialize)]
#[serde(untagged)]
enum GeoJsonLine {
    Feature(RouteFeature),
    Geometry(RouteGeometry),
}

impl From<GeoJsonLine> for RouteGeometry {
    fn from(line: GeoJsonLine) -> Self {
        match line {
            GeoJsonLine::Feature(feature) => feature.geometry,
            GeoJsonLine::Geometry(geometry) => geometry,
        }
    }
}

/// Loads a GeoJSON line from disk.
pub(crate) fn load_geometry(path: &Utf8Path) -> Result<RouteGeometry, CliError> {
    let text = read_input(path, ARG_GEOJSON)?;
    serde_json::from_str::<GeoJsonLine>(&text)
        .map(RouteGeometry::from)
        .map_err(|source| CliError::ParseGeometry {
            path: path.to_path_buf(),
            source,
        })
}

pub(crate) fn run_encode(args: EncodeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_encode_with(&config, writer)
}

pub(crate) fn run_encode_with(config: &EncodeConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let route = load_geometry(&config.geojson)?;
    let encoded = route
        .encode_with_precision(config.precision)
        .map_err(|source| CliError::Encode {
            path: config.geojson.clone(),
            source,
        })?;
    log::info!(
        "encoded {} coordinates into {} polyline bytes",
        route.len(),
        encoded.len()
    );
    write_line(writer, &encoded)
}
