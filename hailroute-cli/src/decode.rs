//! Decode command implementation for the Hailroute CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use hailroute_core::Precision;
use hailroute_core::polyline::decode_with_precision;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::read_input;
use crate::{
    ARG_FORMAT, ARG_INPUT, ARG_POLYLINE, ARG_PRECISION, CliError, ENV_DECODE_POLYLINE,
    OutputFormat, resolve_precision, write_route,
};

/// CLI arguments for the `decode` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Decode an encoded route polyline, as found in a directions \
                 response's overview_polyline, and print it as GeoJSON with \
                 longitude/latitude positions. The polyline may be passed \
                 inline or read from a file.",
    about = "Decode an encoded polyline into GeoJSON"
)]
#[ortho_config(prefix = "HAILROUTE")]
pub(crate) struct DecodeArgs {
    /// Encoded polyline to decode.
    #[arg(value_name = "polyline")]
    #[serde(default)]
    pub(crate) polyline: Option<String>,
    /// Read the encoded polyline from a file instead.
    #[arg(long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Decimal digits carried by the polyline (default 5; OSRM polyline6 uses 6).
    #[arg(long = ARG_PRECISION, value_name = "digits")]
    #[serde(default)]
    pub(crate) precision: Option<u8>,
    /// Output a GeoJSON Feature (default) or the bare geometry.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl DecodeArgs {
    pub(crate) fn into_config(self) -> Result<DecodeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DecodeConfig::try_from(merged)
    }
}

/// Where the encoded polyline comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PolylineSource {
    Inline(String),
    File(Utf8PathBuf),
}

impl PolylineSource {
    fn load(&self) -> Result<String, CliError> {
        match self {
            Self::Inline(polyline) => Ok(polyline.clone()),
            // Files usually end with a newline that is not part of the polyline.
            Self::File(path) => read_input(path, ARG_INPUT).map(|text| text.trim().to_owned()),
        }
    }
}

/// Resolved `decode` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecodeConfig {
    pub(crate) source: PolylineSource,
    pub(crate) precision: Precision,
    pub(crate) format: OutputFormat,
}

impl TryFrom<DecodeArgs> for DecodeConfig {
    type Error = CliError;

    fn try_from(args: DecodeArgs) -> Result<Self, Self::Error> {
        let source = match (args.polyline, args.input) {
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_POLYLINE,
                    second: ARG_INPUT,
                });
            }
            (Some(polyline), None) => PolylineSource::Inline(polyline),
            (None, Some(path)) => PolylineSource::File(path),
            (None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_POLYLINE,
                    env: ENV_DECODE_POLYLINE,
                });
            }
        };
        Ok(Self {
            source,
            precision: resolve_precision(args.precision)?,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_decode(args: DecodeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_decode_with(&config, writer)
}

pub(crate) fn run_decode_with(config: &DecodeConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let polyline = config.source.load()?;
    let route = decode_with_precision(&polyline, config.precision)
        .map_err(|source| CliError::Decode { source })?;
    log::info!("decoded route with {} coordinates", route.len());
    write_route(writer, Some(route), config.format)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DecodeConfig, CliError> {
    let merged = DecodeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DecodeConfig::try_from(merged)
}
