//! Focused unit tests covering the decode command.

use super::helpers::{Workspace, output_json};
use super::*;
use crate::decode::{
    DecodeArgs, DecodeConfig, PolylineSource, config_from_layers_for_test, run_decode_with,
};
use hailroute_core::test_support::CANONICAL_POLYLINE;
use rstest::rstest;
use serde_json::json;

fn inline_config(polyline: &str, format: OutputFormat) -> DecodeConfig {
    DecodeConfig {
        source: PolylineSource::Inline(polyline.to_owned()),
        precision: Precision::FIVE,
        format,
    }
}

#[rstest]
fn converting_without_polyline_errors() {
    let err = DecodeConfig::try_from(DecodeArgs::default()).expect_err("missing polyline");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_POLYLINE);
            assert_eq!(env, ENV_DECODE_POLYLINE);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_with_both_sources_errors() {
    let args = DecodeArgs {
        polyline: Some(CANONICAL_POLYLINE.to_owned()),
        input: Some("route.txt".into()),
        ..DecodeArgs::default()
    };
    let err = DecodeConfig::try_from(args).expect_err("conflicting sources");
    assert!(
        matches!(err, CliError::ConflictingArguments { first: ARG_POLYLINE, second: ARG_INPUT }),
        "unexpected error {err:?}"
    );
}

#[rstest]
#[case(None, Precision::FIVE)]
#[case(Some(6), Precision::SIX)]
fn converting_resolves_precision(#[case] digits: Option<u8>, #[case] expected: Precision) {
    let args = DecodeArgs {
        polyline: Some(CANONICAL_POLYLINE.to_owned()),
        precision: digits,
        ..DecodeArgs::default()
    };
    let config = DecodeConfig::try_from(args).expect("config should build");
    assert_eq!(config.precision, expected);
    assert_eq!(config.format, OutputFormat::Feature);
}

#[rstest]
fn converting_rejects_unsupported_precision() {
    let args = DecodeArgs {
        polyline: Some(CANONICAL_POLYLINE.to_owned()),
        precision: Some(0),
        ..DecodeArgs::default()
    };
    let err = DecodeConfig::try_from(args).expect_err("precision 0 is invalid");
    assert!(matches!(err, CliError::InvalidPrecision(_)), "unexpected error {err:?}");
}

#[rstest]
fn decode_writes_feature() {
    let mut output = Vec::new();
    run_decode_with(&inline_config(CANONICAL_POLYLINE, OutputFormat::Feature), &mut output)
        .expect("decode should succeed");
    assert_eq!(
        output_json(&output),
        json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [[-120.2, 38.5], [-120.95, 40.7], [-126.453, 43.252]],
            },
            "properties": {},
        })
    );
}

#[rstest]
fn decode_writes_bare_geometry() {
    let mut output = Vec::new();
    run_decode_with(&inline_config("??", OutputFormat::Geometry), &mut output)
        .expect("decode should succeed");
    assert_eq!(
        output_json(&output),
        json!({ "type": "LineString", "coordinates": [[0.0, 0.0]] })
    );
}

#[rstest]
fn decode_reports_malformed_polyline() {
    let mut output = Vec::new();
    let err = run_decode_with(&inline_config("_", OutputFormat::Feature), &mut output)
        .expect_err("truncated polyline should fail");
    match err {
        CliError::Decode { source } => {
            assert_eq!(source, hailroute_core::DecodeError::Truncated { index: 1 });
        }
        other => panic!("expected Decode, found {other:?}"),
    }
    assert!(output.is_empty(), "nothing should be written on failure");
}

#[rstest]
fn decode_reads_trimmed_polyline_from_file() {
    let workspace = Workspace::new();
    let path = workspace.write("route.txt", &format!("{CANONICAL_POLYLINE}\n"));
    let config = DecodeConfig {
        source: PolylineSource::File(path),
        precision: Precision::FIVE,
        format: OutputFormat::Geometry,
    };
    let mut output = Vec::new();
    run_decode_with(&config, &mut output).expect("decode should succeed");
    assert_eq!(output_json(&output)["coordinates"][2], json!([-126.453, 43.252]));
}

#[rstest]
fn decode_reports_missing_input_file() {
    let workspace = Workspace::new();
    let config = DecodeConfig {
        source: PolylineSource::File(workspace.path("missing.txt")),
        precision: Precision::FIVE,
        format: OutputFormat::Feature,
    };
    let err = run_decode_with(&config, &mut Vec::new()).expect_err("missing file");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_INPUT),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn decode_rejects_directory_input() {
    let workspace = Workspace::new();
    let dir = workspace.path("routes");
    std::fs::create_dir(dir.as_std_path()).expect("create directory");
    let config = DecodeConfig {
        source: PolylineSource::File(dir),
        precision: Precision::FIVE,
        format: OutputFormat::Feature,
    };
    let err = run_decode_with(&config, &mut Vec::new()).expect_err("directory input");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_INPUT),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "precision": "six" }));

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

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "precision": 6, "format": "geometry" }), None);
    composer.push_environment(json!({ "polyline": "??", "precision": 7 }));
    composer.push_cli(json!({ "format": "feature" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.source, PolylineSource::Inline("??".to_owned()));
    assert_eq!(config.precision.digits(), 7);
    assert_eq!(config.format, OutputFormat::Feature);
}
