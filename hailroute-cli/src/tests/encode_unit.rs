//! Focused unit tests covering the encode command.

use super::helpers::Workspace;
use super::*;
use crate::encode::{EncodeArgs, EncodeConfig, run_encode_with};
use hailroute_core::test_support::CANONICAL_POLYLINE;
use rstest::rstest;

const CANONICAL_GEOMETRY: &str = r#"{
    "type": "LineString",
    "coordinates": [[-120.2, 38.5], [-120.95, 40.7], [-126.453, 43.252]]
}"#;

fn encode_file(name: &str, contents: &str, precision: Precision) -> Result<String, CliError> {
    let workspace = Workspace::new();
    let config = EncodeConfig {
        geojson: workspace.write(name, contents),
        precision,
    };
    let mut output = Vec::new();
    run_encode_with(&config, &mut output)?;
    Ok(String::from_utf8(output).expect("output should be UTF-8"))
}

#[rstest]
fn converting_without_geojson_errors() {
    let err = EncodeConfig::try_from(EncodeArgs::default()).expect_err("missing geojson");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_GEOJSON);
            assert_eq!(env, ENV_ENCODE_GEOJSON);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn encodes_bare_geometry() {
    let output = encode_file("route.geojson", CANONICAL_GEOMETRY, Precision::FIVE)
        .expect("encode should succeed");
    assert_eq!(output, format!("{CANONICAL_POLYLINE}\n"));
}

#[rstest]
fn encodes_feature() {
    let feature = format!(
        r#"{{"type": "Feature", "geometry": {CANONICAL_GEOMETRY}, "properties": {{"name": "to the airport"}}}}"#
    );
    let output =
        encode_file("route.geojson", &feature, Precision::FIVE).expect("encode should succeed");
    assert_eq!(output.trim_end(), CANONICAL_POLYLINE);
}

#[rstest]
fn encodes_at_six_digits() {
    let geometry = r#"{"type": "LineString", "coordinates": [[-3.7, 2.9]]}"#;
    let output =
        encode_file("route.geojson", geometry, Precision::SIX).expect("encode should succeed");
    assert_eq!(output.trim_end(), "_a_pD~py`F");
}

#[rstest]
#[case::not_geojson("route.geojson", "[1, 2, 3]")]
#[case::point("point.geojson", r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#)]
fn rejects_non_line_input(#[case] name: &str, #[case] contents: &str) {
    let err = encode_file(name, contents, Precision::FIVE).expect_err("invalid GeoJSON");
    assert!(matches!(err, CliError::ParseGeometry { .. }), "unexpected error {err:?}");
}

#[rstest]
fn rejects_positions_off_the_globe() {
    let geometry = r#"{"type": "LineString", "coordinates": [[0.0, 0.0], [0.0, 95.0]]}"#;
    let err = encode_file("route.geojson", geometry, Precision::FIVE)
        .expect_err("latitude 95 is invalid");
    match err {
        CliError::Encode { source, .. } => {
            assert_eq!(source, hailroute_core::EncodeError::OutOfRange { index: 1 });
        }
        other => panic!("expected Encode, found {other:?}"),
    }
}
