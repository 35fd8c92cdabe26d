//! Shared fixtures for unit, behaviour and property tests.

use geo::Coord;

/// The published reference example for the encoded polyline format.
pub const CANONICAL_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

/// Coordinates encoded by [`CANONICAL_POLYLINE`], as `(longitude, latitude)`.
#[must_use]
pub fn canonical_coords() -> Vec<Coord<f64>> {
    vec![
        Coord { x: -120.2, y: 38.5 },
        Coord { x: -120.95, y: 40.7 },
        Coord {
            x: -126.453,
            y: 43.252,
        },
    ]
}

/// A trimmed directions response whose first route is [`CANONICAL_POLYLINE`].
pub const SAMPLE_DIRECTIONS_JSON: &str = r#"{
    "geocoded_waypoints": [{ "geocoder_status": "OK", "place_id": "ChIJ" }],
    "routes": [
        {
            "summary": "I-80 E",
            "bounds": {
                "northeast": { "lat": 43.252, "lng": -120.2 },
                "southwest": { "lat": 38.5, "lng": -126.453 }
            },
            "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" },
            "legs": []
        },
        {
            "summary": "US-50 E",
            "overview_polyline": { "points": "??" }
        }
    ],
    "status": "OK"
}"#;
