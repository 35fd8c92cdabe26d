//! Directions API response types.
//!
//! Only the parts needed to draw a route are modelled: the response status
//! and each route's `overview_polyline`. Unknown fields are ignored so full
//! vendor payloads deserialise unchanged.
//!
//! ```
//! use hailroute_core::DirectionsResponse;
//!
//! let json = r#"{
//!     "status": "OK",
//!     "routes": [{ "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" } }]
//! }"#;
//! let response: DirectionsResponse = serde_json::from_str(json)?;
//! let route = response.primary_route()?.expect("response carries a route");
//! assert_eq!(route.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::Deserialize;

use crate::RouteGeometry;
use crate::polyline::{DecodeError, Precision, decode_with_precision};

/// Status value reported by a successful directions request.
pub const STATUS_OK: &str = "OK";

/// Directions API response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DirectionsResponse {
    /// Status code from the service.
    ///
    /// Common values:
    /// - `"OK"` - at least one route was found
    /// - `"ZERO_RESULTS"` - no route between origin and destination
    /// - `"REQUEST_DENIED"` - the API key was rejected
    #[serde(default)]
    pub status: Option<String>,

    /// Human-readable detail accompanying a failure status.
    #[serde(default)]
    pub error_message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

/// One candidate route in a [`DirectionsResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DirectionsRoute {
    /// Short description of the route, e.g. the main road taken.
    #[serde(default)]
    pub summary: Option<String>,
    /// Simplified shape of the whole route.
    #[serde(default)]
    pub overview_polyline: Option<OverviewPolyline>,
}

/// Encoded overview shape of a route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverviewPolyline {
    /// Five-digit encoded polyline.
    pub points: String,
}

impl DirectionsResponse {
    /// Check if the response indicates success.
    ///
    /// A missing status is treated as success; some relays strip it.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_deref().is_none_or(|status| status == STATUS_OK)
    }

    /// Encoded polyline of the first route, if any.
    #[must_use]
    pub fn primary_polyline(&self) -> Option<&str> {
        self.routes
            .first()
            .and_then(|route| route.overview_polyline.as_ref())
            .map(|polyline| polyline.points.as_str())
    }

    /// Decode the first route's overview polyline.
    ///
    /// Returns `Ok(None)` when the response carries no route or no polyline,
    /// in which case nothing should be drawn.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the polyline is malformed.
    pub fn primary_route(&self) -> Result<Option<RouteGeometry>, DecodeError> {
        self.primary_route_with_precision(Precision::default())
    }

    /// Decode the first route's overview polyline at an explicit precision.
    ///
    /// # Errors
    ///
    /// See [`DirectionsResponse::primary_route`].
    pub fn primary_route_with_precision(
        &self,
        precision: Precision,
    ) -> Result<Option<RouteGeometry>, DecodeError> {
        if !self.is_ok() {
            log::warn!(
                "directions response status {:?}: {}",
                self.status,
                self.error_message.as_deref().unwrap_or("no detail")
            );
        }
        self.primary_polyline()
            .map(|points| decode_with_precision(points, precision))
            .transpose()
    }
}
