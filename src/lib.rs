//! Facade crate for Hailroute's route geometry tooling.
//!
//! This crate re-exports the polyline codec and route geometry types, and
//! exposes the directions response model and GeoJSON feature behind the
//! `serde` feature.

#![forbid(unsafe_code)]

pub use hailroute_core::polyline;
pub use hailroute_core::{
    DecodeError, EncodeError, Precision, PrecisionError, RouteGeometry, decode, encode,
};

#[cfg(feature = "serde")]
pub use hailroute_core::{
    DirectionsResponse, DirectionsRoute, GeometryError, OverviewPolyline, RouteFeature,
};
