//! Route geometry core for the Hailroute ride-hailing client.
//!
//! Directions services describe a route's shape as an encoded polyline. This
//! crate decodes those strings into [`RouteGeometry`] values for map layers,
//! encodes geometries back into polylines, and (with the `serde` feature)
//! reads directions responses and writes GeoJSON.
//!
//! Every operation here is pure and synchronous; nothing performs I/O.

#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
pub mod directions;
pub mod geometry;
pub mod polyline;
#[doc(hidden)]
pub mod test_support;

#[cfg(feature = "serde")]
pub use directions::{DirectionsResponse, DirectionsRoute, OverviewPolyline};
#[cfg(feature = "serde")]
pub use geometry::{GeometryError, RouteFeature};
pub use geometry::RouteGeometry;
pub use polyline::{DecodeError, EncodeError, Precision, PrecisionError, decode, encode};

#[cfg(test)]
mod tests {
    use super::*;

    const fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_thread_safe() {
        assert_send_sync::<RouteGeometry>();
        assert_send_sync::<polyline::Decoder<'static>>();
        assert_send_sync::<DecodeError>();
        assert_send_sync::<EncodeError>();
    }

    #[test]
    fn decoding_keeps_no_state_between_calls() {
        let first = decode(test_support::CANONICAL_POLYLINE).expect("decodes");
        let second = decode("??").expect("decodes");
        let first_again = decode(test_support::CANONICAL_POLYLINE).expect("decodes");
        let second_again = decode("??").expect("decodes");
        assert_eq!(first, first_again);
        assert_eq!(second, second_again);
    }
}
