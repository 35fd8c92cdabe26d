//! Route geometry handed to map rendering layers.
//!
//! A [`RouteGeometry`] is the decoded shape of a route: an ordered, immutable
//! list of `(longitude, latitude)` coordinates. With the `serde` feature it
//! serialises as a GeoJSON `LineString` geometry, and [`RouteFeature`] wraps
//! it in the GeoJSON `Feature` object map layers consume directly.

use geo::{Coord, LineString};

use crate::polyline::{EncodeError, Precision, encode_with_precision};

/// Decoded shape of a route in travel order.
///
/// Coordinates use `x` for longitude and `y` for latitude, both in degrees.
/// The sequence cannot be modified once built.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use hailroute_core::RouteGeometry;
///
/// let route = RouteGeometry::new(vec![
///     Coord { x: -120.2, y: 38.5 },
///     Coord { x: -120.95, y: 40.7 },
/// ]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.last(), Some(&Coord { x: -120.95, y: 40.7 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "geojson::LineStringObject", try_from = "geojson::LineStringObject")
)]
pub struct RouteGeometry {
    line: LineString<f64>,
}

impl RouteGeometry {
    /// Build a geometry from coordinates in travel order.
    #[must_use]
    pub fn new(coords: Vec<Coord<f64>>) -> Self {
        Self {
            line: LineString::new(coords),
        }
    }

    /// Coordinates in travel order.
    #[must_use]
    pub fn coords(&self) -> &[Coord<f64>] {
        &self.line.0
    }

    /// Number of coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.line.0.len()
    }

    /// Whether the route has no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line.0.is_empty()
    }

    /// Where the route starts.
    #[must_use]
    pub fn first(&self) -> Option<&Coord<f64>> {
        self.line.0.first()
    }

    /// Where the route ends.
    #[must_use]
    pub fn last(&self) -> Option<&Coord<f64>> {
        self.line.0.last()
    }

    /// Borrow the underlying [`LineString`].
    #[must_use]
    pub const fn as_line_string(&self) -> &LineString<f64> {
        &self.line
    }

    /// Consume the geometry, returning the underlying [`LineString`].
    #[must_use]
    pub fn into_line_string(self) -> LineString<f64> {
        self.line
    }

    /// Coordinates as `[longitude, latitude]` pairs.
    #[must_use]
    pub fn to_lng_lat_pairs(&self) -> Vec<[f64; 2]> {
        self.line.0.iter().map(|coord| [coord.x, coord.y]).collect()
    }

    /// Encode the geometry as a five-digit polyline.
    ///
    /// # Errors
    ///
    /// See [`crate::polyline::encode`].
    pub fn encode(&self) -> Result<String, EncodeError> {
        self.encode_with_precision(Precision::default())
    }

    /// Encode the geometry using an explicit [`Precision`].
    ///
    /// # Errors
    ///
    /// See [`crate::polyline::encode`].
    pub fn encode_with_precision(&self, precision: Precision) -> Result<String, EncodeError> {
        encode_with_precision(self.line.0.iter().copied(), precision)
    }

    /// Wrap the geometry in a GeoJSON [`RouteFeature`] with empty properties.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn into_feature(self) -> RouteFeature {
        RouteFeature::new(self)
    }
}

impl From<LineString<f64>> for RouteGeometry {
    fn from(line: LineString<f64>) -> Self {
        Self { line }
    }
}

impl From<RouteGeometry> for LineString<f64> {
    fn from(route: RouteGeometry) -> Self {
        route.line
    }
}

impl FromIterator<Coord<f64>> for RouteGeometry {
    fn from_iter<T: IntoIterator<Item = Coord<f64>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RouteGeometry {
    type Item = &'a Coord<f64>;
    type IntoIter = std::slice::Iter<'a, Coord<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.line.0.iter()
    }
}

#[cfg(feature = "serde")]
pub use geojson::{GeometryError, RouteFeature};

#[cfg(feature = "serde")]
mod geojson {
    use geo::Coord;
    use serde::{Deserialize, Serialize};
    use serde_json::{Map, Value};
    use thiserror::Error;

    use super::RouteGeometry;

    /// Errors raised while reading a GeoJSON `LineString`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
    pub enum GeometryError {
        /// A position had fewer than two components.
        #[error("position {index} needs both longitude and latitude")]
        ShortPosition {
            /// Offset of the position within `coordinates`.
            index: usize,
        },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    enum GeometryType {
        LineString,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    enum FeatureType {
        Feature,
    }

    /// Wire shape of a GeoJSON `LineString` geometry.
    ///
    /// Positions may carry a trailing altitude, which is dropped on read.
    #[derive(Serialize, Deserialize)]
    pub(super) struct LineStringObject {
        #[serde(rename = "type")]
        kind: GeometryType,
        coordinates: Vec<Vec<f64>>,
    }

    impl From<RouteGeometry> for LineStringObject {
        fn from(route: RouteGeometry) -> Self {
            Self {
                kind: GeometryType::LineString,
                coordinates: route
                    .to_lng_lat_pairs()
                    .into_iter()
                    .map(Vec::from)
                    .collect(),
            }
        }
    }

    impl TryFrom<LineStringObject> for RouteGeometry {
        type Error = GeometryError;

        fn try_from(object: LineStringObject) -> Result<Self, Self::Error> {
            object
                .coordinates
                .iter()
                .enumerate()
                .map(|(index, position)| match position.as_slice() {
                    [x, y, ..] => Ok(Coord { x: *x, y: *y }),
                    _ => Err(GeometryError::ShortPosition { index }),
                })
                .collect()
        }
    }

    /// GeoJSON `Feature` wrapping a route for a map layer.
    ///
    /// ```
    /// use geo::Coord;
    /// use hailroute_core::RouteGeometry;
    ///
    /// let feature = RouteGeometry::new(vec![Coord { x: 1.0, y: 2.0 }]).into_feature();
    /// let json = serde_json::to_value(&feature)?;
    /// assert_eq!(json["type"], "Feature");
    /// assert_eq!(json["geometry"]["type"], "LineString");
    /// assert_eq!(json["geometry"]["coordinates"][0][1], 2.0);
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct RouteFeature {
        #[serde(rename = "type")]
        kind: FeatureType,
        /// The route shape.
        pub geometry: RouteGeometry,
        /// Free-form feature properties; `null` in the source reads as empty.
        #[serde(default, deserialize_with = "null_as_empty")]
        pub properties: Map<String, Value>,
    }

    impl RouteFeature {
        /// Wrap `geometry` with empty properties.
        #[must_use]
        pub fn new(geometry: RouteGeometry) -> Self {
            Self {
                kind: FeatureType::Feature,
                geometry,
                properties: Map::new(),
            }
        }
    }

    fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<Map<String, Value>>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}
