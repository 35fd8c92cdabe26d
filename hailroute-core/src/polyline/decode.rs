//! Lazy decoding of encoded polylines into coordinates.

use std::iter::FusedIterator;

use geo::Coord;

use super::{CHAR_OFFSET, CHUNK_BITS, CHUNK_MASK, CONTINUATION_BIT, DecodeError, Precision};
use crate::RouteGeometry;

/// Decode a five-digit encoded polyline into a [`RouteGeometry`].
///
/// Coordinates are returned as `(longitude, latitude)` in travel order. An
/// empty string yields an empty geometry.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use hailroute_core::polyline::decode;
///
/// # fn main() -> Result<(), hailroute_core::polyline::DecodeError> {
/// let route = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@")?;
/// assert_eq!(route.first(), Some(&Coord { x: -120.2, y: 38.5 }));
/// assert_eq!(route.len(), 3);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns a [`DecodeError`] when the input contains characters outside the
/// encoding alphabet or ends part-way through a coordinate.
pub fn decode(encoded: &str) -> Result<RouteGeometry, DecodeError> {
    decode_with_precision(encoded, Precision::default())
}

/// Decode an encoded polyline using an explicit [`Precision`].
///
/// # Errors
///
/// See [`decode`].
pub fn decode_with_precision(
    encoded: &str,
    precision: Precision,
) -> Result<RouteGeometry, DecodeError> {
    let coords = Decoder::new(encoded, precision)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| log::debug!("rejected encoded polyline: {err}"))?;
    log::debug!(
        "decoded {} coordinates from {} polyline bytes at precision {}",
        coords.len(),
        encoded.len(),
        precision.digits()
    );
    Ok(RouteGeometry::new(coords))
}

/// Iterator over the coordinates of an encoded polyline.
///
/// Each item is one `(longitude, latitude)` pair. The iterator is fused: after
/// yielding an error it yields `None`.
///
/// ```
/// use hailroute_core::polyline::{DecodeError, Decoder, Precision};
///
/// let mut decoder = Decoder::new("_p~iF~ps|U_", Precision::FIVE);
/// assert!(matches!(decoder.next(), Some(Ok(_))));
/// assert_eq!(decoder.next(), Some(Err(DecodeError::Truncated { index: 11 })));
/// assert_eq!(decoder.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    index: usize,
    latitude: i64,
    longitude: i64,
    factor: f64,
    failed: bool,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over `encoded`.
    #[must_use]
    pub fn new(encoded: &'a str, precision: Precision) -> Self {
        Self {
            bytes: encoded.as_bytes(),
            index: 0,
            latitude: 0,
            longitude: 0,
            factor: precision.factor(),
            failed: false,
        }
    }

    fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.index)
    }

    fn next_coord(&mut self) -> Result<Coord<f64>, DecodeError> {
        let latitude_delta = self.read_value()?;
        if self.remaining() == 0 {
            return Err(DecodeError::MissingLongitude { index: self.index });
        }
        let longitude_delta = self.read_value()?;

        self.latitude = self
            .latitude
            .checked_add(latitude_delta)
            .ok_or(DecodeError::Overflow { index: self.index })?;
        self.longitude = self
            .longitude
            .checked_add(longitude_delta)
            .ok_or(DecodeError::Overflow { index: self.index })?;

        Ok(self.to_degrees())
    }

    /// Read one zig-zag encoded value starting at the cursor.
    fn read_value(&mut self) -> Result<i64, DecodeError> {
        let mut result: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let index = self.index;
            let Some(&byte) = self.bytes.get(index) else {
                return Err(DecodeError::Truncated { index });
            };
            if !(b'?'..=b'~').contains(&byte) {
                return Err(DecodeError::InvalidCharacter { index, byte });
            }
            let chunk = u64::from(byte - CHAR_OFFSET);
            let bits = chunk & CHUNK_MASK;
            let shifted = bits
                .checked_shl(shift)
                .filter(|value| value >> shift == bits)
                .ok_or(DecodeError::Overflow { index })?;
            result |= shifted;
            self.index = index + 1;

            if chunk & CONTINUATION_BIT == 0 {
                return Ok(zigzag_decode(result));
            }
            shift += CHUNK_BITS;
        }
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "accumulators are scaled integers converted back to degrees"
    )]
    fn to_degrees(&self) -> Coord<f64> {
        Coord {
            x: self.longitude as f64 / self.factor,
            y: self.latitude as f64 / self.factor,
        }
    }
}

#[expect(
    clippy::cast_possible_wrap,
    reason = "the magnitude is shifted right once so it always fits in i64"
)]
const fn zigzag_decode(value: u64) -> i64 {
    let magnitude = (value >> 1) as i64;
    if value & 1 == 1 { !magnitude } else { magnitude }
}

impl Iterator for Decoder<'_> {
    type Item = Result<Coord<f64>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining() == 0 {
            return None;
        }
        let item = self.next_coord();
        self.failed = item.is_err();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // Every pair needs at least two bytes; a lone trailing byte still
        // yields one error item.
        let remaining = self.remaining();
        (usize::from(remaining > 0), Some(remaining.div_ceil(2)))
    }
}

impl FusedIterator for Decoder<'_> {}
