//! Encoding coordinates into polyline strings.

use geo::Coord;

use super::{CHAR_OFFSET, CHUNK_BITS, CHUNK_MASK, CONTINUATION_BIT, EncodeError, Precision};

const LATITUDE_LIMIT: f64 = 90.0;
const LONGITUDE_LIMIT: f64 = 180.0;

/// Encode `(longitude, latitude)` coordinates as a five-digit polyline.
///
/// Each coordinate is rounded to the nearest `1e-5` degree, so
/// `decode(encode(coords))` reproduces `coords` to within half a grid step.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use hailroute_core::polyline::encode;
///
/// # fn main() -> Result<(), hailroute_core::polyline::EncodeError> {
/// let encoded = encode([
///     Coord { x: -120.2, y: 38.5 },
///     Coord { x: -120.95, y: 40.7 },
///     Coord { x: -126.453, y: 43.252 },
/// ])?;
/// assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`EncodeError::NonFinite`] for NaN or infinite components and
/// [`EncodeError::OutOfRange`] for positions off the globe.
pub fn encode<I>(coords: I) -> Result<String, EncodeError>
where
    I: IntoIterator<Item = Coord<f64>>,
{
    encode_with_precision(coords, Precision::default())
}

/// Encode coordinates using an explicit [`Precision`].
///
/// # Errors
///
/// See [`encode`].
pub fn encode_with_precision<I>(coords: I, precision: Precision) -> Result<String, EncodeError>
where
    I: IntoIterator<Item = Coord<f64>>,
{
    let factor = precision.factor();
    let mut encoded = String::new();
    let mut previous_latitude = 0_i64;
    let mut previous_longitude = 0_i64;

    for (index, coord) in coords.into_iter().enumerate() {
        let latitude = scale(coord.y, factor, LATITUDE_LIMIT, index)?;
        let longitude = scale(coord.x, factor, LONGITUDE_LIMIT, index)?;
        push_value(&mut encoded, latitude - previous_latitude);
        push_value(&mut encoded, longitude - previous_longitude);
        previous_latitude = latitude;
        previous_longitude = longitude;
    }
    Ok(encoded)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "degrees are range-checked before scaling, so the rounded value fits in i64"
)]
fn scale(degrees: f64, factor: f64, limit: f64, index: usize) -> Result<i64, EncodeError> {
    if !degrees.is_finite() {
        return Err(EncodeError::NonFinite { index });
    }
    if degrees.abs() > limit {
        return Err(EncodeError::OutOfRange { index });
    }
    Ok((degrees * factor).round() as i64)
}

#[expect(
    clippy::cast_sign_loss,
    reason = "zig-zag encoding maps signed values onto the unsigned range"
)]
const fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

fn push_value(encoded: &mut String, value: i64) {
    let mut remaining = zigzag_encode(value);
    while remaining >= CONTINUATION_BIT {
        encoded.push(chunk_char((remaining & CHUNK_MASK) | CONTINUATION_BIT));
        remaining >>= CHUNK_BITS;
    }
    encoded.push(chunk_char(remaining));
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "chunks never exceed six bits"
)]
fn chunk_char(chunk: u64) -> char {
    char::from(chunk as u8 + CHAR_OFFSET)
}
