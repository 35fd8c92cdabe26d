use thiserror::Error;

/// Errors from [`crate::polyline::decode`] and the [`crate::polyline::Decoder`]
/// iterator.
///
/// Decoding fails fast: once any of these is returned no further coordinates
/// are produced, so callers never render a partially decoded route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A byte outside the `'?'..='~'` encoding alphabet was found.
    #[error("invalid polyline character {byte:#04x} at byte {index}")]
    InvalidCharacter {
        /// Byte offset of the offending character.
        index: usize,
        /// The rejected byte.
        byte: u8,
    },
    /// The input ended while a continuation bit was still set.
    #[error("polyline ended mid-value at byte {index}")]
    Truncated {
        /// Byte offset at which another character was expected.
        index: usize,
    },
    /// The input ended after a latitude delta with no longitude delta.
    #[error("polyline ended after a latitude delta at byte {index}")]
    MissingLongitude {
        /// Byte offset at which the longitude delta was expected.
        index: usize,
    },
    /// A value needs more chunks than fit in 64 bits.
    #[error("polyline value at byte {index} overflows a 64-bit integer")]
    Overflow {
        /// Byte offset of the chunk that overflowed.
        index: usize,
    },
}

/// Errors from [`crate::polyline::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A coordinate component was NaN or infinite.
    #[error("coordinate {index} is not finite")]
    NonFinite {
        /// Position of the coordinate in the input.
        index: usize,
    },
    /// Latitude fell outside `[-90, 90]` or longitude outside `[-180, 180]`.
    #[error("coordinate {index} is outside the valid longitude/latitude range")]
    OutOfRange {
        /// Position of the coordinate in the input.
        index: usize,
    },
}
