//! Encoded polyline codec.
//!
//! Directions services return route shapes as an "encoded polyline": a
//! printable string of zig-zag encoded latitude/longitude deltas split into
//! five-bit chunks and offset by 63. [`decode`] turns such a string into a
//! [`RouteGeometry`](crate::RouteGeometry) ready for a map layer and
//! [`encode`] performs the reverse.
//!
//! Both directions are pure functions: they hold no shared state and may be
//! called concurrently from any thread.

mod decode;
mod encode;
mod error;
mod precision;

pub use decode::{Decoder, decode, decode_with_precision};
pub use encode::{encode, encode_with_precision};
pub use error::{DecodeError, EncodeError};
pub use precision::{Precision, PrecisionError};

/// Bias added to every chunk to land in the printable range.
const CHAR_OFFSET: u8 = 63;
/// Set on every chunk except the last of a value.
const CONTINUATION_BIT: u64 = 0x20;
/// Payload bits carried by each chunk.
const CHUNK_MASK: u64 = 0x1f;
const CHUNK_BITS: u32 = 5;
