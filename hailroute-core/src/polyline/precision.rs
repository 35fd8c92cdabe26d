//! Decimal precision carried by encoded polyline integers.

use thiserror::Error;

/// Number of decimal digits preserved by an encoded polyline.
///
/// Directions services in the Google mould use five digits (a scale factor
/// of `1e5`); OSRM and Valhalla also emit six-digit `polyline6` strings.
///
/// # Examples
///
/// ```
/// use hailroute_core::polyline::Precision;
///
/// # fn main() -> Result<(), hailroute_core::polyline::PrecisionError> {
/// let six = Precision::new(6)?;
/// assert_eq!(six.digits(), 6);
/// assert_eq!(Precision::default(), Precision::FIVE);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Precision(u8);

/// Errors returned by [`Precision::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrecisionError {
    /// The requested digit count cannot be represented.
    #[error("polyline precision must be between 1 and {max} digits, got {digits}", max = Precision::MAX_DIGITS)]
    OutOfRange {
        /// Rejected digit count.
        digits: u8,
    },
}

impl Precision {
    /// Five decimal digits, the classic encoded polyline format.
    pub const FIVE: Self = Self(5);
    /// Six decimal digits, as produced by OSRM `polyline6`.
    pub const SIX: Self = Self(6);
    /// Largest accepted digit count.
    ///
    /// `1e10` is still exact as an `f64`, and a full longitude span at that
    /// scale fits comfortably in an `i64`.
    pub const MAX_DIGITS: u8 = 10;

    /// Validate and construct a [`Precision`].
    ///
    /// # Errors
    ///
    /// Returns [`PrecisionError::OutOfRange`] when `digits` is zero or larger
    /// than [`Precision::MAX_DIGITS`].
    pub const fn new(digits: u8) -> Result<Self, PrecisionError> {
        if digits == 0 || digits > Self::MAX_DIGITS {
            return Err(PrecisionError::OutOfRange { digits });
        }
        Ok(Self(digits))
    }

    /// Number of decimal digits.
    #[must_use]
    pub const fn digits(self) -> u8 {
        self.0
    }

    /// Scale factor between degrees and encoded integers.
    #[must_use]
    pub fn factor(self) -> f64 {
        10_f64.powi(i32::from(self.0))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::FIVE
    }
}

impl TryFrom<u8> for Precision {
    type Error = PrecisionError;

    fn try_from(digits: u8) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}
