//! Flat proportional fee rate.

use core::fmt;

use crate::error::AmmError;

/// A flat proportional fee in `[0, 1)`, applied to the output leg of a
/// constant-product trade.
///
/// `0.003` is a 0.30% fee.  A rate of `1.0` would withhold the entire
/// output and is rejected.
///
/// # Examples
///
/// ```
/// use centered_amm::domain::FeeRate;
///
/// let fee = FeeRate::new(0.003).expect("valid fee");
/// assert!((fee.complement() - 0.997).abs() < 1e-12);
/// assert!(FeeRate::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct FeeRate(f64);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(0.0);

    /// 0.30%, the classic constant-product fee.
    pub const STANDARD: Self = Self(0.003);

    /// Creates a new `FeeRate`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `value` is non-finite, negative,
    /// or `>= 1`.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() {
            return Err(AmmError::InvalidFee("fee rate must be finite"));
        }
        if !(0.0..1.0).contains(&value) {
            return Err(AmmError::InvalidFee("fee rate must lie in [0, 1)"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying rate.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `1 − rate`, the share of the gross output paid to the trader.
    #[must_use]
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for FeeRate {
    type Error = AmmError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FeeRate> for f64 {
    fn from(fee: FeeRate) -> Self {
        fee.0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 * 100.0)
    }
}
