//! Validated trade and reserve amounts.

use core::fmt;

use crate::error::AmmError;

/// A strictly positive, finite quantity of either pool asset.
///
/// `Amount` is the input type of every trade and the reserve type of every
/// constructor.  Validation happens once, at construction, so pool code can
/// rely on `get() > 0.0` without re-checking.
///
/// # Examples
///
/// ```
/// use centered_amm::domain::Amount;
///
/// let a = Amount::new(60.0);
/// assert!(a.is_ok());
/// assert!(Amount::new(0.0).is_err());
/// assert!(Amount::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Amount(f64);

impl Amount {
    /// Creates a new `Amount`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if `value` is zero, negative,
    /// NaN, or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() {
            return Err(AmmError::InvalidInput("amount must be finite"));
        }
        if value <= 0.0 {
            return Err(AmmError::InvalidInput("amount must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmmError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
