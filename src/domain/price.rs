//! Exchange rate between the two pool assets.

use core::fmt;

use crate::error::AmmError;

/// Exchange rate expressed as units of quote asset per unit of base asset.
///
/// Wraps an `f64` value that must be finite and non-negative.
///
/// # Examples
///
/// ```
/// use centered_amm::domain::Price;
///
/// let price = Price::new(1.5);
/// assert!(price.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AmmError::DegenerateState(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Computes a price from two quantities: `quote / base`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `base` is zero.
    /// Returns [`AmmError::DegenerateState`] if the resulting ratio is not
    /// finite.
    pub fn from_amounts(quote: f64, base: f64) -> crate::error::Result<Self> {
        if base == 0.0 {
            return Err(AmmError::DivisionByZero);
        }
        Self::new(quote / base)
    }

    /// Computes the reciprocal price (`1 / self`).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if the price is zero.
    pub fn inverse(&self) -> crate::error::Result<Self> {
        if self.0 == 0.0 {
            return Err(AmmError::DivisionByZero);
        }
        Self::new(1.0 / self.0)
    }

    /// Returns the relative distance `|self − other| / other`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    pub fn relative_difference(&self, other: Price) -> crate::error::Result<f64> {
        if other.0 == 0.0 {
            return Err(AmmError::DivisionByZero);
        }
        Ok((self.0 - other.0).abs() / other.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
