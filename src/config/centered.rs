//! Configuration for centered bonding-curve pools.

use crate::domain::Amount;
use crate::error::AmmError;

/// Configuration for a centered bonding-curve pool.
///
/// Defines the reference reserves (the reserves at equilibrium) and the
/// starting deviation `m`.  A balanced start uses `deviation = 0`.
///
/// # Derived Values
///
/// - Equilibrium price: `P₀ = quote_ref / base_ref`
/// - Starting fee rate: `|m| / (2|m| + ref)`, with `ref` the quote
///   reference when `m ≥ 0` and the base reference otherwise
///
/// # Validation
///
/// - Both reference reserves are strictly positive and finite (enforced
///   by [`Amount`]).
/// - The deviation is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenteredConfig {
    quote_ref: Amount,
    base_ref: Amount,
    deviation: f64,
}

impl CenteredConfig {
    /// Creates a new `CenteredConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `deviation` is not
    /// finite.
    pub fn new(quote_ref: Amount, base_ref: Amount, deviation: f64) -> Result<Self, AmmError> {
        let config = Self {
            quote_ref,
            base_ref,
            deviation,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a balanced configuration starting at equilibrium.
    #[must_use]
    pub const fn balanced(quote_ref: Amount, base_ref: Amount) -> Self {
        Self {
            quote_ref,
            base_ref,
            deviation: 0.0,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `deviation` is not
    /// finite.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.deviation.is_finite() {
            return Err(AmmError::InvalidConfiguration("deviation must be finite"));
        }
        Ok(())
    }

    /// Returns the quote reference reserve.
    #[must_use]
    pub const fn quote_ref(&self) -> Amount {
        self.quote_ref
    }

    /// Returns the base reference reserve.
    #[must_use]
    pub const fn base_ref(&self) -> Amount {
        self.base_ref
    }

    /// Returns the starting deviation.
    #[must_use]
    pub const fn deviation(&self) -> f64 {
        self.deviation
    }
}
