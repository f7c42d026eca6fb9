//! Configuration for constant-product reference pools.

use crate::domain::{Amount, FeeRate};
use crate::error::AmmError;

/// Configuration for a constant-product reference pool (`x · y = k`).
///
/// Defines the initial reserves and the flat fee withheld from the output
/// leg of every trade.
///
/// # Derived Values
///
/// - Initial invariant: `k = reserve_quote × reserve_base`
/// - Initial price: `P₀ = (reserve_quote / reserve_base) / (1 − fee)`
///
/// # Validation
///
/// Reserves are validated by [`Amount`] and the fee by [`FeeRate`], so
/// every constructed value is valid; [`validate`](Self::validate) exists
/// for configs obtained by deserialization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceConfig {
    reserve_quote: Amount,
    reserve_base: Amount,
    fee_rate: FeeRate,
}

impl ReferenceConfig {
    /// Creates a new `ReferenceConfig`.
    #[must_use]
    pub const fn new(reserve_quote: Amount, reserve_base: Amount, fee_rate: FeeRate) -> Self {
        Self {
            reserve_quote,
            reserve_base,
            fee_rate,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the initial invariant
    /// overflows.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !(self.reserve_quote.get() * self.reserve_base.get()).is_finite() {
            return Err(AmmError::InvalidConfiguration(
                "initial invariant overflows",
            ));
        }
        Ok(())
    }

    /// Returns the initial quote reserve.
    #[must_use]
    pub const fn reserve_quote(&self) -> Amount {
        self.reserve_quote
    }

    /// Returns the initial base reserve.
    #[must_use]
    pub const fn reserve_base(&self) -> Amount {
        self.reserve_base
    }

    /// Returns the flat fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }
}
