//! Outcome of a trade against either pool.

use core::fmt;

use super::{Amount, Price, Side};
use crate::error::AmmError;

/// The outcome of a buy or sell, including amounts exchanged and the
/// implied fee.
///
/// `fee` is expressed in output units: it is the shortfall of
/// `amount_out` against a fee-free constant-product trade at the
/// pre-trade reserves.  For a flat-fee pool it equals the withheld part of
/// the output leg; for the centered pool it is zero on trades that move
/// toward equilibrium.
///
/// # Invariants
///
/// - `amount_out` and `fee` are finite and non-negative.
///
/// # Examples
///
/// ```
/// use centered_amm::domain::{Amount, Side, SwapResult};
///
/// let input = Amount::new(60.0).expect("positive");
/// let result = SwapResult::new(Side::Buy, input, 29.91, 0.09);
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapResult {
    side: Side,
    amount_in: Amount,
    amount_out: f64,
    fee: f64,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`] if `amount_out` or `fee` is
    /// negative or non-finite.
    pub fn new(side: Side, amount_in: Amount, amount_out: f64, fee: f64) -> crate::error::Result<Self> {
        if !amount_out.is_finite() || amount_out < 0.0 {
            return Err(AmmError::DegenerateState(
                "amount_out must be finite and non-negative",
            ));
        }
        if !fee.is_finite() || fee < 0.0 {
            return Err(AmmError::DegenerateState(
                "fee must be finite and non-negative",
            ));
        }
        Ok(Self {
            side,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the trade direction.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns the input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    #[must_use]
    pub const fn amount_out(&self) -> f64 {
        self.amount_out
    }

    /// Returns the implied fee, in output units.
    #[must_use]
    pub const fn fee(&self) -> f64 {
        self.fee
    }

    /// Computes the realized price in quote per base.
    ///
    /// For a buy that is `amount_in / amount_out`; for a sell,
    /// `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if a buy produced no output.
    pub fn effective_price(&self) -> crate::error::Result<Price> {
        match self.side {
            Side::Buy => Price::from_amounts(self.amount_in.get(), self.amount_out),
            Side::Sell => Price::from_amounts(self.amount_out, self.amount_in.get()),
        }
    }

    /// Computes the slippage percentage relative to a reference price.
    ///
    /// The formula is `|effective_price - reference_price| / reference_price * 100`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `reference_price` is zero.
    /// Returns an error if the effective price computation fails.
    pub fn slippage_percent(&self, reference_price: Price) -> crate::error::Result<f64> {
        let effective = self.effective_price()?;
        Ok(effective.relative_difference(reference_price)? * 100.0)
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult({}, in={}, out={}, fee={})",
            self.side, self.amount_in, self.amount_out, self.fee
        )
    }
}
