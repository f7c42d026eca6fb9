//! Constant-product reference pool.
//!
//! The trade invariant is `x × y = k` where `x` is the quote reserve and
//! `y` the base reserve.  The flat fee is withheld from the **output**
//! leg after the pricing formula is applied.
//!
//! # Trade Algorithm (quote in, base out)
//!
//! 1. `gross = reserve_base × amount_in / (reserve_quote + amount_in)`
//! 2. `amount_out = gross × (1 − fee)`
//! 3. `fee = gross − amount_out`
//! 4. `reserve_quote += amount_in`
//! 5. `reserve_base −= amount_out` (fee stays in the pool)
//!
//! Selling runs the same steps with the roles of the reserves swapped.
//!
//! # Invariant
//!
//! After every trade, `k_after ≥ k_before` because the withheld fee stays
//! in the output reserve.

use crate::config::ReferenceConfig;
use crate::domain::{Amount, FeeRate, PoolKind, PoolSnapshot, Side, SwapResult};
use crate::error::AmmError;
use crate::math::{checked_div, finite, positive};
use crate::traits::{FromConfig, TradePool};

/// A constant-product pool (`x · y = k`) with a flat output-leg fee.
///
/// Used as the baseline the centered pool is compared against.
///
/// # State
///
/// - `reserve_quote` / `reserve_base`: current balances, fees included
/// - `accumulated_fees_quote` / `accumulated_fees_base`: lifetime counters
///   of the fee withheld in each asset
///
/// # Example
///
/// ```rust
/// use centered_amm::domain::{Amount, FeeRate};
/// use centered_amm::pools::ReferencePool;
/// use centered_amm::traits::TradePool;
///
/// let mut pool = ReferencePool::new(
///     Amount::new(180.0).expect("positive"),
///     Amount::new(120.0).expect("positive"),
///     FeeRate::STANDARD,
/// )
/// .expect("pool created");
///
/// let result = pool.buy(Amount::new(60.0).expect("positive")).expect("trade ok");
/// assert!((result.amount_out() - 29.91).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePool {
    reserve_quote: f64,
    reserve_base: f64,
    fee_rate: FeeRate,
    accumulated_fees_quote: f64,
    accumulated_fees_base: f64,
}

impl ReferencePool {
    /// Creates a pool from its initial reserves and flat fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the initial invariant
    /// overflows.
    pub fn new(
        reserve_quote: Amount,
        reserve_base: Amount,
        fee_rate: FeeRate,
    ) -> Result<Self, AmmError> {
        Self::from_config(&ReferenceConfig::new(reserve_quote, reserve_base, fee_rate))
    }

    /// Returns the current quote reserve.
    #[must_use]
    pub const fn reserve_quote(&self) -> f64 {
        self.reserve_quote
    }

    /// Returns the current base reserve.
    #[must_use]
    pub const fn reserve_base(&self) -> f64 {
        self.reserve_base
    }

    /// Returns the flat fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Returns the fees withheld in quote (from sells).
    #[must_use]
    pub const fn accumulated_fees_quote(&self) -> f64 {
        self.accumulated_fees_quote
    }

    /// Returns the fees withheld in base (from buys).
    #[must_use]
    pub const fn accumulated_fees_base(&self) -> f64 {
        self.accumulated_fees_base
    }

    /// Returns the product of the reserves.
    #[must_use]
    pub fn invariant(&self) -> f64 {
        self.reserve_quote * self.reserve_base
    }

    /// Computes the post-trade pool and the trade outcome without
    /// touching `self`.
    fn trade(&self, side: Side, amount: Amount) -> Result<(Self, SwapResult), AmmError> {
        let (reserve_in, reserve_out) = match side {
            Side::Buy => (self.reserve_quote, self.reserve_base),
            Side::Sell => (self.reserve_base, self.reserve_quote),
        };
        let amount_in = amount.get();

        let new_reserve_in = finite(reserve_in + amount_in, "input reserve after trade")?;
        let gross = checked_div(reserve_out * amount_in, new_reserve_in, "constant-product output")?;
        let amount_out = gross * self.fee_rate.complement();
        let fee = gross - amount_out;
        let new_reserve_out = positive(reserve_out - amount_out, "output reserve after trade")?;

        let mut next = *self;
        match side {
            Side::Buy => {
                next.reserve_quote = new_reserve_in;
                next.reserve_base = new_reserve_out;
                next.accumulated_fees_base += fee;
            }
            Side::Sell => {
                next.reserve_base = new_reserve_in;
                next.reserve_quote = new_reserve_out;
                next.accumulated_fees_quote += fee;
            }
        }

        let result = SwapResult::new(side, amount, amount_out, fee)?;
        Ok((next, result))
    }

    fn execute(&mut self, side: Side, amount: Amount) -> Result<SwapResult, AmmError> {
        let (next, result) = self.trade(side, amount)?;
        *self = next;
        log::debug!(
            "reference {}: in={} out={} fee={} reserves=({}, {})",
            side,
            amount,
            result.amount_out(),
            result.fee(),
            self.reserve_quote,
            self.reserve_base
        );
        Ok(result)
    }
}

impl FromConfig<ReferenceConfig> for ReferencePool {
    /// Creates a new pool from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ReferenceConfig::validate`].
    fn from_config(config: &ReferenceConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            reserve_quote: config.reserve_quote().get(),
            reserve_base: config.reserve_base().get(),
            fee_rate: config.fee_rate(),
            accumulated_fees_quote: 0.0,
            accumulated_fees_base: 0.0,
        })
    }
}

impl TradePool for ReferencePool {
    fn buy(&mut self, amount_quote: Amount) -> Result<SwapResult, AmmError> {
        self.execute(Side::Buy, amount_quote)
    }

    fn sell(&mut self, amount_base: Amount) -> Result<SwapResult, AmmError> {
        self.execute(Side::Sell, amount_base)
    }

    fn simulate_buy(&self, amount_quote: Amount) -> Result<SwapResult, AmmError> {
        self.trade(Side::Buy, amount_quote).map(|(_, result)| result)
    }

    fn simulate_sell(&self, amount_base: Amount) -> Result<SwapResult, AmmError> {
        self.trade(Side::Sell, amount_base).map(|(_, result)| result)
    }

    fn snapshot(&self) -> Result<PoolSnapshot, AmmError> {
        PoolSnapshot::new(
            PoolKind::Reference,
            self.reserve_quote,
            self.reserve_base,
            self.fee_rate.get(),
        )
    }
}
