//! Core trade trait for executing and quoting trades against a pool.
//!
//! [`TradePool`] is the contract every pool exposes to callers that drive
//! trades: a scenario runner, a demo, or a test.  It covers the full
//! lifecycle of a trade:
//!
//! 1. **Execute**: [`TradePool::buy`] and [`TradePool::sell`] mutate the
//!    pool.
//! 2. **Quote**: [`TradePool::simulate_buy`] and
//!    [`TradePool::simulate_sell`] compute the same outcome without
//!    touching state.
//! 3. **Inspect**: [`TradePool::snapshot`] reports reserves, fee rate,
//!    price and value for reporting.
//!
//! # Parity
//!
//! For every implementation, `simulate_buy(a)` on a pool returns exactly
//! what `buy(a)` returns on a clone of it, and the simulate methods never
//! mutate.
//!
//! # Atomicity
//!
//! `buy` and `sell` compute the complete post-trade state first and
//! commit it in one assignment.  When they return an error the pool is
//! unchanged.
//!
//! # Dispatch Model
//!
//! Pools are dispatched via enums (not `dyn` trait objects).  See the
//! `pools` module for the `PoolBox` enum that wraps both pool variants.

use crate::domain::{Amount, PoolSnapshot, SwapResult};
use crate::error::AmmError;

/// Core trait for both pool implementations.
///
/// Quote is the asset paid in by a buy; base is the asset paid in by a
/// sell.  Every method is required.
///
/// # Implementors
///
/// - `CenteredPool`: centered bonding curve with a deviation-dependent fee
/// - `ReferencePool`: constant product with a flat output-leg fee
///
/// # Errors
///
/// - [`AmmError::DegenerateState`]: a derived reserve became
///   non-positive or non-finite
/// - [`AmmError::DivisionByZero`]: a formula divided by zero
pub trait TradePool {
    /// Pays `amount_quote` in and takes base out.
    ///
    /// # Errors
    ///
    /// Returns an [`AmmError`] if the post-trade state is degenerate; the
    /// pool is left unchanged.
    fn buy(&mut self, amount_quote: Amount) -> Result<SwapResult, AmmError>;

    /// Pays `amount_base` in and takes quote out.
    ///
    /// # Errors
    ///
    /// Returns an [`AmmError`] if the post-trade state is degenerate; the
    /// pool is left unchanged.
    fn sell(&mut self, amount_base: Amount) -> Result<SwapResult, AmmError>;

    /// Quotes a buy without mutating the pool.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`buy`](Self::buy) would.
    fn simulate_buy(&self, amount_quote: Amount) -> Result<SwapResult, AmmError>;

    /// Quotes a sell without mutating the pool.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`sell`](Self::sell) would.
    fn simulate_sell(&self, amount_base: Amount) -> Result<SwapResult, AmmError>;

    /// Returns a diagnostic view of the current state.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`] if the derived reserves cannot
    /// be computed.
    fn snapshot(&self) -> Result<PoolSnapshot, AmmError>;
}
