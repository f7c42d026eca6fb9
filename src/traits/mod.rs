//! Core trait abstractions for pool operations.
//!
//! [`TradePool`] executes and quotes trades; [`FromConfig`] builds a pool
//! from its configuration.

mod from_config;
mod trade_pool;

pub use from_config::FromConfig;
pub use trade_pool::TradePool;
