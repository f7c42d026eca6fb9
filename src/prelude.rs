//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use centered_amm::prelude::*;
//! ```

pub use crate::domain::{
    Amount, Asset, CurveView, FeeRate, PoolKind, PoolSnapshot, Price, Regime, Side, SwapResult,
};

pub use crate::traits::{FromConfig, TradePool};

pub use crate::config::{CenteredConfig, PoolConfig, ReferenceConfig};

pub use crate::error::{AmmError, Result};

pub use crate::factory::DefaultPoolFactory;

pub use crate::pools::PoolBox;
#[cfg(feature = "centered")]
pub use crate::pools::{CenteredPool, Transition};
#[cfg(feature = "constant-product")]
pub use crate::pools::ReferencePool;

pub use crate::scenario::{ScenarioReport, Step};
