//! Fundamental domain value types used throughout the AMM library.
//!
//! This module contains the value types that model the pool domain:
//! trade amounts, fee rates, prices, curve regimes, trade results and
//! diagnostic snapshots.  Scalar types use newtypes with validated
//! constructors to enforce invariants.

mod amount;
mod fee_rate;
mod price;
mod regime;
mod side;
mod snapshot;
mod swap_result;

pub use amount::Amount;
pub use fee_rate::FeeRate;
pub use price::Price;
pub use regime::Regime;
pub use side::{Asset, Side};
pub use snapshot::{CurveView, PoolKind, PoolSnapshot};
pub use swap_result::SwapResult;
