//! Enum dispatch wrapper for both pool types.
//!
//! [`PoolBox`] wraps every concrete pool implementation behind a single
//! enum, enabling heterogeneous collections and zero-cost static
//! dispatch.  Each variant is feature-gated to match its pool type.

#[cfg(feature = "centered")]
use super::centered::CenteredPool;
#[cfg(feature = "constant-product")]
use super::reference::ReferencePool;

use crate::domain::{Amount, PoolSnapshot, SwapResult};
use crate::error::AmmError;
use crate::traits::TradePool;

/// Zero-cost dispatch enum wrapping the concrete pool implementations.
///
/// Each variant is feature-gated behind its respective Cargo feature
/// flag.  The enum implements [`TradePool`] by delegating every method
/// call to the inner pool via `match`, so scenario code can hold both
/// pools in one collection and replay the same steps against each.
///
/// # Example
///
/// ```text
/// let mut pools = vec![PoolBox::Centered(Box::new(c)), PoolBox::Reference(Box::new(r))];
/// for pool in &mut pools {
///     pool.buy(amount)?;
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PoolBox {
    /// Centered bonding curve with a deviation-dependent fee.
    #[cfg(feature = "centered")]
    Centered(Box<CenteredPool>),

    /// Constant product with a flat fee.
    #[cfg(feature = "constant-product")]
    Reference(Box<ReferencePool>),
}

/// Helper macro to delegate a method call to every PoolBox variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            #[cfg(feature = "centered")]
            PoolBox::Centered(p) => p.$method($($arg),*),
            #[cfg(feature = "constant-product")]
            PoolBox::Reference(p) => p.$method($($arg),*),
        }
    };
}

impl TradePool for PoolBox {
    fn buy(&mut self, amount_quote: Amount) -> Result<SwapResult, AmmError> {
        delegate!(self, buy(amount_quote))
    }

    fn sell(&mut self, amount_base: Amount) -> Result<SwapResult, AmmError> {
        delegate!(self, sell(amount_base))
    }

    fn simulate_buy(&self, amount_quote: Amount) -> Result<SwapResult, AmmError> {
        delegate!(self, simulate_buy(amount_quote))
    }

    fn simulate_sell(&self, amount_base: Amount) -> Result<SwapResult, AmmError> {
        delegate!(self, simulate_sell(amount_base))
    }

    fn snapshot(&self) -> Result<PoolSnapshot, AmmError> {
        delegate!(self, snapshot())
    }
}

#[cfg(feature = "centered")]
impl From<CenteredPool> for PoolBox {
    fn from(pool: CenteredPool) -> Self {
        Self::Centered(Box::new(pool))
    }
}

#[cfg(feature = "constant-product")]
impl From<ReferencePool> for PoolBox {
    fn from(pool: ReferencePool) -> Self {
        Self::Reference(Box::new(pool))
    }
}
