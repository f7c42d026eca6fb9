//! Default pool factory implementation.

use crate::config::PoolConfig;
use crate::error::AmmError;
use crate::pools::PoolBox;

#[cfg(any(feature = "centered", feature = "constant-product"))]
use crate::traits::FromConfig;

/// Stateless factory for creating pool instances from configuration.
///
/// `DefaultPoolFactory` is the single entry point for constructing either
/// pool.  It matches on the [`PoolConfig`] variant, validates the
/// configuration, delegates to the pool's [`FromConfig`] implementation,
/// and wraps the result in a [`PoolBox`].
///
/// # Example
///
/// ```rust
/// use centered_amm::config::{PoolConfig, ReferenceConfig};
/// use centered_amm::domain::{Amount, FeeRate};
/// use centered_amm::factory::DefaultPoolFactory;
/// use centered_amm::traits::TradePool;
///
/// let config = PoolConfig::Reference(ReferenceConfig::new(
///     Amount::new(180.0).expect("positive"),
///     Amount::new(120.0).expect("positive"),
///     FeeRate::STANDARD,
/// ));
///
/// let mut pool = DefaultPoolFactory::create(&config).expect("pool created");
/// let result = pool.buy(Amount::new(60.0).expect("positive")).expect("trade ok");
/// assert!(result.amount_out() < 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultPoolFactory;

impl DefaultPoolFactory {
    /// Creates a new pool instance from the given configuration.
    ///
    /// # Flow
    ///
    /// 1. Validate the configuration via [`PoolConfig::validate`].
    /// 2. Match on the config variant.
    /// 3. Delegate to the pool's [`FromConfig`] implementation.
    /// 4. Wrap the constructed pool in the corresponding [`PoolBox`]
    ///    variant.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the configuration is
    ///   invalid or if the requested pool type's feature is not enabled.
    /// - Any error propagated from the pool's `from_config` method.
    pub fn create(config: &PoolConfig) -> Result<PoolBox, AmmError> {
        config.validate()?;
        log::debug!("creating {} pool", config);

        match config {
            #[cfg(feature = "centered")]
            PoolConfig::Centered(cfg) => {
                let pool = crate::pools::centered::CenteredPool::from_config(cfg)?;
                Ok(PoolBox::Centered(Box::new(pool)))
            }

            #[cfg(feature = "constant-product")]
            PoolConfig::Reference(cfg) => {
                let pool = crate::pools::reference::ReferencePool::from_config(cfg)?;
                Ok(PoolBox::Reference(Box::new(pool)))
            }

            #[allow(unreachable_patterns)]
            _ => Err(AmmError::InvalidConfiguration(
                "pool type not enabled via feature flags",
            )),
        }
    }
}
