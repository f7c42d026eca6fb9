//! Pool instantiation via the factory pattern.
//!
//! The [`DefaultPoolFactory`] creates pool instances from [`PoolConfig`]
//! values, validating configuration and dispatching to the appropriate
//! pool constructor based on the config variant.
//!
//! # Usage
//!
//! ```rust
//! use centered_amm::config::{CenteredConfig, PoolConfig};
//! use centered_amm::domain::Amount;
//! use centered_amm::factory::DefaultPoolFactory;
//! use centered_amm::traits::TradePool;
//!
//! let cfg = CenteredConfig::balanced(
//!     Amount::new(180.0).expect("positive"),
//!     Amount::new(120.0).expect("positive"),
//! );
//! let pool = DefaultPoolFactory::create(&PoolConfig::Centered(cfg)).expect("pool created");
//! let snapshot = pool.snapshot().expect("priced");
//! assert!((snapshot.price().get() - 1.5).abs() < 1e-12);
//! ```
//!
//! # Feature Gating
//!
//! Each match arm is gated behind its respective pool feature flag.
//! If a config variant is passed for a pool type whose feature is not
//! enabled, an [`AmmError::InvalidConfiguration`] is returned.
//!
//! [`PoolConfig`]: crate::config::PoolConfig
//! [`AmmError::InvalidConfiguration`]: crate::error::AmmError::InvalidConfiguration

mod default_factory;

pub use default_factory::DefaultPoolFactory;
