//! Generic construction trait for pool instantiation from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating pool instances
//! from their respective configuration structs.  Each pool type implements
//! `FromConfig<C>` for its own config variant, enabling the factory to
//! dispatch construction without `dyn` trait objects.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during
//! construction: reserves strictly positive and finite, deviation finite,
//! flat fee in `[0, 1)`.  A successfully constructed pool is in a valid
//! initial state.
//!
//! # Factory Integration
//!
//! ```text
//! PoolConfig::Centered(cfg)  => CenteredPool::from_config(&cfg)
//! PoolConfig::Reference(cfg) => ReferencePool::from_config(&cfg)
//! ```

use crate::error::AmmError;

/// Builds a pool from its configuration.
///
/// # Implementors
///
/// - `impl FromConfig<CenteredConfig> for CenteredPool`
/// - `impl FromConfig<ReferenceConfig> for ReferencePool`
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] (or a more specific
/// variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if a parameter is out of range.
    /// - [`AmmError::DegenerateState`] if the initial state cannot be
    ///   priced.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
