//! Top-level pool configuration enum.
//!
//! [`PoolConfig`] is the declarative blueprint for creating either pool
//! type.  The factory matches on it to dispatch construction:
//!
//! ```text
//! match config {
//!     PoolConfig::Centered(cfg)  => CenteredPool::from_config(&cfg),
//!     PoolConfig::Reference(cfg) => ReferencePool::from_config(&cfg),
//! }
//! ```

use super::{CenteredConfig, ReferenceConfig};
use crate::error::AmmError;

/// Top-level configuration enum for all pool types.
///
/// # Variants
///
/// - [`Centered`](PoolConfig::Centered): centered bonding curve with a
///   deviation-dependent fee
/// - [`Reference`](PoolConfig::Reference): constant product with a flat
///   fee, used as the comparison baseline
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PoolConfig {
    /// Centered bonding-curve configuration.
    Centered(CenteredConfig),
    /// Constant-product reference configuration.
    Reference(ReferenceConfig),
}

impl PoolConfig {
    /// Validates the inner configuration by delegating to the
    /// variant-specific `validate()` method.
    ///
    /// # Errors
    ///
    /// Returns the same [`AmmError`] that the inner config's
    /// `validate()` would return.
    pub fn validate(&self) -> Result<(), AmmError> {
        match self {
            Self::Centered(cfg) => cfg.validate(),
            Self::Reference(cfg) => cfg.validate(),
        }
    }

    /// Returns `true` if this is a [`Centered`](Self::Centered) variant.
    #[must_use]
    pub const fn is_centered(&self) -> bool {
        matches!(self, Self::Centered(_))
    }

    /// Returns `true` if this is a [`Reference`](Self::Reference) variant.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

impl core::fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Centered(_) => write!(f, "Centered"),
            Self::Reference(_) => write!(f, "Reference"),
        }
    }
}

impl From<CenteredConfig> for PoolConfig {
    fn from(cfg: CenteredConfig) -> Self {
        Self::Centered(cfg)
    }
}

impl From<ReferenceConfig> for PoolConfig {
    fn from(cfg: ReferenceConfig) -> Self {
        Self::Reference(cfg)
    }
}
