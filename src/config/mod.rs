//! Pool configuration enums and structs.
//!
//! This module contains the [`PoolConfig`] enum, the top-level declarative
//! blueprint for creating either pool type, along with the per-pool
//! configuration structs that define each pool's starting parameters.

mod centered;
mod pool_config;
mod reference;

pub use centered::CenteredConfig;
pub use pool_config::PoolConfig;
pub use reference::ReferenceConfig;
