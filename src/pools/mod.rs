//! Feature-gated pool implementations and the [`PoolBox`] dispatch enum.
//!
//! Each pool type is behind its own Cargo feature flag.  The [`PoolBox`]
//! enum provides static dispatch across all enabled pool types, allowing
//! heterogeneous collections without `dyn` trait objects.
//!
//! # Pool Types
//!
//! | Feature | Pool | Curve |
//! |---------|------|-------|
//! | `centered` | [`CenteredPool`] | centered bonding curve, deviation-dependent fee |
//! | `constant-product` | [`ReferencePool`] | `x · y = k`, flat fee |

#[cfg(feature = "centered")]
pub mod centered;
#[cfg(feature = "constant-product")]
pub mod reference;

mod pool_box;

#[cfg(all(test, feature = "all-pools"))]
mod proptest_properties;

#[cfg(feature = "centered")]
pub use centered::{CenteredPool, Trade, Transition};
pub use pool_box::PoolBox;
#[cfg(feature = "constant-product")]
pub use reference::ReferencePool;
