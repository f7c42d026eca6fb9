//! # Centered AMM
//!
//! Numerical model of two automated market makers, built so their
//! economics can be compared trade by trade:
//!
//! - **Centered bonding curve**: tracks a signed deviation `m` from an
//!   equilibrium point and charges a fee that grows with `|m|`.  Trades
//!   that would carry the pool across equilibrium are split there and the
//!   curve's reference reserves are recentered in closed form, so price
//!   and fee stay continuous.  `centered` feature.
//! - **Constant product** (`x · y = k`) with a flat output-leg fee, the
//!   comparison baseline.  `constant-product` feature.
//!
//! All arithmetic is `f64`.  Pools are plain values: single-threaded, no
//! I/O, no interior mutability.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `centered` | yes (via `all-pools`) | Centered bonding-curve pool |
//! | `constant-product` | yes (via `all-pools`) | Constant-product reference pool |
//! | `all-pools` | yes | Enables both pool types |
//! | `serde` | no | `Serialize`/`Deserialize` on configs, values and reports |
//!
//! # Quick Start
//!
//! ```rust
//! use centered_amm::config::{CenteredConfig, PoolConfig};
//! use centered_amm::domain::Amount;
//! use centered_amm::factory::DefaultPoolFactory;
//! use centered_amm::traits::TradePool;
//!
//! // 1. Describe a centered pool already net-bought by 60 quote
//! let config = PoolConfig::Centered(
//!     CenteredConfig::new(
//!         Amount::new(180.0).expect("positive"),
//!         Amount::new(120.0).expect("positive"),
//!         60.0,
//!     )
//!     .expect("valid config"),
//! );
//!
//! // 2. Create the pool via the factory
//! let mut pool = DefaultPoolFactory::create(&config).expect("pool created");
//!
//! // 3. Buy with 60 quote
//! let result = pool.buy(Amount::new(60.0).expect("positive")).expect("trade ok");
//! assert!((result.amount_out() - 10.285_714_285_7).abs() < 1e-9);
//!
//! // 4. Inspect the new state
//! let snapshot = pool.snapshot().expect("priced");
//! assert!((snapshot.price().get() - 4.9).abs() < 1e-9);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Scenario    │  replays Buy/Sell steps, reports fees and IL
//! └──────┬──────┘
//!        │ TradePool
//!        ▼
//! ┌─────────────┐
//! │   Factory    │  validates PoolConfig, dispatches to FromConfig
//! └──────┬──────┘
//!        │ PoolBox (enum dispatch)
//!        ▼
//! ┌─────────────┐
//! │    Pools     │  CenteredPool, ReferencePool
//! └──────┬──────┘
//!        │ Leg / recenter
//!        ▼
//! ┌─────────────┐
//! │ Math+Domain  │  curve formulas, Amount, FeeRate, Price, Regime, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`FeeRate`](domain::FeeRate), [`Regime`](domain::Regime), [`PoolSnapshot`](domain::PoolSnapshot), etc. |
//! | [`traits`] | Core abstractions: [`TradePool`](traits::TradePool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Declarative pool blueprints: [`PoolConfig`](config::PoolConfig) and per-pool config structs |
//! | [`pools`]  | Feature-gated pool implementations and [`PoolBox`](pools::PoolBox) dispatch enum |
//! | [`factory`] | [`DefaultPoolFactory`](factory::DefaultPoolFactory) for config-driven pool construction |
//! | [`scenario`] | Scripted trade replay and reporting |
//! | [`math`]   | Checked float helpers and the centered-curve formulas |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod scenario;
pub mod traits;
