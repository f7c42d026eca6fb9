//! Unified error types for the centered AMM library.
//!
//! All fallible operations across the crate return `AmmError` as their
//! error type, ensuring a consistent error handling experience for consumers.

use thiserror::Error;

/// Errors produced by pool construction, trade validation and curve math.
///
/// Every variant carries a static context string naming the check that
/// failed, so failures are reproducible from the message alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AmmError {
    /// A trade amount or constructor reserve is non-positive or non-finite.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A flat fee rate lies outside `[0, 1)`.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A configuration value is inconsistent or out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A derived reserve became non-positive or non-finite mid-computation.
    #[error("degenerate state: {0}")]
    DegenerateState(&'static str),

    /// A divisor was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
