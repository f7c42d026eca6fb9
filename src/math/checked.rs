//! Checked floating-point helpers for curve arithmetic.
//!
//! IEEE 754 arithmetic never traps: overflow yields `±∞` and invalid
//! operations yield `NaN`, which then propagate silently through every
//! later formula.  These helpers turn such values into
//! [`AmmError::DegenerateState`] at the point where they first appear, so
//! a trade either produces finite, positive reserves or fails before any
//! state is committed.
//!
//! # Examples
//!
//! ```
//! use centered_amm::math::{checked_div, positive};
//!
//! assert!(positive(1.0, "reserve").is_ok());
//! assert!(positive(0.0, "reserve").is_err());
//! assert!(checked_div(1.0, 0.0, "ratio").is_err());
//! ```

use crate::error::AmmError;

/// Returns `value` if it is finite.
///
/// # Errors
///
/// Returns [`AmmError::DegenerateState`] carrying `context` if `value` is
/// `NaN` or infinite.
#[inline]
pub fn finite(value: f64, context: &'static str) -> crate::error::Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AmmError::DegenerateState(context))
    }
}

/// Returns `value` if it is finite and strictly positive.
///
/// # Errors
///
/// Returns [`AmmError::DegenerateState`] carrying `context` otherwise.
#[inline]
pub fn positive(value: f64, context: &'static str) -> crate::error::Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AmmError::DegenerateState(context))
    }
}

/// Returns `value` if it is finite and not negative.
///
/// # Errors
///
/// Returns [`AmmError::DegenerateState`] carrying `context` otherwise.
#[inline]
pub fn non_negative(value: f64, context: &'static str) -> crate::error::Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AmmError::DegenerateState(context))
    }
}

/// Divides `numerator` by `denominator`, rejecting zero divisors and
/// non-finite quotients.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::DegenerateState`] carrying `context` if the quotient is
///   not finite.
#[inline]
pub fn checked_div(numerator: f64, denominator: f64, context: &'static str) -> crate::error::Result<f64> {
    if denominator == 0.0 {
        return Err(AmmError::DivisionByZero);
    }
    finite(numerator / denominator, context)
}
