//! Arithmetic utilities for pool calculations.
//!
//! This module provides checked `f64` helpers that surface `NaN`/`∞` as
//! typed errors, and the closed-form formulas of the centered bonding
//! curve, including the single recentering solver shared by every path
//! that moves the pool toward equilibrium.

mod checked;
mod curve;

pub use checked::{checked_div, finite, non_negative, positive};
pub use curve::{
    amount_to_center, fee_rate, floor, lands_on_center, recenter, Contraction, Leg,
    CENTERING_EPSILON,
};
