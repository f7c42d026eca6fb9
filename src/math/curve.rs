//! Closed-form formulas of the centered bonding curve.
//!
//! The curve is described in an *oriented* frame so one set of formulas
//! serves both regimes.  A [`Leg`] names the reference reserve that grows
//! as the pool moves away from equilibrium (`anchor_ref`), the reference
//! reserve on the other side (`far_ref`), and the distance `g = |m| ≥ 0`
//! from equilibrium.  In the net-bought regime the anchor is the quote
//! asset; in the mirror regime it is the base asset.
//!
//! # Formulas
//!
//! ```text
//! fee(g)          = g / (2g + A)
//! floor(g)        = fee(g)·g + A                  ( = K / F )
//! anchor_virtual  = A + g
//! far_virtual     = F · floor(g) / (g + A)
//! K               = anchor_virtual · far_virtual   = F · floor(g)
//! to_center       = g · F / (2g + A)
//! ```
//!
//! Paying the anchor asset in moves the pool *away* from equilibrium
//! ([`Leg::expand`]); `K` grows because the fee rises with `g`.  Paying the
//! far asset in moves it *toward* equilibrium ([`Leg::contract`]); that
//! path trades along the current `K` and then rewrites the reference
//! reserves with [`recenter`] so the new state implies the same `K`.

use super::checked::{checked_div, finite, non_negative, positive};

/// Relative band around the amount needed to reach equilibrium within
/// which a trade is treated as landing exactly on it.
pub const CENTERING_EPSILON: f64 = 1e-12;

/// The shared denominator `2g + A`.
fn spread(magnitude: f64, anchor_ref: f64) -> crate::error::Result<f64> {
    finite(2.0 * magnitude + anchor_ref, "fee denominator")
}

/// Instantaneous fee rate at distance `magnitude` from equilibrium.
///
/// Zero at equilibrium, strictly increasing in `magnitude`, and strictly
/// below `0.5` for every positive `anchor_ref`.
///
/// # Errors
///
/// Returns [`AmmError::DegenerateState`](crate::error::AmmError::DegenerateState)
/// if `2g + A` overflows.
pub fn fee_rate(magnitude: f64, anchor_ref: f64) -> crate::error::Result<f64> {
    if magnitude == 0.0 {
        return Ok(0.0);
    }
    checked_div(magnitude, spread(magnitude, anchor_ref)?, "fee rate")
}

/// The preserved quantity `fee·g + A`, equal to `K / far_ref`.
///
/// It is also the anchor reference reserve the pool lands on when a trade
/// brings it exactly back to equilibrium.
///
/// # Errors
///
/// Returns [`AmmError::DegenerateState`](crate::error::AmmError::DegenerateState)
/// if the fee rate or the product overflows.
pub fn floor(magnitude: f64, anchor_ref: f64) -> crate::error::Result<f64> {
    finite(fee_rate(magnitude, anchor_ref)? * magnitude + anchor_ref, "curve floor")
}

/// Amount of the far asset that brings the pool exactly to equilibrium.
///
/// # Errors
///
/// Returns [`AmmError::DegenerateState`](crate::error::AmmError::DegenerateState)
/// if the result is not finite.
pub fn amount_to_center(magnitude: f64, anchor_ref: f64, far_ref: f64) -> crate::error::Result<f64> {
    if magnitude == 0.0 {
        return Ok(0.0);
    }
    checked_div(
        finite(magnitude * far_ref, "amount to center")?,
        spread(magnitude, anchor_ref)?,
        "amount to center",
    )
}

/// Solves for the anchor reference reserve that places a post-trade
/// virtual anchor reserve `anchor_virtual` on the curve with floor `q`.
///
/// With `g = N − R`, the floor of the new state is
/// `(g + R)² / (2g + R) = N² / (2N − R)`.  Requiring it to equal `q`
/// gives the closed form
///
/// ```text
/// R = 2N − N² / q
/// ```
///
/// At equilibrium (`N = q`) this returns `q`, so the same solver serves a
/// partial move toward equilibrium and a full landing on it.
///
/// # Errors
///
/// Returns [`AmmError::DegenerateState`](crate::error::AmmError::DegenerateState)
/// if `q` is not positive or the solved reserve is not strictly positive
/// (which happens only when `N ≥ 2q`).
pub fn recenter(anchor_virtual: f64, q: f64) -> crate::error::Result<f64> {
    let q = positive(q, "recentering floor")?;
    let n = positive(anchor_virtual, "recentering anchor reserve")?;
    positive(2.0 * n - n * n / q, "recentered reference reserve")
}

/// Returns `true` if `amount` lands on equilibrium within
/// [`CENTERING_EPSILON`] of `to_center`.
#[must_use]
pub fn lands_on_center(amount: f64, to_center: f64) -> bool {
    (amount - to_center).abs() <= CENTERING_EPSILON * to_center
}

/// Oriented view of a centered pool on one side of equilibrium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    /// Reference reserve of the asset that grows away from equilibrium.
    pub anchor_ref: f64,
    /// Reference reserve of the asset that shrinks away from equilibrium.
    pub far_ref: f64,
    /// Distance from equilibrium, `|m|`.
    pub magnitude: f64,
}

/// Where a trade toward equilibrium ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contraction {
    /// Stopped short of equilibrium; reference reserves were rewritten.
    Partial {
        /// Leg after the trade, still on the same side.
        leg: Leg,
        /// Anchor asset paid out.
        amount_out: f64,
    },
    /// Landed on equilibrium with nothing left over.
    Centered {
        /// Leg at equilibrium (`magnitude == 0`).
        leg: Leg,
        /// Anchor asset paid out.
        amount_out: f64,
    },
    /// Reached equilibrium with input left over for the other side.
    Crossed {
        /// Leg at equilibrium (`magnitude == 0`).
        leg: Leg,
        /// Anchor asset paid out up to equilibrium.
        amount_out: f64,
        /// Far asset still to be traded past equilibrium.
        remaining: f64,
    },
}

impl Leg {
    /// Creates a leg at equilibrium.
    #[must_use]
    pub const fn centered(anchor_ref: f64, far_ref: f64) -> Self {
        Self {
            anchor_ref,
            far_ref,
            magnitude: 0.0,
        }
    }

    /// Instantaneous fee rate of this leg.
    ///
    /// # Errors
    ///
    /// See [`fee_rate`].
    pub fn fee_rate(&self) -> crate::error::Result<f64> {
        fee_rate(self.magnitude, self.anchor_ref)
    }

    /// Virtual reserve of the anchor asset, `A + g`.
    #[must_use]
    pub fn anchor_virtual(&self) -> f64 {
        self.anchor_ref + self.magnitude
    }

    /// Virtual reserve of the far asset, `F · floor(g) / (g + A)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`](crate::error::AmmError::DegenerateState)
    /// if the reserve is not strictly positive.
    pub fn far_virtual(&self) -> crate::error::Result<f64> {
        let reserve = checked_div(
            self.far_ref * floor(self.magnitude, self.anchor_ref)?,
            self.anchor_virtual(),
            "far virtual reserve",
        )?;
        positive(reserve, "far virtual reserve")
    }

    /// Product of the two virtual reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`](crate::error::AmmError::DegenerateState)
    /// if the product is not finite.
    pub fn invariant(&self) -> crate::error::Result<f64> {
        finite(
            self.far_ref * floor(self.magnitude, self.anchor_ref)?,
            "curve invariant",
        )
    }

    /// Swaps anchor and far sides.  Only meaningful at equilibrium, where
    /// both regimes describe the same state.
    #[must_use]
    pub const fn flipped(&self) -> Self {
        Self {
            anchor_ref: self.far_ref,
            far_ref: self.anchor_ref,
            magnitude: self.magnitude,
        }
    }

    /// Pays `amount` of the anchor asset in, moving away from equilibrium.
    ///
    /// Returns the new leg and the far asset paid out.  Reference reserves
    /// are unchanged; only the distance grows.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`](crate::error::AmmError::DegenerateState)
    /// if either virtual far reserve is degenerate.
    pub fn expand(&self, amount: f64) -> crate::error::Result<(Self, f64)> {
        let before = self.far_virtual()?;
        let next = Self {
            magnitude: positive(self.magnitude + amount, "expanded deviation")?,
            ..*self
        };
        let after = next.far_virtual()?;
        let amount_out = non_negative((before - after).max(0.0), "expansion output")?;
        Ok((next, amount_out))
    }

    /// Pays `amount` of the far asset in, moving toward equilibrium.
    ///
    /// The trade runs along the current invariant `K`.  A partial move
    /// rewrites the anchor reference via [`recenter`]; landing on or
    /// crossing equilibrium sets the anchor reference to
    /// [`floor`]`(g)` and leaves the far reference untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`](crate::error::AmmError::DegenerateState)
    /// if any derived reserve is degenerate.
    pub fn contract(&self, amount: f64) -> crate::error::Result<Contraction> {
        let g = self.magnitude;
        let anchor_virtual = self.anchor_virtual();
        let to_center = amount_to_center(g, self.anchor_ref, self.far_ref)?;
        let q = positive(floor(g, self.anchor_ref)?, "equilibrium anchor reserve")?;
        let center = Self::centered(q, self.far_ref);
        let out_to_center = non_negative((anchor_virtual - q).max(0.0), "centering output")?;

        if lands_on_center(amount, to_center) {
            return Ok(Contraction::Centered {
                leg: center,
                amount_out: out_to_center,
            });
        }

        if amount > to_center {
            return Ok(Contraction::Crossed {
                leg: center,
                amount_out: out_to_center,
                remaining: amount - to_center,
            });
        }

        let k = self.invariant()?;
        let far_after = self.far_virtual()? + amount;
        let anchor_after = positive(
            checked_div(k, far_after, "contracted anchor reserve")?,
            "contracted anchor reserve",
        )?;
        let anchor_ref = recenter(anchor_after, q)?;
        let leg = Self {
            anchor_ref,
            far_ref: self.far_ref,
            magnitude: (anchor_after - anchor_ref).max(0.0),
        };
        let amount_out = non_negative((anchor_virtual - anchor_after).max(0.0), "contraction output")?;
        Ok(Contraction::Partial { leg, amount_out })
    }
}
