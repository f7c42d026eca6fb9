//! Diagnostic snapshots of pool state, consumed by reporting only.

use core::fmt;

use super::{Price, Regime};
use crate::error::AmmError;

/// Which pool family produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolKind {
    /// Centered bonding-curve pool.
    Centered,
    /// Constant-product reference pool.
    Reference,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Centered => write!(f, "centered pool"),
            Self::Reference => write!(f, "reference pool"),
        }
    }
}

/// Reference reserves and deviation of a centered pool.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveView {
    /// Quote reserve at equilibrium.
    pub quote_ref: f64,
    /// Base reserve at equilibrium.
    pub base_ref: f64,
    /// Signed deviation `m` from equilibrium.
    pub deviation: f64,
}

impl CurveView {
    /// Returns the regime selected by the deviation's sign.
    #[must_use]
    pub fn regime(&self) -> Regime {
        Regime::of(self.deviation)
    }
}

/// Point-in-time view of a pool: reserves, fee, value and implied price.
///
/// For the centered pool the reserves are the *virtual* reserves implied by
/// the deviation, and [`curve`](Self::curve) carries the reference reserves.
///
/// # Derived values
///
/// - `total_value = 2 · quote_reserve` (value stated at the current price)
/// - `price = (quote_reserve / base_reserve) / (1 − fee_rate)`
/// - `invariant = quote_reserve · base_reserve`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSnapshot {
    kind: PoolKind,
    quote_reserve: f64,
    base_reserve: f64,
    fee_rate: f64,
    price: Price,
    curve: Option<CurveView>,
}

impl PoolSnapshot {
    /// Builds a snapshot and derives its implied price.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DegenerateState`] if a reserve is non-positive or
    ///   non-finite, or the fee rate lies outside `[0, 1)`.
    pub fn new(
        kind: PoolKind,
        quote_reserve: f64,
        base_reserve: f64,
        fee_rate: f64,
    ) -> crate::error::Result<Self> {
        if !quote_reserve.is_finite() || quote_reserve <= 0.0 {
            return Err(AmmError::DegenerateState("snapshot quote reserve"));
        }
        if !base_reserve.is_finite() || base_reserve <= 0.0 {
            return Err(AmmError::DegenerateState("snapshot base reserve"));
        }
        if !(0.0..1.0).contains(&fee_rate) {
            return Err(AmmError::DegenerateState("snapshot fee rate"));
        }
        let price = Price::new((quote_reserve / base_reserve) / (1.0 - fee_rate))?;
        Ok(Self {
            kind,
            quote_reserve,
            base_reserve,
            fee_rate,
            price,
            curve: None,
        })
    }

    /// Attaches the centered curve's reference reserves.
    #[must_use]
    pub fn with_curve(mut self, curve: CurveView) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Returns the pool family.
    #[must_use]
    pub const fn kind(&self) -> PoolKind {
        self.kind
    }

    /// Returns the (virtual) quote reserve.
    #[must_use]
    pub const fn quote_reserve(&self) -> f64 {
        self.quote_reserve
    }

    /// Returns the (virtual) base reserve.
    #[must_use]
    pub const fn base_reserve(&self) -> f64 {
        self.base_reserve
    }

    /// Returns the instantaneous fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> f64 {
        self.fee_rate
    }

    /// Returns the implied price in quote per base.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the centered curve state, if any.
    #[must_use]
    pub const fn curve(&self) -> Option<CurveView> {
        self.curve
    }

    /// Returns the raw reserve ratio `quote / base`, before any fee
    /// adjustment.
    #[must_use]
    pub fn reserve_ratio(&self) -> f64 {
        self.quote_reserve / self.base_reserve
    }

    /// Returns the pool value in quote, stated at [`reserve_ratio`](Self::reserve_ratio).
    #[must_use]
    pub fn total_value(&self) -> f64 {
        2.0 * self.quote_reserve
    }

    /// Returns the product of the reserves.
    #[must_use]
    pub fn invariant(&self) -> f64 {
        self.quote_reserve * self.base_reserve
    }
}

impl fmt::Display for PoolSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        if let Some(curve) = self.curve {
            writeln!(f, "  quote ref:  {}", curve.quote_ref)?;
            writeln!(f, "  base ref:   {}", curve.base_ref)?;
            writeln!(f, "  deviation:  {} ({})", curve.deviation, curve.regime())?;
        }
        writeln!(f, "  fee rate:   {}", self.fee_rate)?;
        writeln!(f, "  quote:      {}", self.quote_reserve)?;
        writeln!(f, "  base:       {}", self.base_reserve)?;
        writeln!(f, "  value:      {}", self.total_value())?;
        write!(f, "  price:      {}", self.price)?;
        if let Ok(inverse) = self.price.inverse() {
            write!(f, "\n  base/quote: {inverse}")?;
        }
        Ok(())
    }
}
