//! Regimes of the centered bonding curve.

use core::fmt;

use super::Asset;

/// The active side of a centered pool, selected by the sign of its
/// deviation `m`.
///
/// Each regime anchors its formulas to a different reference reserve:
///
/// | Regime | Deviation | Anchor (grows with `|m|`) | Far side (shrinks) |
/// |--------|-----------|---------------------------|--------------------|
/// | [`QuoteSurplus`](Regime::QuoteSurplus) | `m ≥ 0` | quote | base |
/// | [`BaseSurplus`](Regime::BaseSurplus) | `m < 0` | base | quote |
///
/// Equilibrium (`m = 0`) belongs to `QuoteSurplus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regime {
    /// Net-bought: the pool holds surplus quote relative to equilibrium.
    QuoteSurplus,
    /// Net-sold (the mirror regime): the pool holds surplus base.
    BaseSurplus,
}

impl Regime {
    /// Returns the regime for a deviation value.
    #[must_use]
    pub fn of(deviation: f64) -> Self {
        if deviation >= 0.0 {
            Self::QuoteSurplus
        } else {
            Self::BaseSurplus
        }
    }

    /// Returns the asset whose virtual reserve is `reference + |m|`.
    #[must_use]
    pub const fn anchor(&self) -> Asset {
        match self {
            Self::QuoteSurplus => Asset::Quote,
            Self::BaseSurplus => Asset::Base,
        }
    }

    /// Returns the asset that moves the pool *toward* equilibrium when
    /// paid in.
    #[must_use]
    pub const fn far(&self) -> Asset {
        self.anchor().other()
    }

    /// Returns the regime on the other side of equilibrium.
    #[must_use]
    pub const fn flipped(&self) -> Self {
        match self {
            Self::QuoteSurplus => Self::BaseSurplus,
            Self::BaseSurplus => Self::QuoteSurplus,
        }
    }

    /// Returns `true` for the mirror regime (`m < 0`).
    #[must_use]
    pub const fn is_mirror(&self) -> bool {
        matches!(self, Self::BaseSurplus)
    }

    /// Converts an unsigned distance from equilibrium into this regime's
    /// signed deviation.
    #[must_use]
    pub fn signed(&self, magnitude: f64) -> f64 {
        match self {
            Self::QuoteSurplus => magnitude,
            Self::BaseSurplus => -magnitude,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuoteSurplus => write!(f, "expansion+"),
            Self::BaseSurplus => write!(f, "expansion-"),
        }
    }
}
