//! Pool assets and trade direction.

use core::fmt;

/// One of the two assets held by a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Asset {
    /// The pricing asset (USD in the reference scenarios).
    Quote,
    /// The traded asset (GLW in the reference scenarios).
    Base,
}

impl Asset {
    /// Returns the other asset of the pair.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::Quote => Self::Base,
            Self::Base => Self::Quote,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quote => write!(f, "quote"),
            Self::Base => write!(f, "base"),
        }
    }
}

/// Direction of a trade, seen from the trader.
///
/// A [`Buy`](Side::Buy) pays quote in and takes base out; a
/// [`Sell`](Side::Sell) pays base in and takes quote out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Quote in, base out.
    Buy,
    /// Base in, quote out.
    Sell,
}

impl Side {
    /// Returns the asset paid into the pool.
    #[must_use]
    pub const fn input(&self) -> Asset {
        match self {
            Self::Buy => Asset::Quote,
            Self::Sell => Asset::Base,
        }
    }

    /// Returns the asset paid out of the pool.
    #[must_use]
    pub const fn output(&self) -> Asset {
        self.input().other()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}
