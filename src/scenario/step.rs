//! A single scripted trade.

use core::fmt;

use crate::domain::{Amount, Side};

/// One trade in a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Step {
    /// Pay this much quote in.
    Buy(Amount),
    /// Pay this much base in.
    Sell(Amount),
}

impl Step {
    /// Returns the trade direction.
    #[must_use]
    pub const fn side(&self) -> Side {
        match self {
            Self::Buy(_) => Side::Buy,
            Self::Sell(_) => Side::Sell,
        }
    }

    /// Returns the input amount.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        match self {
            Self::Buy(amount) | Self::Sell(amount) => *amount,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side(), self.amount())
    }
}
