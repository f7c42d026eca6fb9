//! Centered bonding-curve pool.
//!
//! The pool stores two reference reserves (the reserves at equilibrium)
//! and a signed deviation `m`.  The sign of `m` selects the regime:
//!
//! | Regime | `m` | Anchor (grows away from equilibrium) | Far |
//! |--------|-----|--------------------------------------|-----|
//! | [`Regime::QuoteSurplus`] | `≥ 0` | quote | base |
//! | [`Regime::BaseSurplus`]  | `< 0` | base  | quote |
//!
//! Paying the anchor asset in *expands* the deviation along the current
//! curve; reference reserves are untouched.  Paying the far asset in
//! *contracts* it: a partial move rewrites the reference reserves, a move
//! that lands on equilibrium resets them, and a move past equilibrium
//! resets them and continues as an expansion on the other side.
//!
//! ```text
//!            buy (quote in)                 sell (base in)
//! m ≥ 0      expand                         contract, may cross to m < 0
//! m < 0      contract, may cross to m > 0   expand
//! ```
//!
//! The formulas live in [`crate::math`]; this module maps regimes
//! onto them and commits results atomically.

use core::fmt;

use crate::config::CenteredConfig;
use crate::domain::{
    Amount, Asset, CurveView, PoolKind, PoolSnapshot, Regime, Side, SwapResult,
};
use crate::error::AmmError;
use crate::math::{amount_to_center, finite, positive, Contraction, Leg};
use crate::traits::{FromConfig, TradePool};

/// Path a trade took along the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Moved away from equilibrium; reference reserves unchanged.
    Expanded,
    /// Moved toward equilibrium without reaching it; reference reserves
    /// were rewritten.
    Recentered,
    /// Landed on equilibrium.
    Centered,
    /// Reached equilibrium and continued into the other regime.
    Crossed,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expanded => write!(f, "expanded"),
            Self::Recentered => write!(f, "recentered"),
            Self::Centered => write!(f, "centered"),
            Self::Crossed => write!(f, "crossed"),
        }
    }
}

/// Full outcome of a centered trade: the swap, the path and the post-trade
/// curve state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trade {
    result: SwapResult,
    transition: Transition,
    curve: CurveView,
}

impl Trade {
    /// Returns the swap outcome.
    #[must_use]
    pub const fn result(&self) -> SwapResult {
        self.result
    }

    /// Returns the path the trade took.
    #[must_use]
    pub const fn transition(&self) -> Transition {
        self.transition
    }

    /// Returns the curve state after the trade.
    #[must_use]
    pub const fn curve(&self) -> CurveView {
        self.curve
    }
}

// ---------------------------------------------------------------------------
// Curve state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
struct CurveState {
    quote_ref: f64,
    base_ref: f64,
    deviation: f64,
}

impl CurveState {
    fn regime(&self) -> Regime {
        Regime::of(self.deviation)
    }

    fn leg(&self) -> Leg {
        let magnitude = self.deviation.abs();
        match self.regime() {
            Regime::QuoteSurplus => Leg {
                anchor_ref: self.quote_ref,
                far_ref: self.base_ref,
                magnitude,
            },
            Regime::BaseSurplus => Leg {
                anchor_ref: self.base_ref,
                far_ref: self.quote_ref,
                magnitude,
            },
        }
    }

    fn from_leg(regime: Regime, leg: Leg) -> Result<Self, AmmError> {
        let (quote_ref, base_ref) = match regime {
            Regime::QuoteSurplus => (leg.anchor_ref, leg.far_ref),
            Regime::BaseSurplus => (leg.far_ref, leg.anchor_ref),
        };
        // Equilibrium always reads as the net-bought regime.
        let deviation = if leg.magnitude == 0.0 {
            0.0
        } else {
            regime.signed(leg.magnitude)
        };
        let state = Self {
            quote_ref: positive(quote_ref, "quote reference reserve")?,
            base_ref: positive(base_ref, "base reference reserve")?,
            deviation: finite(deviation, "deviation")?,
        };
        state.leg().far_virtual()?;
        Ok(state)
    }

    /// Virtual reserves as `(quote, base)`.
    fn virtual_reserves(&self) -> Result<(f64, f64), AmmError> {
        let leg = self.leg();
        let anchor = leg.anchor_virtual();
        let far = leg.far_virtual()?;
        Ok(match self.regime() {
            Regime::QuoteSurplus => (anchor, far),
            Regime::BaseSurplus => (far, anchor),
        })
    }

    fn view(&self) -> CurveView {
        CurveView {
            quote_ref: self.quote_ref,
            base_ref: self.base_ref,
            deviation: self.deviation,
        }
    }

    fn trade(&self, side: Side, amount: Amount) -> Result<(Self, Trade), AmmError> {
        let regime = self.regime();
        let leg = self.leg();
        let amount_in = amount.get();

        let (next, amount_out, transition) = if side.input() == regime.anchor() {
            let (leg, out) = leg.expand(amount_in)?;
            (Self::from_leg(regime, leg)?, out, Transition::Expanded)
        } else {
            match leg.contract(amount_in)? {
                Contraction::Partial { leg, amount_out } => {
                    (Self::from_leg(regime, leg)?, amount_out, Transition::Recentered)
                }
                Contraction::Centered { leg, amount_out } => {
                    (Self::from_leg(regime, leg)?, amount_out, Transition::Centered)
                }
                Contraction::Crossed {
                    leg,
                    amount_out,
                    remaining,
                } => {
                    let (leg, more) = leg.flipped().expand(remaining)?;
                    (
                        Self::from_leg(regime.flipped(), leg)?,
                        amount_out + more,
                        Transition::Crossed,
                    )
                }
            }
        };

        let fee = self.implied_fee(side, amount_in, amount_out)?;
        let trade = Trade {
            result: SwapResult::new(side, amount, amount_out, fee)?,
            transition,
            curve: next.view(),
        };
        Ok((next, trade))
    }

    /// Shortfall of `amount_out` against a fee-free constant-product trade
    /// at the pre-trade virtual reserves.
    fn implied_fee(&self, side: Side, amount_in: f64, amount_out: f64) -> Result<f64, AmmError> {
        let (quote, base) = self.virtual_reserves()?;
        let (reserve_in, reserve_out) = match side.input() {
            Asset::Quote => (quote, base),
            Asset::Base => (base, quote),
        };
        let fee_free = reserve_out * amount_in / (reserve_in + amount_in);
        Ok(finite(fee_free - amount_out, "implied fee")?.max(0.0))
    }
}

// ---------------------------------------------------------------------------
// Pool
// ---------------------------------------------------------------------------

/// A centered bonding-curve pool with a deviation-dependent fee.
///
/// Created from a [`CenteredConfig`] via [`FromConfig`], or with
/// [`CenteredPool::new`].
///
/// # Example
///
/// ```rust
/// use centered_amm::domain::Amount;
/// use centered_amm::pools::CenteredPool;
/// use centered_amm::traits::TradePool;
///
/// let mut pool = CenteredPool::new(
///     Amount::new(180.0).expect("positive"),
///     Amount::new(120.0).expect("positive"),
///     60.0,
/// )
/// .expect("pool created");
///
/// let result = pool.buy(Amount::new(60.0).expect("positive")).expect("trade ok");
/// assert!((result.amount_out() - 10.285_714_285_7).abs() < 1e-9);
/// assert!((pool.deviation() - 120.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredPool {
    state: CurveState,
}

impl CenteredPool {
    /// Creates a pool from its reference reserves and starting deviation.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `deviation` is not finite.
    /// - [`AmmError::DegenerateState`] if the starting virtual reserves
    ///   cannot be computed.
    pub fn new(quote_ref: Amount, base_ref: Amount, deviation: f64) -> Result<Self, AmmError> {
        Self::from_config(&CenteredConfig::new(quote_ref, base_ref, deviation)?)
    }

    /// Returns the quote reference reserve.
    #[must_use]
    pub const fn quote_ref(&self) -> f64 {
        self.state.quote_ref
    }

    /// Returns the base reference reserve.
    #[must_use]
    pub const fn base_ref(&self) -> f64 {
        self.state.base_ref
    }

    /// Returns the signed deviation `m`.
    #[must_use]
    pub const fn deviation(&self) -> f64 {
        self.state.deviation
    }

    /// Returns the active regime.
    #[must_use]
    pub fn regime(&self) -> Regime {
        self.state.regime()
    }

    /// Returns the instantaneous fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`] if the rate overflows.
    pub fn fee_rate(&self) -> Result<f64, AmmError> {
        self.state.leg().fee_rate()
    }

    /// Returns the virtual reserves as `(quote, base)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`] if the far virtual reserve is
    /// not strictly positive.
    pub fn virtual_reserves(&self) -> Result<(f64, f64), AmmError> {
        self.state.virtual_reserves()
    }

    /// Returns the amount of the regime's far asset (base when `m ≥ 0`,
    /// quote when `m < 0`) that brings the pool exactly to equilibrium.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`] if the amount is not finite.
    pub fn amount_to_center(&self) -> Result<f64, AmmError> {
        let leg = self.state.leg();
        amount_to_center(leg.magnitude, leg.anchor_ref, leg.far_ref)
    }

    /// Quotes a trade, reporting the path it takes and the resulting
    /// curve state.  Never mutates.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`] if any derived reserve is
    /// degenerate.
    pub fn preview(&self, side: Side, amount: Amount) -> Result<Trade, AmmError> {
        self.state.trade(side, amount).map(|(_, trade)| trade)
    }

    /// Executes a trade and reports the path it took.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateState`] if any derived reserve is
    /// degenerate; the pool is left unchanged.
    pub fn execute(&mut self, side: Side, amount: Amount) -> Result<Trade, AmmError> {
        let (next, trade) = self.state.trade(side, amount)?;
        self.state = next;
        log::debug!(
            "centered {}: in={} out={} deviation={}",
            side,
            amount,
            trade.result.amount_out(),
            next.deviation
        );
        if trade.transition != Transition::Expanded {
            log::trace!(
                "centered {}: refs=({}, {}) regime={}",
                trade.transition,
                next.quote_ref,
                next.base_ref,
                next.regime()
            );
        }
        Ok(trade)
    }
}

impl FromConfig<CenteredConfig> for CenteredPool {
    /// Creates a new pool from the given configuration.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`CenteredConfig::validate`].
    /// - Returns [`AmmError::DegenerateState`] if the starting virtual
    ///   reserves cannot be computed.
    fn from_config(config: &CenteredConfig) -> Result<Self, AmmError> {
        config.validate()?;
        let provisional = CurveState {
            quote_ref: config.quote_ref().get(),
            base_ref: config.base_ref().get(),
            deviation: config.deviation(),
        };
        let state = CurveState::from_leg(provisional.regime(), provisional.leg())?;
        Ok(Self { state })
    }
}

impl TradePool for CenteredPool {
    fn buy(&mut self, amount_quote: Amount) -> Result<SwapResult, AmmError> {
        self.execute(Side::Buy, amount_quote).map(|t| t.result())
    }

    fn sell(&mut self, amount_base: Amount) -> Result<SwapResult, AmmError> {
        self.execute(Side::Sell, amount_base).map(|t| t.result())
    }

    fn simulate_buy(&self, amount_quote: Amount) -> Result<SwapResult, AmmError> {
        self.preview(Side::Buy, amount_quote).map(|t| t.result())
    }

    fn simulate_sell(&self, amount_base: Amount) -> Result<SwapResult, AmmError> {
        self.preview(Side::Sell, amount_base).map(|t| t.result())
    }

    fn snapshot(&self) -> Result<PoolSnapshot, AmmError> {
        let (quote, base) = self.state.virtual_reserves()?;
        Ok(PoolSnapshot::new(PoolKind::Centered, quote, base, self.fee_rate()?)?
            .with_curve(self.state.view()))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    // -- helpers --------------------------------------------------------------

    fn amount(v: f64) -> Amount {
        let Ok(a) = Amount::new(v) else {
            panic!("valid amount");
        };
        a
    }

    fn make_pool(quote_ref: f64, base_ref: f64, deviation: f64) -> CenteredPool {
        let Ok(pool) = CenteredPool::new(amount(quote_ref), amount(base_ref), deviation) else {
            panic!("expected valid pool");
        };
        pool
    }

    fn execute(pool: &mut CenteredPool, side: Side, v: f64) -> Trade {
        let Ok(trade) = pool.execute(side, amount(v)) else {
            panic!("expected Ok");
        };
        trade
    }

    // -- Construction ---------------------------------------------------------

    #[test]
    fn from_config_sets_state() {
        let Ok(cfg) = CenteredConfig::new(amount(180.0), amount(120.0), -30.0) else {
            panic!("valid config");
        };
        let Ok(pool) = CenteredPool::from_config(&cfg) else {
            panic!("expected Ok");
        };
        assert!((pool.quote_ref() - 180.0).abs() < f64::EPSILON);
        assert!((pool.base_ref() - 120.0).abs() < f64::EPSILON);
        assert!((pool.deviation() + 30.0).abs() < f64::EPSILON);
        assert_eq!(pool.regime(), Regime::BaseSurplus);
    }

    #[test]
    fn overflowing_deviation_rejected() {
        let result = CenteredPool::new(amount(1.0), amount(1.0), 1e308);
        assert!(matches!(result, Err(AmmError::DegenerateState(_))));
        let result = CenteredPool::new(amount(1.0), amount(1.0), -1e308);
        assert!(matches!(result, Err(AmmError::DegenerateState(_))));
    }

    #[test]
    fn expansion_past_float_range_fails_without_mutation() {
        let mut pool = make_pool(1.0, 1.0, 5e307);
        let before = pool;
        let result = pool.buy(amount(5e307));
        assert!(matches!(result, Err(AmmError::DegenerateState(_))));
        assert_eq!(pool, before);
    }

    #[test]
    fn non_finite_deviation_rejected() {
        let result = CenteredPool::new(amount(1.0), amount(1.0), f64::NAN);
        assert!(matches!(result, Err(AmmError::InvalidConfiguration(_))));
    }

    #[test]
    fn balanced_start_has_no_fee() {
        let pool = make_pool(180.0, 120.0, 0.0);
        assert_eq!(pool.fee_rate(), Ok(0.0));
        let Ok((quote, base)) = pool.virtual_reserves() else {
            panic!("expected Ok");
        };
        assert!((quote - 180.0).abs() < TOL);
        assert!((base - 120.0).abs() < TOL);
    }

    // -- Net-bought regime ----------------------------------------------------

    #[test]
    fn buy_scenario_reference_values() {
        let mut pool = make_pool(180.0, 120.0, 60.0);
        let trade = execute(&mut pool, Side::Buy, 60.0);
        assert_eq!(trade.transition(), Transition::Expanded);
        assert!((trade.result().amount_out() - 10.285_714_285_7).abs() < TOL);

        assert!((pool.deviation() - 120.0).abs() < TOL);
        let Ok(fee) = pool.fee_rate() else {
            panic!("expected Ok");
        };
        assert!((fee - 0.285_714_285_7).abs() < TOL);
        let Ok(snap) = pool.snapshot() else {
            panic!("expected Ok");
        };
        assert!((snap.quote_reserve() - 300.0).abs() < TOL);
        assert!((snap.base_reserve() - 85.714_285_714_3).abs() < TOL);
        assert!((snap.price().get() - 4.9).abs() < TOL);
        assert!((snap.total_value() - 600.0).abs() < TOL);
        // expansion leaves the reference reserves alone
        assert!((pool.quote_ref() - 180.0).abs() < f64::EPSILON);
        assert!((pool.base_ref() - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn buy_charges_implied_fee() {
        let pool = make_pool(180.0, 120.0, 60.0);
        let Ok(result) = pool.simulate_buy(amount(60.0)) else {
            panic!("expected Ok");
        };
        // fee-free at virtual (240, 96): 96 · 60 / 300 = 19.2
        assert!((result.fee() - (19.2 - 10.285_714_285_714_286)).abs() < TOL);
    }

    #[test]
    fn partial_sell_recenters() {
        let mut pool = make_pool(180.0, 120.0, 60.0);
        let trade = execute(&mut pool, Side::Sell, 12.0);
        assert_eq!(trade.transition(), Transition::Recentered);
        assert!((trade.result().amount_out() - 80.0 / 3.0).abs() < TOL);
        assert!(trade.result().fee() < TOL);
        assert!((pool.quote_ref() - 5120.0 / 27.0).abs() < TOL);
        assert!((pool.base_ref() - 120.0).abs() < f64::EPSILON);
        assert!((pool.deviation() - 640.0 / 27.0).abs() < TOL);
        let Ok((quote, base)) = pool.virtual_reserves() else {
            panic!("expected Ok");
        };
        assert!((quote - 640.0 / 3.0).abs() < TOL);
        assert!((base - 108.0).abs() < TOL);
    }

    #[test]
    fn sell_to_center_lands_on_equilibrium() {
        let mut pool = make_pool(180.0, 120.0, 60.0);
        let Ok(to_center) = pool.amount_to_center() else {
            panic!("expected Ok");
        };
        assert!((to_center - 24.0).abs() < TOL);
        let trade = execute(&mut pool, Side::Sell, to_center);
        assert_eq!(trade.transition(), Transition::Centered);
        assert!((trade.result().amount_out() - 48.0).abs() < TOL);
        assert!(pool.deviation().abs() < f64::EPSILON);
        assert!((pool.quote_ref() - 192.0).abs() < TOL);
        assert_eq!(pool.fee_rate(), Ok(0.0));
    }

    #[test]
    fn sell_past_center_crosses_into_mirror() {
        let mut pool = make_pool(180.0, 120.0, 60.0);
        let trade = execute(&mut pool, Side::Sell, 36.0);
        assert_eq!(trade.transition(), Transition::Crossed);
        // 48 to reach equilibrium, then 16 from the base-surplus side
        assert!((trade.result().amount_out() - 64.0).abs() < TOL);
        assert_eq!(pool.regime(), Regime::BaseSurplus);
        assert!((pool.deviation() + 12.0).abs() < TOL);
        assert!((pool.quote_ref() - 192.0).abs() < TOL);
        assert!((pool.base_ref() - 120.0).abs() < TOL);
    }

    // -- Mirror regime --------------------------------------------------------

    #[test]
    fn mirror_buy_to_center() {
        let mut pool = make_pool(180.0, 120.0, -30.0);
        let Ok(to_center) = pool.amount_to_center() else {
            panic!("expected Ok");
        };
        assert!((to_center - 30.0).abs() < TOL);
        let trade = execute(&mut pool, Side::Buy, 30.0);
        assert_eq!(trade.transition(), Transition::Centered);
        assert!((trade.result().amount_out() - 25.0).abs() < TOL);
        assert!(pool.deviation().abs() < f64::EPSILON);
        assert_eq!(pool.regime(), Regime::QuoteSurplus);
        assert!((pool.quote_ref() - 180.0).abs() < f64::EPSILON);
        assert!((pool.base_ref() - 125.0).abs() < TOL);
    }

    #[test]
    fn mirror_buy_crossing() {
        let mut pool = make_pool(180.0, 120.0, -30.0);
        let trade = execute(&mut pool, Side::Buy, 40.0);
        assert_eq!(trade.transition(), Transition::Crossed);
        assert!((trade.result().amount_out() - 31.25).abs() < TOL);
        assert!((pool.deviation() - 10.0).abs() < TOL);
        assert!((pool.base_ref() - 125.0).abs() < TOL);
    }

    #[test]
    fn mirror_sell_expands() {
        let mut pool = make_pool(180.0, 120.0, -30.0);
        let trade = execute(&mut pool, Side::Sell, 10.0);
        assert_eq!(trade.transition(), Transition::Expanded);
        assert!((pool.deviation() + 40.0).abs() < TOL);
        assert!(trade.result().fee() > 0.0);
    }

    #[test]
    fn split_trade_equivalence() {
        let pool = make_pool(180.0, 120.0, -30.0);
        let Ok(to_center) = pool.amount_to_center() else {
            panic!("expected Ok");
        };

        let mut whole = pool;
        let Ok(combined) = whole.buy(amount(to_center + 17.0)) else {
            panic!("expected Ok");
        };

        let mut split = pool;
        let Ok(first) = split.buy(amount(to_center)) else {
            panic!("expected Ok");
        };
        let Ok(second) = split.buy(amount(17.0)) else {
            panic!("expected Ok");
        };

        let total = first.amount_out() + second.amount_out();
        assert!((combined.amount_out() - total).abs() < TOL);
        assert!((whole.deviation() - split.deviation()).abs() < TOL);
        assert!((whole.base_ref() - split.base_ref()).abs() < TOL);
    }

    // -- Equilibrium ----------------------------------------------------------

    #[test]
    fn sell_from_equilibrium_enters_mirror() {
        let mut pool = make_pool(180.0, 120.0, 0.0);
        let trade = execute(&mut pool, Side::Sell, 12.0);
        assert_eq!(trade.transition(), Transition::Crossed);
        assert_eq!(pool.regime(), Regime::BaseSurplus);
        assert!((pool.deviation() + 12.0).abs() < TOL);
    }

    #[test]
    fn continuity_at_equilibrium() {
        for eps in [1e-2, 1e-4, 1e-6] {
            let mut pool = make_pool(180.0, 120.0, 0.0);
            let _ = execute(&mut pool, Side::Buy, eps);
            let Ok(to_center) = pool.amount_to_center() else {
                panic!("expected Ok");
            };
            let back = execute(&mut pool, Side::Sell, to_center);
            assert_eq!(back.transition(), Transition::Centered);
            let returned = back.result().amount_out();
            assert!(((eps - returned) / eps).abs() < eps);
        }
    }

    #[test]
    fn near_center_input_snaps_to_equilibrium() {
        let mut pool = make_pool(180.0, 120.0, 60.0);
        let trade = execute(&mut pool, Side::Sell, 24.0 * (1.0 + 1e-14));
        assert_eq!(trade.transition(), Transition::Centered);
        assert!(pool.deviation().abs() < f64::EPSILON);
    }

    // -- Simulation parity ----------------------------------------------------

    #[test]
    fn simulate_matches_execution_without_mutating() {
        let original = make_pool(180.0, 120.0, -30.0);
        for (side, v) in [(Side::Buy, 10.0), (Side::Buy, 50.0), (Side::Sell, 5.0)] {
            let Ok(quoted) = original.preview(side, amount(v)) else {
                panic!("expected Ok");
            };
            let mut clone = original;
            let trade = execute(&mut clone, side, v);
            assert_eq!(quoted, trade);
        }
        assert_eq!(original, make_pool(180.0, 120.0, -30.0));
    }

    #[test]
    fn outputs_bounded_by_virtual_reserve() {
        let pool = make_pool(180.0, 120.0, 60.0);
        let Ok((_, base)) = pool.virtual_reserves() else {
            panic!("expected Ok");
        };
        let Ok(result) = pool.simulate_buy(amount(1.0e9)) else {
            panic!("expected Ok");
        };
        assert!(result.amount_out() < base);
    }

    #[test]
    fn snapshot_carries_curve() {
        let pool = make_pool(180.0, 120.0, -30.0);
        let Ok(snap) = pool.snapshot() else {
            panic!("expected Ok");
        };
        assert_eq!(snap.kind(), PoolKind::Centered);
        let Some(curve) = snap.curve() else {
            panic!("expected curve");
        };
        assert_eq!(curve.regime(), Regime::BaseSurplus);
        assert!((curve.deviation + 30.0).abs() < f64::EPSILON);
        // mirror: base virtual = 120 + 30
        assert!((snap.base_reserve() - 150.0).abs() < TOL);
    }

    #[test]
    fn transition_display() {
        assert_eq!(format!("{}", Transition::Crossed), "crossed");
        assert_eq!(format!("{}", Transition::Recentered), "recentered");
    }
}
