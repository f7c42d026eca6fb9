//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers six properties:
//!
//! 1. **Simulation parity**: `simulate_*` equals the executed trade on a
//!    clone and never mutates.
//! 2. **Invariant preservation**: the virtual reserve product never
//!    decreases across a trade.
//! 3. **Bounded output**: outputs stay in `[0, opposite virtual reserve)`.
//! 4. **Split-trade equivalence**: crossing equilibrium in one trade equals
//!    centering first and continuing in a second trade.
//! 5. **Round-trip loss**: an expansion followed by its reversal returns no
//!    more than was paid in.
//! 6. **Fee monotonicity**: the centered fee rate grows with distance from
//!    equilibrium; the reference fee grows with trade size.

use proptest::prelude::*;

use crate::domain::{Amount, FeeRate, Side};
use crate::math::fee_rate;
use crate::pools::{CenteredPool, ReferencePool};
use crate::traits::TradePool;

const REL_TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn amount(v: f64) -> Amount {
    let Ok(a) = Amount::new(v) else {
        panic!("valid amount");
    };
    a
}

fn make_centered(quote_ref: f64, base_ref: f64, deviation: f64) -> CenteredPool {
    let Ok(pool) = CenteredPool::new(amount(quote_ref), amount(base_ref), deviation) else {
        panic!("valid centered pool");
    };
    pool
}

fn make_reference(quote: f64, base: f64) -> ReferencePool {
    let Ok(pool) = ReferencePool::new(amount(quote), amount(base), FeeRate::STANDARD) else {
        panic!("valid reference pool");
    };
    pool
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn reserve_strategy() -> impl Strategy<Value = f64> {
    1.0f64..1_000_000.0
}

/// Deviation as a signed fraction of the anchor reference reserve.
fn deviation_fraction_strategy() -> impl Strategy<Value = f64> {
    -2.0f64..2.0
}

/// Trade size as a fraction of the input-side reference reserve.
fn trade_fraction_strategy() -> impl Strategy<Value = f64> {
    0.000_1f64..1.5
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn centered_strategy() -> impl Strategy<Value = CenteredPool> {
    (reserve_strategy(), reserve_strategy(), deviation_fraction_strategy()).prop_map(
        |(quote_ref, base_ref, fraction)| {
            let anchor = if fraction >= 0.0 { quote_ref } else { base_ref };
            make_centered(quote_ref, base_ref, fraction * anchor)
        },
    )
}

fn trade_amount(pool: &CenteredPool, side: Side, fraction: f64) -> Amount {
    let reference = match side {
        Side::Buy => pool.quote_ref(),
        Side::Sell => pool.base_ref(),
    };
    amount(reference * fraction)
}

// ---------------------------------------------------------------------------
// 1. Simulation parity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_simulation_parity_centered(
        pool in centered_strategy(),
        side in side_strategy(),
        fraction in trade_fraction_strategy(),
    ) {
        let size = trade_amount(&pool, side, fraction);
        let quoted = match side {
            Side::Buy => pool.simulate_buy(size),
            Side::Sell => pool.simulate_sell(size),
        };
        let before = pool;

        let mut clone = pool;
        let executed = match side {
            Side::Buy => clone.buy(size),
            Side::Sell => clone.sell(size),
        };

        prop_assert_eq!(quoted, executed);
        prop_assert_eq!(pool, before);
    }

    #[test]
    fn prop_simulation_parity_reference(
        quote in reserve_strategy(),
        base in reserve_strategy(),
        fraction in trade_fraction_strategy(),
    ) {
        let pool = make_reference(quote, base);
        let size = amount(base * fraction);
        let quoted = pool.simulate_sell(size);
        let mut clone = pool;
        prop_assert_eq!(quoted, clone.sell(size));
        prop_assert_eq!(pool, make_reference(quote, base));
    }
}

// ---------------------------------------------------------------------------
// 2. Invariant preservation and 3. bounded output
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_preservation_centered(
        pool in centered_strategy(),
        side in side_strategy(),
        fraction in trade_fraction_strategy(),
    ) {
        let mut pool = pool;
        let Ok(before) = pool.snapshot() else {
            return Ok(());
        };
        let size = trade_amount(&pool, side, fraction);
        let outcome = match side {
            Side::Buy => pool.buy(size),
            Side::Sell => pool.sell(size),
        };
        let Ok(_) = outcome else {
            return Ok(());
        };
        let Ok(after) = pool.snapshot() else {
            return Ok(());
        };
        prop_assert!(
            after.invariant() >= before.invariant() * (1.0 - REL_TOL),
            "invariant decreased: {} -> {}",
            before.invariant(), after.invariant()
        );
    }

    #[test]
    fn prop_invariant_preservation_reference(
        quote in reserve_strategy(),
        base in reserve_strategy(),
        fraction in trade_fraction_strategy(),
    ) {
        let mut pool = make_reference(quote, base);
        let k_before = pool.invariant();
        let Ok(_) = pool.buy(amount(quote * fraction)) else {
            return Ok(());
        };
        prop_assert!(pool.invariant() >= k_before * (1.0 - REL_TOL));
    }

    #[test]
    fn prop_output_bounded_centered(
        pool in centered_strategy(),
        side in side_strategy(),
        fraction in trade_fraction_strategy(),
    ) {
        let Ok((quote, base)) = pool.virtual_reserves() else {
            return Ok(());
        };
        let size = trade_amount(&pool, side, fraction);
        let (outcome, opposite) = match side {
            Side::Buy => (pool.simulate_buy(size), base),
            Side::Sell => (pool.simulate_sell(size), quote),
        };
        let Ok(result) = outcome else {
            return Ok(());
        };
        prop_assert!(result.amount_out() >= 0.0);
        prop_assert!(
            result.amount_out() < opposite,
            "output {} not below virtual reserve {}",
            result.amount_out(), opposite
        );
    }
}

// ---------------------------------------------------------------------------
// 4. Split-trade equivalence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_split_trade_equivalence(
        quote_ref in reserve_strategy(),
        base_ref in reserve_strategy(),
        depth in 0.01f64..2.0,
        extra in trade_fraction_strategy(),
    ) {
        let pool = make_centered(quote_ref, base_ref, -depth * base_ref);
        let Ok(to_center) = pool.amount_to_center() else {
            return Ok(());
        };
        let x = extra * quote_ref;

        let mut whole = pool;
        let Ok(combined) = whole.buy(amount(to_center + x)) else {
            return Ok(());
        };

        let mut split = pool;
        let Ok(first) = split.buy(amount(to_center)) else {
            return Ok(());
        };
        let Ok(second) = split.buy(amount(x)) else {
            return Ok(());
        };

        let total = first.amount_out() + second.amount_out();
        prop_assert!(
            (combined.amount_out() - total).abs() <= 1e-6 * total.max(1.0),
            "combined {} != split {}",
            combined.amount_out(), total
        );
        prop_assert!(whole.deviation() > 0.0);
    }
}

// ---------------------------------------------------------------------------
// 5. Round-trip loss
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loss_centered(
        pool in centered_strategy(),
        fraction in trade_fraction_strategy(),
    ) {
        let mut pool = pool;
        // expand first, then reverse it
        let (first_side, back_side) = if pool.regime().is_mirror() {
            (Side::Sell, Side::Buy)
        } else {
            (Side::Buy, Side::Sell)
        };
        let size = trade_amount(&pool, first_side, fraction);
        let Ok(out) = pool.execute(first_side, size) else {
            return Ok(());
        };
        let received = out.result().amount_out();
        if received <= 0.0 {
            return Ok(());
        }
        let Ok(back) = pool.execute(back_side, amount(received)) else {
            return Ok(());
        };
        prop_assert!(
            back.result().amount_out() <= size.get() * (1.0 + REL_TOL),
            "round trip gained value: {} > {}",
            back.result().amount_out(), size.get()
        );
    }

    #[test]
    fn prop_round_trip_loss_reference(
        quote in reserve_strategy(),
        base in reserve_strategy(),
        fraction in trade_fraction_strategy(),
    ) {
        let mut pool = make_reference(quote, base);
        let paid = quote * fraction;
        let Ok(bought) = pool.buy(amount(paid)) else {
            return Ok(());
        };
        let Ok(sold) = pool.sell(amount(bought.amount_out())) else {
            return Ok(());
        };
        prop_assert!(sold.amount_out() <= paid);
    }
}

// ---------------------------------------------------------------------------
// 6. Fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fee_rate_monotone_in_deviation(
        anchor in reserve_strategy(),
        low in 0.0f64..1_000.0,
        step in 0.001f64..1_000.0,
    ) {
        let (Ok(near), Ok(far)) = (
            fee_rate(low * anchor / 1_000.0, anchor),
            fee_rate((low + step) * anchor / 1_000.0, anchor),
        ) else {
            return Ok(());
        };
        prop_assert!(far > near, "fee not increasing: {} <= {}", far, near);
        prop_assert!(far < 0.5);
    }

    #[test]
    fn prop_fee_monotonicity_reference(
        quote in reserve_strategy(),
        base in reserve_strategy(),
    ) {
        let pool = make_reference(quote, base);
        let mut fees = Vec::new();
        for fraction in [0.000_1, 0.001, 0.01, 0.1] {
            let Ok(result) = pool.simulate_buy(amount(quote * fraction)) else {
                continue;
            };
            fees.push(result.fee());
        }
        for pair in fees.windows(2) {
            if let [prev, curr] = pair {
                prop_assert!(curr >= prev, "fee should be non-decreasing: {} < {}", curr, prev);
            }
        }
    }

    #[test]
    fn prop_continuity_at_equilibrium(
        quote_ref in reserve_strategy(),
        base_ref in reserve_strategy(),
        scale in 1e-9f64..1e-5,
    ) {
        let mut pool = make_centered(quote_ref, base_ref, 0.0);
        let eps = scale * quote_ref;
        let Ok(_) = pool.buy(amount(eps)) else {
            return Ok(());
        };
        let Ok(to_center) = pool.amount_to_center() else {
            return Ok(());
        };
        let Ok(back) = pool.sell(amount(to_center)) else {
            return Ok(());
        };
        let ratio = back.amount_out() / eps;
        prop_assert!((ratio - 1.0).abs() < 1e-5, "centering returned {} of {}", back.amount_out(), eps);
        prop_assert!(pool.deviation().abs() < f64::EPSILON);
    }
}
