//! Replays a scripted sequence of trades against a pool.

use crate::error::AmmError;
use crate::traits::TradePool;

use super::{ScenarioReport, Step, StepReport};

/// Replays `steps` against `pool` in order.
///
/// Every step is quoted with the simulate operation first, then executed
/// on a copy of the pool that replaces `pool` only once the execution
/// matches its quote.  The snapshot after each step is recorded.  The
/// replay stops at the first failing step and leaves the pool in the
/// state reached by the steps before it.
///
/// # Errors
///
/// - Any error a trade or snapshot returns.
/// - [`AmmError::DegenerateState`] if a quote disagrees with its
///   execution.
pub fn run<P: TradePool + Clone>(
    pool: &mut P,
    steps: &[Step],
) -> Result<ScenarioReport, AmmError> {
    let initial = pool.snapshot()?;
    let mut reports = Vec::with_capacity(steps.len());

    for (index, step) in steps.iter().enumerate() {
        let mut next = pool.clone();
        let (quote, executed) = match *step {
            Step::Buy(amount) => (pool.simulate_buy(amount)?, next.buy(amount)?),
            Step::Sell(amount) => (pool.simulate_sell(amount)?, next.sell(amount)?),
        };
        if quote != executed {
            return Err(AmmError::DegenerateState(
                "simulated trade diverged from execution",
            ));
        }
        *pool = next;
        let snapshot = pool.snapshot()?;
        log::info!(
            "step {}: {} -> out={} fee={} price={}",
            index + 1,
            step,
            executed.amount_out(),
            executed.fee(),
            snapshot.price()
        );
        reports.push(StepReport::new(*step, quote, executed, snapshot));
    }

    Ok(ScenarioReport::new(initial, reports))
}
