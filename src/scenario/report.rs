//! Results of a scenario replay.

use crate::domain::{PoolSnapshot, Side, SwapResult};

use super::Step;

/// Outcome of one scenario step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    step: Step,
    quote: SwapResult,
    executed: SwapResult,
    snapshot: PoolSnapshot,
}

impl StepReport {
    pub(crate) const fn new(
        step: Step,
        quote: SwapResult,
        executed: SwapResult,
        snapshot: PoolSnapshot,
    ) -> Self {
        Self {
            step,
            quote,
            executed,
            snapshot,
        }
    }

    /// Returns the scripted step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Returns the quote obtained before executing.
    #[must_use]
    pub const fn quote(&self) -> SwapResult {
        self.quote
    }

    /// Returns the executed trade.
    #[must_use]
    pub const fn executed(&self) -> SwapResult {
        self.executed
    }

    /// Returns the pool state after the step.
    #[must_use]
    pub const fn snapshot(&self) -> PoolSnapshot {
        self.snapshot
    }
}

/// Full record of a scenario replay.
///
/// Fees are implied fees in output units, so buys accumulate fees in base
/// and sells in quote.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioReport {
    initial: PoolSnapshot,
    steps: Vec<StepReport>,
}

impl ScenarioReport {
    pub(crate) const fn new(initial: PoolSnapshot, steps: Vec<StepReport>) -> Self {
        Self { initial, steps }
    }

    /// Returns the pool state before the first step.
    #[must_use]
    pub const fn initial(&self) -> PoolSnapshot {
        self.initial
    }

    /// Returns one report per step, in order.
    #[must_use]
    pub fn steps(&self) -> &[StepReport] {
        &self.steps
    }

    /// Returns the pool state after the last step, or the initial state
    /// for an empty scenario.
    #[must_use]
    pub fn final_snapshot(&self) -> PoolSnapshot {
        self.steps
            .last()
            .map_or(self.initial, |step| step.snapshot)
    }

    /// Total implied fees charged on buys, in base.
    #[must_use]
    pub fn total_fees_base(&self) -> f64 {
        self.fees_on(Side::Buy)
    }

    /// Total implied fees charged on sells, in quote.
    #[must_use]
    pub fn total_fees_quote(&self) -> f64 {
        self.fees_on(Side::Sell)
    }

    fn fees_on(&self, side: Side) -> f64 {
        self.steps
            .iter()
            .filter(|report| report.step.side() == side)
            .map(|report| report.executed.fee())
            .sum()
    }

    /// Pool value at the end relative to holding the initial reserves,
    /// both stated at the final reserve ratio.
    ///
    /// ```text
    /// final_value / (initial_quote + initial_base · final_ratio) − 1
    /// ```
    ///
    /// The ratio is taken before fee adjustment, so an untouched pool
    /// reports zero.  Negative values are a loss against holding.
    #[must_use]
    pub fn impermanent_loss(&self) -> f64 {
        let last = self.final_snapshot();
        let held = self.initial.quote_reserve()
            + self.initial.base_reserve() * last.reserve_ratio();
        last.total_value() / held - 1.0
    }
}
