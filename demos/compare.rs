//! Replays the same trades against a centered pool and a constant-product
//! pool and prints each pool's state after every step.
//!
//! Run with `RUST_LOG=debug cargo run --example compare` to see the
//! per-trade log lines as well.

use centered_amm::domain::{Amount, FeeRate};
use centered_amm::error::AmmError;
use centered_amm::pools::{CenteredPool, PoolBox, ReferencePool};
use centered_amm::scenario::{self, ScenarioReport, Step};
use centered_amm::traits::TradePool;

fn steps() -> Result<Vec<Step>, AmmError> {
    Ok(vec![
        Step::Buy(Amount::new(60.0)?),
        Step::Sell(Amount::new(20.0)?),
        Step::Sell(Amount::new(80.0)?),
        Step::Sell(Amount::new(20.0)?),
        Step::Buy(Amount::new(30.0)?),
        Step::Buy(Amount::new(90.0)?),
        Step::Buy(Amount::new(50.0)?),
    ])
}

fn print_report(name: &str, report: &ScenarioReport) {
    println!("== {name} ==");
    println!("{}", report.initial());
    println!();
    for step in report.steps() {
        println!("{} -> {}", step.step(), step.executed());
        println!("{}", step.snapshot());
        println!();
    }
    println!("fees (base):     {}", report.total_fees_base());
    println!("fees (quote):    {}", report.total_fees_quote());
    println!("impermanent loss: {:.4}%", report.impermanent_loss() * 100.0);
    println!();
}

fn main() -> Result<(), AmmError> {
    env_logger::init();

    let steps = steps()?;
    let quote = Amount::new(180.0)?;
    let base = Amount::new(120.0)?;

    let mut pools: Vec<(&str, PoolBox)> = vec![
        ("centered", CenteredPool::new(quote, base, 0.0)?.into()),
        ("constant product", ReferencePool::new(quote, base, FeeRate::STANDARD)?.into()),
    ];

    for (name, pool) in &mut pools {
        let report = scenario::run(pool, &steps)?;
        print_report(*name, &report);
    }

    let mut net_bought = CenteredPool::new(quote, base, 60.0)?;
    let result = net_bought.buy(Amount::new(60.0)?)?;
    println!("centered pool at m=60, buy 60: {result}");
    println!("{}", net_bought.snapshot()?);

    Ok(())
}
