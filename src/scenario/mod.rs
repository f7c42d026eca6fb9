//! Scenario replay: drive a pool through a scripted list of trades and
//! collect what happened.
//!
//! ```rust
//! use centered_amm::domain::Amount;
//! use centered_amm::pools::CenteredPool;
//! use centered_amm::scenario::{self, Step};
//!
//! let mut pool = CenteredPool::new(
//!     Amount::new(180.0).expect("positive"),
//!     Amount::new(120.0).expect("positive"),
//!     0.0,
//! )
//! .expect("pool created");
//!
//! let steps = [
//!     Step::Buy(Amount::new(60.0).expect("positive")),
//!     Step::Sell(Amount::new(20.0).expect("positive")),
//! ];
//! let report = scenario::run(&mut pool, &steps).expect("replay ok");
//! assert_eq!(report.steps().len(), 2);
//! ```

mod report;
mod runner;
mod step;

pub use report::{ScenarioReport, StepReport};
pub use runner::run;
pub use step::Step;
