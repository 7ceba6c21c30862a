//! `sc-sim` — daily loop orchestrator for the rust_sc supply-chain simulator.
//!
//! # Daily loop
//!
//! ```text
//! for day in 0..config.days:
//!   ① Logistics — for every eligible truck, in fleet order:
//!                   warehouse at/below threshold → [W, plant, W] restock
//!                   otherwise, flagged stores still short → best indexed route
//!                 trucks that stayed home add one on-hold day.
//!   ② Sales     — per store: draw demand, sell what stock allows,
//!                 record missed sales, update the warning lists.
//!   ③ Clear     — every truck's route is cleared (routes finish same day).
//!   ④ Record    — DayMetrics appended to history and sent to the observer.
//! ```
//!
//! Logistics always completes before sales: deliveries arrive in the
//! morning, customers buy during the day.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Parameter-study cases and the route index use Rayon.     |
//! | `fx-hash`  | FxHash for the route-index lookup table.                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sc_core::SimConfig;
//! use sc_routing::ManhattanOracle;
//! use sc_sim::{ExponentialDemand, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::baseline(), network, ExponentialDemand, ManhattanOracle)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("profit: {}", summary.cum_profit);
//! ```

pub mod builder;
pub mod delivery;
pub mod demand;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod restock;
pub mod sales;
pub mod sim;
pub mod study;
pub mod warnings;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use demand::{DemandModel, ExponentialDemand, FixedDemand, ScheduledDemand};
pub use error::{SimError, SimResult};
pub use metrics::{DayMetrics, RunSummary};
pub use observer::{NoopObserver, SimObserver};
pub use restock::{Dispatcher, LogisticsTally};
pub use sales::{SaleOutcome, SalesTally};
pub use sim::Sim;
pub use study::{StudyParameter, StudyPoint, run_study};
pub use warnings::WarningLists;
