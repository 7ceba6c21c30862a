//! Simulation observer trait for progress reporting and data collection.

use sc_core::Day;
use sc_network::Network;

use crate::{DayMetrics, RunSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at day boundaries.
///
/// All methods default to no-ops.
///
/// # Example — profit printer
///
/// ```rust,ignore
/// struct ProfitPrinter;
///
/// impl SimObserver for ProfitPrinter {
///     fn on_day_end(&mut self, m: &DayMetrics) {
///         println!("{}: profit {:.0}", m.day, m.profit);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Before any logistics for `day`.
    fn on_day_start(&mut self, _day: Day) {}

    /// After the day's metrics are final.
    fn on_day_end(&mut self, _metrics: &DayMetrics) {}

    /// End-of-day stock snapshot, every `snapshot_interval` days.
    fn on_snapshot(&mut self, _day: Day, _network: &Network) {}

    /// Once, after the last day.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
