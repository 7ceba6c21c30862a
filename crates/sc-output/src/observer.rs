//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use sc_core::Day;
use sc_network::Network;
use sc_sim::{DayMetrics, RunSummary, SimObserver};

use crate::row::{DailyRow, EntityKind, StockRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes daily metrics, stock snapshots and the run
/// summary to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    cum_profit: f64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, cum_profit: 0.0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; further errors suppressed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_day_end(&mut self, metrics: &DayMetrics) {
        self.cum_profit += metrics.profit;
        let row = DailyRow::from_metrics(metrics, self.cum_profit);
        let result = self.writer.write_day(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, day: Day, network: &Network) {
        let warehouses = network.warehouses.iter().map(|w| StockRow {
            day:       day.0,
            kind:      EntityKind::Warehouse,
            id:        w.id.0,
            stock:     w.curr_stock,
            min_stock: w.min_stock,
            capacity:  w.capacity,
        });
        let stores = network.stores.iter().map(|s| StockRow {
            day:       day.0,
            kind:      EntityKind::Store,
            id:        s.id.0,
            stock:     s.curr_stock,
            min_stock: s.min_stock,
            capacity:  s.capacity,
        });
        let rows: Vec<StockRow> = warehouses.chain(stores).collect();

        if !rows.is_empty() {
            let result = self.writer.write_stock(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        let result = self.writer.write_summary(&SummaryRow::from(summary));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
