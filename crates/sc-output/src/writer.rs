//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DailyRow, OutputResult, StockRow, SummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are stored by the observer and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one day of metrics.
    fn write_day(&mut self, row: &DailyRow) -> OutputResult<()>;

    /// Write a batch of end-of-day stock levels.
    fn write_stock(&mut self, rows: &[StockRow]) -> OutputResult<()>;

    /// Write the end-of-run totals.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
