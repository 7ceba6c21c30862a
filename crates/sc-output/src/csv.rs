//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `daily_metrics.csv`
//! - `stock_levels.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DailyRow, OutputResult, StockRow, StudyRow, SummaryRow};

pub const DAILY_HEADER: [&str; 11] = [
    "day",
    "demand",
    "sales",
    "revenue",
    "opportunity_cost",
    "warehouse_deliveries",
    "store_deliveries",
    "mileage",
    "delivery_cost",
    "profit",
    "cum_profit",
];

pub const STOCK_HEADER: [&str; 6] = ["day", "kind", "id", "stock", "min_stock", "capacity"];

pub const SUMMARY_HEADER: [&str; 11] = [
    "days",
    "cum_demand",
    "cum_sales",
    "cum_revenue",
    "cum_opportunity_cost",
    "cum_delivery_cost",
    "cum_mileage",
    "cum_warehouse_deliveries",
    "cum_store_deliveries",
    "cum_profit",
    "delivery_cost_per_unit",
];

pub const STUDY_HEADER: [&str; 6] = [
    "parameter",
    "value",
    "cum_revenue",
    "cum_delivery_cost",
    "cum_opportunity_cost",
    "cum_profit",
];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    daily:    Writer<File>,
    stock:    Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut daily = Writer::from_path(dir.join("daily_metrics.csv"))?;
        daily.write_record(DAILY_HEADER)?;

        let mut stock = Writer::from_path(dir.join("stock_levels.csv"))?;
        stock.write_record(STOCK_HEADER)?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(SUMMARY_HEADER)?;

        Ok(Self { daily, stock, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_day(&mut self, row: &DailyRow) -> OutputResult<()> {
        self.daily.write_record(&[
            row.day.to_string(),
            row.demand.to_string(),
            row.sales.to_string(),
            row.revenue.to_string(),
            row.opportunity_cost.to_string(),
            row.warehouse_deliveries.to_string(),
            row.store_deliveries.to_string(),
            row.mileage.to_string(),
            row.delivery_cost.to_string(),
            row.profit.to_string(),
            row.cum_profit.to_string(),
        ])?;
        Ok(())
    }

    fn write_stock(&mut self, rows: &[StockRow]) -> OutputResult<()> {
        for row in rows {
            self.stock.write_record(&[
                row.day.to_string(),
                row.kind.as_str().to_owned(),
                row.id.to_string(),
                row.stock.to_string(),
                row.min_stock.to_string(),
                row.capacity.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.days.to_string(),
            row.cum_demand.to_string(),
            row.cum_sales.to_string(),
            row.cum_revenue.to_string(),
            row.cum_opportunity_cost.to_string(),
            row.cum_delivery_cost.to_string(),
            row.cum_mileage.to_string(),
            row.cum_warehouse_deliveries.to_string(),
            row.cum_store_deliveries.to_string(),
            row.cum_profit.to_string(),
            row.delivery_cost_per_unit.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.daily.flush()?;
        self.stock.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}

/// Write parameter-study results to `path`, one row per case.
pub fn write_study_csv(path: &Path, rows: &[StudyRow]) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(STUDY_HEADER)?;
    for row in rows {
        w.write_record(&[
            row.parameter.to_owned(),
            row.value.to_string(),
            row.cum_revenue.to_string(),
            row.cum_delivery_cost.to_string(),
            row.cum_opportunity_cost.to_string(),
            row.cum_profit.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
