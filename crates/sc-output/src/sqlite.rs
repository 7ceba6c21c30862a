//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `daily_metrics`, `stock_levels` and `run_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DailyRow, OutputResult, StockRow, SummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS daily_metrics (
                 day                  INTEGER PRIMARY KEY,
                 demand               REAL    NOT NULL,
                 sales                REAL    NOT NULL,
                 revenue              REAL    NOT NULL,
                 opportunity_cost     REAL    NOT NULL,
                 warehouse_deliveries INTEGER NOT NULL,
                 store_deliveries     INTEGER NOT NULL,
                 mileage              REAL    NOT NULL,
                 delivery_cost        REAL    NOT NULL,
                 profit               REAL    NOT NULL,
                 cum_profit           REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS stock_levels (
                 day       INTEGER NOT NULL,
                 kind      TEXT    NOT NULL,
                 id        INTEGER NOT NULL,
                 stock     REAL    NOT NULL,
                 min_stock REAL    NOT NULL,
                 capacity  REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 days                     INTEGER NOT NULL,
                 cum_demand               REAL    NOT NULL,
                 cum_sales                REAL    NOT NULL,
                 cum_revenue              REAL    NOT NULL,
                 cum_opportunity_cost     REAL    NOT NULL,
                 cum_delivery_cost        REAL    NOT NULL,
                 cum_mileage              REAL    NOT NULL,
                 cum_warehouse_deliveries INTEGER NOT NULL,
                 cum_store_deliveries     INTEGER NOT NULL,
                 cum_profit               REAL    NOT NULL,
                 delivery_cost_per_unit   REAL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_day(&mut self, row: &DailyRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO daily_metrics \
             (day, demand, sales, revenue, opportunity_cost, warehouse_deliveries, \
              store_deliveries, mileage, delivery_cost, profit, cum_profit) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            rusqlite::params![
                row.day,
                row.demand,
                row.sales,
                row.revenue,
                row.opportunity_cost,
                row.warehouse_deliveries,
                row.store_deliveries,
                row.mileage,
                row.delivery_cost,
                row.profit,
                row.cum_profit,
            ],
        )?;
        Ok(())
    }

    fn write_stock(&mut self, rows: &[StockRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO stock_levels (day, kind, id, stock, min_stock, capacity) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.day,
                    row.kind.as_str(),
                    row.id,
                    row.stock,
                    row.min_stock,
                    row.capacity,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary \
             (days, cum_demand, cum_sales, cum_revenue, cum_opportunity_cost, cum_delivery_cost, \
              cum_mileage, cum_warehouse_deliveries, cum_store_deliveries, cum_profit, \
              delivery_cost_per_unit) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            rusqlite::params![
                row.days,
                row.cum_demand,
                row.cum_sales,
                row.cum_revenue,
                row.cum_opportunity_cost,
                row.cum_delivery_cost,
                row.cum_mileage,
                row.cum_warehouse_deliveries,
                row.cum_store_deliveries,
                row.cum_profit,
                row.delivery_cost_per_unit,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
