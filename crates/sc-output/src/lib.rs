//! `sc-output` — simulation output writers for the rust_sc simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                                |
//! |-----------|---------|--------------------------------------------------------------|
//! | *(none)*  | CSV     | `daily_metrics.csv`, `stock_levels.csv`, `run_summary.csv`   |
//! | `sqlite`  | SQLite  | `output.db`                                                  |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `sc_sim::SimObserver`.  Parameter-study results are
//! written separately with [`write_study_csv`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use sc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}") }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::{CsvWriter, write_study_csv};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DailyRow, EntityKind, StockRow, StudyRow, SummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
