//! CSV store loader.
//!
//! # CSV format
//!
//! One row per store.  `sale_rate` is the rate of the store's exponential
//! daily-demand distribution.
//!
//! ```csv
//! id,x,y,capacity,sale_rate
//! 1,3.0,7.0,100,0.25
//! 2,5.0,8.0,120,0.4
//! ```
//!
//! Plants and warehouses are few and fixed, so applications add them in code
//! through [`NetworkBuilder`](crate::NetworkBuilder).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{NetworkError, NetworkResult};

/// One parsed row of the store table.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct StoreRecord {
    pub id:        u32,
    pub x:         f64,
    pub y:         f64,
    pub capacity:  f64,
    pub sale_rate: f64,
}

/// Load store records from a CSV file.
pub fn load_stores_csv(path: &Path) -> NetworkResult<Vec<StoreRecord>> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_stores_reader(file)
}

/// Like [`load_stores_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded data.
pub fn load_stores_reader<R: Read>(reader: R) -> NetworkResult<Vec<StoreRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<StoreRecord>()
        .map(|row| row.map_err(|e| NetworkError::Parse(e.to_string())))
        .collect()
}
