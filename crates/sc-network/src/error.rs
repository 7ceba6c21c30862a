use thiserror::Error;

use sc_core::TruckId;

use crate::Stop;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("stock level {level} of {entity} outside [0, {capacity}]")]
    StockOutOfRange {
        entity:   Stop,
        level:    f64,
        capacity: f64,
    },

    #[error("{truck} cannot carry {requested} units (capacity {capacity}, on board {on_board})")]
    Overload {
        truck:     TruckId,
        requested: f64,
        capacity:  f64,
        on_board:  f64,
    },

    #[error("{truck} cannot unload {requested} units, only {on_board} on board")]
    Underload {
        truck:     TruckId,
        requested: f64,
        on_board:  f64,
    },

    #[error("{0} references a missing entity")]
    DanglingReference(Stop),

    #[error("invalid {what} for {entity}: {value}")]
    InvalidParameter {
        entity: Stop,
        what:   &'static str,
        value:  f64,
    },

    #[error("store data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
