use thiserror::Error;

use sc_core::{CoreError, Day, StoreId, TruckId};
use sc_network::NetworkError;
use sc_routing::RoutingError;

/// Fatal simulation errors.
///
/// Everything that reaches the driver aborts the run.  Variants raised
/// mid-run carry the day and the truck or store involved so the failure
/// can be reproduced.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("{day}: routing failed for {truck}: {source}")]
    Routing {
        day:    Day,
        truck:  TruckId,
        source: RoutingError,
    },

    #[error("{day}: delivery by {truck} violated an invariant: {source}")]
    Delivery {
        day:    Day,
        truck:  TruckId,
        source: NetworkError,
    },

    #[error("{day}: sales at {store} violated an invariant: {source}")]
    Sales {
        day:    Day,
        store:  StoreId,
        source: NetworkError,
    },

    #[error("{day}: demand for {store} could not be drawn: {source}")]
    Demand {
        day:    Day,
        store:  StoreId,
        source: CoreError,
    },

    #[error("{day}: end-of-day check failed: {source}")]
    Invariant {
        day:    Day,
        source: NetworkError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
