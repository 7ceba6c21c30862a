//! Routing error type.

use thiserror::Error;

use sc_core::{StoreId, WarehouseId};

/// Errors produced by `sc-routing`.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("no candidate stores to route")]
    EmptyCandidates,

    #[error("route of {requested} stops requested but the index covers at most {indexed}")]
    StopLimitExceeded { requested: usize, indexed: usize },

    #[error("truck allows zero stops")]
    NoStopsAllowed,

    #[error("no precomputed route from {warehouse} through {stores:?}")]
    NoRoute {
        warehouse: WarehouseId,
        stores:    Vec<StoreId>,
    },

    #[error("network has no warehouse to start a route from")]
    NoWarehouse,
}

pub type RoutingResult<T> = Result<T, RoutingError>;
