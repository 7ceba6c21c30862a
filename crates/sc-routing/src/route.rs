//! Delivery routes.

use sc_core::{StoreId, WarehouseId};
use sc_network::{Network, Stop};

use crate::oracle::{DistanceOracle, path_distance};

/// An ordered round trip and its total length.
///
/// Store routes read `[warehouse, store₁, …, storeₖ, warehouse]`; warehouse
/// replenishment routes read `[warehouse, plant, warehouse]`.  Routes never
/// branch or revisit a node, so a flat sequence is enough.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub stops:    Vec<Stop>,
    pub distance: f64,
}

impl Route {
    /// The warehouse the route starts and ends at.
    pub fn origin(&self) -> Option<WarehouseId> {
        self.stops.first().and_then(|s| s.as_warehouse())
    }

    /// The stores visited, in route order.
    pub fn store_stops(&self) -> impl Iterator<Item = StoreId> + '_ {
        self.stops.iter().filter_map(|s| s.as_store())
    }

    /// Number of intermediate stops (stores or the plant).
    pub fn stop_count(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }
}

impl Route {
    /// The replenishment trip `[warehouse, parent plant, warehouse]`.
    pub fn warehouse_round_trip<O: DistanceOracle + ?Sized>(
        network:   &Network,
        warehouse: WarehouseId,
        oracle:    &O,
    ) -> Route {
        let parent = network.warehouse(warehouse).parent;
        let stops = vec![
            Stop::Warehouse(warehouse),
            Stop::Plant(parent),
            Stop::Warehouse(warehouse),
        ];
        let distance = path_distance(oracle, network, &stops);
        Route { stops, distance }
    }
}
