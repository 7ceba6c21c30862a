//! Restocking scheduler.
//!
//! Each day the scheduler walks the fleet twice:
//!
//! 1. **Warehouses.**  Every eligible truck takes the first warehouse whose
//!    stock is at or below its threshold and runs `[W, parent plant, W]`,
//!    carrying `min(truck capacity, refill target − stock)`.
//! 2. **Stores.**  While any flagged store still needs stock, every
//!    still-eligible truck asks the route index for the cheapest route over
//!    those stores, loads `min(capacity, Σ need, origin stock)` and drives it.
//!    Stores at their refill target stay flagged but are not routed to.
//!
//! Deliveries are applied as soon as a truck is dispatched, so later trucks
//! see the updated stock levels and warning lists.  Trucks that did not
//! leave today add one day to their on-hold counter.

use tracing::{debug, trace};

use sc_core::{Day, StoreId};
use sc_network::{Network, Truck};
use sc_routing::{DistanceOracle, Route, RouteIndex};

use crate::delivery::{deliver_to_stores, deliver_to_warehouse};
use crate::{SimError, SimResult, WarningLists};

/// Logistics totals for one day.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LogisticsTally {
    pub warehouse_deliveries: u32,
    pub store_deliveries:     u32,
    /// Units moved into warehouses.
    pub warehouse_units:      f64,
    /// Units moved into stores.
    pub store_units:          f64,
    pub mileage:              f64,
    /// Per-mile cost of today's routes.
    pub mileage_cost:         f64,
}

impl LogisticsTally {
    #[inline]
    pub fn deliveries(&self) -> u32 {
        self.warehouse_deliveries + self.store_deliveries
    }

    fn record(&mut self, truck: &Truck, route: &Route) {
        self.mileage += route.distance;
        self.mileage_cost += route.distance * truck.cost_per_mile;
    }
}

/// Read-only inputs of the logistics phase.
pub struct Dispatcher<'a, O: DistanceOracle + ?Sized> {
    pub index:    &'a RouteIndex,
    pub oracle:   &'a O,
    /// Minimum on-hold days before a truck may leave again.
    pub interval: u32,
}

impl<O: DistanceOracle + ?Sized> Dispatcher<'_, O> {
    /// Run both dispatch passes for `day` and update the on-hold counters.
    pub fn run_day(
        &self,
        day:      Day,
        network:  &mut Network,
        fleet:    &mut [Truck],
        warnings: &mut WarningLists,
    ) -> SimResult<LogisticsTally> {
        let mut tally = LogisticsTally::default();
        let mut dispatched = vec![false; fleet.len()];

        // ── Warehouse pass ────────────────────────────────────────────────
        for (truck, sent) in fleet.iter_mut().zip(dispatched.iter_mut()) {
            if !truck.is_eligible(self.interval) {
                continue;
            }
            let Some(warehouse) = network
                .warehouses
                .iter()
                .find(|w| w.needs_restock() && w.outstanding_need() > 0.0)
                .map(|w| w.id)
            else {
                break;
            };

            let route = Route::warehouse_round_trip(network, warehouse, self.oracle);
            let load = truck.capacity.min(network.warehouse(warehouse).outstanding_need());

            truck.dispatch(route.stops.clone());
            truck
                .load_up(load)
                .map_err(|source| SimError::Delivery { day, truck: truck.id, source })?;
            let units = deliver_to_warehouse(network, truck, warehouse)
                .map_err(|source| SimError::Delivery { day, truck: truck.id, source })?;

            debug!(%day, truck = %truck.id, %warehouse, units, distance = route.distance, "warehouse restock");
            tally.warehouse_deliveries += 1;
            tally.warehouse_units += units;
            tally.record(truck, &route);
            *sent = true;
        }

        // ── Store pass ────────────────────────────────────────────────────
        for (truck, sent) in fleet.iter_mut().zip(dispatched.iter_mut()) {
            if !truck.is_eligible(self.interval) {
                continue;
            }

            // Only stores below their refill target can take a delivery.
            let candidates: Vec<StoreId> = warnings
                .candidates()
                .into_iter()
                .filter(|&id| network.store(id).outstanding_need() > 0.0)
                .collect();
            if candidates.is_empty() {
                break;
            }
            let route = self
                .index
                .shortest_route(&candidates, truck.max_stops)
                .map_err(|source| SimError::Routing { day, truck: truck.id, source })?
                .clone();
            let Some(origin) = route.origin() else {
                continue;
            };

            let need: f64 = route
                .store_stops()
                .map(|id| network.store(id).outstanding_need())
                .sum();
            let available = network.warehouse(origin).curr_stock;
            let load = truck.capacity.min(need).min(available);
            if load <= 0.0 {
                trace!(%day, truck = %truck.id, %origin, need, available, "store restock deferred");
                continue;
            }

            truck.dispatch(route.stops.clone());
            truck
                .load_up(load)
                .map_err(|source| SimError::Delivery { day, truck: truck.id, source })?;
            let units = deliver_to_stores(network, truck, origin, warnings)
                .map_err(|source| SimError::Delivery { day, truck: truck.id, source })?;

            debug!(
                %day,
                truck = %truck.id,
                %origin,
                stops = route.stop_count(),
                units,
                distance = route.distance,
                "store restock"
            );
            tally.store_deliveries += 1;
            tally.store_units += units;
            tally.record(truck, &route);
            *sent = true;
        }

        for (truck, sent) in fleet.iter_mut().zip(&dispatched) {
            if !sent {
                truck.hold();
            }
        }

        Ok(tally)
    }
}
