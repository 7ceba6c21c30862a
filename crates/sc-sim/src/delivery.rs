//! Delivery execution.
//!
//! Both functions apply a route the scheduler has already loaded onto the
//! truck, and both leave the truck empty.

use sc_core::WarehouseId;
use sc_network::{Network, NetworkResult, Stop, Truck};

use crate::WarningLists;

/// Unload the whole truck into `warehouse`.  Returns the units delivered.
pub fn deliver_to_warehouse(
    network:   &mut Network,
    truck:     &mut Truck,
    warehouse: WarehouseId,
) -> NetworkResult<f64> {
    let qty = truck.load;
    network.warehouse_mut(warehouse).add_stock(qty)?;
    truck.unload_all();
    Ok(qty)
}

/// Draw the truck's load from `origin`, then visit each store on its route.
///
/// Each store receives `min(outstanding need, remaining load)` and has its
/// warning status re-checked.  Anything left on board after the last stop
/// goes back to `origin`.  Returns the units delivered to stores.
pub fn deliver_to_stores(
    network:  &mut Network,
    truck:    &mut Truck,
    origin:   WarehouseId,
    warnings: &mut WarningLists,
) -> NetworkResult<f64> {
    network.warehouse_mut(origin).remove_stock(truck.load)?;

    let mut delivered = 0.0;
    for stop in truck.route.clone() {
        let Stop::Store(id) = stop else { continue };
        let store = network.store_mut(id);
        let qty = store.outstanding_need().min(truck.load);
        truck.unload(qty)?;
        store.add_stock(qty)?;
        warnings.delivery_check(store);
        delivered += qty;
    }

    let leftover = truck.unload_all();
    if leftover > 0.0 {
        network.warehouse_mut(origin).add_stock(leftover)?;
    }
    Ok(delivered)
}
