//! Demand/sales balancing.
//!
//! Per store, per day: draw demand, sell `min(demand, stock)`, record the
//! shortfall as a missed sale, and update the warning lists.

use tracing::trace;

use sc_core::{Day, DemandRng};
use sc_network::{Network, NetworkResult, Store};

use crate::{DemandModel, SimError, SimResult, WarningLists};

/// What one store sold on one day.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SaleOutcome {
    pub fulfilled: f64,
    pub missed:    f64,
}

/// Network-wide sales totals for one day.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SalesTally {
    pub demand:           f64,
    pub sales:            f64,
    pub revenue:          f64,
    pub opportunity_cost: f64,
}

/// Sell against `demand` at one store and append the day to its history.
///
/// Negative or NaN demand is treated as zero.
pub fn balance(store: &mut Store, demand: f64) -> NetworkResult<SaleOutcome> {
    let demand = if demand.is_nan() { 0.0 } else { demand.max(0.0) };
    let fulfilled = demand.min(store.curr_stock);
    let missed = demand - fulfilled;
    store.remove_stock(fulfilled)?;
    store.record_sales(fulfilled, missed);
    Ok(SaleOutcome { fulfilled, missed })
}

/// Run the sales phase over every store, in store order.
pub fn run_sales<D: DemandModel + ?Sized>(
    day:      Day,
    network:  &mut Network,
    warnings: &mut WarningLists,
    model:    &D,
    rng:      &mut DemandRng,
    price:    f64,
) -> SimResult<SalesTally> {
    let mut tally = SalesTally::default();

    for store in &mut network.stores {
        let demand = model
            .demand(store, day, rng)
            .map_err(|source| SimError::Demand { day, store: store.id, source })?;
        let outcome = balance(store, demand)
            .map_err(|source| SimError::Sales { day, store: store.id, source })?;
        warnings.inventory_check(store);

        trace!(%day, store = %store.id, demand, sold = outcome.fulfilled, stock = store.curr_stock, "sale");

        tally.demand += demand.max(0.0);
        tally.sales += outcome.fulfilled;
        tally.revenue += outcome.fulfilled * price;
        tally.opportunity_cost += outcome.missed * price;
    }

    Ok(tally)
}
