//! Delivery trucks.
//!
//! A truck is `IDLE` while its route is empty and `DISPATCHED` once a route
//! is assigned for the day.  Routes always complete the same day, so the
//! driver clears every route at end of day.  The on-hold counter tracks days
//! since the last departure and gates eligibility against the configured
//! delivery interval.

use sc_core::TruckId;

use crate::entity::STOCK_EPSILON;
use crate::{NetworkError, NetworkResult, Stop};

#[derive(Clone, Debug)]
pub struct Truck {
    pub id:            TruckId,
    /// Unit load limit.
    pub capacity:      f64,
    /// Units currently on board.
    pub load:          f64,
    /// Ordered stops of today's route; empty when idle.
    pub route:         Vec<Stop>,
    /// Days since the last departure.  Starts at 1.
    pub on_hold:       u32,
    pub max_stops:     usize,
    /// Daily hire cost.
    pub base_cost:     f64,
    pub cost_per_mile: f64,
}

impl Truck {
    pub fn new(
        id:            TruckId,
        capacity:      f64,
        max_stops:     usize,
        base_cost:     f64,
        cost_per_mile: f64,
    ) -> Self {
        Self {
            id,
            capacity,
            load: 0.0,
            route: Vec::new(),
            on_hold: 1,
            max_stops,
            base_cost,
            cost_per_mile,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.route.is_empty()
    }

    /// Idle and on hold for at least `interval` days.
    #[inline]
    pub fn is_eligible(&self, interval: u32) -> bool {
        self.is_idle() && self.on_hold >= interval
    }

    /// Assign today's route and reset the on-hold counter.
    pub fn dispatch(&mut self, route: Vec<Stop>) {
        self.route = route;
        self.on_hold = 1;
    }

    /// One more day without departing.
    #[inline]
    pub fn hold(&mut self) {
        self.on_hold += 1;
    }

    pub fn clear_route(&mut self) {
        self.route.clear();
    }

    /// Put `qty` units on board.
    pub fn load_up(&mut self, qty: f64) -> NetworkResult<()> {
        if qty.is_nan() || qty < 0.0 || self.load + qty > self.capacity + STOCK_EPSILON {
            return Err(NetworkError::Overload {
                truck:     self.id,
                requested: qty,
                capacity:  self.capacity,
                on_board:  self.load,
            });
        }
        self.load = (self.load + qty).min(self.capacity);
        Ok(())
    }

    /// Take `qty` units off the truck.
    pub fn unload(&mut self, qty: f64) -> NetworkResult<()> {
        if qty.is_nan() || qty < 0.0 || qty > self.load + STOCK_EPSILON {
            return Err(NetworkError::Underload {
                truck:     self.id,
                requested: qty,
                on_board:  self.load,
            });
        }
        self.load = (self.load - qty).max(0.0);
        Ok(())
    }

    /// Empty the truck, returning what was on board.
    pub fn unload_all(&mut self) -> f64 {
        std::mem::take(&mut self.load)
    }
}
