//! Located entities: plants, warehouses, and stores.
//!
//! # Stock discipline
//!
//! Every stock level lives in `[0, capacity]`.  Fields are `pub` for reading,
//! but all mutation during a run goes through [`Warehouse::add_stock`],
//! [`Store::remove_stock`] and friends, which reject out-of-range results
//! with [`NetworkError::StockOutOfRange`].  Results that overshoot a bound by
//! less than [`STOCK_EPSILON`] (floating-point residue from percentage
//! arithmetic) are clamped onto the bound instead.

use std::fmt;

use sc_core::{PlantId, Point, StoreId, WarehouseId};

use crate::{NetworkError, NetworkResult};

/// Overshoot tolerated (and clamped away) when validating stock levels.
pub const STOCK_EPSILON: f64 = 1e-9;

// ── Stop ──────────────────────────────────────────────────────────────────────

/// One node on a truck route, and the identity used in error messages.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Stop {
    Plant(PlantId),
    Warehouse(WarehouseId),
    Store(StoreId),
}

impl Stop {
    /// The store id, if this stop is a store.
    #[inline]
    pub fn as_store(self) -> Option<StoreId> {
        match self {
            Stop::Store(id) => Some(id),
            _ => None,
        }
    }

    /// The warehouse id, if this stop is a warehouse.
    #[inline]
    pub fn as_warehouse(self) -> Option<WarehouseId> {
        match self {
            Stop::Warehouse(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stop::Plant(id)     => id.fmt(f),
            Stop::Warehouse(id) => id.fmt(f),
            Stop::Store(id)     => id.fmt(f),
        }
    }
}

/// Validate `level` against `[0, capacity]`, clamping sub-epsilon overshoot.
pub(crate) fn checked_level(entity: Stop, level: f64, capacity: f64) -> NetworkResult<f64> {
    if level.is_nan() || level < -STOCK_EPSILON || level > capacity + STOCK_EPSILON {
        return Err(NetworkError::StockOutOfRange { entity, level, capacity });
    }
    Ok(level.clamp(0.0, capacity))
}

// ── Plant ─────────────────────────────────────────────────────────────────────

/// A production plant.
///
/// Plants are an unbounded source: warehouse replenishment never draws their
/// stock down.  `curr_stock` and `production_rate` are carried as data only.
#[derive(Clone, Debug)]
pub struct Plant {
    pub id:              PlantId,
    pub name:            String,
    pub location:        Point,
    pub capacity:        f64,
    pub curr_stock:      f64,
    pub production_rate: f64,
}

// ── Warehouse ─────────────────────────────────────────────────────────────────

/// A regional warehouse supplied by one parent plant.
#[derive(Clone, Debug)]
pub struct Warehouse {
    pub id:         WarehouseId,
    pub name:       String,
    pub location:   Point,
    pub capacity:   f64,
    pub curr_stock: f64,
    /// Restock threshold (`floor(min_percent × capacity)`).
    pub min_stock:  f64,
    /// Refill target as a percentage of capacity (0–100).
    pub refill_pct: f64,
    /// Plant that replenishes this warehouse.  Only read for routing.
    pub parent:     PlantId,
}

impl Warehouse {
    /// Desired stock level after replenishment.
    #[inline]
    pub fn refill_target(&self) -> f64 {
        self.capacity * self.refill_pct / 100.0
    }

    /// Units needed to reach the refill target (never negative).
    #[inline]
    pub fn outstanding_need(&self) -> f64 {
        (self.refill_target() - self.curr_stock).max(0.0)
    }

    /// `true` once stock has fallen to or below the threshold.
    #[inline]
    pub fn needs_restock(&self) -> bool {
        self.curr_stock <= self.min_stock
    }

    pub fn add_stock(&mut self, qty: f64) -> NetworkResult<()> {
        self.set_stock(self.curr_stock + qty)
    }

    pub fn remove_stock(&mut self, qty: f64) -> NetworkResult<()> {
        self.set_stock(self.curr_stock - qty)
    }

    pub fn set_stock(&mut self, level: f64) -> NetworkResult<()> {
        self.curr_stock = checked_level(Stop::Warehouse(self.id), level, self.capacity)?;
        Ok(())
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// A retail store with stochastic daily demand.
#[derive(Clone, Debug)]
pub struct Store {
    pub id:         StoreId,
    pub name:       String,
    pub location:   Point,
    pub capacity:   f64,
    pub curr_stock: f64,
    /// Restock threshold (`floor(min_percent × capacity)`).
    pub min_stock:  f64,
    /// Refill target as a percentage of capacity (0–100).
    pub refill_pct: f64,
    /// Rate of the exponential daily-demand distribution.
    pub sale_rate:  f64,
    /// Units sold, one entry per simulated day.
    pub fulfilled:  Vec<f64>,
    /// Units demanded but not in stock, one entry per simulated day.
    pub missed:     Vec<f64>,
}

impl Store {
    #[inline]
    pub fn refill_target(&self) -> f64 {
        self.capacity * self.refill_pct / 100.0
    }

    #[inline]
    pub fn outstanding_need(&self) -> f64 {
        (self.refill_target() - self.curr_stock).max(0.0)
    }

    /// Stock is positive but at or below the threshold.
    #[inline]
    pub fn is_low(&self) -> bool {
        self.curr_stock > 0.0 && self.curr_stock <= self.min_stock
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curr_stock <= 0.0
    }

    pub fn add_stock(&mut self, qty: f64) -> NetworkResult<()> {
        self.set_stock(self.curr_stock + qty)
    }

    pub fn remove_stock(&mut self, qty: f64) -> NetworkResult<()> {
        self.set_stock(self.curr_stock - qty)
    }

    pub fn set_stock(&mut self, level: f64) -> NetworkResult<()> {
        self.curr_stock = checked_level(Stop::Store(self.id), level, self.capacity)?;
        Ok(())
    }

    /// Append one day of sales history.
    pub fn record_sales(&mut self, fulfilled: f64, missed: f64) {
        self.fulfilled.push(fulfilled);
        self.missed.push(missed);
    }
}
