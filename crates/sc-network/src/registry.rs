//! `Network` — the fixed sets of plants, warehouses, and stores.
//!
//! Each `Vec` is indexed by the matching typed id (`StoreId(3)` is
//! `stores[3]`).  The registry is owned by the simulation for the run's
//! lifetime and passed by reference to every phase; nothing holds it
//! globally.

use sc_core::{PlantId, Point, StoreId, WarehouseId};

use crate::{NetworkResult, Plant, Stop, Store, Warehouse};
use crate::entity::checked_level;

#[derive(Clone, Debug, Default)]
pub struct Network {
    pub plants:     Vec<Plant>,
    pub warehouses: Vec<Warehouse>,
    pub stores:     Vec<Store>,
}

impl Network {
    #[inline]
    pub fn plant(&self, id: PlantId) -> &Plant {
        &self.plants[id.index()]
    }

    #[inline]
    pub fn warehouse(&self, id: WarehouseId) -> &Warehouse {
        &self.warehouses[id.index()]
    }

    #[inline]
    pub fn warehouse_mut(&mut self, id: WarehouseId) -> &mut Warehouse {
        &mut self.warehouses[id.index()]
    }

    #[inline]
    pub fn store(&self, id: StoreId) -> &Store {
        &self.stores[id.index()]
    }

    #[inline]
    pub fn store_mut(&mut self, id: StoreId) -> &mut Store {
        &mut self.stores[id.index()]
    }

    pub fn warehouse_ids(&self) -> impl Iterator<Item = WarehouseId> + '_ {
        self.warehouses.iter().map(|w| w.id)
    }

    /// Grid position of any route stop.
    pub fn location(&self, stop: Stop) -> Point {
        match stop {
            Stop::Plant(id)     => self.plant(id).location,
            Stop::Warehouse(id) => self.warehouse(id).location,
            Stop::Store(id)     => self.store(id).location,
        }
    }

    /// Set every store and warehouse threshold to `floor(p × capacity)`.
    pub fn apply_min_percent(&mut self, p: f64) {
        for w in &mut self.warehouses {
            w.min_stock = (p * w.capacity).floor();
        }
        for s in &mut self.stores {
            s.min_stock = (p * s.capacity).floor();
        }
    }

    /// Total stock held across all warehouses.
    pub fn warehouse_stock(&self) -> f64 {
        self.warehouses.iter().map(|w| w.curr_stock).sum()
    }

    /// Total stock held across all stores.
    pub fn store_stock(&self) -> f64 {
        self.stores.iter().map(|s| s.curr_stock).sum()
    }

    /// Verify `0 ≤ curr_stock ≤ capacity` for every store and warehouse.
    pub fn check_stock_bounds(&self) -> NetworkResult<()> {
        for w in &self.warehouses {
            checked_level(Stop::Warehouse(w.id), w.curr_stock, w.capacity)?;
        }
        for s in &self.stores {
            checked_level(Stop::Store(s.id), s.curr_stock, s.capacity)?;
        }
        Ok(())
    }
}
