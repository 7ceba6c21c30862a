//! Fluent builder for a [`Network`].
//!
//! # Usage
//!
//! ```rust
//! use sc_core::Point;
//! use sc_network::NetworkBuilder;
//!
//! let mut b = NetworkBuilder::new();
//! let p1 = b.add_plant("P1", Point::new(1.0, 4.0), 10_000.0, 100.0);
//! let _w1 = b.add_warehouse("W1", Point::new(4.0, 3.0), 650.0, 100.0, p1);
//! let _s1 = b.add_store("S1", Point::new(3.0, 7.0), 100.0, 100.0, 0.2);
//! let network = b.build().unwrap();
//!
//! assert_eq!(network.stores.len(), 1);
//! assert_eq!(network.stores[0].curr_stock, 100.0); // entities start full
//! ```

use sc_core::{PlantId, Point, StoreId, WarehouseId};

use crate::{Network, NetworkError, NetworkResult, Plant, Stop, Store, StoreRecord, Warehouse};

/// Fluent builder for [`Network`].
///
/// Ids are handed out in insertion order.  Every entity starts at full
/// capacity with a zero restock threshold; the simulation applies the
/// configured `min_percent` when it takes ownership.
#[derive(Default)]
pub struct NetworkBuilder {
    plants:     Vec<Plant>,
    warehouses: Vec<Warehouse>,
    stores:     Vec<Store>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_plant(
        &mut self,
        name:            impl Into<String>,
        location:        Point,
        capacity:        f64,
        production_rate: f64,
    ) -> PlantId {
        let id = PlantId(self.plants.len() as u32);
        self.plants.push(Plant {
            id,
            name: name.into(),
            location,
            capacity,
            curr_stock: capacity,
            production_rate,
        });
        id
    }

    pub fn add_warehouse(
        &mut self,
        name:       impl Into<String>,
        location:   Point,
        capacity:   f64,
        refill_pct: f64,
        parent:     PlantId,
    ) -> WarehouseId {
        let id = WarehouseId(self.warehouses.len() as u32);
        self.warehouses.push(Warehouse {
            id,
            name: name.into(),
            location,
            capacity,
            curr_stock: capacity,
            min_stock: 0.0,
            refill_pct,
            parent,
        });
        id
    }

    pub fn add_store(
        &mut self,
        name:       impl Into<String>,
        location:   Point,
        capacity:   f64,
        refill_pct: f64,
        sale_rate:  f64,
    ) -> StoreId {
        let id = StoreId(self.stores.len() as u32);
        self.stores.push(Store {
            id,
            name: name.into(),
            location,
            capacity,
            curr_stock: capacity,
            min_stock: 0.0,
            refill_pct,
            sale_rate,
            fulfilled: Vec::new(),
            missed: Vec::new(),
        });
        id
    }

    /// Add one store per loaded record, in file order.
    pub fn add_store_records(&mut self, records: &[StoreRecord], refill_pct: f64) -> Vec<StoreId> {
        records
            .iter()
            .map(|r| {
                self.add_store(
                    format!("S{}", r.id),
                    Point::new(r.x, r.y),
                    r.capacity,
                    refill_pct,
                    r.sale_rate,
                )
            })
            .collect()
    }

    /// Validate parameters and parent references, then return the network.
    pub fn build(self) -> NetworkResult<Network> {
        for w in &self.warehouses {
            let entity = Stop::Warehouse(w.id);
            if w.parent.index() >= self.plants.len() {
                return Err(NetworkError::DanglingReference(entity));
            }
            check_positive(entity, "capacity", w.capacity)?;
            check_refill(entity, w.refill_pct)?;
        }
        for s in &self.stores {
            let entity = Stop::Store(s.id);
            check_positive(entity, "capacity", s.capacity)?;
            check_positive(entity, "sale rate", s.sale_rate)?;
            check_refill(entity, s.refill_pct)?;
        }
        Ok(Network {
            plants:     self.plants,
            warehouses: self.warehouses,
            stores:     self.stores,
        })
    }
}

fn check_positive(entity: Stop, what: &'static str, value: f64) -> NetworkResult<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(NetworkError::InvalidParameter { entity, what, value });
    }
    Ok(())
}

fn check_refill(entity: Stop, value: f64) -> NetworkResult<()> {
    if value.is_nan() || value <= 0.0 || value > 100.0 {
        return Err(NetworkError::InvalidParameter { entity, what: "refill percentage", value });
    }
    Ok(())
}
