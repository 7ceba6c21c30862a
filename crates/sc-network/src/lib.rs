//! `sc-network` — the entity registry of the supply chain.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`entity`]    | `Plant`, `Warehouse`, `Store`, `Stop`                      |
//! | [`truck`]     | `Truck` — load, route, on-hold counter                     |
//! | [`registry`]  | `Network` (the fixed sets of plants, warehouses, stores)   |
//! | [`builder`]   | `NetworkBuilder` (fluent construction + validation)        |
//! | [`loader`]    | `load_stores_csv`, `load_stores_reader`                    |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                         |
//!
//! The topology is fixed once built: no entity is ever added or removed
//! during a run.  Only stock levels, sales history, and truck state change.

pub mod builder;
pub mod entity;
pub mod error;
pub mod loader;
pub mod registry;
pub mod truck;


pub use builder::NetworkBuilder;
pub use entity::{Plant, Stop, Store, Warehouse};
pub use error::{NetworkError, NetworkResult};
pub use loader::{StoreRecord, load_stores_csv, load_stores_reader};
pub use registry::Network;
pub use truck::Truck;
