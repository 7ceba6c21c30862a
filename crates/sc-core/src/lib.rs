//! `sc-core` — foundational types for the `rust_sc` supply-chain simulator.
//!
//! This crate is a dependency of every other `sc-*` crate.  It has no `sc-*`
//! dependencies and few external ones (`rand`, `rand_distr`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PlantId`, `WarehouseId`, `StoreId`, `TruckId`        |
//! | [`geo`]         | `Point`, Manhattan distance                           |
//! | [`time`]        | `Day`, `SimConfig`, `MAX_ROUTE_STOPS`                 |
//! | [`rng`]         | `DemandRng`, `DemandSampling`                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::{PlantId, StoreId, TruckId, WarehouseId};
pub use rng::{DemandRng, DemandSampling};
pub use time::{Day, MAX_ROUTE_STOPS, SimConfig};
