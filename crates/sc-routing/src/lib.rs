//! `sc-routing` — distance oracle and the route optimizer.
//!
//! # Crate layout
//!
//! | Module            | Contents                                               |
//! |-------------------|--------------------------------------------------------|
//! | [`oracle`]        | `DistanceOracle` trait, `ManhattanOracle`              |
//! | [`route`]         | `Route` — ordered stops plus total distance            |
//! | [`index`]         | `RouteIndex` — every feasible store subset, solved once |
//! | [`combinatorics`] | lexicographic combinations and permutations            |
//! | [`error`]         | `RoutingError`, `RoutingResult<T>`                     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Builds the route index on Rayon's thread pool.            |
//! | `fx-hash`  | FxHash instead of SipHash for the index lookup table.     |

pub mod combinatorics;
pub mod error;
pub mod index;
pub mod oracle;
pub mod route;


pub use error::{RoutingError, RoutingResult};
pub use index::{RouteIndex, RouteKey};
pub use oracle::{DistanceOracle, ManhattanOracle};
pub use route::Route;
