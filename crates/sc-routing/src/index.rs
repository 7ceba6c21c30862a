//! The route index: every feasible store subset, solved once.
//!
//! # Precomputation
//!
//! For each subset size `c` in `1..=max_stops`, every `c`-subset of stores is
//! enumerated (lexicographic by `StoreId`), and every ordering of that subset
//! is tried as `[warehouse] + ordering + [warehouse]` for every warehouse.
//! Only the shortest ordering per `(warehouse, subset)` is kept; on ties the
//! first ordering in lexicographic permutation order wins.
//!
//! A subset of size `c` has `c!` orderings, so the build is only tractable
//! for a handful of stops.  The total work is
//! `W × Σ_c C(S, c) × c!`; with 20 stores, 2 warehouses, and 3 stops that is
//! roughly 14 000 candidate routes.
//!
//! # Lookup
//!
//! Entries are keyed by `(warehouse, sorted store ids)`, so a lookup is one
//! hash probe instead of a scan over every precomputed route.

use std::time::Instant;

use tracing::{debug, info};

use sc_core::{StoreId, WarehouseId};
use sc_network::{Network, Stop};

use crate::combinatorics::{Combinations, next_permutation};
use crate::{DistanceOracle, Route, RoutingError, RoutingResult};

#[cfg(feature = "fx-hash")]
type RouteMap = rustc_hash::FxHashMap<RouteKey, Route>;
#[cfg(not(feature = "fx-hash"))]
type RouteMap = std::collections::HashMap<RouteKey, Route>;

/// Canonical node-set key: origin warehouse plus ascending store ids.
pub type RouteKey = (WarehouseId, Vec<StoreId>);

// ── DistanceMatrix ────────────────────────────────────────────────────────────

/// Oracle distances between every warehouse and store, queried once up front.
///
/// Node `i < W` is warehouse `i`; node `W + j` is store `j`.
struct DistanceMatrix {
    size: usize,
    warehouses: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    fn new<O: DistanceOracle + ?Sized>(network: &Network, oracle: &O) -> Self {
        let points: Vec<_> = network
            .warehouses
            .iter()
            .map(|w| w.location)
            .chain(network.stores.iter().map(|s| s.location))
            .collect();
        let size = points.len();
        let mut data = Vec::with_capacity(size * size);
        for &a in &points {
            for &b in &points {
                data.push(oracle.distance(a, b));
            }
        }
        Self { size, warehouses: network.warehouses.len(), data }
    }

    #[inline]
    fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    #[inline]
    fn store_node(&self, store: usize) -> usize {
        self.warehouses + store
    }
}

// ── RouteIndex ────────────────────────────────────────────────────────────────

/// Precomputed minimum-distance round trip for every `(warehouse, subset)`.
///
/// Built once per simulation instance and read-only afterwards.
pub struct RouteIndex {
    routes:     RouteMap,
    max_stops:  usize,
    warehouses: Vec<WarehouseId>,
}

impl RouteIndex {
    /// Solve every subset of up to `max_stops` stores for every warehouse.
    ///
    /// With the `parallel` feature the subsets are solved on Rayon's thread
    /// pool; results are collected in enumeration order, so the index is
    /// identical either way.
    pub fn build<O: DistanceOracle + ?Sized>(network: &Network, max_stops: usize, oracle: &O) -> Self {
        let started = Instant::now();
        let matrix = DistanceMatrix::new(network, oracle);
        let n = network.stores.len();

        let subsets: Vec<Vec<usize>> = (1..=max_stops.min(n))
            .flat_map(|c| Combinations::new(n, c))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let solved: Vec<Vec<(RouteKey, Route)>> = subsets
            .iter()
            .map(|subset| solve_subset(network, &matrix, subset))
            .collect();

        #[cfg(feature = "parallel")]
        let solved: Vec<Vec<(RouteKey, Route)>> = {
            use rayon::prelude::*;
            subsets
                .par_iter()
                .map(|subset| solve_subset(network, &matrix, subset))
                .collect()
        };

        let mut routes = RouteMap::default();
        routes.reserve(subsets.len() * network.warehouses.len());
        for (key, route) in solved.into_iter().flatten() {
            routes.insert(key, route);
        }

        info!(
            entries   = routes.len(),
            subsets   = subsets.len(),
            max_stops,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "route index built"
        );

        Self {
            routes,
            max_stops,
            warehouses: network.warehouse_ids().collect(),
        }
    }

    /// Number of `(warehouse, subset)` entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Largest subset size that was precomputed.
    #[inline]
    pub fn max_stops(&self) -> usize {
        self.max_stops
    }

    /// The stored route for `warehouse` serving exactly `stores` (any order).
    pub fn get(&self, warehouse: WarehouseId, stores: &[StoreId]) -> Option<&Route> {
        let mut sorted = stores.to_vec();
        sorted.sort_unstable();
        self.routes.get(&(warehouse, sorted))
    }

    /// All entries that start at `warehouse`, in no particular order.
    pub fn entries_for(&self, warehouse: WarehouseId) -> impl Iterator<Item = (&[StoreId], &Route)> {
        self.routes
            .iter()
            .filter(move |((w, _), _)| *w == warehouse)
            .map(|((_, stores), route)| (stores.as_slice(), route))
    }

    /// All entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&RouteKey, &Route)> {
        self.routes.iter()
    }

    /// The globally shortest precomputed route through `k` of `candidates`,
    /// where `k = min(truck_max_stops, candidates.len())`.
    ///
    /// Every `k`-combination of the candidates (in candidate order) is paired
    /// with every warehouse and looked up; the minimum distance wins, with
    /// ties going to the first combination encountered.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::EmptyCandidates`] — nothing to route; callers are
    ///   expected to check first.
    /// - [`RoutingError::StopLimitExceeded`] — `k` exceeds the precomputed
    ///   subset size.
    /// - [`RoutingError::NoRoute`] — a combination is missing from the index
    ///   (a store id the index was not built with).
    pub fn shortest_route(&self, candidates: &[StoreId], truck_max_stops: usize) -> RoutingResult<&Route> {
        if candidates.is_empty() {
            return Err(RoutingError::EmptyCandidates);
        }
        if truck_max_stops == 0 {
            return Err(RoutingError::NoStopsAllowed);
        }

        let mut unique: Vec<StoreId> = Vec::with_capacity(candidates.len());
        for &id in candidates {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        let k = truck_max_stops.min(unique.len());
        if k > self.max_stops {
            return Err(RoutingError::StopLimitExceeded { requested: k, indexed: self.max_stops });
        }

        let mut best: Option<&Route> = None;
        for combo in Combinations::new(unique.len(), k) {
            let mut stores: Vec<StoreId> = combo.iter().map(|&i| unique[i]).collect();
            stores.sort_unstable();
            for &warehouse in &self.warehouses {
                let key = (warehouse, stores.clone());
                let Some(route) = self.routes.get(&key) else {
                    return Err(RoutingError::NoRoute { warehouse, stores });
                };
                if best.is_none_or(|b| route.distance < b.distance) {
                    best = Some(route);
                }
            }
        }

        let route = best.ok_or(RoutingError::NoWarehouse)?;
        debug!(distance = route.distance, stops = route.stop_count(), "shortest route selected");
        Ok(route)
    }
}

/// Best ordering of one store subset for every warehouse.
fn solve_subset(network: &Network, matrix: &DistanceMatrix, subset: &[usize]) -> Vec<(RouteKey, Route)> {
    let warehouse_count = network.warehouses.len();
    let mut best: Vec<Option<(f64, Vec<usize>)>> = vec![None; warehouse_count];

    let mut order = subset.to_vec();
    loop {
        // Store-to-store legs are shared by every warehouse.
        let chain: f64 = order
            .windows(2)
            .map(|p| matrix.get(matrix.store_node(p[0]), matrix.store_node(p[1])))
            .sum();
        let first = matrix.store_node(order[0]);
        let last = matrix.store_node(order[order.len() - 1]);

        for (w, slot) in best.iter_mut().enumerate() {
            let total = matrix.get(w, first) + chain + matrix.get(last, w);
            if slot.as_ref().is_none_or(|(d, _)| total < *d) {
                *slot = Some((total, order.clone()));
            }
        }

        if !next_permutation(&mut order) {
            break;
        }
    }

    let mut key_stores: Vec<StoreId> = subset.iter().map(|&i| network.stores[i].id).collect();
    key_stores.sort_unstable();

    best.into_iter()
        .zip(network.warehouses.iter())
        .filter_map(|(slot, warehouse)| {
            let (distance, order) = slot?;
            let mut stops = Vec::with_capacity(order.len() + 2);
            stops.push(Stop::Warehouse(warehouse.id));
            stops.extend(order.iter().map(|&i| Stop::Store(network.stores[i].id)));
            stops.push(Stop::Warehouse(warehouse.id));
            Some(((warehouse.id, key_stores.clone()), Route { stops, distance }))
        })
        .collect()
}
