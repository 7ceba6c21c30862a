//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use sc_core::{DemandRng, Day, SimConfig, TruckId};
use sc_network::{Network, Truck};
use sc_routing::{DistanceOracle, RouteIndex};

use crate::{DemandModel, Sim, SimError, SimResult, WarningLists};

/// Fluent builder for [`Sim<D, O>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — fleet, costs, thresholds, horizon, seed
/// - [`Network`] — from [`sc_network::NetworkBuilder`]
/// - `D: DemandModel` — e.g. [`ExponentialDemand`][crate::ExponentialDemand]
/// - `O: DistanceOracle` — e.g. [`sc_routing::ManhattanOracle`]
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                                  |
/// |---------------------------|------------------------------------------|
/// | `.route_index(i)`         | Built from the network at `max_stops`    |
/// | `.snapshot_interval(n)`   | `1` (every day); `0` disables snapshots  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, network, ExponentialDemand, ManhattanOracle)
///     .snapshot_interval(7)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<D: DemandModel, O: DistanceOracle> {
    config:            SimConfig,
    network:           Network,
    demand:            D,
    oracle:            O,
    index:             Option<RouteIndex>,
    snapshot_interval: u32,
}

impl<D: DemandModel, O: DistanceOracle> SimBuilder<D, O> {
    pub fn new(config: SimConfig, network: Network, demand: D, oracle: O) -> Self {
        Self {
            config,
            network,
            demand,
            oracle,
            index: None,
            snapshot_interval: 1,
        }
    }

    /// Reuse a prebuilt route index.
    ///
    /// It must have been built from the same network with at least
    /// `config.max_stops` stops per route.
    pub fn route_index(mut self, index: RouteIndex) -> Self {
        self.index = Some(index);
        self
    }

    pub fn snapshot_interval(mut self, days: u32) -> Self {
        self.snapshot_interval = days;
        self
    }

    /// Validate inputs, derive thresholds, build the fleet and route index,
    /// and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<D, O>> {
        let config = self.config;
        config.validate()?;

        if self.network.warehouses.is_empty() {
            return Err(SimError::Config("network has no warehouses".into()));
        }

        let mut network = self.network;
        network.apply_min_percent(config.min_percent);
        network.check_stock_bounds()?;

        let index = match self.index {
            Some(index) if index.max_stops() < config.max_stops => {
                return Err(SimError::Config(format!(
                    "route index covers {} stops per route, config needs {}",
                    index.max_stops(),
                    config.max_stops
                )));
            }
            Some(index) => index,
            None => RouteIndex::build(&network, config.max_stops, &self.oracle),
        };

        let fleet: Vec<Truck> = (0..config.n_trucks)
            .map(|i| {
                Truck::new(
                    TruckId(i),
                    config.truck_capacity,
                    config.max_stops,
                    config.truck_base_cost,
                    config.truck_cost_per_mile,
                )
            })
            .collect();

        // Stores may start at or below their threshold.
        let mut warnings = WarningLists::new();
        for store in &network.stores {
            warnings.inventory_check(store);
        }

        info!(
            plants = network.plants.len(),
            warehouses = network.warehouses.len(),
            stores = network.stores.len(),
            trucks = fleet.len(),
            routes = index.len(),
            "simulation built"
        );

        Ok(Sim {
            rng: DemandRng::new(config.seed, config.demand_sampling),
            day: Day::ZERO,
            history: Vec::with_capacity(config.days as usize),
            snapshot_interval: self.snapshot_interval,
            config,
            network,
            fleet,
            warnings,
            index,
            demand: self.demand,
            oracle: self.oracle,
        })
    }
}
