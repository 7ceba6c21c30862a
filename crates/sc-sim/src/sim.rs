//! The `Sim` struct and its daily loop.

use tracing::{debug, info};

use sc_core::{Day, DemandRng, SimConfig};
use sc_network::{Network, Truck};
use sc_routing::{DistanceOracle, RouteIndex};

use crate::restock::Dispatcher;
use crate::{DayMetrics, DemandModel, RunSummary, SimError, SimObserver, SimResult, WarningLists, sales};

/// The main simulation runner.
///
/// `Sim<D, O>` owns the network, fleet, warning lists, route index and
/// demand stream, and drives the four-phase day (see the crate docs).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: DemandModel, O: DistanceOracle> {
    pub config:  SimConfig,

    /// Next day to simulate.
    pub day:     Day,

    pub network: Network,

    /// Trucks, indexed by `TruckId`.
    pub fleet:   Vec<Truck>,

    pub warnings: WarningLists,

    /// Precomputed routes, read-only after build.
    pub index:   RouteIndex,

    pub rng:     DemandRng,
    pub demand:  D,
    pub oracle:  O,

    /// One entry per completed day.
    pub history: Vec<DayMetrics>,

    /// Days between `on_snapshot` calls; `0` disables them.
    pub snapshot_interval: u32,
}

impl<D: DemandModel, O: DistanceOracle> Sim<D, O> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current day to `config.end_day()` and return the summary.
    pub fn run<Obs: SimObserver>(&mut self, observer: &mut Obs) -> SimResult<RunSummary> {
        info!(
            from = %self.day,
            to = %self.config.end_day(),
            trucks = self.fleet.len(),
            stores = self.network.stores.len(),
            "simulation started"
        );

        while self.day < self.config.end_day() {
            self.step(observer)?;
        }

        let summary = self.summary();
        info!(
            days = summary.days,
            revenue = summary.cum_revenue,
            delivery_cost = summary.cum_delivery_cost,
            opportunity_cost = summary.cum_opportunity_cost,
            profit = summary.cum_profit,
            "simulation finished"
        );
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Run exactly `n` days from the current position (ignores `end_day`).
    pub fn run_days<Obs: SimObserver>(&mut self, n: u32, observer: &mut Obs) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Summary over every day simulated so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_history(&self.history)
    }

    // ── Core day processing ───────────────────────────────────────────────

    fn step<Obs: SimObserver>(&mut self, observer: &mut Obs) -> SimResult<()> {
        let day = self.day;
        observer.on_day_start(day);

        let metrics = self.process_day(day)?;
        observer.on_day_end(&metrics);
        if self.snapshot_interval > 0 && day.0 % self.snapshot_interval == 0 {
            observer.on_snapshot(day, &self.network);
        }

        self.history.push(metrics);
        self.day = day.next();
        Ok(())
    }

    fn process_day(&mut self, day: Day) -> SimResult<DayMetrics> {
        // ── Phase 1: logistics ────────────────────────────────────────────
        let dispatcher = Dispatcher {
            index:    &self.index,
            oracle:   &self.oracle,
            interval: self.config.delivery_interval,
        };
        let logistics =
            dispatcher.run_day(day, &mut self.network, &mut self.fleet, &mut self.warnings)?;

        // ── Phase 2: sales ────────────────────────────────────────────────
        let sold = sales::run_sales(
            day,
            &mut self.network,
            &mut self.warnings,
            &self.demand,
            &mut self.rng,
            self.config.price_per_unit,
        )?;

        // ── Phase 3: routes finish same day ───────────────────────────────
        for truck in &mut self.fleet {
            truck.clear_route();
        }

        self.network
            .check_stock_bounds()
            .map_err(|source| SimError::Invariant { day, source })?;
        debug_assert!(
            self.warnings.low().iter().all(|id| !self.warnings.contains_zero(*id)),
            "store on both warning lists"
        );

        // ── Phase 4: record ───────────────────────────────────────────────
        // The whole fleet is hired every day, dispatched or not.
        let hire: f64 = self.fleet.iter().map(|t| t.base_cost).sum();
        let delivery_cost = hire + logistics.mileage_cost;
        let metrics = DayMetrics {
            day,
            demand:               sold.demand,
            sales:                sold.sales,
            revenue:              sold.revenue,
            opportunity_cost:     sold.opportunity_cost,
            warehouse_deliveries: logistics.warehouse_deliveries,
            store_deliveries:     logistics.store_deliveries,
            mileage:              logistics.mileage,
            delivery_cost,
            profit:               sold.revenue - delivery_cost,
        };
        debug!(
            %day,
            sales = metrics.sales,
            deliveries = metrics.deliveries(),
            profit = metrics.profit,
            low = self.warnings.low().len(),
            zero = self.warnings.zero().len(),
            "day complete"
        );
        Ok(metrics)
    }
}
