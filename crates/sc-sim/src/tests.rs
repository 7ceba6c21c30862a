//! Unit and integration tests for sc-sim.

#[cfg(test)]
mod helpers {
    use sc_core::{Point, SimConfig};
    use sc_network::{Network, NetworkBuilder};

    /// P(-5,0) → W(0,0) → stores at (1,0), (2,0), (0,3); capacity 100,
    /// refill 100 %, thresholds at 80 %.
    pub fn line_network() -> Network {
        let mut b = NetworkBuilder::new();
        let p = b.add_plant("P1", Point::new(-5.0, 0.0), 10_000.0, 100.0);
        b.add_warehouse("W1", Point::new(0.0, 0.0), 650.0, 100.0, p);
        b.add_store("S1", Point::new(1.0, 0.0), 100.0, 100.0, 0.5);
        b.add_store("S2", Point::new(2.0, 0.0), 100.0, 100.0, 0.5);
        b.add_store("S3", Point::new(0.0, 3.0), 100.0, 100.0, 0.5);
        let mut net = b.build().unwrap();
        net.apply_min_percent(0.8);
        net
    }

    /// Same layout with a single store.
    pub fn one_store_network() -> Network {
        let mut b = NetworkBuilder::new();
        let p = b.add_plant("P1", Point::new(-5.0, 0.0), 10_000.0, 100.0);
        b.add_warehouse("W1", Point::new(0.0, 0.0), 650.0, 100.0, p);
        b.add_store("S1", Point::new(1.0, 0.0), 100.0, 100.0, 0.5);
        b.build().unwrap()
    }

    /// Two plants, two warehouses and twelve stores spread over a 10×8 grid.
    pub fn grid_network() -> Network {
        let mut b = NetworkBuilder::new();
        let p1 = b.add_plant("P1", Point::new(1.0, 4.0), 10_000.0, 100.0);
        let p2 = b.add_plant("P2", Point::new(6.0, 1.0), 10_000.0, 100.0);
        b.add_warehouse("W1", Point::new(4.0, 3.0), 650.0, 100.0, p1);
        b.add_warehouse("W2", Point::new(9.0, 2.0), 650.0, 100.0, p2);
        for i in 0..12u32 {
            let x = f64::from(i % 4) * 3.0;
            let y = f64::from(i / 4) * 3.0 + 1.0;
            let rate = 0.1 + f64::from(i % 5) * 0.1;
            b.add_store(format!("S{}", i + 1), Point::new(x, y), 100.0, 100.0, rate);
        }
        b.build().unwrap()
    }

    pub fn config(n_trucks: u32, days: u32) -> SimConfig {
        SimConfig { n_trucks, days, seed: 7, ..SimConfig::baseline() }
    }
}

// ── Warning lists ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod warnings {
    use sc_core::StoreId;

    use super::helpers::line_network;
    use crate::WarningLists;

    #[test]
    fn lists_stay_disjoint_and_ordered() {
        let mut w = WarningLists::new();
        w.flag_low(StoreId(2));
        w.flag_low(StoreId(0));
        w.flag_zero(StoreId(1));
        w.flag_low(StoreId(2));
        assert_eq!(w.low(), &[StoreId(2), StoreId(0)]);
        assert_eq!(w.zero(), &[StoreId(1)]);

        w.flag_zero(StoreId(2));
        assert_eq!(w.low(), &[StoreId(0)]);
        assert_eq!(w.zero(), &[StoreId(1), StoreId(2)]);
        assert_eq!(w.candidates(), vec![StoreId(0), StoreId(1), StoreId(2)]);
        assert_eq!(w.len(), 3);

        w.clear(StoreId(1));
        assert!(!w.contains_zero(StoreId(1)));
        assert!(!w.contains_low(StoreId(1)));
    }

    #[test]
    fn inventory_check_flags_by_level() {
        let mut net = line_network();
        let mut w = WarningLists::new();

        net.stores[0].curr_stock = 0.0;
        net.stores[1].curr_stock = 80.0;
        net.stores[2].curr_stock = 80.5;
        for s in &net.stores {
            w.inventory_check(s);
        }
        assert_eq!(w.zero(), &[StoreId(0)]);
        assert_eq!(w.low(), &[StoreId(1)]);
    }

    #[test]
    fn inventory_check_never_unflags() {
        let mut net = line_network();
        let mut w = WarningLists::new();
        w.flag_low(StoreId(0));
        net.stores[0].curr_stock = 95.0;
        w.inventory_check(&net.stores[0]);
        assert!(w.contains_low(StoreId(0)));
    }

    #[test]
    fn delivery_check_transitions() {
        let mut net = line_network();
        let mut w = WarningLists::new();
        w.flag_zero(StoreId(0));
        w.flag_zero(StoreId(1));
        w.flag_low(StoreId(2));

        // Still empty: untouched.
        net.stores[0].curr_stock = 0.0;
        w.delivery_check(&net.stores[0]);
        assert!(w.contains_zero(StoreId(0)));
        assert!(!w.contains_low(StoreId(0)));

        // Partially refilled: zero → low.
        net.stores[1].curr_stock = 40.0;
        w.delivery_check(&net.stores[1]);
        assert!(w.contains_low(StoreId(1)));
        assert!(!w.contains_zero(StoreId(1)));

        // Back at the threshold: off both lists.
        net.stores[2].curr_stock = 80.0;
        w.delivery_check(&net.stores[2]);
        assert!(!w.contains_low(StoreId(2)));
        assert!(!w.contains_zero(StoreId(2)));
    }
}

// ── Demand and sales ──────────────────────────────────────────────────────────

#[cfg(test)]
mod sales {
    use sc_core::{Day, DemandRng, DemandSampling, StoreId};

    use super::helpers::line_network;
    use crate::sales::{balance, run_sales};
    use crate::{DemandModel, ExponentialDemand, FixedDemand, ScheduledDemand, WarningLists};

    #[test]
    fn balance_sells_what_stock_allows() {
        let mut net = line_network();
        let store = &mut net.stores[0];
        store.curr_stock = 30.0;

        let out = balance(store, 50.0).unwrap();
        assert_eq!(out.fulfilled, 30.0);
        assert_eq!(out.missed, 20.0);
        assert_eq!(store.curr_stock, 0.0);
        assert_eq!(store.fulfilled, vec![30.0]);
        assert_eq!(store.missed, vec![20.0]);
    }

    #[test]
    fn balance_with_ample_stock_misses_nothing() {
        let mut net = line_network();
        let store = &mut net.stores[0];
        let out = balance(store, 12.5).unwrap();
        assert_eq!(out.missed, 0.0);
        assert_eq!(store.curr_stock, 87.5);
    }

    #[test]
    fn negative_or_nan_demand_sells_nothing() {
        let mut net = line_network();
        let store = &mut net.stores[0];
        assert_eq!(balance(store, -3.0).unwrap().fulfilled, 0.0);
        assert_eq!(balance(store, f64::NAN).unwrap().fulfilled, 0.0);
        assert_eq!(store.curr_stock, 100.0);
    }

    #[test]
    fn exponential_demand_is_half_unit_grained() {
        let net = line_network();
        let mut rng = DemandRng::new(3, DemandSampling::Stream);
        for day in 0..200 {
            let d = ExponentialDemand.demand(&net.stores[0], Day(day), &mut rng).unwrap();
            assert!(d >= 0.0);
            assert_eq!((d * 2.0).fract(), 0.0, "demand {d} not a multiple of 0.5");
        }
    }

    #[test]
    fn reseed_each_draw_repeats_for_equal_rates() {
        let net = line_network();
        let mut rng = DemandRng::new(11, DemandSampling::ReseedEachDraw);
        let a = ExponentialDemand.demand(&net.stores[0], Day(0), &mut rng).unwrap();
        let b = ExponentialDemand.demand(&net.stores[1], Day(0), &mut rng).unwrap();
        let c = ExponentialDemand.demand(&net.stores[0], Day(5), &mut rng).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn scheduled_demand_runs_out_to_zero() {
        let net = line_network();
        let mut rng = DemandRng::new(0, DemandSampling::Stream);
        let model = ScheduledDemand(vec![4.0, 2.0]);
        assert_eq!(model.demand(&net.stores[0], Day(1), &mut rng).unwrap(), 2.0);
        assert_eq!(model.demand(&net.stores[0], Day(2), &mut rng).unwrap(), 0.0);
    }

    #[test]
    fn run_sales_tallies_and_flags() {
        let mut net = line_network();
        net.stores[1].curr_stock = 5.0;
        let mut warnings = WarningLists::new();
        let mut rng = DemandRng::new(0, DemandSampling::Stream);

        let tally = run_sales(Day(0), &mut net, &mut warnings, &FixedDemand(10.0), &mut rng, 100.0)
            .unwrap();

        assert_eq!(tally.demand, 30.0);
        assert_eq!(tally.sales, 25.0);
        assert_eq!(tally.revenue, 2_500.0);
        assert_eq!(tally.opportunity_cost, 500.0);
        assert_eq!(warnings.zero(), &[StoreId(1)]);
        assert!(warnings.low().is_empty());
    }
}

// ── Delivery executor ─────────────────────────────────────────────────────────

#[cfg(test)]
mod delivery {
    use sc_core::{StoreId, TruckId, WarehouseId};
    use sc_network::{Stop, Truck};

    use super::helpers::line_network;
    use crate::WarningLists;
    use crate::delivery::{deliver_to_stores, deliver_to_warehouse};

    fn truck(capacity: f64) -> Truck {
        Truck::new(TruckId(0), capacity, 3, 100.0, 10.0)
    }

    fn store_route(stores: &[u32]) -> Vec<Stop> {
        let w = Stop::Warehouse(WarehouseId(0));
        let mut stops = vec![w];
        stops.extend(stores.iter().map(|&s| Stop::Store(StoreId(s))));
        stops.push(w);
        stops
    }

    #[test]
    fn warehouse_delivery_conserves_units() {
        let mut net = line_network();
        net.warehouses[0].curr_stock = 100.0;
        let mut t = truck(50.0);
        t.load_up(50.0).unwrap();

        let units = deliver_to_warehouse(&mut net, &mut t, WarehouseId(0)).unwrap();
        assert_eq!(units, 50.0);
        assert_eq!(net.warehouses[0].curr_stock, 150.0);
        assert_eq!(t.load, 0.0);
    }

    #[test]
    fn store_delivery_moves_units_from_warehouse_to_stores() {
        let mut net = line_network();
        net.stores[0].curr_stock = 10.0;
        net.stores[1].curr_stock = 50.0;
        let mut w = WarningLists::new();
        w.flag_low(StoreId(0));
        w.flag_low(StoreId(1));

        let mut t = truck(50.0);
        t.dispatch(store_route(&[0, 1]));
        t.load_up(50.0).unwrap();

        let before = net.warehouse_stock() + net.store_stock();
        let units = deliver_to_stores(&mut net, &mut t, WarehouseId(0), &mut w).unwrap();

        assert_eq!(units, 50.0);
        assert_eq!(net.warehouses[0].curr_stock, 600.0);
        assert_eq!(net.stores[0].curr_stock, 60.0);
        assert_eq!(net.stores[1].curr_stock, 50.0);
        assert_eq!(net.warehouse_stock() + net.store_stock(), before);
        assert!(w.contains_low(StoreId(0)));
        assert!(w.contains_low(StoreId(1)));
        assert_eq!(t.load, 0.0);
    }

    #[test]
    fn partial_load_splits_in_route_order() {
        let mut net = line_network();
        net.stores[0].curr_stock = 70.0;
        net.stores[1].curr_stock = 0.0;
        let mut w = WarningLists::new();
        w.flag_low(StoreId(0));
        w.flag_zero(StoreId(1));

        let mut t = truck(50.0);
        t.dispatch(store_route(&[0, 1]));
        t.load_up(50.0).unwrap();
        deliver_to_stores(&mut net, &mut t, WarehouseId(0), &mut w).unwrap();

        assert_eq!(net.stores[0].curr_stock, 100.0);
        assert_eq!(net.stores[1].curr_stock, 20.0);
        assert!(!w.contains_low(StoreId(0)));
        assert!(w.contains_low(StoreId(1)));
        assert!(!w.contains_zero(StoreId(1)));
    }

    #[test]
    fn empty_store_missed_by_exhausted_truck_stays_zero() {
        let mut net = line_network();
        net.stores[0].curr_stock = 0.0;
        net.stores[1].curr_stock = 0.0;
        let mut w = WarningLists::new();
        w.flag_zero(StoreId(0));
        w.flag_zero(StoreId(1));

        let mut t = truck(50.0);
        t.dispatch(store_route(&[0, 1]));
        t.load_up(50.0).unwrap();
        deliver_to_stores(&mut net, &mut t, WarehouseId(0), &mut w).unwrap();

        assert_eq!(net.stores[1].curr_stock, 0.0);
        assert!(w.contains_zero(StoreId(1)));
        assert!(!w.contains_low(StoreId(1)));
        assert!(w.contains_low(StoreId(0)));
    }

    #[test]
    fn full_refill_clears_zero_flag() {
        let mut net = line_network();
        net.stores[2].curr_stock = 0.0;
        let mut w = WarningLists::new();
        w.flag_zero(StoreId(2));

        let mut t = truck(100.0);
        t.dispatch(store_route(&[2]));
        t.load_up(100.0).unwrap();
        deliver_to_stores(&mut net, &mut t, WarehouseId(0), &mut w).unwrap();

        assert_eq!(net.stores[2].curr_stock, 100.0);
        assert!(w.is_empty());
    }

    #[test]
    fn leftover_load_returns_to_origin() {
        let mut net = line_network();
        net.stores[0].curr_stock = 90.0;
        let mut w = WarningLists::new();

        let mut t = truck(50.0);
        t.dispatch(store_route(&[0]));
        t.load_up(30.0).unwrap();
        let units = deliver_to_stores(&mut net, &mut t, WarehouseId(0), &mut w).unwrap();

        assert_eq!(units, 10.0);
        assert_eq!(net.warehouses[0].curr_stock, 640.0);
        assert_eq!(t.load, 0.0);
    }
}

// ── Restocking scheduler ──────────────────────────────────────────────────────

#[cfg(test)]
mod restock {
    use sc_core::{Day, StoreId, TruckId};
    use sc_network::{Network, Stop, Truck};
    use sc_routing::{ManhattanOracle, RouteIndex};

    use super::helpers::line_network;
    use crate::{Dispatcher, SimError, WarningLists};

    fn fleet(n: u32) -> Vec<Truck> {
        (0..n).map(|i| Truck::new(TruckId(i), 50.0, 3, 100.0, 10.0)).collect()
    }

    fn run(
        net:      &mut Network,
        fleet:    &mut [Truck],
        warnings: &mut WarningLists,
        interval: u32,
    ) -> Result<crate::LogisticsTally, SimError> {
        let index = RouteIndex::build(net, 3, &ManhattanOracle);
        let d = Dispatcher { index: &index, oracle: &ManhattanOracle, interval };
        d.run_day(Day(0), net, fleet, warnings)
    }

    #[test]
    fn quiet_day_only_advances_holds() {
        let mut net = line_network();
        let mut trucks = fleet(2);
        let mut w = WarningLists::new();

        let tally = run(&mut net, &mut trucks, &mut w, 1).unwrap();
        assert_eq!(tally.deliveries(), 0);
        assert!(trucks.iter().all(|t| t.on_hold == 2));
    }

    #[test]
    fn warehouse_restock_runs_round_trip_to_parent() {
        let mut net = line_network();
        net.warehouses[0].curr_stock = 500.0;
        let mut trucks = fleet(1);
        let mut w = WarningLists::new();

        let tally = run(&mut net, &mut trucks, &mut w, 1).unwrap();
        assert_eq!(tally.warehouse_deliveries, 1);
        assert_eq!(tally.warehouse_units, 50.0);
        assert_eq!(tally.mileage, 10.0);
        assert_eq!(tally.mileage_cost, 100.0);
        assert_eq!(net.warehouses[0].curr_stock, 550.0);
        assert_eq!(trucks[0].route.len(), 3);
        assert_eq!(trucks[0].route[1], Stop::Plant(sc_core::PlantId(0)));
        assert_eq!(trucks[0].on_hold, 1);
    }

    #[test]
    fn warehouse_load_capped_by_refill_need() {
        let mut net = line_network();
        net.warehouses[0].refill_pct = 80.0;
        net.warehouses[0].curr_stock = 500.0;
        let mut trucks = fleet(2);
        let mut w = WarningLists::new();

        let tally = run(&mut net, &mut trucks, &mut w, 1).unwrap();
        assert_eq!(tally.warehouse_units, 20.0);
        assert_eq!(tally.warehouse_deliveries, 1);
        assert_eq!(net.warehouses[0].curr_stock, 520.0);
    }

    #[test]
    fn truck_below_interval_stays_home() {
        let mut net = line_network();
        net.warehouses[0].curr_stock = 0.0;
        let mut trucks = fleet(1);
        let mut w = WarningLists::new();

        for expected_hold in [2, 3] {
            let tally = run(&mut net, &mut trucks, &mut w, 3).unwrap();
            assert_eq!(tally.deliveries(), 0);
            assert_eq!(trucks[0].on_hold, expected_hold);
        }
        let tally = run(&mut net, &mut trucks, &mut w, 3).unwrap();
        assert_eq!(tally.warehouse_deliveries, 1);
        assert_eq!(trucks[0].on_hold, 1);
    }

    #[test]
    fn dispatched_truck_is_not_reused_the_same_day() {
        let mut net = line_network();
        net.warehouses[0].curr_stock = 0.0;
        let mut trucks = fleet(3);
        let mut w = WarningLists::new();

        let tally = run(&mut net, &mut trucks, &mut w, 1).unwrap();
        assert_eq!(tally.warehouse_deliveries, 3);
        assert_eq!(net.warehouses[0].curr_stock, 150.0);
        assert!(trucks.iter().all(|t| t.on_hold == 1));
    }

    #[test]
    fn warehouse_pass_runs_before_store_pass() {
        let mut net = line_network();
        net.warehouses[0].curr_stock = 500.0;
        net.stores[0].curr_stock = 10.0;
        let mut trucks = fleet(2);
        let mut w = WarningLists::new();
        w.flag_low(StoreId(0));

        let tally = run(&mut net, &mut trucks, &mut w, 1).unwrap();
        assert_eq!(tally.warehouse_deliveries, 1);
        assert_eq!(tally.store_deliveries, 1);
        assert_eq!(trucks[0].route.first(), Some(&Stop::Warehouse(sc_core::WarehouseId(0))));
        assert!(trucks[1].route.contains(&Stop::Store(StoreId(0))));
        // Warehouse got 50, then gave 50 to S1.
        assert_eq!(net.warehouses[0].curr_stock, 500.0);
        assert_eq!(net.stores[0].curr_stock, 60.0);
    }

    #[test]
    fn store_load_limited_by_origin_stock() {
        let mut net = line_network();
        net.warehouses[0].min_stock = 0.0;
        net.warehouses[0].curr_stock = 20.0;
        net.stores[0].curr_stock = 0.0;
        let mut trucks = fleet(1);
        let mut w = WarningLists::new();
        w.flag_zero(StoreId(0));

        let tally = run(&mut net, &mut trucks, &mut w, 1).unwrap();
        assert_eq!(tally.store_units, 20.0);
        assert_eq!(net.warehouses[0].curr_stock, 0.0);
        assert_eq!(net.stores[0].curr_stock, 20.0);
        assert!(w.contains_low(StoreId(0)));
    }

    #[test]
    fn empty_origin_defers_store_restock() {
        let mut net = line_network();
        net.warehouses[0].min_stock = -1.0;
        net.warehouses[0].curr_stock = 0.0;
        net.stores[0].curr_stock = 0.0;
        let mut trucks = fleet(1);
        let mut w = WarningLists::new();
        w.flag_zero(StoreId(0));

        let tally = run(&mut net, &mut trucks, &mut w, 1).unwrap();
        assert_eq!(tally.deliveries(), 0);
        assert_eq!(trucks[0].on_hold, 2);
        assert!(w.contains_zero(StoreId(0)));
    }

    #[test]
    fn flagged_store_without_need_does_not_block_others() {
        let mut net = line_network();
        net.stores[2].curr_stock = 10.0;
        let mut trucks = vec![Truck::new(TruckId(0), 50.0, 1, 100.0, 10.0)];
        let mut w = WarningLists::new();
        // S1 is full but flagged, and is the closest store.
        w.flag_low(StoreId(0));
        w.flag_low(StoreId(2));

        let tally = run(&mut net, &mut trucks, &mut w, 1).unwrap();
        assert_eq!(tally.store_deliveries, 1);
        assert_eq!(tally.mileage, 6.0);
        assert_eq!(net.stores[2].curr_stock, 60.0);
        assert_eq!(net.stores[0].curr_stock, 100.0);
        assert!(w.contains_low(StoreId(0)));
    }

    #[test]
    fn only_needless_flags_leave_trucks_home() {
        let mut net = line_network();
        let mut trucks = fleet(2);
        let mut w = WarningLists::new();
        w.flag_low(StoreId(0));
        w.flag_low(StoreId(1));

        let tally = run(&mut net, &mut trucks, &mut w, 1).unwrap();
        assert_eq!(tally.deliveries(), 0);
        assert!(trucks.iter().all(|t| t.on_hold == 2));
    }

    #[test]
    fn multi_stop_route_serves_low_stores_first() {
        let mut net = line_network();
        net.stores[0].curr_stock = 70.0;
        net.stores[1].curr_stock = 70.0;
        net.stores[2].curr_stock = 0.0;
        let mut trucks = fleet(1);
        let mut w = WarningLists::new();
        w.flag_low(StoreId(0));
        w.flag_low(StoreId(1));
        w.flag_zero(StoreId(2));

        let tally = run(&mut net, &mut trucks, &mut w, 1).unwrap();
        // All three fit in one route; Σ need = 160 so the truck goes full.
        assert_eq!(tally.store_deliveries, 1);
        assert_eq!(tally.store_units, 50.0);
        assert_eq!(trucks[0].route.len(), 5);
        assert_eq!(tally.mileage, 10.0);
    }
}

// ── Simulation driver ─────────────────────────────────────────────────────────

#[cfg(test)]
mod sim {
    use sc_core::{CoreResult, Day, DemandRng, Point, SimConfig, StoreId};
    use sc_network::{Network, NetworkBuilder, Store};
    use sc_routing::{ManhattanOracle, RouteIndex};

    use super::helpers::{config, grid_network, line_network, one_store_network};
    use crate::{
        DayMetrics, DemandModel, ExponentialDemand, FixedDemand, NoopObserver, RunSummary,
        ScheduledDemand, SimBuilder, SimError, SimObserver,
    };

    #[derive(Default)]
    struct Recorder {
        starts:    Vec<Day>,
        ends:      Vec<DayMetrics>,
        snapshots: Vec<(Day, f64)>,
        finished:  usize,
    }

    impl SimObserver for Recorder {
        fn on_day_start(&mut self, day: Day) {
            self.starts.push(day);
        }
        fn on_day_end(&mut self, metrics: &DayMetrics) {
            self.ends.push(metrics.clone());
        }
        fn on_snapshot(&mut self, day: Day, network: &Network) {
            self.snapshots.push((day, network.store_stock()));
        }
        fn on_sim_end(&mut self, _summary: &RunSummary) {
            self.finished += 1;
        }
    }

    #[test]
    fn builder_rejects_bad_config() {
        let cfg = SimConfig { max_stops: 0, ..config(4, 5) };
        let result = SimBuilder::new(cfg, line_network(), FixedDemand(0.0), ManhattanOracle).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn builder_rejects_network_without_warehouses() {
        let result =
            SimBuilder::new(config(4, 5), Network::default(), FixedDemand(0.0), ManhattanOracle).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn builder_rejects_undersized_route_index() {
        let net = line_network();
        let index = RouteIndex::build(&net, 1, &ManhattanOracle);
        let result = SimBuilder::new(config(4, 5), net, FixedDemand(0.0), ManhattanOracle)
            .route_index(index)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn builder_derives_thresholds_and_fleet() {
        let sim = SimBuilder::new(config(4, 5), one_store_network(), FixedDemand(0.0), ManhattanOracle)
            .build()
            .unwrap();
        assert_eq!(sim.fleet.len(), 4);
        assert_eq!(sim.network.stores[0].min_stock, 80.0);
        assert_eq!(sim.network.warehouses[0].min_stock, 520.0);
        assert!(sim.warnings.is_empty());
        assert_eq!(sim.index.max_stops(), 3);
    }

    #[test]
    fn zero_demand_changes_nothing_but_cost() {
        let mut sim = SimBuilder::new(config(4, 5), line_network(), FixedDemand(0.0), ManhattanOracle)
            .build()
            .unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(summary.days, 5);
        assert_eq!(summary.cum_deliveries(), 0);
        assert_eq!(summary.cum_revenue, 0.0);
        assert_eq!(summary.cum_delivery_cost, 4.0 * 100.0 * 5.0);
        assert_eq!(summary.cum_profit, -2_000.0);
        assert_eq!(summary.delivery_cost_per_unit(), None);
        assert_eq!(sim.network.store_stock(), 300.0);
        assert_eq!(sim.network.warehouse_stock(), 650.0);
        assert!(sim.warnings.is_empty());
    }

    #[test]
    fn low_store_is_flagged_then_restocked() {
        let mut sim = SimBuilder::new(
            config(4, 2),
            one_store_network(),
            ScheduledDemand(vec![90.0]),
            ManhattanOracle,
        )
        .build()
        .unwrap();

        sim.run_days(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.network.stores[0].curr_stock, 10.0);
        assert!(sim.warnings.contains_low(StoreId(0)));

        sim.run_days(1, &mut NoopObserver).unwrap();
        let day1 = &sim.history[1];
        // Two 50-unit trucks cover the 90-unit need; the rest stay home.
        assert_eq!(day1.store_deliveries, 2);
        assert_eq!(day1.mileage, 4.0);
        assert_eq!(sim.network.stores[0].curr_stock, 100.0);
        assert_eq!(sim.network.warehouses[0].curr_stock, 560.0);
        assert!(sim.warnings.is_empty());
        assert_eq!(sim.fleet.iter().filter(|t| t.on_hold == 1).count(), 2);
    }

    /// Demand per store id, then per day; zero past the end.
    struct PerStoreDemand(Vec<Vec<f64>>);

    impl DemandModel for PerStoreDemand {
        fn demand(&self, store: &Store, day: Day, _rng: &mut DemandRng) -> CoreResult<f64> {
            Ok(self.0[store.id.index()].get(day.0 as usize).copied().unwrap_or(0.0))
        }
    }

    #[test]
    fn full_threshold_still_restocks_the_store_that_sold() {
        let mut b = NetworkBuilder::new();
        let p = b.add_plant("P1", Point::new(-5.0, 0.0), 10_000.0, 100.0);
        b.add_warehouse("W1", Point::new(0.0, 0.0), 650.0, 100.0, p);
        b.add_store("A", Point::new(1.0, 0.0), 100.0, 100.0, 0.5);
        b.add_store("B", Point::new(9.0, 0.0), 100.0, 100.0, 0.5);
        let net = b.build().unwrap();

        let cfg = SimConfig { n_trucks: 1, max_stops: 1, min_percent: 1.0, ..config(1, 2) };
        let demand = PerStoreDemand(vec![vec![], vec![60.0]]);
        let mut sim = SimBuilder::new(cfg, net, demand, ManhattanOracle).build().unwrap();
        // Both stores start at their threshold.
        assert_eq!(sim.warnings.low(), &[StoreId(0), StoreId(1)]);

        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.history[0].store_deliveries, 0);
        assert_eq!(sim.history[1].store_deliveries, 1);
        assert_eq!(sim.history[1].mileage, 18.0);
        assert_eq!(sim.network.stores[1].curr_stock, 90.0);
        assert_eq!(sim.network.stores[0].curr_stock, 100.0);
        assert_eq!(sim.network.warehouses[0].curr_stock, 600.0);
    }

    #[test]
    fn day_metrics_add_up() {
        let mut sim = SimBuilder::new(config(4, 2), one_store_network(), FixedDemand(30.0), ManhattanOracle)
            .build()
            .unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();

        let d0 = &sim.history[0];
        assert_eq!(d0.sales, 30.0);
        assert_eq!(d0.revenue, 3_000.0);
        assert_eq!(d0.delivery_cost, 400.0);
        assert_eq!(d0.profit, 2_600.0);

        // Day 1 restocks the 30 units sold on day 0 in one trip of distance 2.
        let d1 = &sim.history[1];
        assert_eq!(d1.store_deliveries, 1);
        assert_eq!(d1.delivery_cost, 400.0 + 2.0 * 10.0);

        assert_eq!(summary.daily_profit, vec![d0.profit, d1.profit]);
        assert_eq!(summary.cumulative_profit[1], d0.profit + d1.profit);
        assert_eq!(summary.cum_profit, summary.cum_revenue - summary.cum_delivery_cost);
        assert_eq!(summary.delivery_cost_per_unit(), Some(summary.cum_delivery_cost / 60.0));
    }

    #[test]
    fn observer_sees_every_day_and_snapshot_interval() {
        let mut sim = SimBuilder::new(config(2, 5), line_network(), FixedDemand(1.0), ManhattanOracle)
            .snapshot_interval(2)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.starts, (0..5).map(Day).collect::<Vec<_>>());
        assert_eq!(rec.ends.len(), 5);
        assert_eq!(rec.ends, sim.history);
        let days: Vec<Day> = rec.snapshots.iter().map(|(d, _)| *d).collect();
        assert_eq!(days, vec![Day(0), Day(2), Day(4)]);
        assert_eq!(rec.finished, 1);
    }

    #[test]
    fn stochastic_run_keeps_invariants() {
        let mut sim = SimBuilder::new(config(4, 60), grid_network(), ExponentialDemand, ManhattanOracle)
            .build()
            .unwrap();

        for _ in 0..60 {
            let before = sim.network.warehouse_stock() + sim.network.store_stock();
            sim.run_days(1, &mut NoopObserver).unwrap();
            let m = sim.history.last().unwrap();

            sim.network.check_stock_bounds().unwrap();
            for id in sim.warnings.low() {
                assert!(!sim.warnings.contains_zero(*id));
            }
            for s in &sim.network.stores {
                if s.curr_stock == 0.0 {
                    assert!(sim.warnings.contains_zero(s.id), "{} empty but unflagged", s.id);
                }
            }
            assert!(m.sales <= m.demand + 1e-9);
            assert!((m.sales + m.opportunity_cost / 100.0 - m.demand).abs() < 1e-6);

            // Plants are the only source and sales the only sink; a
            // warehouse round trip adds at most one truckload.
            let after = sim.network.warehouse_stock() + sim.network.store_stock();
            let inflow = after - before + m.sales;
            assert!(inflow >= -1e-6);
            assert!(inflow <= f64::from(m.warehouse_deliveries) * 50.0 + 1e-6);
        }
    }

    #[test]
    fn same_seed_same_history() {
        let run = || {
            let mut sim = SimBuilder::new(config(3, 20), grid_network(), ExponentialDemand, ManhattanOracle)
                .build()
                .unwrap();
            sim.run(&mut NoopObserver).unwrap();
            sim.history
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn run_days_ignores_end_day() {
        let mut sim = SimBuilder::new(config(1, 2), line_network(), FixedDemand(0.0), ManhattanOracle)
            .build()
            .unwrap();
        sim.run_days(4, &mut NoopObserver).unwrap();
        assert_eq!(sim.day, Day(4));
        assert_eq!(sim.summary().days, 4);
    }
}

// ── Parameter study ───────────────────────────────────────────────────────────

#[cfg(test)]
mod study {
    use sc_routing::ManhattanOracle;

    use super::helpers::{config, grid_network, line_network};
    use crate::{ExponentialDemand, FixedDemand, SimError, StudyParameter, run_study};

    #[test]
    fn parameter_names_round_trip() {
        for p in StudyParameter::ALL {
            assert_eq!(StudyParameter::parse(p.as_str()), Some(p));
        }
        assert_eq!(StudyParameter::parse("speed"), None);
    }

    #[test]
    fn apply_rejects_fractional_counts() {
        let mut cfg = config(4, 5);
        assert!(matches!(
            StudyParameter::Trucks.apply(&mut cfg, 1.5),
            Err(SimError::Config(_))
        ));
        StudyParameter::MinPercent.apply(&mut cfg, 0.5).unwrap();
        assert_eq!(cfg.min_percent, 0.5);
    }

    #[test]
    fn results_follow_input_order() {
        let values = [3.0, 1.0, 2.0];
        let points = run_study(
            &config(4, 5),
            &line_network(),
            StudyParameter::Trucks,
            &values,
            &FixedDemand(0.0),
            &ManhattanOracle,
        )
        .unwrap();

        let got: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(got, values);
        for p in &points {
            assert_eq!(p.cum_delivery_cost, p.value * 100.0 * 5.0);
            assert_eq!(p.cum_profit, -p.cum_delivery_cost);
        }
    }

    #[test]
    fn study_case_matches_standalone_run() {
        let base = config(4, 15);
        let points = run_study(
            &base,
            &grid_network(),
            StudyParameter::MaxStops,
            &[2.0],
            &ExponentialDemand,
            &ManhattanOracle,
        )
        .unwrap();

        let cfg = sc_core::SimConfig { max_stops: 2, ..base };
        let mut sim = crate::SimBuilder::new(cfg, grid_network(), ExponentialDemand, ManhattanOracle)
            .build()
            .unwrap();
        let summary = sim.run(&mut crate::NoopObserver).unwrap();
        assert_eq!(points[0].cum_profit, summary.cum_profit);
    }

    #[test]
    fn invalid_case_fails_the_study() {
        let result = run_study(
            &config(4, 5),
            &line_network(),
            StudyParameter::MaxStops,
            &[2.0, 0.0],
            &FixedDemand(0.0),
            &ManhattanOracle,
        );
        assert!(result.is_err());
    }

    #[test]
    fn oversized_route_case_is_rejected_before_indexing() {
        let result = run_study(
            &config(4, 5),
            &grid_network(),
            StudyParameter::MaxStops,
            &[15.0],
            &FixedDemand(0.0),
            &ManhattanOracle,
        );
        assert!(matches!(result, Err(SimError::Core(sc_core::CoreError::Config(_)))));
    }
}
