//! Per-day financial metrics and the end-of-run summary.

use sc_core::Day;

/// Everything recorded for one simulated day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DayMetrics {
    pub day:                  Day,
    /// Total units demanded across all stores.
    pub demand:               f64,
    /// Total units sold.
    pub sales:                f64,
    pub revenue:              f64,
    /// Value of missed sales at the unit price.
    pub opportunity_cost:     f64,
    pub warehouse_deliveries: u32,
    pub store_deliveries:     u32,
    pub mileage:              f64,
    /// Daily hire of the whole fleet plus per-mile cost of today's routes.
    pub delivery_cost:        f64,
    /// `revenue − delivery_cost`.
    pub profit:               f64,
}

impl DayMetrics {
    #[inline]
    pub fn deliveries(&self) -> u32 {
        self.warehouse_deliveries + self.store_deliveries
    }
}

/// Cumulative totals over a run, plus the daily and running profit series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub days:                     u32,
    pub cum_demand:               f64,
    pub cum_sales:                f64,
    pub cum_revenue:              f64,
    pub cum_opportunity_cost:     f64,
    pub cum_delivery_cost:        f64,
    pub cum_mileage:              f64,
    pub cum_warehouse_deliveries: u32,
    pub cum_store_deliveries:     u32,
    /// `cum_revenue − cum_delivery_cost`.
    pub cum_profit:               f64,
    pub daily_profit:             Vec<f64>,
    /// Running total of `daily_profit`.
    pub cumulative_profit:        Vec<f64>,
}

impl RunSummary {
    pub fn from_history(history: &[DayMetrics]) -> Self {
        let mut s = RunSummary {
            days: history.len() as u32,
            daily_profit: Vec::with_capacity(history.len()),
            cumulative_profit: Vec::with_capacity(history.len()),
            ..Default::default()
        };

        let mut running = 0.0;
        for m in history {
            s.cum_demand += m.demand;
            s.cum_sales += m.sales;
            s.cum_revenue += m.revenue;
            s.cum_opportunity_cost += m.opportunity_cost;
            s.cum_delivery_cost += m.delivery_cost;
            s.cum_mileage += m.mileage;
            s.cum_warehouse_deliveries += m.warehouse_deliveries;
            s.cum_store_deliveries += m.store_deliveries;

            running += m.profit;
            s.daily_profit.push(m.profit);
            s.cumulative_profit.push(running);
        }
        s.cum_profit = s.cum_revenue - s.cum_delivery_cost;
        s
    }

    #[inline]
    pub fn cum_deliveries(&self) -> u32 {
        self.cum_warehouse_deliveries + self.cum_store_deliveries
    }

    /// Delivery cost per unit sold; `None` when nothing sold.
    pub fn delivery_cost_per_unit(&self) -> Option<f64> {
        (self.cum_sales > 0.0).then(|| self.cum_delivery_cost / self.cum_sales)
    }
}
