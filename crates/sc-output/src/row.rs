//! Plain data row types written by output backends.

use sc_sim::{DayMetrics, RunSummary, StudyPoint};

/// One simulated day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRow {
    pub day:                  u32,
    pub demand:               f64,
    pub sales:                f64,
    pub revenue:              f64,
    pub opportunity_cost:     f64,
    pub warehouse_deliveries: u32,
    pub store_deliveries:     u32,
    pub mileage:              f64,
    pub delivery_cost:        f64,
    pub profit:               f64,
    /// Running profit including this day.
    pub cum_profit:           f64,
}

impl DailyRow {
    pub fn from_metrics(m: &DayMetrics, cum_profit: f64) -> Self {
        Self {
            day:                  m.day.0,
            demand:               m.demand,
            sales:                m.sales,
            revenue:              m.revenue,
            opportunity_cost:     m.opportunity_cost,
            warehouse_deliveries: m.warehouse_deliveries,
            store_deliveries:     m.store_deliveries,
            mileage:              m.mileage,
            delivery_cost:        m.delivery_cost,
            profit:               m.profit,
            cum_profit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Warehouse,
    Store,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Warehouse => "warehouse",
            EntityKind::Store     => "store",
        }
    }
}

/// Stock held by one warehouse or store at the end of a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockRow {
    pub day:       u32,
    pub kind:      EntityKind,
    pub id:        u32,
    pub stock:     f64,
    pub min_stock: f64,
    pub capacity:  f64,
}

/// End-of-run totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub days:                     u32,
    pub cum_demand:               f64,
    pub cum_sales:                f64,
    pub cum_revenue:              f64,
    pub cum_opportunity_cost:     f64,
    pub cum_delivery_cost:        f64,
    pub cum_mileage:              f64,
    pub cum_warehouse_deliveries: u32,
    pub cum_store_deliveries:     u32,
    pub cum_profit:               f64,
    /// `None` when nothing sold.
    pub delivery_cost_per_unit:   Option<f64>,
}

impl From<&RunSummary> for SummaryRow {
    fn from(s: &RunSummary) -> Self {
        Self {
            days:                     s.days,
            cum_demand:               s.cum_demand,
            cum_sales:                s.cum_sales,
            cum_revenue:              s.cum_revenue,
            cum_opportunity_cost:     s.cum_opportunity_cost,
            cum_delivery_cost:        s.cum_delivery_cost,
            cum_mileage:              s.cum_mileage,
            cum_warehouse_deliveries: s.cum_warehouse_deliveries,
            cum_store_deliveries:     s.cum_store_deliveries,
            cum_profit:               s.cum_profit,
            delivery_cost_per_unit:   s.delivery_cost_per_unit(),
        }
    }
}

/// One parameter-study case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudyRow {
    pub parameter:            &'static str,
    pub value:                f64,
    pub cum_revenue:          f64,
    pub cum_delivery_cost:    f64,
    pub cum_opportunity_cost: f64,
    pub cum_profit:           f64,
}

impl From<&StudyPoint> for StudyRow {
    fn from(p: &StudyPoint) -> Self {
        Self {
            parameter:            p.parameter.as_str(),
            value:                p.value,
            cum_revenue:          p.cum_revenue,
            cum_delivery_cost:    p.cum_delivery_cost,
            cum_opportunity_cost: p.cum_opportunity_cost,
            cum_profit:           p.cum_profit,
        }
    }
}
