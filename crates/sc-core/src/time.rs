//! Simulation calendar and run configuration.
//!
//! # Design
//!
//! The simulation advances in whole days.  `Day` is a plain counter starting
//! at zero; there is no wall-clock mapping because every event inside a day
//! happens in a fixed order (deliveries first, then sales) rather than at a
//! timestamp.

use std::fmt;

use crate::rng::DemandSampling;
use crate::{CoreError, CoreResult};

// ── Day ───────────────────────────────────────────────────────────────────────

/// A zero-based simulated day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// The day after `self`.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Largest `max_stops` a configuration may ask for.
///
/// The route index tries every ordering of every subset up to this size, so
/// its cost grows factorially.
pub const MAX_ROUTE_STOPS: usize = 5;

/// Top-level simulation configuration.
///
/// Typically built from [`SimConfig::baseline`] and tweaked field by field,
/// or loaded from a JSON file by the application crate (feature `serde`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of trucks in the fleet.
    pub n_trucks: u32,

    /// Minimum on-hold days before a truck may depart again.
    pub delivery_interval: u32,

    /// Daily hire cost of one truck, charged whether or not it drives.
    pub truck_base_cost: f64,

    /// Cost per unit of distance driven.
    pub truck_cost_per_mile: f64,

    /// Units one truck can carry.
    pub truck_capacity: f64,

    /// Maximum stores visited on one route.  Also the largest subset size
    /// precomputed by the route index; at most [`MAX_ROUTE_STOPS`].
    pub max_stops: usize,

    /// Fraction of capacity at or below which a store or warehouse is
    /// flagged for restock.  Applied uniformly to both.
    pub min_percent: f64,

    /// Number of days to simulate.
    pub days: u32,

    /// Sale price of one unit.
    pub price_per_unit: f64,

    /// Master RNG seed for demand generation.
    pub seed: u64,

    /// How demand samples are drawn from the seed.
    pub demand_sampling: DemandSampling,
}

impl SimConfig {
    /// The reference case: 4 trucks of 50 units leaving daily, 3 stops per
    /// route, restock at 80 % and a 90-day horizon.
    pub fn baseline() -> Self {
        Self {
            n_trucks:            4,
            delivery_interval:   1,
            truck_base_cost:     100.0,
            truck_cost_per_mile: 10.0,
            truck_capacity:      50.0,
            max_stops:           3,
            min_percent:         0.8,
            days:                90,
            price_per_unit:      100.0,
            seed:                0,
            demand_sampling:     DemandSampling::Stream,
        }
    }

    /// The day at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_day(&self) -> Day {
        Day(self.days)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_stops == 0 {
            return Err(CoreError::Config("max_stops must be at least 1".into()));
        }
        if self.max_stops > MAX_ROUTE_STOPS {
            return Err(CoreError::Config(format!(
                "max_stops {} exceeds the limit of {MAX_ROUTE_STOPS}",
                self.max_stops
            )));
        }
        if !(0.0..=1.0).contains(&self.min_percent) {
            return Err(CoreError::Config(format!(
                "min_percent {} outside [0, 1]",
                self.min_percent
            )));
        }
        if self.truck_capacity.is_nan() || self.truck_capacity <= 0.0 {
            return Err(CoreError::Config(format!(
                "truck_capacity must be positive, got {}",
                self.truck_capacity
            )));
        }
        if self.truck_base_cost < 0.0 || self.truck_cost_per_mile < 0.0 || self.price_per_unit < 0.0 {
            return Err(CoreError::Config("costs and prices must be non-negative".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::baseline()
    }
}
