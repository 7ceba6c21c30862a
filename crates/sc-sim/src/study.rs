//! Parameter studies: rerun the baseline with one knob swept over a range.
//!
//! Each value gets its own config, network clone, route index and demand
//! stream seeded from `base.seed`, so cases are independent and results do
//! not depend on execution order.

use std::fmt;

use tracing::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use sc_core::SimConfig;
use sc_network::Network;
use sc_routing::DistanceOracle;

use crate::{DemandModel, NoopObserver, SimBuilder, SimError, SimResult};

/// The configuration knob a study sweeps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StudyParameter {
    Trucks,
    MaxStops,
    MinPercent,
    Interval,
}

impl StudyParameter {
    pub const ALL: [StudyParameter; 4] = [
        StudyParameter::Trucks,
        StudyParameter::MaxStops,
        StudyParameter::MinPercent,
        StudyParameter::Interval,
    ];

    /// Column/CLI name.
    pub fn as_str(self) -> &'static str {
        match self {
            StudyParameter::Trucks     => "trucks",
            StudyParameter::MaxStops   => "max_stops",
            StudyParameter::MinPercent => "min_percent",
            StudyParameter::Interval   => "interval",
        }
    }

    pub fn parse(s: &str) -> Option<StudyParameter> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Write `value` into `config`.  Integer knobs reject fractional or
    /// negative values.
    pub fn apply(self, config: &mut SimConfig, value: f64) -> SimResult<()> {
        let whole = || {
            if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
                Ok(value)
            } else {
                Err(SimError::Config(format!("{self} needs a whole number, got {value}")))
            }
        };
        match self {
            StudyParameter::Trucks     => config.n_trucks = whole()? as u32,
            StudyParameter::MaxStops   => config.max_stops = whole()? as usize,
            StudyParameter::MinPercent => config.min_percent = value,
            StudyParameter::Interval   => config.delivery_interval = whole()? as u32,
        }
        Ok(())
    }
}

impl fmt::Display for StudyParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cumulative outcome of one study case.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StudyPoint {
    pub parameter:            StudyParameter,
    pub value:                f64,
    pub cum_revenue:          f64,
    pub cum_delivery_cost:    f64,
    pub cum_opportunity_cost: f64,
    pub cum_profit:           f64,
}

/// Run one full simulation per entry of `values`.
///
/// Results come back in the order of `values`.  The first failing case
/// aborts the study.
pub fn run_study<D, O>(
    base:      &SimConfig,
    network:   &Network,
    parameter: StudyParameter,
    values:    &[f64],
    demand:    &D,
    oracle:    &O,
) -> SimResult<Vec<StudyPoint>>
where
    D: DemandModel,
    O: DistanceOracle,
{
    info!(%parameter, cases = values.len(), "parameter study started");

    let run_case = |&value: &f64| -> SimResult<StudyPoint> {
        let mut config = base.clone();
        parameter.apply(&mut config, value)?;
        let mut sim = SimBuilder::new(config, network.clone(), demand, oracle)
            .snapshot_interval(0)
            .build()?;
        let summary = sim.run(&mut NoopObserver)?;
        Ok(StudyPoint {
            parameter,
            value,
            cum_revenue:          summary.cum_revenue,
            cum_delivery_cost:    summary.cum_delivery_cost,
            cum_opportunity_cost: summary.cum_opportunity_cost,
            cum_profit:           summary.cum_profit,
        })
    };

    #[cfg(feature = "parallel")]
    let points: SimResult<Vec<StudyPoint>> = values.par_iter().map(run_case).collect();
    #[cfg(not(feature = "parallel"))]
    let points: SimResult<Vec<StudyPoint>> = values.iter().map(run_case).collect();

    points
}
