//! Daily demand models.
//!
//! The simulator asks a [`DemandModel`] for each store's demand once per
//! day.  [`ExponentialDemand`] is the production model; the other two exist
//! for deterministic scenarios.

use sc_core::{CoreResult, Day, DemandRng};
use sc_network::Store;

pub trait DemandModel: Send + Sync {
    /// Units demanded at `store` on `day`.  Must be finite and non-negative.
    fn demand(&self, store: &Store, day: Day, rng: &mut DemandRng) -> CoreResult<f64>;
}

impl<D: DemandModel + ?Sized> DemandModel for &D {
    #[inline]
    fn demand(&self, store: &Store, day: Day, rng: &mut DemandRng) -> CoreResult<f64> {
        (**self).demand(store, day, rng)
    }
}

/// `0.5 × ceil(x)` with `x ~ Exp(store.sale_rate)`.
///
/// Demand therefore moves in half-unit steps and is at least 0.5 whenever
/// the draw is positive.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExponentialDemand;

impl DemandModel for ExponentialDemand {
    fn demand(&self, store: &Store, _day: Day, rng: &mut DemandRng) -> CoreResult<f64> {
        let x = rng.exponential(store.sale_rate)?;
        Ok(0.5 * x.ceil())
    }
}

/// The same demand at every store on every day.
#[derive(Copy, Clone, Debug)]
pub struct FixedDemand(pub f64);

impl DemandModel for FixedDemand {
    fn demand(&self, _store: &Store, _day: Day, _rng: &mut DemandRng) -> CoreResult<f64> {
        Ok(self.0)
    }
}

/// Demand by day index, shared by every store; zero once the schedule runs out.
#[derive(Clone, Debug, Default)]
pub struct ScheduledDemand(pub Vec<f64>);

impl DemandModel for ScheduledDemand {
    fn demand(&self, _store: &Store, day: Day, _rng: &mut DemandRng) -> CoreResult<f64> {
        Ok(self.0.get(day.0 as usize).copied().unwrap_or(0.0))
    }
}
