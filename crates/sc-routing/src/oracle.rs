//! The distance oracle.
//!
//! # Pluggability
//!
//! Route construction only ever asks for the distance between two fixed
//! entity coordinates, through the [`DistanceOracle`] trait.  The reference
//! deployment drives on a rectilinear street grid, so [`ManhattanOracle`] is
//! the default; applications with a real road graph implement the trait over
//! their own precomputed shortest paths.

use sc_core::Point;
use sc_network::{Network, Stop};

/// Travel distance between two located entities.
///
/// Implementations must be pure (same inputs, same output) and return a
/// non-negative value.  They must be `Send + Sync` so the route index can be
/// built in parallel.
pub trait DistanceOracle: Send + Sync {
    fn distance(&self, a: Point, b: Point) -> f64;
}

/// `|dx| + |dy|` between grid coordinates.
#[derive(Copy, Clone, Debug, Default)]
pub struct ManhattanOracle;

impl DistanceOracle for ManhattanOracle {
    #[inline]
    fn distance(&self, a: Point, b: Point) -> f64 {
        a.manhattan(b)
    }
}

impl<O: DistanceOracle + ?Sized> DistanceOracle for &O {
    #[inline]
    fn distance(&self, a: Point, b: Point) -> f64 {
        (**self).distance(a, b)
    }
}

/// Sum of oracle distances between consecutive stops.
pub fn path_distance<O: DistanceOracle + ?Sized>(oracle: &O, network: &Network, stops: &[Stop]) -> f64 {
    stops
        .windows(2)
        .map(|pair| oracle.distance(network.location(pair[0]), network.location(pair[1])))
        .sum()
}
