//! The two-plant, two-warehouse, twenty-store demo network.
//!
//! Both `baseline` and `param_study` call [`build_network`].

use std::io::Cursor;

use anyhow::Result;

use sc_core::Point;
use sc_network::{Network, NetworkBuilder, load_stores_reader};

/// Refill target for every store and warehouse, percent of capacity.
pub const REFILL_PCT: f64 = 100.0;

// id,x,y,capacity,sale_rate: grid miles, then the rate of the daily exponential demand.
const STORES_CSV: &str = "\
id,x,y,capacity,sale_rate\n\
1,3.0,7.0,100,0.25\n\
2,5.0,8.0,120,0.30\n\
3,1.0,6.0,80,0.45\n\
4,2.0,2.0,100,0.35\n\
5,6.0,6.0,150,0.20\n\
6,7.0,4.0,100,0.40\n\
7,8.0,7.0,90,0.30\n\
8,10.0,5.0,100,0.50\n\
9,11.0,3.0,120,0.25\n\
10,10.0,1.0,80,0.45\n\
11,7.0,0.0,100,0.35\n\
12,4.0,0.0,90,0.40\n\
13,0.0,3.0,100,0.30\n\
14,2.0,9.0,110,0.35\n\
15,6.0,9.0,100,0.25\n\
16,9.0,9.0,80,0.50\n\
17,12.0,6.0,100,0.40\n\
18,5.0,4.0,140,0.20\n\
19,3.0,5.0,100,0.30\n\
20,8.0,2.0,100,0.35\n\
";

/// Build the demo network.  Every entity starts full.
pub fn build_network() -> Result<Network> {
    let mut b = NetworkBuilder::new();

    let p1 = b.add_plant("P1", Point::new(1.0, 4.0), 10_000.0, 100.0);
    let p2 = b.add_plant("P2", Point::new(6.0, 1.0), 10_000.0, 100.0);

    b.add_warehouse("W1", Point::new(4.0, 3.0), 650.0, REFILL_PCT, p1);
    b.add_warehouse("W2", Point::new(9.0, 2.0), 650.0, REFILL_PCT, p2);

    let records = load_stores_reader(Cursor::new(STORES_CSV))?;
    b.add_store_records(&records, REFILL_PCT);

    Ok(b.build()?)
}
