//! param_study — sweep one knob of the baseline case at a time.
//!
//! ```text
//! cargo run --release -p baseline --bin param_study -- [trucks|max_stops|min_percent|interval]...
//! ```
//!
//! With no arguments all four studies run.  Each writes
//! `output/param_study/study_<parameter>.csv`.

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;

use sc_core::SimConfig;
use sc_output::{StudyRow, write_study_csv};
use sc_routing::ManhattanOracle;
use sc_sim::{ExponentialDemand, StudyParameter, run_study};

use network::build_network;

const OUTPUT_DIR: &str = "output/param_study";

fn sweep(parameter: StudyParameter) -> Vec<f64> {
    match parameter {
        StudyParameter::Trucks     => (1..=10).map(f64::from).collect(),
        StudyParameter::MaxStops   => (1..=5).map(f64::from).collect(),
        StudyParameter::MinPercent => (0..10).map(|i| f64::from(i) * 0.1).collect(),
        StudyParameter::Interval   => (1..=5).map(f64::from).collect(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut parameters = Vec::new();
    for arg in std::env::args().skip(1) {
        match StudyParameter::parse(&arg) {
            Some(p) => parameters.push(p),
            None => bail!("unknown study parameter {arg:?}"),
        }
    }
    if parameters.is_empty() {
        parameters.extend(StudyParameter::ALL);
    }

    let base = SimConfig::baseline();
    let network = build_network()?;
    std::fs::create_dir_all(OUTPUT_DIR)?;

    for parameter in parameters {
        let values = sweep(parameter);
        println!("=== {parameter}: {} cases ===", values.len());

        let t0 = Instant::now();
        let points = run_study(&base, &network, parameter, &values, &ExponentialDemand, &ManhattanOracle)?;
        println!("done in {:.2} s", t0.elapsed().as_secs_f64());

        println!(
            "{:>8} {:>12} {:>14} {:>14} {:>12}",
            "value", "revenue", "delivery", "opportunity", "profit"
        );
        for p in &points {
            println!(
                "{:>8.2} {:>12.0} {:>14.0} {:>14.0} {:>12.0}",
                p.value, p.cum_revenue, p.cum_delivery_cost, p.cum_opportunity_cost, p.cum_profit
            );
        }

        let rows: Vec<StudyRow> = points.iter().map(StudyRow::from).collect();
        let path = Path::new(OUTPUT_DIR).join(format!("study_{parameter}.csv"));
        write_study_csv(&path, &rows)?;
        println!("→ {}", path.display());
        println!();
    }

    Ok(())
}
