//! baseline — the reference supply-chain case.
//!
//! Four 50-unit trucks serve two warehouses and twenty stores for 90 days,
//! restocking anything at or below 80 % of capacity on routes of up to
//! three stops.
//!
//! ```text
//! cargo run --release -p baseline -- [CONFIG.json] [--sqlite]
//! ```
//!
//! `CONFIG.json` overrides any `SimConfig` field, e.g.
//! `{"n_trucks": 6, "days": 30}`.  Set `RUST_LOG=sc_sim=debug` to trace
//! every dispatch.

mod network;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sc_core::SimConfig;
use sc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use sc_routing::ManhattanOracle;
use sc_sim::{ExponentialDemand, RunSummary, SimBuilder};

use network::build_network;

const OUTPUT_DIR: &str = "output/baseline";

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::baseline());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn run<W: OutputWriter>(config: SimConfig, writer: W) -> Result<RunSummary> {
    let network = build_network()?;
    println!(
        "Network: {} plants, {} warehouses, {} stores",
        network.plants.len(),
        network.warehouses.len(),
        network.stores.len()
    );

    let t0 = Instant::now();
    let mut sim = SimBuilder::new(config, network, ExponentialDemand, ManhattanOracle).build()?;
    println!("Route index: {} entries in {:.3} s", sim.index.len(), t0.elapsed().as_secs_f64());

    let mut obs = SimOutputObserver::new(writer);
    let t1 = Instant::now();
    let summary = sim.run(&mut obs)?;
    info!(elapsed_ms = t1.elapsed().as_millis() as u64, "run complete");

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    Ok(summary)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config_path: Option<PathBuf> = None;
    let mut sqlite = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--sqlite" => sqlite = true,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => config_path = Some(PathBuf::from(path)),
        }
    }

    let config = load_config(config_path.as_deref())?;
    config.validate()?;

    println!("=== baseline — rust_sc supply chain ===");
    println!(
        "Trucks: {}  |  Capacity: {}  |  Max stops: {}  |  Min %: {}  |  Days: {}  |  Seed: {}",
        config.n_trucks,
        config.truck_capacity,
        config.max_stops,
        config.min_percent,
        config.days,
        config.seed
    );
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let dir = Path::new(OUTPUT_DIR);

    let summary = if sqlite {
        #[cfg(feature = "sqlite")]
        {
            run(config, sc_output::SqliteWriter::new(dir)?)?
        }
        #[cfg(not(feature = "sqlite"))]
        {
            bail!("--sqlite needs the `sqlite` feature");
        }
    } else {
        run(config, CsvWriter::new(dir)?)?
    };

    println!();
    println!("{:<28} {:>14}", "Metric", "Total");
    println!("{}", "-".repeat(43));
    let rows = [
        ("Demand (units)", summary.cum_demand),
        ("Sales (units)", summary.cum_sales),
        ("Revenue", summary.cum_revenue),
        ("Opportunity cost", summary.cum_opportunity_cost),
        ("Delivery cost", summary.cum_delivery_cost),
        ("Mileage", summary.cum_mileage),
        ("Profit", summary.cum_profit),
    ];
    for (label, value) in rows {
        println!("{label:<28} {value:>14.1}");
    }
    println!(
        "{:<28} {:>14}",
        "Deliveries (W / S)",
        format!("{} / {}", summary.cum_warehouse_deliveries, summary.cum_store_deliveries)
    );
    match summary.delivery_cost_per_unit() {
        Some(v) => println!("{:<28} {v:>14.2}", "Delivery cost per unit"),
        None => println!("{:<28} {:>14}", "Delivery cost per unit", "n/a"),
    }
    println!();
    println!("Output written to {OUTPUT_DIR}/");

    Ok(())
}
