//! nw-district — end-to-end demo for the routegen workspace.
//!
//! Generates 180 days of synthetic history for a 60-stop northwest district
//! pool and writes it as CSV.  The roster here is synthetic; point
//! `load_roster_csv` at a real export to seed an actual pool.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use rg_core::GenConfig;
use rg_output::{CsvWriter, PersistSink};
use rg_sim::Simulation;
use rg_stops::RosterEntry;

// ── Constants ─────────────────────────────────────────────────────────────────

const STOP_COUNT: usize = 60;
const HOTSPOT_EVERY: usize = 6; // every 6th stop is a known hotspot
const SEED: u64 = 42;
const NUM_DAYS: u32 = 180;
const OPERATOR_ID: i64 = 123;
const POOL_ID: &str = "NW_D";
const BASE_ID: &str = "NORTH";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== nw-district — routegen synthetic history ===");
    println!("Stops: {STOP_COUNT}  |  Days: {NUM_DAYS}  |  Seed: {SEED}");
    println!();

    // 1. Synthetic roster: NW-0001..NW-0060, every 6th flagged hotspot.
    let roster: Vec<RosterEntry> = (1..=STOP_COUNT)
        .map(|i| RosterEntry::new(format!("NW-{i:04}"), i % HOTSPOT_EVERY == 0))
        .collect();

    // 2. Config.  A fixed start date keeps the output reproducible
    //    byte-for-byte; swap in `Local::now()` arithmetic for rolling
    //    backfills.
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid start date")?;
    let mut config = GenConfig::new(SEED, start_date, NUM_DAYS);
    config.operator_id = OPERATOR_ID;
    config.pool_id = POOL_ID.into();
    config.base_id = BASE_ID.into();

    // 3. Build the simulation (validates config, seeds the stream, assigns
    //    priority tiers).
    let mut sim = Simulation::new(config, &roster)?;

    // 4. CSV sink.
    let out_dir = Path::new("output/nw-district");
    std::fs::create_dir_all(out_dir)?;
    let mut sink = PersistSink::new(CsvWriter::new(out_dir)?);

    // 5. Run the full horizon.
    let t0 = std::time::Instant::now();
    sim.run(&mut sink)?;
    let elapsed = t0.elapsed();

    // 6. Summary.
    println!("Generation complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!("{:<12} {:<10} {:<10}", "Class", "Stops", "Volume");
    println!("{}", "-".repeat(34));
    for class in ["hotspot", "medium", "light"] {
        let (count, volume): (usize, f64) = sim
            .store()
            .iter()
            .filter(|p| p.priority().as_str() == class)
            .fold((0, 0.0), |(n, v), p| (n + 1, v + p.volume()));
        let mean = if count > 0 { volume / count as f64 } else { 0.0 };
        println!("{class:<12} {count:<10} {mean:<10.2}");
    }
    println!();
    println!("CSV written to {}", out_dir.display());

    Ok(())
}
