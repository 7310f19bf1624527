//! Feeds a ring buffer with fake sensor readings and prints what drains out of it.

use anyhow::Context;
use clap::Parser;
use sensor_ring::{Reading, SensorRing};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sensor")]
#[command(about = "Insert readings into a ring buffer and drain them")]
struct Args {
    /// Maximum number of un-drained readings.
    #[arg(long, default_value_t = 5)]
    capacity: usize,

    /// Number of readings to insert before the second drain.
    #[arg(long, default_value_t = 10)]
    count: usize,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let mut ring = SensorRing::new(args.capacity)
        .with_context(|| format!("invalid --capacity: {}", args.capacity))?;

    println!("EMPTY TEST:");
    print_readings(&ring.drain());

    println!("FULL TEST:");
    for value in payloads().take(args.count) {
        ring.insert(Reading::now(value));
    }

    tracing::info!(
        pending = ring.len(),
        evicted = ring.evicted(),
        "inserted readings"
    );
    print_readings(&ring.drain());

    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

/// Single letter payloads, a through z and around again.
fn payloads() -> impl Iterator<Item = String> {
    ('a'..='z').cycle().map(String::from)
}

fn print_readings(readings: &[Reading<String>]) {
    println!("({} readings)", readings.len());
    for reading in readings {
        println!("  {:?} {:?}", reading.timestamp(), reading.value());
    }
}
