//! liftsim — command-line front end for the elevator simulator.
//!
//! Reads run parameters from a TOML property file (falling back to built-in
//! defaults when the file is missing, unreadable, or malformed), runs the
//! simulation to completion, and prints the wait-time statistics.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use lift_core::{SimConfig, Tick};
use lift_sim::{Sim, SimObserver, WaitStats};

/// Default property file consulted when no path is given.
const DEFAULT_PROPERTY_FILE: &str = "liftsim.toml";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "liftsim", about = "Multi-elevator building simulator")]
struct Args {
    /// Path to a TOML property file.  Defaults are substituted when the
    /// file is missing or unreadable.
    config: Option<PathBuf>,

    /// Override the RNG seed from the property file.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a progress line every N ticks (0 = quiet).
    #[arg(long, default_value_t = 0)]
    progress: u64,
}

// ── Property file ─────────────────────────────────────────────────────────────

/// The flat property table.  Unknown keys (such as a `structures` switch
/// with no behavioral meaning) are ignored, so property files carrying extra
/// settings still load.
#[derive(Deserialize)]
#[serde(default)]
struct PropertyFile {
    /// Number of ticks to simulate.
    duration: u64,
    /// Elevator count.
    elevators: usize,
    /// Floor count.
    floors: usize,
    /// Per-floor, per-tick arrival probability.
    passengers: f64,
    /// Max passengers onboard one elevator; omit for the default of 10.
    elevator_capacity: usize,
    /// RNG seed; fix it to reproduce a run exactly.
    seed: u64,
}

impl Default for PropertyFile {
    fn default() -> Self {
        Self {
            duration: 500,
            elevators: 1,
            floors: 32,
            passengers: 0.03,
            elevator_capacity: 10,
            seed: 42,
        }
    }
}

impl PropertyFile {
    fn into_config(self) -> SimConfig {
        SimConfig {
            floors: self.floors,
            elevators: self.elevators,
            total_ticks: self.duration,
            arrival_probability: self.passengers,
            capacity: Some(self.elevator_capacity),
            seed: self.seed,
        }
    }
}

/// Load the property file, substituting full defaults on any failure.
///
/// Missing or unreadable files are expected (first run, fresh checkout), so
/// the fallback is a notice on stderr rather than an error.
fn load_properties(path: &Path) -> PropertyFile {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("note: {} not read ({e}); using defaults", path.display());
            return PropertyFile::default();
        }
    };
    match toml::from_str(&text) {
        Ok(props) => props,
        Err(e) => {
            eprintln!("note: {} not parsed ({e}); using defaults", path.display());
            PropertyFile::default()
        }
    }
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter {
    /// Print every `interval` ticks; 0 disables printing.
    interval: u64,
    waiting: i64,
}

impl SimObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, spawned: usize, delivered: usize) {
        self.waiting += spawned as i64 - delivered as i64;
        if self.interval > 0 && tick.0 % self.interval == 0 {
            println!(
                "{tick}: +{spawned} arrived, {delivered} delivered, {} in the system",
                self.waiting
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let path = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROPERTY_FILE));
    let mut config = load_properties(&path).into_config();
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    println!("=== liftsim ===");
    println!(
        "Floors: {} | Elevators: {} (cap {}) | Ticks: {} | Arrival p: {} | Seed: {}",
        config.floors,
        config.elevators,
        config
            .capacity
            .map_or_else(|| "∞".into(), |c| c.to_string()),
        config.total_ticks,
        config.arrival_probability,
        config.seed,
    );

    let mut sim = Sim::new(config).context("invalid configuration")?;
    let mut observer = ProgressPrinter {
        interval: args.progress,
        waiting: 0,
    };

    let t0 = Instant::now();
    let stats = sim.run(&mut observer);
    let elapsed = t0.elapsed();

    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    report(&stats, sim.passengers.len());
    Ok(())
}

fn report(stats: &WaitStats, total_spawned: usize) {
    println!("Passengers generated: {total_spawned}");
    println!("Passengers delivered: {}", stats.delivered);
    println!("Average wait: {:.2} ticks", stats.average);
    println!("Longest wait: {} ticks", stats.longest);
    println!("Shortest wait: {} ticks", stats.shortest);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
