//! Top-level simulation configuration.
//!
//! Typically assembled by the application crate (from a property file plus
//! command-line overrides) and passed to the simulation runner.  The core
//! assumes a validated configuration; [`SimConfig::validate`] is the single
//! place that rejects unusable parameter combinations, so construction fails
//! fast instead of a run silently misbehaving.

use crate::{CoreError, CoreResult, Tick};

/// Parameters for one simulation run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  Must be at least 2 for movement
    /// to be meaningful.
    pub floors: usize,

    /// Number of elevators.  Zero is allowed: the run completes with empty
    /// statistics.
    pub elevators: usize,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Per-floor, per-tick probability of a passenger arriving.  In [0, 1].
    pub arrival_probability: f64,

    /// Maximum passengers onboard one elevator.  `None` means unbounded
    /// boarding.  `Some(0)` is rejected — such an elevator could never load.
    pub capacity: Option<usize>,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    /// A 32-floor building, one elevator of capacity 10, 500 ticks, 3%
    /// arrival probability.
    fn default() -> Self {
        Self {
            floors:              32,
            elevators:           1,
            total_ticks:         500,
            arrival_probability: 0.03,
            capacity:            Some(10),
            seed:                42,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject parameter combinations the tick loop cannot operate on.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floors < 2 {
            return Err(CoreError::Config(format!(
                "floors must be at least 2, got {}",
                self.floors
            )));
        }
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(CoreError::Config(format!(
                "arrival_probability must be in [0, 1], got {}",
                self.arrival_probability
            )));
        }
        if self.capacity == Some(0) {
            return Err(CoreError::Config(
                "capacity of 0 would make every elevator unusable".into(),
            ));
        }
        Ok(())
    }
}
