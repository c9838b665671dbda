//! Simulation observer trait for progress reporting.

use lift_core::Tick;

use crate::WaitStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, spawned: usize, delivered: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: +{spawned} waiting, {delivered} delivered");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `spawned` is the number of passengers that appeared this tick,
    /// `delivered` the number unloaded at their destination this tick.
    fn on_tick_end(&mut self, _tick: Tick, _spawned: usize, _delivered: usize) {}

    /// Called once after the final tick, with the aggregated statistics.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &WaitStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
