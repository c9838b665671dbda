//! `lift-sim` — dispatch state machine and tick loop for the liftsim
//! elevator simulator.
//!
//! # Three-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Spawn  — each floor independently draws against the arrival
//!              probability and may enqueue one new passenger.
//!   ② Route  — floors that spawned this tick are forwarded to every
//!              elevator as stop requests, but only when the floor lies
//!              strictly ahead in that elevator's direction of travel.
//!   ③ Serve  — each elevator in list order: board waiting passengers at
//!              its current floor, advance one travel step, unload
//!              arrivals, record their wait times.
//! ```
//!
//! Elevators are served sequentially, so a later elevator in the same tick
//! observes floor-queue mutations made by an earlier one.  That ordering is
//! part of the observable behavior; together with the single seeded RNG it
//! makes whole runs bit-reproducible.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, Sim};
//!
//! let mut sim = Sim::new(SimConfig::default())?;
//! let stats = sim.run(&mut NoopObserver);
//! println!("{stats}");
//! ```

pub mod elevator;
pub mod error;
pub mod floor;
pub mod observer;
pub mod passenger;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod tests;

pub use elevator::{Elevator, TRAVEL_SPAN};
pub use error::{SimError, SimResult};
pub use floor::Floor;
pub use observer::{NoopObserver, SimObserver};
pub use passenger::{PassengerRecord, PassengerStore};
pub use sim::Sim;
pub use stats::WaitStats;
