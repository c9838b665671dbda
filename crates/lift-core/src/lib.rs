//! `lift-core` — foundational types for the liftsim elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                |
//! |-------------|-----------------------------------------|
//! | [`ids`]     | `PassengerId`                           |
//! | [`time`]    | `Tick`                                  |
//! | [`rng`]     | `SimRng` (seeded, reproducible)         |
//! | [`config`]  | `SimConfig` + validation                |
//! | [`error`]   | `CoreError`, `CoreResult`               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use ids::PassengerId;
pub use rng::SimRng;
pub use time::Tick;
