//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CarId`, `RiderId`                                    |
//! | [`floor`]       | `Floor`, `Direction`                                  |
//! | [`path`]        | `is_between`, `PathQueue` (path-ordered stop list)    |
//! | [`snapshot`]    | `CarSnapshot` — per-tick `(current_floor, next_stop)` |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod floor;
pub mod ids;
pub mod path;
pub mod rng;
pub mod snapshot;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{LiftError, LiftResult};
pub use floor::{Direction, Floor};
pub use ids::{CarId, RiderId};
pub use path::{PathQueue, is_between};
pub use rng::SimRng;
pub use snapshot::CarSnapshot;
pub use time::{SimConfig, Tick};
