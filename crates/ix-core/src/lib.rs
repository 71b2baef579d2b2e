//! `ix-core` — foundational types for the `rust_ix` intersection framework.
//!
//! This crate is a dependency of every other `ix-*` crate.  It intentionally
//! has no `ix-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`                                           |
//! | [`geom`]        | `Point3`, Euclidean distance, ground-plane box check  |
//! | [`time`]        | `Tick`, `SimTime`, `SimClock`, `SimConfig`            |
//! | [`rng`]         | `SimRng` (deterministic, seedable)                    |
//! | [`motion`]      | `Observation` — the per-tick motion snapshot element  |
//! | [`error`]       | `IxError`, `IxResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geom;
pub mod ids;
pub mod motion;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{IxError, IxResult};
pub use geom::Point3;
pub use ids::VehicleId;
pub use motion::Observation;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, SimTime, Tick};
