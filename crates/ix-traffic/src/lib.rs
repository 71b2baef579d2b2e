//! `ix-traffic` — the world-facing collaborators of the admission scheduler.
//!
//! The scheduler core never touches vehicles directly; it consumes position
//! snapshots and produces a permission signal.  This crate defines both
//! sides of that boundary as traits and ships one synthetic implementation:
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`source`]   | [`MotionSource`], [`VehicleController`] traits          |
//! | [`scripted`] | [`ScriptedTraffic`], [`VehicleScript`] — straight-line kinematic vehicles |
//!
//! A production deployment would implement the two traits over a driving
//! simulator or a V2X feed; `ScriptedTraffic` exists so the whole stack runs
//! (and is tested) end-to-end without one.

pub mod scripted;
pub mod source;

#[cfg(test)]
mod tests;

pub use scripted::{ScriptedTraffic, VehicleScript};
pub use source::{MotionSource, VehicleController};
