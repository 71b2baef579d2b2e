//! `ix-admission` — the admission-control scheduler for the `rust_ix`
//! intersection framework.
//!
//! One physical patch of road (the conflict zone, "the box") is contended by
//! an unbounded set of vehicles that arrive, cross, and leave over time.
//! [`AdmissionScheduler`] observes periodic position snapshots, tracks each
//! vehicle through approach → wait → permission → occupancy → clearance, and
//! grants passage first-come-first-served up to a bounded number of
//! concurrent occupants (default: one).
//!
//! # Per-tick contract
//!
//! ```text
//! scheduler.update(&snapshot, now);        // single state-advance entry point
//! let permits = scheduler.permissions();   // who may proceed this tick
//! let done    = scheduler.poll_completed(); // drain finished lifecycles, once each
//! ```
//!
//! The scheduler holds no reference to the motion source or the vehicle
//! controllers; all coupling is through those three calls, which makes it
//! unit-testable with synthetic snapshots.
//!
//! # Concurrency model
//!
//! Strictly single-threaded: one cooperative loop calls `update` per tick and
//! reads the results before the next tick.  `&mut self` enforces the
//! one-writer discipline; there is no internal locking.  A multi-threaded
//! host must wrap the whole per-tick sequence in one critical section.

pub mod config;
pub mod record;
pub mod scheduler;


pub use config::{EXIT_HYSTERESIS, ZoneConfig};
pub use record::{CompletionRecord, VehicleRecord};
pub use scheduler::{AdmissionScheduler, PermissionSet};
