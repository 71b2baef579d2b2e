//! `ix-sim` — tick loop orchestrator for the rust_ix framework.
//!
//! # Per-tick control flow
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Snapshot  — poll the motion source for all live vehicles.
//!   ② Update    — AdmissionScheduler::update (register, evict, clear, admit).
//!   ③ Gate      — read permissions; hold every tracked-but-unpermitted
//!                 vehicle, let everyone else proceed; advance the world.
//!   ④ Drain     — poll_completed; route finished lifecycles to observers.
//! ```
//!
//! The scheduler never sees the traffic model and the traffic model never
//! sees the scheduler; `Sim` is the only place the two meet, which keeps the
//! whole sequence one single-threaded critical section per tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ix_admission::ZoneConfig;
//! use ix_core::{Point3, SimConfig};
//! use ix_sim::{NoopObserver, SimBuilder};
//! use ix_traffic::{ScriptedTraffic, VehicleScript};
//!
//! let traffic = ScriptedTraffic::new().with_vehicle(script);
//! let mut sim = SimBuilder::new(SimConfig::default(), ZoneConfig::new(center), traffic)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
