//! The two traits at the scheduler/world seam.

use ix_core::{Observation, VehicleId};

/// Supplies the per-tick motion snapshot.
///
/// This is the explicit polling contract the scheduler's presence detection
/// is built on: there is no register/deregister protocol, only the set of
/// vehicles reported each tick.  Implementations must keep IDs stable for
/// the same physical vehicle and unique within one snapshot.
pub trait MotionSource {
    /// All currently live vehicles.  Order is irrelevant.
    fn snapshot(&self) -> Vec<Observation>;
}

/// Consumes the per-tick permission signal.
///
/// How "hold" is realized (full brake, coasting stop, a planner constraint)
/// is the implementation's business; the scheduler only supplies the
/// boolean.
pub trait VehicleController {
    /// Set whether `id` may proceed this tick.  Unknown IDs are ignored.
    fn apply(&mut self, id: VehicleId, proceed: bool);

    /// Advance the physical state by one fixed step of `delta_secs`.
    fn advance(&mut self, delta_secs: f64);
}
