//! The motion-snapshot boundary type.
//!
//! The admission scheduler never talks to a world or a physics engine; it is
//! fed a flat snapshot of `Observation`s once per tick.  Presence in the
//! snapshot IS the liveness signal: a vehicle absent from one tick's
//! snapshot is treated as having left the simulation.  This polling contract
//! replaces any explicit register/deregister protocol.

use crate::{Point3, VehicleId};

/// One vehicle as seen by the motion source at a single tick.
///
/// Contract: within one snapshot every `id` is unique, and the same physical
/// vehicle keeps the same `id` across ticks.  Snapshot order is irrelevant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    pub id:       VehicleId,
    pub position: Point3,
}

impl Observation {
    #[inline]
    pub fn new(id: VehicleId, position: Point3) -> Self {
        Self { id, position }
    }

    /// Distance from this vehicle to an arbitrary point, metres.
    #[inline]
    pub fn distance_to(&self, point: Point3) -> f32 {
        self.position.distance_to(point)
    }
}
