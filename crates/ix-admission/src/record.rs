//! Per-vehicle lifecycle records.

use ix_core::{SimTime, VehicleId};

/// The scheduler's private bookkeeping for one tracked vehicle.
///
/// Created the first tick the vehicle comes within the approach radius,
/// mutated in place every tick after, and destroyed when the motion source
/// stops reporting the vehicle.  Owned exclusively by the scheduler; external
/// code only ever sees the copied-out [`CompletionRecord`].
///
/// Timestamp invariants: `permission_time`, `enter_time`, and `exit_time` are
/// each set at most once and never reset.  Whenever set they satisfy
/// `arrival_time ≤ permission_time ≤ enter_time ≤ exit_time` (non-strict —
/// several events may land on the same tick).
#[derive(Clone, Debug)]
pub struct VehicleRecord {
    pub id: VehicleId,

    /// Insertion sequence number, assigned at registration.  FCFS ties on
    /// `arrival_time` are broken by `seq` so admission order is deterministic
    /// and independent of map iteration order.
    pub seq: u64,

    /// Tick time at which the vehicle first entered the approach zone.
    pub arrival_time: SimTime,

    /// `true` while the vehicle is inside the conflict box.  Held true
    /// through the exit-hysteresis window: it drops back to false only on
    /// the clearance transition, so a vehicle nosing over the box edge is
    /// still treated as occupying.
    pub in_box: bool,

    /// `true` once the vehicle has exited past the hysteresis margin and
    /// released its claim.  Never unset.
    pub cleared: bool,

    /// Set once, at the tick permission was first granted.
    pub permission_time: Option<SimTime>,

    /// Set once, at the tick the vehicle first entered the conflict box.
    pub enter_time: Option<SimTime>,

    /// Set once, at the tick the vehicle was marked cleared.
    pub exit_time: Option<SimTime>,

    /// `true` once this record has been handed to the reporting sink.
    /// Transitions false → true exactly once, in `poll_completed`.
    pub exported: bool,
}

impl VehicleRecord {
    /// A fresh record for a vehicle that just entered the approach zone.
    pub fn new(id: VehicleId, seq: u64, arrival_time: SimTime) -> Self {
        Self {
            id,
            seq,
            arrival_time,
            in_box:          false,
            cleared:         false,
            permission_time: None,
            enter_time:      None,
            exit_time:       None,
            exported:        false,
        }
    }

    /// Copy out the export payload.  Plain data — the caller gets no handle
    /// to scheduler-owned state.
    pub fn completion(&self) -> CompletionRecord {
        CompletionRecord {
            id:              self.id,
            arrival_time:    self.arrival_time,
            permission_time: self.permission_time,
            enter_time:      self.enter_time,
            exit_time:       self.exit_time,
        }
    }
}

/// One finished lifecycle, as handed to the persistence sink.
///
/// The three optional timestamps are genuinely nullable at the boundary: a
/// vehicle can in principle clear without ever having entered the box (it
/// approached, queued, and reversed far enough away), in which case
/// `enter_time` is `None`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompletionRecord {
    pub id:              VehicleId,
    pub arrival_time:    SimTime,
    pub permission_time: Option<SimTime>,
    pub enter_time:      Option<SimTime>,
    pub exit_time:       Option<SimTime>,
}
