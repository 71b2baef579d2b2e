//! The `AdmissionScheduler` — authoritative state and the per-tick advance.

use rustc_hash::{FxHashMap, FxHashSet};

use ix_core::{Observation, SimTime, VehicleId};

use crate::{CompletionRecord, VehicleRecord, ZoneConfig};

// ── PermissionSet ─────────────────────────────────────────────────────────────

/// Read-only snapshot of the identifiers currently holding permission.
///
/// Returned by [`AdmissionScheduler::permissions`]; absence from the set
/// means "hold".  The set is a copy — it stays valid (and stale) across the
/// next `update`.
#[derive(Clone, Debug, Default)]
pub struct PermissionSet(FxHashSet<VehicleId>);

impl PermissionSet {
    /// `true` iff `id` may proceed this tick.
    #[inline]
    pub fn allows(&self, id: VehicleId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.0.iter().copied()
    }
}

// ── AdmissionScheduler ────────────────────────────────────────────────────────

/// FCFS admission control for a single conflict zone.
///
/// Tracks every vehicle inside the approach radius, grants passage to at
/// most [`ZoneConfig::slots`] of them at a time in arrival order, and emits
/// one completion record per vehicle after it clears the zone.
///
/// Drive it with exactly one [`update`][Self::update] per tick, with
/// monotonically non-decreasing timestamps.  No operation returns an error:
/// malformed input the scheduler can detect (an eviction of an absent ID, a
/// re-removal from the active list) is handled as a defensive no-op, and
/// duplicate IDs within one snapshot are out of contract.
pub struct AdmissionScheduler {
    config: ZoneConfig,

    /// All tracked lifecycle records, keyed by vehicle ID.
    records: FxHashMap<VehicleId, VehicleRecord>,

    /// Identifiers currently holding permission, in admission order.
    /// Length never exceeds `config.slots()`.
    active: Vec<VehicleId>,

    /// Next insertion sequence number (see [`VehicleRecord::seq`]).
    next_seq: u64,
}

impl AdmissionScheduler {
    pub fn new(config: ZoneConfig) -> Self {
        Self {
            config,
            records:  FxHashMap::default(),
            active:   Vec::new(),
            next_seq: 0,
        }
    }

    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    // ── The single state-advance entry point ──────────────────────────────

    /// Advance all lifecycle state by one tick.
    ///
    /// The four phases run in a fixed order; the order is load-bearing.
    /// Eviction must precede assignment so a slot freed by a vanished
    /// vehicle is re-granted the same tick, and clearance must precede
    /// assignment so a slot freed by a crossing vehicle is too.
    pub fn update(&mut self, snapshot: &[Observation], now: SimTime) {
        self.register_arrivals(snapshot, now);
        self.evict_missing(snapshot);
        self.update_occupancy(snapshot, now);
        self.assign_permissions(now);
    }

    /// Phase 1: start tracking every vehicle that is inside the approach
    /// radius and has no record yet.
    fn register_arrivals(&mut self, snapshot: &[Observation], now: SimTime) {
        for obs in snapshot {
            if obs.distance_to(self.config.center) <= self.config.approach_radius
                && !self.records.contains_key(&obs.id)
            {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.records.insert(obs.id, VehicleRecord::new(obs.id, seq, now));
            }
        }
    }

    /// Phase 2: drop every tracked vehicle the motion source stopped
    /// reporting, whatever lifecycle stage it was in.  Set-difference
    /// between consecutive snapshots is the only removal signal there is.
    fn evict_missing(&mut self, snapshot: &[Observation]) {
        let present: FxHashSet<VehicleId> = snapshot.iter().map(|o| o.id).collect();
        self.records.retain(|id, _| present.contains(id));
        self.active.retain(|id| present.contains(id));
    }

    /// Phase 3: box entry/exit transitions for every vehicle still tracked.
    fn update_occupancy(&mut self, snapshot: &[Observation], now: SimTime) {
        for obs in snapshot {
            let Some(record) = self.records.get_mut(&obs.id) else {
                continue;
            };

            let in_box = obs.position.within_box_xy(
                self.config.center,
                self.config.box_half_extent,
            );

            if in_box && !record.in_box {
                record.in_box = true;
                if record.enter_time.is_none() {
                    record.enter_time = Some(now);
                }
            }

            // Exit needs the hysteresis margin, not just leaving the box:
            // a vehicle nosing out over the box edge while queueing would
            // otherwise be cleared prematurely.
            if record.in_box
                && !in_box
                && obs.distance_to(self.config.center) > self.config.exit_radius()
            {
                record.in_box = false;
                record.cleared = true;
                if record.exit_time.is_none() {
                    record.exit_time = Some(now);
                }
                if let Some(pos) = self.active.iter().position(|&id| id == obs.id) {
                    self.active.remove(pos);
                }
            }
        }
    }

    /// Phase 4: fill free slots from the waiting set, oldest arrival first.
    ///
    /// Ties on `arrival_time` fall back to the insertion sequence, so
    /// admission order never depends on snapshot or map iteration order.
    fn assign_permissions(&mut self, now: SimTime) {
        if self.active.len() >= self.config.slots() {
            return;
        }

        let mut waiting: Vec<(SimTime, u64, VehicleId)> = self
            .records
            .values()
            .filter(|r| !r.cleared && !self.active.contains(&r.id))
            .map(|r| (r.arrival_time, r.seq, r.id))
            .collect();
        waiting.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        for (_, _, id) in waiting {
            if self.active.len() >= self.config.slots() {
                break;
            }
            self.active.push(id);
            if let Some(record) = self.records.get_mut(&id) {
                if record.permission_time.is_none() {
                    record.permission_time = Some(now);
                }
            }
        }
    }

    // ── Read side ─────────────────────────────────────────────────────────

    /// Snapshot of the identifiers currently permitted to proceed.
    pub fn permissions(&self) -> PermissionSet {
        PermissionSet(self.active.iter().copied().collect())
    }

    /// The active set in admission order.
    pub fn active(&self) -> &[VehicleId] {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of vehicles currently tracked (any lifecycle stage).
    pub fn tracked_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_tracked(&self, id: VehicleId) -> bool {
        self.records.contains_key(&id)
    }

    /// The live record for `id`, if tracked.  Read-only; mainly for
    /// observers and tests.
    pub fn record(&self, id: VehicleId) -> Option<&VehicleRecord> {
        self.records.get(&id)
    }

    // ── Drain side ────────────────────────────────────────────────────────

    /// Drain every cleared-but-unreported lifecycle.
    ///
    /// Each record is returned by exactly one call over its lifetime; the
    /// `exported` flag flips as a side effect.  Order is unspecified.
    pub fn poll_completed(&mut self) -> Vec<CompletionRecord> {
        let mut finished = Vec::new();
        for record in self.records.values_mut() {
            if record.cleared && !record.exported {
                record.exported = true;
                finished.push(record.completion());
            }
        }
        finished
    }
}
