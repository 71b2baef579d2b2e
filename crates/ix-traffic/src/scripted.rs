//! Scripted straight-line traffic for tests and demos.
//!
//! Each vehicle spawns after a configurable delay, drives a straight line at
//! constant speed toward (and through) a target point, and despawns after a
//! travel budget is used up — which exercises the scheduler's disappearance
//! eviction.  Braking is modelled as an instant hold: close enough to a full
//! brake at the 20 Hz steps this runs at, and exactly reproducible.

use ix_core::{Observation, Point3, VehicleId};

use crate::{MotionSource, VehicleController};

/// Declarative description of one scripted vehicle.
#[derive(Clone, Debug)]
pub struct VehicleScript {
    pub id: VehicleId,

    /// Where the vehicle appears.
    pub spawn: Point3,

    /// A point it drives toward and past (fixes the heading; the vehicle
    /// does not stop there).
    pub toward: Point3,

    /// Cruise speed, metres per second.
    pub speed_mps: f32,

    /// Simulated seconds before the vehicle appears in snapshots.
    pub spawn_after_secs: f64,

    /// Metres of travel after which the vehicle despawns.
    pub travel_limit_m: f32,
}

impl VehicleScript {
    /// A vehicle that spawns immediately and drives from `spawn` toward
    /// `toward` at urban cruise speed (7 m/s ≈ 25 km/h), despawning after
    /// 120 m.
    pub fn new(id: VehicleId, spawn: Point3, toward: Point3) -> Self {
        Self {
            id,
            spawn,
            toward,
            speed_mps:        7.0,
            spawn_after_secs: 0.0,
            travel_limit_m:   120.0,
        }
    }

    pub fn with_speed(mut self, speed_mps: f32) -> Self {
        self.speed_mps = speed_mps;
        self
    }

    pub fn with_spawn_delay(mut self, secs: f64) -> Self {
        self.spawn_after_secs = secs;
        self
    }

    pub fn with_travel_limit(mut self, metres: f32) -> Self {
        self.travel_limit_m = metres;
        self
    }
}

// ── Runtime state ─────────────────────────────────────────────────────────────

struct ScriptedVehicle {
    script:   VehicleScript,
    position: Point3,
    /// Unit direction on the ground plane, fixed at construction.
    heading:  (f32, f32),
    traveled: f32,
    /// Latched permission signal, reapplied by the host each tick.
    proceed:  bool,
    despawned: bool,
}

impl ScriptedVehicle {
    fn new(script: VehicleScript) -> Self {
        let dx = script.toward.x - script.spawn.x;
        let dy = script.toward.y - script.spawn.y;
        let len = (dx * dx + dy * dy).sqrt();
        let heading = if len > f32::EPSILON { (dx / len, dy / len) } else { (0.0, 0.0) };
        Self {
            position: script.spawn,
            heading,
            traveled: 0.0,
            proceed: true,
            despawned: false,
            script,
        }
    }

    fn live(&self, elapsed: f64) -> bool {
        !self.despawned && elapsed >= self.script.spawn_after_secs
    }
}

// ── ScriptedTraffic ───────────────────────────────────────────────────────────

/// A deterministic kinematic traffic model implementing both boundary traits.
///
/// The host loop is expected to call, per tick: [`snapshot`][MotionSource::snapshot],
/// then [`apply`][VehicleController::apply] for each observed vehicle, then
/// [`advance`][VehicleController::advance].
#[derive(Default)]
pub struct ScriptedTraffic {
    vehicles: Vec<ScriptedVehicle>,
    elapsed:  f64,
}

impl ScriptedTraffic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one scripted vehicle.  Returns `self` for chaining.
    pub fn with_vehicle(mut self, script: VehicleScript) -> Self {
        self.push(script);
        self
    }

    pub fn push(&mut self, script: VehicleScript) {
        self.vehicles.push(ScriptedVehicle::new(script));
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Current position of a live vehicle, `None` once despawned or before
    /// spawn.
    pub fn position(&self, id: VehicleId) -> Option<Point3> {
        self.vehicles
            .iter()
            .find(|v| v.script.id == id && v.live(self.elapsed))
            .map(|v| v.position)
    }
}

impl MotionSource for ScriptedTraffic {
    fn snapshot(&self) -> Vec<Observation> {
        self.vehicles
            .iter()
            .filter(|v| v.live(self.elapsed))
            .map(|v| Observation::new(v.script.id, v.position))
            .collect()
    }
}

impl VehicleController for ScriptedTraffic {
    fn apply(&mut self, id: VehicleId, proceed: bool) {
        if let Some(v) = self.vehicles.iter_mut().find(|v| v.script.id == id) {
            v.proceed = proceed;
        }
    }

    fn advance(&mut self, delta_secs: f64) {
        self.elapsed += delta_secs;
        for v in &mut self.vehicles {
            if !v.live(self.elapsed) || !v.proceed {
                continue;
            }
            let step = v.script.speed_mps * delta_secs as f32;
            v.position.x += v.heading.0 * step;
            v.position.y += v.heading.1 * step;
            v.traveled += step;
            if v.traveled >= v.script.travel_limit_m {
                v.despawned = true;
            }
        }
    }
}
