//! The `Sim` struct and its tick loop.

use ix_admission::AdmissionScheduler;
use ix_core::{SimClock, SimConfig};
use ix_traffic::{MotionSource, VehicleController};

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<T>` couples one traffic model (anything that is both a
/// [`MotionSource`] and a [`VehicleController`]) to one
/// [`AdmissionScheduler`] and drives the four-phase tick loop:
///
/// 1. **Snapshot**: poll the motion source.
/// 2. **Update**: advance all lifecycle state in the scheduler.
/// 3. **Gate**: apply the permission signal per observed vehicle, then step
///    the world by one fixed delta.
/// 4. **Drain**: hand newly completed lifecycles to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<T: MotionSource + VehicleController> {
    /// Global configuration (total ticks, seed, tick delta, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to seconds.
    pub clock: SimClock,

    /// The world: produces snapshots, consumes permission signals.
    pub traffic: T,

    /// The admission-control core.
    pub scheduler: AdmissionScheduler,
}

impl<T: MotionSource + VehicleController> Sim<T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.process_tick(observer);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(observer);
            self.clock.advance();
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let tick = self.clock.current_tick;
        let now = self.clock.now();
        observer.on_tick_start(tick);

        // ── Phase 1: motion snapshot ──────────────────────────────────────
        let snapshot = self.traffic.snapshot();

        // ── Phase 2: scheduler update ─────────────────────────────────────
        self.scheduler.update(&snapshot, now);
        let permits = self.scheduler.permissions();

        // ── Phase 3: gate and step the world ──────────────────────────────
        //
        // Only a vehicle that is tracked AND still mid-lifecycle is subject
        // to the permission signal.  Untracked vehicles (outside the
        // approach radius) and cleared vehicles drive freely — holding a
        // vehicle that already crossed would block the road forever.
        for obs in &snapshot {
            let proceed = match self.scheduler.record(obs.id) {
                None => true,
                Some(r) if r.cleared => true,
                Some(_) => permits.allows(obs.id),
            };
            self.traffic.apply(obs.id, proceed);
        }
        self.traffic.advance(self.config.delta_secs);

        // ── Phase 4: drain completions ────────────────────────────────────
        let completed = self.scheduler.poll_completed();
        if !completed.is_empty() {
            observer.on_completions(tick, &completed);
        }

        observer.on_tick_end(
            tick,
            self.scheduler.tracked_count(),
            self.scheduler.active_count(),
        );
        if self.config.output_interval_ticks > 0
            && tick.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(tick, &snapshot, &permits);
        }
    }
}
