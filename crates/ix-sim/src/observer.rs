//! Simulation observer trait for progress reporting and data collection.

use ix_admission::{CompletionRecord, PermissionSet};
use ix_core::{Observation, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, tracked: usize, active: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {tracked} tracked, {active} active");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the scheduler's tracked and
    /// active counts after the update.
    fn on_tick_end(&mut self, _tick: Tick, _tracked: usize, _active: usize) {}

    /// Called whenever the completion drain returned at least one record.
    ///
    /// Each record appears in exactly one callback across the whole run —
    /// this is where a persistence sink appends its rows.
    fn on_completions(&mut self, _tick: Tick, _completed: &[CompletionRecord]) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the tick's raw motion snapshot and permission set.
    fn on_snapshot(
        &mut self,
        _tick:        Tick,
        _observations: &[Observation],
        _permits:      &PermissionSet,
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
