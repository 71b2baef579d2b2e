//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ix_admission::CompletionRecord;
use ix_core::{SimConfig, Tick};
use ix_sim::SimObserver;

use crate::row::{CompletionRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes vehicle completions and tick summaries to
/// any [`OutputWriter`] backend (CSV, SQLite, Parquet, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    delta_secs: f64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for tick-to-
    /// seconds conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            delta_secs: config.delta_secs,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn sim_time(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.delta_secs
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, tracked: usize, active: usize) {
        let row = TickSummaryRow {
            tick:          tick.0,
            sim_time_secs: self.sim_time(tick),
            tracked:       tracked as u64,
            active:        active as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_completions(&mut self, _tick: Tick, completed: &[CompletionRecord]) {
        let rows: Vec<CompletionRow> = completed.iter().map(CompletionRow::from).collect();
        let result = self.writer.write_completions(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
