//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CompletionRow, OutputResult, TickSummaryRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// Writers are driven through [`SimOutputObserver`][crate::SimOutputObserver],
/// whose observer methods have no return value — errors are stored there and
/// retrieved after the run with `take_error`.
pub trait OutputWriter {
    /// Write a batch of completed lifecycles.
    fn write_completions(&mut self, rows: &[CompletionRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
