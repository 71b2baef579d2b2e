//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_completions.csv`
//! - `tick_summaries.csv`
//!
//! Nullable timing columns are written as empty cells.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CompletionRow, OutputResult, TickSummaryRow};

fn opt_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    completions: Writer<File>,
    summaries:   Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut completions = Writer::from_path(dir.join("vehicle_completions.csv"))?;
        completions.write_record([
            "vehicle_id",
            "arrival_secs",
            "permission_secs",
            "enter_secs",
            "exit_secs",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "sim_time_secs", "tracked", "active"])?;

        Ok(Self {
            completions,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_completions(&mut self, rows: &[CompletionRow]) -> OutputResult<()> {
        for row in rows {
            self.completions.write_record(&[
                row.vehicle_id.to_string(),
                row.arrival_secs.to_string(),
                opt_cell(row.permission_secs),
                opt_cell(row.enter_secs),
                opt_cell(row.exit_secs),
            ])?;
        }
        // Completions are rare and final per vehicle; flush so a crashed run
        // still has every finished lifecycle on disk.
        self.completions.flush()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.sim_time_secs.to_string(),
            row.tracked.to_string(),
            row.active.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.completions.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
