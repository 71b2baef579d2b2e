//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `vehicle_completions.parquet`
//! - `tick_summaries.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{CompletionRow, OutputResult, TickSummaryRow};

fn completion_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("vehicle_id",      DataType::UInt32,  false),
        Field::new("arrival_secs",    DataType::Float64, false),
        Field::new("permission_secs", DataType::Float64, true),
        Field::new("enter_secs",      DataType::Float64, true),
        Field::new("exit_secs",       DataType::Float64, true),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",          DataType::UInt64,  false),
        Field::new("sim_time_secs", DataType::Float64, false),
        Field::new("tracked",       DataType::UInt64,  false),
        Field::new("active",        DataType::UInt64,  false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    completions:  Option<ArrowWriter<File>>,
    summaries:    Option<ArrowWriter<File>>,
    comp_schema:  Arc<Schema>,
    summ_schema:  Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let comp_schema = completion_schema();
        let summ_schema = summary_schema();

        let comp_file = File::create(dir.join("vehicle_completions.parquet"))?;
        let completions = ArrowWriter::try_new(
            comp_file,
            Arc::clone(&comp_schema),
            Some(snappy_props()),
        )?;

        let summ_file = File::create(dir.join("tick_summaries.parquet"))?;
        let summaries = ArrowWriter::try_new(
            summ_file,
            Arc::clone(&summ_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            completions: Some(completions),
            summaries:   Some(summaries),
            comp_schema,
            summ_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_completions(&mut self, rows: &[CompletionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.completions.as_mut() else {
            return Ok(());
        };

        let mut vehicle_ids = UInt32Builder::new();
        let mut arrivals    = Float64Builder::new();
        let mut permissions = Float64Builder::new();
        let mut enters      = Float64Builder::new();
        let mut exits       = Float64Builder::new();

        for row in rows {
            vehicle_ids.append_value(row.vehicle_id);
            arrivals.append_value(row.arrival_secs);
            permissions.append_option(row.permission_secs);
            enters.append_option(row.enter_secs);
            exits.append_option(row.exit_secs);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.comp_schema),
            vec![
                Arc::new(vehicle_ids.finish()),
                Arc::new(arrivals.finish()),
                Arc::new(permissions.finish()),
                Arc::new(enters.finish()),
                Arc::new(exits.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut ticks     = UInt64Builder::new();
        let mut sim_times = Float64Builder::new();
        let mut tracked   = UInt64Builder::new();
        let mut active    = UInt64Builder::new();

        ticks.append_value(row.tick);
        sim_times.append_value(row.sim_time_secs);
        tracked.append_value(row.tracked);
        active.append_value(row.active);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summ_schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(sim_times.finish()),
                Arc::new(tracked.finish()),
                Arc::new(active.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(writer) = self.completions.take() {
            writer.close()?;
        }
        if let Some(writer) = self.summaries.take() {
            writer.close()?;
        }
        Ok(())
    }
}
