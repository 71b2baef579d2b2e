//! Tests for output rows, backends, and the sim-to-writer bridge.

use ix_admission::CompletionRecord;
use ix_core::{SimTime, VehicleId};

use crate::{CompletionRow, TickSummaryRow};

fn sample_record() -> CompletionRecord {
    CompletionRecord {
        id:              VehicleId(7),
        arrival_time:    SimTime(1.0),
        permission_time: Some(SimTime(1.5)),
        enter_time:      Some(SimTime(2.0)),
        exit_time:       Some(SimTime(3.0)),
    }
}

mod rows {
    use super::*;

    #[test]
    fn completion_row_from_record() {
        let row = CompletionRow::from(&sample_record());
        assert_eq!(row.vehicle_id, 7);
        assert_eq!(row.arrival_secs, 1.0);
        assert_eq!(row.permission_secs, Some(1.5));
        assert_eq!(row.enter_secs, Some(2.0));
        assert_eq!(row.exit_secs, Some(3.0));
    }

    #[test]
    fn nullable_fields_survive_conversion() {
        let rec = CompletionRecord {
            permission_time: None,
            enter_time:      None,
            exit_time:       None,
            ..sample_record()
        };
        let row = CompletionRow::from(&rec);
        assert_eq!(row.permission_secs, None);
        assert_eq!(row.enter_secs, None);
        assert_eq!(row.exit_secs, None);
    }
}

mod csv_backend {
    use super::*;
    use crate::{CsvWriter, OutputWriter};

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();

        writer.write_completions(&[CompletionRow::from(&sample_record())]).unwrap();
        writer
            .write_tick_summary(&TickSummaryRow {
                tick: 0,
                sim_time_secs: 0.0,
                tracked: 2,
                active: 1,
            })
            .unwrap();
        writer.finish().unwrap();

        let completions =
            std::fs::read_to_string(dir.path().join("vehicle_completions.csv")).unwrap();
        let mut lines = completions.lines();
        assert_eq!(
            lines.next().unwrap(),
            "vehicle_id,arrival_secs,permission_secs,enter_secs,exit_secs"
        );
        assert_eq!(lines.next().unwrap(), "7,1,1.5,2,3");

        let summaries = std::fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert!(summaries.starts_with("tick,sim_time_secs,tracked,active\n"));
        assert!(summaries.contains("0,0,2,1"));
    }

    #[test]
    fn null_columns_are_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();

        let rec = CompletionRecord {
            permission_time: None,
            enter_time:      None,
            exit_time:       None,
            ..sample_record()
        };
        writer.write_completions(&[CompletionRow::from(&rec)]).unwrap();
        writer.finish().unwrap();

        let contents =
            std::fs::read_to_string(dir.path().join("vehicle_completions.csv")).unwrap();
        assert!(contents.contains("7,1,,,"));
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::{OutputWriter, SqliteWriter};

    #[test]
    fn completions_round_trip_with_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = SqliteWriter::new(dir.path()).unwrap();

        let rec = CompletionRecord { enter_time: None, ..sample_record() };
        writer.write_completions(&[CompletionRow::from(&rec)]).unwrap();
        writer.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (id, arrival, enter): (u32, f64, Option<f64>) = conn
            .query_row(
                "SELECT vehicle_id, arrival_secs, enter_secs FROM vehicle_completions",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(id, 7);
        assert_eq!(arrival, 1.0);
        assert_eq!(enter, None);
    }
}

// ── End-to-end: sim → observer → CSV files ────────────────────────────────────

mod bridge {
    use super::*;
    use ix_admission::ZoneConfig;
    use ix_core::{Point3, SimConfig};
    use ix_sim::SimBuilder;
    use ix_traffic::{ScriptedTraffic, VehicleScript};

    use crate::{CsvWriter, SimOutputObserver};

    #[test]
    fn full_run_writes_one_completion_row() {
        let dir = tempfile::tempdir().unwrap();

        let config = SimConfig {
            delta_secs: 0.05,
            total_ticks: 600,
            seed: 1,
            output_interval_ticks: 0,
        };
        let traffic = ScriptedTraffic::new().with_vehicle(
            VehicleScript::new(
                VehicleId(1),
                Point3::new(-30.0, 0.0, 0.0),
                Point3::new(30.0, 0.0, 0.0),
            )
            .with_speed(10.0),
        );
        let zone = ZoneConfig::new(Point3::new(0.0, 0.0, 0.0));
        let mut sim = SimBuilder::new(config.clone(), zone, traffic).build().unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut observer = SimOutputObserver::new(writer, &config);
        sim.run(&mut observer).unwrap();
        assert!(observer.take_error().is_none());

        let completions =
            std::fs::read_to_string(dir.path().join("vehicle_completions.csv")).unwrap();
        // Header plus exactly one finished vehicle.
        assert_eq!(completions.lines().count(), 2);
        assert!(completions.lines().nth(1).unwrap().starts_with("1,"));

        let summaries = std::fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        // Header plus one row per tick.
        assert_eq!(summaries.lines().count() as u64, 1 + config.total_ticks);
    }
}
