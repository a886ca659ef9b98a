//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `car_snapshots.csv`
//! - `tick_summaries.csv`
//! - `trips.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{CarSnapshotRow, OutputResult, TickSummaryRow, TripRow};
use crate::writer::OutputWriter;

pub const SNAPSHOT_HEADER: [&str; 7] =
    ["car_id", "tick", "floor", "next_stop", "passengers", "pickups", "stops"];

pub const SUMMARY_HEADER: [&str; 7] = [
    "tick", "arrivals", "assignments", "waiting", "aboard", "delivered", "delivered_total",
];

pub const TRIP_HEADER: [&str; 9] = [
    "rider_id", "origin", "destination", "car_id", "arrival_tick", "board_tick",
    "delivered_tick", "wait_ticks", "ride_ticks",
];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    trips:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("car_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record(TRIP_HEADER)?;

        Ok(Self {
            snapshots,
            summaries,
            trips,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.car_id.to_string(),
                row.tick.to_string(),
                row.floor.to_string(),
                row.next_stop.to_string(),
                row.passengers.to_string(),
                row.pickups.to_string(),
                row.stops.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.arrivals.to_string(),
            row.assignments.to_string(),
            row.waiting.to_string(),
            row.aboard.to_string(),
            row.delivered.to_string(),
            row.delivered_total.to_string(),
        ])?;
        Ok(())
    }

    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        for row in rows {
            self.trips.write_record(&[
                row.rider_id.to_string(),
                row.origin.to_string(),
                row.destination.to_string(),
                row.car_id.to_string(),
                row.arrival_tick.to_string(),
                row.board_tick.to_string(),
                row.delivered_tick.to_string(),
                row.wait_ticks.to_string(),
                row.ride_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.trips.flush()?;
        Ok(())
    }
}
