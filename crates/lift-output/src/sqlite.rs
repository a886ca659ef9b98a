//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `car_snapshots`, `tick_summaries` and `trips`.

use std::path::Path;

use rusqlite::Connection;

use crate::{CarSnapshotRow, OutputResult, TickSummaryRow, TripRow};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS car_snapshots (
                 car_id     INTEGER NOT NULL,
                 tick       INTEGER NOT NULL,
                 floor      INTEGER NOT NULL,
                 next_stop  INTEGER NOT NULL,
                 passengers INTEGER NOT NULL,
                 pickups    INTEGER NOT NULL,
                 stops      INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick            INTEGER PRIMARY KEY,
                 arrivals        INTEGER NOT NULL,
                 assignments     INTEGER NOT NULL,
                 waiting         INTEGER NOT NULL,
                 aboard          INTEGER NOT NULL,
                 delivered       INTEGER NOT NULL,
                 delivered_total INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS trips (
                 rider_id       INTEGER PRIMARY KEY,
                 origin         INTEGER NOT NULL,
                 destination    INTEGER NOT NULL,
                 car_id         INTEGER NOT NULL,
                 arrival_tick   INTEGER NOT NULL,
                 board_tick     INTEGER NOT NULL,
                 delivered_tick INTEGER NOT NULL,
                 wait_ticks     INTEGER NOT NULL,
                 ride_ticks     INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO car_snapshots \
                 (car_id, tick, floor, next_stop, passengers, pickups, stops) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.car_id,
                    row.tick,
                    row.floor,
                    row.next_stop,
                    row.passengers,
                    row.pickups,
                    row.stops,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (tick, arrivals, assignments, waiting, aboard, delivered, delivered_total) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.tick,
                row.arrivals,
                row.assignments,
                row.waiting,
                row.aboard,
                row.delivered,
                row.delivered_total,
            ],
        )?;
        Ok(())
    }

    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trips \
                 (rider_id, origin, destination, car_id, arrival_tick, board_tick, \
                  delivered_tick, wait_ticks, ride_ticks) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.rider_id,
                    row.origin,
                    row.destination,
                    row.car_id,
                    row.arrival_tick,
                    row.board_tick,
                    row.delivered_tick,
                    row.wait_ticks,
                    row.ride_ticks,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
