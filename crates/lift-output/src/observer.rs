//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_car::CarFleet;
use lift_core::Tick;
use lift_sim::{SimObserver, SimSummary, TickSummary, Trip};

use crate::row::{CarSnapshotRow, TickSummaryRow, TripRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes car snapshots, tick summaries and trips to
/// any [`OutputWriter`] backend.
///
/// Trips are buffered and written once per tick.  Errors from the writer are
/// stored internally because `SimObserver` methods have no return value.
/// After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    trips:      Vec<TripRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            trips:      Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush buffered trips and close the writer.
    ///
    /// `on_sim_end` does this automatically; call it yourself after
    /// `run_ticks` or a run that ended in an error.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.flush_trips()?;
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_trips(&mut self) -> OutputResult<()> {
        if self.trips.is_empty() {
            return Ok(());
        }
        let result = self.writer.write_trips(&self.trips);
        self.trips.clear();
        result
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::error!("output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_trip(&mut self, trip: &Trip) {
        self.trips.push(TripRow::from(trip));
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
        let result = self.flush_trips();
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, fleet: &CarFleet) {
        let rows: Vec<CarSnapshotRow> =
            fleet.iter().map(|car| CarSnapshotRow::from_car(car, tick)).collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _summary: &SimSummary) {
        let result = self.finish();
        self.store_err(result);
    }
}
