//! `lift-output` — simulation output writers for the rust_lift simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                            |
//! |-----------|---------|----------------------------------------------------------|
//! | *(none)*  | CSV     | `car_snapshots.csv`, `tick_summaries.csv`, `trips.csv`   |
//! | `sqlite`  | SQLite  | `output.db`                                              |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CarSnapshotRow, TickSummaryRow, TripRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
