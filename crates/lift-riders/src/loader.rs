//! CSV rider manifest loader.
//!
//! # CSV format
//!
//! One row per rider, in any order.  Rider ids are assigned in file order.
//!
//! ```csv
//! origin,destination,arrival_tick
//! 0,7,0
//! 7,0,0
//! 3,12,4
//! ```
//!
//! Every floor must lie in `[0, floor_count)` and origin must differ from
//! destination; the first offending row is reported by its 1-based data row
//! number.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, RiderId, Tick};

use crate::{Rider, RiderError, RiderResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ManifestRecord {
    origin:       u32,
    destination:  u32,
    arrival_tick: u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load riders from a CSV manifest file.
pub fn load_riders_csv(path: &Path, floor_count: u32) -> RiderResult<Vec<Rider>> {
    let file = std::fs::File::open(path).map_err(lift_core::LiftError::Io)?;
    load_riders_reader(file, floor_count)
}

/// Like [`load_riders_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for manifests embedded
/// in a binary.
pub fn load_riders_reader<R: Read>(reader: R, floor_count: u32) -> RiderResult<Vec<Rider>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut riders = Vec::new();

    for (i, result) in csv_reader.deserialize::<ManifestRecord>().enumerate() {
        let row = i + 1;
        let record = result?;

        for floor in [record.origin, record.destination] {
            if floor >= floor_count {
                return Err(RiderError::Manifest {
                    row,
                    message: format!("floor {floor} outside building of {floor_count} floors"),
                });
            }
        }

        let rider = Rider::new(
            RiderId(i as u32),
            Floor(record.origin),
            Floor(record.destination),
            Tick(record.arrival_tick),
        )
        .map_err(|e| RiderError::Manifest { row, message: e.to_string() })?;
        riders.push(rider);
    }

    log::debug!("loaded {} riders from manifest", riders.len());
    Ok(riders)
}
