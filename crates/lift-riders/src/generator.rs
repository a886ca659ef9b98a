//! Seeded random rider generation.
//!
//! Riders arrive in fixed-size batches: with `riders_per_tick = 6`, riders
//! 0–5 appear on tick 0, riders 6–11 on tick 1, and so on.  Origin and
//! destination are drawn uniformly from the building, never equal.

use serde::{Deserialize, Serialize};

use lift_core::{Floor, RiderId, SimRng, Tick};

use crate::{Rider, RiderError, RiderResult};

/// How many riders to generate and how fast they arrive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub rider_count:     usize,
    pub riders_per_tick: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rider_count:     1_000,
            riders_per_tick: 6,
        }
    }
}

/// Produces a reproducible rider population from a seed.
pub struct RiderGenerator {
    config:      GeneratorConfig,
    floor_count: u32,
    rng:         SimRng,
    next_id:     u32,
}

impl RiderGenerator {
    /// # Errors
    ///
    /// [`RiderError::Config`] if `floor_count < 2` (no rider could travel) or
    /// `riders_per_tick == 0`.
    pub fn new(config: GeneratorConfig, floor_count: u32, seed: u64) -> RiderResult<Self> {
        if floor_count < 2 {
            return Err(RiderError::Config(format!(
                "riders need at least 2 floors, got {floor_count}"
            )));
        }
        if config.riders_per_tick == 0 {
            return Err(RiderError::Config("riders_per_tick must be at least 1".into()));
        }
        Ok(Self {
            config,
            floor_count,
            rng: SimRng::new(seed),
            next_id: 0,
        })
    }

    /// Draw the next rider; its arrival tick follows from its sequence number.
    pub fn next_rider(&mut self) -> Rider {
        let id = self.next_id;
        self.next_id += 1;

        let origin = self.rng.gen_range(0..self.floor_count);
        // Draw from the other floors only: skip over `origin`.
        let mut destination = self.rng.gen_range(0..self.floor_count - 1);
        if destination >= origin {
            destination += 1;
        }

        Rider {
            id:           RiderId(id),
            origin:       Floor(origin),
            destination:  Floor(destination),
            arrival_tick: Tick(id as u64 / self.config.riders_per_tick as u64),
        }
    }

    /// The full population described by the config.
    pub fn generate(&mut self) -> Vec<Rider> {
        let riders: Vec<Rider> = (0..self.config.rider_count).map(|_| self.next_rider()).collect();
        log::debug!(
            "generated {} riders over {} floors, {} per tick",
            riders.len(),
            self.floor_count,
            self.config.riders_per_tick
        );
        riders
    }
}
