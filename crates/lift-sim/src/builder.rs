//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeMap;

use lift_car::CarFleet;
use lift_core::{Floor, SimConfig, Tick};
use lift_dispatch::Dispatcher;
use lift_riders::{ArrivalQueue, GeneratorConfig, Lobby, Rider, RiderGenerator};

use crate::sim::RunStats;
use crate::{Sim, SimError, SimResult};

/// Where the rider population comes from.
enum RiderSource {
    Given(Vec<Rider>),
    Generated(GeneratorConfig),
}

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                  |
/// |-------------------------|------------------------------------------|
/// | `.riders(v)`            | No riders: the run finishes at tick 0    |
/// | `.generate_riders(g)`   | (alternative to `.riders`)               |
/// | `.initial_floors(v)`    | Every car at the lobby                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .generate_riders(GeneratorConfig::default())
///     .build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    riders: RiderSource,
    floors: Option<Vec<Floor>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            riders: RiderSource::Given(Vec::new()),
            floors: None,
        }
    }

    /// Use an explicit rider population (e.g. from a CSV manifest).
    pub fn riders(mut self, riders: Vec<Rider>) -> Self {
        self.riders = RiderSource::Given(riders);
        self
    }

    /// Generate riders at build time, seeded from `config.seed`.
    pub fn generate_riders(mut self, generator: GeneratorConfig) -> Self {
        self.riders = RiderSource::Generated(generator);
        self
    }

    /// Starting floor of each car.  Must be length `car_count`.
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        // ── Cars ──────────────────────────────────────────────────────────
        let fleet = match self.floors {
            Some(floors) => {
                if floors.len() != config.car_count {
                    return Err(SimError::CarCountMismatch {
                        expected: config.car_count,
                        got:      floors.len(),
                    });
                }
                for &floor in &floors {
                    config.check_floor(floor)?;
                }
                CarFleet::with_floors(&floors)
            }
            None => CarFleet::new(config.car_count),
        };

        // ── Riders ────────────────────────────────────────────────────────
        let riders = match self.riders {
            RiderSource::Given(riders) => riders,
            RiderSource::Generated(generator) => {
                RiderGenerator::new(generator, config.floor_count, config.seed)?.generate()
            }
        };
        for rider in &riders {
            config.check_floor(rider.origin)?;
            config.check_floor(rider.destination)?;
            if rider.origin == rider.destination {
                return Err(SimError::Config(format!(
                    "rider {} starts and ends on {}",
                    rider.id, rider.origin
                )));
            }
        }
        let rider_count = riders.len();

        log::info!(
            "building simulation: {} cars, {} floors, {} riders",
            config.car_count,
            config.floor_count,
            rider_count
        );

        Ok(Sim {
            tick:       Tick::ZERO,
            lobby:      Lobby::new(config.floor_count),
            manifests:  vec![BTreeMap::new(); config.car_count],
            dispatcher: Dispatcher::new(),
            arrivals:   ArrivalQueue::from_riders(riders),
            stats:      RunStats { riders: rider_count, ..RunStats::default() },
            fleet,
            config,
        })
    }
}
