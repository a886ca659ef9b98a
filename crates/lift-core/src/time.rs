//! Simulation time model and run configuration.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is the time a
//! car needs to travel one floor; there is no mapping to wall-clock time.

use std::fmt;

use crate::{LiftError, LiftResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from CLI flags or loaded from a TOML file by the
/// application crate and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of elevator cars.  Must be at least 1.
    pub car_count: usize,

    /// Number of floors; valid floors are `0..floor_count`.  Must be at least 2.
    pub floor_count: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Give up after this many ticks if riders are still in the system.
    pub max_ticks: u64,

    /// Emit a car snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Waiting riders re-register their hall call every tick until they
    /// board.  When `false` a call is registered only on the rider's arrival
    /// tick.
    pub relatch_calls: bool,

    /// A car that reaches a floor to serve a pickup takes every rider waiting
    /// there, whatever their direction.  When `false` only riders heading the
    /// car's way (or any rider, if the car is idle) board.
    pub board_on_pickup: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            car_count:             16,
            floor_count:           13,
            seed:                  42,
            max_ticks:             100_000,
            output_interval_ticks: 1,
            relatch_calls:         true,
            board_on_pickup:       true,
        }
    }
}

impl SimConfig {
    /// The tick at which a still-running simulation is abandoned.
    #[inline]
    pub fn tick_limit(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// Check the structural preconditions every run depends on.
    pub fn validate(&self) -> LiftResult<()> {
        if self.car_count == 0 {
            return Err(LiftError::Config(
                "car_count must be at least 1: the dispatcher has no car to assign calls to".into(),
            ));
        }
        if self.floor_count < 2 {
            return Err(LiftError::Config(format!(
                "floor_count must be at least 2, got {}",
                self.floor_count
            )));
        }
        Ok(())
    }

    /// Error unless `floor` exists in the configured building.
    pub fn check_floor(&self, floor: crate::Floor) -> LiftResult<()> {
        if floor.in_building(self.floor_count) {
            Ok(())
        } else {
            Err(LiftError::FloorOutOfRange { floor, floor_count: self.floor_count })
        }
    }
}
