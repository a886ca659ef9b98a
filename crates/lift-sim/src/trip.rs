//! Completed journeys and per-tick / per-run tallies.

use lift_core::{CarId, Floor, RiderId, Tick};

// ── Trip ─────────────────────────────────────────────────────────────────────

/// One rider's completed journey, reported when they alight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub rider:          RiderId,
    pub origin:         Floor,
    pub destination:    Floor,
    pub car:            CarId,
    pub arrival_tick:   Tick,
    pub board_tick:     Tick,
    pub delivered_tick: Tick,
}

impl Trip {
    /// Ticks spent in the lobby before boarding.
    #[inline]
    pub fn wait_ticks(&self) -> u64 {
        self.board_tick.since(self.arrival_tick)
    }

    /// Ticks spent inside the car.
    #[inline]
    pub fn ride_ticks(&self) -> u64 {
        self.delivered_tick.since(self.board_tick)
    }
}

// ── TickSummary ──────────────────────────────────────────────────────────────

/// What happened during one tick, handed to
/// [`SimObserver::on_tick_end`][crate::SimObserver::on_tick_end].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick:            Tick,
    /// Riders that entered a lobby this tick.
    pub arrivals:        usize,
    /// Assignments the dispatcher produced this tick.
    pub assignments:     usize,
    /// Riders still waiting after boarding.
    pub waiting:         usize,
    /// Riders inside cars after boarding.
    pub aboard:          u64,
    /// Riders that alighted this tick.
    pub delivered:       usize,
    pub delivered_total: u64,
}

// ── SimSummary ───────────────────────────────────────────────────────────────

/// Totals for a finished run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSummary {
    /// Number of ticks processed.
    pub ticks:           u64,
    pub riders:          usize,
    pub delivered:       u64,
    pub mean_wait_ticks: f64,
    pub mean_ride_ticks: f64,
    pub max_wait_ticks:  u64,
}
