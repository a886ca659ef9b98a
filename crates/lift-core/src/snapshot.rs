//! The per-tick car report consumed by the dispatcher.

use crate::{Direction, Floor};

/// Immutable `(current_floor, next_stop)` value a car reports once per tick.
///
/// The dispatcher stores a copy per car and replaces it wholesale on the next
/// update; it never holds a reference back into the car.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSnapshot {
    pub current_floor: Floor,
    pub next_stop:     Floor,
}

impl CarSnapshot {
    #[inline]
    pub fn new(current_floor: Floor, next_stop: Floor) -> Self {
        Self { current_floor, next_stop }
    }

    /// A car is idle when it has nowhere to go.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current_floor == self.next_stop
    }

    /// Direction of travel toward `next_stop`; `None` while idle.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.current_floor, self.next_stop)
    }
}
