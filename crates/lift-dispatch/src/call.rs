//! Coalesced hall-call demand for a single floor.

use lift_core::Direction;

/// Riders waiting at one floor, split by direction.
///
/// Repeated calls for the same floor within a tick only bump the counters.
/// Car selection looks at [`has_demand`](Self::has_demand) alone; the
/// direction split is recorded for reporting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingCall {
    pub up:   u32,
    pub down: u32,
}

impl PendingCall {
    pub fn add(&mut self, direction: Direction) {
        match direction {
            Direction::Up   => self.up += 1,
            Direction::Down => self.down += 1,
        }
    }

    #[inline]
    pub fn has_demand(&self) -> bool {
        self.up > 0 || self.down > 0
    }

    #[inline]
    pub fn count(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Up   => self.up,
            Direction::Down => self.down,
        }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.up + self.down
    }
}
