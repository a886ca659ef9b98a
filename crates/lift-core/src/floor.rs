//! Floor coordinate and travel direction.
//!
//! A `Floor` is a plain coordinate in `[0, floor_count)`.  Cars move one
//! floor per tick, so the absolute difference between two floors is also the
//! number of ticks an unobstructed car needs to cover it.

use std::fmt;

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A building floor.  Floor 0 is the lobby.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    pub const LOBBY: Floor = Floor(0);

    /// Number of floors (= ticks of travel) between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor one step closer to `target`, or `self` if already there.
    #[inline]
    pub fn step_toward(self, target: Floor) -> Floor {
        match self.cmp(&target) {
            std::cmp::Ordering::Less    => Floor(self.0 + 1),
            std::cmp::Ordering::Greater => Floor(self.0 - 1),
            std::cmp::Ordering::Equal   => self,
        }
    }

    /// `true` if the floor exists in a building with `floor_count` floors.
    #[inline]
    pub fn in_building(self, floor_count: u32) -> bool {
        self.0 < floor_count
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Direction of a hall call or of a car's current travel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `origin` to `destination`; `None` if equal.
    #[inline]
    pub fn between(origin: Floor, destination: Floor) -> Option<Direction> {
        match origin.cmp(&destination) {
            std::cmp::Ordering::Less    => Some(Direction::Up),
            std::cmp::Ordering::Greater => Some(Direction::Down),
            std::cmp::Ordering::Equal   => None,
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
