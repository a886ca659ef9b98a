//! The rider record.

use lift_core::{Direction, Floor, RiderId, Tick};

/// A passenger: appears at `origin` on `arrival_tick` and wants to reach
/// `destination`.
///
/// `origin != destination` is guaranteed by [`Rider::new`], so every rider
/// has a definite direction of travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rider {
    pub id:           RiderId,
    pub origin:       Floor,
    pub destination:  Floor,
    pub arrival_tick: Tick,
}

impl Rider {
    pub fn new(
        id:           RiderId,
        origin:       Floor,
        destination:  Floor,
        arrival_tick: Tick,
    ) -> crate::RiderResult<Self> {
        if origin == destination {
            return Err(crate::RiderError::SameFloor(origin));
        }
        Ok(Self { id, origin, destination, arrival_tick })
    }

    /// Up if the destination is above the origin, otherwise down.
    #[inline]
    pub fn direction(&self) -> Direction {
        if self.destination > self.origin {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Number of floors between origin and destination.
    #[inline]
    pub fn trip_floors(&self) -> u32 {
        self.origin.distance(self.destination)
    }
}
