//! Per-tick movement report.

use lift_core::{CarId, Floor};

/// What one call to [`Car::advance`][crate::Car::advance] did.
///
/// The driver uses `released` to hand the riders it tracks for that car and
/// floor over to the trip log.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub car:   CarId,

    /// Floor the car is on after the move.
    pub floor: Floor,

    /// `true` if the car changed floor this tick.
    pub moved: bool,

    /// Set when the head of the pickup queue was served at `floor`.
    pub pickup_served: Option<Floor>,

    /// `(floor, riders)` when the head of the stop queue was served and that
    /// many riders got off.
    pub released: Option<(Floor, u32)>,
}

impl MoveOutcome {
    /// `true` if anything besides motion happened.
    #[inline]
    pub fn stopped(&self) -> bool {
        self.pickup_served.is_some() || self.released.is_some()
    }
}
