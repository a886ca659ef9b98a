//! Riders waiting on each floor.

use lift_core::{Direction, Floor, LiftError};

use crate::{Rider, RiderResult};

/// Per-floor waiting lines, indexed by floor number.
///
/// Riders keep their arrival order.  Boarding takes every rider whose
/// direction matches the car's; an idle car takes everyone.
pub struct Lobby {
    floors: Vec<Vec<Rider>>,
    total:  usize,
}

impl Lobby {
    /// An empty lobby for a building with `floor_count` floors.
    pub fn new(floor_count: u32) -> Self {
        Self {
            floors: vec![Vec::new(); floor_count as usize],
            total:  0,
        }
    }

    /// Put `rider` in line at its origin.
    pub fn enqueue(&mut self, rider: Rider) -> RiderResult<()> {
        let floor_count = self.floors.len() as u32;
        let line = self
            .floors
            .get_mut(rider.origin.0 as usize)
            .ok_or(LiftError::FloorOutOfRange { floor: rider.origin, floor_count })?;
        line.push(rider);
        self.total += 1;
        Ok(())
    }

    /// Remove and return the riders at `floor` who can ride a car travelling
    /// `car_direction` (`None` = idle car, everyone boards).
    pub fn board(&mut self, floor: Floor, car_direction: Option<Direction>) -> Vec<Rider> {
        let Some(line) = self.floors.get_mut(floor.0 as usize) else {
            return vec![];
        };
        let (boarding, staying): (Vec<Rider>, Vec<Rider>) = line
            .drain(..)
            .partition(|r| car_direction.is_none_or(|d| d == r.direction()));
        *line = staying;
        self.total -= boarding.len();
        boarding
    }

    /// Riders waiting at `floor`.
    pub fn waiting_at(&self, floor: Floor) -> &[Rider] {
        self.floors
            .get(floor.0 as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_waiting(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// One `(origin, direction)` hall call per waiting rider, bottom floor
    /// first.
    pub fn calls(&self) -> impl Iterator<Item = (Floor, Direction)> + '_ {
        self.floors
            .iter()
            .flatten()
            .map(|r| (r.origin, r.direction()))
    }
}
