//! The `CarFleet` — every car in the building, indexed by `CarId`.

use lift_core::{CarId, CarSnapshot, Floor};

use crate::{Car, CarError, CarResult, MoveOutcome};

/// Owns all cars.  `cars[i].id() == CarId(i)` always holds; ids are assigned
/// at construction and never reused.
pub struct CarFleet {
    cars: Vec<Car>,
}

impl CarFleet {
    /// `count` idle cars waiting at the lobby.
    pub fn new(count: usize) -> Self {
        Self::with_floors(&vec![Floor::LOBBY; count])
    }

    /// One idle car per entry of `floors`, starting there.
    pub fn with_floors(floors: &[Floor]) -> Self {
        let cars = floors
            .iter()
            .enumerate()
            .map(|(i, &floor)| Car::at_floor(CarId(i as u32), floor))
            .collect();
        Self { cars }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    #[inline]
    pub fn get(&self, car: CarId) -> Option<&Car> {
        self.cars.get(car.index())
    }

    #[inline]
    pub fn get_mut(&mut self, car: CarId) -> Option<&mut Car> {
        self.cars.get_mut(car.index())
    }

    /// Cars in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Car> {
        self.cars.iter_mut()
    }

    /// `(CarId, CarSnapshot)` for every car, ascending id.
    pub fn snapshots(&self) -> impl Iterator<Item = (CarId, CarSnapshot)> + '_ {
        self.cars.iter().map(|car| (car.id(), car.snapshot()))
    }

    /// Hand a dispatcher assignment to `car`.
    pub fn assign_pickup(&mut self, car: CarId, floor: Floor) -> CarResult<()> {
        let target = self.get_mut(car).ok_or(CarError::UnknownCar(car))?;
        if !target.add_pickup_request(floor) {
            log::trace!("{car} already at {floor}; pickup needs no travel");
        }
        Ok(())
    }

    /// Advance every car by one tick.
    ///
    /// Outcomes are returned in ascending `CarId` order.  With the `parallel`
    /// feature the moves run on Rayon's thread pool; cars touch only their
    /// own state so the result is the same.
    pub fn advance_all(&mut self) -> Vec<MoveOutcome> {
        #[cfg(not(feature = "parallel"))]
        {
            self.cars.iter_mut().map(Car::advance).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.cars.par_iter_mut().map(Car::advance).collect()
        }
    }

    /// Riders on board across all cars.
    pub fn riders_aboard(&self) -> u64 {
        self.cars.iter().map(|car| car.riders_aboard() as u64).sum()
    }
}
