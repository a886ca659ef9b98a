//! Plain data row types written by output backends.

use lift_car::Car;
use lift_core::Tick;
use lift_sim::{TickSummary, Trip};

/// One car's position and load at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSnapshotRow {
    pub car_id:     u32,
    pub tick:       u64,
    pub floor:      u32,
    /// Equal to `floor` when the car is idle.
    pub next_stop:  u32,
    pub passengers: u32,
    /// Queued pickup floors.
    pub pickups:    u32,
    /// Queued drop-off floors.
    pub stops:      u32,
}

impl CarSnapshotRow {
    pub fn from_car(car: &Car, tick: Tick) -> Self {
        Self {
            car_id:     car.id().0,
            tick:       tick.0,
            floor:      car.current_floor().0,
            next_stop:  car.next_stop().0,
            passengers: car.riders_aboard(),
            pickups:    car.pickup_queue().len() as u32,
            stops:      car.stop_queue().len() as u32,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub arrivals:        u64,
    pub assignments:     u64,
    pub waiting:         u64,
    pub aboard:          u64,
    pub delivered:       u64,
    pub delivered_total: u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:            s.tick.0,
            arrivals:        s.arrivals as u64,
            assignments:     s.assignments as u64,
            waiting:         s.waiting as u64,
            aboard:          s.aboard,
            delivered:       s.delivered as u64,
            delivered_total: s.delivered_total,
        }
    }
}

/// One delivered rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub rider_id:       u32,
    pub origin:         u32,
    pub destination:    u32,
    pub car_id:         u32,
    pub arrival_tick:   u64,
    pub board_tick:     u64,
    pub delivered_tick: u64,
    pub wait_ticks:     u64,
    pub ride_ticks:     u64,
}

impl From<&Trip> for TripRow {
    fn from(t: &Trip) -> Self {
        Self {
            rider_id:       t.rider.0,
            origin:         t.origin.0,
            destination:    t.destination.0,
            car_id:         t.car.0,
            arrival_tick:   t.arrival_tick.0,
            board_tick:     t.board_tick.0,
            delivered_tick: t.delivered_tick.0,
            wait_ticks:     t.wait_ticks(),
            ride_ticks:     t.ride_ticks(),
        }
    }
}
