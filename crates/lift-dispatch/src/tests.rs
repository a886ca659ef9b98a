//! Unit tests for lift-dispatch.

use lift_core::{CarId, CarSnapshot, Direction, Floor};

use crate::{Assignment, DispatchError, Dispatcher, PendingCall};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn snap(current: u32, next: u32) -> CarSnapshot {
    CarSnapshot::new(Floor(current), Floor(next))
}

/// Dispatcher with one snapshot per `(current, next)` pair, ids in order.
fn dispatcher(cars: &[(u32, u32)]) -> Dispatcher {
    let mut d = Dispatcher::new();
    for (i, &(current, next)) in cars.iter().enumerate() {
        d.update(CarId(i as u32), snap(current, next));
    }
    d
}

// ── PendingCall ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod pending_call {
    use super::*;

    #[test]
    fn counts_by_direction() {
        let mut call = PendingCall::default();
        assert!(!call.has_demand());
        call.add(Direction::Up);
        call.add(Direction::Up);
        call.add(Direction::Down);
        assert!(call.has_demand());
        assert_eq!(call.count(Direction::Up), 2);
        assert_eq!(call.count(Direction::Down), 1);
        assert_eq!(call.total(), 3);
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod inputs {
    use super::*;

    #[test]
    fn update_last_write_wins() {
        let mut d = Dispatcher::new();
        d.update(CarId(0), snap(1, 4));
        d.update(CarId(0), snap(2, 4));
        assert_eq!(d.car_count(), 1);
        assert_eq!(d.snapshot(CarId(0)), Some(snap(2, 4)));
    }

    #[test]
    fn pickups_coalesce_per_floor() {
        let mut d = dispatcher(&[(0, 0)]);
        d.pickup(Floor(5), Direction::Up);
        d.pickup(Floor(5), Direction::Up);
        d.pickup(Floor(5), Direction::Down);
        d.pickup(Floor(2), Direction::Down);
        assert_eq!(d.pending_count(), 2);
        assert_eq!(d.pending(Floor(5)), Some(PendingCall { up: 2, down: 1 }));
    }
}

// ── step() ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use super::*;

    #[test]
    fn single_idle_car_takes_the_call() {
        let mut d = dispatcher(&[(0, 0)]);
        d.pickup(Floor(5), Direction::Up);
        let out = d.step().unwrap();
        assert_eq!(out, vec![Assignment { car: CarId(0), floor: Floor(5) }]);
    }

    #[test]
    fn nearer_car_with_call_on_the_way_wins() {
        // A at 2 heading to 8 (distance 3), B idle at 0 (distance 5).
        let mut d = dispatcher(&[(2, 8), (0, 0)]);
        d.pickup(Floor(5), Direction::Up);
        assert_eq!(d.step().unwrap()[0].car, CarId(0));
    }

    #[test]
    fn farther_car_on_the_way_beats_nearer_car_that_is_not() {
        // Car 0 idle at 6 (distance 1), car 1 at 1 heading to 9 (distance 4).
        let mut d = dispatcher(&[(6, 6), (1, 9)]);
        d.pickup(Floor(5), Direction::Up);
        assert_eq!(d.step().unwrap()[0].car, CarId(1));
    }

    #[test]
    fn nearest_on_the_way_car_is_chosen_among_several() {
        let mut d = dispatcher(&[(0, 12), (3, 10), (11, 0)]);
        d.pickup(Floor(6), Direction::Down);
        // distances: 6, 3, 5 → car 1 is the nearest with 6 on the way.
        assert_eq!(d.step().unwrap()[0].car, CarId(1));
    }

    #[test]
    fn falls_back_to_nearest_car_when_none_is_on_the_way() {
        // Both cars head away from floor 5.
        let mut d = dispatcher(&[(9, 12), (3, 0)]);
        d.pickup(Floor(5), Direction::Up);
        assert_eq!(d.step().unwrap()[0].car, CarId(1));
    }

    #[test]
    fn fallback_tie_goes_to_lowest_car_id() {
        let mut d = Dispatcher::new();
        // Insert out of order to make sure map order, not insert order, decides.
        d.update(CarId(3), snap(7, 7));
        d.update(CarId(1), snap(3, 3));
        d.update(CarId(2), snap(7, 7));
        d.pickup(Floor(5), Direction::Down);
        assert_eq!(d.step().unwrap()[0].car, CarId(1));
    }

    #[test]
    fn call_at_a_car_floor_is_never_on_the_way() {
        // Car 0 sits on the call floor but is leaving; still the nearest.
        let mut d = dispatcher(&[(5, 9), (2, 2)]);
        d.pickup(Floor(5), Direction::Up);
        assert_eq!(d.step().unwrap()[0].car, CarId(0));
    }

    #[test]
    fn direction_of_the_call_is_ignored() {
        // Car heading up through floor 5 takes a down call there too.
        let mut up = dispatcher(&[(2, 8), (5, 5)]);
        up.pickup(Floor(4), Direction::Up);
        let mut down = dispatcher(&[(2, 8), (5, 5)]);
        down.pickup(Floor(4), Direction::Down);
        assert_eq!(up.step().unwrap(), down.step().unwrap());
    }

    #[test]
    fn one_assignment_per_floor_in_floor_order() {
        let mut d = dispatcher(&[(0, 0), (12, 12)]);
        for _ in 0..4 {
            d.pickup(Floor(10), Direction::Down);
        }
        d.pickup(Floor(1), Direction::Up);
        d.pickup(Floor(1), Direction::Down);
        let out = d.step().unwrap();
        assert_eq!(
            out,
            vec![
                Assignment { car: CarId(0), floor: Floor(1) },
                Assignment { car: CarId(1), floor: Floor(10) },
            ]
        );
    }

    #[test]
    fn same_car_may_receive_several_floors() {
        let mut d = dispatcher(&[(0, 0)]);
        d.pickup(Floor(3), Direction::Up);
        d.pickup(Floor(8), Direction::Down);
        let out = d.step().unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|a| a.car == CarId(0)));
    }

    #[test]
    fn pending_set_is_cleared_by_step() {
        let mut d = dispatcher(&[(0, 0)]);
        d.pickup(Floor(4), Direction::Up);
        assert_eq!(d.step().unwrap().len(), 1);
        assert_eq!(d.pending_count(), 0);
        assert!(d.step().unwrap().is_empty());
    }

    #[test]
    fn snapshots_survive_step() {
        let mut d = dispatcher(&[(0, 3)]);
        d.step().unwrap();
        assert_eq!(d.snapshot(CarId(0)), Some(snap(0, 3)));
    }

    #[test]
    fn no_cars_is_an_error_and_keeps_calls() {
        let mut d = Dispatcher::new();
        d.pickup(Floor(2), Direction::Up);
        assert!(matches!(d.step(), Err(DispatchError::NoCars)));
        assert_eq!(d.pending_count(), 1);
    }

    #[test]
    fn select_car_matches_step() {
        let mut d = dispatcher(&[(9, 12), (3, 0), (1, 6)]);
        let chosen = d.select_car(Floor(5));
        d.pickup(Floor(5), Direction::Up);
        assert_eq!(d.step().unwrap()[0].car, chosen.unwrap());
        assert_eq!(chosen, Some(CarId(2)));
    }
}
