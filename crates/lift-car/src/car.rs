//! A single elevator car.

use std::collections::BTreeMap;

use lift_core::{CarId, CarSnapshot, Direction, Floor, PathQueue, is_between};

use crate::MoveOutcome;

/// One elevator car: its position, its target, and the work it still owes.
///
/// A car is either **idle** (`current_floor == next_stop`, nothing queued) or
/// **en route** to `next_stop`.  There is no door state; boarding and
/// alighting are instantaneous on arrival.
///
/// # Queues
///
/// - `pickups`: floors the dispatcher sent the car to, where riders are
///   waiting to board.
/// - `stops`: destinations of riders already on board.
///
/// Both are [`PathQueue`]s: ordered the way the car will reach them, each
/// floor at most once.  `riders_by_destination` holds a positive count for
/// exactly the floors in `stops`.
#[derive(Clone, Debug)]
pub struct Car {
    id:                    CarId,
    current_floor:         Floor,
    next_stop:             Floor,
    pickups:               PathQueue,
    stops:                 PathQueue,
    riders_by_destination: BTreeMap<Floor, u32>,
}

impl Car {
    /// An idle, empty car waiting at the lobby.
    pub fn new(id: CarId) -> Self {
        Self::at_floor(id, Floor::LOBBY)
    }

    /// An idle, empty car waiting at `floor`.
    pub fn at_floor(id: CarId, floor: Floor) -> Self {
        Self {
            id,
            current_floor:         floor,
            next_stop:             floor,
            pickups:               PathQueue::new(),
            stops:                 PathQueue::new(),
            riders_by_destination: BTreeMap::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn next_stop(&self) -> Floor {
        self.next_stop
    }

    /// The `(current_floor, next_stop)` report pushed to the dispatcher.
    #[inline]
    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot::new(self.current_floor, self.next_stop)
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current_floor == self.next_stop
    }

    /// Direction toward `next_stop`; `None` while idle.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.current_floor, self.next_stop)
    }

    /// Total riders on board.
    pub fn riders_aboard(&self) -> u32 {
        self.riders_by_destination.values().sum()
    }

    /// Riders on board bound for `floor`.
    pub fn riders_for(&self, floor: Floor) -> u32 {
        self.riders_by_destination.get(&floor).copied().unwrap_or(0)
    }

    pub fn pickup_queue(&self) -> &PathQueue {
        &self.pickups
    }

    pub fn stop_queue(&self) -> &PathQueue {
        &self.stops
    }

    // ── Per-tick motion ───────────────────────────────────────────────────

    /// Move one floor toward `next_stop` and serve the floor on arrival.
    ///
    /// Called exactly once per tick.  On arrival the pickup head and the
    /// stop head are popped if they equal the current floor; a popped stop
    /// releases its riders.  The car is then re-targeted: to the pickup head
    /// if one remains, and to the stop head if the car is still idle or that
    /// stop is strictly closer than the chosen target.
    pub fn advance(&mut self) -> MoveOutcome {
        let before = self.current_floor;
        self.current_floor = self.current_floor.step_toward(self.next_stop);

        let mut outcome = MoveOutcome {
            car:           self.id,
            floor:         self.current_floor,
            moved:         self.current_floor != before,
            pickup_served: None,
            released:      None,
        };

        if self.current_floor != self.next_stop {
            return outcome;
        }

        let here = self.current_floor;
        if self.pickups.pop_head_if(here) {
            outcome.pickup_served = Some(here);
        }
        if self.stops.pop_head_if(here) {
            let riders = self.riders_by_destination.remove(&here).unwrap_or(0);
            log::trace!("{} released {riders} rider(s) at {here}", self.id);
            outcome.released = Some((here, riders));
        }

        if let Some(pickup) = self.pickups.head() {
            self.next_stop = pickup;
        }
        if let Some(stop) = self.stops.head() {
            if self.is_idle()
                || here.distance(stop) < here.distance(self.next_stop)
            {
                self.next_stop = stop;
            }
        }

        outcome
    }

    // ── New work ──────────────────────────────────────────────────────────

    /// A rider bound for `destination` has boarded.
    ///
    /// Returns `false` (and changes nothing) if `destination` is the current
    /// floor.
    pub fn add_person(&mut self, destination: Floor) -> bool {
        if destination == self.current_floor {
            return false;
        }
        *self.riders_by_destination.entry(destination).or_insert(0) += 1;
        self.stops.insert(self.current_floor, destination);
        self.retarget_toward(destination);
        true
    }

    /// The dispatcher assigned this car to pick riders up at `floor`.
    ///
    /// Returns `false` (and changes nothing) if `floor` is the current floor.
    pub fn add_pickup_request(&mut self, floor: Floor) -> bool {
        if floor == self.current_floor {
            return false;
        }
        self.pickups.insert(self.current_floor, floor);
        self.retarget_toward(floor);
        true
    }

    /// New targets overtake `next_stop` when the car is idle or they lie on
    /// the way there.
    fn retarget_toward(&mut self, floor: Floor) {
        if self.is_idle() || is_between(floor, self.current_floor, self.next_stop) {
            self.next_stop = floor;
        }
    }
}
