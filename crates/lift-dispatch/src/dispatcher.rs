//! The `Dispatcher` and its car-selection rule.

use std::collections::BTreeMap;

use lift_core::{CarId, CarSnapshot, Direction, Floor, is_between};

use crate::{Assignment, DispatchError, DispatchResult, PendingCall};

/// Centralized hall-call dispatcher.
///
/// Holds the latest [`CarSnapshot`] per car and the calls registered since
/// the last [`step`](Self::step).  Both maps are ordered so that every
/// decision is reproducible: pending floors are resolved bottom-up and cars
/// at equal distance are considered in ascending `CarId` order.
#[derive(Debug, Default)]
pub struct Dispatcher {
    snapshots: BTreeMap<CarId, CarSnapshot>,
    pending:   BTreeMap<Floor, PendingCall>,
}

/// Why a car was chosen.  Only used for logging.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Selection {
    OnTheWay,
    Nearest,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Inputs ────────────────────────────────────────────────────────────

    /// Record `car`'s position for this tick, replacing the previous one.
    pub fn update(&mut self, car: CarId, snapshot: CarSnapshot) {
        self.snapshots.insert(car, snapshot);
    }

    /// Register a rider waiting at `floor` who wants to travel `direction`.
    ///
    /// Calls for the same floor coalesce into one [`PendingCall`].
    pub fn pickup(&mut self, floor: Floor, direction: Direction) {
        self.pending.entry(floor).or_default().add(direction);
    }

    // ── Decision ──────────────────────────────────────────────────────────

    /// Assign every pending floor with demand to exactly one car, then clear
    /// the pending set.
    ///
    /// Assignments come back in ascending floor order.  Several floors may
    /// go to the same car.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NoCars`] if no car has ever reported a snapshot.  The
    /// pending set is kept in that case.
    pub fn step(&mut self) -> DispatchResult<Vec<Assignment>> {
        if self.snapshots.is_empty() {
            return Err(DispatchError::NoCars);
        }

        let pending = std::mem::take(&mut self.pending);
        let mut assignments = Vec::with_capacity(pending.len());
        for (floor, call) in pending {
            if !call.has_demand() {
                continue;
            }
            if let Some((car, why)) = self.choose(floor) {
                log::debug!(
                    "{floor} (up {}, down {}) → {car} [{why:?}]",
                    call.up,
                    call.down
                );
                assignments.push(Assignment { car, floor });
            }
        }
        Ok(assignments)
    }

    /// The car that would serve a call at `floor` right now.
    ///
    /// The nearest car for which `floor` is already on the way (strictly
    /// between its current floor and next stop) wins.  If no car has it on
    /// the way, the nearest car overall is chosen.  Ties go to the lowest
    /// `CarId`.  The call's direction plays no part.
    pub fn select_car(&self, floor: Floor) -> Option<CarId> {
        self.choose(floor).map(|(car, _)| car)
    }

    fn choose(&self, floor: Floor) -> Option<(CarId, Selection)> {
        // Distance buckets, nearest first; each bucket in ascending CarId.
        let mut buckets: BTreeMap<u32, Vec<(CarId, CarSnapshot)>> = BTreeMap::new();
        for (&car, &snapshot) in &self.snapshots {
            buckets
                .entry(snapshot.current_floor.distance(floor))
                .or_default()
                .push((car, snapshot));
        }

        let on_the_way = buckets
            .values()
            .flatten()
            .find(|(_, s)| is_between(floor, s.current_floor, s.next_stop))
            .map(|&(car, _)| (car, Selection::OnTheWay));

        on_the_way.or_else(|| {
            buckets
                .values()
                .next()
                .and_then(|nearest| nearest.first())
                .map(|&(car, _)| (car, Selection::Nearest))
        })
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// The last snapshot reported for `car`.
    pub fn snapshot(&self, car: CarId) -> Option<CarSnapshot> {
        self.snapshots.get(&car).copied()
    }

    /// Number of cars that have reported at least once.
    pub fn car_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Demand registered at `floor` since the last `step`.
    pub fn pending(&self, floor: Floor) -> Option<PendingCall> {
        self.pending.get(&floor).copied()
    }

    /// Number of distinct floors with pending calls.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
