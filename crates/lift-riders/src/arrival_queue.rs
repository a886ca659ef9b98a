//! `ArrivalQueue` — riders not yet in the building, keyed by arrival tick.
//!
//! Most ticks only a handful of riders appear, so the driver drains exactly
//! the ticks that are due instead of scanning the whole population.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::Rider;

/// A priority queue mapping ticks → riders that appear at that tick.
#[derive(Default)]
pub struct ArrivalQueue {
    inner: BTreeMap<Tick, Vec<Rider>>,
    /// Cached total rider count for O(1) `len()`.
    total: usize,
}

impl ArrivalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue holding every rider in `riders`.
    pub fn from_riders(riders: impl IntoIterator<Item = Rider>) -> Self {
        let mut queue = Self::new();
        for rider in riders {
            queue.push(rider);
        }
        queue
    }

    /// Schedule `rider` for its `arrival_tick`.
    pub fn push(&mut self, rider: Rider) {
        self.inner.entry(rider.arrival_tick).or_default().push(rider);
        self.total += 1;
    }

    /// Remove and return every rider due at or before `tick`, earliest tick
    /// first and in insertion order within a tick.
    pub fn drain_through(&mut self, tick: Tick) -> Vec<Rider> {
        let later = self.inner.split_off(&tick.next());
        let due = std::mem::replace(&mut self.inner, later);
        let riders: Vec<Rider> = due.into_values().flatten().collect();
        self.total -= riders.len();
        riders
    }

    /// The earliest tick with at least one queued rider, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of riders still to arrive.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
