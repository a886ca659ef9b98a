//! Path-ordered floor queues.
//!
//! A car keeps every floor it still has to visit in the order it will
//! physically reach them given its current trajectory.  Rather than
//! re-sorting on every change, new floors are spliced in with a single walk
//! along the queue:
//!
//! ```text
//! position 5, queue [9, 2]      insert 7
//!   leg 5 → 9 contains 7        → [7, 9, 2]
//!
//! position 5, queue [9, 2]      insert 4
//!   leg 5 → 9 does not          → continue
//!   leg 9 → 2 contains 4        → [9, 4, 2]
//!
//! position 5, queue [9, 2]      insert 0
//!   no leg contains 0           → [9, 2, 0]
//! ```
//!
//! Inserts are O(queue length), which is fine: a car rarely has more than a
//! handful of outstanding stops.

use std::collections::VecDeque;

use crate::Floor;

/// `true` iff `value` lies strictly inside the open interval bounded by
/// `start` and `end`, in either orientation.
///
/// Always `false` when `start == end` or `value` equals either bound.  This
/// is the "on the way" test shared by car queue insertion and dispatcher
/// car selection.
#[inline]
pub fn is_between(value: Floor, start: Floor, end: Floor) -> bool {
    (start < value && value < end) || (end < value && value < start)
}

/// An ordered, duplicate-free sequence of floors in path order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathQueue {
    floors: VecDeque<Floor>,
}

impl PathQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splice `floor` into the queue for a car currently at `from`.
    ///
    /// Walks the legs `from → q[0] → q[1] → …` and inserts before the first
    /// leg that passes strictly over `floor`; appends if none does.
    ///
    /// Returns `false` and leaves the queue untouched if `floor == from` or
    /// `floor` is already queued.
    pub fn insert(&mut self, from: Floor, floor: Floor) -> bool {
        if floor == from || self.floors.contains(&floor) {
            return false;
        }

        let mut position = from;
        for (i, &queued) in self.floors.iter().enumerate() {
            if is_between(floor, position, queued) {
                self.floors.insert(i, floor);
                return true;
            }
            position = queued;
        }
        self.floors.push_back(floor);
        true
    }

    /// The next floor on the path, if any.
    #[inline]
    pub fn head(&self) -> Option<Floor> {
        self.floors.front().copied()
    }

    /// Pop the head if it equals `floor`.  Returns `true` if popped.
    pub fn pop_head_if(&mut self, floor: Floor) -> bool {
        if self.head() == Some(floor) {
            self.floors.pop_front();
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.contains(&floor)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// Floors in path order.
    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.floors.iter().copied()
    }

    /// Copy of the queue as a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<Floor> {
        self.floors.iter().copied().collect()
    }
}
