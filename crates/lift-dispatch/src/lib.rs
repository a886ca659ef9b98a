//! `lift-dispatch` — assigns pending hall calls to cars once per tick.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`call`]       | `PendingCall` — coalesced up/down demand at one floor        |
//! | [`assignment`] | `Assignment` — one `(car, floor)` decision                   |
//! | [`dispatcher`] | `Dispatcher` — snapshots + pending calls → assignments       |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                         |
//!
//! # Per-tick lifecycle
//!
//! ```text
//! update(car, snapshot)   × every car    last write per car wins
//! pickup(floor, dir)      × every call   coalesces per floor
//! step()                  × 1            one assignment per floor with demand,
//!                                        then the pending set is cleared
//! ```
//!
//! The dispatcher never touches a car.  It works on the `(current_floor,
//! next_stop)` copies it was given; the driver applies the returned
//! assignments.

pub mod assignment;
pub mod call;
pub mod dispatcher;
pub mod error;

#[cfg(test)]
mod tests;

pub use assignment::Assignment;
pub use call::PendingCall;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
