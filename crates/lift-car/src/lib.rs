//! `lift-car` — per-car motion state, stop ordering, and fleet storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`car`]     | `Car` — position, pickup/stop queues, riders per destination      |
//! | [`outcome`] | `MoveOutcome` — what a single `Car::advance` did                  |
//! | [`fleet`]   | `CarFleet` — `Vec<Car>` indexed by `CarId`                        |
//! | [`error`]   | `CarError`, `CarResult<T>`                                        |
//!
//! # Movement model (one floor per tick)
//!
//! 1. `Car::advance` moves the car one floor toward `next_stop`.
//! 2. On reaching `next_stop` the head of the pickup queue and/or the stop
//!    queue is popped if it equals the current floor.  Popping a stop
//!    releases every rider bound for that floor.
//! 3. `next_stop` is re-targeted to the next outstanding floor.
//!
//! Boarding itself is done by the driver (`lift-sim`): it moves riders from
//! the lobby into the car through `Car::add_person`.

pub mod car;
pub mod error;
pub mod fleet;
pub mod outcome;


pub use car::Car;
pub use error::{CarError, CarResult};
pub use fleet::CarFleet;
pub use outcome::MoveOutcome;
