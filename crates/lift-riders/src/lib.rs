//! `lift-riders` — who wants to go where, and when.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`rider`]         | `Rider` — origin, destination, arrival tick               |
//! | [`generator`]     | `RiderGenerator`, `GeneratorConfig` — seeded random riders |
//! | [`loader`]        | CSV manifest loading                                      |
//! | [`arrival_queue`] | `ArrivalQueue` — riders keyed by the tick they show up    |
//! | [`lobby`]         | `Lobby` — riders waiting per floor, direction-aware boarding |
//! | [`error`]         | `RiderError`, `RiderResult<T>`                            |

pub mod arrival_queue;
pub mod error;
pub mod generator;
pub mod loader;
pub mod lobby;
pub mod rider;


pub use arrival_queue::ArrivalQueue;
pub use error::{RiderError, RiderResult};
pub use generator::{GeneratorConfig, RiderGenerator};
pub use loader::{load_riders_csv, load_riders_reader};
pub use lobby::Lobby;
pub use rider::Rider;
