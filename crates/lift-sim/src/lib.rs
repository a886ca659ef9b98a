//! `lift-sim` — the tick loop that ties cars, dispatcher and riders together.
//!
//! # Tick loop
//!
//! ```text
//! until no rider is pending, waiting or aboard:
//!   ① Report    — Dispatcher::update with every car's snapshot.
//!   ② Arrivals  — riders due by now join their floor's lobby and call a car.
//!   ③ Dispatch  — Dispatcher::step; each assignment → Car pickup request.
//!   ④ Motion    — every car moves ≤ 1 floor; riders at their stop alight.
//!   ⑤ Boarding  — waiting riders enter cars on their floor, ascending CarId.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the motion phase on Rayon's thread pool.          |
//! | `serde`    | Serde derives on `Trip`, `TickSummary`, `SimSummary`.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_riders::GeneratorConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .generate_riders(GeneratorConfig::default())
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("done after {} ticks", summary.ticks);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod trip;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Boarded, RunStats, Sim};
pub use trip::{SimSummary, TickSummary, Trip};
