//! Simulation observer trait for progress reporting and data collection.

use lift_car::CarFleet;
use lift_core::Tick;
use lift_dispatch::Assignment;

use crate::{SimSummary, TickSummary, Trip};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         println!("{}: {} waiting, {} aboard", summary.tick, summary.waiting, summary.aboard);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for each dispatcher assignment, before it is applied to the car.
    fn on_assignment(&mut self, _tick: Tick, _assignment: &Assignment) {}

    /// Called when a rider alights at their destination.
    fn on_trip(&mut self, _trip: &Trip) {}

    /// Called at the end of each tick, after boarding.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to every car.
    fn on_snapshot(&mut self, _tick: Tick, _fleet: &CarFleet) {}

    /// Called once when every rider has been delivered.
    fn on_sim_end(&mut self, _summary: &SimSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
