//! The `Sim` struct and its tick loop.

use std::collections::BTreeMap;

use lift_car::CarFleet;
use lift_core::{Floor, SimConfig, Tick};
use lift_dispatch::Dispatcher;
use lift_riders::{ArrivalQueue, Lobby, Rider};

use crate::{SimError, SimObserver, SimResult, SimSummary, TickSummary, Trip};

// ── Ledger types ─────────────────────────────────────────────────────────────

/// A rider inside a car, remembered until they alight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Boarded {
    pub rider:      Rider,
    pub board_tick: Tick,
}

/// Running totals used to build the final [`SimSummary`].
#[derive(Copy, Clone, Debug, Default)]
pub struct RunStats {
    pub riders:     usize,
    pub delivered:  u64,
    pub total_wait: u64,
    pub total_ride: u64,
    pub max_wait:   u64,
}

impl RunStats {
    fn record(&mut self, trip: &Trip) {
        self.delivered += 1;
        self.total_wait += trip.wait_ticks();
        self.total_ride += trip.ride_ticks();
        self.max_wait = self.max_wait.max(trip.wait_ticks());
    }

    fn mean(total: u64, count: u64) -> f64 {
        if count == 0 { 0.0 } else { total as f64 / count as f64 }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each tick runs these phases in a fixed order:
///
/// 1. **Report**: every car's snapshot is handed to the dispatcher.
/// 2. **Arrivals**: riders due by now enter their floor's lobby and press the
///    hall button.  With `relatch_calls`, riders still waiting press it again.
/// 3. **Dispatch**: the dispatcher assigns every pending floor to a car, and
///    each assignment becomes a pickup request on that car.
/// 4. **Motion** (optionally parallel with the `parallel` feature): every car
///    moves at most one floor.  Riders whose stop was just reached alight.
/// 5. **Boarding** (ascending `CarId`): riders at each car's floor whose
///    direction matches the car's, or all of them if the car is idle or
///    stopped there for a pickup (`board_on_pickup`), get in.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// The next tick to process.  Equals the number of ticks run so far.
    pub tick: Tick,

    pub fleet: CarFleet,

    pub dispatcher: Dispatcher,

    /// Riders that have not shown up yet.
    pub arrivals: ArrivalQueue,

    /// Riders waiting on each floor.
    pub lobby: Lobby,

    /// Riders inside each car, indexed by `CarId`, keyed by destination.
    /// Mirrors each car's per-destination counts.
    pub manifests: Vec<BTreeMap<Floor, Vec<Boarded>>>,

    pub stats: RunStats,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every rider has arrived, boarded and alighted.
    ///
    /// Fails with [`SimError::TickLimit`] if `config.max_ticks` ticks pass
    /// first.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimSummary> {
        while !self.is_done() {
            if self.tick >= self.config.tick_limit() {
                let err = SimError::TickLimit {
                    tick:    self.tick,
                    waiting: self.lobby.total_waiting(),
                    aboard:  self.fleet.riders_aboard(),
                    pending: self.arrivals.len(),
                };
                log::warn!("{err}");
                return Err(err);
            }
            self.process_tick(observer)?;
        }

        let summary = self.summary();
        log::info!(
            "all {} riders delivered after {} ticks (mean wait {:.2}, mean ride {:.2})",
            summary.delivered,
            summary.ticks,
            summary.mean_wait_ticks,
            summary.mean_ride_ticks
        );
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Run exactly `n` ticks from the current position, done or not.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(observer)?;
        }
        Ok(())
    }

    /// No rider is pending, waiting or aboard.
    pub fn is_done(&self) -> bool {
        self.arrivals.is_empty() && self.lobby.is_empty() && self.fleet.riders_aboard() == 0
    }

    /// Totals so far.
    pub fn summary(&self) -> SimSummary {
        let s = &self.stats;
        SimSummary {
            ticks:           self.tick.0,
            riders:          s.riders,
            delivered:       s.delivered,
            mean_wait_ticks: RunStats::mean(s.total_wait, s.delivered),
            mean_ride_ticks: RunStats::mean(s.total_ride, s.delivered),
            max_wait_ticks:  s.max_wait,
        }
    }

    /// Process the current tick, fire the observer hooks, and advance the
    /// clock.
    pub fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.tick;
        observer.on_tick_start(now);

        // ── Phase 1: report car positions ─────────────────────────────────
        for (car, snapshot) in self.fleet.snapshots() {
            self.dispatcher.update(car, snapshot);
        }

        // ── Phase 2: arrivals and hall calls ──────────────────────────────
        let arrived = self.arrivals.drain_through(now);
        let arrival_count = arrived.len();
        for rider in arrived {
            if !self.config.relatch_calls {
                self.dispatcher.pickup(rider.origin, rider.direction());
            }
            self.lobby.enqueue(rider)?;
        }
        if self.config.relatch_calls {
            for (floor, direction) in self.lobby.calls() {
                self.dispatcher.pickup(floor, direction);
            }
        }

        // ── Phase 3: dispatch ─────────────────────────────────────────────
        let assignments = self.dispatcher.step()?;
        for assignment in &assignments {
            observer.on_assignment(now, assignment);
            self.fleet.assign_pickup(assignment.car, assignment.floor)?;
        }

        // ── Phase 4: motion and alighting ─────────────────────────────────
        let outcomes = self.fleet.advance_all();
        let mut delivered = 0;
        for outcome in &outcomes {
            let Some((floor, count)) = outcome.released else { continue };
            let riders = self.manifests[outcome.car.index()]
                .remove(&floor)
                .unwrap_or_default();
            if riders.len() != count as usize {
                log::warn!(
                    "{} released {count} riders at {floor} but carried {}",
                    outcome.car,
                    riders.len()
                );
            }
            for boarded in riders {
                let trip = Trip {
                    rider:          boarded.rider.id,
                    origin:         boarded.rider.origin,
                    destination:    boarded.rider.destination,
                    car:            outcome.car,
                    arrival_tick:   boarded.rider.arrival_tick,
                    board_tick:     boarded.board_tick,
                    delivered_tick: now,
                };
                log::debug!(
                    "{} delivered to {floor} by {} (waited {}, rode {})",
                    trip.rider,
                    trip.car,
                    trip.wait_ticks(),
                    trip.ride_ticks()
                );
                self.stats.record(&trip);
                observer.on_trip(&trip);
                delivered += 1;
            }
        }

        // ── Phase 5: boarding ─────────────────────────────────────────────
        //
        // Cars are visited in ascending CarId order; when two cars share a
        // floor the lower id gets first pick.
        for (car, outcome) in self.fleet.iter_mut().zip(&outcomes) {
            let floor = car.current_floor();
            let direction = if self.config.board_on_pickup && outcome.pickup_served == Some(floor) {
                None
            } else {
                car.direction()
            };
            for rider in self.lobby.board(floor, direction) {
                car.add_person(rider.destination);
                log::trace!("{} boarded {} at {floor} for {}", rider.id, car.id(), rider.destination);
                self.manifests[car.id().index()]
                    .entry(rider.destination)
                    .or_default()
                    .push(Boarded { rider, board_tick: now });
            }
        }

        let summary = TickSummary {
            tick:            now,
            arrivals:        arrival_count,
            assignments:     assignments.len(),
            waiting:         self.lobby.total_waiting(),
            aboard:          self.fleet.riders_aboard(),
            delivered,
            delivered_total: self.stats.delivered,
        };
        log::trace!(
            "{now}: {} arrived, {} assigned, {} waiting, {} aboard, {} delivered",
            summary.arrivals,
            summary.assignments,
            summary.waiting,
            summary.aboard,
            summary.delivered
        );
        observer.on_tick_end(&summary);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.fleet);
        }

        self.tick = now.next();
        Ok(summary)
    }
}
