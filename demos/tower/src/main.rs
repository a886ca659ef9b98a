//! tower — run one building's elevator group to completion.
//!
//! Prints one line per tick with every car's floor and passenger count,
//! then the number of ticks it took to deliver everyone:
//!
//! ```text
//! Elevators [floor(passengers)]: 1(0)	0(3)	2(1)	…
//! All riders reached their destination after 187 simulation steps
//! ```
//!
//! `RUST_LOG=debug` shows every dispatcher decision and delivery.

mod config;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use lift_car::CarFleet;
use lift_core::Tick;
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_riders::load_riders_csv;
use lift_sim::{Sim, SimBuilder, SimObserver, SimSummary, TickSummary, Trip};

use config::Cli;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints the per-tick car line and forwards everything to an optional
/// output writer.
struct TowerObserver<W: OutputWriter> {
    print:  bool,
    output: Option<SimOutputObserver<W>>,
}

impl<W: OutputWriter> SimObserver for TowerObserver<W> {
    fn on_trip(&mut self, trip: &Trip) {
        if let Some(out) = self.output.as_mut() {
            out.on_trip(trip);
        }
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        if let Some(out) = self.output.as_mut() {
            out.on_tick_end(summary);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, fleet: &CarFleet) {
        if self.print {
            let cars: Vec<String> = fleet
                .iter()
                .map(|car| format!("{}({})", car.current_floor().0, car.riders_aboard()))
                .collect();
            println!("Elevators [floor(passengers)]: {}", cars.join("\t"));
        }
        if let Some(out) = self.output.as_mut() {
            out.on_snapshot(tick, fleet);
        }
    }

    fn on_sim_end(&mut self, summary: &SimSummary) {
        if let Some(out) = self.output.as_mut() {
            out.on_sim_end(summary);
        }
    }
}

fn run_sim<W: OutputWriter>(
    sim:    &mut Sim,
    print:  bool,
    output: Option<SimOutputObserver<W>>,
) -> Result<SimSummary> {
    let mut obs = TowerObserver { print, output };
    let result = sim.run(&mut obs);

    if let Some(out) = obs.output.as_mut() {
        if result.is_err() {
            // on_sim_end never fired; keep what was written so far.
            if let Err(e) = out.finish() {
                eprintln!("output error: {e}");
            }
        }
        if let Some(e) = out.take_error() {
            eprintln!("output error: {e}");
        }
    }
    Ok(result?)
}

fn run_to_dir(sim: &mut Sim, print: bool, dir: &Path, sqlite: bool) -> Result<SimSummary> {
    std::fs::create_dir_all(dir)?;

    #[cfg(feature = "sqlite")]
    if sqlite {
        let writer = lift_output::SqliteWriter::new(dir)?;
        return run_sim(sim, print, Some(SimOutputObserver::new(writer)));
    }
    #[cfg(not(feature = "sqlite"))]
    if sqlite {
        anyhow::bail!("--sqlite needs the `sqlite` feature (cargo run -p tower --features sqlite)");
    }

    let writer = CsvWriter::new(dir)?;
    run_sim(sim, print, Some(SimOutputObserver::new(writer)))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (config, generator) = cli.resolve()?;

    let builder = SimBuilder::new(config.clone());
    let builder = match &cli.manifest {
        Some(path) => builder.riders(load_riders_csv(path, config.floor_count)?),
        None => builder.generate_riders(generator),
    };
    let mut sim = builder.build()?;

    let t0 = Instant::now();
    let summary = match &cli.output {
        Some(dir) => run_to_dir(&mut sim, !cli.quiet, dir, cli.sqlite)?,
        None => run_sim::<CsvWriter>(&mut sim, !cli.quiet, None)?,
    };
    log::info!("simulation complete in {:.3} s", t0.elapsed().as_secs_f64());

    println!(
        "All riders reached their destination after {} simulation steps",
        summary.ticks
    );

    if let Some(path) = &cli.summary_json {
        let json = serde_json::to_string_pretty(&summary)?;
        if path.as_os_str() == "-" {
            println!("{json}");
        } else {
            std::fs::write(path, json)?;
        }
    }

    Ok(())
}
