//! Command-line flags and the optional TOML run file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use lift_core::SimConfig;
use lift_riders::GeneratorConfig;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tower", about = "Simulate a group of elevators serving one building")]
pub struct Cli {
    /// TOML file with `[sim]` and `[riders]` tables.  Flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of elevator cars.
    #[arg(long)]
    pub cars: Option<usize>,

    /// Number of floors (valid floors are 0..floors).
    #[arg(long)]
    pub floors: Option<u32>,

    /// Riders to generate.
    #[arg(long)]
    pub riders: Option<usize>,

    /// Riders arriving per tick.
    #[arg(long)]
    pub per_tick: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Abort if riders remain after this many ticks.
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Load riders from a CSV manifest (`origin,destination,arrival_tick`)
    /// instead of generating them.
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Write car snapshots, tick summaries and trips into this directory.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write `output.db` instead of CSV files (needs the `sqlite` feature).
    #[arg(long, requires = "output")]
    pub sqlite: bool,

    /// Write the run summary as JSON to this file (`-` for stdout).
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Only print the final line.
    #[arg(long, short)]
    pub quiet: bool,

    /// Register hall calls only on arrival and board strictly by direction.
    #[arg(long)]
    pub strict: bool,
}

// ── Run file ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunFile {
    pub sim:    SimConfig,
    pub riders: GeneratorConfig,
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

impl Cli {
    /// File values (or defaults), then flag overrides.
    pub fn resolve(&self) -> Result<(SimConfig, GeneratorConfig)> {
        let RunFile { mut sim, mut riders } = match &self.config {
            Some(path) => RunFile::load(path)?,
            None => RunFile::default(),
        };

        if let Some(v) = self.cars      { sim.car_count = v; }
        if let Some(v) = self.floors    { sim.floor_count = v; }
        if let Some(v) = self.seed      { sim.seed = v; }
        if let Some(v) = self.max_ticks { sim.max_ticks = v; }
        if let Some(v) = self.riders    { riders.rider_count = v; }
        if let Some(v) = self.per_tick  { riders.riders_per_tick = v; }
        if self.strict {
            sim.relatch_calls = false;
            sim.board_on_pickup = false;
        }

        Ok((sim, riders))
    }
}
