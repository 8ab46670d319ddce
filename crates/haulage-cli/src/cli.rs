//! CLI definition using clap

use chrono::NaiveTime;
use clap::{Args, Parser, Subcommand};
use haulage_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haulage-planner")]
#[command(version)]
#[command(about = "Lorry fleet sizing for time-boxed haulage jobs")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Job and fleet inputs shared by `plan` and `timeline`. Flags override the
/// scenario file; the file's fleet block overrides the configured defaults.
#[derive(Args)]
pub struct JobArgs {
    /// Scenario file (.toml or .json) describing the job
    pub scenario: Option<PathBuf>,

    /// Material quantity to shift (t)
    #[arg(long)]
    pub tonnes: Option<f64>,

    /// One-way distance to the tip (miles)
    #[arg(long)]
    pub miles: Option<f64>,

    /// Working window (hours)
    #[arg(long)]
    pub window: Option<f64>,

    /// Loading time per lorry (minutes)
    #[arg(long)]
    pub load_minutes: Option<f64>,

    /// Clock time the window opens (e.g., "07:30")
    #[arg(long, value_parser = parse_day_start)]
    pub start: Option<NaiveTime>,

    /// Sale price of the material (per tonne)
    #[arg(long)]
    pub price: Option<f64>,

    /// Day-rate cost of one lorry
    #[arg(long)]
    pub lorry_cost: Option<f64>,

    /// Lorry payload (t)
    #[arg(long)]
    pub capacity: Option<f64>,

    /// Average road speed (mph)
    #[arg(long)]
    pub speed: Option<f64>,

    /// Tipping time (minutes)
    #[arg(long)]
    pub tip_minutes: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Work out the minimum fleet for a job
    Plan {
        #[command(flatten)]
        job: JobArgs,

        /// Also print the full plain-text report
        #[arg(long)]
        report: bool,
    },

    /// Lay out the per-lorry bay schedule for a job
    Timeline {
        #[command(flatten)]
        job: JobArgs,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default lorry capacity (t)
        #[arg(long)]
        set_capacity: Option<f64>,

        /// Set default average speed (mph)
        #[arg(long)]
        set_speed: Option<f64>,

        /// Set default tipping time (minutes)
        #[arg(long)]
        set_tip_minutes: Option<f64>,

        /// Set default day start (e.g., "07:30")
        #[arg(long, value_parser = parse_day_start)]
        set_start: Option<NaiveTime>,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn parse_day_start(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("invalid clock time: {} (expected HH:MM)", s))
}
