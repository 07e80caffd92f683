use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use clap::Parser;

/// Structure of the main command (rescalc).
#[derive(Parser, Debug)]
#[command(
    about = "Calculate jobs, nodes or hours for a uniform batch of jobs",
    long_about = "Calculate jobs, nodes or hours for a uniform batch of jobs.\n\n\
                  Provide the job shape (--N, --S) and exactly two of --Q (jobs), \
                  --R (nodes) and --H (hours); the third one is calculated.",
    version
)]
pub struct Cli {
    /// The shape of a single job.
    #[command(flatten)]
    pub shape: ShapeArgs,

    /// The known capacities.
    #[command(flatten)]
    pub capacity: CapacityArgs,

    /// Options for the printed reservation command.
    #[command(flatten)]
    pub reservation: ReservationArgs,

    /// The path to the config file [default: ./rescalc.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose mode, displays debug info. For even more try: -vv.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments describing one job.
#[derive(Args, Debug, Clone, Copy)]
#[command(next_help_heading = "Job shape")]
pub struct ShapeArgs {
    /// Nodes per job.
    #[arg(long = "N", value_name = "NODES", allow_negative_numbers = true)]
    pub nodes_per_job: f64,

    /// Hours per job.
    #[arg(long = "S", value_name = "HOURS", allow_negative_numbers = true)]
    pub hours_per_job: f64,

    /// Buffer fraction, e.g. 0.15 for +15% [default: 0.0].
    #[arg(long = "b", value_name = "FRACTION", allow_negative_numbers = true)]
    pub buffer_fraction: Option<f64>,
}

/// Exactly two of these have to be given.
#[derive(Args, Debug, Clone, Copy)]
#[command(next_help_heading = "Capacity (give exactly two)")]
pub struct CapacityArgs {
    /// Number of jobs.
    #[arg(long = "Q", value_name = "JOBS", allow_negative_numbers = true)]
    pub jobs: Option<f64>,

    /// Number of nodes.
    #[arg(long = "R", value_name = "NODES", allow_negative_numbers = true)]
    pub nodes: Option<f64>,

    /// Wall-clock hours.
    #[arg(long = "H", value_name = "HOURS", allow_negative_numbers = true)]
    pub hours: Option<f64>,
}

/// Arguments that only end up in the reservation command.
#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Reservation")]
pub struct ReservationArgs {
    /// ISO-8601 start, e.g. 2025-09-30T09:00:00 [default: none].
    #[arg(long)]
    pub start: Option<String>,

    /// The partition to reserve nodes in [default: reserved].
    #[arg(long)]
    pub partition: Option<String>,

    /// Users allowed to use the reservation [default: none].
    #[arg(long)]
    pub users: Option<String>,

    /// Accounts allowed to use the reservation [default: none].
    #[arg(long)]
    pub accounts: Option<String>,
}
