use std::env;
use std::io::stdout;
use std::io::Write;
use std::path::Path;
use std::process::exit;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use colog::formatter;
use log::debug;
use log::trace;
use log::LevelFilter;
use rescalc_lib::calculator::solve;
use rescalc_lib::config::Config;
use rescalc_lib::constants::BUFFER_DEFAULT;
use rescalc_lib::constants::CONFIG_DEFAULT;
use rescalc_lib::constants::ERROR_STYLE;
use rescalc_lib::constants::PARTITION_DEFAULT;
use rescalc_lib::constants::PRIMARY_STYLE;
use rescalc_lib::ctx;
use rescalc_lib::error::Ctx;
use rescalc_lib::error::InvalidInputError;
use rescalc_lib::request::Capacities;
use rescalc_lib::request::JobShape;
use rescalc_lib::request::ReservationMetadata;
use rescalc_lib::request::ReservationRequest;

use super::log::LogTokens;
use super::printing::get_styles;
use crate::cli::def::Cli;
use crate::cli::printing::display_solution;

/// This function parses the command that rescalc was run with.
pub fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    let command = Cli::from_arg_matches(&styled).unwrap_or_else(|e| e.exit());

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    if let Err(e) = process_command(&command) {
        if backtrace_enabled {
            eprintln!("{:?}", e);
        } else {
            eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
            eprint!("{}", e);
        }

        exit(1);
    }
}

/// CLAP has parsed the command, now we process it.
pub fn process_command(cmd: &Cli) -> Result<()> {
    setup_logging(cmd)?;

    let config = read_config(cmd.config.as_deref())?;
    trace!("The config is: {config:#?}");

    let request = build_request(cmd, &config)?;
    trace!("The request is: {request:#?}");

    run(&request, &mut stdout())
}

/// Calculate the missing capacity of a request and report it.
pub fn run(request: &ReservationRequest, f: &mut impl Write) -> Result<()> {
    debug!(
        "Effective node-hours per job: {} * {} * (1 + {}) = {}",
        request.shape.nodes_per_job,
        request.shape.hours_per_job,
        request.shape.buffer_fraction,
        request.shape.effective_node_hours()
    );
    debug!("Calculating {}", request.provided.missing());

    let solution = solve(request).map_err(with_help)?;
    trace!("The solution is: {solution:#?}");

    display_solution(f, &solution, &request.metadata)
}

/// Read the config file, falling back to the built-in defaults when no
/// config was asked for and none is present.
pub fn read_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        debug!("Reading the config: {path:?}");
        return Config::from_file(path);
    }

    let default = CONFIG_DEFAULT();

    if default.is_file() {
        debug!("Reading the config: {default:?}");
        Config::from_file(&default)
    } else {
        debug!("No config at {default:?}, using the built-in defaults");
        Ok(Config::default())
    }
}

/// Combine the command line with the config into a validated request.
///
/// Flags take precedence over the config, which takes precedence over the
/// built-in defaults.
pub fn build_request(cmd: &Cli, config: &Config) -> Result<ReservationRequest> {
    let shape = JobShape {
        nodes_per_job: cmd.shape.nodes_per_job,
        hours_per_job: cmd.shape.hours_per_job,
        buffer_fraction: cmd
            .shape
            .buffer_fraction
            .or(config.buffer_fraction)
            .unwrap_or(BUFFER_DEFAULT),
    };

    let capacities = Capacities {
        jobs: cmd.capacity.jobs,
        nodes: cmd.capacity.nodes,
        hours: cmd.capacity.hours,
    };

    let defaults = &config.reservation;
    let flags = &cmd.reservation;

    let metadata = ReservationMetadata {
        start: resolve(&flags.start, &defaults.start, ""),
        partition: resolve(&flags.partition, &defaults.partition, PARTITION_DEFAULT),
        users: resolve(&flags.users, &defaults.users, ""),
        accounts: resolve(&flags.accounts, &defaults.accounts, ""),
    };

    ReservationRequest::new(shape, capacities, metadata).map_err(with_help)
}

fn with_help(err: InvalidInputError) -> anyhow::Error {
    let help = input_help(&err);
    anyhow!(err).context(Ctx("", help))
}

fn resolve(flag: &Option<String>, config: &Option<String>, default: &str) -> String {
    flag.as_ref()
        .or(config.as_ref())
        .map_or_else(|| default.to_string(), Clone::clone)
}

fn input_help(err: &InvalidInputError) -> String {
    match err {
        InvalidInputError::CapacityCount { provided } => format!(
            "{provided} of them were given, leave out the one to calculate: \
            {PRIMARY_STYLE}--R 100 --H 50{PRIMARY_STYLE:#} calculates the number of jobs"
        ),
        InvalidInputError::NotPositive { .. } => {
            "Node counts, job counts and hours have to be larger than zero".to_string()
        }
        InvalidInputError::NegativeBuffer(_) => format!(
            "The buffer is a safety margin on top of each job, use {PRIMARY_STYLE}--b 0{PRIMARY_STYLE:#} \
            for none or {PRIMARY_STYLE}--b 0.15{PRIMARY_STYLE:#} for +15%"
        ),
        InvalidInputError::StartTime(_) => format!(
            "Use {PRIMARY_STYLE}now{PRIMARY_STYLE:#}, an offset like {PRIMARY_STYLE}now+1hour{PRIMARY_STYLE:#}, \
            a date like 2025-09-30 or a time like 2025-09-30T09:00:00"
        ),
        InvalidInputError::NodeHours(_) => {
            "The nodes and hours per job multiply to more or less than a number can hold".to_string()
        }
        InvalidInputError::OutOfRange { flag, .. } => format!(
            "{flag} would not fit in a whole count, try a smaller reservation or larger jobs"
        ),
    }
}

fn setup_logging(cmd: &Cli) -> Result<()> {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens));

    if cmd.verbose == 2 {
        log_build.filter(None, LevelFilter::Trace);
    } else if cmd.verbose == 1 {
        log_build.filter(None, LevelFilter::Debug);
    } else if cmd.verbose == 0 {
        log_build.filter(None, LevelFilter::Info);
    } else {
        return Err(anyhow!("Only two levels of verbosity supported (ie. -vv)")).context("");
    }

    log_build.try_init().with_context(ctx!(
        "Failed to initialize the command line interface", ;
        "Make sure you are using a supported terminal",
    ))
}

#[cfg(test)]
#[path = "tests/process.rs"]
mod tests;
