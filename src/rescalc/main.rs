//! `rescalc` works out how many jobs fit in a reservation, how many nodes a
//! batch needs, or how long the nodes have to be reserved for.

/// The command line interface and relevant structures.
#[cfg(not(tarpaulin_include))]
pub mod cli;

/// Building the reservation command for Slurm.
pub mod slurm;

/// The main CLI entry-point of the `rescalc` utility.
///
/// This function parses command-line arguments, calculates the missing
/// capacity and prints it together with a reservation command.
#[cfg(not(tarpaulin_include))]
fn main() {
    cli::process::parse_command();
}
