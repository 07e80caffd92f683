use std::io::Write;

use anstyle::AnsiColor;
use anyhow::Result;
use rescalc_lib::calculator::Solution;
use rescalc_lib::constants::style_from_fg;
use rescalc_lib::constants::ERROR_STYLE;
use rescalc_lib::constants::HELP_STYLE;
use rescalc_lib::constants::SCONTROL_HEADER;
use rescalc_lib::request::Capacity;
use rescalc_lib::request::ReservationMetadata;

use crate::slurm::reservation::ReservationCommand;

/// Util function for getting the style for the CLI
#[cfg(not(tarpaulin_include))]
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(style_from_fg(AnsiColor::Yellow).bold())
        .header(style_from_fg(AnsiColor::Green).bold().underline())
        .literal(style_from_fg(AnsiColor::Cyan).bold())
        .invalid(style_from_fg(AnsiColor::Blue).bold())
        .error(ERROR_STYLE)
        .valid(HELP_STYLE)
        .placeholder(style_from_fg(AnsiColor::White))
}

/// Format a capacity the way it is reported: counts are truncated to whole
/// numbers, hours keep two decimals.
pub fn format_capacity(capacity: Capacity, value: f64) -> String {
    match capacity {
        Capacity::Jobs | Capacity::Nodes => format!("{}", value.trunc() as i64),
        Capacity::Hours => format!("{value:.2}"),
    }
}

/// The one line summary of a solution, e.g.
/// `Jobs Q ≈ 250  (NH_eff=20.000 node-hours/job)`.
pub fn format_solution(solution: &Solution) -> String {
    format!(
        "{} ≈ {}  (NH_eff={:.3} node-hours/job)",
        solution.missing,
        format_capacity(solution.missing, solution.value()),
        solution.effective_node_hours
    )
}

/// Write the solution, followed by the command reserving its nodes and hours.
pub fn display_solution(
    f: &mut impl Write,
    solution: &Solution,
    metadata: &ReservationMetadata,
) -> Result<()> {
    writeln!(f, "{}", format_solution(solution))?;

    let command = ReservationCommand::new(solution.nodes, solution.hours, metadata);

    writeln!(f)?;
    writeln!(f, "{SCONTROL_HEADER}")?;
    writeln!(f, "{command}")?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/printing.rs"]
mod tests;
