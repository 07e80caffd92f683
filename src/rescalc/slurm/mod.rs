/// Building the `scontrol` command that reserves the calculated capacity.
///
/// The command is only printed, never run.
pub mod reservation;
