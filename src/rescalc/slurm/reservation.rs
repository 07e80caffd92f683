use std::fmt::Display;

use rescalc_lib::constants::LINE_CONTINUATION;
use rescalc_lib::constants::SCONTROL_CREATE;
use rescalc_lib::request::ReservationMetadata;

/// Creates the duration of a reservation as `HH:MM:SS`.
///
/// Minutes are rounded to the nearest whole minute (ties to even) and
/// seconds are always `00`. Hours are not wrapped into days, so 25 hours
/// is `25:00:00`.
pub fn format_reservation_duration(hours: f64) -> String {
    let mut whole_hours = hours.trunc() as u64;
    let mut minutes = ((hours - hours.trunc()) * 60.0).round_ties_even() as u64;

    if minutes == 60 {
        whole_hours += 1;
        minutes = 0;
    }

    format!("{:0>2}:{:0>2}:{:0>2}", whole_hours, minutes, 0)
}

/// A `scontrol create reservation` command, one `Key=Value` part per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationCommand {
    /// The command itself followed by its arguments, in order.
    pub parts: Vec<String>,
}

impl ReservationCommand {
    /// Build the reservation command for `nodes` nodes during `hours` hours.
    ///
    /// Start, partition, users and accounts are left out entirely when empty.
    pub fn new(nodes: f64, hours: f64, metadata: &ReservationMetadata) -> Self {
        let optional = |key: &str, value: &str| {
            (!value.is_empty()).then(|| format!("{key}={value}"))
        };

        let parts = [
            Some(SCONTROL_CREATE.to_string()),
            optional("StartTime", &metadata.start),
            Some(format!("Duration={}", format_reservation_duration(hours))),
            optional("PartitionName", &metadata.partition),
            Some(format!("TRES=Nodes={}", nodes.trunc() as u64)),
            optional("Users", &metadata.users),
            optional("Accounts", &metadata.accounts),
        ];

        ReservationCommand {
            parts: parts.into_iter().flatten().collect(),
        }
    }
}

impl Display for ReservationCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.parts.join(LINE_CONTINUATION))
    }
}

#[cfg(test)]
#[path = "tests/reservation.rs"]
mod tests;
