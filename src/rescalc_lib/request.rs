use std::fmt::Display;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;

use crate::constants::PARTITION_DEFAULT;
use crate::constants::START_CLOCK_FORMATS;
use crate::constants::START_DATE_FORMATS;
use crate::constants::START_KEYWORDS;
use crate::constants::START_NOW;
use crate::constants::START_OFFSET_UNITS;
use crate::constants::START_TIME_FORMATS;
use crate::constants::START_ZONED_FORMATS;
use crate::error::InvalidInputError;

/// One of the three capacity quantities of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capacity {
    /// The number of jobs in the batch (`Q`).
    Jobs,

    /// The number of nodes reserved (`R`).
    Nodes,

    /// The wall-clock hours reserved (`H`).
    Hours,
}

impl Capacity {
    /// The single letter used for this quantity on the command line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Capacity::Jobs => "Q",
            Capacity::Nodes => "R",
            Capacity::Hours => "H",
        }
    }

    /// The command line flag.
    pub fn flag(&self) -> &'static str {
        match self {
            Capacity::Jobs => "--Q",
            Capacity::Nodes => "--R",
            Capacity::Hours => "--H",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Capacity::Jobs => "Jobs",
            Capacity::Nodes => "Nodes",
            Capacity::Hours => "Hours",
        }
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label(), self.symbol())
    }
}

/// The resources a single job of the batch needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobShape {
    /// Nodes used by one job (`N`).
    pub nodes_per_job: f64,

    /// Hours one job runs for (`S`).
    pub hours_per_job: f64,

    /// Safety margin on top of the node-hours of a job (`b`).
    pub buffer_fraction: f64,
}

impl JobShape {
    /// Node-hours of one job, without the buffer.
    pub fn node_hours(&self) -> f64 {
        self.nodes_per_job * self.hours_per_job
    }

    /// Node-hours of one job with the buffer applied: `N * S * (1 + b)`.
    pub fn effective_node_hours(&self) -> f64 {
        self.node_hours() * (1.0 + self.buffer_fraction)
    }
}

/// The capacities as they were given, any of which may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Capacities {
    /// Job count.
    pub jobs: Option<f64>,

    /// Node count.
    pub nodes: Option<f64>,

    /// Hours.
    pub hours: Option<f64>,
}

impl Capacities {
    /// How many of the three capacities are present.
    pub fn provided(&self) -> usize {
        [self.jobs, self.nodes, self.hours]
            .iter()
            .filter(|x| x.is_some())
            .count()
    }
}

/// Exactly two provided capacities, named by the one that is missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Provided {
    /// Jobs are missing.
    NodesAndHours {
        /// Node count.
        nodes: f64,
        /// Hours.
        hours: f64,
    },

    /// Nodes are missing.
    JobsAndHours {
        /// Job count.
        jobs: f64,
        /// Hours.
        hours: f64,
    },

    /// Hours are missing.
    JobsAndNodes {
        /// Job count.
        jobs: f64,
        /// Node count.
        nodes: f64,
    },
}

impl Provided {
    /// The capacity that has to be calculated.
    pub fn missing(&self) -> Capacity {
        match self {
            Provided::NodesAndHours { .. } => Capacity::Jobs,
            Provided::JobsAndHours { .. } => Capacity::Nodes,
            Provided::JobsAndNodes { .. } => Capacity::Hours,
        }
    }
}

impl TryFrom<Capacities> for Provided {
    type Error = InvalidInputError;

    fn try_from(value: Capacities) -> Result<Self, Self::Error> {
        let provided = match (value.jobs, value.nodes, value.hours) {
            (None, Some(nodes), Some(hours)) => Provided::NodesAndHours { nodes, hours },
            (Some(jobs), None, Some(hours)) => Provided::JobsAndHours { jobs, hours },
            (Some(jobs), Some(nodes), None) => Provided::JobsAndNodes { jobs, nodes },
            _ => {
                return Err(InvalidInputError::CapacityCount {
                    provided: value.provided(),
                })
            }
        };

        for (capacity, amount) in [
            (Capacity::Jobs, value.jobs),
            (Capacity::Nodes, value.nodes),
            (Capacity::Hours, value.hours),
        ] {
            if let Some(amount) = amount {
                positive(capacity.flag(), amount)?;
            }
        }

        Ok(provided)
    }
}

/// What goes into the optional reservation command besides nodes and hours.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationMetadata {
    /// When the reservation starts, empty to leave it to the scheduler.
    pub start: String,

    /// The partition to reserve nodes in.
    pub partition: String,

    /// Users allowed to use the reservation, empty for none.
    pub users: String,

    /// Accounts allowed to use the reservation, empty for none.
    pub accounts: String,
}

impl Default for ReservationMetadata {
    fn default() -> Self {
        ReservationMetadata {
            start: String::new(),
            partition: PARTITION_DEFAULT.to_string(),
            users: String::new(),
            accounts: String::new(),
        }
    }
}

/// A complete and validated calculation request.
///
/// Once constructed, the job shape is positive, the buffer is non-negative,
/// the node-hours per job are finite and exactly two capacities are known.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRequest {
    /// The shape of a single job.
    pub shape: JobShape,

    /// The two known capacities.
    pub provided: Provided,

    /// Metadata for the reservation command.
    pub metadata: ReservationMetadata,
}

impl ReservationRequest {
    /// Validate the input of a calculation.
    ///
    /// The capacity count is checked first, so giving the wrong number of
    /// `--Q`, `--R` and `--H` is always what gets reported.
    pub fn new(
        shape: JobShape,
        capacities: Capacities,
        metadata: ReservationMetadata,
    ) -> Result<Self, InvalidInputError> {
        let provided = Provided::try_from(capacities)?;

        positive("--N", shape.nodes_per_job)?;
        positive("--S", shape.hours_per_job)?;

        if !shape.buffer_fraction.is_finite() || shape.buffer_fraction < 0.0 {
            return Err(InvalidInputError::NegativeBuffer(shape.buffer_fraction));
        }

        let node_hours = shape.effective_node_hours();
        if !node_hours.is_finite() || node_hours <= 0.0 {
            return Err(InvalidInputError::NodeHours(node_hours));
        }

        validate_start(&metadata.start)?;

        Ok(ReservationRequest {
            shape,
            provided,
            metadata,
        })
    }
}

/// Check that the reservation start is empty or a time Slurm accepts.
///
/// Accepted are the Slurm keywords (`now`, `midnight`, `teatime`, ...),
/// offsets from now like `now+2hours`, clock times like `09:30`, dates like
/// `2025-09-30` or `09/30/25`, and ISO-8601 date-times with or without a
/// `Z` or UTC offset.
pub fn validate_start(start: &str) -> Result<(), InvalidInputError> {
    if start.is_empty() || START_KEYWORDS.contains(&start) || is_relative_start(start) {
        return Ok(());
    }

    let is_date_time = START_TIME_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(start, format).is_ok())
        || START_ZONED_FORMATS
            .iter()
            .any(|format| DateTime::parse_from_str(start, format).is_ok())
        || DateTime::parse_from_rfc3339(start).is_ok();

    let is_date = START_DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(start, format).is_ok());

    let is_clock = START_CLOCK_FORMATS
        .iter()
        .any(|format| NaiveTime::parse_from_str(start, format).is_ok());

    if is_date_time || is_date || is_clock {
        Ok(())
    } else {
        Err(InvalidInputError::StartTime(start.to_string()))
    }
}

/// `now+<count>[unit]` or `now-<count>[unit]`, the unit defaulting to seconds.
fn is_relative_start(start: &str) -> bool {
    let Some(offset) = start
        .strip_prefix(START_NOW)
        .and_then(|rest| rest.strip_prefix(['+', '-']))
    else {
        return false;
    };

    let unit_at = offset
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(offset.len());
    let (count, unit) = offset.split_at(unit_at);

    !count.is_empty() && (unit.is_empty() || START_OFFSET_UNITS.contains(&unit))
}

fn positive(flag: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidInputError::NotPositive { flag, value })
    }
}

#[cfg(test)]
#[path = "tests/request.rs"]
mod tests;
