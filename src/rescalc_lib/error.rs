use std::error::Error;
use std::fmt::Display;

use crate::constants::ERROR_STYLE;
use crate::constants::HELP_STYLE;

/// The error context structure, provides an explanation and help.
///
/// The first element of the structure is the error's "context".
/// The second element is the help message displayed to the user.
///
/// Both have to implement [Display], and will be displayed when the error is
/// printed.
///
/// # Example
///
/// ```should_panic
/// # use rescalc_lib::error::Ctx;
/// # use anyhow::anyhow;
/// # use anyhow::Result;
/// # use anyhow::Context;
/// # fn main() -> Result<()> {
/// Err(anyhow!("Any struct implementing std::error::Error")).context(Ctx("context", "help"))
/// # }
/// ```
#[derive(Debug)]
pub struct Ctx<A, B>(pub A, pub B)
where
    A: Display,
    B: Display;

impl<A: Display, B: Display> Display for Ctx<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !format!("{}", self.0).is_empty() {
            writeln!(f, "{}caused by:{:#} {}", ERROR_STYLE, ERROR_STYLE, self.0)?;
        }

        if !format!("{}", self.1).is_empty() {
            writeln!(f, "\n{}help:{:#} {}", HELP_STYLE, HELP_STYLE, self.1)?;
        }

        Ok(())
    }
}

/// This is a shorthand for returning the context of a error.
///
/// A macro invocation like so:
/// ```ignore
/// ctx!([context], [context arg 1], [context arg 2], ...; [help], [help args], ...)
/// ```
/// Will desugar to:
/// ```ignore
/// || Ctx(format!([context], [context args]), format!([help], [help args]))
/// ```
///
/// Note the placement of the `;` and `,`. They are required and otherwise the
/// macro will not parse.
///
/// # Example
///
/// ```no_run
/// # use rescalc_lib::error::Ctx;
/// # use rescalc_lib::ctx;
/// # use std::path::PathBuf;
/// # use anyhow::Context;
/// # let path: PathBuf = "/".parse().unwrap();
/// std::fs::read(&path).with_context(ctx!(
///   "Could not read the file {path:?}", ;
///   "Ensure that the file exists and you have permissions to access it",
/// ));
/// ```
#[macro_export]
macro_rules! ctx {
    {$cause: expr,  $($arg_cause: expr)*; $help: expr, $($arg_help: tt)*} => {
      || $crate::error::Ctx(format!($cause, $($arg_cause)*), format!($help, $($arg_help)*))
    };
}

pub use ctx;

/// The ways in which the input of a calculation can be rejected.
///
/// All of these are detected before anything is printed, so a rejected
/// request never produces partial output.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// Not exactly two of `--Q`, `--R` and `--H` were given.
    CapacityCount {
        /// How many of the three were given.
        provided: usize,
    },

    /// A job shape or capacity value is zero, negative or not finite.
    NotPositive {
        /// The flag the value was given with.
        flag: &'static str,

        /// The offending value.
        value: f64,
    },

    /// The buffer fraction is negative or not finite.
    NegativeBuffer(f64),

    /// The reservation start is not a time Slurm understands.
    StartTime(String),

    /// The node-hours of one job overflow or underflow.
    NodeHours(f64),

    /// A capacity does not fit in a whole count, before or after calculating.
    OutOfRange {
        /// The flag of the capacity.
        flag: &'static str,

        /// The offending value.
        value: f64,
    },
}

impl Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputError::CapacityCount { .. } => {
                write!(f, "Provide exactly TWO of --Q --R --H.")
            }
            InvalidInputError::NotPositive { flag, value } => {
                write!(f, "{flag} must be a positive number, got {value}")
            }
            InvalidInputError::NegativeBuffer(value) => {
                write!(f, "--b must be a non-negative fraction, got {value}")
            }
            InvalidInputError::StartTime(value) => {
                write!(f, "--start is not a valid start time: {value:?}")
            }
            InvalidInputError::NodeHours(value) => {
                write!(f, "the node-hours per job are out of range, got {value}")
            }
            InvalidInputError::OutOfRange { flag, value } => {
                write!(f, "{flag} is out of range, got {value}")
            }
        }
    }
}

impl Error for InvalidInputError {}

#[cfg(test)]
#[path = "tests/error.rs"]
mod tests;
