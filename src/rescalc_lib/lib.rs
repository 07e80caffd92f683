//! The calculation core of `rescalc`, shared between the binary and its tests.

/// The reservation request: the job shape and the provided capacities.
pub mod request;

/// Deriving the missing capacity of a request.
pub mod calculator;

/// The optional `rescalc.toml` configuration file.
pub mod config;

/// The error handling for `rescalc`.
pub mod error;

/// Constant values.
pub mod constants;
