use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::PRIMARY_STYLE;
use crate::error::ctx;

/// Defaults for the reservation command, overridden by the matching flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReservationDefaults {
    /// Default for `--start`.
    pub start: Option<String>,

    /// Default for `--partition`.
    pub partition: Option<String>,

    /// Default for `--users`.
    pub users: Option<String>,

    /// Default for `--accounts`.
    pub accounts: Option<String>,
}

/// The contents of a `rescalc.toml` file.
///
/// Every field is optional, a flag on the command line always wins over the
/// value here.
///
/// # Examples
///
/// ```toml
/// buffer_fraction = 0.15
///
/// [reservation]
/// partition = "compute"
/// accounts = "research-project"
/// ```
//
// adding a field? update the breaking changes tests in ./tests/config.rs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default for `--b`.
    pub buffer_fraction: Option<f64>,

    /// Defaults for the reservation command.
    #[serde(default)]
    pub reservation: ReservationDefaults,
}

impl Config {
    /// Load a config from a toml file.
    pub fn from_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).with_context(ctx!(
          "Could not read the config file {path:?}", ;
          "Ensure that the file exists and you have permissions to access it",
        ))?;

        Config::parse(&contents).with_context(ctx!(
          "Could not parse {path:?}", ;
          "Supported keys are {PRIMARY_STYLE}buffer_fraction{PRIMARY_STYLE:#} and the \
          {PRIMARY_STYLE}[reservation]{PRIMARY_STYLE:#} table",
        ))
    }

    /// Parse the contents of a config file.
    pub fn parse(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
