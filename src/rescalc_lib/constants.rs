use std::path::PathBuf;

use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The config file that is read when `--config` is not given, if it exists.
pub const CONFIG_DEFAULT: fn() -> PathBuf = || "./rescalc.toml".into();

/// The partition to reserve in when neither the cli nor the config name one.
pub const PARTITION_DEFAULT: &str = "reserved";

/// The buffer fraction used when neither the cli nor the config set one.
pub const BUFFER_DEFAULT: f64 = 0.0;

/// The literal accepted by Slurm for "start right away".
pub const START_NOW: &str = "now";

/// Named start times Slurm understands.
pub const START_KEYWORDS: [&str; 8] = [
    START_NOW,
    "today",
    "tomorrow",
    "midnight",
    "noon",
    "elevenses",
    "fika",
    "teatime",
];

/// Units of a `now+<count><unit>` start.
pub const START_OFFSET_UNITS: [&str; 10] = [
    "second", "seconds", "minute", "minutes", "hour", "hours", "day", "days", "week", "weeks",
];

/// Date and time layouts accepted for the reservation start.
pub const START_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Date and time layouts with a UTC offset, `Z` is handled as RFC 3339.
pub const START_ZONED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%:z", "%Y-%m-%dT%H:%M%:z"];

/// Date-only layouts accepted for the reservation start.
pub const START_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%y"];

/// Time-of-day layouts, meaning the next time the clock shows it.
pub const START_CLOCK_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Calculated and given capacities above this are no longer whole numbers.
pub const MAX_CAPACITY: f64 = 9_007_199_254_740_992.0;

/// The first part of every reservation command.
pub const SCONTROL_CREATE: &str = "scontrol create reservation";

/// Separates the parts of a reservation command: a shell line continuation.
pub const LINE_CONTINUATION: &str = " \\\n  ";

/// Printed above the reservation command.
pub const SCONTROL_HEADER: &str = "# scontrol (optional):";

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the program name and highlighted values.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold().blink();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();
