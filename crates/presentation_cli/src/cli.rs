//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::{BucketingZone, CityName};
use infrastructure::AppConfig;

/// Weatheryze CLI
#[derive(Debug, Parser)]
#[command(name = "weatheryze")]
#[command(author, version, about = "Current weather and 5-day forecast by city", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (default: ./weatheryze.toml if present)
    #[arg(short, long, env = "WEATHERYZE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up the weather for one city
    ///
    /// Example: weatheryze lookup "New York" --timezone America/New_York
    Lookup {
        /// City name
        city: CityName,

        /// Zone for grouping forecast days: local, utc, +05:30 or an IANA name
        #[arg(short, long)]
        timezone: Option<BucketingZone>,

        /// Print the weather view as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read city names from stdin, one per line, until `quit` or end of input
    Repl {
        /// Zone for grouping forecast days: local, utc, +05:30 or an IANA name
        #[arg(short, long)]
        timezone: Option<BucketingZone>,
    },
}

impl Cli {
    /// Apply command-line overrides to a loaded configuration
    ///
    /// Runs before validation so a `--timezone` replaces a broken configured zone.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if self.verbose > 0 {
            config.telemetry.log_filter = log_filter_from_verbosity(self.verbose).to_string();
        }
        if let Some(zone) = self.command.timezone() {
            config.forecast.timezone = zone.to_string();
        }
    }
}

impl Commands {
    /// Bucketing zone given on the command line, if any
    #[must_use]
    pub const fn timezone(&self) -> Option<BucketingZone> {
        match self {
            Self::Lookup { timezone, .. } | Self::Repl { timezone } => *timezone,
        }
    }
}

/// Determine log filter level from verbosity count
#[must_use]
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
