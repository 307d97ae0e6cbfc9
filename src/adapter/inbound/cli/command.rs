//! Command-line interface definitions.
//!
//! `silverwatch` with no subcommand behaves like `silverwatch run`.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::settings::Config;

/// Telegram bot for silver spot prices and threshold alerts
#[derive(Parser, Debug)]
#[command(name = "silverwatch")]
#[command(version)]
pub struct Cli {
    /// Override log level (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the bot (default)
    Run(RunArgs),

    /// Fetch the current price once and print it
    Price,
}

/// Arguments for `silverwatch run`.
#[derive(Parser, Debug, Clone, Default)]
pub struct RunArgs {
    /// Override the periodic update interval, in seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: Option<u64>,

    /// Override the delay before the first periodic update, in seconds.
    #[arg(long)]
    pub first_delay_secs: Option<u64>,
}

impl Cli {
    /// The subcommand to run, defaulting to `run`.
    #[must_use]
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }

    /// Apply global flags on top of environment configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }
    }
}

impl RunArgs {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(secs) = self.interval_secs {
            config.schedule.period = Duration::from_secs(secs);
        }
        if let Some(secs) = self.first_delay_secs {
            config.schedule.first_delay = Duration::from_secs(secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["silverwatch"]).unwrap();
        assert!(matches!(
            cli.command_or_default(),
            Commands::Run(RunArgs {
                interval_secs: None,
                ..
            })
        ));
    }

    #[test]
    fn run_accepts_interval_override() {
        let cli = Cli::try_parse_from(["silverwatch", "run", "--interval-secs", "300"]).unwrap();
        let Commands::Run(args) = cli.command_or_default() else {
            panic!("expected run");
        };

        let mut config = Config::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.schedule.period, Duration::from_secs(300));
        assert_eq!(config.schedule.first_delay, Duration::from_secs(10));
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Cli::try_parse_from(["silverwatch", "run", "--interval-secs", "0"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli =
            Cli::try_parse_from(["silverwatch", "price", "--json-logs", "--log-level", "debug"])
                .unwrap();
        assert!(matches!(cli.command_or_default(), Commands::Price));

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }
}
