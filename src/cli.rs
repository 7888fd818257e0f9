//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Command`] - the `scan`, `detect` and `timestamp` subcommands
//! - [`PlatformArg`] and [`FormatArg`] - value enums that convert into
//!   the library's [`Platform`] and [`ReportFormat`]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DayOrder, EpochUnit, TimestampConfig};
use crate::format::ReportFormat;
use crate::platform::Platform;

/// Recognize social media data download packages and normalize timestamps.
#[derive(Parser, Debug, Clone)]
#[command(name = "ddpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    ddpack scan takeout-20240724.zip
    ddpack scan upload.zip --platform fb --format json
    ddpack detect instagram-janedoe-2024.zip
    ddpack timestamp 1721418966 \"July 24, 2024, 11:30 PM\"
    ddpack timestamp 03/04/2024 --day-first")]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate an archive against one or all platforms and print a report
    Scan {
        /// Path to the zip archive
        archive: PathBuf,

        /// Only check this platform (default: all)
        #[arg(short, long, value_enum)]
        platform: Option<PlatformArg>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,
    },

    /// Find the first platform that accepts the archive
    Detect {
        /// Path to the zip archive
        archive: PathBuf,
    },

    /// Normalize raw timestamps to ISO 8601
    Timestamp {
        /// Values to normalize (epoch numbers or date strings)
        #[arg(required = true)]
        values: Vec<String>,

        /// Read ambiguous numeric dates as day/month
        #[arg(long)]
        day_first: bool,

        /// Treat epoch numbers as milliseconds
        #[arg(long)]
        millis: bool,
    },
}

impl Command {
    /// Timestamp configuration implied by the `timestamp` flags.
    ///
    /// Other subcommands use the default configuration.
    pub fn timestamp_config(&self) -> TimestampConfig {
        match self {
            Command::Timestamp { day_first, millis, .. } => TimestampConfig::new()
                .with_day_order(if *day_first { DayOrder::DayFirst } else { DayOrder::MonthFirst })
                .with_epoch_unit(if *millis { EpochUnit::Milliseconds } else { EpochUnit::Seconds }),
            _ => TimestampConfig::default(),
        }
    }
}

/// Platform selector for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformArg {
    /// Facebook export
    #[value(alias = "fb")]
    #[serde(alias = "fb")]
    Facebook,

    /// Google Takeout
    #[value(aliases = ["g", "takeout"])]
    #[serde(alias = "g")]
    Google,

    /// Instagram export
    #[value(alias = "ig")]
    #[serde(alias = "ig")]
    Instagram,

    /// TikTok export
    #[value(alias = "tt")]
    #[serde(alias = "tt")]
    Tiktok,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Platform {
        match arg {
            PlatformArg::Facebook => Platform::Facebook,
            PlatformArg::Google => Platform::Google,
            PlatformArg::Instagram => Platform::Instagram,
            PlatformArg::Tiktok => Platform::TikTok,
        }
    }
}

/// Report format selector for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatArg {
    /// One line per platform (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// JSON array
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> ReportFormat {
        match format {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Csv => ReportFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan() {
        let args = Args::try_parse_from(["ddpack", "scan", "upload.zip", "-p", "ig", "--format", "json"]).unwrap();
        match args.command {
            Command::Scan { archive, platform, format } => {
                assert_eq!(archive, PathBuf::from("upload.zip"));
                assert_eq!(platform, Some(PlatformArg::Instagram));
                assert_eq!(format, FormatArg::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_scan_defaults() {
        let args = Args::try_parse_from(["ddpack", "scan", "upload.zip"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(matches!(
            args.command,
            Command::Scan { platform: None, format: FormatArg::Text, .. }
        ));
    }

    #[test]
    fn test_verbose_is_global() {
        let args = Args::try_parse_from(["ddpack", "detect", "a.zip", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_timestamp_config() {
        let args = Args::try_parse_from(["ddpack", "timestamp", "1", "--day-first", "--millis"]).unwrap();
        let config = args.command.timestamp_config();
        assert_eq!(config.day_order, DayOrder::DayFirst);
        assert_eq!(config.epoch_unit, EpochUnit::Milliseconds);

        let args = Args::try_parse_from(["ddpack", "detect", "a.zip"]).unwrap();
        assert_eq!(args.command.timestamp_config(), TimestampConfig::default());
    }

    #[test]
    fn test_timestamp_requires_values() {
        assert!(Args::try_parse_from(["ddpack", "timestamp"]).is_err());
    }

    #[test]
    fn test_platform_conversion() {
        assert_eq!(Platform::from(PlatformArg::Tiktok), Platform::TikTok);
        assert_eq!(PlatformArg::from_str("tt", true).unwrap(), PlatformArg::Tiktok);
        assert_eq!(PlatformArg::from_str("takeout", true).unwrap(), PlatformArg::Google);
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(ReportFormat::from(FormatArg::Csv), ReportFormat::Csv);
        assert_eq!(ReportFormat::from(FormatArg::default()), ReportFormat::Text);
    }

    #[test]
    fn test_platform_arg_serde() {
        let parsed: PlatformArg = serde_json::from_str("\"fb\"").unwrap();
        assert_eq!(parsed, PlatformArg::Facebook);
        assert_eq!(serde_json::to_string(&PlatformArg::Tiktok).unwrap(), "\"tiktok\"");
    }
}
