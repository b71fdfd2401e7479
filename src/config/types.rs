//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAILDIR, DEFAULT_OUTPUT, DEFAULT_WHITELIST, DNS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically; unspecified fields fall back to the
/// home-relative defaults.
///
/// # Examples
///
/// ```no_run
/// use phishblock::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     maildir: PathBuf::from("/var/mail/spam/cur"),
///     output: PathBuf::from("/etc/blocker/phishing.txt"),
///     dns_check: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one spam message per file
    pub maildir: PathBuf,

    /// Whitelist file (one domain per line, may be absent)
    pub whitelist: PathBuf,

    /// Blocklist file that is merged and rewritten on every run
    pub output: PathBuf,

    /// Probe every candidate domain with a DNS lookup (diagnostics only)
    pub dns_check: bool,

    /// Per-lookup timeout for the DNS probe in seconds
    pub dns_timeout_seconds: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maildir: home_relative(DEFAULT_MAILDIR),
            whitelist: home_relative(DEFAULT_WHITELIST),
            output: home_relative(DEFAULT_OUTPUT),
            dns_check: true,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Resolves `relative` against the user's home directory.
///
/// Falls back to the current directory when no home directory is known.
pub fn home_relative(relative: impl AsRef<Path>) -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(relative)
}

/// Command-line options.
///
/// Path options left unset fall back to the defaults of [`Config`].
///
/// # Examples
///
/// ```bash
/// # Scan the default Evolution spam folder
/// phishblock
///
/// # Custom locations, no DNS probing
/// phishblock --maildir ~/Mail/Spam/cur --output /etc/pihole/phishing.txt --no-dns-check
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "phishblock",
    about = "Extracts domains from spam mails and merges them into a blocklist file."
)]
pub struct Cli {
    /// Directory of spam mails (one message per file)
    #[arg(long, env = "PHISHBLOCK_MAILDIR", value_parser)]
    pub maildir: Option<PathBuf>,

    /// Whitelist file, one domain per line
    #[arg(long, env = "PHISHBLOCK_WHITELIST", value_parser)]
    pub whitelist: Option<PathBuf>,

    /// Blocklist output file
    #[arg(long, env = "PHISHBLOCK_OUTPUT", value_parser)]
    pub output: Option<PathBuf>,

    /// Skip the DNS resolvability probe
    #[arg(long)]
    pub no_dns_check: bool,

    /// Per-lookup DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Converts parsed options into a library [`Config`].
    pub fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            maildir: self.maildir.unwrap_or(defaults.maildir),
            whitelist: self.whitelist.unwrap_or(defaults.whitelist),
            output: self.output.unwrap_or(defaults.output),
            dns_check: !self.no_dns_check,
            dns_timeout_seconds: self.dns_timeout_seconds,
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.dns_check);
        assert_eq!(config.dns_timeout_seconds, DNS_TIMEOUT_SECS);
        assert!(config.maildir.ends_with(DEFAULT_MAILDIR));
        assert!(config.whitelist.ends_with(DEFAULT_WHITELIST));
        assert!(config.output.ends_with(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_home_relative_joins_path() {
        let path = home_relative("some/file.txt");
        assert!(path.ends_with("some/file.txt"));
    }

    #[test]
    fn test_cli_into_config_overrides_paths() {
        let cli = Cli {
            maildir: Some(PathBuf::from("/tmp/spam")),
            whitelist: None,
            output: Some(PathBuf::from("/tmp/out.txt")),
            no_dns_check: true,
            dns_timeout_seconds: 7,
            log_level: LogLevel::Debug,
            log_format: LogFormat::Json,
        };
        let config = cli.into_config();
        assert_eq!(config.maildir, PathBuf::from("/tmp/spam"));
        assert_eq!(config.output, PathBuf::from("/tmp/out.txt"));
        assert!(config.whitelist.ends_with(DEFAULT_WHITELIST));
        assert!(!config.dns_check);
        assert_eq!(config.dns_timeout_seconds, 7);
    }
}
