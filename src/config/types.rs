//! Configuration types and CLI options.
//!
//! This module defines the command-line interface and the enums used for
//! logging configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
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
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "go2web",
    version,
    about = "Minimal web client: fetch a URL or search the web over hand-built HTTP/1.1"
)]
pub struct Cli {
    /// Fetch content from URL
    #[arg(short = 'u', long = "url", value_name = "URL", conflicts_with = "search")]
    pub url: Option<String>,

    /// Search terms to query on Bing
    #[arg(short = 's', long = "search", value_name = "TERM", num_args = 1..)]
    pub search: Option<Vec<String>>,

    /// Prefer JSON responses (sends Accept: application/json)
    #[arg(long)]
    pub json: bool,

    /// Override the cache directory (default: ~/.go2web_cache)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
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
    fn test_cli_parses_url_mode() {
        let cli = Cli::try_parse_from(["go2web", "-u", "example.com"]).expect("parse");
        assert_eq!(cli.url.as_deref(), Some("example.com"));
        assert!(cli.search.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parses_multi_word_search() {
        let cli = Cli::try_parse_from(["go2web", "-s", "rust", "http", "client"]).expect("parse");
        assert_eq!(
            cli.search,
            Some(vec![
                "rust".to_string(),
                "http".to_string(),
                "client".to_string()
            ])
        );
    }

    #[test]
    fn test_cli_rejects_url_and_search_together() {
        let result = Cli::try_parse_from(["go2web", "-u", "example.com", "-s", "rust"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_json_flag() {
        let cli = Cli::try_parse_from(["go2web", "--json", "-u", "api.example.com"]).expect("parse");
        assert!(cli.json);
    }
}
