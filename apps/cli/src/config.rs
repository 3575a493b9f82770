//! # Configuration
//!
//! Loaded from environment variables with fallback to defaults, then
//! overridden by command-line flags.
//!
//! ## Environment Variables
//! ```text
//! ┌────────────────────────────────┬───────────────────┬──────────────────┐
//! │ Variable                       │ Default           │ Example          │
//! ├────────────────────────────────┼───────────────────┼──────────────────┤
//! │ RENEWAL_CURRENT_YEAR           │ system clock      │ 2026             │
//! │ RENEWAL_THOUSANDS_SEPARATOR    │ ,                 │ . / space / none │
//! │ RENEWAL_DECIMAL_POINT          │ .                 │ ,                │
//! │ RENEWAL_OUTPUT                 │ text              │ json             │
//! │ RENEWAL_LOG                    │ warn              │ debug            │
//! └────────────────────────────────┴───────────────────┴──────────────────┘
//! ```
//! `RUST_LOG`, when set, takes precedence over `RENEWAL_LOG`.

use std::env;

use renewal_core::NumberFormat;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::clock::AppClock;

pub const ENV_CURRENT_YEAR: &str = "RENEWAL_CURRENT_YEAR";
pub const ENV_THOUSANDS_SEPARATOR: &str = "RENEWAL_THOUSANDS_SEPARATOR";
pub const ENV_DECIMAL_POINT: &str = "RENEWAL_DECIMAL_POINT";
pub const ENV_OUTPUT: &str = "RENEWAL_OUTPUT";
pub const ENV_LOG: &str = "RENEWAL_LOG";

/// Log filter used when neither `RUST_LOG` nor `RENEWAL_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One display line per row, errors on stderr.
    #[default]
    Text,
    /// A single JSON document on stdout.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Pinned current year; `None` reads the system clock.
    pub current_year: Option<i64>,

    /// Separators for the decimal display line.
    pub number_format: NumberFormat,

    pub output: OutputMode,

    /// Default tracing filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            current_year: None,
            number_format: NumberFormat::default(),
            output: OutputMode::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(year) = lookup(ENV_CURRENT_YEAR) {
            let year = year
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_CURRENT_YEAR.to_string()))?;
            config.current_year = Some(year);
        }

        if let Some(separator) = lookup(ENV_THOUSANDS_SEPARATOR) {
            config.number_format.grouping = parse_grouping(&separator)?;
        }

        if let Some(point) = lookup(ENV_DECIMAL_POINT) {
            config.number_format.decimal_point = single_char(&point)
                .filter(|c| !c.is_ascii_digit())
                .ok_or_else(|| ConfigError::InvalidValue(ENV_DECIMAL_POINT.to_string()))?;
        }

        if config.number_format.grouping == Some(config.number_format.decimal_point) {
            return Err(ConfigError::SeparatorClash(config.number_format.decimal_point));
        }

        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = match output.trim().to_ascii_lowercase().as_str() {
                "text" => OutputMode::Text,
                "json" => OutputMode::Json,
                _ => return Err(ConfigError::InvalidValue(ENV_OUTPUT.to_string())),
            };
        }

        if let Some(filter) = lookup(ENV_LOG) {
            EnvFilter::try_new(&filter)
                .map_err(|_| ConfigError::InvalidValue(ENV_LOG.to_string()))?;
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Applies command-line flags on top of the environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if cli.json {
            self.output = OutputMode::Json;
        }
        if let Some(year) = cli.current_year {
            self.current_year = Some(year);
        }
        self
    }

    /// The clock validation should read.
    pub fn clock(&self) -> AppClock {
        match self.current_year {
            Some(year) => AppClock::fixed(year),
            None => AppClock::System,
        }
    }
}

fn parse_grouping(value: &str) -> Result<Option<char>, ConfigError> {
    match value {
        "none" | "" => Ok(None),
        "space" => Ok(Some(' ')),
        other => single_char(other)
            .filter(|c| !c.is_ascii_digit())
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidValue(ENV_THOUSANDS_SEPARATOR.to_string())),
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Thousands separator and decimal point are both '{0}'")]
    SeparatorClash(char),
}
