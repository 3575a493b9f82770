//! # Words Commands
//!
//! `words` spells out an arbitrary number; `check-words` reads a
//! transcription back so a pasted amount can be verified against its digits.

use renewal_core::words::fixed3;
use renewal_core::{parse_words, to_words};
use serde_json::json;
use tracing::debug;

use crate::config::{AppConfig, OutputMode};
use crate::error::{to_pretty_json, AppError};

/// Renders `value` in words. Unlike `calc`, bad input here is an argument
/// error, not a contract breach.
pub fn words(value: &str, config: &AppConfig) -> Result<String, AppError> {
    debug!(value, "words command");

    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidArgument(format!("'{value}' is not a number")))?;

    let fixed = fixed3(number).map_err(|e| AppError::InvalidArgument(e.to_string()))?;
    let words = to_words(number).map_err(|e| AppError::InvalidArgument(e.to_string()))?;

    match config.output {
        OutputMode::Text => Ok(words),
        OutputMode::Json => to_pretty_json(&json!({
            "decimalDisplay": config.number_format.regroup(&fixed),
            "wordsDisplay": words,
        })),
    }
}

/// Parses a words transcription back into a grouped decimal.
pub fn check_words(text: &str, config: &AppConfig) -> Result<String, AppError> {
    debug!(text, "check-words command");

    let fixed = parse_words(text).map_err(|e| AppError::InvalidArgument(e.to_string()))?;
    let display = config.number_format.regroup(&fixed);

    match config.output {
        OutputMode::Text => Ok(display),
        OutputMode::Json => to_pretty_json(&json!({
            "fixed": fixed,
            "decimalDisplay": display,
        })),
    }
}
