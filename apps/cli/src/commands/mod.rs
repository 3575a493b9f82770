//! # Commands
//!
//! Each command takes its arguments and the [`AppConfig`], calls into
//! `renewal-core`, and returns the text destined for stdout.

pub mod calc;
pub mod schema;
pub mod words;

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::error::AppError;

/// Dispatches a parsed command.
pub fn execute(command: &Commands, config: &AppConfig) -> Result<String, AppError> {
    match command {
        Commands::Calc(args) => calc::calc(args, config),
        Commands::Words { value } => words::words(value, config),
        Commands::CheckWords { words } => words::check_words(&words.join(" "), config),
        Commands::Schema => schema::schema(config),
    }
}
