//! # Renewal CLI Library
//!
//! The presentation layer for `renewal-core`: it gathers form values,
//! supplies the clock, prints whatever strings the core returns, and turns
//! failures into exit codes.
//!
//! ## Module Organization
//! ```text
//! renewal_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── RENEWAL_* environment configuration
//! ├── clock.rs        ◄─── System clock behind the core's Clock trait
//! ├── commands/
//! │   ├── calc.rs     ◄─── Form submission
//! │   ├── words.rs    ◄─── Words rendering and checking
//! │   └── schema.rs   ◄─── Form description
//! └── error.rs        ◄─── AppError and exit codes
//! ```

pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{AppConfig, OutputMode};
use error::AppError;

/// Runs the CLI.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse Arguments ── clap exits on --help / usage errors              │
/// │  2. Load Config ────── RENEWAL_* env vars, defaults                     │
/// │  3. Init Logging ───── RUST_LOG or RENEWAL_LOG, to stderr               │
/// │  4. Apply Overrides ── --json, --current-year                           │
/// │  5. Execute ────────── stdout on success, exit code on failure          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            // The environment's output mode may be what failed; only the
            // --json flag is known here.
            report_error(&err, flag_output(&cli));
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(&config.log_filter);
    let config = config.with_overrides(&cli);
    info!(command = ?cli.command, "starting renewal");

    match commands::execute(&cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err, config.output);
            ExitCode::from(err.exit_code())
        }
    }
}

fn flag_output(cli: &Cli) -> OutputMode {
    if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    }
}

fn report_error(err: &AppError, output: OutputMode) {
    match output {
        OutputMode::Json => println!("{:#}", err.to_json()),
        OutputMode::Text => eprintln!("{}", err.to_text()),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RENEWAL_LOG=renewal=trace` - Default filter when `RUST_LOG` is unset
/// - Default: `warn`
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
