//! # Renewal CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load configuration from `RENEWAL_*` environment variables
//! 3. Initialize tracing (stderr only, stdout stays copy/paste clean)
//! 4. Run the requested command and map the outcome to an exit code

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    renewal_cli::run()
}
