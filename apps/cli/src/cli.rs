//! # Command-Line Interface
//!
//! ```text
//! renewal [--json] [--current-year YEAR] <COMMAND>
//!
//!   calc         --value V --issue Y --renewal Y   (or --input FILE|-)
//!   words        <NUMBER>
//!   check-words  <WORDS>...
//!   schema
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "renewal",
    version,
    about = "Adjusted monthly value calculator with words transcription"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        value_name = "YEAR",
        help = "Use this as the current year instead of the system clock"
    )]
    pub current_year: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a contract and print its adjusted monthly value
    Calc(CalcArgs),

    /// Spell out a number the way `calc` does
    Words {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Parse a words transcription back into digits
    CheckWords {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Print the input form description
    Schema,
}

/// Inputs for `calc`.
///
/// A missing flag becomes a field-level validation message, not a usage
/// error.
#[derive(Args, Debug, Default, Clone)]
pub struct CalcArgs {
    #[arg(long = "value", value_name = "AMOUNT", allow_hyphen_values = true)]
    pub contract_value: Option<String>,

    #[arg(long = "issue", value_name = "YEAR", allow_hyphen_values = true)]
    pub issue_year: Option<String>,

    #[arg(long = "renewal", value_name = "YEAR", allow_hyphen_values = true)]
    pub renewal_year: Option<String>,

    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["contract_value", "issue_year", "renewal_year"],
        help = "Read the form as JSON from FILE, or from stdin with '-'"
    )]
    pub input: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc_flags() {
        let cli = Cli::try_parse_from([
            "renewal", "--json", "calc", "--value", "50000", "--issue", "2020", "--renewal",
            "2023",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Calc(args) => {
                assert_eq!(args.contract_value.as_deref(), Some("50000"));
                assert_eq!(args.renewal_year.as_deref(), Some("2023"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_negative_value_reaches_validation() {
        let cli = Cli::try_parse_from(["renewal", "calc", "--value", "-5"]).unwrap();
        match cli.command {
            Commands::Calc(args) => assert_eq!(args.contract_value.as_deref(), Some("-5")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_input_conflicts_with_flags() {
        let result =
            Cli::try_parse_from(["renewal", "calc", "--input", "-", "--value", "100"]);
        assert!(result.is_err());
    }
}
