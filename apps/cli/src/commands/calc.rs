//! # Calc Command
//!
//! The one-shot form submission.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ renewal calc --value 12000 --issue 2021 --renewal 2022               │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Build RawContractInput (flags, or --input JSON)            │    │
//! │  │  2. submit() with the configured clock and separators          │    │
//! │  │  3. Calculated → three lines on stdout                         │    │
//! │  │     Rejected   → one line per field on stderr, exit 2          │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  1,103.300                                                              │
//! │  One Thousand One Hundred Three Point Three Zero Zero                   │
//! │  Not Applicable                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::io;
use std::path::Path;

use renewal_core::{submit, RawContractInput, RawValue, Submission};
use tracing::{debug, info};

use crate::cli::CalcArgs;
use crate::config::{AppConfig, OutputMode};
use crate::error::{to_pretty_json, AppError};

/// Runs one submission and renders the report.
pub fn calc(args: &CalcArgs, config: &AppConfig) -> Result<String, AppError> {
    let raw = raw_input(args)?;
    debug!(?raw, "calc command");

    let outcome = submit(&raw, &config.clock(), &config.number_format)?;
    let report = match &outcome {
        Submission::Calculated { report } => report,
        Submission::Rejected { errors } => {
            info!(fields = errors.len(), "input rejected");
            return Err(AppError::Rejected(errors.clone()));
        }
    };

    info!(
        value = report.value,
        months = report.breakdown.months,
        "adjusted monthly value calculated"
    );

    match config.output {
        OutputMode::Text => Ok(report.display_lines().join("\n")),
        OutputMode::Json => to_pretty_json(&outcome),
    }
}

/// Builds the raw form from `--input` or from the individual flags.
fn raw_input(args: &CalcArgs) -> Result<RawContractInput, AppError> {
    if let Some(path) = &args.input {
        let document = read_document(path)?;
        return serde_json::from_str(&document).map_err(AppError::InvalidInput);
    }

    Ok(RawContractInput {
        contract_value: args.contract_value.clone().map(RawValue::Text),
        issue_year: args.issue_year.clone().map(RawValue::Text),
        renewal_year: args.renewal_year.clone().map(RawValue::Text),
    })
}

fn read_document(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renewal_core::Field;

    fn config() -> AppConfig {
        AppConfig {
            current_year: Some(2026),
            ..AppConfig::default()
        }
    }

    fn args(value: &str, issue: &str, renewal: &str) -> CalcArgs {
        CalcArgs {
            contract_value: Some(value.to_string()),
            issue_year: Some(issue.to_string()),
            renewal_year: Some(renewal.to_string()),
            input: None,
        }
    }

    #[test]
    fn test_text_output() {
        let out = calc(&args("12000", "2021", "2022"), &config()).unwrap();
        assert_eq!(
            out,
            "1,103.300\nOne Thousand One Hundred Three Point Three Zero Zero\nNot Applicable"
        );
    }

    #[test]
    fn test_json_output() {
        let config = AppConfig {
            output: OutputMode::Json,
            ..config()
        };
        let out = calc(&args("50000", "2020", "2023"), &config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["status"], "calculated");
        assert_eq!(json["report"]["decimalDisplay"], "1,532.361");
        assert_eq!(json["report"]["breakdown"]["months"], 36);
    }

    #[test]
    fn test_rejection() {
        let err = calc(&args("50000", "2022", "2021"), &config()).unwrap_err();
        match err {
            AppError::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.get(Field::RenewalYear).is_some());
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_flags_are_field_errors() {
        let err = calc(&CalcArgs::default(), &config()).unwrap_err();
        assert!(matches!(err, AppError::Rejected(errors) if errors.len() == 3));
    }

    #[test]
    fn test_pinned_year_bounds_issue_year() {
        let err = calc(&args("100", "2026", "2027"), &AppConfig {
            current_year: Some(2025),
            ..AppConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Rejected(_)));
    }

    #[test]
    fn test_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        fs::write(
            &path,
            r#"{ "contractValue": 12000, "issueYear": "2021", "renewalYear": 2022 }"#,
        )
        .unwrap();

        let out = calc(
            &CalcArgs {
                input: Some(path),
                ..CalcArgs::default()
            },
            &config(),
        )
        .unwrap();
        assert!(out.starts_with("1,103.300\n"));
    }

    #[test]
    fn test_input_file_errors() {
        let missing = CalcArgs {
            input: Some("/definitely/not/here.json".into()),
            ..CalcArgs::default()
        };
        assert!(matches!(calc(&missing, &config()), Err(AppError::Io(_))));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        fs::write(&path, "not json").unwrap();
        let broken = CalcArgs {
            input: Some(path),
            ..CalcArgs::default()
        };
        assert!(matches!(
            calc(&broken, &config()),
            Err(AppError::InvalidInput(_))
        ));
    }
}
