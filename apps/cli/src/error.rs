//! # App Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  Command Function  →  Result<String, AppError>                          │
//! │         │                                                               │
//! │         ├── FieldErrors ────────► Rejected        exit 2                │
//! │         ├── bad argument ───────► InvalidArgument exit 64               │
//! │         ├── bad --input JSON ───► InvalidInput    exit 65               │
//! │         ├── unreadable --input ─► Io              exit 74               │
//! │         ├── bad RENEWAL_* ──────► Config          exit 78               │
//! │         ├── CoreError ──────────► Internal        exit 70  (logged)     │
//! │         └── JSON render failure ► Render          exit 70               │
//! │                                                                         │
//! │  --json:  { "status": "error", "code": "CONFIG_ERROR", "message": … }   │
//! │           { "status": "rejected", "errors": { "renewalYear": … } }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use renewal_core::{CoreError, FieldErrors};

use crate::config::ConfigError;

/// Machine-readable error codes for `--json` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input failed validation
    ValidationError,

    /// A command argument could not be used
    InvalidArgument,

    /// `--input` was not a valid form document
    InvalidInput,

    /// `--input` could not be read
    IoError,

    /// Environment configuration is invalid
    ConfigError,

    /// The engine broke one of its own preconditions
    Internal,
}

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation rejected the input; nothing was calculated.
    #[error("{0}")]
    Rejected(FieldErrors),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid input document: {0}")]
    InvalidInput(serde_json::Error),

    #[error("Could not read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(CoreError),

    /// A result could not be written as JSON.
    #[error("Internal error: could not render output: {0}")]
    Render(serde_json::Error),
}

impl From<CoreError> for AppError {
    /// Core errors reaching the CLI mean validated input broke an engine
    /// precondition.
    fn from(err: CoreError) -> Self {
        tracing::error!(error = %err, "core contract violated");
        AppError::Internal(err)
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Rejected(_) => ErrorCode::ValidationError,
            AppError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Config(_) => ErrorCode::ConfigError,
            AppError::Internal(_) | AppError::Render(_) => ErrorCode::Internal,
        }
    }

    /// Process exit status, following sysexits.h where one fits.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Rejected(_) => 2,
            AppError::InvalidArgument(_) => 64,
            AppError::InvalidInput(_) => 65,
            AppError::Internal(_) | AppError::Render(_) => 70,
            AppError::Io(_) => 74,
            AppError::Config(_) => 78,
        }
    }

    /// The JSON document printed for this error in `--json` mode.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            AppError::Rejected(errors) => json!({
                "status": "rejected",
                "errors": errors,
            }),
            other => json!({
                "status": "error",
                "code": other.code(),
                "message": other.to_string(),
            }),
        }
    }

    /// Lines printed to stderr in text mode.
    pub fn to_text(&self) -> String {
        match self {
            AppError::Rejected(errors) => errors
                .iter()
                .map(|(field, error)| format!("{}: {}", field.key(), error))
                .collect::<Vec<_>>()
                .join("\n"),
            other => format!("error: {other}"),
        }
    }
}

/// Pretty-prints a command result for `--json` output.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| {
        tracing::error!(error = %err, "could not render JSON output");
        AppError::Render(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use renewal_core::ValidationError;

    fn rejected() -> AppError {
        let mut errors = FieldErrors::new();
        errors.insert(ValidationError::RenewalNotAfterIssue { issue_year: 2022 });
        AppError::Rejected(errors)
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(rejected().exit_code(), 2);
        assert_eq!(AppError::InvalidArgument("x".into()).exit_code(), 64);
        assert_eq!(
            AppError::from(CoreError::InvalidDuration { months: 0 }).exit_code(),
            70
        );
        assert_eq!(
            AppError::from(ConfigError::InvalidValue("RENEWAL_OUTPUT".into())).exit_code(),
            78
        );
    }

    #[test]
    fn test_render_failure_is_internal() {
        // JSON object keys must be strings; tuple keys cannot be written.
        let unrenderable = std::collections::BTreeMap::from([((1, 2), "x")]);
        let err = to_pretty_json(&unrenderable).unwrap_err();

        assert!(matches!(err, AppError::Render(_)));
        assert_eq!(err.code(), ErrorCode::Internal);
        assert_eq!(err.exit_code(), 70);
        assert_eq!(err.to_json()["code"], "INTERNAL");
    }

    #[test]
    fn test_input_document_error_is_invalid_input() {
        let parse = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = AppError::InvalidInput(parse);
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_rejected_json() {
        assert_eq!(
            rejected().to_json(),
            json!({
                "status": "rejected",
                "errors": { "renewalYear": "Renewal year must be after the issue year (2022)" },
            })
        );
    }

    #[test]
    fn test_error_json() {
        let err = AppError::InvalidArgument("'abc' is not a number".into());
        assert_eq!(
            err.to_json(),
            json!({
                "status": "error",
                "code": "INVALID_ARGUMENT",
                "message": "Invalid argument: 'abc' is not a number",
            })
        );
    }

    #[test]
    fn test_rejected_text_lists_each_field() {
        assert_eq!(
            rejected().to_text(),
            "renewalYear: Renewal year must be after the issue year (2022)"
        );
    }
}
