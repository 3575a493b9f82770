//! # Error Types
//!
//! Domain-specific error types for renewal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  User input (recoverable, shown next to the offending field)           │
//! │  ├── ValidationError  - One violated rule on one field                 │
//! │  └── FieldErrors      - Every violation from a single validation pass  │
//! │                                                                         │
//! │  Contract breaches (never reachable through validated input)           │
//! │  └── CoreError        - InvalidDuration, NegativeValue, ...            │
//! │                                                                         │
//! │  CLI errors (separate crate)                                           │
//! │  └── AppError         - What the terminal sees (code + message)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each validation variant renders the message shown under its field

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::input::Field;

// =============================================================================
// Core Error
// =============================================================================

/// Precondition violations inside the engine.
///
/// None of these can be produced from input that passed
/// [`validate`](crate::validation::validate). When one shows up the caller
/// broke a contract, and the presentation layer should fail loudly instead
/// of guessing a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The calculator was handed a contract whose duration is not positive.
    #[error("Invalid contract duration: {months} months (renewal year must follow issue year)")]
    InvalidDuration { months: i64 },

    /// The wordifier has no negative form.
    #[error("Cannot render a negative value in words: {value}")]
    NegativeValue { value: f64 },

    /// NaN or infinity reached a formatter.
    #[error("Cannot render a non-finite value: {value}")]
    NonFiniteValue { value: f64 },

    /// A token in a words transcription is not a number word.
    #[error("Unrecognized number word: '{word}'")]
    UnrecognizedWord { word: String },

    /// The words are all valid but do not form a number.
    #[error("Malformed words transcription: {reason}")]
    MalformedWords { reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Validation Error
// =============================================================================

/// Why a year field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearProblem {
    /// Fractional, infinite, or otherwise not an integer.
    NotWhole,
    /// Before the earliest accepted year.
    TooEarly { min: i64 },
    /// Issue year after the current calendar year.
    InFuture { current_year: i64 },
    /// Too large to be represented exactly.
    TooLate { max: i64 },
}

impl fmt::Display for YearProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearProblem::NotWhole => write!(f, "must be a whole number"),
            YearProblem::TooEarly { min } => write!(f, "must be {min} or later"),
            YearProblem::InFuture { current_year } => {
                write!(f, "cannot be in the future (after {current_year})")
            }
            YearProblem::TooLate { max } => write!(f, "must be at most {max}"),
        }
    }
}

/// Input validation errors.
///
/// Each variant is tied to exactly one [`Field`]; the `Display` output is the
/// message a form shows under that field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Absent, empty, or not a number.
    #[error("{field} is required and must be a number")]
    MissingField { field: Field },

    /// Contract value is zero, negative, or infinite.
    #[error("{field} must be greater than zero")]
    NonPositiveValue { field: Field },

    /// A year outside its accepted range.
    #[error("{field} {problem}")]
    YearOutOfRange { field: Field, problem: YearProblem },

    /// Renewal year is not strictly after the issue year.
    ///
    /// Always attached to [`Field::RenewalYear`] so the form highlights the
    /// renewal input, not the issue input.
    #[error("Renewal year must be after the issue year ({issue_year})")]
    RenewalNotAfterIssue { issue_year: i64 },
}

impl ValidationError {
    /// The form field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::NonPositiveValue { field }
            | ValidationError::YearOutOfRange { field, .. } => *field,
            ValidationError::RenewalNotAfterIssue { .. } => Field::RenewalYear,
        }
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Every validation failure from one pass, keyed by field.
///
/// ## Serialization
/// Serializes as the map a form needs to highlight inputs:
/// ```json
/// { "renewalYear": "Renewal year must be after the issue year (2022)" }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl FieldErrors {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error under its own field.
    ///
    /// The first error recorded for a field wins; validation checks each
    /// field's own rules before any cross-field rule.
    pub fn insert(&mut self, error: ValidationError) {
        self.errors.entry(error.field()).or_insert(error);
    }

    /// Returns the error recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates errors in form order (value, issue year, renewal year).
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Field key → message, as a presentation layer consumes it.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, error)| (field.key(), error.to_string()))
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.values().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.key(), &error.to_string())?;
        }
        map.end()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MissingField {
            field: Field::ContractValue,
        };
        assert_eq!(err.to_string(), "Contract value is required and must be a number");

        let err = ValidationError::YearOutOfRange {
            field: Field::IssueYear,
            problem: YearProblem::InFuture { current_year: 2026 },
        };
        assert_eq!(err.to_string(), "Issue year cannot be in the future (after 2026)");

        let err = ValidationError::YearOutOfRange {
            field: Field::IssueYear,
            problem: YearProblem::TooEarly { min: 1900 },
        };
        assert_eq!(err.to_string(), "Issue year must be 1900 or later");
    }

    #[test]
    fn test_renewal_error_targets_renewal_field() {
        let err = ValidationError::RenewalNotAfterIssue { issue_year: 2022 };
        assert_eq!(err.field(), Field::RenewalYear);
        assert_eq!(
            err.to_string(),
            "Renewal year must be after the issue year (2022)"
        );
    }

    #[test]
    fn test_field_errors_first_error_wins() {
        let mut errors = FieldErrors::new();
        errors.insert(ValidationError::YearOutOfRange {
            field: Field::RenewalYear,
            problem: YearProblem::NotWhole,
        });
        errors.insert(ValidationError::RenewalNotAfterIssue { issue_year: 2000 });

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors.get(Field::RenewalYear),
            Some(ValidationError::YearOutOfRange { .. })
        ));
    }

    #[test]
    fn test_field_errors_serialize_as_message_map() {
        let mut errors = FieldErrors::new();
        errors.insert(ValidationError::RenewalNotAfterIssue { issue_year: 2022 });
        errors.insert(ValidationError::NonPositiveValue {
            field: Field::ContractValue,
        });

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contractValue": "Contract value must be greater than zero",
                "renewalYear": "Renewal year must be after the issue year (2022)",
            })
        );
    }

    #[test]
    fn test_field_errors_display_joins_in_form_order() {
        let mut errors = FieldErrors::new();
        errors.insert(ValidationError::MissingField {
            field: Field::RenewalYear,
        });
        errors.insert(ValidationError::MissingField {
            field: Field::ContractValue,
        });
        assert_eq!(
            errors.to_string(),
            "Contract value is required and must be a number; \
             Renewal year is required and must be a number"
        );
    }

    #[test]
    fn test_core_error_messages() {
        let err = CoreError::InvalidDuration { months: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid contract duration: 0 months (renewal year must follow issue year)"
        );
    }
}
