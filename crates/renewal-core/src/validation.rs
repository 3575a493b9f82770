//! # Validation Module
//!
//! Turns a [`RawContractInput`] into a [`ContractInput`], or explains every
//! problem with it at once.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Single-Pass Validation                             │
//! │                                                                         │
//! │  Pass 1: each field on its own                                         │
//! │  ├── contractValue  coerce → finite → > 0                              │
//! │  ├── issueYear      coerce → whole → 1900 ..= current year             │
//! │  └── renewalYear    coerce → whole → 1900 ..= 2^53 - 1                 │
//! │           │                                                             │
//! │           ▼  (renewal passed, issue is a whole number)                  │
//! │  Pass 2: cross-field                                                   │
//! │  └── renewalYear > issueYear   (error attached to renewalYear)         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  No errors? → Ok(ContractInput)   Otherwise → Err(FieldErrors)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field is checked even after an earlier one fails, so a form can
//! highlight all bad inputs in one round trip. A field carries at most one
//! message.
//!
//! ## Usage
//! ```rust
//! use renewal_core::validation::validate;
//! use renewal_core::{Field, RawContractInput};
//!
//! let raw = RawContractInput::new("50000", "2022", "2021");
//! let errors = validate(&raw, 2026).unwrap_err();
//!
//! assert_eq!(errors.len(), 1);
//! assert!(errors.get(Field::RenewalYear).is_some());
//! ```

use crate::clock::Clock;
use crate::error::{FieldErrors, ValidationError, YearProblem};
use crate::input::{ContractInput, Field, RawContractInput, RawValue};

/// Earliest accepted issue or renewal year.
pub const MIN_YEAR: i64 = 1900;

/// Largest whole number an `f64` holds exactly (2^53 - 1).
pub const MAX_EXACT_YEAR: i64 = 9_007_199_254_740_991;

/// Result type for a full validation pass.
pub type ValidationResult = Result<ContractInput, FieldErrors>;

// =============================================================================
// Entry Points
// =============================================================================

/// Validates all three fields against `current_year`.
///
/// `current_year` bounds the issue year from above. It is a parameter so
/// results never depend on when the code runs; see [`validate_with_clock`].
pub fn validate(raw: &RawContractInput, current_year: i64) -> ValidationResult {
    let mut errors = FieldErrors::new();

    let contract_value = record(
        &mut errors,
        validate_contract_value(raw.get(Field::ContractValue)),
    );
    let issue_year = record(
        &mut errors,
        validate_issue_year(raw.get(Field::IssueYear), current_year),
    );
    let renewal_year = record(
        &mut errors,
        validate_renewal_year(raw.get(Field::RenewalYear)),
    );

    // An out-of-range issue year still orders the renewal year, as long as
    // it is a whole number.
    let issue_for_ordering = issue_year.or_else(|| ordering_year(raw.get(Field::IssueYear)));
    if let (Some(issue_year), Some(renewal_year)) = (issue_for_ordering, renewal_year) {
        record(
            &mut errors,
            validate_renewal_after_issue(issue_year, renewal_year),
        );
    }

    match (contract_value, issue_year, renewal_year) {
        (Some(contract_value), Some(issue_year), Some(renewal_year)) if errors.is_empty() => Ok(
            ContractInput::new(contract_value, issue_year, renewal_year),
        ),
        _ => Err(errors),
    }
}

/// Validates with the current year read once from `clock`.
pub fn validate_with_clock(raw: &RawContractInput, clock: &impl Clock) -> ValidationResult {
    validate(raw, clock.current_year())
}

fn record<T>(errors: &mut FieldErrors, result: Result<T, ValidationError>) -> Option<T> {
    result.map_err(|error| errors.insert(error)).ok()
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the contract value.
///
/// ## Rules
/// - Must be present and numeric
/// - Must be finite and greater than zero
///
/// ## Example
/// ```rust
/// use renewal_core::validation::validate_contract_value;
/// use renewal_core::RawValue;
///
/// assert!(validate_contract_value(Some(&RawValue::from("0.01"))).is_ok());
/// assert!(validate_contract_value(Some(&RawValue::from("0"))).is_err());
/// assert!(validate_contract_value(None).is_err());
/// ```
pub fn validate_contract_value(raw: Option<&RawValue>) -> Result<f64, ValidationError> {
    let field = Field::ContractValue;
    let value = coerce(field, raw)?;

    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }

    Ok(value)
}

/// Validates the issue year.
///
/// ## Rules
/// - Must be present and numeric
/// - Must be a whole number
/// - Must be between [`MIN_YEAR`] and `current_year`, inclusive
///
/// ## Example
/// ```rust
/// use renewal_core::validation::validate_issue_year;
/// use renewal_core::RawValue;
///
/// assert_eq!(validate_issue_year(Some(&RawValue::from("1900")), 2026), Ok(1900));
/// assert!(validate_issue_year(Some(&RawValue::from("2027")), 2026).is_err());
/// ```
pub fn validate_issue_year(
    raw: Option<&RawValue>,
    current_year: i64,
) -> Result<i64, ValidationError> {
    let field = Field::IssueYear;
    let year = whole_year(field, coerce(field, raw)?)?;

    if year < MIN_YEAR as f64 {
        return Err(out_of_range(field, YearProblem::TooEarly { min: MIN_YEAR }));
    }

    if year > current_year as f64 {
        return Err(out_of_range(field, YearProblem::InFuture { current_year }));
    }

    Ok(year as i64)
}

/// Validates the renewal year on its own.
///
/// ## Rules
/// - Must be present and numeric
/// - Must be a whole number no earlier than [`MIN_YEAR`]
/// - No calendar upper bound; only [`MAX_EXACT_YEAR`] applies
pub fn validate_renewal_year(raw: Option<&RawValue>) -> Result<i64, ValidationError> {
    let field = Field::RenewalYear;
    let year = whole_year(field, coerce(field, raw)?)?;

    if year < MIN_YEAR as f64 {
        return Err(out_of_range(field, YearProblem::TooEarly { min: MIN_YEAR }));
    }

    if year > MAX_EXACT_YEAR as f64 {
        return Err(out_of_range(field, YearProblem::TooLate { max: MAX_EXACT_YEAR }));
    }

    Ok(year as i64)
}

/// Cross-field rule: the renewal must come strictly after the issue.
pub fn validate_renewal_after_issue(
    issue_year: i64,
    renewal_year: i64,
) -> Result<(), ValidationError> {
    if renewal_year <= issue_year {
        return Err(ValidationError::RenewalNotAfterIssue { issue_year });
    }

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn coerce(field: Field, raw: Option<&RawValue>) -> Result<f64, ValidationError> {
    raw.and_then(RawValue::coerce)
        .ok_or(ValidationError::MissingField { field })
}

fn whole_year(field: Field, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(out_of_range(field, YearProblem::NotWhole));
    }

    Ok(value)
}

/// The whole year in `raw`, ignoring range rules, if it compares exactly.
fn ordering_year(raw: Option<&RawValue>) -> Option<i64> {
    let year = raw.and_then(RawValue::coerce)?;
    let exact = year.is_finite()
        && year.fract() == 0.0
        && year.abs() <= MAX_EXACT_YEAR as f64;
    exact.then_some(year as i64)
}

fn out_of_range(field: Field, problem: YearProblem) -> ValidationError {
    ValidationError::YearOutOfRange { field, problem }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    const NOW: i64 = 2026;

    fn year_problem(errors: &FieldErrors, field: Field) -> Option<YearProblem> {
        match errors.get(field) {
            Some(ValidationError::YearOutOfRange { problem, .. }) => Some(*problem),
            _ => None,
        }
    }

    #[test]
    fn test_valid_input() {
        let raw = RawContractInput::new("50000", "2020", "2023");
        let input = validate(&raw, NOW).unwrap();
        assert_eq!(input, ContractInput::new(50000.0, 2020, 2023));
    }

    #[test]
    fn test_json_numbers_are_accepted() {
        let raw = RawContractInput::new(12000.0, 2021, 2022);
        assert!(validate(&raw, NOW).is_ok());
    }

    #[test]
    fn test_issue_year_boundaries() {
        let check = |year: &str| validate(&RawContractInput::new("100", year, "9999"), NOW);

        assert!(check("1900").is_ok());
        assert!(check("2026").is_ok());

        let errors = check("1899").unwrap_err();
        assert_eq!(
            year_problem(&errors, Field::IssueYear),
            Some(YearProblem::TooEarly { min: 1900 })
        );

        let errors = check("2027").unwrap_err();
        assert_eq!(
            year_problem(&errors, Field::IssueYear),
            Some(YearProblem::InFuture { current_year: 2026 })
        );
    }

    #[test]
    fn test_renewal_not_after_issue_has_single_error() {
        let raw = RawContractInput::new("50000", "2022", "2021");
        let errors = validate(&raw, NOW).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::RenewalYear),
            Some(&ValidationError::RenewalNotAfterIssue { issue_year: 2022 })
        );
    }

    #[test]
    fn test_equal_years_rejected() {
        let raw = RawContractInput::new("50000", "2022", "2022");
        let errors = validate(&raw, NOW).unwrap_err();
        assert!(matches!(
            errors.get(Field::RenewalYear),
            Some(ValidationError::RenewalNotAfterIssue { .. })
        ));
    }

    #[test]
    fn test_renewal_year_may_be_in_the_future() {
        let raw = RawContractInput::new("50000", "2026", "2040");
        assert!(validate(&raw, NOW).is_ok());
    }

    #[test]
    fn test_all_errors_collected() {
        let raw = RawContractInput::new("-5", "abc", "1800");
        let errors = validate(&raw, NOW).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(Field::ContractValue),
            Some(&ValidationError::NonPositiveValue {
                field: Field::ContractValue
            })
        );
        assert_eq!(
            errors.get(Field::IssueYear),
            Some(&ValidationError::MissingField {
                field: Field::IssueYear
            })
        );
        assert_eq!(
            year_problem(&errors, Field::RenewalYear),
            Some(YearProblem::TooEarly { min: 1900 })
        );
    }

    #[test]
    fn test_missing_fields() {
        let errors = validate(&RawContractInput::default(), NOW).unwrap_err();
        assert_eq!(errors.len(), 3);
        for field in Field::ALL {
            assert_eq!(
                errors.get(field),
                Some(&ValidationError::MissingField { field })
            );
        }
    }

    #[test]
    fn test_future_issue_year_still_orders_renewal() {
        let raw = RawContractInput::new("50000", "2030", "2028");
        let errors = validate(&raw, NOW).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(
            year_problem(&errors, Field::IssueYear),
            Some(YearProblem::InFuture { current_year: 2026 })
        );
        assert_eq!(
            errors.get(Field::RenewalYear),
            Some(&ValidationError::RenewalNotAfterIssue { issue_year: 2030 })
        );
    }

    #[test]
    fn test_early_issue_year_still_orders_renewal() {
        let raw = RawContractInput::new("10", "1850", "1900");
        let errors = validate(&raw, NOW).unwrap_err();

        // 1900 follows 1850, so only the issue year is wrong.
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::IssueYear).is_some());
    }

    #[test]
    fn test_cross_field_skipped_without_a_whole_issue_year() {
        for issue in ["abc", "2020.5", ""] {
            let raw = RawContractInput::new("10", issue, "1950");
            let errors = validate(&raw, NOW).unwrap_err();

            assert_eq!(errors.len(), 1, "issue year {issue:?}");
            assert!(errors.get(Field::RenewalYear).is_none());
        }
    }

    #[test]
    fn test_invalid_renewal_keeps_its_own_error() {
        let raw = RawContractInput::new("10", "2030", "1800");
        let errors = validate(&raw, NOW).unwrap_err();

        assert_eq!(
            year_problem(&errors, Field::RenewalYear),
            Some(YearProblem::TooEarly { min: 1900 })
        );
    }

    #[test]
    fn test_fractional_and_infinite_years() {
        let raw = RawContractInput::new("10", "2020.5", "inf");
        let errors = validate(&raw, NOW).unwrap_err();

        assert_eq!(year_problem(&errors, Field::IssueYear), Some(YearProblem::NotWhole));
        assert_eq!(year_problem(&errors, Field::RenewalYear), Some(YearProblem::NotWhole));
    }

    #[test]
    fn test_renewal_year_beyond_exact_range() {
        let raw = RawContractInput::new("10", "2020", "1e20");
        let errors = validate(&raw, NOW).unwrap_err();
        assert_eq!(
            year_problem(&errors, Field::RenewalYear),
            Some(YearProblem::TooLate { max: MAX_EXACT_YEAR })
        );
    }

    #[test]
    fn test_contract_value_rules() {
        let value = |text: &str| validate_contract_value(Some(&RawValue::from(text)));

        assert_eq!(value("0.001"), Ok(0.001));
        assert!(matches!(value("0"), Err(ValidationError::NonPositiveValue { .. })));
        assert!(matches!(value("-0"), Err(ValidationError::NonPositiveValue { .. })));
        assert!(matches!(value("inf"), Err(ValidationError::NonPositiveValue { .. })));
        assert!(matches!(value("$5"), Err(ValidationError::MissingField { .. })));
    }

    #[test]
    fn test_validate_with_clock_uses_clock_year() {
        let raw = RawContractInput::new("10", "2030", "2031");
        assert!(validate_with_clock(&raw, &FixedClock::new(2026)).is_err());
        assert!(validate_with_clock(&raw, &FixedClock::new(2030)).is_ok());
    }
}
