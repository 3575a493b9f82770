//! # Submission Pipeline
//!
//! One call from raw form values to everything the presentation layer
//! shows.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RawContractInput ──► validate ──┬── Err(FieldErrors) ──► Rejected     │
//! │                                  │                                      │
//! │                                  └── Ok(ContractInput)                  │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                                     breakdown()                         │
//! │                                          │                              │
//! │                          ┌───────────────┼───────────────┐              │
//! │                          ▼               ▼               ▼              │
//! │                   decimal_display   words_display      note             │
//! │                    "1,103.300"     "One Thousand…" "Not Applicable"     │
//! │                          └───────────────┼───────────────┘              │
//! │                                          ▼                              │
//! │                                     Calculated                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no partial results: either every display line is produced or
//! the submission is rejected. A [`CoreError`](crate::CoreError) here means
//! the engine broke its own contract and is returned as `Err`, separate
//! from user-facing rejections.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::{breakdown, Breakdown};
use crate::clock::Clock;
use crate::error::{CoreResult, FieldErrors};
use crate::format::NumberFormat;
use crate::input::{ContractInput, RawContractInput};
use crate::validation::validate_with_clock;
use crate::words::{fixed3, fixed_to_words};

/// Third display line, carried through verbatim.
///
/// Its business meaning is not defined anywhere; do not derive anything
/// from it.
pub const NOT_APPLICABLE: &str = "Not Applicable";

/// Everything shown after a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculationReport {
    /// The validated input the report was computed from.
    pub input: ContractInput,

    /// Intermediate values of the formula.
    pub breakdown: Breakdown,

    /// Unrounded adjusted monthly value.
    pub value: f64,

    /// Three decimals with digit grouping, e.g. `1,103.300`.
    pub decimal_display: String,

    /// Title-cased words, e.g. `One Thousand One Hundred Three Point Three Zero Zero`.
    pub words_display: String,

    /// Always [`NOT_APPLICABLE`].
    pub note: String,
}

impl CalculationReport {
    /// Builds the report for an already validated input.
    ///
    /// ## Errors
    /// Only contract breaches: a non-positive duration, or a value the
    /// formatters cannot render.
    pub fn build(input: ContractInput, format: &NumberFormat) -> CoreResult<Self> {
        let breakdown = breakdown(&input)?;
        let value = breakdown.adjusted_monthly;

        let fixed = fixed3(value)?;
        let decimal_display = format.regroup(&fixed);
        let words_display = fixed_to_words(&fixed);

        Ok(CalculationReport {
            input,
            breakdown,
            value,
            decimal_display,
            words_display,
            note: NOT_APPLICABLE.to_string(),
        })
    }

    /// The three display lines in presentation order.
    pub fn display_lines(&self) -> [&str; 3] {
        [&self.decimal_display, &self.words_display, &self.note]
    }
}

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Submission {
    /// Input was valid and every display line was produced.
    Calculated { report: CalculationReport },

    /// Input was invalid; nothing was calculated.
    Rejected { errors: FieldErrors },
}

impl Submission {
    pub fn report(&self) -> Option<&CalculationReport> {
        match self {
            Submission::Calculated { report } => Some(report),
            Submission::Rejected { .. } => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Submission::Calculated { .. } => None,
            Submission::Rejected { errors } => Some(errors),
        }
    }
}

/// Validates, calculates, and renders in one pass.
///
/// The clock is read exactly once.
///
/// ## Example
/// ```rust
/// use renewal_core::{submit, Field, FixedClock, NumberFormat, RawContractInput};
///
/// let raw = RawContractInput::new("50000", "2022", "2021");
/// let outcome = submit(&raw, &FixedClock::new(2026), &NumberFormat::default()).unwrap();
///
/// let errors = outcome.errors().unwrap();
/// assert_eq!(errors.len(), 1);
/// assert!(errors.get(Field::RenewalYear).is_some());
/// ```
pub fn submit(
    raw: &RawContractInput,
    clock: &impl Clock,
    format: &NumberFormat,
) -> CoreResult<Submission> {
    match validate_with_clock(raw, clock) {
        Ok(input) => Ok(Submission::Calculated {
            report: CalculationReport::build(input, format)?,
        }),
        Err(errors) => Ok(Submission::Rejected { errors }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::CoreError;
    use crate::input::Field;

    const CLOCK: FixedClock = FixedClock::new(2026);

    fn calculated(raw: RawContractInput) -> CalculationReport {
        submit(&raw, &CLOCK, &NumberFormat::default())
            .unwrap()
            .report()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_three_year_contract() {
        let report = calculated(RawContractInput::new("50000", "2020", "2023"));

        let v1: f64 = 50000.0 / 36.0;
        let expected = (v1 * 10.33 / 100.0) + v1;
        assert_eq!(report.value.to_bits(), expected.to_bits());
        assert_eq!(report.breakdown.months, 36);
        assert_eq!(report.decimal_display, "1,532.361");
        assert!(report
            .words_display
            .starts_with("One Thousand Five Hundred Thirty Two Point Three"));
        assert_eq!(report.note, NOT_APPLICABLE);
    }

    #[test]
    fn test_one_year_contract() {
        let report = calculated(RawContractInput::new("12000", "2021", "2022"));

        assert_eq!(
            report.display_lines(),
            [
                "1,103.300",
                "One Thousand One Hundred Three Point Three Zero Zero",
                "Not Applicable",
            ]
        );
    }

    #[test]
    fn test_rejected_submission_has_no_report() {
        let outcome = submit(
            &RawContractInput::new("50000", "2022", "2021"),
            &CLOCK,
            &NumberFormat::default(),
        )
        .unwrap();

        assert!(outcome.report().is_none());
        let errors = outcome.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::RenewalYear).is_some());
    }

    #[test]
    fn test_build_rejects_unvalidated_duration() {
        let input = ContractInput::new(100.0, 2020, 2020);
        assert_eq!(
            CalculationReport::build(input, &NumberFormat::default()),
            Err(CoreError::InvalidDuration { months: 0 })
        );
    }

    #[test]
    fn test_submission_json_shape() {
        let outcome = submit(
            &RawContractInput::new("12000", "2021", "2022"),
            &CLOCK,
            &NumberFormat::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "calculated");
        assert_eq!(json["report"]["decimalDisplay"], "1,103.300");
        assert_eq!(json["report"]["note"], "Not Applicable");

        let outcome = submit(&RawContractInput::default(), &CLOCK, &NumberFormat::default())
            .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(
            json["errors"]["issueYear"],
            "Issue year is required and must be a number"
        );
    }
}
