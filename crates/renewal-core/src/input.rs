//! # Input Types
//!
//! What the presentation layer hands to the core, before and after
//! validation.
//!
//! ```text
//! ┌──────────────────────┐   validate()   ┌──────────────────────┐
//! │  RawContractInput    │ ─────────────► │   ContractInput      │
//! │  ──────────────────  │                │  ──────────────────  │
//! │  contractValue: "…"  │                │  contract_value: f64 │
//! │  issueYear:     "…"  │                │  issue_year:     i64 │
//! │  renewalYear:   "…"  │                │  renewal_year:   i64 │
//! └──────────────────────┘                └──────────────────────┘
//!   form text or JSON numbers                typed, checked triple
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Field
// =============================================================================

/// One of the three form inputs.
///
/// Ordering follows the form layout, so error maps list problems top to
/// bottom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Field {
    ContractValue,
    IssueYear,
    RenewalYear,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 3] = [Field::ContractValue, Field::IssueYear, Field::RenewalYear];

    /// Wire name used in error maps and JSON input.
    pub const fn key(&self) -> &'static str {
        match self {
            Field::ContractValue => "contractValue",
            Field::IssueYear => "issueYear",
            Field::RenewalYear => "renewalYear",
        }
    }

    /// Human label, also the subject of every validation message.
    pub const fn label(&self) -> &'static str {
        match self {
            Field::ContractValue => "Contract value",
            Field::IssueYear => "Issue year",
            Field::RenewalYear => "Renewal year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Raw Input
// =============================================================================

/// A single untyped form value: either already a number, or text typed by
/// the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Coerces the value to a number.
    ///
    /// Text is trimmed and parsed as a decimal. Returns `None` for empty
    /// text, unparseable text, and NaN, all of which count as a missing
    /// field. Infinities pass through; range rules reject them later.
    ///
    /// ## Example
    /// ```rust
    /// use renewal_core::RawValue;
    ///
    /// assert_eq!(RawValue::from(" 2021 ").coerce(), Some(2021.0));
    /// assert_eq!(RawValue::from(12.5).coerce(), Some(12.5));
    /// assert_eq!(RawValue::from("").coerce(), None);
    /// assert_eq!(RawValue::from("twelve").coerce(), None);
    /// ```
    pub fn coerce(&self) -> Option<f64> {
        let number = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                text.parse::<f64>().ok()?
            }
        };

        (!number.is_nan()).then_some(number)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        RawValue::Number(number)
    }
}

impl From<i32> for RawValue {
    fn from(number: i32) -> Self {
        RawValue::Number(f64::from(number))
    }
}

/// The three form values exactly as submitted.
///
/// Any field may be absent. Deserializes from the JSON a form posts:
/// ```json
/// { "contractValue": "50000", "issueYear": 2020, "renewalYear": "2023" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct RawContractInput {
    pub contract_value: Option<RawValue>,
    pub issue_year: Option<RawValue>,
    pub renewal_year: Option<RawValue>,
}

impl RawContractInput {
    /// Builds an input with all three fields present.
    pub fn new(
        contract_value: impl Into<RawValue>,
        issue_year: impl Into<RawValue>,
        renewal_year: impl Into<RawValue>,
    ) -> Self {
        RawContractInput {
            contract_value: Some(contract_value.into()),
            issue_year: Some(issue_year.into()),
            renewal_year: Some(renewal_year.into()),
        }
    }

    /// Returns the raw value submitted for `field`.
    pub fn get(&self, field: Field) -> Option<&RawValue> {
        match field {
            Field::ContractValue => self.contract_value.as_ref(),
            Field::IssueYear => self.issue_year.as_ref(),
            Field::RenewalYear => self.renewal_year.as_ref(),
        }
    }
}

// =============================================================================
// Validated Input
// =============================================================================

/// A contract that passed validation.
///
/// Fields are public so callers and tests can build one directly; the
/// calculator re-checks the duration rather than trusting the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContractInput {
    /// Principal amount of the contract.
    pub contract_value: f64,

    /// Year the contract was issued.
    #[ts(type = "number")]
    pub issue_year: i64,

    /// Year the contract renews.
    #[ts(type = "number")]
    pub renewal_year: i64,
}

impl ContractInput {
    pub const fn new(contract_value: f64, issue_year: i64, renewal_year: i64) -> Self {
        ContractInput {
            contract_value,
            issue_year,
            renewal_year,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_text() {
        assert_eq!(RawValue::from("50000").coerce(), Some(50000.0));
        assert_eq!(RawValue::from("  1388.5\n").coerce(), Some(1388.5));
        assert_eq!(RawValue::from("-3").coerce(), Some(-3.0));
        assert_eq!(RawValue::from("   ").coerce(), None);
        assert_eq!(RawValue::from("12abc").coerce(), None);
        assert_eq!(RawValue::from("NaN").coerce(), None);
    }

    #[test]
    fn test_coerce_keeps_infinity_for_range_checks() {
        assert_eq!(RawValue::from("inf").coerce(), Some(f64::INFINITY));
        assert_eq!(RawValue::Number(f64::NAN).coerce(), None);
    }

    #[test]
    fn test_deserialize_mixed_json() {
        let raw: RawContractInput = serde_json::from_str(
            r#"{ "contractValue": "50000", "issueYear": 2020, "renewalYear": "2023" }"#,
        )
        .unwrap();

        assert_eq!(raw.contract_value, Some(RawValue::Text("50000".into())));
        assert_eq!(raw.issue_year, Some(RawValue::Number(2020.0)));
        assert_eq!(raw.get(Field::RenewalYear), Some(&RawValue::Text("2023".into())));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let raw: RawContractInput = serde_json::from_str(r#"{ "issueYear": 2020 }"#).unwrap();
        assert!(raw.contract_value.is_none());
        assert!(raw.renewal_year.is_none());
    }

    #[test]
    fn test_field_keys_and_order() {
        let keys: Vec<_> = Field::ALL.iter().map(Field::key).collect();
        assert_eq!(keys, ["contractValue", "issueYear", "renewalYear"]);
        assert!(Field::ContractValue < Field::RenewalYear);
    }
}
