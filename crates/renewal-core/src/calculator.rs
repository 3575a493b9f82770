//! # Calculator
//!
//! The adjusted monthly value formula.
//!
//! ## The Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  months := (renewal_year - issue_year) * 12                             │
//! │  v1     := contract_value / months          (base monthly value)        │
//! │  v2     := v1 * 10.33                                                   │
//! │  result := (v2 / 100) + v1                  (adjusted monthly value)    │
//! │                                                                         │
//! │  Example: 12,000 over 2021 → 2022                                       │
//! │    months = 12, v1 = 1,000, v2 = 10,330, result = 1,103.30              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The steps run in exactly this order on `f64`. Reassociating them (for
//! instance `v1 * 1.1033`) changes the last bits of the result, and with
//! them the rounded display. Nothing is rounded here; rounding to three
//! decimals happens only when the value is displayed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::input::ContractInput;

/// Months in one contract year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Fixed adjustment applied on top of the base monthly value, in percent.
pub const ADJUSTMENT_PERCENT: f64 = 10.33;

/// Intermediate values of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Breakdown {
    /// Contract duration in months.
    #[ts(type = "number")]
    pub months: i64,

    /// `contract_value / months`.
    pub base_monthly: f64,

    /// `base_monthly * 10.33 / 100`.
    pub adjustment: f64,

    /// `adjustment + base_monthly`.
    pub adjusted_monthly: f64,
}

/// Contract duration in months. Saturates instead of overflowing for
/// nonsensical year pairs.
pub fn contract_months(input: &ContractInput) -> i64 {
    input
        .renewal_year
        .saturating_sub(input.issue_year)
        .saturating_mul(MONTHS_PER_YEAR)
}

/// Runs the formula and keeps every intermediate value.
///
/// ## Errors
/// [`CoreError::InvalidDuration`] if the renewal year does not follow the
/// issue year. Validated input never triggers it.
pub fn breakdown(input: &ContractInput) -> CoreResult<Breakdown> {
    let months = contract_months(input);
    if months <= 0 {
        return Err(CoreError::InvalidDuration { months });
    }

    let v1 = input.contract_value / months as f64;
    let v2 = v1 * ADJUSTMENT_PERCENT;
    let adjustment = v2 / 100.0;

    Ok(Breakdown {
        months,
        base_monthly: v1,
        adjustment,
        adjusted_monthly: adjustment + v1,
    })
}

/// Computes the adjusted monthly value.
///
/// ## Example
/// ```rust
/// use renewal_core::{calculate, ContractInput};
///
/// let value = calculate(&ContractInput::new(12000.0, 2021, 2022)).unwrap();
/// assert_eq!(format!("{value:.3}"), "1103.300");
///
/// assert!(calculate(&ContractInput::new(12000.0, 2022, 2022)).is_err());
/// ```
pub fn calculate(input: &ContractInput) -> CoreResult<f64> {
    breakdown(input).map(|b| b.adjusted_monthly)
}

// =============================================================================
// Unit Tests
// =============================================================================
