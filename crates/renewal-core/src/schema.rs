//! # Form Schema
//!
//! A declarative description of the three inputs, so a form can render its
//! fields (label, icon, hint) without the core knowing anything about
//! widgets.

use serde::Serialize;

use crate::input::Field;
use crate::validation::MIN_YEAR;

/// Kind of widget a field wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    /// Free decimal amount.
    Decimal,
    /// Four-digit calendar year.
    Year,
}

/// How one form field should be presented and what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub field: Field,
    pub label: &'static str,
    /// Icon identifier; the presentation layer maps it to an asset.
    pub icon: &'static str,
    pub kind: InputKind,
    /// Rule shown as a hint under the input.
    pub rule: &'static str,
    /// Smallest value the widget should offer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
}

/// The three inputs in form order.
pub const FIELD_SCHEMA: [FieldSpec; 3] = [
    FieldSpec {
        field: Field::ContractValue,
        label: Field::ContractValue.label(),
        icon: "currency",
        kind: InputKind::Decimal,
        rule: "A number greater than zero",
        min: None,
    },
    FieldSpec {
        field: Field::IssueYear,
        label: Field::IssueYear.label(),
        icon: "calendar",
        kind: InputKind::Year,
        rule: "A whole year from 1900 up to the current year",
        min: Some(MIN_YEAR),
    },
    FieldSpec {
        field: Field::RenewalYear,
        label: Field::RenewalYear.label(),
        icon: "calendar-refresh",
        kind: InputKind::Year,
        rule: "A whole year after the issue year",
        min: Some(MIN_YEAR),
    },
];

/// Looks up the spec for one field.
pub fn field_spec(field: Field) -> &'static FieldSpec {
    &FIELD_SCHEMA[field as usize]
}
