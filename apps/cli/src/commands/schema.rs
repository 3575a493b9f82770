//! # Schema Command
//!
//! Prints the form description a UI would render its inputs from.

use renewal_core::schema::InputKind;
use renewal_core::FIELD_SCHEMA;
use tracing::debug;

use crate::config::{AppConfig, OutputMode};
use crate::error::{to_pretty_json, AppError};

pub fn schema(config: &AppConfig) -> Result<String, AppError> {
    debug!("schema command");

    match config.output {
        OutputMode::Json => to_pretty_json(&FIELD_SCHEMA),
        OutputMode::Text => Ok(FIELD_SCHEMA
            .iter()
            .map(|spec| {
                let kind = match spec.kind {
                    InputKind::Decimal => "decimal",
                    InputKind::Year => "year",
                };
                format!(
                    "{:<14} {:<16} {:<8} {}",
                    spec.field.key(),
                    spec.label,
                    kind,
                    spec.rule
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
