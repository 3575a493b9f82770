//! # renewal-core: Pure Calculation Engine
//!
//! This crate is the **heart** of the renewal calculator. It turns three
//! user-entered numbers (contract value, issue year, renewal year) into an
//! adjusted monthly value, a grouped decimal display, and an English words
//! transcription ready to paste into a legal document.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Renewal Calculator Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation Layer (CLI / form UI)                 │   │
//! │  │    form fields ──► submit ──► show lines ──► copy to clipboard  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ RawContractInput + Clock               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ renewal-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐   ┌────────────┐   ┌────────────┐             │   │
//! │  │   │ validation │──►│ calculator │──►│   words    │             │   │
//! │  │   │ FieldErrors│   │  10.33 %   │   │ "One ..."  │             │   │
//! │  │   └────────────┘   └────────────┘   └────────────┘             │   │
//! │  │          │                                 │                    │   │
//! │  │          ▼                                 ▼                    │   │
//! │  │      Rejected                   CalculationReport               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK READS • NO LOGGING • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`input`] - Raw and validated input types, form field identities
//! - [`validation`] - Per-field and cross-field input rules
//! - [`calculator`] - The adjusted monthly value formula
//! - [`words`] - Number to English words (and back)
//! - [`format`] - Fixed 3-decimal display with digit grouping
//! - [`report`] - The full submit pipeline and its result types
//! - [`schema`] - Declarative description of the input form
//! - [`clock`] - Current-year source injected by the caller
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use renewal_core::{submit, FixedClock, NumberFormat, RawContractInput, Submission};
//!
//! let raw = RawContractInput::new("12000", "2021", "2022");
//! let outcome = submit(&raw, &FixedClock::new(2026), &NumberFormat::default()).unwrap();
//!
//! match outcome {
//!     Submission::Calculated { report } => {
//!         assert_eq!(report.decimal_display, "1,103.300");
//!         assert_eq!(
//!             report.words_display,
//!             "One Thousand One Hundred Three Point Three Zero Zero"
//!         );
//!     }
//!     Submission::Rejected { errors } => panic!("unexpected rejection: {errors}"),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod clock;
pub mod error;
pub mod format;
pub mod input;
pub mod report;
pub mod schema;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{calculate, Breakdown};
pub use clock::{Clock, FixedClock};
pub use error::{CoreError, CoreResult, FieldErrors, ValidationError, YearProblem};
pub use format::NumberFormat;
pub use input::{ContractInput, Field, RawContractInput, RawValue};
pub use report::{submit, CalculationReport, Submission, NOT_APPLICABLE};
pub use schema::{FieldSpec, FIELD_SCHEMA};
pub use validation::validate;
pub use words::{parse_words, to_words};
