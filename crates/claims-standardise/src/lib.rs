//! Claims standardisation.
//!
//! Turns a mapped raw table into typed [`claims_model::ClaimRecord`]s:
//! required-field filtering, date parsing, categorical normalisation, ICD
//! ailment grouping, and derived numeric fields, with a per-run report of
//! everything dropped or degraded.

pub mod dates;
pub mod error;
pub mod pipeline;
pub mod report;

pub use dates::{ACCEPTED_DATE_FORMATS, parse_claim_date};
pub use error::StandardiseError;
pub use pipeline::{StandardiseOutput, standardise};
pub use report::{CellIssue, DroppedRow, IssueKind, StandardiseReport};
