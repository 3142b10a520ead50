//! Per-run context for the user: what was dropped and what degraded.

use serde::{Deserialize, Serialize};

use claims_model::CanonicalField;

/// A row removed by the required-field filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedRow {
    /// Zero-based index into the input table's data rows.
    pub row_index: usize,
    /// Required fields that were empty or unusable.
    pub missing_fields: Vec<CanonicalField>,
}

/// Why a cell degraded to a sentinel or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    UnparseableDate,
    UnknownCategory,
    NonNumericValue,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::UnparseableDate => "unparseable date",
            IssueKind::UnknownCategory => "unknown category",
            IssueKind::NonNumericValue => "non-numeric value",
        }
    }
}

/// One degraded cell in a retained row. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellIssue {
    pub row_index: usize,
    pub field: CanonicalField,
    pub raw_value: String,
    pub kind: IssueKind,
}

/// Summary of one standardisation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardiseReport {
    pub input_rows: usize,
    pub kept_rows: usize,
    pub dropped: Vec<DroppedRow>,
    pub issues: Vec<CellIssue>,
}

impl StandardiseReport {
    pub fn dropped_rows(&self) -> usize {
        self.dropped.len()
    }
}
