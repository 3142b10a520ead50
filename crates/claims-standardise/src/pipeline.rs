//! The standardisation pipeline.
//!
//! Pure transformation from a raw table plus a validated mapping to typed
//! claim records. Row-level problems degrade to sentinels and are recorded;
//! only mapping problems abort the run.

use std::collections::BTreeMap;

use tracing::{debug, info};

use claims_common::{parse_f64, round2};
use claims_model::{
    CanonicalField, ClaimRecord, ClaimStatus, ColumnMapping, RawTable, Relation,
    ROW_REQUIRED_FIELDS, Sex, ailment_letter,
};

use crate::dates::parse_claim_date;
use crate::error::StandardiseError;
use crate::report::{CellIssue, DroppedRow, IssueKind, StandardiseReport};

/// Records plus the run report.
#[derive(Debug, Clone)]
pub struct StandardiseOutput {
    pub records: Vec<ClaimRecord>,
    pub report: StandardiseReport,
}

/// Standardises a raw table under a confirmed mapping.
///
/// Step order: mapping application, required-field filter, date parsing,
/// categorical normalisation, ailment grouping, derived fields. The input
/// is never mutated and nothing is produced on error.
pub fn standardise(
    table: &RawTable,
    mapping: &ColumnMapping,
) -> Result<StandardiseOutput, StandardiseError> {
    mapping.validate()?;
    let columns = resolve_columns(table, mapping)?;

    let mut records = Vec::new();
    let mut report = StandardiseReport {
        input_rows: table.rows.len(),
        ..StandardiseReport::default()
    };

    for (row_index, row) in table.rows.iter().enumerate() {
        let cell = |field: CanonicalField| {
            columns
                .get(&field)
                .and_then(|idx| row.get(*idx))
                .map(String::as_str)
                .unwrap_or("")
        };

        let missing = required_gaps(&cell);
        if !missing.is_empty() {
            debug!(row_index, ?missing, "dropping row");
            report.dropped.push(DroppedRow {
                row_index,
                missing_fields: missing,
            });
            continue;
        }

        let mut issues = RowIssues {
            row_index,
            sink: &mut report.issues,
        };
        let record = build_record(&cell, &mut issues);
        records.push(record);
    }

    report.kept_rows = records.len();
    info!(
        input_rows = report.input_rows,
        kept_rows = report.kept_rows,
        dropped = report.dropped.len(),
        issues = report.issues.len(),
        "standardisation complete"
    );
    Ok(StandardiseOutput { records, report })
}

/// Resolves every mapped field to its column index, failing on the first
/// mapped column absent from the header.
fn resolve_columns(
    table: &RawTable,
    mapping: &ColumnMapping,
) -> Result<BTreeMap<CanonicalField, usize>, StandardiseError> {
    let mut columns = BTreeMap::new();
    for (field, column) in mapping.iter() {
        let Some(idx) = table.column_index(column) else {
            return Err(StandardiseError::SourceColumnMissing {
                column: column.to_string(),
            });
        };
        columns.insert(field, idx);
    }
    Ok(columns)
}

/// Required fields this row fails to satisfy. A present but non-numeric
/// SumInsured counts as a gap: no derived field could be computed from it.
fn required_gaps<'r>(cell: &impl Fn(CanonicalField) -> &'r str) -> Vec<CanonicalField> {
    let mut missing = Vec::new();
    for field in ROW_REQUIRED_FIELDS {
        let raw = cell(field);
        let empty = raw.trim().is_empty();
        let unusable = field == CanonicalField::SumInsured && !empty && parse_f64(raw).is_none();
        if empty || unusable {
            missing.push(field);
        }
    }
    missing
}

struct RowIssues<'a> {
    row_index: usize,
    sink: &'a mut Vec<CellIssue>,
}

impl RowIssues<'_> {
    fn push(&mut self, field: CanonicalField, raw: &str, kind: IssueKind) {
        self.sink.push(CellIssue {
            row_index: self.row_index,
            field,
            raw_value: raw.to_string(),
            kind,
        });
    }
}

fn build_record<'r>(
    cell: &impl Fn(CanonicalField) -> &'r str,
    issues: &mut RowIssues<'_>,
) -> ClaimRecord {
    let text = |field: CanonicalField| -> Option<String> {
        let raw = cell(field).trim();
        if raw.is_empty() {
            None
        } else {
            Some(raw.to_string())
        }
    };
    let number = |field: CanonicalField, issues: &mut RowIssues<'_>| -> Option<f64> {
        let raw = cell(field);
        if raw.trim().is_empty() {
            return None;
        }
        let parsed = parse_f64(raw);
        if parsed.is_none() {
            issues.push(field, raw, IssueKind::NonNumericValue);
        }
        parsed
    };
    let date = |field: CanonicalField, issues: &mut RowIssues<'_>| -> Option<chrono::NaiveDate> {
        let raw = cell(field);
        if raw.trim().is_empty() {
            return None;
        }
        let parsed = parse_claim_date(raw);
        if parsed.is_none() {
            issues.push(field, raw, IssueKind::UnparseableDate);
        }
        parsed
    };

    let sex_raw = cell(CanonicalField::Sex);
    let sex = Sex::from_raw(sex_raw);
    if sex == Sex::Na && is_unrecognised(sex_raw) {
        issues.push(CanonicalField::Sex, sex_raw, IssueKind::UnknownCategory);
    }

    let relation_raw = cell(CanonicalField::Relation);
    let relation = Relation::from_raw(relation_raw);
    if relation == Relation::Na && is_unrecognised(relation_raw) {
        issues.push(
            CanonicalField::Relation,
            relation_raw,
            IssueKind::UnknownCategory,
        );
    }

    let status_raw = cell(CanonicalField::ClaimStatus);
    let claim_status = ClaimStatus::from_raw(status_raw);
    if claim_status == ClaimStatus::Na && is_unrecognised(status_raw) {
        issues.push(
            CanonicalField::ClaimStatus,
            status_raw,
            IssueKind::UnknownCategory,
        );
    }

    let ailment_group = ailment_letter(cell(CanonicalField::AilmentICDCode));

    let date_of_admission = date(CanonicalField::DateOfAdmission, issues);
    let date_of_discharge = date(CanonicalField::DateOfDischarge, issues);
    let policy_start_date = date(CanonicalField::PolicyStartDate, issues);
    let policy_end_date = date(CanonicalField::PolicyEndDate, issues);

    // Guaranteed numeric by the required filter.
    let sum_insured = parse_f64(cell(CanonicalField::SumInsured)).unwrap_or_default();
    let claimed_amount = number(CanonicalField::ClaimedAmount, issues);
    let incurred_amount = number(CanonicalField::IncurredAmount, issues);
    let balance_sum_insured = number(CanonicalField::BalanceSumInsured, issues);

    let percent_of_sum_insured_claimed = claimed_amount.and_then(|claimed| {
        if sum_insured == 0.0 {
            None
        } else {
            Some(round2(claimed / sum_insured * 100.0))
        }
    });
    let no_of_hospitalised_days = match (date_of_admission, date_of_discharge) {
        (Some(admission), Some(discharge)) => Some((discharge - admission).num_days()),
        _ => None,
    };

    ClaimRecord {
        employee_code: text(CanonicalField::EmployeeCode),
        age: number(CanonicalField::Age, issues),
        sex,
        relation,
        location: text(CanonicalField::Location),
        hospital: text(CanonicalField::Hospital),
        ailment_group,
        claim_type: text(CanonicalField::ClaimType),
        claim_status,
        procedure_type: text(CanonicalField::ProcedureType),
        date_of_admission,
        date_of_discharge,
        policy_start_date,
        policy_end_date,
        sum_insured,
        claimed_amount,
        incurred_amount,
        balance_sum_insured,
        percent_of_sum_insured_claimed,
        no_of_hospitalised_days,
    }
}

/// A value that is non-empty and not already the NA sentinel.
fn is_unrecognised(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("na")
}
