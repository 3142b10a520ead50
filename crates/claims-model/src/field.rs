//! Canonical claim schema definition.
//!
//! The target schema is a fixed, closed set of fields. Source columns from
//! an uploaded file are mapped onto these fields before standardisation;
//! everything downstream is keyed by `CanonicalField`, never by raw column
//! names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared kind of a canonical field.
///
/// The kind drives how the standardiser interprets raw cell values and how
/// the matcher weighs column hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free string, kept as-is (trimmed).
    FreeText,
    /// Closed categorical vocabulary with an "NA" sentinel fallback.
    Categorical,
    /// Calendar date parsed from an ordered list of accepted formats.
    Date,
    /// Numeric value parsed as `f64`.
    Numeric,
}

/// A slot in the canonical claim schema.
///
/// Declaration order is the matching order: the schema matcher processes
/// fields in this order, so earlier fields get first pick of the source
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    EmployeeCode,
    Age,
    Sex,
    Relation,
    Location,
    Hospital,
    AilmentICDCode,
    ClaimType,
    ClaimStatus,
    ProcedureType,
    DateOfAdmission,
    DateOfDischarge,
    PolicyStartDate,
    PolicyEndDate,
    SumInsured,
    ClaimedAmount,
    IncurredAmount,
    BalanceSumInsured,
}

/// All canonical fields in matching order.
pub const CANONICAL_FIELDS: [CanonicalField; 18] = [
    CanonicalField::EmployeeCode,
    CanonicalField::Age,
    CanonicalField::Sex,
    CanonicalField::Relation,
    CanonicalField::Location,
    CanonicalField::Hospital,
    CanonicalField::AilmentICDCode,
    CanonicalField::ClaimType,
    CanonicalField::ClaimStatus,
    CanonicalField::ProcedureType,
    CanonicalField::DateOfAdmission,
    CanonicalField::DateOfDischarge,
    CanonicalField::PolicyStartDate,
    CanonicalField::PolicyEndDate,
    CanonicalField::SumInsured,
    CanonicalField::ClaimedAmount,
    CanonicalField::IncurredAmount,
    CanonicalField::BalanceSumInsured,
];

/// Fields that must be non-empty in a raw row for the row to be retained.
///
/// Rows failing this check are dropped before any derivation runs, so every
/// retained record has a well-defined ailment group, claim status, and
/// percent-of-sum-insured denominator.
pub const ROW_REQUIRED_FIELDS: [CanonicalField; 3] = [
    CanonicalField::AilmentICDCode,
    CanonicalField::ClaimStatus,
    CanonicalField::SumInsured,
];

impl CanonicalField {
    /// Returns the canonical column name used in the standardised artifact.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::EmployeeCode => "EmployeeCode",
            CanonicalField::Age => "Age",
            CanonicalField::Sex => "Sex",
            CanonicalField::Relation => "Relation",
            CanonicalField::Location => "Location",
            CanonicalField::Hospital => "Hospital",
            CanonicalField::AilmentICDCode => "AilmentICDCode",
            CanonicalField::ClaimType => "ClaimType",
            CanonicalField::ClaimStatus => "ClaimStatus",
            CanonicalField::ProcedureType => "ProcedureType",
            CanonicalField::DateOfAdmission => "DateOfAdmission",
            CanonicalField::DateOfDischarge => "DateOfDischarge",
            CanonicalField::PolicyStartDate => "PolicyStartDate",
            CanonicalField::PolicyEndDate => "PolicyEndDate",
            CanonicalField::SumInsured => "SumInsured",
            CanonicalField::ClaimedAmount => "ClaimedAmount",
            CanonicalField::IncurredAmount => "IncurredAmount",
            CanonicalField::BalanceSumInsured => "BalanceSumInsured",
        }
    }

    /// Returns the declared kind of this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            CanonicalField::EmployeeCode
            | CanonicalField::Location
            | CanonicalField::Hospital
            | CanonicalField::AilmentICDCode
            | CanonicalField::ClaimType
            | CanonicalField::ProcedureType => FieldKind::FreeText,
            CanonicalField::Sex | CanonicalField::Relation | CanonicalField::ClaimStatus => {
                FieldKind::Categorical
            }
            CanonicalField::DateOfAdmission
            | CanonicalField::DateOfDischarge
            | CanonicalField::PolicyStartDate
            | CanonicalField::PolicyEndDate => FieldKind::Date,
            CanonicalField::Age
            | CanonicalField::SumInsured
            | CanonicalField::ClaimedAmount
            | CanonicalField::IncurredAmount
            | CanonicalField::BalanceSumInsured => FieldKind::Numeric,
        }
    }

    /// Returns true if a row is dropped when this field's raw value is empty.
    pub fn is_row_required(&self) -> bool {
        ROW_REQUIRED_FIELDS.contains(self)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = String;

    /// Parse a canonical field name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        for field in CANONICAL_FIELDS {
            if field.as_str().eq_ignore_ascii_case(trimmed) {
                return Ok(field);
            }
        }
        Err(format!("Unknown canonical field: {s}"))
    }
}

/// Derived column names appended to the standardised artifact.
pub const DERIVED_AILMENT_GROUP_DESCRIPTION: &str = "AilmentGroupDescription";
pub const DERIVED_PERCENT_OF_SUM_INSURED: &str = "PercentOfSumInsuredClaimed";
pub const DERIVED_HOSPITALISED_DAYS: &str = "NoOfHospitalisedDays";
