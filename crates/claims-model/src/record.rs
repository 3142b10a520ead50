//! The standardised claim record and its tabular serialisation.

use chrono::NaiveDate;
use claims_common::format_numeric;
use serde::{Deserialize, Serialize};

use crate::category::{ClaimStatus, NA, Relation, Sex, ailment_group_description};
use crate::field::{
    CANONICAL_FIELDS, DERIVED_AILMENT_GROUP_DESCRIPTION, DERIVED_HOSPITALISED_DAYS,
    DERIVED_PERCENT_OF_SUM_INSURED,
};

/// One standardised claim.
///
/// Every record comes from a raw row that passed the required-field filter,
/// so `sum_insured` is always present and the ailment/status fields were
/// non-empty in the source (though they may have normalised to a sentinel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub employee_code: Option<String>,
    pub age: Option<f64>,
    pub sex: Sex,
    pub relation: Relation,
    pub location: Option<String>,
    pub hospital: Option<String>,
    /// ICD chapter letter extracted from the raw code; `None` when the raw
    /// value had no uppercase ASCII letter.
    pub ailment_group: Option<char>,
    pub claim_type: Option<String>,
    pub claim_status: ClaimStatus,
    pub procedure_type: Option<String>,
    pub date_of_admission: Option<NaiveDate>,
    pub date_of_discharge: Option<NaiveDate>,
    pub policy_start_date: Option<NaiveDate>,
    pub policy_end_date: Option<NaiveDate>,
    pub sum_insured: f64,
    pub claimed_amount: Option<f64>,
    pub incurred_amount: Option<f64>,
    pub balance_sum_insured: Option<f64>,
    /// round(claimed / sum_insured * 100, 2); `None` when the claimed
    /// amount is missing or the sum insured is zero.
    pub percent_of_sum_insured_claimed: Option<f64>,
    /// Whole days between admission and discharge; `None` when either date
    /// is missing or unparseable.
    pub no_of_hospitalised_days: Option<i64>,
}

impl ClaimRecord {
    /// Ailment group description derived from the chapter letter.
    pub fn ailment_group_description(&self) -> &'static str {
        match self.ailment_group {
            Some(letter) => ailment_group_description(letter),
            None => NA,
        }
    }

    /// Ailment group as stored in the standardised artifact: a single
    /// uppercase letter or the NA sentinel.
    pub fn ailment_group_str(&self) -> String {
        match self.ailment_group {
            Some(letter) => letter.to_string(),
            None => NA.to_string(),
        }
    }

    /// Serialises the record as one row of the standardised table, in
    /// [`standardised_headers`] order. Absent values become empty cells;
    /// unrecognised categories keep the NA sentinel.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            opt_text(self.employee_code.as_deref()),
            opt_number(self.age),
            self.sex.as_str().to_string(),
            self.relation.as_str().to_string(),
            opt_text(self.location.as_deref()),
            opt_text(self.hospital.as_deref()),
            self.ailment_group_str(),
            opt_text(self.claim_type.as_deref()),
            self.claim_status.as_str().to_string(),
            opt_text(self.procedure_type.as_deref()),
            opt_date(self.date_of_admission),
            opt_date(self.date_of_discharge),
            opt_date(self.policy_start_date),
            opt_date(self.policy_end_date),
            format_numeric(self.sum_insured),
            opt_number(self.claimed_amount),
            opt_number(self.incurred_amount),
            opt_number(self.balance_sum_insured),
            self.ailment_group_description().to_string(),
            opt_number(self.percent_of_sum_insured_claimed),
            self.no_of_hospitalised_days
                .map(|days| days.to_string())
                .unwrap_or_default(),
        ]
    }
}

/// Column headers of the standardised artifact: every canonical field in
/// matching order, then the derived columns.
pub fn standardised_headers() -> Vec<String> {
    let mut headers: Vec<String> = CANONICAL_FIELDS
        .iter()
        .map(|field| field.as_str().to_string())
        .collect();
    headers.push(DERIVED_AILMENT_GROUP_DESCRIPTION.to_string());
    headers.push(DERIVED_PERCENT_OF_SUM_INSURED.to_string());
    headers.push(DERIVED_HOSPITALISED_DAYS.to_string());
    headers
}

fn opt_text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn opt_number(value: Option<f64>) -> String {
    value.map(format_numeric).unwrap_or_default()
}

fn opt_date(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ClaimRecord {
        ClaimRecord {
            employee_code: Some("E042".to_string()),
            age: Some(34.0),
            sex: Sex::Female,
            relation: Relation::Employee,
            location: Some("Pune".to_string()),
            hospital: None,
            ailment_group: Some('S'),
            claim_type: Some("Cashless".to_string()),
            claim_status: ClaimStatus::Settled,
            procedure_type: None,
            date_of_admission: NaiveDate::from_ymd_opt(2023, 1, 31),
            date_of_discharge: NaiveDate::from_ymd_opt(2023, 2, 5),
            policy_start_date: None,
            policy_end_date: None,
            sum_insured: 500_000.0,
            claimed_amount: Some(150_000.0),
            incurred_amount: None,
            balance_sum_insured: None,
            percent_of_sum_insured_claimed: Some(30.0),
            no_of_hospitalised_days: Some(5),
        }
    }

    #[test]
    fn test_row_matches_header_width() {
        let record = sample_record();
        assert_eq!(record.to_row().len(), standardised_headers().len());
    }

    #[test]
    fn test_serialised_values() {
        let record = sample_record();
        let row = record.to_row();
        let headers = standardised_headers();
        let get = |name: &str| {
            let idx = headers.iter().position(|h| h == name).unwrap();
            row[idx].clone()
        };
        assert_eq!(get("AilmentICDCode"), "S");
        assert_eq!(get("DateOfAdmission"), "2023-01-31");
        assert_eq!(get("PercentOfSumInsuredClaimed"), "30");
        assert_eq!(get("NoOfHospitalisedDays"), "5");
        assert_eq!(get("Hospital"), "");
        assert_eq!(
            get("AilmentGroupDescription"),
            "Injury, poisoning and external causes"
        );
    }

    #[test]
    fn test_na_record_serialisation() {
        let mut record = sample_record();
        record.ailment_group = None;
        record.claim_status = ClaimStatus::Na;
        let row = record.to_row();
        let headers = standardised_headers();
        let icd = headers.iter().position(|h| h == "AilmentICDCode").unwrap();
        let status = headers.iter().position(|h| h == "ClaimStatus").unwrap();
        assert_eq!(row[icd], "NA");
        assert_eq!(row[status], "NA");
    }
}
