use std::fs;
use std::path::Path;

use claims_cli::session::{Session, SessionError, Stage};
use claims_map::{MappingState, suggest_mapping};
use claims_model::{CanonicalField, ColumnMapping};
use claims_report::{
    high_value, parental_claims, read_standardised_csv, standardised_output_path,
    write_standardised_csv,
};
use claims_standardise::standardise;

const EXPORT: &str = "\
Emp_Code,Age,Sex,Relation,Location,Hospital Name,Ailment_code,Claim_Type,Claim_Status,Procedure_Type,Date_of_Admission,Date_of_Discharge,Policy_Start_Date,Policy_End_Date,Sum_Insured,Claimed_Amount,Incurred_Amount,Balance_Sum_Insured
E001,45,M,SELF,Pune,City Care,S72.0,Cashless,approved,Surgical,31-Jan-2023,05-Feb-2023,2022-04-01,2023-03-31,500000,150000,140000,350000
E002,71,F,FATHER,Delhi,Metro Hospital,A09,Reimbursement,pending,Medical,03/01/2023,03/04/2023,2022-04-01,2023-03-31,200000,180000,,20000
E003,30,F,WIFE,Pune,City Care,O80,Cashless,rejected,Medical,2023-05-10,2023-05-12,2022-04-01,2023-03-31,300000,,,
E004,51,M,SELF,Delhi,,Z00,Cashless,approved,,,,,,,90000,,
";

fn write_export(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("claims.csv");
    fs::write(&path, EXPORT).expect("write export");
    path
}

#[test]
fn full_pipeline_from_messy_export() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_export(dir.path());

    let mut session = Session::new();
    session.upload(&source).expect("upload");
    assert_eq!(session.stage(), Stage::Uploaded);

    let headers = session.table().expect("table").headers.clone();
    let result = suggest_mapping(&headers, session.hints()).expect("suggest");
    assert_eq!(
        result.source_for(CanonicalField::AilmentICDCode),
        Some("Ailment_code")
    );
    assert_eq!(
        result.source_for(CanonicalField::SumInsured),
        Some("Sum_Insured")
    );
    assert_eq!(
        result.source_for(CanonicalField::ClaimStatus),
        Some("Claim_Status")
    );

    let mut state = MappingState::new("claims.csv", result);
    for field in claims_model::CANONICAL_FIELDS {
        assert!(state.accept_suggestion(field), "no suggestion for {field}");
    }
    let mapping = state.to_config().to_column_mapping().expect("mapping");

    session.confirm_mapping(mapping).expect("confirm");
    assert_eq!(session.stage(), Stage::Mapped);
    let output = session.standardise().expect("standardise").clone();
    assert_eq!(session.stage(), Stage::Standardised);

    // Row E004 has no SumInsured and is dropped; the other three survive.
    assert_eq!(output.report.input_rows, 4);
    assert_eq!(output.records.len(), 3);
    assert_eq!(output.report.dropped.len(), 1);
    assert_eq!(output.report.dropped[0].row_index, 3);

    let e001 = &output.records[0];
    assert_eq!(e001.ailment_group, Some('S'));
    assert_eq!(e001.no_of_hospitalised_days, Some(5));
    assert_eq!(e001.percent_of_sum_insured_claimed, Some(30.0));

    let highs = high_value(&output.records);
    assert_eq!(highs.len(), 1);
    assert_eq!(highs[0].employee_code.as_deref(), Some("E002"));
    assert_eq!(parental_claims(&output.records).len(), 1);

    // Write, read back, and re-standardise under identity: same records.
    let artifact = standardised_output_path(&source, dir.path());
    write_standardised_csv(&artifact, &output.records).expect("write artifact");
    assert!(
        artifact
            .file_name()
            .is_some_and(|name| name == "claims_standardised.csv")
    );
    let table = read_standardised_csv(&artifact).expect("read artifact");
    let again = standardise(&table, &ColumnMapping::identity()).expect("re-standardise");
    assert_eq!(again.records, output.records);
}

#[test]
fn upload_resets_later_stages() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_export(dir.path());

    let mut session = Session::new();
    session.upload(&source).expect("upload");
    let headers = session.table().expect("table").headers.clone();
    let result = suggest_mapping(&headers, session.hints()).expect("suggest");
    let mut state = MappingState::new("claims.csv", result);
    for field in claims_model::CANONICAL_FIELDS {
        state.accept_suggestion(field);
    }
    let mapping = state.to_config().to_column_mapping().expect("mapping");
    session.confirm_mapping(mapping).expect("confirm");
    session.standardise().expect("standardise");

    session.upload(&source).expect("re-upload");
    assert_eq!(session.stage(), Stage::Uploaded);
    assert!(matches!(session.standardise(), Err(SessionError::NotMapped)));
}

#[test]
fn upload_of_missing_file_fails_cleanly() {
    let mut session = Session::new();
    let err = session.upload(Path::new("/nonexistent/claims.csv"));
    assert!(matches!(err, Err(SessionError::Upload(_))));
    assert_eq!(session.stage(), Stage::Empty);
}
