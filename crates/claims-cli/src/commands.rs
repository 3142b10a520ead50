use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use claims_map::{MappingState, suggest_mapping};
use claims_model::{CANONICAL_FIELDS, ColumnMapping, MappingConfig};
use claims_report::{
    by_claim_type_by_location, by_claim_type_distribution, by_relation_distribution,
    by_status_distribution, high_value, infectious_claims, injury_claims, maternity_claims,
    parental_claims, read_standardised_csv, standardised_output_path, sum_insured_exhausted,
    write_standardised_csv,
};
use claims_standardise::standardise;

use claims_cli::session::Session;

use crate::cli::{QueryArg, ReportArgs, StandardiseArgs, SuggestArgs};
use crate::summary::{
    print_distribution_table, print_fields_table, print_issue_table, print_pivot_table,
    print_records_table, print_run_summary, print_suggestion_table,
};

pub fn run_fields() {
    print_fields_table();
}

pub fn run_suggest(args: &SuggestArgs) -> Result<()> {
    let span = info_span!("suggest", file = %args.file.display());
    let _guard = span.enter();

    let mut session = Session::new();
    session.upload(&args.file)?;
    let headers = session.table()?.headers.clone();
    let result = suggest_mapping(&headers, session.hints())?;
    print_suggestion_table(&result.entries, args.min_confidence);

    let source_name = args.file.to_string_lossy().into_owned();
    let mut state = MappingState::new(&source_name, result);
    for field in CANONICAL_FIELDS {
        let strong_enough = state
            .suggestion_for(field)
            .is_some_and(|entry| entry.confidence >= args.min_confidence);
        if strong_enough {
            state.accept_suggestion(field);
        }
    }
    let config = state.to_config();
    let missing = state.missing_fields();
    if !missing.is_empty() {
        warn!(
            count = missing.len(),
            "fields below the confidence floor; edit the mapping before standardising"
        );
    }

    if let Some(path) = &args.mapping_out {
        let json = serde_json::to_string_pretty(&config).context("serialize mapping")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), entries = config.entries.len(), "wrote mapping");
        println!("Mapping written to {}", path.display());
    }
    Ok(())
}

pub fn run_standardise(args: &StandardiseArgs) -> Result<()> {
    let span = info_span!("standardise", file = %args.file.display());
    let _guard = span.enter();

    let json = fs::read_to_string(&args.mapping)
        .with_context(|| format!("read mapping {}", args.mapping.display()))?;
    let config: MappingConfig = serde_json::from_str(&json).context("parse mapping")?;
    let mapping = config.to_column_mapping()?;

    let mut session = Session::new();
    session.upload(&args.file)?;
    session.confirm_mapping(mapping)?;
    let output = session.standardise()?;

    print_run_summary(&output.report);
    print_issue_table(&output.report);

    if args.dry_run {
        println!("Dry run: no output written.");
        return Ok(());
    }
    let output_dir = output_dir_for(args);
    let path = standardised_output_path(&args.file, &output_dir);
    write_standardised_csv(&path, &output.records)?;
    println!("Standardised file: {}", path.display());
    Ok(())
}

fn output_dir_for(args: &StandardiseArgs) -> PathBuf {
    args.output_dir.clone().unwrap_or_else(|| {
        args.file
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let span = info_span!("report", file = %args.file.display());
    let _guard = span.enter();

    let table = read_standardised_csv(&args.file)?;
    // A standardised file re-enters the pipeline under the identity mapping.
    let output = standardise(&table, &ColumnMapping::identity())?;
    let records = output.records;
    info!(records = records.len(), "loaded standardised claims");

    match args.query {
        QueryArg::HighValue => print_records_table(&high_value(&records)),
        QueryArg::SumInsuredExhausted => print_records_table(&sum_insured_exhausted(&records)),
        QueryArg::Injury => print_records_table(&injury_claims(&records)),
        QueryArg::Infectious => print_records_table(&infectious_claims(&records)),
        QueryArg::Maternity => print_records_table(&maternity_claims(&records)),
        QueryArg::Parental => print_records_table(&parental_claims(&records)),
        QueryArg::ByRelation => {
            print_distribution_table("Relation", &by_relation_distribution(&records));
        }
        QueryArg::ByClaimType => {
            print_distribution_table("Claim type", &by_claim_type_distribution(&records));
        }
        QueryArg::ByStatus => {
            print_distribution_table("Status", &by_status_distribution(&records));
        }
        QueryArg::ByClaimTypeByLocation => {
            print_pivot_table(&by_claim_type_by_location(&records));
        }
    }
    Ok(())
}
