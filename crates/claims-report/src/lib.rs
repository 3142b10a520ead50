//! Segment queries and output artifacts for standardised claims.

pub mod output;
pub mod queries;

pub use output::{read_standardised_csv, standardised_output_path, write_standardised_csv};
pub use queries::{
    ClaimTypeByLocation, DistributionEntry, LocationRow, by_claim_type_by_location,
    by_claim_type_distribution, by_relation_distribution, by_status_distribution, high_value,
    infectious_claims, injury_claims, maternity_claims, parental_claims, sum_insured_exhausted,
};
