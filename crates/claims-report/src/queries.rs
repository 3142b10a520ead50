//! Segment queries over standardised claims.
//!
//! All queries are pure reads. Records with a missing value for the queried
//! dimension are excluded from threshold filters, never coerced to zero;
//! distribution queries bucket them under the NA sentinel.

use std::collections::BTreeMap;

use claims_common::round2;
use claims_model::{ClaimRecord, NA, Relation};

/// Claims whose claimed amount exceeds 70% of the sum insured.
pub fn high_value(records: &[ClaimRecord]) -> Vec<&ClaimRecord> {
    records
        .iter()
        .filter(|record| {
            record
                .percent_of_sum_insured_claimed
                .is_some_and(|percent| percent > 70.0)
        })
        .collect()
}

/// Claims that consumed the full sum insured or more.
pub fn sum_insured_exhausted(records: &[ClaimRecord]) -> Vec<&ClaimRecord> {
    records
        .iter()
        .filter(|record| {
            record
                .percent_of_sum_insured_claimed
                .is_some_and(|percent| percent >= 100.0)
        })
        .collect()
}

/// Injury and external-cause claims (ICD chapters S and T).
pub fn injury_claims(records: &[ClaimRecord]) -> Vec<&ClaimRecord> {
    by_ailment_letters(records, &['S', 'T'])
}

/// Infectious and parasitic disease claims (ICD chapter A).
pub fn infectious_claims(records: &[ClaimRecord]) -> Vec<&ClaimRecord> {
    by_ailment_letters(records, &['A'])
}

/// Pregnancy and childbirth claims (ICD chapter O).
pub fn maternity_claims(records: &[ClaimRecord]) -> Vec<&ClaimRecord> {
    by_ailment_letters(records, &['O'])
}

fn by_ailment_letters<'a>(records: &'a [ClaimRecord], letters: &[char]) -> Vec<&'a ClaimRecord> {
    records
        .iter()
        .filter(|record| {
            record
                .ailment_group
                .is_some_and(|letter| letters.contains(&letter))
        })
        .collect()
}

/// Claims filed for a parent or parent-in-law.
pub fn parental_claims(records: &[ClaimRecord]) -> Vec<&ClaimRecord> {
    records
        .iter()
        .filter(|record| {
            matches!(record.relation, Relation::Parent | Relation::ParentInLaw)
        })
        .collect()
}

/// One label's share of a distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
    /// Percentage of total rows, rounded to 2 decimal places.
    pub percent: f64,
}

/// Percentage of claims per relation label.
pub fn by_relation_distribution(records: &[ClaimRecord]) -> Vec<DistributionEntry> {
    distribution(records, |record| record.relation.as_str().to_string())
}

/// Percentage of claims per claim type.
pub fn by_claim_type_distribution(records: &[ClaimRecord]) -> Vec<DistributionEntry> {
    distribution(records, |record| {
        record.claim_type.clone().unwrap_or_else(|| NA.to_string())
    })
}

/// Percentage of claims per readable claim status.
pub fn by_status_distribution(records: &[ClaimRecord]) -> Vec<DistributionEntry> {
    distribution(records, |record| record.claim_status.as_str().to_string())
}

fn distribution(
    records: &[ClaimRecord],
    label_of: impl Fn(&ClaimRecord) -> String,
) -> Vec<DistributionEntry> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(label_of(record)).or_default() += 1;
    }
    let total = records.len();
    counts
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label,
            count,
            percent: if total == 0 {
                0.0
            } else {
                round2(count as f64 / total as f64 * 100.0)
            },
        })
        .collect()
}

/// Claim counts pivoted by location (rows) and claim type (columns).
#[derive(Debug, Clone)]
pub struct ClaimTypeByLocation {
    /// Column labels, sorted.
    pub claim_types: Vec<String>,
    /// One row per location, sorted by location label.
    pub rows: Vec<LocationRow>,
}

#[derive(Debug, Clone)]
pub struct LocationRow {
    pub location: String,
    /// Counts aligned with `claim_types`.
    pub counts: Vec<usize>,
    pub total: usize,
}

impl LocationRow {
    /// Each count as a share of the row total, 2 decimal places.
    pub fn percentages(&self) -> Vec<f64> {
        self.counts
            .iter()
            .map(|count| {
                if self.total == 0 {
                    0.0
                } else {
                    round2(*count as f64 / self.total as f64 * 100.0)
                }
            })
            .collect()
    }
}

/// Pivots claims into a location-by-claim-type count table.
pub fn by_claim_type_by_location(records: &[ClaimRecord]) -> ClaimTypeByLocation {
    let label = |value: &Option<String>| value.clone().unwrap_or_else(|| NA.to_string());

    let claim_types: Vec<String> = records
        .iter()
        .map(|record| label(&record.claim_type))
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    let column_of: BTreeMap<&str, usize> = claim_types
        .iter()
        .enumerate()
        .map(|(column, label)| (label.as_str(), column))
        .collect();

    let mut per_location: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for record in records {
        let counts = per_location
            .entry(label(&record.location))
            .or_insert_with(|| vec![0; claim_types.len()]);
        counts[column_of[label(&record.claim_type).as_str()]] += 1;
    }

    ClaimTypeByLocation {
        claim_types,
        rows: per_location
            .into_iter()
            .map(|(location, counts)| {
                let total = counts.iter().sum();
                LocationRow {
                    location,
                    counts,
                    total,
                }
            })
            .collect(),
    }
}
