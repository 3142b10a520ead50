//! Fuzzy matching and scoring for column-to-field mapping.
//!
//! Uses Jaro-Winkler similarity as the base metric with multiplicative
//! adjustments from column hints (numeric content, null ratio).

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use rapidfuzz::distance::jaro_winkler;
use tracing::debug;

use claims_model::{
    CANONICAL_FIELDS, CanonicalField, ColumnHint, FieldKind, MappingEntry,
};

use crate::error::MatchError;
use crate::utils::normalize_text;

/// Result of a suggestion run: one entry per canonical field, injective by
/// construction, plus the source columns left over.
#[derive(Debug, Clone)]
pub struct SuggestionResult {
    pub entries: Vec<MappingEntry>,
    pub unmapped_columns: Vec<String>,
}

impl SuggestionResult {
    /// The suggested source column for a field, if any.
    pub fn source_for(&self, field: CanonicalField) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.canonical_field == field)
            .map(|entry| entry.source_column.as_str())
    }
}

/// Suggests a one-to-one mapping from source columns to canonical fields.
///
/// Fields are resolved in declaration order. For each field every column is
/// scored and the ranked list is walked until a column not claimed by an
/// earlier field is found, so a field never loses its best match to a
/// lower-ranked field and no field is starved while free columns remain.
pub fn suggest_mapping(
    source_columns: &[String],
    hints: &BTreeMap<String, ColumnHint>,
) -> Result<SuggestionResult, MatchError> {
    let required = CANONICAL_FIELDS.len();
    if source_columns.len() < required {
        return Err(MatchError::InsufficientColumns {
            required,
            available: source_columns.len(),
        });
    }

    let mut used: BTreeSet<String> = BTreeSet::new();
    let mut entries = Vec::with_capacity(required);
    for field in CANONICAL_FIELDS {
        let ranked = rank_candidates(field, source_columns, hints);
        let Some((column, score)) = ranked
            .into_iter()
            .find(|(column, _)| !used.contains(column))
        else {
            return Err(MatchError::AmbiguousMapping { field });
        };
        debug!(field = %field, column = %column, score, "suggested column");
        used.insert(column.clone());
        entries.push(MappingEntry {
            canonical_field: field,
            source_column: column,
            confidence: score.min(1.0),
        });
    }

    let unmapped_columns = source_columns
        .iter()
        .filter(|column| !used.contains(*column))
        .cloned()
        .collect();
    Ok(SuggestionResult {
        entries,
        unmapped_columns,
    })
}

/// Scores every column against one field, highest first. Ties break by
/// column name so suggestions are deterministic.
pub fn rank_candidates(
    field: CanonicalField,
    source_columns: &[String],
    hints: &BTreeMap<String, ColumnHint>,
) -> Vec<(String, f32)> {
    let mut scored: Vec<(String, f32)> = source_columns
        .iter()
        .map(|column| (column.clone(), score_column(field, column, hints.get(column))))
        .collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored
}

fn score_column(field: CanonicalField, column: &str, hint: Option<&ColumnHint>) -> f32 {
    let field_name = field.as_str();
    let raw = similarity(column, field_name);
    let normalized = similarity(&normalize_text(column), &normalize_text(field_name));
    let mut score = raw.max(normalized);

    if let Some(hint) = hint {
        let field_is_numeric = matches!(field.kind(), FieldKind::Numeric);
        if field_is_numeric != hint.is_numeric {
            score *= 0.85;
        }
        // A date column reads as text; penalise numeric columns for date fields.
        if matches!(field.kind(), FieldKind::Date) && hint.is_numeric {
            score *= 0.85;
        }
        if hint.null_ratio > 0.9 {
            score *= 0.9;
        }
    }
    score
}

fn similarity(a: &str, b: &str) -> f32 {
    jaro_winkler::similarity(a.chars(), b.chars()) as f32
}
