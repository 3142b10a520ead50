//! Mapping state for the review-and-confirm workflow.
//!
//! Tracks engine suggestions alongside the assignments the user has
//! accepted. Injectivity is maintained at every step: manually assigning a
//! column that another field holds moves the column, it never duplicates.

use std::collections::BTreeMap;

use claims_model::{
    CANONICAL_FIELDS, CanonicalField, MappingConfig, MappingEntry,
};

use crate::engine::SuggestionResult;

#[derive(Debug, Clone)]
pub struct MappingState {
    /// Name of the source file being mapped.
    pub source_file: String,
    /// Engine suggestions, one per canonical field.
    pub suggestions: Vec<MappingEntry>,
    /// Accepted assignments: field -> (source column, confidence).
    accepted: BTreeMap<CanonicalField, (String, f32)>,
    /// Source columns no suggestion claimed.
    pub unmapped_columns: Vec<String>,
}

impl MappingState {
    pub fn new(source_file: &str, result: SuggestionResult) -> Self {
        Self {
            source_file: source_file.to_string(),
            suggestions: result.entries,
            accepted: BTreeMap::new(),
            unmapped_columns: result.unmapped_columns,
        }
    }

    /// The suggestion for a field, if the engine produced one.
    pub fn suggestion_for(&self, field: CanonicalField) -> Option<&MappingEntry> {
        self.suggestions
            .iter()
            .find(|entry| entry.canonical_field == field)
    }

    /// The accepted column for a field.
    pub fn accepted_for(&self, field: CanonicalField) -> Option<(&str, f32)> {
        self.accepted
            .get(&field)
            .map(|(column, confidence)| (column.as_str(), *confidence))
    }

    /// Accepts the engine suggestion for a field. Returns false when there
    /// is no suggestion or its column is already accepted elsewhere.
    pub fn accept_suggestion(&mut self, field: CanonicalField) -> bool {
        let Some(entry) = self.suggestion_for(field).cloned() else {
            return false;
        };
        if self
            .accepted
            .iter()
            .any(|(f, (column, _))| *f != field && *column == entry.source_column)
        {
            return false;
        }
        self.accepted
            .insert(field, (entry.source_column, entry.confidence));
        true
    }

    /// Accepts every suggestion. Used by the non-interactive path.
    pub fn accept_all_suggestions(&mut self) {
        for field in CANONICAL_FIELDS {
            self.accept_suggestion(field);
        }
    }

    /// Manually assigns a column to a field with full confidence. If the
    /// column was accepted for another field, that assignment is cleared.
    pub fn accept_manual(&mut self, field: CanonicalField, source_column: &str) {
        self.accepted
            .retain(|f, (column, _)| *f == field || column != source_column);
        self.accepted
            .insert(field, (source_column.to_string(), 1.0));
        self.unmapped_columns.retain(|c| c != source_column);
    }

    /// Clears the accepted assignment for a field.
    pub fn clear(&mut self, field: CanonicalField) -> bool {
        self.accepted.remove(&field).is_some()
    }

    pub fn is_column_used(&self, column: &str) -> bool {
        self.accepted.values().any(|(c, _)| c == column)
    }

    /// Fields with no accepted assignment.
    pub fn missing_fields(&self) -> Vec<CanonicalField> {
        CANONICAL_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.accepted.contains_key(field))
            .collect()
    }

    pub fn summary(&self) -> MappingStateSummary {
        MappingStateSummary {
            total_fields: CANONICAL_FIELDS.len(),
            accepted: self.accepted.len(),
            suggested: self
                .suggestions
                .iter()
                .filter(|entry| !self.accepted.contains_key(&entry.canonical_field))
                .count(),
        }
    }

    /// Freezes the accepted assignments into a persistable config.
    pub fn to_config(&self) -> MappingConfig {
        MappingConfig {
            source_file: self.source_file.clone(),
            entries: self
                .accepted
                .iter()
                .map(|(field, (column, confidence))| MappingEntry {
                    canonical_field: *field,
                    source_column: column.clone(),
                    confidence: *confidence,
                })
                .collect(),
            unmapped_columns: self.unmapped_columns.clone(),
        }
    }
}

/// Progress counts for display.
#[derive(Debug, Clone, Copy)]
pub struct MappingStateSummary {
    pub total_fields: usize,
    pub accepted: usize,
    pub suggested: usize,
}
