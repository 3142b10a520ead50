//! Column mapping types: the artifact connecting a raw upload to the
//! canonical schema.
//!
//! A mapping is injective by contract: each source column is the target of
//! at most one canonical field, and all required fields must be mapped
//! before standardisation runs. `ColumnMapping::validate` enforces both.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MappingError;
use crate::field::{CANONICAL_FIELDS, CanonicalField};

/// Hints about a source column's characteristics.
///
/// Used by the schema matcher to weigh candidates beyond name similarity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnHint {
    /// True if every non-empty cell in the column parses as a number.
    pub is_numeric: bool,
    /// Ratio of unique values to non-empty cells (0.0 to 1.0).
    pub unique_ratio: f64,
    /// Ratio of empty cells to total rows (0.0 to 1.0).
    pub null_ratio: f64,
}

/// One suggested or confirmed assignment of a source column to a canonical
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Target canonical field.
    pub canonical_field: CanonicalField,
    /// Source column name from the uploaded file.
    pub source_column: String,
    /// Matcher confidence (0.0 to 1.0); 1.0 for manual assignments.
    pub confidence: f32,
}

/// The persisted mapping artifact.
///
/// Written by the `suggest` step for the user to review and edit, read back
/// by the `standardise` step. Conversion to a [`ColumnMapping`] validates
/// injectivity and completeness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Name of the source file this mapping was suggested for.
    pub source_file: String,
    /// Field-to-column assignments, in canonical matching order.
    pub entries: Vec<MappingEntry>,
    /// Source columns left unassigned.
    pub unmapped_columns: Vec<String>,
}

impl MappingConfig {
    /// Converts the artifact into a validated [`ColumnMapping`].
    pub fn to_column_mapping(&self) -> Result<ColumnMapping, MappingError> {
        let mut mapping = ColumnMapping::default();
        for entry in &self.entries {
            mapping.assign(entry.canonical_field, entry.source_column.clone());
        }
        mapping.validate()?;
        Ok(mapping)
    }
}

/// An injective map from canonical field to source column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    assignments: BTreeMap<CanonicalField, String>,
}

impl ColumnMapping {
    /// The identity mapping: every canonical field maps to its own name.
    ///
    /// Used to re-standardise a previously standardised table.
    pub fn identity() -> Self {
        let mut mapping = Self::default();
        for field in CANONICAL_FIELDS {
            mapping.assign(field, field.as_str().to_string());
        }
        mapping
    }

    /// Assigns a source column to a field, replacing any previous
    /// assignment for that field.
    pub fn assign(&mut self, field: CanonicalField, source_column: String) {
        self.assignments.insert(field, source_column);
    }

    /// The source column assigned to a field, if any.
    pub fn source_for(&self, field: CanonicalField) -> Option<&str> {
        self.assignments.get(&field).map(String::as_str)
    }

    /// Iterates assignments in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &str)> {
        self.assignments
            .iter()
            .map(|(field, column)| (*field, column.as_str()))
    }

    /// Canonical fields with no assignment.
    pub fn missing_fields(&self) -> Vec<CanonicalField> {
        CANONICAL_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.assignments.contains_key(field))
            .collect()
    }

    /// Checks injectivity and completeness.
    ///
    /// Injectivity fails as soon as two fields share a source column;
    /// completeness fails when any canonical field is unassigned.
    pub fn validate(&self) -> Result<(), MappingError> {
        let mut seen: BTreeMap<&str, CanonicalField> = BTreeMap::new();
        for (field, column) in self.iter() {
            if let Some(first) = seen.insert(column, field) {
                return Err(MappingError::DuplicateSourceColumn {
                    column: column.to_string(),
                    first,
                    second: field,
                });
            }
        }
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(MappingError::Incomplete { missing });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
