use thiserror::Error;

use crate::field::CanonicalField;

/// Errors raised by column mapping validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("source column '{column}' is mapped to both {first} and {second}")]
    DuplicateSourceColumn {
        column: String,
        first: CanonicalField,
        second: CanonicalField,
    },
    #[error("mapping is missing required fields: {}", join_fields(missing))]
    Incomplete { missing: Vec<CanonicalField> },
}

fn join_fields(fields: &[CanonicalField]) -> String {
    fields
        .iter()
        .map(CanonicalField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
