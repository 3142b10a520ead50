use claims_model::{CanonicalField, MappingError};
use thiserror::Error;

/// Errors that abort a standardisation run before any output exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandardiseError {
    #[error("mapping is missing fields: {}", join_fields(missing))]
    MappingIncomplete { missing: Vec<CanonicalField> },
    #[error("source column '{column}' is mapped to both {first} and {second}")]
    DuplicateSourceColumn {
        column: String,
        first: CanonicalField,
        second: CanonicalField,
    },
    #[error("mapped column '{column}' not found in the input header")]
    SourceColumnMissing { column: String },
}

impl From<MappingError> for StandardiseError {
    fn from(err: MappingError) -> Self {
        match err {
            MappingError::Incomplete { missing } => StandardiseError::MappingIncomplete { missing },
            MappingError::DuplicateSourceColumn {
                column,
                first,
                second,
            } => StandardiseError::DuplicateSourceColumn {
                column,
                first,
                second,
            },
        }
    }
}

fn join_fields(fields: &[CanonicalField]) -> String {
    fields
        .iter()
        .map(CanonicalField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
