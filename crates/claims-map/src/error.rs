use claims_model::CanonicalField;
use thiserror::Error;

/// Errors from suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("need at least {required} source columns, found {available}")]
    InsufficientColumns { required: usize, available: usize },
    #[error("no free source column left for {field}; map it manually")]
    AmbiguousMapping { field: CanonicalField },
}
