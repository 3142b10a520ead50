//! Schema matching for claims exports.
//!
//! Suggests a one-to-one mapping from arbitrary source column names to the
//! canonical claim schema, and tracks the user's review of that suggestion.

pub mod engine;
pub mod error;
pub mod state;
pub mod utils;

pub use engine::{SuggestionResult, rank_candidates, suggest_mapping};
pub use error::MatchError;
pub use state::{MappingState, MappingStateSummary};
pub use utils::normalize_text;
