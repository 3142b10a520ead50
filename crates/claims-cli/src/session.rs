//! Pipeline session state machine.
//!
//! The pipeline advances through explicit stages, each transition guarded
//! by the previous stage's success:
//!
//! `Empty -> Uploaded -> Mapped -> Standardised`
//!
//! Commands drive a [`Session`] instead of mutating globals, so a failed
//! step leaves the session at its last good stage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use claims_ingest::{build_column_hints, read_csv_table};
use claims_model::{ColumnHint, ColumnMapping, MappingError, RawTable};
use claims_standardise::{StandardiseError, StandardiseOutput, standardise};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Empty,
    Uploaded,
    Mapped,
    Standardised,
}

#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("no file uploaded yet")]
    NothingUploaded,
    #[error("columns are not mapped yet")]
    NotMapped,
    #[error("data is not standardised yet")]
    NotStandardised,
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error(transparent)]
    Standardise(#[from] StandardiseError),
    #[error("upload failed: {0}")]
    Upload(String),
}

/// One run of the pipeline, from upload to standardised records.
#[derive(Debug, Default)]
pub struct Session {
    source_file: Option<PathBuf>,
    table: Option<RawTable>,
    hints: BTreeMap<String, ColumnHint>,
    mapping: Option<ColumnMapping>,
    output: Option<StandardiseOutput>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        if self.output.is_some() {
            Stage::Standardised
        } else if self.mapping.is_some() {
            Stage::Mapped
        } else if self.table.is_some() {
            Stage::Uploaded
        } else {
            Stage::Empty
        }
    }

    /// Loads a source file, resetting any later stage.
    pub fn upload(&mut self, path: &Path) -> Result<&RawTable, SessionError> {
        let table = read_csv_table(path).map_err(|err| SessionError::Upload(format!("{err:#}")))?;
        self.hints = build_column_hints(&table);
        self.source_file = Some(path.to_path_buf());
        self.mapping = None;
        self.output = None;
        self.table = Some(table);
        info!(path = %path.display(), "session uploaded");
        self.table()
    }

    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }

    pub fn table(&self) -> Result<&RawTable, SessionError> {
        self.table.as_ref().ok_or(SessionError::NothingUploaded)
    }

    pub fn hints(&self) -> &BTreeMap<String, ColumnHint> {
        &self.hints
    }

    /// Confirms a mapping. Requires an upload; invalid mappings are
    /// rejected and the stage does not advance.
    pub fn confirm_mapping(&mut self, mapping: ColumnMapping) -> Result<(), SessionError> {
        if self.table.is_none() {
            return Err(SessionError::NothingUploaded);
        }
        mapping.validate()?;
        self.mapping = Some(mapping);
        self.output = None;
        Ok(())
    }

    pub fn mapping(&self) -> Result<&ColumnMapping, SessionError> {
        self.mapping.as_ref().ok_or(SessionError::NotMapped)
    }

    /// Runs standardisation over the uploaded table under the confirmed
    /// mapping.
    pub fn standardise(&mut self) -> Result<&StandardiseOutput, SessionError> {
        let table = self.table.as_ref().ok_or(SessionError::NothingUploaded)?;
        let mapping = self.mapping.as_ref().ok_or(SessionError::NotMapped)?;
        let output = standardise(table, mapping)?;
        self.output = Some(output);
        self.output
            .as_ref()
            .ok_or(SessionError::NotStandardised)
    }

    pub fn output(&self) -> Result<&StandardiseOutput, SessionError> {
        self.output.as_ref().ok_or(SessionError::NotStandardised)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guards_hold_in_order() {
        let mut session = Session::new();
        assert_eq!(session.stage(), Stage::Empty);
        assert!(matches!(
            session.confirm_mapping(ColumnMapping::identity()),
            Err(SessionError::NothingUploaded)
        ));
        assert!(matches!(
            session.standardise(),
            Err(SessionError::NothingUploaded)
        ));
        assert!(matches!(
            session.output(),
            Err(SessionError::NotStandardised)
        ));
    }
}
