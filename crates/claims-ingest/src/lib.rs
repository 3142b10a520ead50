//! CSV ingestion for claims exports.
//!
//! Loads a spreadsheet export into a [`claims_model::RawTable`] with
//! normalised headers and cells, and profiles columns into
//! [`claims_model::ColumnHint`]s for the schema matcher.

pub mod csv_table;

pub use csv_table::{build_column_hints, read_csv_table};
