use std::collections::BTreeSet;

/// An untyped table exactly as ingested: arbitrary source column names,
/// string cells, no invariants beyond rectangular shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell value at (row, column name); `None` if either is absent.
    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// The header set, for membership checks during mapping validation.
    pub fn header_set(&self) -> BTreeSet<&str> {
        self.headers.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_lookup() {
        let mut table = RawTable::new(vec!["A".to_string(), "B".to_string()]);
        table.push_row(vec!["1".to_string(), "2".to_string()]);
        assert_eq!(table.cell(0, "B"), Some("2"));
        assert_eq!(table.cell(0, "C"), None);
        assert_eq!(table.cell(1, "A"), None);
    }
}
