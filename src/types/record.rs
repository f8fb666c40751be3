//! A single row of a geonames data file

use serde::{Deserialize, Serialize};

/// Ordered column/value pairs for one line of data
///
/// Column order follows the dataset's field list. Hooks may rewrite values
/// in place before the importer consumes the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    columns: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `fields` with `values` position by position
    ///
    /// Missing trailing values become empty strings; surplus values are dropped.
    pub fn from_fields<'f, 'v, F, V>(fields: F, values: V) -> Self
    where
        F: IntoIterator<Item = &'f str>,
        V: IntoIterator<Item = &'v str>,
    {
        let mut values = values.into_iter();
        let columns = fields
            .into_iter()
            .map(|field| {
                let value = values.next().unwrap_or_default();
                (field.to_string(), value.to_string())
            })
            .collect();
        Self { columns }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Set a column value, appending the column if it is not present
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match self.columns.iter_mut().find(|(name, _)| name == column) {
            Some((_, slot)) => *slot = value,
            None => self.columns.push((column.to_string(), value)),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
