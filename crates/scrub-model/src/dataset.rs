//! Rows, header sets, owned datasets and borrowed views.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::value::{RowKey, Value};

/// Ordered, unique column names fixed for the lifetime of a loaded file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct HeaderSet {
    names: Vec<String>,
}

impl HeaderSet {
    /// Builds a header set, rejecting repeated names.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = BTreeSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateHeader { name: name.clone() });
            }
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// One record, with cells stored in header order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<Value>,
}

impl Row {
    pub fn new(cells: Vec<Value>) -> Self {
        Self { cells }
    }

    /// Cell at `index`; out-of-range reads behave like an absent cell.
    pub fn get(&self, index: usize) -> &Value {
        static ABSENT: Value = Value::Null;
        self.cells.get(index).unwrap_or(&ABSENT)
    }

    /// Replaces the cell at `index`. Returns false if the index is out of range.
    pub fn set(&mut self, index: usize, value: Value) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Canonical key for duplicate detection.
    pub fn key(&self) -> RowKey {
        RowKey(self.cells.iter().map(Value::key).collect())
    }
}

impl From<Vec<Value>> for Row {
    fn from(cells: Vec<Value>) -> Self {
        Self::new(cells)
    }
}

/// An owned, ordered collection of rows sharing one header set.
///
/// Cloning a dataset deep-copies every row, so snapshots never alias.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    headers: HeaderSet,
    rows: Vec<Row>,
}

impl Dataset {
    /// Assembles a dataset, checking that every row matches the header width.
    pub fn new(headers: HeaderSet, rows: Vec<Row>) -> Result<Self> {
        let expected = headers.len();
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != expected)
            .map(|(i, r)| (i, r.len()))
        {
            return Err(ModelError::RowWidth {
                row,
                expected,
                found,
            });
        }
        Ok(Self { headers, rows })
    }

    /// Builds a dataset from plain column names and cell vectors.
    pub fn from_rows<H, S>(headers: H, rows: Vec<Vec<Value>>) -> Result<Self>
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers = HeaderSet::new(headers)?;
        Self::new(headers, rows.into_iter().map(Row::new).collect())
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Mutable access to rows; the row count and widths stay fixed.
    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Keeps only the rows for which `keep` returns true, preserving order.
    pub fn retain_rows(&mut self, keep: impl FnMut(&Row) -> bool) {
        self.rows.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the named column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.index_of(name)
    }

    /// A borrowed view over every row.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            headers: &self.headers,
            rows: self.rows.iter().collect(),
        }
    }
}

/// A read-only, ordered subsequence of a dataset's rows.
#[derive(Debug, Clone)]
pub struct DatasetView<'a> {
    headers: &'a HeaderSet,
    rows: Vec<&'a Row>,
}

impl<'a> DatasetView<'a> {
    pub fn new(headers: &'a HeaderSet, rows: Vec<&'a Row>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &'a HeaderSet {
        self.headers
    }

    pub fn rows(&self) -> &[&'a Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of the column at `index`, one per row.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &'a Value> + '_ {
        self.rows.iter().map(move |row| row.get(index))
    }

    /// The first `n` rows of this view.
    pub fn head(&self, n: usize) -> DatasetView<'a> {
        DatasetView {
            headers: self.headers,
            rows: self.rows.iter().take(n).copied().collect(),
        }
    }

    /// Deep-copies the view into an owned dataset.
    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            headers: self.headers.clone(),
            rows: self.rows.iter().map(|row| (*row).clone()).collect(),
        }
    }
}
