//! Linear undo history of full dataset snapshots.

use scrub_model::Dataset;

use crate::error::{CoreError, Result};

/// A frozen copy of the working dataset taken before a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    label: String,
    ids: Vec<String>,
    snapshot: Dataset,
}

impl HistoryEntry {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Suggestion ids the recorded mutation applied.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn snapshot(&self) -> &Dataset {
        &self.snapshot
    }

    /// Splits the entry into `(snapshot, label, ids)`.
    pub fn into_parts(self) -> (Dataset, String, Vec<String>) {
        (self.snapshot, self.label, self.ids)
    }
}

/// Stack of snapshots, most recent last.
///
/// The history never sees the live working dataset after a push; each entry
/// owns its own deep copy.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `current` as it is before the mutation labelled `label`.
    pub fn push(&mut self, label: impl Into<String>, ids: Vec<String>, current: &Dataset) {
        self.entries.push(HistoryEntry {
            label: label.into(),
            ids,
            snapshot: current.clone(),
        });
    }

    /// Pops the most recent entry.
    pub fn undo(&mut self) -> Result<HistoryEntry> {
        self.entries.pop().ok_or(CoreError::EmptyHistory)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Labels of recorded mutations, oldest first.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(HistoryEntry::label).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
