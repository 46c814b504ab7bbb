//! The cleaning session: owner of one loaded file's working state.
//!
//! A session holds the working copy all mutations apply to, the undo history, the set of applied suggestion ids and the
//! optional date filter. Loading another file means building a new session.

use std::collections::{BTreeSet, HashSet};

use scrub_model::{Dataset, DatasetView, EngineOptions, QualityReport, Suggestion, Value};
use serde::Serialize;
use tracing::info;

use crate::detection::detect_date_columns;
use crate::error::{CoreError, Result};
use crate::filter::{DateRange, filter_rows};
use crate::history::History;
use crate::operations::apply_kind;
use crate::profile::profile;
use crate::suggestions::derive_suggestions;

/// History label for a batch application of every pending suggestion.
pub const AUTO_CLEAN_LABEL: &str = "Applied Auto-Clean";

/// Result of applying one or more suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApplyOutcome {
    /// The working dataset changed and one history entry was recorded.
    Applied {
        label: String,
        ids: Vec<String>,
        rows_before: usize,
        rows_after: usize,
    },
    /// The suggestion was already applied; nothing changed.
    AlreadyApplied { id: String },
    /// `apply_all` found nothing pending.
    NothingPending,
}

/// What an undo restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndoOutcome {
    pub label: String,
    /// Suggestion ids that are on offer again.
    pub ids: Vec<String>,
    pub rows: usize,
}

/// Rows in the current view versus rows in the working dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowCounts {
    pub shown: usize,
    pub total: usize,
}

impl RowCounts {
    pub fn is_filtered(&self) -> bool {
        self.shown != self.total
    }
}

/// Distinct values of one column of the current view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnValues {
    pub column: String,
    /// First-seen order, capped at the configured limit.
    pub values: Vec<Value>,
    /// Distinct values before the cap.
    pub distinct_count: usize,
}

impl ColumnValues {
    pub fn is_truncated(&self) -> bool {
        self.values.len() < self.distinct_count
    }
}

#[derive(Debug, Clone)]
struct ActiveFilter {
    range: DateRange,
    index: usize,
}

/// Working state for one loaded dataset.
#[derive(Debug, Clone)]
pub struct CleaningSession {
    options: EngineOptions,
    working: Dataset,
    history: History,
    suggestions: Vec<Suggestion>,
    applied: BTreeSet<String>,
    filter: Option<ActiveFilter>,
    date_columns: Vec<String>,
}

impl CleaningSession {
    /// Starts a session over a freshly decoded dataset.
    pub fn new(dataset: Dataset, options: EngineOptions) -> Self {
        let suggestions = derive_suggestions(&dataset);
        let date_columns =
            detect_date_columns(dataset.headers(), dataset.rows(), &options.detection);
        info!(
            rows = dataset.len(),
            columns = dataset.headers().len(),
            suggestions = suggestions.len(),
            date_columns = date_columns.len(),
            "session started"
        );
        Self {
            working: dataset,
            options,
            history: History::new(),
            suggestions,
            applied: BTreeSet::new(),
            filter: None,
            date_columns,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The full, unfiltered working dataset.
    pub fn working(&self) -> &Dataset {
        &self.working
    }

    /// Current suggestions with their applied flags.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.suggestions
            .iter()
            .map(|s| Suggestion {
                applied: self.applied.contains(&s.id),
                ..s.clone()
            })
            .collect()
    }

    /// Suggestions that have not been applied yet.
    pub fn pending(&self) -> Vec<&Suggestion> {
        self.suggestions
            .iter()
            .filter(|s| !self.applied.contains(&s.id))
            .collect()
    }

    pub fn is_applied(&self, id: &str) -> bool {
        self.applied.contains(id)
    }

    /// Re-derives the suggestion list from the working dataset.
    ///
    /// Every derived suggestion describes a problem still present in the
    /// data, so all of them start out pending again. History entries keep
    /// their own ids, so undo is unaffected.
    pub fn refresh_suggestions(&mut self) {
        self.suggestions = derive_suggestions(&self.working);
        self.applied.clear();
        info!(suggestions = self.suggestions.len(), "suggestions refreshed");
    }

    /// Applies one suggestion by id.
    pub fn apply(&mut self, id: &str) -> Result<ApplyOutcome> {
        if self.applied.contains(id) {
            return Ok(ApplyOutcome::AlreadyApplied { id: id.to_string() });
        }
        let suggestion = self
            .suggestions
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::UnknownSuggestion { id: id.to_string() })?;
        let label = suggestion.title.clone();
        let cleaned = apply_kind(&self.working, &suggestion.kind)?;
        Ok(self.commit(label, vec![id.to_string()], cleaned))
    }

    /// Applies every pending suggestion as a single undoable step.
    pub fn apply_all(&mut self) -> Result<ApplyOutcome> {
        let pending: Vec<Suggestion> = self.pending().into_iter().cloned().collect();
        if pending.is_empty() {
            return Ok(ApplyOutcome::NothingPending);
        }
        let mut cleaned = self.working.clone();
        for suggestion in &pending {
            cleaned = apply_kind(&cleaned, &suggestion.kind)?;
        }
        let ids = pending.into_iter().map(|s| s.id).collect();
        Ok(self.commit(AUTO_CLEAN_LABEL.to_string(), ids, cleaned))
    }

    fn commit(&mut self, label: String, ids: Vec<String>, cleaned: Dataset) -> ApplyOutcome {
        let rows_before = self.working.len();
        self.history.push(label.as_str(), ids.clone(), &self.working);
        self.working = cleaned;
        self.applied.extend(ids.iter().cloned());
        info!(
            label = %label,
            ids = ?ids,
            rows_before,
            rows_after = self.working.len(),
            "applied cleaning step"
        );
        ApplyOutcome::Applied {
            label,
            ids,
            rows_before,
            rows_after: self.working.len(),
        }
    }

    /// Restores the working dataset from the most recent snapshot.
    pub fn undo(&mut self) -> Result<UndoOutcome> {
        let (snapshot, label, ids) = self.history.undo()?.into_parts();
        self.working = snapshot;
        for id in &ids {
            self.applied.remove(id);
        }
        info!(label = %label, ids = ?ids, rows = self.working.len(), "undid cleaning step");
        Ok(UndoOutcome {
            label,
            ids,
            rows: self.working.len(),
        })
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Labels of undoable steps, oldest first.
    pub fn history_labels(&self) -> Vec<&str> {
        self.history.labels()
    }

    /// Installs a date filter over `column`, replacing any previous one.
    pub fn set_filter(&mut self, column: &str, start: &str, end: &str) -> Result<()> {
        let range = DateRange::parse(column, start, end)?;
        let index = self.working.column_index(column).ok_or_else(|| {
            CoreError::InvalidFilterRequest {
                reason: format!("column '{column}' not found"),
            }
        })?;
        info!(column, start = %range.start(), end = %range.end(), "date filter set");
        self.filter = Some(ActiveFilter { range, index });
        Ok(())
    }

    pub fn clear_filter(&mut self) {
        if self.filter.take().is_some() {
            info!("date filter cleared");
        }
    }

    pub fn filter(&self) -> Option<&DateRange> {
        self.filter.as_ref().map(|f| &f.range)
    }

    /// The working dataset restricted by the active filter, if any.
    pub fn view(&self) -> DatasetView<'_> {
        match &self.filter {
            Some(filter) => filter_rows(&self.working, filter.index, &filter.range),
            None => self.working.view(),
        }
    }

    /// Column metrics of the current view.
    pub fn quality_report(&self) -> QualityReport {
        profile(&self.view())
    }

    /// The first `preview_rows` rows of the current view.
    pub fn preview(&self) -> DatasetView<'_> {
        self.preview_rows(self.options.preview_rows)
    }

    pub fn preview_rows(&self, rows: usize) -> DatasetView<'_> {
        self.view().head(rows)
    }

    pub fn row_counts(&self) -> RowCounts {
        RowCounts {
            shown: self.view().len(),
            total: self.working.len(),
        }
    }

    /// Distinct values of `column` in the current view, empties included.
    pub fn column_values(&self, column: &str) -> Result<ColumnValues> {
        let index = self
            .working
            .column_index(column)
            .ok_or_else(|| CoreError::unknown_column(column))?;
        let view = self.view();
        let mut seen = HashSet::new();
        let distinct: Vec<&Value> = view
            .column_values(index)
            .filter(|v| seen.insert(v.key()))
            .collect();
        Ok(ColumnValues {
            column: column.to_string(),
            distinct_count: distinct.len(),
            values: distinct
                .into_iter()
                .take(self.options.value_list_limit)
                .cloned()
                .collect(),
        })
    }

    /// Columns that looked date-valued when the file was loaded.
    pub fn date_columns(&self) -> &[String] {
        &self.date_columns
    }
}
