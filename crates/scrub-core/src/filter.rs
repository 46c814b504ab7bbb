//! Date-range filtering of a dataset into a read-only view.

use chrono::NaiveDate;
use scrub_model::{Dataset, DatasetView};
use tracing::{debug, trace};

use crate::datetime::{parse_cell_date, parse_date_str};
use crate::error::{CoreError, Result};
use crate::redaction::redact_value;

const INCOMPLETE_REQUEST: &str = "Please select a column, a start date, and an end date.";

/// An inclusive calendar-date range over one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    column: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(column: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            column: column.into(),
            start,
            end,
        }
    }

    /// Validates a filter request given as raw strings.
    ///
    /// The column and both bounds are required, and each bound must parse as
    /// a date. A start after the end is allowed and matches nothing.
    pub fn parse(column: &str, start: &str, end: &str) -> Result<Self> {
        if column.trim().is_empty() || start.trim().is_empty() || end.trim().is_empty() {
            return Err(CoreError::invalid_filter(INCOMPLETE_REQUEST));
        }
        let parse_bound = |raw: &str| {
            parse_date_str(raw)
                .ok_or_else(|| CoreError::invalid_filter(format!("'{raw}' is not a valid date")))
        };
        Ok(Self::new(column, parse_bound(start)?, parse_bound(end)?))
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when `date` lies within the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Returns the rows of `dataset` whose `range.column()` cell falls in `range`.
///
/// Missing and unparseable cells exclude their row. Row order is preserved
/// and the dataset is not modified.
pub fn filter_by_date_range<'a>(dataset: &'a Dataset, range: &DateRange) -> Result<DatasetView<'a>> {
    let index = dataset.column_index(range.column()).ok_or_else(|| {
        CoreError::invalid_filter(format!("column '{}' not found", range.column()))
    })?;
    Ok(filter_rows(dataset, index, range))
}

/// Filters by a column index already resolved against the header set.
pub(crate) fn filter_rows<'a>(dataset: &'a Dataset, index: usize, range: &DateRange) -> DatasetView<'a> {
    let mut unparseable = 0usize;
    let rows = dataset
        .rows()
        .iter()
        .filter(|row| {
            let cell = row.get(index);
            if cell.is_missing() {
                return false;
            }
            match parse_cell_date(cell) {
                Some(date) => range.contains(date),
                None => {
                    unparseable += 1;
                    trace!(
                        column = range.column(),
                        value = redact_value(&cell.to_string()),
                        "excluding row with unparseable date"
                    );
                    false
                }
            }
        })
        .collect();
    let view = DatasetView::new(dataset.headers(), rows);
    debug!(
        column = range.column(),
        start = %range.start(),
        end = %range.end(),
        kept = view.len(),
        total = dataset.len(),
        unparseable,
        "applied date filter"
    );
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrub_model::Value;

    fn orders() -> Dataset {
        Dataset::from_rows(
            ["id", "order_date"],
            vec![
                vec![Value::Number(1.0), Value::text("2023-01-01")],
                vec![Value::Number(2.0), Value::text("2022-12-31")],
                vec![Value::Number(3.0), Value::text("2023-01-31")],
                vec![Value::Number(4.0), Value::text("2023-02-01")],
                vec![Value::Number(5.0), Value::Number(44941.0)],
                vec![Value::Number(6.0), Value::Number(9999.0)],
                vec![Value::Number(7.0), Value::text("not a date")],
                vec![Value::Number(8.0), Value::Null],
            ],
        )
        .unwrap()
    }

    fn ids(view: &DatasetView<'_>) -> Vec<f64> {
        view.column_values(0)
            .filter_map(|v| v.numeric_value())
            .collect()
    }

    #[test]
    fn bounds_are_inclusive() {
        let data = orders();
        let range = DateRange::parse("order_date", "2023-01-01", "2023-01-31").unwrap();
        let view = filter_by_date_range(&data, &range).unwrap();
        // 44941 is 2023-01-15
        assert_eq!(ids(&view), vec![1.0, 3.0, 5.0]);
        assert_eq!(data.len(), 8);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let data = orders();
        let range = DateRange::parse("order_date", "2023-02-01", "2023-01-01").unwrap();
        assert!(filter_by_date_range(&data, &range).unwrap().is_empty());
    }

    #[test]
    fn incomplete_requests_are_rejected() {
        let expected = CoreError::invalid_filter(INCOMPLETE_REQUEST);
        assert_eq!(DateRange::parse("", "2023-01-01", "2023-01-02").unwrap_err(), expected);
        assert_eq!(DateRange::parse("d", "", "2023-01-02").unwrap_err(), expected);
        assert_eq!(DateRange::parse("d", "2023-01-01", " ").unwrap_err(), expected);
    }

    #[test]
    fn unparseable_bounds_are_rejected() {
        let err = DateRange::parse("d", "soon", "2023-01-02").unwrap_err();
        assert!(matches!(err, CoreError::InvalidFilterRequest { .. }));
    }

    #[test]
    fn unknown_column_is_rejected() {
        let data = orders();
        let range = DateRange::parse("shipped", "2023-01-01", "2023-01-02").unwrap();
        assert!(matches!(
            filter_by_date_range(&data, &range),
            Err(CoreError::InvalidFilterRequest { .. })
        ));
    }
}
