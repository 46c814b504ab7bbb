//! Cleaning suggestions and their stable identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of the duplicate-row suggestion.
pub const REMOVE_DUPLICATES_ID: &str = "remove-duplicates";
/// Prefix of per-column missing-value suggestions.
pub const FILL_MISSING_PREFIX: &str = "fill-missing-";
/// Prefix of per-column whitespace suggestions.
pub const TRIM_WHITESPACE_PREFIX: &str = "trim-whitespace-";

/// The operation a suggestion stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestionKind {
    RemoveDuplicates,
    FillMissing { column: String },
    TrimWhitespace { column: String },
}

impl SuggestionKind {
    /// Stable id encoding the operation and its target column.
    pub fn id(&self) -> String {
        match self {
            Self::RemoveDuplicates => REMOVE_DUPLICATES_ID.to_string(),
            Self::FillMissing { column } => format!("{FILL_MISSING_PREFIX}{column}"),
            Self::TrimWhitespace { column } => format!("{TRIM_WHITESPACE_PREFIX}{column}"),
        }
    }

    /// Decodes an id produced by [`SuggestionKind::id`].
    ///
    /// The column part is not checked against any header set.
    pub fn parse(id: &str) -> Option<Self> {
        if id == REMOVE_DUPLICATES_ID {
            return Some(Self::RemoveDuplicates);
        }
        if let Some(column) = id.strip_prefix(FILL_MISSING_PREFIX) {
            return Some(Self::FillMissing {
                column: column.to_string(),
            });
        }
        id.strip_prefix(TRIM_WHITESPACE_PREFIX)
            .map(|column| Self::TrimWhitespace {
                column: column.to_string(),
            })
    }

    pub fn column(&self) -> Option<&str> {
        match self {
            Self::RemoveDuplicates => None,
            Self::FillMissing { column } | Self::TrimWhitespace { column } => Some(column),
        }
    }
}

/// A proposed cleaning operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    /// Short call to action, e.g. `"Remove 3 duplicates"`.
    pub action_label: String,
    pub column: Option<String>,
    pub applied: bool,
}

impl Suggestion {
    pub fn new(
        kind: SuggestionKind,
        title: impl Into<String>,
        description: impl Into<String>,
        action_label: impl Into<String>,
    ) -> Self {
        Self {
            id: kind.id(),
            column: kind.column().map(str::to_string),
            kind,
            title: title.into(),
            description: description.into(),
            action_label: action_label.into(),
            applied: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_parse() {
        let kinds = [
            SuggestionKind::RemoveDuplicates,
            SuggestionKind::FillMissing {
                column: "order-date".into(),
            },
            SuggestionKind::TrimWhitespace {
                column: "Full Name".into(),
            },
        ];
        for kind in kinds {
            assert_eq!(SuggestionKind::parse(&kind.id()), Some(kind));
        }
    }

    #[test]
    fn unknown_ids_do_not_parse() {
        assert_eq!(SuggestionKind::parse("drop-everything"), None);
    }

    #[test]
    fn new_fills_id_and_column() {
        let s = Suggestion::new(
            SuggestionKind::FillMissing { column: "age".into() },
            "t",
            "d",
            "a",
        );
        assert_eq!(s.id, "fill-missing-age");
        assert_eq!(s.column.as_deref(), Some("age"));
        assert!(!s.applied);
    }
}
