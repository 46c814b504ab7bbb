//! Cell values and their structural equality keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of a dataset.
///
/// Absent and `null` cells are both [`Value::Null`]; the empty string is kept
/// as `Text("")` so exports can round-trip it, but both count as missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Number(f64),
    Text(String),
}

impl Value {
    /// Convenience constructor for text cells.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns true for `Null` and the empty string.
    ///
    /// Whitespace-only strings are *not* missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Returns the string payload for text cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Interprets the cell as a finite number.
    ///
    /// Text is trimmed before parsing and a blank string reads as zero, so
    /// `" 12 "` and `"   "` are numeric while `"inf"` and `"abc"` are not.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Self::Null => None,
            Self::Number(v) => v.is_finite().then_some(*v),
            Self::Text(s) => parse_number(s),
        }
    }

    /// Structural key used for equality, hashing and ordering of cells.
    pub fn key(&self) -> CellKey {
        match self {
            Self::Null => CellKey::Null,
            Self::Number(v) => {
                // -0.0 and 0.0 compare equal, so they must share a key.
                let normalized = if *v == 0.0 { 0.0 } else { *v };
                CellKey::Number(normalized.to_bits())
            }
            Self::Text(s) => CellKey::Text(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Parses a trimmed string as a finite number; blank strings read as zero.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Hashable, totally ordered identity of a [`Value`].
///
/// Numbers and text never collide: `1` and `"1"` are distinct, as are
/// `Null` and `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKey {
    Null,
    Number(u64),
    Text(String),
}

/// Canonical serialization of a row in header order.
///
/// Two rows are duplicates exactly when their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(pub Vec<CellKey>);
