//! JSON arrays of objects.

use std::io::Read;
use std::path::Path;

use scrub_model::{Dataset, HeaderSet, Row, Value};
use serde_json::Value as JsonValue;

use crate::error::{IngestError, Result};

/// Decodes a JSON array of objects.
///
/// Headers are the keys of the first object in document order. Keys missing
/// from later objects read as `Null`; keys they add are ignored.
pub fn read_json<R: Read>(reader: R, path: &Path) -> Result<Dataset> {
    let document: JsonValue =
        serde_json::from_reader(reader).map_err(|e| IngestError::JsonParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let shape_error = |reason: String| IngestError::JsonShape {
        path: path.to_path_buf(),
        reason,
    };

    let JsonValue::Array(items) = document else {
        return Err(shape_error("expected an array of objects".to_string()));
    };
    let Some(JsonValue::Object(first)) = items.first() else {
        return Err(shape_error(
            "expected a non-empty array of objects".to_string(),
        ));
    };
    let headers = HeaderSet::new(first.keys().cloned()).map_err(|source| IngestError::Model {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let JsonValue::Object(object) = item else {
            return Err(shape_error(format!("element {index} is not an object")));
        };
        let cells = headers
            .iter()
            .map(|name| object.get(name).map_or(Value::Null, cell_from_json))
            .collect();
        rows.push(Row::new(cells));
    }

    Dataset::new(headers, rows).map_err(|source| IngestError::Model {
        path: path.to_path_buf(),
        source,
    })
}

fn cell_from_json(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Number(n) => n
            .as_f64()
            .map_or_else(|| Value::text(n.to_string()), Value::Number),
        JsonValue::String(s) => Value::text(s.as_str()),
        JsonValue::Bool(_) | JsonValue::Array(_) | JsonValue::Object(_) => {
            Value::text(value.to_string())
        }
    }
}
