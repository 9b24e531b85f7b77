use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Max number of body bytes echoed into diagnostic log lines.
pub const SNIPPET_LIMIT: usize = 100;

/// One order as submitted by the client. Its fields are never inspected.
pub type OrderEntry = Map<String, Value>;

/// Top-level structural type of a decoded JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Array,
    Object,
    String,
    Number,
    Bool,
    Null,
}

impl From<&Value> for JsonKind {
    fn from(value: &Value) -> Self {
        match value {
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
            Value::String(_) => JsonKind::String,
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Bool,
            Value::Null => JsonKind::Null,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Array => "array",
            JsonKind::Object => "object",
            JsonKind::String => "string",
            JsonKind::Number => "number",
            JsonKind::Bool => "boolean",
            JsonKind::Null => "null",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("body is a JSON {found}, expected a top-level array")]
    NotAnArray { found: JsonKind },

    #[error("order at index {index} is a JSON {found}, expected an object")]
    NonObjectEntry { index: usize, found: JsonKind },
}

/// Ordered orders decoded from a request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBatch {
    entries: Vec<OrderEntry>,
}

impl OrderBatch {
    /// Decodes `body` generically, then insists on `[ {..}, {..}, ... ]`.
    ///
    /// A valid object that merely wraps an array (`{"orders": [...]}`) is
    /// rejected; there is no second attempt at another shape.
    pub fn parse(body: &[u8]) -> Result<Self, ShapeError> {
        let value: Value = serde_json::from_slice(body)?;
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(ShapeError::NotAnArray {
                    found: JsonKind::from(&other),
                });
            }
        };

        let mut entries = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(entry) => entries.push(entry),
                other => {
                    return Err(ShapeError::NonObjectEntry {
                        index,
                        found: JsonKind::from(&other),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// First [`SNIPPET_LIMIT`] bytes of `body` as text. Cut multi-byte sequences
/// are replaced rather than rejected.
pub fn body_snippet(body: &[u8]) -> String {
    let end = body.len().min(SNIPPET_LIMIT);
    String::from_utf8_lossy(&body[..end]).into_owned()
}
