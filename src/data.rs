use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::Value as Json;
use std::fmt;

/// A single raw cell as delivered by the parser.
///
/// Cells are kept tagged instead of coerced: whether `Text("3")` counts as
/// a number is decided per column by the analyzer, never at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Absent,
}

/// Identity key for unique-counting and category codes.
/// `Number(3.0)` and `Text("3")` are distinct keys: no coercion happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Number(u64),
    Text(String),
}

impl Value {
    /// Empty text counts as absent, same as a missing cell.
    pub fn is_present(&self) -> bool {
        match self {
            Value::Number(_) => true,
            Value::Text(s) => !s.is_empty(),
            Value::Absent => false,
        }
    }

    /// Numeric reading of the cell: numbers pass through, text must parse
    /// in full to a finite float. `None` for absent or unparseable cells.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => None,
            },
            Value::Absent => None,
        }
    }

    /// Identity key; `None` iff the cell is not present.
    pub fn key(&self) -> Option<ValueKey> {
        match self {
            Value::Number(n) => Some(ValueKey::Number(n.to_bits())),
            Value::Text(s) if !s.is_empty() => Some(ValueKey::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Absent => Ok(()),
        }
    }
}

/// An in-memory tabular dataset: the first record's keys define the schema,
/// every row holds one `Value` per column.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// A dataset with no rows (or no columns) is refused here, so every
    /// `Dataset` in hand is analyzable.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        if headers.is_empty() {
            return Err(anyhow!("Dataset must contain at least one column"));
        }
        if rows.is_empty() {
            return Err(anyhow!("Dataset must contain at least one data row"));
        }
        Ok(Self { headers, rows })
    }

    /// Exact-match column lookup; `None` for columns absent from the schema.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Create a Dataset from a JSON array of objects.
    pub fn from_json(value: &Json) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

        // Zero-key records carry no cells and are dropped before analysis
        let objects: Vec<_> = array
            .iter()
            .map(|item| {
                item.as_object()
                    .ok_or_else(|| anyhow!("Items in array must be objects"))
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .filter(|obj| !obj.is_empty())
            .collect();

        if objects.is_empty() {
            return Err(anyhow!("Input data array is empty"));
        }

        let headers: Vec<String> = objects[0].keys().cloned().collect();

        let mut rows = Vec::new();
        for obj in &objects {
            let mut row = Vec::with_capacity(headers.len());
            for header in &headers {
                let cell = match obj.get(header) {
                    Some(Json::Number(n)) => {
                        n.as_f64().map(Value::Number).unwrap_or(Value::Absent)
                    }
                    Some(Json::String(s)) if s.is_empty() => Value::Absent,
                    Some(Json::String(s)) => Value::Text(s.clone()),
                    Some(Json::Bool(b)) => Value::Text(b.to_string()),
                    Some(Json::Null) | None => Value::Absent,
                    _ => return Err(anyhow!("Unsupported value type for field '{}'", header)),
                };
                row.push(cell);
            }
            rows.push(row);
        }

        Self::new(headers, rows)
    }
}
