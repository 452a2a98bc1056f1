use crate::column;
use crate::data::{Dataset, Value, ValueKey};
use serde::Serialize;
use std::collections::HashMap;

/// First-seen-order assignment of zero-based integer codes to a
/// categorical column's distinct values, scoped to one dataset load.
///
/// First-seen order keeps the encoding deterministic and O(n) without a
/// sort; codes are only ever used as rendering coordinates, never compared
/// across datasets.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    codes: HashMap<ValueKey, usize>,
    labels: Vec<Value>,
}

impl CategoryMap {
    fn build(data: &Dataset, column: &str) -> Self {
        let index = data.column_index(column);
        let mut map = CategoryMap::default();
        for row in &data.rows {
            let value = match index.and_then(|i| row.get(i)) {
                Some(v) => v,
                None => continue,
            };
            if let Some(key) = value.key() {
                if !map.codes.contains_key(&key) {
                    map.codes.insert(key, map.labels.len());
                    map.labels.push(value.clone());
                }
            }
        }
        map
    }

    /// Code for a raw value; `None` for absent or unseen values.
    pub fn code(&self, value: &Value) -> Option<usize> {
        value.key().and_then(|key| self.codes.get(&key).copied())
    }

    /// Labels in code order, for legend display.
    pub fn labels(&self) -> &[Value] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// The axis triple chosen for visualization, automatic or explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisSelection {
    pub x: String,
    pub y: String,
    pub z: String,
}

/// Owns the category encodings for one dataset load.
///
/// Encodings are built lazily on first use and reused for every later call
/// on the same column, so identical raw values always receive identical
/// codes within one load. `reset` clears them in one step when a new
/// dataset replaces the current one; codes are not stable across loads.
#[derive(Debug, Default)]
pub struct MappingSession {
    category_maps: HashMap<String, CategoryMap>,
}

impl MappingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every category encoding. Must be called (or the session
    /// replaced) whenever a new dataset is loaded.
    pub fn reset(&mut self) {
        self.category_maps.clear();
    }

    /// Convert a named column to one float per row, in row order.
    ///
    /// Numeric columns pass values through (unparseable cells become NaN,
    /// which normalization later treats as absent). Categorical columns
    /// emit the category code, 0 for absent values.
    pub fn map_to_numeric(&mut self, data: &Dataset, column: &str) -> Vec<f64> {
        let index = data.column_index(column);
        let profile = column::analyze(data, column);

        if profile.is_numeric {
            data.rows
                .iter()
                .map(|row| {
                    index
                        .and_then(|i| row.get(i))
                        .and_then(|value| value.numeric())
                        .unwrap_or(f64::NAN)
                })
                .collect()
        } else {
            let map = self
                .category_maps
                .entry(column.to_string())
                .or_insert_with(|| CategoryMap::build(data, column));
            data.rows
                .iter()
                .map(|row| {
                    index
                        .and_then(|i| row.get(i))
                        .and_then(|value| map.code(value))
                        .unwrap_or(0) as f64
                })
                .collect()
        }
    }

    /// The encoding used by the most recent `map_to_numeric` call for this
    /// column; `None` if the column has only been mapped as numeric.
    pub fn category_mapping(&self, column: &str) -> Option<&CategoryMap> {
        self.category_maps.get(column)
    }
}

/// Pick the axis triple automatically, maximizing numeric-axis coverage.
///
/// Columns are partitioned in declared order; the fallback ladder reuses
/// earlier columns once the list is exhausted, so no axis is ever left
/// unassigned while at least one column exists.
pub fn detect_best_columns(data: &Dataset) -> AxisSelection {
    let profiles: Vec<_> = data
        .headers
        .iter()
        .map(|name| column::analyze(data, name))
        .collect();

    let numeric: Vec<&str> = profiles
        .iter()
        .filter(|p| p.is_numeric)
        .map(|p| p.name.as_str())
        .collect();
    let categorical: Vec<&str> = profiles
        .iter()
        .filter(|p| !p.is_numeric)
        .map(|p| p.name.as_str())
        .collect();

    let (x, y, z) = if numeric.len() >= 3 {
        (numeric[0], numeric[1], numeric[2])
    } else if numeric.len() == 2 {
        (
            numeric[0],
            numeric[1],
            categorical.first().copied().unwrap_or(numeric[0]),
        )
    } else if numeric.len() == 1 {
        (
            numeric[0],
            categorical.first().copied().unwrap_or(numeric[0]),
            categorical
                .get(1)
                .or_else(|| categorical.first())
                .copied()
                .unwrap_or(numeric[0]),
        )
    } else {
        let columns = &data.headers;
        (
            columns[0].as_str(),
            columns.get(1).unwrap_or(&columns[0]).as_str(),
            columns
                .get(2)
                .or_else(|| columns.get(1))
                .unwrap_or(&columns[0])
                .as_str(),
        )
    };

    AxisSelection {
        x: x.to_string(),
        y: y.to_string(),
        z: z.to_string(),
    }
}
