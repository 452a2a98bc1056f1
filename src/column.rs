use crate::data::{Dataset, Value};
use serde::Serialize;
use std::collections::HashSet;

/// Share of present values that must read as numbers before a column is
/// classified numeric. Tolerates up to 20% unparseable noise in an
/// otherwise numeric column.
pub const NUMERIC_RATIO: f64 = 0.8;

/// Sample values kept per profile, for display only.
const SAMPLE_LIMIT: usize = 5;

/// Classification of one column across all rows. Recomputed per call,
/// never cached.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub is_numeric: bool,
    pub unique_count: usize,
    pub sample_values: Vec<Value>,
}

/// Analyze a single column of the dataset.
///
/// A column missing from the schema yields a degenerate but valid profile
/// (nothing present, `unique_count` 0, not numeric) rather than an error;
/// it is still usable as a categorical axis mapped entirely to code 0.
pub fn analyze(data: &Dataset, column: &str) -> ColumnProfile {
    let index = data.column_index(column);

    let mut present = 0usize;
    let mut numeric = 0usize;
    let mut seen = HashSet::new();
    let mut samples = Vec::new();

    for row in &data.rows {
        // A missing column (or a short row) is an absent cell
        let value = match index.and_then(|i| row.get(i)) {
            Some(v) => v,
            None => continue,
        };
        if !value.is_present() {
            continue;
        }
        present += 1;
        if value.numeric().is_some() {
            numeric += 1;
        }
        if let Some(key) = value.key() {
            seen.insert(key);
        }
        if samples.len() < SAMPLE_LIMIT {
            samples.push(value.clone());
        }
    }

    ColumnProfile {
        name: column.to_string(),
        // Strict comparison: an entirely absent column is not numeric
        is_numeric: numeric as f64 > present as f64 * NUMERIC_RATIO,
        unique_count: seen.len(),
        sample_values: samples,
    }
}
