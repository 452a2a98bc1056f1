use crate::data::{Dataset, Value};
use anyhow::{Context, Result};
use std::io::{self, Read};

/// Dynamic typing at parse time: cells that read in full as finite floats
/// become numbers, empty cells become absent, everything else stays text.
fn parse_cell(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Absent;
    }
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Number(n),
        _ => Value::Text(raw.to_string()),
    }
}

/// Read CSV data from any reader; first record supplies the column names.
pub fn read_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to read CSV record")?;

        // Skip fully blank lines
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let mut row: Vec<Value> = record.iter().map(parse_cell).collect();
        // Short rows are padded with absent cells; extra cells are dropped
        row.resize(headers.len(), Value::Absent);
        rows.push(row);
    }

    Dataset::new(headers, rows)
}

/// Read CSV data from stdin.
pub fn read_from_stdin() -> Result<Dataset> {
    read_from_reader(io::stdin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_typing() {
        let csv = "a,b,c\n1,red,\n2.5,blue,x\n";
        let data = read_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.headers, vec!["a", "b", "c"]);
        assert_eq!(data.rows[0][0], Value::Number(1.0));
        assert_eq!(data.rows[0][1], Value::Text("red".to_string()));
        assert_eq!(data.rows[0][2], Value::Absent);
        assert_eq!(data.rows[1][0], Value::Number(2.5));
    }

    #[test]
    fn test_partial_numeric_stays_text() {
        let csv = "a\n3abc\n";
        let data = read_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.rows[0][0], Value::Text("3abc".to_string()));
    }

    #[test]
    fn test_short_rows_padded() {
        let csv = "a,b,c\n1,2\n";
        let data = read_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.rows[0].len(), 3);
        assert_eq!(data.rows[0][2], Value::Absent);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let csv = "a,b\n1,2\n,\n3,4\n";
        let data = read_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.rows.len(), 2);
    }

    #[test]
    fn test_header_only_is_refused() {
        let csv = "a,b\n";
        let result = read_from_reader(csv.as_bytes());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least one data row"));
    }
}
