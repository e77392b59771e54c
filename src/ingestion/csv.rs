//! CSV ingestion with inferred column types.
//!
//! The header row supplies column names. Each column is typed as the narrowest of `Int64`,
//! `Float64`, `Bool`, `Utf8` that every non-blank cell parses as. Number and bool cells are
//! trimmed before parsing; `Utf8` cells keep their text exactly as written. Blank cells in a
//! number/bool column and empty cells in a `Utf8` column become [`Value::Null`].
//!
//! `Float64` parsing follows [`f64::from_str`], so `inf`, `infinity` and `NaN` (any case) count as
//! floats.

use std::io::Read;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Ingest a CSV file, inferring column types from its values.
///
/// A file without a header row (zero bytes, or only blank lines) is rejected with
/// [`IngestionError::EmptyData`]. A header-only file yields a table with no rows.
pub fn infer_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    infer_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn infer_csv_from_reader<R: Read>(rdr: &mut csv::Reader<R>) -> IngestionResult<DataSet> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestionError::EmptyData {
            message: "no columns to parse: missing header row".to_string(),
        });
    }
    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;

    let schema = Schema::new(
        headers
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let cells = records.iter().map(|r| r.get(idx).unwrap_or(""));
                Field::new(name, infer_column_type(cells))
            })
            .collect(),
    );

    let mut rows = Vec::with_capacity(records.len());
    for (row_idx0, record) in records.iter().enumerate() {
        // 1-based, and the header is row 1.
        let row = row_idx0 + 2;
        let values = schema
            .fields
            .iter()
            .enumerate()
            .map(|(idx, field)| parse_cell(row, field, record.get(idx).unwrap_or("")))
            .collect::<IngestionResult<Vec<_>>>()?;
        rows.push(values);
    }

    Ok(DataSet::new(schema, rows))
}

fn infer_column_type<'a>(cells: impl Iterator<Item = &'a str>) -> DataType {
    let (mut int, mut float, mut boolean) = (true, true, true);
    let mut seen_value = false;

    for cell in cells.map(str::trim).filter(|c| !c.is_empty()) {
        seen_value = true;
        int &= cell.parse::<i64>().is_ok();
        float &= cell.parse::<f64>().is_ok();
        boolean &= parse_bool(cell).is_some();
        if !(int || float || boolean) {
            return DataType::Utf8;
        }
    }

    match (seen_value, int, float, boolean) {
        (false, ..) => DataType::Utf8,
        (_, true, ..) => DataType::Int64,
        (_, _, true, _) => DataType::Float64,
        (_, _, _, true) => DataType::Bool,
        _ => DataType::Utf8,
    }
}

fn parse_cell(row: usize, field: &Field, raw: &str) -> IngestionResult<Value> {
    if field.data_type == DataType::Utf8 {
        return Ok(if raw.is_empty() {
            Value::Null
        } else {
            Value::Utf8(raw.to_owned())
        });
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    let parse_error = |message: String| IngestionError::ParseError {
        row,
        column: field.name.clone(),
        raw: raw.to_owned(),
        message,
    };

    match field.data_type {
        DataType::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Bool => parse_bool(trimmed)
            .map(Value::Bool)
            .ok_or_else(|| parse_error("expected bool (true/false)".to_string())),
        DataType::Utf8 => Ok(Value::Utf8(raw.to_owned())),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
