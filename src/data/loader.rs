//! CSV ingestion for the topic table and the summary tables.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;

use crate::core::error::{DashError, Result};
use crate::data::period::parse_period_value;
use crate::data::table::TimeTable;

fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    if !path.is_file() {
        return Err(DashError::FileNotFound(path.display().to_string()));
    }
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?)
}

/// Load a wide `date, topic1, topic2, ...` table.
///
/// `index_column` names the date column; every other column must hold
/// numbers. Empty cells count as zero.
pub fn load_time_table<P: AsRef<Path>>(path: P, index_column: &str) -> Result<TimeTable> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;
    let headers = reader.headers()?.clone();

    let index_pos = headers
        .iter()
        .position(|h| h == index_column)
        .ok_or_else(|| {
            DashError::Data(format!(
                "'{}' has no '{}' column (found: {})",
                path.display(),
                index_column,
                headers.iter().collect::<Vec<_>>().join(", ")
            ))
        })?;

    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(pos, _)| *pos != index_pos)
        .map(|(_, name)| name.to_string())
        .collect();

    let mut index = Vec::new();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let (date, row) = parse_row(&record, &headers, index_pos)
            .map_err(|msg| DashError::Data(format!("{}:{}: {}", path.display(), line, msg)))?;
        index.push(date);
        rows.push(row);
    }

    TimeTable::new(index_column, index, columns, rows)
}

fn parse_row(
    record: &StringRecord,
    headers: &StringRecord,
    index_pos: usize,
) -> std::result::Result<(chrono::NaiveDate, Vec<f64>), String> {
    let raw_date = record.get(index_pos).unwrap_or_default();
    let date = parse_period_value(raw_date).map_err(|e| e.to_string())?;

    let mut row = Vec::with_capacity(record.len().saturating_sub(1));
    for (pos, cell) in record.iter().enumerate() {
        if pos == index_pos {
            continue;
        }
        row.push(parse_count(cell).ok_or_else(|| {
            format!(
                "column '{}' holds '{}', which is not a number",
                headers.get(pos).unwrap_or_default(),
                cell
            )
        })?);
    }
    Ok((date, row))
}

/// Numeric cell: empty means 0, NaN and infinities are rejected
pub(crate) fn parse_count(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return Some(0.0);
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Deserialize every row of a headed CSV file into `T`.
///
/// Columns `T` does not name are ignored.
pub fn load_records<T, P>(path: P) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut reader = open_reader(path)?;
    let records = reader.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(records)
}
