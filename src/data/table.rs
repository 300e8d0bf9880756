//! Wide time-indexed count table and the aggregations derived from it.

use chrono::NaiveDate;

use crate::core::error::{DashError, Result};
use crate::data::period::{next_quarter_start, period_value, quarter_end};

/// Counts indexed by date (rows) and topic (columns)
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTable {
    index_name: String,
    index: Vec<NaiveDate>,
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TimeTable {
    /// Build a table, sorting rows by date.
    ///
    /// Every row must have exactly one cell per column.
    pub fn new(
        index_name: impl Into<String>,
        index: Vec<NaiveDate>,
        columns: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if index.len() != rows.len() {
            return Err(DashError::Data(format!(
                "Index has {} entries but table has {} rows",
                index.len(),
                rows.len()
            )));
        }
        if let Some((pos, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(DashError::Data(format!(
                "Row {} has {} cells, expected {}",
                pos + 1,
                row.len(),
                columns.len()
            )));
        }

        let mut paired: Vec<(NaiveDate, Vec<f64>)> = index.into_iter().zip(rows).collect();
        paired.sort_by_key(|(date, _)| *date);
        let (index, rows): (Vec<NaiveDate>, Vec<Vec<f64>>) = paired.into_iter().unzip();

        Ok(Self {
            index_name: index_name.into(),
            index,
            columns,
            rows,
        })
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.index.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.index.last().copied()
    }

    /// Row stored under exactly `date`
    pub fn row(&self, date: NaiveDate) -> Option<&[f64]> {
        self.index
            .binary_search(&date)
            .ok()
            .map(|pos| self.rows[pos].as_slice())
    }

    /// All values of one column, in index order
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let pos = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| row[pos]).collect())
    }

    /// Per-column totals over the whole table
    pub fn column_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.columns.len()];
        for row in &self.rows {
            for (total, value) in totals.iter_mut().zip(row) {
                *total += value;
            }
        }
        totals
    }

    /// Sum rows per calendar quarter.
    ///
    /// The result is indexed by quarter-end dates and contains every quarter
    /// between the first and last observation, empty quarters being zero.
    pub fn resample_quarterly(&self) -> TimeTable {
        let (Some(first), Some(last)) = (self.first_date(), self.last_date()) else {
            return self.with_rows(Vec::new(), Vec::new());
        };

        let mut index = Vec::new();
        let mut rows = Vec::new();
        let mut bucket = Some(quarter_end(first));
        let mut source = self.index.iter().zip(&self.rows).peekable();

        while let Some(end) = bucket {
            if end > quarter_end(last) {
                break;
            }
            let mut sums = vec![0.0; self.columns.len()];
            while let Some((_, row)) = source.next_if(|(date, _)| **date <= end) {
                for (sum, value) in sums.iter_mut().zip(row.iter()) {
                    *sum += value;
                }
            }
            index.push(end);
            rows.push(sums);
            bucket = next_quarter_start(end).map(quarter_end);
        }

        self.with_rows(index, rows)
    }

    /// Running sum per column over the index
    pub fn cumulative(&self) -> TimeTable {
        let mut running = vec![0.0; self.columns.len()];
        let rows = self
            .rows
            .iter()
            .map(|row| {
                for (acc, value) in running.iter_mut().zip(row) {
                    *acc += value;
                }
                running.clone()
            })
            .collect();

        self.with_rows(self.index.clone(), rows)
    }

    /// One row reshaped into `(column, value)` pairs
    pub fn row_frame(&self, date: NaiveDate) -> Result<Vec<(String, f64)>> {
        let row = self
            .row(date)
            .ok_or_else(|| DashError::UnknownPeriod(period_value(date)))?;

        Ok(self.columns.iter().cloned().zip(row.iter().copied()).collect())
    }

    fn with_rows(&self, index: Vec<NaiveDate>, rows: Vec<Vec<f64>>) -> TimeTable {
        TimeTable {
            index_name: self.index_name.clone(),
            index,
            columns: self.columns.clone(),
            rows,
        }
    }
}
