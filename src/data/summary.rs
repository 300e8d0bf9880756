//! Flat `(category, count)` summary tables.

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::data::loader::parse_count;

/// A single labelled count from a summary table
pub trait CategoryCount {
    fn label(&self) -> String;
    fn count(&self) -> f64;
}

/// Patents per MPK section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCount {
    #[serde(rename = "mpk_section_name")]
    pub section: String,
    #[serde(deserialize_with = "count_cell")]
    pub count: f64,
}

/// Patents per IPC subclass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcCount {
    #[serde(rename = "IPC_Subclass_Name")]
    pub subclass: String,
    #[serde(deserialize_with = "count_cell")]
    pub count: f64,
}

/// Patents registered per year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyCount {
    #[serde(deserialize_with = "year_cell")]
    pub year: i32,
    #[serde(rename = "counts", deserialize_with = "count_cell")]
    pub count: f64,
}

/// Patents registered per calendar month, summed over all years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month_name: String,
    #[serde(rename = "counts", deserialize_with = "count_cell")]
    pub count: f64,
}

/// Count cell: empty means 0, any finite number is accepted
fn count_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_count(raw.trim())
        .ok_or_else(|| de::Error::custom(format!("'{raw}' is not a number")))
}

/// Year cell: a whole number, also when written as `2020.0`
fn year_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.fract() == 0.0 && *v >= f64::from(i32::MIN) && *v <= f64::from(i32::MAX))
        .map(|v| v as i32)
        .ok_or_else(|| de::Error::custom(format!("'{raw}' is not a year")))
}

impl CategoryCount for SectionCount {
    fn label(&self) -> String {
        self.section.clone()
    }

    fn count(&self) -> f64 {
        self.count
    }
}

impl CategoryCount for IpcCount {
    fn label(&self) -> String {
        self.subclass.clone()
    }

    fn count(&self) -> f64 {
        self.count
    }
}

impl CategoryCount for YearlyCount {
    fn label(&self) -> String {
        self.year.to_string()
    }

    fn count(&self) -> f64 {
        self.count
    }
}

impl CategoryCount for MonthlyCount {
    fn label(&self) -> String {
        self.month_name.clone()
    }

    fn count(&self) -> f64 {
        self.count
    }
}

/// Largest `n` records by count; ties keep their input order
pub fn top_n<T: CategoryCount + Clone>(records: &[T], n: usize) -> Vec<T> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.count().total_cmp(&a.count()));
    ranked.truncate(n);
    ranked
}

/// Labels and counts as parallel vectors, the shape chart traces expect
pub fn split_labels_counts<T: CategoryCount>(records: &[T]) -> (Vec<String>, Vec<f64>) {
    records.iter().map(|r| (r.label(), r.count())).unzip()
}
