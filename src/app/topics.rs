use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::charts::Figure;
use crate::charts::topics::{TrendKind, treemap_figure, trend_figure};
use crate::config::Config;
use crate::core::error::{DashError, Result};
use crate::data::loader::load_time_table;
use crate::data::period::{parse_period_value, period_value, quarter_label};
use crate::data::table::TimeTable;
use crate::reporting::logging;

/// One entry of the quarter dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterOption {
    /// Display text, e.g. `2021Q3`
    pub label: String,
    /// Quarter-end date sent back by the page, e.g. `2021-09-30`
    pub value: String,
}

/// Response of the trend callback
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendFigures {
    pub line: Figure,
    pub cumulative: Figure,
}

/// Every figure that depends on the selected quarter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterFigures {
    pub treemap: Figure,
    pub line: Figure,
    pub cumulative: Figure,
}

/// Topic table plus its quarterly and cumulative views
#[derive(Debug, Clone)]
pub struct TopicsDashboard {
    monthly: TimeTable,
    quarterly: TimeTable,
    cumulative: TimeTable,
    options: Vec<QuarterOption>,
}

impl TopicsDashboard {
    /// Load the topic table named by `config` and derive its views
    pub fn load(config: &Config) -> Result<Self> {
        let path = config.topics_path();
        let table = load_time_table(&path, config.index_column())?;
        logging::log_dataset_loaded(&path, table.len(), table.columns().len());
        Self::from_table(table)
    }

    pub fn from_table(monthly: TimeTable) -> Result<Self> {
        if monthly.is_empty() {
            return Err(DashError::Data(
                "Topic table has no rows, nothing to display".to_string(),
            ));
        }

        let quarterly = monthly.resample_quarterly();
        let cumulative = monthly.cumulative();
        let options = quarterly
            .index()
            .iter()
            .map(|date| QuarterOption {
                label: quarter_label(*date),
                value: period_value(*date),
            })
            .collect();
        logging::log_views_derived(quarterly.len(), cumulative.len());

        Ok(Self {
            monthly,
            quarterly,
            cumulative,
            options,
        })
    }

    pub fn monthly(&self) -> &TimeTable {
        &self.monthly
    }

    pub fn quarterly(&self) -> &TimeTable {
        &self.quarterly
    }

    pub fn cumulative(&self) -> &TimeTable {
        &self.cumulative
    }

    pub fn options(&self) -> &[QuarterOption] {
        &self.options
    }

    /// Initially selected value: the latest quarter
    pub fn default_value(&self) -> &str {
        self.options
            .last()
            .map(|o| o.value.as_str())
            .unwrap_or_default()
    }

    /// Map a dropdown value to one of the precomputed quarters
    pub fn resolve(&self, value: &str) -> Result<NaiveDate> {
        let date = parse_period_value(value)?;
        if self.quarterly.row(date).is_none() {
            return Err(DashError::UnknownPeriod(value.trim().to_string()));
        }
        Ok(date)
    }

    /// The selected quarter's aggregate row as `(topic, count)` pairs
    pub fn quarter_frame(&self, value: &str) -> Result<Vec<(String, f64)>> {
        let date = self.resolve(value)?;
        self.quarterly.row_frame(date)
    }

    pub fn treemap(&self, value: &str) -> Result<Figure> {
        let date = self.resolve(value)?;
        treemap_figure(&self.quarterly, date)
    }

    pub fn trends(&self, value: &str) -> Result<TrendFigures> {
        let date = self.resolve(value)?;
        Ok(TrendFigures {
            line: trend_figure(&self.monthly, date, TrendKind::Monthly),
            cumulative: trend_figure(&self.cumulative, date, TrendKind::Cumulative),
        })
    }

    pub fn quarter_figures(&self, value: &str) -> Result<QuarterFigures> {
        let TrendFigures { line, cumulative } = self.trends(value)?;
        Ok(QuarterFigures {
            treemap: self.treemap(value)?,
            line,
            cumulative,
        })
    }

    /// Figures for every quarter, keyed by dropdown value
    pub fn snapshot(&self) -> Result<BTreeMap<String, QuarterFigures>> {
        self.options
            .iter()
            .map(|option| Ok((option.value.clone(), self.quarter_figures(&option.value)?)))
            .collect()
    }
}
