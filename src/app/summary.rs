use serde::Serialize;

use crate::charts::Figure;
use crate::charts::summary::{ipc_bars, monthly_seasonality, section_pie, yearly_trend};
use crate::config::Config;
use crate::core::error::Result;
use crate::data::loader::load_records;
use crate::data::summary::{IpcCount, MonthlyCount, SectionCount, YearlyCount, top_n};
use crate::reporting::logging;

/// The four static figures, in page order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryFigures {
    pub section_pie: Figure,
    pub ipc_bars: Figure,
    pub yearly_trend: Figure,
    pub monthly_seasonality: Figure,
}

/// Summary tables and the figures built from them
#[derive(Debug, Clone)]
pub struct SummaryDashboard {
    pub sections: Vec<SectionCount>,
    pub top_subclasses: Vec<IpcCount>,
    pub yearly: Vec<YearlyCount>,
    pub monthly: Vec<MonthlyCount>,
    figures: SummaryFigures,
}

impl SummaryDashboard {
    /// Load the four summary tables named by `config`
    pub fn load(config: &Config) -> Result<Self> {
        let sections: Vec<SectionCount> = load_records(config.section_path())?;
        logging::log_records_loaded(&config.section_path(), sections.len());
        let subclasses: Vec<IpcCount> = load_records(config.ipc_path())?;
        logging::log_records_loaded(&config.ipc_path(), subclasses.len());
        let yearly: Vec<YearlyCount> = load_records(config.yearly_path())?;
        logging::log_records_loaded(&config.yearly_path(), yearly.len());
        let monthly: Vec<MonthlyCount> = load_records(config.monthly_path())?;
        logging::log_records_loaded(&config.monthly_path(), monthly.len());

        Ok(Self::from_tables(
            sections,
            subclasses,
            yearly,
            monthly,
            config.ipc_top_n(),
        ))
    }

    pub fn from_tables(
        sections: Vec<SectionCount>,
        subclasses: Vec<IpcCount>,
        yearly: Vec<YearlyCount>,
        monthly: Vec<MonthlyCount>,
        ipc_top_n: usize,
    ) -> Self {
        let top_subclasses = top_n(&subclasses, ipc_top_n);
        let figures = SummaryFigures {
            section_pie: section_pie(&sections),
            ipc_bars: ipc_bars(&top_subclasses, ipc_top_n),
            yearly_trend: yearly_trend(&yearly),
            monthly_seasonality: monthly_seasonality(&monthly),
        };

        Self {
            sections,
            top_subclasses,
            yearly,
            monthly,
            figures,
        }
    }

    pub fn figures(&self) -> &SummaryFigures {
        &self.figures
    }
}
