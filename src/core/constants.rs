/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes file names, network defaults and the user-facing
/// chart text, making them easier to maintain and modify.
/// Network defaults
pub mod network {
    /// Default bind address for both dashboards
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default port of the topics dashboard
    pub const TOPICS_PORT: u16 = 8050;
    /// Default port of the summary dashboard
    pub const SUMMARY_PORT: u16 = 8051;
}

/// Default dataset locations
pub mod files {
    /// Directory the CSV files are read from
    pub const DEFAULT_DATA_DIR: &str = ".";
    /// Wide table of patent counts per registration date and topic
    pub const TOPICS: &str = "патентная активность по темам.csv";
    /// Date column of the topics table
    pub const TOPICS_INDEX_COLUMN: &str = "registration date";
    /// Patent counts per MPK section
    pub const SECTION_COUNTS: &str = "section_counts.csv";
    /// Patent counts per IPC subclass
    pub const IPC_COUNTS: &str = "ipc_counts.csv";
    /// Patent counts per registration year
    pub const YEARLY_COUNTS: &str = "yearly_counts.csv";
    /// Patent counts per calendar month
    pub const MONTHLY_COUNTS: &str = "monthly_counts.csv";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE: &str = ".patentdash.toml";
}

/// Default configuration values
pub mod defaults {
    /// Number of IPC subclasses shown in the ranking chart
    pub const IPC_TOP_N: usize = 10;
    /// Upper bound accepted for the ranking size
    pub const MAX_IPC_TOP_N: usize = 1000;
}

/// Page titles and chart text
pub mod text {
    pub const TOPICS_PAGE_TITLE: &str = "Анализ патентов по тематическим кластерам";
    pub const SUMMARY_PAGE_TITLE: &str = "Анализ патентной активности";
    pub const SUMMARY_SUBTITLE: &str = "Визуализация ключевых показателей патентной активности";

    pub const TREEMAP_TITLE: &str = "Распределение патентов";
    pub const TREEMAP_COUNT: &str = "Количество патентов";

    pub const TREND_TITLE: &str = "Динамика количества патентов по темам";
    pub const TREND_Y_AXIS: &str = "Патентов в месяц";
    pub const TREND_HOVER_LABEL: &str = "Патентов";

    pub const CUMULATIVE_TITLE: &str = "Накопленное количество патентов по темам";
    pub const CUMULATIVE_Y_AXIS: &str = "Общее количество патентов";
    pub const CUMULATIVE_HOVER_LABEL: &str = "Накоплено";

    pub const SECTION_PIE_TITLE: &str = "Распределение патентов по разделам MPK";
    pub const IPC_BARS_SUBJECT: &str = "подклассов IPC";
    pub const YEARLY_TITLE: &str = "Динамика регистрации патентов по годам";
    pub const MONTHLY_TITLE: &str = "Сезонность регистрации патентов";

    pub const PATENT_COUNT_AXIS: &str = "Количество патентов";
    pub const YEAR_AXIS: &str = "Год";
    pub const MONTH_AXIS: &str = "Месяц";
}

/// External assets loaded by the generated pages
pub mod assets {
    /// Plotly.js CDN URL for rendering charts
    pub const PLOTLY_JS_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
    /// Web fonts used by the dark theme
    pub const FONTS_CSS: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;700&family=Unbounded:wght@900&display=swap";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_constants() {
        assert_eq!(network::TOPICS_PORT, 8050);
        assert_eq!(network::SUMMARY_PORT, 8051);
        assert_eq!(network::DEFAULT_HOST, "127.0.0.1");
    }

    #[test]
    fn test_file_constants() {
        assert!(files::TOPICS.ends_with(".csv"));
        assert_eq!(files::TOPICS_INDEX_COLUMN, "registration date");
        assert_eq!(files::CONFIG_FILE, ".patentdash.toml");
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(defaults::IPC_TOP_N, 10);
        assert!(defaults::IPC_TOP_N <= defaults::MAX_IPC_TOP_N);
    }
}
