use crate::app::{SummaryDashboard, TopicsDashboard};
use crate::charts::theme;
use crate::core::constants::{assets, text};
use crate::core::error::Result;
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Constants for page styling and layout
mod page_constants {
    /// Element ids shared between the markup and the client script
    pub const QUARTER_SELECTOR_ID: &str = "quartal-selector";
    pub const TREEMAP_ID: &str = "treemap-plot";
    pub const LINE_ID: &str = "line-plot";
    pub const CUMULATIVE_ID: &str = "cumulative-plot";

    pub const SECTION_PIE_ID: &str = "mpk-pie";
    pub const IPC_BARS_ID: &str = "ipc-bars";
    pub const YEARLY_ID: &str = "yearly-trend";
    pub const MONTHLY_ID: &str = "monthly-season";
}

/// How the topics page reacts to the quarter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Ask the server's callback endpoints for new figures
    Live,
    /// Every quarter's figures are embedded in the page
    Snapshot,
}

/// HTML page generator for both dashboards
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Write a generated page to `output_path`
    pub fn write_page<P: AsRef<Path>>(html: &str, output_path: P) -> Result<()> {
        fs::write(output_path, html)?;
        Ok(())
    }

    /// Topics page: header, quarter dropdown, treemap and the two trend charts
    pub fn topics_page(dashboard: &TopicsDashboard, mode: PageMode) -> Result<String> {
        let selected = dashboard.default_value();
        let initial = dashboard.quarter_figures(selected)?;
        let snapshot = match mode {
            PageMode::Live => None,
            PageMode::Snapshot => Some(dashboard.snapshot()?),
        };
        let state = script_json(&json!({
            "selectorId": page_constants::QUARTER_SELECTOR_ID,
            "initial": initial,
            "snapshot": snapshot,
        }))?;

        let options_html = dashboard
            .options()
            .iter()
            .map(|option| {
                format!(
                    r#"<option value="{}"{}>{}</option>"#,
                    encode_double_quoted_attribute(&option.value),
                    if option.value == selected { " selected" } else { "" },
                    encode_text(&option.label)
                )
            })
            .collect::<Vec<_>>()
            .join("\n                    ");

        let body = format!(
            r#"
            <div class="page topics">
                <h1 class="page-title">{title}</h1>
                <div class="selector-row">
                    <select id="{selector}" class="dash-dropdown">
                    {options}
                    </select>
                </div>
                <div id="dashboard-error" class="dashboard-error" hidden></div>
                <div id="{treemap}" class="graph" style="height: 60vh;"></div>
                <div id="{line}" class="graph" style="height: 50vh;"></div>
                <div id="{cumulative}" class="graph" style="height: 50vh;"></div>
            </div>
            <script>window.DASHBOARD = {state};</script>
            "#,
            title = encode_text(text::TOPICS_PAGE_TITLE),
            selector = page_constants::QUARTER_SELECTOR_ID,
            options = options_html,
            treemap = page_constants::TREEMAP_ID,
            line = page_constants::LINE_ID,
            cumulative = page_constants::CUMULATIVE_ID,
            state = state,
        );

        Ok(Self::document(
            text::TOPICS_PAGE_TITLE,
            &Self::topics_css(),
            &body,
            Self::topics_javascript(),
        ))
    }

    /// Summary page: header and the four static charts
    pub fn summary_page(dashboard: &SummaryDashboard) -> Result<String> {
        let figures = script_json(dashboard.figures())?;

        let containers = [
            page_constants::SECTION_PIE_ID,
            page_constants::IPC_BARS_ID,
            page_constants::YEARLY_ID,
            page_constants::MONTHLY_ID,
        ]
        .iter()
        .map(|id| {
            format!(
                r#"<div class="chart-container"><div id="{id}" class="graph"></div></div>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

        let body = format!(
            r#"
            <div class="header">
                <h1 class="page-title">{title}</h1>
                <p class="subtitle">{subtitle}</p>
            </div>
            {containers}
            <script>window.DASHBOARD = {{"figures": {figures}}};</script>
            "#,
            title = encode_text(text::SUMMARY_PAGE_TITLE),
            subtitle = encode_text(text::SUMMARY_SUBTITLE),
            containers = containers,
            figures = figures,
        );

        Ok(Self::document(
            text::SUMMARY_PAGE_TITLE,
            &Self::summary_css(),
            &body,
            Self::summary_javascript(),
        ))
    }

    /// Generate the complete HTML document content
    fn document(title: &str, css: &str, body: &str, script: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <link href="{}" rel="stylesheet">
    <script src="{}"></script>
    <style>{}{}</style>
</head>
<body>
    {}
    <script>{}</script>
</body>
</html>"#,
            encode_text(title),
            encode_double_quoted_attribute(assets::FONTS_CSS),
            assets::PLOTLY_JS_CDN,
            Self::generate_css(),
            css,
            body,
            script
        )
    }

    fn generate_css() -> String {
        format!(
            r#"
        * {{ box-sizing: border-box; }}

        html, body {{
            margin: 0;
            padding: 0;
            height: 100%;
            background-color: {bg};
            color: {text};
            font-family: {body_font};
        }}

        .page-title {{
            text-align: center;
            font-family: {header_font};
            font-weight: 900;
            color: {text};
        }}

        .dashboard-error {{
            margin: 0 auto 10px;
            max-width: 60%;
            padding: 10px;
            border: 1px solid {accent};
            color: {text};
            text-align: center;
        }}
        "#,
            bg = theme::BACKGROUND_COLOR,
            text = theme::TEXT_COLOR,
            accent = theme::ACCENT_COLOR,
            body_font = theme::FONT_FAMILY_BODY,
            header_font = theme::FONT_FAMILY_HEADER,
        )
    }

    fn topics_css() -> String {
        format!(
            r#"
        .page.topics {{
            min-height: 100vh;
            padding: 10px;
        }}

        .page.topics .page-title {{
            padding: 20px;
            margin-bottom: 10px;
        }}

        .selector-row {{
            text-align: center;
            padding: 20px;
        }}

        .dash-dropdown {{
            width: 60%;
            margin: 0 auto;
            padding: 8px;
            font-family: {body_font};
            font-size: 16px;
            background-color: {surface};
            color: {text} !important;
            border: 1px solid {grid};
        }}

        .dash-dropdown option {{
            color: {text};
            background-color: {surface};
        }}
        "#,
            body_font = theme::FONT_BODY,
            surface = theme::SURFACE_COLOR,
            text = theme::TEXT_COLOR,
            grid = theme::GRID_COLOR,
        )
    }

    fn summary_css() -> String {
        format!(
            r#"
        .header {{
            text-align: center;
            padding: 30px 20px;
            background-color: {bg};
        }}

        .header .page-title {{
            margin: 0;
            font-size: 2.5rem;
        }}

        .subtitle {{
            font-family: {body_font};
            color: {muted};
            margin-top: 10px;
        }}

        .chart-container {{
            background-color: {bg};
            padding: 20px;
            margin: 10px auto;
            border-radius: 8px;
            max-width: 1500px;
        }}

        @media (max-width: 768px) {{
            .header .page-title {{ font-size: 2rem; }}
            .chart-container {{ padding: 1rem; }}
        }}
        "#,
            bg = theme::BACKGROUND_COLOR,
            body_font = theme::FONT_FAMILY_BODY,
            muted = theme::MUTED_TEXT_COLOR,
        )
    }

    fn topics_javascript() -> &'static str {
        r#"
        (function() {
            const state = window.DASHBOARD;
            const config = { responsive: true };

            function draw(id, figure) {
                if (figure && typeof Plotly !== 'undefined') {
                    Plotly.react(id, figure.data, figure.layout, config);
                }
            }

            function render(figures) {
                draw('treemap-plot', figures.treemap);
                draw('line-plot', figures.line);
                draw('cumulative-plot', figures.cumulative);
            }

            function showError(message) {
                const box = document.getElementById('dashboard-error');
                box.textContent = message || '';
                box.hidden = !message;
            }

            async function fetchJson(url) {
                const response = await fetch(url);
                const body = await response.json();
                if (!response.ok) {
                    throw new Error(body.error || response.statusText);
                }
                return body;
            }

            async function select(value) {
                if (state.snapshot) {
                    const figures = state.snapshot[value];
                    if (figures) {
                        render(figures);
                        showError(null);
                    } else {
                        showError('Unknown period: ' + value);
                    }
                    return;
                }
                try {
                    const quarter = encodeURIComponent(value);
                    const [treemap, trends] = await Promise.all([
                        fetchJson('api/treemap?quarter=' + quarter),
                        fetchJson('api/trends?quarter=' + quarter)
                    ]);
                    render({ treemap: treemap, line: trends.line, cumulative: trends.cumulative });
                    showError(null);
                } catch (err) {
                    showError(err.message);
                }
            }

            document.addEventListener('DOMContentLoaded', function() {
                render(state.initial);
                const selector = document.getElementById(state.selectorId);
                if (selector) {
                    selector.addEventListener('change', function(event) {
                        select(event.target.value);
                    });
                }
            });
        })();
        "#
    }

    fn summary_javascript() -> &'static str {
        r#"
        document.addEventListener('DOMContentLoaded', function() {
            const figures = window.DASHBOARD.figures;
            const targets = {
                'mpk-pie': figures.section_pie,
                'ipc-bars': figures.ipc_bars,
                'yearly-trend': figures.yearly_trend,
                'monthly-season': figures.monthly_seasonality
            };
            if (typeof Plotly === 'undefined') {
                return;
            }
            Object.keys(targets).forEach(function(id) {
                const figure = targets[id];
                Plotly.newPlot(id, figure.data, figure.layout, { responsive: true });
            });
        });
        "#
    }
}

/// JSON that can sit inside a `<script>` element
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let raw = serde_json::to_string(value)?;
    Ok(raw
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::TimeTable;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn topics_dashboard() -> TopicsDashboard {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let table = TimeTable::new(
            "registration date",
            vec![date(2021, 1, 31), date(2021, 4, 30)],
            vec!["AI".to_string(), "</script>".to_string()],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        )
        .unwrap();
        TopicsDashboard::from_table(table).unwrap()
    }

    #[test]
    fn test_escape_html() {
        let html = HtmlDashboard::document("Tom & <Jerry>", "", "", "");

        assert!(html.contains("<title>Tom &amp; &lt;Jerry&gt;</title>"));
        assert!(html.contains("wght@400;700&amp;family=Unbounded"));
        assert_eq!(encode_text("Анализ"), "Анализ");
        assert_eq!(
            encode_double_quoted_attribute(r#"2021-03-31" onclick="x"#),
            "2021-03-31&quot; onclick=&quot;x"
        );
    }

    #[test]
    fn test_script_json_is_script_safe() {
        let json = script_json(&json!({"name": "</script><script>alert(1)"})).unwrap();
        assert!(!json.contains("</script>"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["name"], "</script><script>alert(1)");
    }

    #[test]
    fn test_topics_page_live() {
        let html = HtmlDashboard::topics_page(&topics_dashboard(), PageMode::Live).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(assets::PLOTLY_JS_CDN));
        assert!(html.contains(r#"<select id="quartal-selector""#));
        assert!(html.contains(r#"<option value="2021-03-31">2021Q1</option>"#));
        assert!(html.contains(r#"<option value="2021-06-30" selected>2021Q2</option>"#));
        assert!(html.contains(r#""snapshot":null"#));
        assert!(html.contains("treemap-plot"));
        assert!(html.contains("cumulative-plot"));
        assert!(html.contains(r#""<\/script>""#));
    }

    #[test]
    fn test_topics_page_snapshot_embeds_every_quarter() {
        let html = HtmlDashboard::topics_page(&topics_dashboard(), PageMode::Snapshot).unwrap();

        assert!(html.contains(r#""snapshot":{"2021-03-31""#));
        assert!(html.contains(r#""2021-06-30":{"#));
    }

    #[test]
    fn test_summary_page() {
        let dashboard = SummaryDashboard::from_tables(vec![], vec![], vec![], vec![], 10);
        let html = HtmlDashboard::summary_page(&dashboard).unwrap();

        assert!(html.contains(text::SUMMARY_PAGE_TITLE));
        assert!(html.contains(text::SUMMARY_SUBTITLE));
        for id in ["mpk-pie", "ipc-bars", "yearly-trend", "monthly-season"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing {id}");
        }
        assert!(html.contains(r#"window.DASHBOARD = {"figures": {"#));
    }

    #[test]
    fn test_write_page() {
        let file = NamedTempFile::new().unwrap();
        HtmlDashboard::write_page("<html></html>", file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "<html></html>");
    }

    #[test]
    fn test_write_page_invalid_path() {
        let result = HtmlDashboard::write_page("<html></html>", "/invalid/path/dashboard.html");
        assert!(result.is_err());
    }
}
