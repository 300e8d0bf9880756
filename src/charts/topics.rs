//! Figures of the topics dashboard: quarter treemap and topic trends.

use chrono::NaiveDate;
use serde_json::json;

use crate::charts::figure::Figure;
use crate::charts::theme;
use crate::core::constants::text;
use crate::core::error::Result;
use crate::data::period::{period_value, quarter_label};
use crate::data::table::TimeTable;

/// Which trend chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendKind {
    /// Counts per period
    Monthly,
    /// Running totals
    Cumulative,
}

impl TrendKind {
    fn title(self) -> &'static str {
        match self {
            TrendKind::Monthly => text::TREND_TITLE,
            TrendKind::Cumulative => text::CUMULATIVE_TITLE,
        }
    }

    fn y_axis_title(self) -> &'static str {
        match self {
            TrendKind::Monthly => text::TREND_Y_AXIS,
            TrendKind::Cumulative => text::CUMULATIVE_Y_AXIS,
        }
    }

    fn hover_label(self) -> &'static str {
        match self {
            TrendKind::Monthly => text::TREND_HOVER_LABEL,
            TrendKind::Cumulative => text::CUMULATIVE_HOVER_LABEL,
        }
    }
}

/// Treemap of the topic counts in the quarter ending on `quarter`
pub fn treemap_figure(quarterly: &TimeTable, quarter: NaiveDate) -> Result<Figure> {
    let frame = quarterly.row_frame(quarter)?;
    let (labels, values): (Vec<String>, Vec<f64>) = frame.into_iter().unzip();
    let parents = vec![""; labels.len()];

    let trace = json!({
        "type": "treemap",
        "name": "",
        "ids": labels,
        "labels": labels,
        "parents": parents,
        "values": values,
        "branchvalues": "total",
        "customdata": values.iter().map(|v| [v]).collect::<Vec<_>>(),
        "marker": {
            "colors": values,
            "coloraxis": "coloraxis",
            "line": {"width": 1, "color": theme::BACKGROUND_COLOR},
        },
        "texttemplate": "<b>%{label}</b><br>%{value} патентов",
        "textfont": {"size": 16, "family": theme::FONT_BODY, "color": theme::TEXT_COLOR},
        "hovertemplate": "<b>%{label}</b><br>Количество: %{value}<extra></extra>",
    });

    let mut figure = Figure::new().with_trace(trace);
    figure.update_layout(json!({
        "title": theme::title(
            &format!("{} ({})", text::TREEMAP_TITLE, quarter_label(quarter)),
            24,
        ),
        "margin": {"t": 50, "l": 0, "r": 0, "b": 0},
        "paper_bgcolor": theme::BACKGROUND_COLOR,
        "plot_bgcolor": theme::BACKGROUND_COLOR,
        "coloraxis": {
            "colorscale": theme::VIRIDIS_SCALE,
            "colorbar": {
                "title": {"text": text::TREEMAP_COUNT, "font": {"color": theme::TEXT_COLOR}},
                "tickfont": {"color": theme::TEXT_COLOR},
            },
        },
        "uniformtext": {"minsize": 12, "mode": "hide"},
    }));

    Ok(figure)
}

/// One line per topic with a dashed marker at `selected`
pub fn trend_figure(table: &TimeTable, selected: NaiveDate, kind: TrendKind) -> Figure {
    let dates: Vec<String> = table.index().iter().map(|d| period_value(*d)).collect();
    let colors = theme::cycle(&theme::PASTEL, table.columns().len());
    let hovertemplate = format!(
        "<b>%{{fullData.name}}</b><br>Дата: %{{x|%Y-%m-%d}}<br>{}: %{{y}}<extra></extra>",
        kind.hover_label()
    );

    let mut figure = Figure::new();
    for (pos, (column, color)) in table.columns().iter().zip(colors).enumerate() {
        let values: Vec<f64> = table.rows().iter().map(|row| row[pos]).collect();
        figure = figure.with_trace(json!({
            "type": "scatter",
            "mode": "lines",
            "name": column,
            "legendgroup": column,
            "x": dates,
            "y": values,
            "line": {"color": color},
        }));
    }
    figure.update_traces(&json!({
        "line": {"width": 2, "dash": "solid"},
        "hovertemplate": hovertemplate,
    }));
    figure.add_vline(
        &period_value(selected),
        json!({"width": 2, "dash": "dash", "color": theme::ACCENT_COLOR}),
    );

    figure.update_layout(theme::trend_layout());
    figure.update_layout(json!({
        "title": theme::title(kind.title(), 22),
        "xaxis": {"title": {"text": table.index_name()}},
        "yaxis": {"title": {"text": kind.y_axis_title()}},
        "legend": {"title": {"text": "variable"}},
        "height": 400,
    }));

    figure
}
