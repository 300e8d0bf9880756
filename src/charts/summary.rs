//! Static figures of the summary dashboard.

use serde_json::json;

use crate::charts::figure::Figure;
use crate::charts::theme;
use crate::core::constants::text;
use crate::data::summary::{
    CategoryCount, IpcCount, MonthlyCount, SectionCount, YearlyCount, split_labels_counts,
};

fn base_figure(title: &str, height: u32) -> Figure {
    let mut figure = Figure::new();
    figure.update_layout(theme::dark_layout());
    figure.update_layout(json!({
        "title": theme::centered_title(title, 24),
        "height": height,
    }));
    figure
}

/// Donut chart of patents per MPK section
pub fn section_pie(sections: &[SectionCount]) -> Figure {
    let (labels, values) = split_labels_counts(sections);

    let mut figure = base_figure(text::SECTION_PIE_TITLE, 600).with_trace(json!({
        "type": "pie",
        "labels": labels,
        "values": values,
        "hole": 0.3,
        "textinfo": "percent+label",
        "marker": {"colors": theme::PASTEL},
    }));
    figure.update_layout(json!({"showlegend": false}));
    figure
}

/// Horizontal bars of the IPC subclasses, in the given order
pub fn ipc_bars(subclasses: &[IpcCount], top_n: usize) -> Figure {
    let (labels, values) = split_labels_counts(subclasses);
    let title = format!("Топ-{top_n} {}", text::IPC_BARS_SUBJECT);

    let mut figure = base_figure(&title, 500).with_trace(json!({
        "type": "bar",
        "orientation": "h",
        "x": values,
        "y": labels,
        "text": labels,
        "textposition": "auto",
        "textfont": {"color": "black"},
        "marker": {"color": theme::cycle(&theme::PASTEL, subclasses.len())},
    }));
    figure.update_layout(json!({
        "xaxis": {"title": {"text": text::PATENT_COUNT_AXIS}},
        "margin": {"l": 150},
    }));
    figure
}

/// Line with markers of patents per year
pub fn yearly_trend(years: &[YearlyCount]) -> Figure {
    let x: Vec<i32> = years.iter().map(|y| y.year).collect();
    let y: Vec<f64> = years.iter().map(CategoryCount::count).collect();

    let mut figure = base_figure(text::YEARLY_TITLE, 500).with_trace(json!({
        "type": "scatter",
        "mode": "lines+markers",
        "x": x,
        "y": y,
        "line": {"width": 3, "color": theme::ACCENT_COLOR},
        "marker": {"size": 10, "color": theme::ACCENT_COLOR},
    }));
    figure.update_layout(json!({
        "xaxis": theme::grid_axis(),
        "yaxis": theme::grid_axis(),
    }));
    figure.update_layout(json!({
        "xaxis": {"title": {"text": text::YEAR_AXIS}},
        "yaxis": {"title": {"text": text::PATENT_COUNT_AXIS}},
    }));
    figure
}

/// Bars of patents per calendar month
pub fn monthly_seasonality(months: &[MonthlyCount]) -> Figure {
    let (labels, values) = split_labels_counts(months);

    let mut figure = base_figure(text::MONTHLY_TITLE, 500).with_trace(json!({
        "type": "bar",
        "x": labels,
        "y": values,
        "marker": {"color": theme::cycle(&theme::VIRIDIS, months.len())},
    }));
    figure.update_layout(json!({
        "xaxis": theme::grid_axis(),
        "yaxis": theme::grid_axis(),
    }));
    figure.update_layout(json!({
        "xaxis": {"title": {"text": text::MONTH_AXIS}},
        "yaxis": {"title": {"text": text::PATENT_COUNT_AXIS}},
    }));
    figure
}
