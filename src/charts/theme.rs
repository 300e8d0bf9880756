//! Dark dashboard theme shared by every figure and page.

use serde_json::{Value, json};

pub const BACKGROUND_COLOR: &str = "#000000";
pub const TEXT_COLOR: &str = "#FFFFFF";
pub const ACCENT_COLOR: &str = "#00CC96";
pub const GRID_COLOR: &str = "#333";
pub const SURFACE_COLOR: &str = "#111111";
pub const MUTED_TEXT_COLOR: &str = "#AAAAAA";

pub const FONT_BODY: &str = "Inter";
pub const FONT_HEADER: &str = "Unbounded";
pub const FONT_FAMILY_BODY: &str = "Inter, sans-serif";
pub const FONT_FAMILY_HEADER: &str = "Unbounded, sans-serif";

/// Plotly's qualitative "Pastel" palette
pub const PASTEL: [&str; 11] = [
    "rgb(102, 197, 204)",
    "rgb(246, 207, 113)",
    "rgb(248, 156, 116)",
    "rgb(220, 176, 242)",
    "rgb(135, 197, 95)",
    "rgb(158, 185, 243)",
    "rgb(254, 136, 177)",
    "rgb(201, 219, 116)",
    "rgb(139, 224, 164)",
    "rgb(180, 151, 231)",
    "rgb(179, 179, 179)",
];

/// Plotly's sequential "Viridis" palette
pub const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];

/// Named continuous color scale for `coloraxis`
pub const VIRIDIS_SCALE: &str = "Viridis";

/// `n` palette entries, cycling when the palette is shorter
pub fn cycle(palette: &[&str], n: usize) -> Vec<String> {
    if palette.is_empty() {
        return Vec::new();
    }
    palette
        .iter()
        .cycle()
        .take(n)
        .map(|c| c.to_string())
        .collect()
}

/// Chart title in the header font
pub fn title(text: &str, size: u32) -> Value {
    json!({
        "text": text,
        "font": {"family": FONT_HEADER, "size": size, "color": TEXT_COLOR},
    })
}

/// Chart title centered over the plot area
pub fn centered_title(text: &str, size: u32) -> Value {
    json!({
        "text": text,
        "font": {"family": FONT_FAMILY_HEADER, "size": size, "color": TEXT_COLOR},
        "x": 0.5,
        "xanchor": "center",
    })
}

/// Base layout of the summary dashboard charts
pub fn dark_layout() -> Value {
    json!({
        "paper_bgcolor": BACKGROUND_COLOR,
        "plot_bgcolor": BACKGROUND_COLOR,
        "font": {"color": TEXT_COLOR, "family": FONT_FAMILY_BODY},
        "hoverlabel": {"font": {"color": TEXT_COLOR, "family": FONT_FAMILY_BODY}},
    })
}

/// Grid styling for one axis
pub fn grid_axis() -> Value {
    json!({"showgrid": true, "gridcolor": GRID_COLOR})
}

/// Base layout of the time-series charts
pub fn trend_layout() -> Value {
    let axis = json!({
        "showgrid": true,
        "gridcolor": GRID_COLOR,
        "gridwidth": 0.5,
        "tickfont": {"size": 12},
    });

    json!({
        "paper_bgcolor": BACKGROUND_COLOR,
        "plot_bgcolor": BACKGROUND_COLOR,
        "font": {"color": TEXT_COLOR, "family": FONT_BODY},
        "legend": {"font": {"size": 14}, "title": {"font": {"size": 16}}},
        "hovermode": "closest",
        "xaxis": axis.clone(),
        "yaxis": axis,
    })
}
