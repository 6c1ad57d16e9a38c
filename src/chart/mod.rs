//! SVG chart rendering
//!
//! Each renderer turns one computed distribution into a standalone `<svg>`
//! element. Text uses the theme's font family, which the page binds to the
//! embedded font.

pub mod axis;
pub mod bar;
pub mod grouped_bar;
pub mod pie;
pub mod svg;

pub use bar::render_age_bars;
pub use grouped_bar::render_overtime_bars;
pub use pie::render_gender_pie;

/// Seaborn's "deep" palette
pub const DEEP_PALETTE: [&str; 10] = [
    "#4C72B0", "#DD8452", "#55A868", "#C44E52", "#8172B3", "#937860", "#DA8BC3", "#8C8C8C",
    "#CCB974", "#64B5CD",
];

/// Visual settings shared by all charts
#[derive(Debug, Clone)]
pub struct ChartTheme {
    /// CSS font family applied to all chart text
    pub font_family: String,
    pub font_size: f64,
    pub text_color: String,
    pub grid_color: String,
    pub background: String,
    pub palette: Vec<String>,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            font_family: "DashboardFont, sans-serif".to_string(),
            font_size: 13.0,
            text_color: "#262626".to_string(),
            grid_color: "#cccccc".to_string(),
            background: "#ffffff".to_string(),
            palette: DEEP_PALETTE.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ChartTheme {
    /// Palette color for series `index`, cycling when the palette runs out
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return "#4C72B0";
        }
        &self.palette[index % self.palette.len()]
    }
}
