//! Value axis helpers shared by the bar charts

use super::ChartTheme;
use super::svg::{Anchor, SvgDocument, fmt_num};

/// Plot area inside a chart, in SVG coordinates
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Y coordinate of `value` on an axis running from 0 to `max`
    #[must_use]
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.bottom;
        }
        self.bottom - value / max * self.height()
    }
}

/// Evenly spaced "nice" ticks from 0 covering `max`
///
/// Steps are 1, 2, 2.5 or 5 times a power of ten, chosen so that roughly
/// `target` intervals fit. The last tick is at least `max`.
#[must_use]
pub fn nice_ticks(max: f64, target: usize) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0, 1.0];
    }

    let raw = max / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10.0 * magnitude);

    let count = (max / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Draw horizontal grid lines with tick labels and both axis titles
pub fn draw_value_axis(
    doc: &mut SvgDocument,
    area: &PlotArea,
    ticks: &[f64],
    theme: &ChartTheme,
    x_title: &str,
    y_title: &str,
) {
    let max = ticks.last().copied().unwrap_or(1.0);
    for tick in ticks {
        let y = area.y_for(*tick, max);
        doc.line(area.left, y, area.right, y, &theme.grid_color, 1.0);
        doc.text(area.left - 6.0, y, &fmt_num(*tick), Anchor::End);
    }

    doc.vertical_text(area.left - 44.0, area.top + area.height() / 2.0, y_title);
    doc.text(
        area.left + area.width() / 2.0,
        area.bottom + 40.0,
        x_title,
        Anchor::Middle,
    );
}
