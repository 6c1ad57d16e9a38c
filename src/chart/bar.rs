//! Age bracket bar chart

use super::ChartTheme;
use super::axis::{PlotArea, draw_value_axis, nice_ticks};
use super::svg::{Anchor, SvgDocument};
use crate::algorithm::AgeDistribution;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 320.0;
const BAR_FILL: f64 = 0.8;

/// Vertical bars per bracket, in bracket order, each labelled with its count
#[must_use]
pub fn render_age_bars(distribution: &AgeDistribution, theme: &ChartTheme) -> String {
    let mut doc = SvgDocument::new(WIDTH, HEIGHT, theme);
    let area = PlotArea {
        left: 64.0,
        top: 24.0,
        right: WIDTH - 16.0,
        bottom: HEIGHT - 56.0,
    };

    let max_count = distribution.buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let ticks = nice_ticks(max_count as f64, 5);
    let axis_max = ticks.last().copied().unwrap_or(1.0);
    draw_value_axis(&mut doc, &area, &ticks, theme, "연령대", "직원 수");

    let slot = area.width() / distribution.buckets.len().max(1) as f64;
    let bar_width = slot * BAR_FILL;
    for (idx, bucket) in distribution.buckets.iter().enumerate() {
        let x = area.left + slot * idx as f64 + (slot - bar_width) / 2.0;
        let y = area.y_for(bucket.count as f64, axis_max);
        doc.rect(x, y, bar_width, area.bottom - y, theme.color(idx));
        doc.text(x + bar_width / 2.0, y - 10.0, &bucket.count.to_string(), Anchor::Middle);
        doc.text(x + bar_width / 2.0, area.bottom + 14.0, bucket.label, Anchor::Middle);
    }

    doc.line(area.left, area.bottom, area.right, area.bottom, &theme.text_color, 1.0);
    doc.finish()
}
