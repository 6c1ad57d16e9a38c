//! Overtime share by marital status, grouped by gender

use super::ChartTheme;
use super::axis::{PlotArea, draw_value_axis, nice_ticks};
use super::svg::{Anchor, SvgDocument};
use crate::algorithm::OvertimeSlice;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const GROUP_FILL: f64 = 0.8;
const LEGEND_WIDTH: f64 = 110.0;

/// One group of bars per marital status, one bar per gender
///
/// Pairs that never occur in the data leave an empty slot in their group.
#[must_use]
pub fn render_overtime_bars(slice: &OvertimeSlice, theme: &ChartTheme) -> String {
    let mut doc = SvgDocument::new(WIDTH, HEIGHT, theme);
    let area = PlotArea {
        left: 64.0,
        top: 24.0,
        right: WIDTH - LEGEND_WIDTH - 16.0,
        bottom: HEIGHT - 56.0,
    };

    let max_pct = slice
        .bars
        .iter()
        .map(|b| b.percentage)
        .fold(0.0_f64, f64::max);
    let ticks = nice_ticks(max_pct, 5);
    let axis_max = ticks.last().copied().unwrap_or(1.0);
    draw_value_axis(&mut doc, &area, &ticks, theme, "결혼여부", "비율(%)");

    let slot = area.width() / slice.marital_statuses.len().max(1) as f64;
    let group_width = slot * GROUP_FILL;
    let bar_width = group_width / slice.genders.len().max(1) as f64;

    for (group_idx, marital_status) in slice.marital_statuses.iter().enumerate() {
        let group_left = area.left + slot * group_idx as f64 + (slot - group_width) / 2.0;
        for (gender_idx, gender) in slice.genders.iter().enumerate() {
            let Some(pct) = slice.percentage(marital_status, gender) else {
                continue;
            };
            let x = group_left + bar_width * gender_idx as f64;
            let y = area.y_for(pct, axis_max);
            doc.rect(x, y, bar_width, area.bottom - y, theme.color(gender_idx));
        }
        let label_x = group_left + group_width / 2.0;
        doc.text(label_x, area.bottom + 14.0, marital_status, Anchor::Middle);
    }
    doc.line(area.left, area.bottom, area.right, area.bottom, &theme.text_color, 1.0);

    let legend_x = area.right + 20.0;
    doc.text(legend_x, area.top + 8.0, "성별", Anchor::Start);
    for (idx, gender) in slice.genders.iter().enumerate() {
        let y = area.top + 30.0 + idx as f64 * 22.0;
        doc.rect(legend_x, y - 6.0, 12.0, 12.0, theme.color(idx));
        doc.text(legend_x + 18.0, y, gender, Anchor::Start);
    }

    doc.finish()
}
