//! Gender composition pie chart

use std::f64::consts::PI;

use super::ChartTheme;
use super::svg::{Anchor, SvgDocument, fmt_num};
use crate::algorithm::GenderDistribution;

const SIZE: f64 = 400.0;
const RADIUS: f64 = 140.0;
const START_ANGLE_DEG: f64 = 90.0;

/// Render one slice per gender, starting at the top and running counter-clockwise
///
/// Each slice carries its category name outside the pie and its share with
/// one decimal inside.
#[must_use]
pub fn render_gender_pie(distribution: &GenderDistribution, theme: &ChartTheme) -> String {
    let mut doc = SvgDocument::new(SIZE, SIZE, theme);
    let (cx, cy) = (SIZE / 2.0, SIZE / 2.0);
    let total = distribution.total();
    if total == 0 {
        return doc.finish();
    }

    let mut start = START_ANGLE_DEG;
    for (idx, slice) in distribution.slices.iter().enumerate() {
        let sweep = slice.count as f64 / total as f64 * 360.0;
        let end = start + sweep;
        let color = theme.color(idx);

        if sweep >= 360.0 {
            doc.circle(cx, cy, RADIUS, color);
        } else if sweep > 0.0 {
            doc.path(&slice_path(cx, cy, RADIUS, start, end), color);
        }

        let mid = start + sweep / 2.0;
        let (lx, ly) = polar(cx, cy, RADIUS * 1.12, mid);
        let anchor = if lx < cx - 1.0 {
            Anchor::End
        } else if lx > cx + 1.0 {
            Anchor::Start
        } else {
            Anchor::Middle
        };
        doc.text(lx, ly, &slice.label, anchor);

        let (px, py) = polar(cx, cy, RADIUS * 0.6, mid);
        doc.text(px, py, &format!("{:.1}%", slice.percentage), Anchor::Middle);

        start = end;
    }

    doc.finish()
}

/// Point at `angle_deg` (counter-clockwise from the positive x axis) on a circle
fn polar(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg * PI / 180.0;
    (cx + radius * rad.cos(), cy - radius * rad.sin())
}

fn slice_path(cx: f64, cy: f64, radius: f64, start_deg: f64, end_deg: f64) -> String {
    let (x1, y1) = polar(cx, cy, radius, start_deg);
    let (x2, y2) = polar(cx, cy, radius, end_deg);
    let large_arc = u8::from(end_deg - start_deg > 180.0);
    // sweep-flag 0: counter-clockwise on screen
    format!(
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 0 {} {} Z",
        fmt_num(cx),
        fmt_num(cy),
        fmt_num(x1),
        fmt_num(y1),
        fmt_num(x2),
        fmt_num(y2),
        r = fmt_num(radius),
    )
}
