//! Minimal SVG document builder

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::ChartTheme;

/// Horizontal anchoring of a text element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// An SVG element under construction
#[derive(Debug)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    body: String,
    font_size: f64,
    text_color: String,
}

impl SvgDocument {
    /// Start a document with a filled background
    #[must_use]
    pub fn new(width: f64, height: f64, theme: &ChartTheme) -> Self {
        let mut doc = Self {
            width,
            height,
            body: String::new(),
            font_size: theme.font_size,
            text_color: theme.text_color.clone(),
        };
        let header = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="{font}" font-size="{size}">"#,
            w = fmt_num(width),
            h = fmt_num(height),
            font = encode_double_quoted_attribute(&theme.font_family),
            size = fmt_num(theme.font_size),
        );
        doc.body.push_str(&header);
        doc.rect(0.0, 0.0, width, height, &theme.background);
        doc
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Filled rectangle
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(width.max(0.0)),
            fmt_num(height.max(0.0)),
            encode_double_quoted_attribute(fill),
        );
    }

    /// Straight line
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2),
            encode_double_quoted_attribute(stroke),
            fmt_num(width),
        );
    }

    /// Filled circle
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(r),
            encode_double_quoted_attribute(fill),
            "#ffffff",
        );
    }

    /// Filled path with a white outline
    pub fn path(&mut self, d: &str, fill: &str) {
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            encode_double_quoted_attribute(d),
            encode_double_quoted_attribute(fill),
            "#ffffff",
        );
    }

    /// Text at the default size
    pub fn text(&mut self, x: f64, y: f64, content: &str, anchor: Anchor) {
        let size = self.font_size;
        self.text_sized(x, y, content, anchor, size);
    }

    /// Text at an explicit size
    pub fn text_sized(&mut self, x: f64, y: f64, content: &str, anchor: Anchor, size: f64) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="middle" font-size="{}" fill="{}">{}</text>"#,
            fmt_num(x),
            fmt_num(y),
            anchor.as_str(),
            fmt_num(size),
            encode_double_quoted_attribute(&self.text_color),
            encode_text(content),
        );
    }

    /// Text rotated a quarter turn counter-clockwise, for vertical axis titles
    pub fn vertical_text(&mut self, x: f64, y: f64, content: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="middle" fill="{fill}" transform="rotate(-90 {x} {y})">{text}</text>"#,
            x = fmt_num(x),
            y = fmt_num(y),
            fill = encode_double_quoted_attribute(&self.text_color),
            text = encode_text(content),
        );
    }

    /// Close the document and return its markup
    #[must_use]
    pub fn finish(mut self) -> String {
        self.body.push_str("</svg>");
        self.body
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros
#[must_use]
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
