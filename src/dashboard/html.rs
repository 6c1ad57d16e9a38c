//! Self-contained HTML page
//!
//! Styles and the font are inlined so the page works offline as a single file.

use html_escape::encode_text;

use super::font::{FONT_FAMILY, FontResource};
use super::surface::Surface;

/// Surface that accumulates an HTML document
#[derive(Debug, Default)]
pub struct HtmlSurface {
    body: String,
    font_face: Option<String>,
    in_row: bool,
    in_cell: bool,
}

impl HtmlSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed `font` and use it for all page and chart text
    #[must_use]
    pub fn with_font(mut self, font: &FontResource) -> Self {
        self.font_face = Some(font.css_face());
        self
    }

    /// Assemble the complete document
    #[must_use]
    pub fn finish(mut self, page_title: &str) -> String {
        self.close_row();
        format!(
            r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{font_face}{css}</style>
</head>
<body>
    <div class="container">
{body}
        {footer}
    </div>
</body>
</html>"#,
            title = encode_text(page_title),
            font_face = self.font_face.as_deref().unwrap_or_default(),
            css = inline_css(),
            body = self.body,
            footer = render_footer(),
        )
    }

    fn push(&mut self, html: &str) {
        self.body.push_str("        ");
        self.body.push_str(html);
        self.body.push('\n');
    }

    fn close_cell(&mut self) {
        if self.in_cell {
            self.push("</div>");
            self.in_cell = false;
        }
    }

    fn close_row(&mut self) {
        self.close_cell();
        if self.in_row {
            self.push("</div>");
            self.in_row = false;
        }
    }
}

impl Surface for HtmlSurface {
    fn title(&mut self, text: &str) {
        self.push(&format!("<header><h1>{}</h1></header>", encode_text(text)));
    }

    fn columns(&mut self, count: usize) {
        self.close_row();
        self.push(&format!(
            r#"<div class="row" style="grid-template-columns: repeat({}, 1fr);">"#,
            count.max(1)
        ));
        self.in_row = true;
    }

    fn column(&mut self) {
        self.close_cell();
        self.push(r#"<div class="cell">"#);
        self.in_cell = true;
    }

    fn end_columns(&mut self) {
        self.close_row();
    }

    fn metric(&mut self, label: &str, value: &str) {
        self.push(&format!(
            r#"<div class="metric"><h3>{}</h3><div class="value">{}</div></div>"#,
            encode_text(label),
            encode_text(value)
        ));
    }

    fn subheader(&mut self, text: &str) {
        self.push(&format!("<h2>{}</h2>", encode_text(text)));
    }

    fn chart(&mut self, svg: &str) {
        self.push(&format!(r#"<figure class="chart">{svg}</figure>"#));
    }

    fn info(&mut self, text: &str) {
        self.push(&format!(r#"<div class="notice info">{}</div>"#, encode_text(text)));
    }

    fn error(&mut self, text: &str) {
        self.push(&format!(r#"<div class="notice error">{}</div>"#, encode_text(text)));
    }
}

fn render_footer() -> String {
    format!(
        r#"<footer>Generated {}</footer>"#,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

fn inline_css() -> String {
    format!(
        r#"
* {{ box-sizing: border-box; margin: 0; padding: 0; }}
body {{
    font-family: '{FONT_FAMILY}', system-ui, sans-serif;
    line-height: 1.6;
    color: #262730;
    background: #ffffff;
}}
.container {{ max-width: 1400px; margin: 0 auto; padding: 2rem; }}
header {{ margin-bottom: 1.5rem; }}
header h1 {{ font-size: 2.25rem; font-weight: 700; }}
h2 {{ font-size: 1.4rem; font-weight: 600; margin: 1.5rem 0 0.75rem; }}
.row {{ display: grid; gap: 1.5rem; margin-bottom: 1rem; }}
.metric h3 {{ font-size: 0.875rem; font-weight: 400; color: #555867; }}
.metric .value {{ font-size: 2.25rem; }}
.chart svg {{ max-width: 100%; height: auto; }}
.notice {{ padding: 1rem; border-radius: 0.5rem; margin: 0.5rem 0; }}
.notice.info {{ background: #e8f2fc; color: #0b4f8a; }}
.notice.error {{ background: #fde8e8; color: #8a1c1c; }}
footer {{ margin-top: 2rem; color: #6b7280; font-size: 0.75rem; }}
"#
    )
}
