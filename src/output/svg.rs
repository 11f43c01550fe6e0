//! SVG output encoder.
//!
//! Vector output keeps the grid labels and coordinates as real text, which a
//! raster canvas cannot carry.

use crate::color::Rgba;
use crate::error::Result;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG document builder.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    width: u32,
    height: u32,
    elements: Vec<SvgElement>,
}

/// Field names match SVG attribute names.
#[derive(Debug, Clone, PartialEq)]
enum SvgElement {
    /// Filled rectangle
    Rect { x: f32, y: f32, width: f32, height: f32, fill: Rgba },
    /// Straight line, optionally dashed (`on`, `off` lengths)
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
        dash: Option<(f32, f32)>,
    },
    /// Text
    Text { x: f32, y: f32, text: String, font_size: f32, fill: Rgba, anchor: TextAnchor, bold: bool },
}

/// Horizontal alignment of text relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position.
    #[default]
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    End,
}

impl SvgEncoder {
    /// Create an empty document with a white background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, elements: Vec::new() }
    }

    /// Document width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Document height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Add a filled rectangle.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgba) {
        self.elements.push(SvgElement::Rect { x, y, width, height, fill });
    }

    /// Add a solid line.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: Rgba, stroke_width: f32) {
        self.elements.push(SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width, dash: None });
    }

    /// Add a dashed line.
    #[allow(clippy::too_many_arguments)]
    pub fn dashed_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
        dash: (f32, f32),
    ) {
        self.elements.push(SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width, dash: Some(dash) });
    }

    /// Add text.
    pub fn text(&mut self, x: f32, y: f32, text: &str, font_size: f32, fill: Rgba) {
        self.text_anchored(x, y, text, font_size, fill, TextAnchor::Start);
    }

    /// Add text with anchor.
    pub fn text_anchored(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    ) {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
            bold: false,
        });
    }

    /// Add bold text with anchor.
    pub fn bold_text(&mut self, x: f32, y: f32, text: &str, font_size: f32, fill: Rgba, anchor: TextAnchor) {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
            bold: true,
        });
    }

    /// Text content of every text element, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            SvgElement::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Render to an SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(64 * (self.elements.len() + 4));

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}">"#,
            self.width, self.height
        );

        let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, rgba_to_css(Rgba::WHITE));

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the rendered document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        log::info!("wrote {}x{} SVG to {}", self.width, self.height, path.display());
        Ok(())
    }
}

fn rgba_to_css(color: Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!("rgba({},{},{},{:.3})", color.r, color.g, color.b, f32::from(color.a) / 255.0)
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect { x, y, width, height, fill } => {
            format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"/>"#,
                rgba_to_css(*fill)
            )
        }
        SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width, dash } => {
            let dash_attr =
                dash.map(|(on, off)| format!(r#" stroke-dasharray="{on} {off}""#)).unwrap_or_default();
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"{dash_attr}/>"#,
                rgba_to_css(*stroke)
            )
        }
        SvgElement::Text { x, y, text, font_size, fill, anchor, bold } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let weight = if *bold { r#" font-weight="bold""# } else { "" };
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{anchor_str}" font-family="sans-serif"{weight}>{}</text>"#,
                rgba_to_css(*fill),
                escape_xml(text)
            )
        }
    }
}
