use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LineStrokeStyle, RenderFrame, Renderer, TextHAlign, TextVAlign,
};

/// Renders frames into a standalone SVG document kept in memory.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    aria_label: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accessible name written as `aria-label` on the root element.
    #[must_use]
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Document produced by the last `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    fn write_frame(&self, frame: &RenderFrame) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let (width, height) = (frame.viewport.width, frame.viewport.height);
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" role="img""#
        )?;
        if let Some(label) = &self.aria_label {
            write!(out, r#" aria-label="{}""#, escape(label))?;
        }
        out.push_str(">\n");

        for layer in &frame.layers {
            if layer.is_empty() {
                continue;
            }
            writeln!(out, r#"<g data-layer="{:?}">"#, layer.kind)?;
            for rect in &layer.rects {
                write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}"#,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    rect.corner_radius,
                    fill_attrs(rect.fill_color)
                )?;
                if rect.border_width > 0.0 {
                    write!(
                        out,
                        r#" stroke-width="{}"{}"#,
                        rect.border_width,
                        stroke_attrs(rect.border_color)
                    )?;
                }
                out.push_str("/>\n");
            }
            for line in &layer.lines {
                write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}"{}"#,
                    line.x1,
                    line.y1,
                    line.x2,
                    line.y2,
                    line.stroke_width,
                    stroke_attrs(line.color)
                )?;
                if let LineStrokeStyle::Dashed(dash) = line.stroke_style {
                    write!(out, r#" stroke-dasharray="{dash} {dash}""#)?;
                }
                out.push_str("/>\n");
            }
            for path in &layer.paths {
                writeln!(
                    out,
                    r#"<path d="{}" fill="none" stroke-width="{}"{}/>"#,
                    path.svg_path_data(),
                    path.stroke_width,
                    stroke_attrs(path.color)
                )?;
            }
            for circle in &layer.circles {
                write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}"{}"#,
                    circle.cx,
                    circle.cy,
                    circle.radius,
                    fill_attrs(circle.fill_color)
                )?;
                if circle.stroke_width > 0.0 {
                    write!(
                        out,
                        r#" stroke-width="{}"{}"#,
                        circle.stroke_width,
                        stroke_attrs(circle.stroke_color)
                    )?;
                }
                out.push_str("/>\n");
            }
            for text in &layer.texts {
                let anchor = match text.h_align {
                    TextHAlign::Left => "start",
                    TextHAlign::Center => "middle",
                    TextHAlign::Right => "end",
                };
                write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}"{}"#,
                    text.x,
                    text.y,
                    text.font_size_px,
                    fill_attrs(text.color)
                )?;
                if text.v_align == TextVAlign::Middle {
                    out.push_str(r#" dominant-baseline="middle""#);
                }
                if text.rotation_deg != 0.0 {
                    write!(
                        out,
                        r#" transform="rotate({}, {}, {})""#,
                        text.rotation_deg, text.x, text.y
                    )?;
                }
                writeln!(out, ">{}</text>", escape(&text.text))?;
            }
            out.push_str("</g>\n");
        }

        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = self
            .write_frame(frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        Ok(())
    }
}

fn fill_attrs(color: Color) -> String {
    if color.alpha < 1.0 {
        format!(r#" fill="{}" fill-opacity="{}""#, color.to_hex(), color.alpha)
    } else {
        format!(r#" fill="{}""#, color.to_hex())
    }
}

fn stroke_attrs(color: Color) -> String {
    if color.alpha < 1.0 {
        format!(
            r#" stroke="{}" stroke-opacity="{}""#,
            color.to_hex(),
            color.alpha
        )
    } else {
        format!(r#" stroke="{}""#, color.to_hex())
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_and_quotes() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
        assert_eq!(escape("Today's count"), "Today&#39;s count");
    }
}
