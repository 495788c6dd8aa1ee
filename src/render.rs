//! Renderer adapter. The core produces segments; stroke, color and the
//! output medium all live on the renderer's side of this seam.

use std::io::{self, Write};

use crate::geometry::{Point, Segment};

/// Sink for terminal segments, invoked once per segment in draw order.
pub trait Renderer {
    type Error;

    fn draw_segment(&mut self, start: Point, end: Point) -> Result<(), Self::Error>;
}

/// Feed every segment to `renderer` in order.
pub fn draw<I, R>(segments: I, renderer: &mut R) -> Result<(), R::Error>
where
    I: IntoIterator<Item = Segment>,
    R: Renderer,
{
    for segment in segments {
        renderer.draw_segment(segment.start, segment.end)?;
    }
    Ok(())
}

/// Writes segments as SVG `<line>` elements.
pub struct SvgRenderer<W: Write> {
    out: W,
    stroke: &'static str,
}

impl<W: Write> SvgRenderer<W> {
    /// Start an SVG document sized to the canvas.
    pub fn new(mut out: W, width: f64, height: f64) -> io::Result<Self> {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        Ok(Self { out, stroke: "blue" })
    }

    pub fn stroke(mut self, color: &'static str) -> Self {
        self.stroke = color;
        self
    }

    /// Close the document and hand the writer back.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "</svg>")?;
        Ok(self.out)
    }
}

impl<W: Write> Renderer for SvgRenderer<W> {
    type Error = io::Error;

    fn draw_segment(&mut self, start: Point, end: Point) -> io::Result<()> {
        writeln!(
            self.out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            start.x, start.y, end.x, end.y, self.stroke
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    fn render_to_string(shape: ShapeKind, depth: i32) -> String {
        let segments = crate::generate(shape, depth, 600.0, 600.0).unwrap();
        let mut svg = SvgRenderer::new(Vec::new(), 600.0, 600.0).unwrap();
        draw(segments, &mut svg).unwrap();
        String::from_utf8(svg.finish().unwrap()).unwrap()
    }

    #[test]
    fn one_line_element_per_segment() {
        let doc = render_to_string(ShapeKind::Curve, 2);
        assert_eq!(doc.matches("<line ").count(), 16);
        assert!(doc.starts_with("<svg "));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn stroke_color_is_configurable() {
        let mut svg = SvgRenderer::new(Vec::new(), 10.0, 10.0)
            .unwrap()
            .stroke("black");
        svg.draw_segment(crate::geometry::pt(0.0, 0.0), crate::geometry::pt(1.0, 1.0))
            .unwrap();
        let doc = String::from_utf8(svg.finish().unwrap()).unwrap();
        assert!(doc.contains(r#"stroke="black""#));
    }
}
