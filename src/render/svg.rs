use crate::core::{CanvasSize, Point};
use crate::render::attributes::AttributeSet;
use crate::render::path::PathData;

/// Rounds `value` to `digits` significant digits and renders it with trailing
/// zeros trimmed.
#[must_use]
pub(crate) fn format_number(value: f64, digits: u8) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return format!("{value}");
    }
    let digits = digits.max(1);
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(i32::from(digits) - 1 - magnitude);
    let rounded = (value * factor).round() / factor;
    format!("{rounded}")
}

/// Element name used for point-list primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyKind {
    Polygon,
    Polyline,
}

impl PolyKind {
    fn tag(self) -> &'static str {
        match self {
            PolyKind::Polygon => "polygon",
            PolyKind::Polyline => "polyline",
        }
    }
}

/// Stateless markup formatter for pixel-space primitives.
///
/// Every coordinate handed to this writer is already absolute pixel space; the
/// writer only formats, limits precision, and stringifies attribute
/// dictionaries. Core types keep full `f64` precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgWriter {
    precision: u8,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self { precision: 4 }
    }
}

impl SvgWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer limiting output coordinates to `precision` significant digits.
    #[must_use]
    pub fn with_precision(precision: u8) -> Self {
        Self {
            precision: precision.max(1),
        }
    }

    #[must_use]
    pub fn precision(self) -> u8 {
        self.precision
    }

    fn fmt(self, value: f64) -> String {
        format_number(value, self.precision)
    }

    fn attrs(attributes: &AttributeSet) -> String {
        if attributes.is_empty() {
            String::new()
        } else {
            format!(" {}", attributes.to_markup())
        }
    }

    #[must_use]
    pub fn circle(self, cx: f64, cy: f64, r: f64, attributes: &AttributeSet) -> String {
        format!(
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            self.fmt(cx),
            self.fmt(cy),
            self.fmt(r),
            Self::attrs(attributes)
        )
    }

    #[must_use]
    pub fn ellipse(self, cx: f64, cy: f64, rx: f64, ry: f64, attributes: &AttributeSet) -> String {
        format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"{}/>"#,
            self.fmt(cx),
            self.fmt(cy),
            self.fmt(rx),
            self.fmt(ry),
            Self::attrs(attributes)
        )
    }

    /// Negative extents are normalized so the emitted rectangle always has
    /// non-negative width and height.
    #[must_use]
    pub fn rect(
        self,
        mut x: f64,
        mut y: f64,
        mut width: f64,
        mut height: f64,
        attributes: &AttributeSet,
    ) -> String {
        if width < 0.0 {
            width = width.abs();
            x -= width;
        }
        if height < 0.0 {
            height = height.abs();
            y -= height;
        }
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.fmt(x),
            self.fmt(y),
            self.fmt(width),
            self.fmt(height),
            Self::attrs(attributes)
        )
    }

    #[must_use]
    pub fn line(self, x1: f64, y1: f64, x2: f64, y2: f64, attributes: &AttributeSet) -> String {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.fmt(x1),
            self.fmt(y1),
            self.fmt(x2),
            self.fmt(y2),
            Self::attrs(attributes)
        )
    }

    #[must_use]
    pub fn path(self, path: &PathData, attributes: &AttributeSet) -> String {
        format!(
            r#"<path{} d="{}"/>"#,
            Self::attrs(attributes),
            path.render(self.precision)
        )
    }

    #[must_use]
    pub fn poly(self, kind: PolyKind, path: &PathData, attributes: &AttributeSet) -> String {
        format!(
            r#"<{}{} points="{}"/>"#,
            kind.tag(),
            Self::attrs(attributes),
            path.render(self.precision)
        )
    }

    #[must_use]
    pub fn text(self, x: f64, y: f64, text: &str, attributes: &AttributeSet) -> String {
        format!(
            r#"<text x="{}" y="{}"{}>{}</text>"#,
            self.fmt(x),
            self.fmt(y),
            Self::attrs(attributes),
            text
        )
    }

    /// Text rotated by `angle` degrees around its own anchor point.
    #[must_use]
    pub fn text_rotated(
        self,
        x: f64,
        y: f64,
        angle: f64,
        text: &str,
        attributes: &AttributeSet,
    ) -> String {
        let x = self.fmt(x);
        let y = self.fmt(y);
        format!(
            r#"<text x="{x}" y="{y}" transform="rotate({},{x},{y})"{}>{text}</text>"#,
            self.fmt(angle),
            Self::attrs(attributes)
        )
    }

    #[must_use]
    pub fn image(
        self,
        href: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attributes: &AttributeSet,
    ) -> String {
        format!(
            r#"<image x="{}" y="{}" width="{}" height="{}" href="{href}"{}/>"#,
            self.fmt(x),
            self.fmt(y),
            self.fmt(width),
            self.fmt(height),
            Self::attrs(attributes)
        )
    }

    /// Arbitrary foreign content embedded at a pixel rectangle.
    #[must_use]
    pub fn foreign_object(
        self,
        inner: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attributes: &AttributeSet,
    ) -> String {
        format!(
            r#"<foreignObject x="{}" y="{}" width="{}" height="{}"{}>{inner}</foreignObject>"#,
            self.fmt(x),
            self.fmt(y),
            self.fmt(width),
            self.fmt(height),
            Self::attrs(attributes)
        )
    }

    /// HTML `<canvas>` element embedded as a foreign object.
    #[must_use]
    pub fn html_canvas(
        self,
        id: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attributes: &AttributeSet,
    ) -> String {
        let width = self.fmt(width);
        let height = self.fmt(height);
        format!(
            r#"<foreignObject x="{}" y="{}" width="{width}" height="{height}"{}><canvas xmlns="http://www.w3.org/1999/xhtml" id="{id}" width="{width}" height="{height}">No foreign element supported</canvas></foreignObject>"#,
            self.fmt(x),
            self.fmt(y),
            Self::attrs(attributes)
        )
    }

    #[must_use]
    pub fn clip_path(self, id: &str, path: &PathData) -> String {
        format!(
            r#"<clipPath id="{id}"><path d="{}"/></clipPath>"#,
            path.render(self.precision)
        )
    }

    #[must_use]
    pub fn group_open(self, id: Option<&str>, attributes: &AttributeSet) -> String {
        match id {
            Some(id) => format!(r#"<g id="{id}"{}>"#, Self::attrs(attributes)),
            None => format!("<g{}>", Self::attrs(attributes)),
        }
    }

    #[must_use]
    pub fn group_close(self) -> &'static str {
        "</g>"
    }

    #[must_use]
    pub fn symbol_open(self, id: &str) -> String {
        format!(r#"<symbol id="{id}">"#)
    }

    #[must_use]
    pub fn symbol_close(self) -> &'static str {
        "</symbol>"
    }

    #[must_use]
    pub fn use_ref(self, id: &str, x: f64, y: f64) -> String {
        format!(
            r##"<use xlink:href="#{id}" x="{}" y="{}"/>"##,
            self.fmt(x),
            self.fmt(y)
        )
    }

    /// Document header: SVG 1.1 root element with an optional stylesheet
    /// processing instruction.
    #[must_use]
    pub fn header(self, canvas: CanvasSize, stylesheet: Option<&str>) -> String {
        let svg = format!(
            r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
            width = canvas.width,
            height = canvas.height
        );
        match stylesheet {
            Some(href) => {
                format!("<?xml-stylesheet type=\"text/css\" href=\"{href}\"?>\n{svg}")
            }
            None => svg,
        }
    }

    #[must_use]
    pub fn footer(self) -> &'static str {
        "</svg>"
    }

    /// Projects `points` into a closed polygon path, the shape used for frame
    /// clip outlines.
    #[must_use]
    pub fn polygon_path(self, points: &[Point]) -> PathData {
        PathData::polygon(points)
    }
}

#[cfg(test)]
mod tests {
    use super::{SvgWriter, format_number};
    use crate::core::CanvasSize;
    use crate::render::AttributeSet;

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_number(250.0, 4), "250");
        assert_eq!(format_number(1.23456, 4), "1.235");
        assert_eq!(format_number(0.000987654, 4), "0.0009877");
        assert_eq!(format_number(0.0, 4), "0");
        assert_eq!(format_number(-12.3456, 4), "-12.35");
    }

    #[test]
    fn rect_normalizes_negative_extents() {
        let writer = SvgWriter::new();
        let markup = writer.rect(10.0, 20.0, -4.0, -6.0, &AttributeSet::new());
        assert_eq!(markup, r#"<rect x="6" y="14" width="4" height="6"/>"#);
    }

    #[test]
    fn header_includes_stylesheet_when_present() {
        let writer = SvgWriter::new();
        let header = writer.header(CanvasSize::new(600, 400), Some("plot.css"));
        assert!(header.starts_with(r#"<?xml-stylesheet type="text/css" href="plot.css"?>"#));
        assert!(header.contains(r#"viewBox="0 0 600 400""#));
    }

    #[test]
    fn attributes_render_in_insertion_order() {
        let writer = SvgWriter::new();
        let attrs = AttributeSet::new().stroke("red").fill("none");
        let markup = writer.line(0.0, 0.0, 1.0, 1.0, &attrs);
        assert_eq!(
            markup,
            r#"<line x1="0" y1="0" x2="1" y2="1" stroke="red" fill="none"/>"#
        );
    }
}
