use tracing::{debug, trace};

use crate::api::intent::{DrawIntent, circle_probes};
use crate::core::{
    AutoRange, CanvasSize, FrameTransform, Placement, Point, RangeSpec, to_points,
};
use crate::error::{PlotError, PlotResult};
use crate::render::{AttributeSet, SvgWriter};

/// An independently bounded, independently clipped coordinate region sharing
/// the canvas with the other frames of its document.
///
/// Every drawing call does two things synchronously: it registers the points
/// it touches with the frame's auto-range tracker, then appends one deferred
/// intent. Coordinates are only resolved during the document render pass, so
/// intents recorded before a bound-expanding call still observe the expanded
/// bound. Callers must therefore finish all drawing on a frame's auto-ranged
/// axes before rendering.
#[derive(Debug, Clone)]
pub struct Frame {
    id: String,
    placement: Placement,
    range: AutoRange,
    attributes: AttributeSet,
    intents: Vec<DrawIntent>,
    preamble_len: usize,
}

impl Frame {
    pub(crate) fn new(
        id: &str,
        placement: Placement,
        spec: RangeSpec,
        attributes: AttributeSet,
        is_root: bool,
    ) -> Self {
        let defaults = if is_root {
            AttributeSet::new()
                .fill("beige")
                .stroke("lightgray")
                .stroke_width("0.4")
        } else {
            AttributeSet::new()
                .stroke("black")
                .fill("none")
                .stroke_width("1")
        };
        let attributes = attributes.merged_over(&defaults);

        let mut frame = Self {
            id: id.to_owned(),
            placement,
            range: AutoRange::new(spec),
            attributes,
            intents: Vec::new(),
            preamble_len: 0,
        };

        frame.intents.push(DrawIntent::GroupOpen {
            id: Some(frame.id.clone()),
            attributes: AttributeSet::new(),
        });
        if !is_root {
            frame.intents.push(DrawIntent::FrameClip {
                clip_id: frame.clip_id(),
            });
        }
        frame.intents.push(DrawIntent::FrameArea {
            attributes: frame.attributes.clone(),
        });
        frame.preamble_len = frame.intents.len();
        frame
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Identifier of the clip-path definition emitted in this frame's
    /// preamble.
    #[must_use]
    pub fn clip_id(&self) -> String {
        format!("clip{}", self.id)
    }

    #[must_use]
    pub fn intent_count(&self) -> usize {
        self.intents.len()
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, attributes: AttributeSet) -> &mut Self {
        let from = Point::new(x1, y1);
        let to = Point::new(x2, y2);
        self.range.register(from);
        self.range.register(to);
        self.intents.push(DrawIntent::Line {
            from,
            to,
            attributes,
        });
        self
    }

    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attributes: AttributeSet,
    ) -> &mut Self {
        let (lo, hi) = corner_pair(x, y, width, height);
        self.range.register(lo);
        self.range.register(hi);
        self.intents.push(DrawIntent::Rect {
            lo,
            hi,
            attributes,
        });
        self
    }

    /// Circle at a user-space center with a pixel radius. A negative radius
    /// requests a data-scaled radius derived from the projected probe points.
    pub fn circle(&mut self, cx: f64, cy: f64, radius_px: f64, attributes: AttributeSet) -> &mut Self {
        let center = Point::new(cx, cy);
        self.range.register_all(&circle_probes(center, radius_px));
        self.intents.push(DrawIntent::Circle {
            center,
            radius_px,
            attributes,
        });
        self
    }

    /// One circle per center, all sharing a pixel radius.
    pub fn circles(&mut self, centers: &[Point], radius_px: f64, attributes: AttributeSet) -> &mut Self {
        self.range.register_all(centers);
        trace!(frame = %self.id, count = centers.len(), "record circles");
        self.intents.push(DrawIntent::Circles {
            centers: centers.to_vec(),
            radius_px,
            attributes,
        });
        self
    }

    /// Ellipse with pixel radii; only the center participates in
    /// auto-ranging.
    pub fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx_px: f64,
        ry_px: f64,
        attributes: AttributeSet,
    ) -> &mut Self {
        let center = Point::new(cx, cy);
        self.range.register(center);
        self.intents.push(DrawIntent::Ellipse {
            center,
            rx_px,
            ry_px,
            attributes,
        });
        self
    }

    /// Disconnected segments between consecutive point pairs.
    pub fn dash(&mut self, points: &[Point], attributes: AttributeSet) -> PlotResult<&mut Self> {
        if points.len() % 2 != 0 {
            return Err(PlotError::InvalidData(format!(
                "dash needs an even point count, got {}",
                points.len()
            )));
        }
        self.range.register_all(points);
        self.intents.push(DrawIntent::Dash {
            points: points.to_vec(),
            attributes,
        });
        Ok(self)
    }

    pub fn polyline(&mut self, points: &[Point], attributes: AttributeSet) -> &mut Self {
        self.range.register_all(points);
        trace!(frame = %self.id, count = points.len(), "record polyline");
        self.intents.push(DrawIntent::Polyline {
            points: points.to_vec(),
            attributes,
        });
        self
    }

    /// Polyline from two coordinate slices, truncated to the shorter input.
    pub fn polyline_series(&mut self, xs: &[f64], ys: &[f64], attributes: AttributeSet) -> &mut Self {
        let points = to_points(xs, ys);
        self.polyline(&points, attributes)
    }

    pub fn polygon(&mut self, points: &[Point], attributes: AttributeSet) -> &mut Self {
        self.range.register_all(points);
        trace!(frame = %self.id, count = points.len(), "record polygon");
        self.intents.push(DrawIntent::Polygon {
            points: points.to_vec(),
            attributes,
        });
        self
    }

    /// Polygon from two coordinate slices, truncated to the shorter input.
    pub fn polygon_series(&mut self, xs: &[f64], ys: &[f64], attributes: AttributeSet) -> &mut Self {
        let points = to_points(xs, ys);
        self.polygon(&points, attributes)
    }

    /// Text anchored at a user-space point. Text never participates in
    /// auto-ranging.
    pub fn text(&mut self, x: f64, y: f64, text: &str, attributes: AttributeSet) -> &mut Self {
        self.intents.push(DrawIntent::Text {
            anchor: Point::new(x, y),
            text: text.to_owned(),
            attributes,
        });
        self
    }

    pub fn text_rotated(
        &mut self,
        x: f64,
        y: f64,
        angle_deg: f64,
        text: &str,
        attributes: AttributeSet,
    ) -> &mut Self {
        self.intents.push(DrawIntent::TextRotated {
            anchor: Point::new(x, y),
            angle_deg,
            text: text.to_owned(),
            attributes,
        });
        self
    }

    /// Caption with a leader line of `length_px` pixels at `angle_deg`
    /// degrees from the anchor.
    pub fn label(
        &mut self,
        x: f64,
        y: f64,
        length_px: f64,
        angle_deg: f64,
        text: &str,
        attributes: AttributeSet,
    ) -> &mut Self {
        self.intents.push(DrawIntent::Label {
            anchor: Point::new(x, y),
            length_px,
            angle_deg,
            text: text.to_owned(),
            attributes,
        });
        self
    }

    pub fn image(
        &mut self,
        href: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attributes: AttributeSet,
    ) -> &mut Self {
        let (top_left, bottom_right) = span_pair(x, y, width, height);
        self.range.register(top_left);
        self.range.register(bottom_right);
        self.intents.push(DrawIntent::Image {
            href: href.to_owned(),
            top_left,
            bottom_right,
            attributes,
        });
        self
    }

    pub fn foreign_object(
        &mut self,
        inner: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attributes: AttributeSet,
    ) -> &mut Self {
        let (top_left, bottom_right) = span_pair(x, y, width, height);
        self.range.register(top_left);
        self.range.register(bottom_right);
        self.intents.push(DrawIntent::ForeignObject {
            inner: inner.to_owned(),
            top_left,
            bottom_right,
            attributes,
        });
        self
    }

    /// HTML `<canvas>` element embedded at a user-space rectangle.
    pub fn html_canvas(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attributes: AttributeSet,
    ) -> &mut Self {
        let (top_left, bottom_right) = span_pair(x, y, width, height);
        self.range.register(top_left);
        self.range.register(bottom_right);
        self.intents.push(DrawIntent::HtmlCanvas {
            id: id.to_owned(),
            top_left,
            bottom_right,
            attributes,
        });
        self
    }

    /// Clip-path definition through arbitrary user-space points. The points do
    /// not participate in auto-ranging.
    pub fn clip_path(&mut self, id: &str, points: &[Point]) -> &mut Self {
        self.intents.push(DrawIntent::ClipPath {
            id: id.to_owned(),
            points: points.to_vec(),
        });
        self
    }

    /// Opens a group clipped to this frame's own clip definition.
    pub fn clip(&mut self, id: Option<&str>) -> &mut Self {
        let clip_ref = self.clip_id();
        let intent = match id {
            Some(group_id) => DrawIntent::GroupOpen {
                id: Some(group_id.to_owned()),
                attributes: AttributeSet::new().style(format!("clip-path: url(#{clip_ref});")),
            },
            None => DrawIntent::GroupOpen {
                id: None,
                attributes: AttributeSet::new().with("clip-path", format!("url(#{clip_ref})")),
            },
        };
        self.intents.push(intent);
        self
    }

    pub fn clip_end(&mut self) -> &mut Self {
        self.group_end()
    }

    pub fn group(&mut self, id: Option<&str>, attributes: AttributeSet) -> &mut Self {
        self.intents.push(DrawIntent::GroupOpen {
            id: id.map(str::to_owned),
            attributes,
        });
        self
    }

    pub fn group_end(&mut self) -> &mut Self {
        self.intents.push(DrawIntent::GroupClose);
        self
    }

    /// Grid lines aligned to the data: a range of 8..93 with spacing 10 puts
    /// lines at 10, 20 through 90.
    pub fn grid(&mut self, dx: f64, dy: f64, attributes: AttributeSet) -> &mut Self {
        let defaults = AttributeSet::new().stroke("lightgrey").stroke_width("0.4");
        self.intents.push(DrawIntent::Grid {
            dx,
            dy,
            attributes: attributes.merged_over(&defaults),
        });
        self
    }

    /// Axis tick marks below (x) and left of (y) the frame edges, sized in
    /// pixels.
    pub fn ticks(&mut self, dx: f64, dy: f64, size_px: f64, attributes: AttributeSet) -> &mut Self {
        let defaults = AttributeSet::new().stroke("black").stroke_width("1");
        self.intents.push(DrawIntent::Ticks {
            dx,
            dy,
            size_px,
            attributes: attributes.merged_over(&defaults),
        });
        self
    }

    /// Numeric labels along both axes, aligned like `grid`.
    pub fn axis_labels(&mut self, dx: f64, dy: f64, attributes: AttributeSet) -> &mut Self {
        self.intents.push(DrawIntent::AxisLabels {
            dx,
            dy,
            attributes,
        });
        self
    }

    /// Freezes this frame's bounds for the render pass.
    ///
    /// A frame whose only caller-issued intent is axis scaffolding (grid,
    /// ticks, axis labels) never observes data; its unresolved auto bounds
    /// fall back to the raw percentage placement.
    pub(crate) fn resolve_transform(&self, canvas: CanvasSize) -> PlotResult<FrameTransform> {
        let range = match self.range.resolve(&self.id) {
            Ok(range) => range,
            Err(err) => {
                if !self.is_scaffold_only() {
                    return Err(err);
                }
                debug!(frame = %self.id, "scaffold-only frame falls back to placement bounds");
                let mut fallback = self.range.clone();
                fallback.fill_from_placement(self.placement);
                fallback.resolve(&self.id)?
            }
        };
        Ok(FrameTransform::new(self.placement, range, canvas))
    }

    fn is_scaffold_only(&self) -> bool {
        self.intents.len() == self.preamble_len + 1
            && self.intents.last().is_some_and(DrawIntent::is_scaffold)
    }

    /// Resolves every intent in enqueue order and closes the frame group.
    pub(crate) fn render(&self, canvas: CanvasSize, writer: SvgWriter) -> PlotResult<String> {
        let transform = self.resolve_transform(canvas)?;
        trace!(frame = %self.id, intents = self.intents.len(), "resolve frame");
        let mut lines = Vec::with_capacity(self.intents.len() + 1);
        for intent in &self.intents {
            lines.push(intent.resolve(transform, writer));
        }
        lines.push(writer.group_close().to_owned());
        Ok(lines.join("\n"))
    }
}

/// Normalizes a rectangle to (minima, maxima) corners.
fn corner_pair(x: f64, y: f64, width: f64, height: f64) -> (Point, Point) {
    let (x0, x1) = ordered(x, x + width);
    let (y0, y1) = ordered(y, y + height);
    (Point::new(x0, y0), Point::new(x1, y1))
}

/// Normalizes an embedded-content rectangle to (top-left, bottom-right)
/// corners in user space, where the top-left carries the maximum y.
fn span_pair(x: f64, y: f64, width: f64, height: f64) -> (Point, Point) {
    let (x0, x1) = ordered(x, x + width);
    let (y1, y0) = ordered(y, y + height);
    (Point::new(x0, y0), Point::new(x1, y1))
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
