use smallvec::SmallVec;

use crate::core::{FrameTransform, Point};
use crate::render::{AttributeSet, PathData, PolyKind, SvgWriter, format_number};

/// One recorded drawing operation, captured in raw user-space coordinates.
///
/// Intents are appended during the record phase and only projected to pixel
/// space when the render pass resolves the owning frame, so they always see
/// the frame's final auto-ranged bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawIntent {
    GroupOpen {
        id: Option<String>,
        attributes: AttributeSet,
    },
    GroupClose,
    /// Clip-path definition covering the frame's data rectangle.
    FrameClip { clip_id: String },
    /// Frame background/outline rectangle.
    FrameArea { attributes: AttributeSet },
    Line {
        from: Point,
        to: Point,
        attributes: AttributeSet,
    },
    /// Corners normalized so `lo` holds both minima.
    Rect {
        lo: Point,
        hi: Point,
        attributes: AttributeSet,
    },
    /// Radius in pixels; a negative radius requests a data-scaled radius
    /// derived from the projected probe points.
    Circle {
        center: Point,
        radius_px: f64,
        attributes: AttributeSet,
    },
    Circles {
        centers: Vec<Point>,
        radius_px: f64,
        attributes: AttributeSet,
    },
    /// Radii in pixels; only the center participates in auto-ranging.
    Ellipse {
        center: Point,
        rx_px: f64,
        ry_px: f64,
        attributes: AttributeSet,
    },
    /// Consecutive point pairs become disconnected segments.
    Dash {
        points: Vec<Point>,
        attributes: AttributeSet,
    },
    Polyline {
        points: Vec<Point>,
        attributes: AttributeSet,
    },
    Polygon {
        points: Vec<Point>,
        attributes: AttributeSet,
    },
    Text {
        anchor: Point,
        text: String,
        attributes: AttributeSet,
    },
    TextRotated {
        anchor: Point,
        angle_deg: f64,
        text: String,
        attributes: AttributeSet,
    },
    /// Leader line plus caption; the line length and angle are pixel-space.
    Label {
        anchor: Point,
        length_px: f64,
        angle_deg: f64,
        text: String,
        attributes: AttributeSet,
    },
    /// Corners normalized so `top_left` holds the minimum x and maximum y.
    Image {
        href: String,
        top_left: Point,
        bottom_right: Point,
        attributes: AttributeSet,
    },
    ForeignObject {
        inner: String,
        top_left: Point,
        bottom_right: Point,
        attributes: AttributeSet,
    },
    HtmlCanvas {
        id: String,
        top_left: Point,
        bottom_right: Point,
        attributes: AttributeSet,
    },
    ClipPath { id: String, points: Vec<Point> },
    Grid {
        dx: f64,
        dy: f64,
        attributes: AttributeSet,
    },
    Ticks {
        dx: f64,
        dy: f64,
        size_px: f64,
        attributes: AttributeSet,
    },
    AxisLabels {
        dx: f64,
        dy: f64,
        attributes: AttributeSet,
    },
}

impl DrawIntent {
    /// Axis-scaffolding intents may fall back to placement-derived bounds when
    /// a frame carries no plotted geometry.
    #[must_use]
    pub fn is_scaffold(&self) -> bool {
        matches!(
            self,
            DrawIntent::Grid { .. } | DrawIntent::Ticks { .. } | DrawIntent::AxisLabels { .. }
        )
    }

    /// Projects this intent into markup through the frame's finalized
    /// transform.
    pub(crate) fn resolve(&self, transform: FrameTransform, writer: SvgWriter) -> String {
        match self {
            DrawIntent::GroupOpen { id, attributes } => {
                writer.group_open(id.as_deref(), attributes)
            }
            DrawIntent::GroupClose => writer.group_close().to_owned(),
            DrawIntent::FrameClip { clip_id } => {
                let range = transform.range();
                let corners = [
                    Point::new(range.x_min, range.y_min),
                    Point::new(range.x_max, range.y_min),
                    Point::new(range.x_max, range.y_max),
                    Point::new(range.x_min, range.y_max),
                ];
                writer.clip_path(clip_id, &PathData::polygon(&transform.project_all(&corners)))
            }
            DrawIntent::FrameArea { attributes } => {
                let range = transform.range();
                let lo = transform.project(Point::new(range.x_min, range.y_min));
                let hi = transform.project(Point::new(range.x_max, range.y_max));
                writer.rect(lo.x, lo.y, hi.x - lo.x, hi.y - lo.y, attributes)
            }
            DrawIntent::Line {
                from,
                to,
                attributes,
            } => {
                let from = transform.project(*from);
                let to = transform.project(*to);
                writer.line(from.x, from.y, to.x, to.y, attributes)
            }
            DrawIntent::Rect { lo, hi, attributes } => {
                let lo = transform.project(*lo);
                let hi = transform.project(*hi);
                writer.rect(lo.x, lo.y, hi.x - lo.x, hi.y - lo.y, attributes)
            }
            DrawIntent::Circle {
                center,
                radius_px,
                attributes,
            } => resolve_circle(transform, writer, *center, *radius_px, attributes),
            DrawIntent::Circles {
                centers,
                radius_px,
                attributes,
            } => centers
                .iter()
                .map(|center| {
                    let projected = transform.project(*center);
                    writer.circle(projected.x, projected.y, *radius_px, attributes)
                })
                .collect::<Vec<_>>()
                .join("\n"),
            DrawIntent::Ellipse {
                center,
                rx_px,
                ry_px,
                attributes,
            } => {
                let projected = transform.project(*center);
                writer.ellipse(projected.x, projected.y, *rx_px, *ry_px, attributes)
            }
            DrawIntent::Dash { points, attributes } => {
                let projected = transform.project_all(points);
                let mut path = PathData::new();
                for pair in projected.chunks_exact(2) {
                    path.move_to(pair[0]);
                    path.line_to(pair[1]);
                }
                writer.path(&path, attributes)
            }
            DrawIntent::Polyline { points, attributes } => writer.poly(
                PolyKind::Polyline,
                &PathData::coords(&transform.project_all(points)),
                attributes,
            ),
            DrawIntent::Polygon { points, attributes } => writer.poly(
                PolyKind::Polygon,
                &PathData::coords(&transform.project_all(points)),
                attributes,
            ),
            DrawIntent::Text {
                anchor,
                text,
                attributes,
            } => {
                let projected = transform.project(*anchor);
                writer.text(projected.x, projected.y, text, attributes)
            }
            DrawIntent::TextRotated {
                anchor,
                angle_deg,
                text,
                attributes,
            } => {
                let projected = transform.project(*anchor);
                writer.text_rotated(projected.x, projected.y, *angle_deg, text, attributes)
            }
            DrawIntent::Label {
                anchor,
                length_px,
                angle_deg,
                text,
                attributes,
            } => resolve_label(
                transform, writer, *anchor, *length_px, *angle_deg, text, attributes,
            ),
            DrawIntent::Image {
                href,
                top_left,
                bottom_right,
                attributes,
            } => {
                let lo = transform.project(*top_left);
                let hi = transform.project(*bottom_right);
                writer.image(href, lo.x, lo.y, hi.x - lo.x, hi.y - lo.y, attributes)
            }
            DrawIntent::ForeignObject {
                inner,
                top_left,
                bottom_right,
                attributes,
            } => {
                let lo = transform.project(*top_left);
                let hi = transform.project(*bottom_right);
                writer.foreign_object(inner, lo.x, lo.y, hi.x - lo.x, hi.y - lo.y, attributes)
            }
            DrawIntent::HtmlCanvas {
                id,
                top_left,
                bottom_right,
                attributes,
            } => {
                let lo = transform.project(*top_left);
                let hi = transform.project(*bottom_right);
                writer.html_canvas(id, lo.x, lo.y, hi.x - lo.x, hi.y - lo.y, attributes)
            }
            DrawIntent::ClipPath { id, points } => {
                writer.clip_path(id, &PathData::polygon(&transform.project_all(points)))
            }
            DrawIntent::Grid { dx, dy, attributes } => {
                resolve_grid(transform, writer, *dx, *dy, attributes)
            }
            DrawIntent::Ticks {
                dx,
                dy,
                size_px,
                attributes,
            } => resolve_ticks(transform, writer, *dx, *dy, *size_px, attributes),
            DrawIntent::AxisLabels { dx, dy, attributes } => {
                resolve_axis_labels(transform, writer, *dx, *dy, attributes)
            }
        }
    }
}

/// Probe points registered and projected for one circle: center plus the four
/// axis-aligned rim points.
pub(crate) fn circle_probes(center: Point, radius: f64) -> SmallVec<[Point; 5]> {
    let mut probes = SmallVec::new();
    probes.push(center);
    probes.push(Point::new(center.x, center.y + radius));
    probes.push(Point::new(center.x + radius, center.y));
    probes.push(Point::new(center.x, center.y - radius));
    probes.push(Point::new(center.x - radius, center.y));
    probes
}

fn resolve_circle(
    transform: FrameTransform,
    writer: SvgWriter,
    center: Point,
    radius_px: f64,
    attributes: &AttributeSet,
) -> String {
    let probes = circle_probes(center, radius_px);
    let projected: SmallVec<[Point; 5]> =
        probes.iter().map(|probe| transform.project(*probe)).collect();
    let center = projected[0];
    let radius = if radius_px >= 0.0 {
        radius_px
    } else {
        // Negative radius requests a data-scaled radius: mean of the projected
        // vertical and horizontal probe spans, halved.
        ((projected[1].y - projected[3].y).abs() + (projected[2].x - projected[4].x).abs()) / 4.0
    };
    writer.circle(center.x, center.y, radius, attributes)
}

fn resolve_label(
    transform: FrameTransform,
    writer: SvgWriter,
    anchor: Point,
    length_px: f64,
    angle_deg: f64,
    text: &str,
    attributes: &AttributeSet,
) -> String {
    let start = transform.project(anchor);
    let angle = angle_deg.to_radians();
    let end_x = start.x + length_px * angle.cos();
    let end_y = start.y - length_px * angle.sin();

    let line_defaults = AttributeSet::new().stroke("black").stroke_width("0.5");
    let line_attributes = attributes.merged_over(&line_defaults);
    let mut text_attributes = attributes.clone();
    text_attributes.remove("stroke");
    text_attributes.remove("stroke-width");

    format!(
        "{}\n{}",
        writer.line(start.x, start.y, end_x, end_y, &line_attributes),
        writer.text(end_x, end_y, text, &text_attributes)
    )
}

fn resolve_grid(
    transform: FrameTransform,
    writer: SvgWriter,
    dx: f64,
    dy: f64,
    attributes: &AttributeSet,
) -> String {
    let range = transform.range();
    let mut path = PathData::new();
    if dx > 0.0 {
        let mut x = range.x_min - (range.x_min % dx).abs() + dx;
        while x < range.x_max {
            path.move_to(transform.project(Point::new(x, range.y_min)));
            path.line_to(transform.project(Point::new(x, range.y_max)));
            x += dx;
        }
    }
    if dy > 0.0 {
        let mut y = range.y_min - (range.y_min % dy).abs() + dy;
        while y < range.y_max {
            path.move_to(transform.project(Point::new(range.x_min, y)));
            path.line_to(transform.project(Point::new(range.x_max, y)));
            y += dy;
        }
    }
    writer.path(&path, attributes)
}

fn resolve_ticks(
    transform: FrameTransform,
    writer: SvgWriter,
    dx: f64,
    dy: f64,
    size_px: f64,
    attributes: &AttributeSet,
) -> String {
    let range = transform.range();
    let mut path = PathData::new();
    if dx > 0.0 {
        let mut x = range.x_min - (range.x_min % dx).abs() + dx;
        while x < range.x_max {
            let base = transform.project(Point::new(x, range.y_min));
            path.move_to(base);
            path.line_to(Point::new(base.x, base.y + size_px));
            x += dx;
        }
    }
    if dy > 0.0 {
        let mut y = range.y_min - (range.y_min % dy).abs() + dy;
        while y < range.y_max {
            let base = transform.project(Point::new(range.x_min, y));
            path.move_to(base);
            path.line_to(Point::new(base.x - size_px, base.y));
            y += dy;
        }
    }
    writer.path(&path, attributes)
}

fn resolve_axis_labels(
    transform: FrameTransform,
    writer: SvgWriter,
    dx: f64,
    dy: f64,
    attributes: &AttributeSet,
) -> String {
    let range = transform.range();
    let mut lines = Vec::new();
    if dx > 0.0 {
        let group = AttributeSet::new()
            .transform("translate(0 20)")
            .text_anchor("middle");
        lines.push(writer.group_open(None, &group));
        let aligned = range.x_min - round_to(range.x_min % dx, 4);
        let mut x = if aligned < range.x_min {
            aligned + dx
        } else {
            aligned
        };
        while x < range.x_max {
            let caption = format_number(round_to(x, 4), 4);
            let projected = transform.project(Point::new(x, range.y_min));
            lines.push(writer.text(projected.x, projected.y, &caption, attributes));
            x += dx;
        }
        lines.push(writer.group_close().to_owned());
    }
    if dy > 0.0 {
        let group = AttributeSet::new()
            .transform("translate(-7 5)")
            .text_anchor("end");
        lines.push(writer.group_open(None, &group));
        let aligned = range.y_min - round_to(range.y_min % dy, 4);
        let mut y = if aligned <= range.y_min {
            aligned + dy
        } else {
            aligned
        };
        while y < range.y_max {
            let caption = format_number(round_to(y, 4), 4);
            let projected = transform.project(Point::new(range.x_min, y));
            lines.push(writer.text(projected.x, projected.y, &caption, attributes));
            y += dy;
        }
        lines.push(writer.group_close().to_owned());
    }
    lines.join("\n")
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
