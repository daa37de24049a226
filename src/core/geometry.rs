use serde::{Deserialize, Serialize};

use crate::core::types::{CanvasSize, Point};
use crate::error::{Axis, PlotError, PlotResult};

/// Frame placement expressed as percentages of the shared canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    #[must_use]
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    /// Placement covering the whole canvas, used by the root frame.
    #[must_use]
    pub const fn full_canvas() -> Self {
        Self::new(0.0, 0.0, 100.0, 100.0)
    }

    pub fn validate(self) -> PlotResult<()> {
        for (field, value) in [
            ("left", self.left),
            ("bottom", self.bottom),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "placement field `{field}` must be finite"
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(PlotError::InvalidData(
                "placement width and height must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Resolves percentage placement against canvas pixel dimensions.
    #[must_use]
    pub fn pixel_rect(self, canvas: CanvasSize) -> PixelRect {
        let canvas_width = f64::from(canvas.width);
        let canvas_height = f64::from(canvas.height);
        let left = self.left * canvas_width / 100.0;
        let bottom = self.bottom * canvas_height / 100.0;
        let width = self.width * canvas_width / 100.0;
        let height = self.height * canvas_height / 100.0;
        PixelRect {
            left,
            top: canvas_height - bottom - height,
            width,
            height,
        }
    }
}

/// One data-range bound: caller-fixed or determined from drawn data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Bound {
    #[default]
    Auto,
    Fixed(f64),
}

/// Per-frame data-range configuration for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RangeSpec {
    pub x_min: Bound,
    pub x_max: Bound,
    pub y_min: Bound,
    pub y_max: Bound,
}

impl RangeSpec {
    /// All four bounds determined from drawn data.
    #[must_use]
    pub const fn auto() -> Self {
        Self {
            x_min: Bound::Auto,
            x_max: Bound::Auto,
            y_min: Bound::Auto,
            y_max: Bound::Auto,
        }
    }

    #[must_use]
    pub const fn fixed(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min: Bound::Fixed(x_min),
            x_max: Bound::Fixed(x_max),
            y_min: Bound::Fixed(y_min),
            y_max: Bound::Fixed(y_max),
        }
    }

    #[must_use]
    pub const fn with_x(mut self, x_min: f64, x_max: f64) -> Self {
        self.x_min = Bound::Fixed(x_min);
        self.x_max = Bound::Fixed(x_max);
        self
    }

    #[must_use]
    pub const fn with_y(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = Bound::Fixed(y_min);
        self.y_max = Bound::Fixed(y_max);
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        for bound in [self.x_min, self.x_max, self.y_min, self.y_max] {
            if let Bound::Fixed(value) = bound {
                if !value.is_finite() {
                    return Err(PlotError::InvalidData(
                        "fixed range bounds must be finite".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Record-phase state of one bound.
///
/// Auto bounds carry the observed extreme so far; `None` means no drawing call
/// has registered a point on this axis yet.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BoundState {
    Fixed(f64),
    Auto(Option<f64>),
}

impl BoundState {
    fn from_bound(bound: Bound) -> Self {
        match bound {
            Bound::Auto => BoundState::Auto(None),
            Bound::Fixed(value) => BoundState::Fixed(value),
        }
    }

    fn widen_min(&mut self, candidate: f64) {
        if let BoundState::Auto(observed) = self {
            match observed {
                Some(current) if *current <= candidate => {}
                _ => *observed = Some(candidate),
            }
        }
    }

    fn widen_max(&mut self, candidate: f64) {
        if let BoundState::Auto(observed) = self {
            match observed {
                Some(current) if *current >= candidate => {}
                _ => *observed = Some(candidate),
            }
        }
    }

    fn value(self) -> Option<f64> {
        match self {
            BoundState::Fixed(value) => Some(value),
            BoundState::Auto(observed) => observed,
        }
    }

    fn fill_unobserved(&mut self, fallback: f64) {
        if let BoundState::Auto(None) = self {
            *self = BoundState::Auto(Some(fallback));
        }
    }
}

/// Auto-range tracker updated by every bound-affecting drawing call.
///
/// Bounds widen monotonically toward observed data during the record phase and
/// are only read back when the render pass resolves the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoRange {
    x_min: BoundState,
    x_max: BoundState,
    y_min: BoundState,
    y_max: BoundState,
}

impl AutoRange {
    #[must_use]
    pub fn new(spec: RangeSpec) -> Self {
        Self {
            x_min: BoundState::from_bound(spec.x_min),
            x_max: BoundState::from_bound(spec.x_max),
            y_min: BoundState::from_bound(spec.y_min),
            y_max: BoundState::from_bound(spec.y_max),
        }
    }

    /// Widens every auto bound touched by `point`. Fixed bounds are never moved.
    pub fn register(&mut self, point: Point) {
        self.x_min.widen_min(point.x);
        self.x_max.widen_max(point.x);
        self.y_min.widen_min(point.y);
        self.y_max.widen_max(point.y);
    }

    pub fn register_all(&mut self, points: &[Point]) {
        for point in points {
            self.register(*point);
        }
    }

    /// Fills any still-unobserved auto bound from raw placement percentages.
    ///
    /// Used by scaffold-only frames (grid/ticks/axis labels with no plotted
    /// geometry) where no data point ever arrived.
    pub(crate) fn fill_from_placement(&mut self, placement: Placement) {
        self.x_min.fill_unobserved(placement.left);
        self.x_max.fill_unobserved(placement.left + placement.width);
        self.y_min.fill_unobserved(placement.bottom);
        self.y_max.fill_unobserved(placement.bottom + placement.height);
    }

    /// Freezes the bounds into concrete numbers for the render pass.
    pub fn resolve(&self, frame: &str) -> PlotResult<ResolvedRange> {
        let x_min = resolve_bound(self.x_min, frame, Axis::X, "min")?;
        let x_max = resolve_bound(self.x_max, frame, Axis::X, "max")?;
        let y_min = resolve_bound(self.y_min, frame, Axis::Y, "min")?;
        let y_max = resolve_bound(self.y_max, frame, Axis::Y, "max")?;

        if x_min == x_max {
            return Err(degenerate(frame, Axis::X, "min equals max"));
        }
        if y_min == y_max {
            return Err(degenerate(frame, Axis::Y, "min equals max"));
        }

        Ok(ResolvedRange {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

fn resolve_bound(state: BoundState, frame: &str, axis: Axis, side: &str) -> PlotResult<f64> {
    state
        .value()
        .ok_or_else(|| degenerate(frame, axis, &format!("auto {side} never observed any data")))
}

fn degenerate(frame: &str, axis: Axis, detail: &str) -> PlotError {
    PlotError::DegenerateRange {
        frame: frame.to_owned(),
        axis,
        detail: detail.to_owned(),
    }
}

/// Concrete data bounds after the record phase, guaranteed non-degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Absolute pixel rectangle of one frame on the shared canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Finalized user-space to pixel-space projection for one frame.
///
/// Pixel Y grows downward while user Y grows upward, so the Y channel is
/// inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    range: ResolvedRange,
    rect: PixelRect,
}

impl FrameTransform {
    #[must_use]
    pub fn new(placement: Placement, range: ResolvedRange, canvas: CanvasSize) -> Self {
        Self {
            range,
            rect: placement.pixel_rect(canvas),
        }
    }

    #[must_use]
    pub fn range(self) -> ResolvedRange {
        self.range
    }

    #[must_use]
    pub fn pixel_rect(self) -> PixelRect {
        self.rect
    }

    /// Maps one user-space point to absolute canvas pixels.
    #[must_use]
    pub fn project(self, point: Point) -> Point {
        let x_span = self.range.x_max - self.range.x_min;
        let y_span = self.range.y_max - self.range.y_min;
        Point {
            x: (point.x - self.range.x_min) / x_span * self.rect.width + self.rect.left,
            y: (1.0 - (point.y - self.range.y_min) / y_span) * self.rect.height + self.rect.top,
        }
    }

    #[must_use]
    pub fn project_all(self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|point| self.project(*point)).collect()
    }
}
