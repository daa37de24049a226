pub mod geometry;
pub mod solver;
pub mod spline;
pub mod types;

pub use geometry::{
    AutoRange, Bound, FrameTransform, Placement, PixelRect, RangeSpec, ResolvedRange,
};
pub use solver::solve_augmented;
pub use spline::{CubicSpline, resample_points, resample_series};
pub use types::{CanvasSize, Point, to_points};
