use proptest::prelude::*;
use svgplot_rs::core::{CanvasSize, FrameTransform, Placement, Point, ResolvedRange};

proptest! {
    #[test]
    fn frame_corners_project_onto_pixel_rectangle(
        left in 0.0f64..70.0,
        bottom in 0.0f64..70.0,
        width in 5.0f64..30.0,
        height in 5.0f64..30.0,
        canvas_width in 50u32..4000,
        canvas_height in 50u32..4000,
        x_min in -1_000.0f64..1_000.0,
        x_span in 0.001f64..2_000.0,
        y_min in -1_000.0f64..1_000.0,
        y_span in 0.001f64..2_000.0
    ) {
        let placement = Placement::new(left, bottom, width, height);
        let canvas = CanvasSize::new(canvas_width, canvas_height);
        let range = ResolvedRange {
            x_min,
            x_max: x_min + x_span,
            y_min,
            y_max: y_min + y_span,
        };
        let transform = FrameTransform::new(placement, range, canvas);
        let rect = transform.pixel_rect();

        let lower_left = transform.project(Point::new(range.x_min, range.y_min));
        let upper_right = transform.project(Point::new(range.x_max, range.y_max));

        let tolerance = 1e-9 * f64::from(canvas_width.max(canvas_height));
        prop_assert!((lower_left.x - rect.left).abs() <= tolerance);
        prop_assert!((lower_left.y - (rect.top + rect.height)).abs() <= tolerance);
        prop_assert!((upper_right.x - (rect.left + rect.width)).abs() <= tolerance);
        prop_assert!((upper_right.y - rect.top).abs() <= tolerance);
    }

    #[test]
    fn projection_is_monotonic_in_x(
        x_a in -500.0f64..500.0,
        delta in 0.001f64..100.0
    ) {
        let transform = FrameTransform::new(
            Placement::full_canvas(),
            ResolvedRange { x_min: -1_000.0, x_max: 1_000.0, y_min: 0.0, y_max: 1.0 },
            CanvasSize::new(800, 600),
        );

        let first = transform.project(Point::new(x_a, 0.5));
        let second = transform.project(Point::new(x_a + delta, 0.5));
        prop_assert!(second.x > first.x);
    }
}
