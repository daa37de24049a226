use approx::assert_relative_eq;
use svgplot_rs::core::{Point, resample_points, resample_series, solve_augmented, to_points};
use svgplot_rs::error::PlotError;

#[test]
fn solver_diagonal_augmented_system() {
    let mut matrix = vec![vec![2.0, 0.0, 4.0], vec![0.0, 3.0, 9.0]];
    let solution = solve_augmented(&mut matrix).expect("solvable system");
    assert_relative_eq!(solution[0], 2.0, max_relative = 1e-12);
    assert_relative_eq!(solution[1], 3.0, max_relative = 1e-12);
}

#[test]
fn solver_full_three_by_three() {
    // x = 1, y = -2, z = 3
    let mut matrix = vec![
        vec![2.0, 1.0, -1.0, -3.0],
        vec![-3.0, -1.0, 2.0, 5.0],
        vec![-2.0, 1.0, 2.0, 2.0],
    ];
    let solution = solve_augmented(&mut matrix).expect("solvable system");
    assert_relative_eq!(solution[0], 1.0, max_relative = 1e-9);
    assert_relative_eq!(solution[1], -2.0, max_relative = 1e-9);
    assert_relative_eq!(solution[2], 3.0, max_relative = 1e-9);
}

#[test]
fn resample_output_length_is_input_times_multiplier() {
    let points: Vec<Point> = (0..7)
        .map(|i| Point::new(f64::from(i), f64::from(i * i)))
        .collect();
    let smooth = resample_points(&points, 5).expect("resample");
    assert_eq!(smooth.len(), 35);
}

#[test]
fn linear_input_stays_linear() {
    let points = to_points(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0]);
    let smooth = resample_points(&points, 4).expect("resample");

    assert_eq!(smooth.len(), 16);
    for point in &smooth {
        assert!((point.y - point.x).abs() <= 1e-9);
    }
    // Endpoints are anchored exactly at the original extremes.
    assert!((smooth[0].x).abs() <= 1e-9);
    assert!((smooth[15].x - 3.0).abs() <= 1e-9);
}

#[test]
fn resampled_curve_passes_near_knots() {
    let points = to_points(&[0.0, 1.0, 2.0], &[0.0, 4.0, 0.0]);
    let smooth = resample_points(&points, 3).expect("resample");

    // First and last output samples coincide with the end knots.
    assert_relative_eq!(smooth[0].y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(smooth[8].y, 0.0, epsilon = 1e-9);

    // The interior peak stays close to the middle knot value.
    let peak = smooth
        .iter()
        .map(|point| point.y)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(peak >= 4.0 - 1e-9);
}

#[test]
fn single_point_is_rejected() {
    let err = resample_points(&[Point::new(0.0, 0.0)], 3).expect_err("too few samples");
    assert!(matches!(err, PlotError::InsufficientSamples { count: 1 }));
}

#[test]
fn series_helper_truncates_to_shorter_input() {
    let smooth = resample_series(&[0.0, 1.0, 2.0, 99.0], &[0.0, 1.0, 2.0], 2).expect("resample");
    assert_eq!(smooth.len(), 6);
}
