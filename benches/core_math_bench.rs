use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use svgplot_rs::api::{Document, FrameSpec};
use svgplot_rs::core::{Placement, Point, resample_points, solve_augmented};
use svgplot_rs::render::AttributeSet;

fn bench_spline_resample_256(c: &mut Criterion) {
    let points: Vec<Point> = (0..256)
        .map(|i| {
            let t = f64::from(i);
            Point::new(t, (t * 0.1).sin() * 50.0 + 100.0)
        })
        .collect();

    c.bench_function("spline_resample_256x4", |b| {
        b.iter(|| resample_points(black_box(&points), black_box(4)).expect("resample"))
    });
}

fn bench_solver_dense_64(c: &mut Criterion) {
    c.bench_function("solver_dense_64", |b| {
        b.iter(|| {
            let mut matrix = diagonally_dominant_system(64);
            solve_augmented(black_box(&mut matrix)).expect("solvable system")
        })
    });
}

fn bench_document_render_2k_points(c: &mut Criterion) {
    let points: Vec<Point> = (0..2_000)
        .map(|i| {
            let t = f64::from(i);
            Point::new(t, (t * 0.05).cos() * 20.0)
        })
        .collect();

    let mut doc = Document::new(1920, 1080).expect("document");
    let plot = doc
        .add_frame(
            "plot",
            FrameSpec::new(Placement::new(5.0, 5.0, 90.0, 90.0)),
            AttributeSet::new(),
        )
        .expect("frame");
    doc.frame_mut(plot)
        .polyline(&points, AttributeSet::new().stroke("steelblue"))
        .grid(100.0, 10.0, AttributeSet::new());

    c.bench_function("document_render_2k_points", |b| {
        b.iter(|| black_box(&doc).render().expect("render"))
    });
}

fn diagonally_dominant_system(size: usize) -> Vec<Vec<f64>> {
    let mut matrix = vec![vec![0.0; size + 1]; size];
    for (row, entries) in matrix.iter_mut().enumerate() {
        for column in 0..size {
            entries[column] = if row == column {
                4.0
            } else if row.abs_diff(column) == 1 {
                1.0
            } else {
                0.0
            };
        }
        entries[size] = 1.0 + row as f64 * 0.25;
    }
    matrix
}

criterion_group!(
    benches,
    bench_spline_resample_256,
    bench_solver_dense_64,
    bench_document_render_2k_points
);
criterion_main!(benches);
