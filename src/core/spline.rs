use crate::core::solver::solve_augmented;
use crate::core::types::Point;
use crate::error::{PlotError, PlotResult};

/// Natural-boundary cubic spline over one coordinate channel.
///
/// Knot slopes come from a Hermite formulation: interior equations relate each
/// knot's slope to its neighbors weighted by inverse spacing, and one-sided
/// conditions at both ends close the system. The system is dense and solved
/// once per fit.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    slopes: Vec<f64>,
}

impl CubicSpline {
    /// Fits knot slopes for `values` anchored at strictly increasing `knots`.
    pub fn fit(knots: &[f64], values: &[f64]) -> PlotResult<Self> {
        let count = knots.len().min(values.len());
        if count < 2 {
            return Err(PlotError::InsufficientSamples { count });
        }
        let knots = &knots[..count];
        let values = &values[..count];
        for value in knots.iter().chain(values.iter()) {
            if !value.is_finite() {
                return Err(PlotError::InvalidData(
                    "spline knots and values must be finite".to_owned(),
                ));
            }
        }

        let last = count - 1;
        let mut matrix = vec![vec![0.0; count + 1]; count];

        for i in 1..last {
            let left = 1.0 / (knots[i] - knots[i - 1]);
            let right = 1.0 / (knots[i + 1] - knots[i]);
            matrix[i][i - 1] = left;
            matrix[i][i] = 2.0 * (left + right);
            matrix[i][i + 1] = right;
            matrix[i][count] = 3.0
                * ((values[i] - values[i - 1]) * left * left
                    + (values[i + 1] - values[i]) * right * right);
        }

        let head = 1.0 / (knots[1] - knots[0]);
        matrix[0][0] = 2.0 * head;
        matrix[0][1] = head;
        matrix[0][count] = 3.0 * (values[1] - values[0]) * head * head;

        let tail = 1.0 / (knots[last] - knots[last - 1]);
        matrix[last][last - 1] = tail;
        matrix[last][last] = 2.0 * tail;
        matrix[last][count] = 3.0 * (values[last] - values[last - 1]) * tail * tail;

        let slopes = solve_augmented(&mut matrix)?;

        Ok(Self {
            knots: knots.to_vec(),
            values: values.to_vec(),
            slopes,
        })
    }

    /// Evaluates the Hermite cubic at `count` samples starting at `start` with
    /// spacing `step`.
    ///
    /// Sample parameters must be non-decreasing; the knot-interval cursor only
    /// advances forward and clamps at the last knot so floating accumulation
    /// past the final parameter stays in the last segment.
    #[must_use]
    pub fn sample(&self, start: f64, step: f64, count: usize) -> Vec<f64> {
        let last = self.knots.len() - 1;
        let mut output = Vec::with_capacity(count);
        let mut interval = 1;
        let mut x = start;
        for _ in 0..count {
            while interval < last && self.knots[interval] < x {
                interval += 1;
            }
            let width = self.knots[interval] - self.knots[interval - 1];
            let t = (x - self.knots[interval - 1]) / width;
            let rise = self.values[interval] - self.values[interval - 1];
            let a = self.slopes[interval - 1] * width - rise;
            let b = -self.slopes[interval] * width + rise;
            let value = (1.0 - t) * self.values[interval - 1]
                + t * self.values[interval]
                + t * (1.0 - t) * (a * (1.0 - t) + b * t);
            output.push(value);
            x += step;
        }
        output
    }
}

/// Resamples an ordered point sequence into `points.len() * multiplier` points
/// approximating a smooth curve through the originals.
///
/// Both channels are parametrized by uniform knots in [0, 1] and fitted
/// independently.
pub fn resample_points(points: &[Point], multiplier: usize) -> PlotResult<Vec<Point>> {
    if points.len() < 2 {
        return Err(PlotError::InsufficientSamples {
            count: points.len(),
        });
    }
    if multiplier == 0 {
        return Err(PlotError::InvalidData(
            "resample multiplier must be >= 1".to_owned(),
        ));
    }

    let knots = uniform_params(points.len());
    let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
    let ys: Vec<f64> = points.iter().map(|point| point.y).collect();

    let (x_spline, y_spline) = fit_channels(&knots, &xs, &ys)?;

    let output_len = points.len() * multiplier;
    let step = 1.0 / (output_len - 1) as f64;
    let x_samples = x_spline.sample(0.0, step, output_len);
    let y_samples = y_spline.sample(0.0, step, output_len);

    Ok(x_samples
        .into_iter()
        .zip(y_samples)
        .map(|(x, y)| Point::new(x, y))
        .collect())
}

/// Convenience wrapper zipping two coordinate slices before resampling,
/// truncating to the shorter input.
pub fn resample_series(xs: &[f64], ys: &[f64], multiplier: usize) -> PlotResult<Vec<Point>> {
    resample_points(&crate::core::types::to_points(xs, ys), multiplier)
}

#[cfg(feature = "parallel-resample")]
fn fit_channels(knots: &[f64], xs: &[f64], ys: &[f64]) -> PlotResult<(CubicSpline, CubicSpline)> {
    let (x_spline, y_spline) = rayon::join(
        || CubicSpline::fit(knots, xs),
        || CubicSpline::fit(knots, ys),
    );
    Ok((x_spline?, y_spline?))
}

#[cfg(not(feature = "parallel-resample"))]
fn fit_channels(knots: &[f64], xs: &[f64], ys: &[f64]) -> PlotResult<(CubicSpline, CubicSpline)> {
    Ok((CubicSpline::fit(knots, xs)?, CubicSpline::fit(knots, ys)?))
}

/// `count` uniformly spaced parameters spanning [0, 1].
fn uniform_params(count: usize) -> Vec<f64> {
    let step = 1.0 / (count - 1) as f64;
    let mut params = Vec::with_capacity(count);
    let mut value = 0.0;
    for _ in 0..count {
        params.push(value);
        value += step;
    }
    params
}

#[cfg(test)]
mod tests {
    use super::{CubicSpline, resample_points, uniform_params};
    use crate::core::types::Point;
    use crate::error::PlotError;

    #[test]
    fn fit_rejects_single_knot() {
        let err = CubicSpline::fit(&[0.0], &[1.0]).expect_err("single knot");
        assert!(matches!(err, PlotError::InsufficientSamples { count: 1 }));
    }

    #[test]
    fn two_knots_interpolate_linearly() {
        let spline = CubicSpline::fit(&[0.0, 1.0], &[0.0, 10.0]).expect("fit line");
        let samples = spline.sample(0.0, 0.25, 5);
        for (index, sample) in samples.iter().enumerate() {
            let expected = 2.5 * index as f64;
            assert!((sample - expected).abs() <= 1e-9);
        }
    }

    #[test]
    fn zero_multiplier_is_rejected() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let err = resample_points(&points, 0).expect_err("zero multiplier");
        assert!(matches!(err, PlotError::InvalidData(_)));
    }

    #[test]
    fn uniform_params_span_unit_interval() {
        let params = uniform_params(5);
        assert_eq!(params.len(), 5);
        assert!((params[0]).abs() <= 1e-12);
        assert!((params[4] - 1.0).abs() <= 1e-9);
    }
}
