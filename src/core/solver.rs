use crate::error::{PlotError, PlotResult};

/// Pivots with magnitude at or below this threshold are treated as singular.
const PIVOT_EPSILON: f64 = 1e-12;

/// Solves a dense linear system packed as an augmented n x (n+1) matrix.
///
/// Gaussian elimination with partial pivoting: for each column the
/// largest-magnitude candidate row at or below the pivot row is swapped into
/// place before eliminating below it, then the triangular system is
/// back-substituted from the last row upward.
///
/// The matrix is consumed in place. Expected system sizes are small (spline
/// knot counts), so the O(n^3) elimination is not a hot path.
pub fn solve_augmented(matrix: &mut [Vec<f64>]) -> PlotResult<Vec<f64>> {
    let rows = matrix.len();
    for (index, row) in matrix.iter().enumerate() {
        if row.len() != rows + 1 {
            return Err(PlotError::InvalidData(format!(
                "augmented matrix row {index} has {} columns, expected {}",
                row.len(),
                rows + 1
            )));
        }
    }

    for pivot_row in 0..rows {
        let selected = (pivot_row..rows)
            .max_by(|&a, &b| {
                matrix[a][pivot_row]
                    .abs()
                    .total_cmp(&matrix[b][pivot_row].abs())
            })
            .unwrap_or(pivot_row);
        matrix.swap(pivot_row, selected);

        let pivot = matrix[pivot_row][pivot_row];
        if !pivot.is_finite() || pivot.abs() <= PIVOT_EPSILON {
            return Err(PlotError::SingularSystem { column: pivot_row });
        }

        for row in (pivot_row + 1)..rows {
            let factor = matrix[row][pivot_row] / pivot;
            for column in (pivot_row + 1)..=rows {
                matrix[row][column] -= matrix[pivot_row][column] * factor;
            }
            matrix[row][pivot_row] = 0.0;
        }
    }

    let mut solution = vec![0.0; rows];
    for row in (0..rows).rev() {
        let mut accumulated = matrix[row][rows];
        for column in (row + 1)..rows {
            accumulated -= matrix[row][column] * solution[column];
        }
        solution[row] = accumulated / matrix[row][row];
    }

    Ok(solution)
}
