//! Objective landscape sampling for contour and surface plots

use ndarray::{Array1, Array2};

use crate::problem::{ProblemError, ProblemSpec, Result};

/// Sample the fitness of a 2-D problem on a `resolution x resolution` grid
///
/// Returns `(x, y, z)` where `x` and `y` are evenly spaced over the problem bounds and
/// `z[[j, i]]` is the penalty-adjusted fitness at `(x[i], y[j])` (rows follow `y`, the
/// layout contour plotters expect).
pub fn sample_grid_2d(
    problem: &ProblemSpec,
    resolution: usize,
) -> Result<(Array1<f64>, Array1<f64>, Array2<f64>)> {
    if problem.dim() != 2 {
        return Err(ProblemError::DimensionMismatch { expected: 2, got: problem.dim() });
    }
    let lower = problem.lower();
    let upper = problem.upper();
    let xs = Array1::linspace(lower[0], upper[0], resolution);
    let ys = Array1::linspace(lower[1], upper[1], resolution);

    let mut z = Array2::zeros((resolution, resolution));
    let mut point = Array1::zeros(2);
    for (j, &y) in ys.iter().enumerate() {
        for (i, &x) in xs.iter().enumerate() {
            point[0] = x;
            point[1] = y;
            z[[j, i]] = problem.evaluate(&point)?;
        }
    }
    Ok((xs, ys, z))
}
