use ndarray::{Array1, Array2};
use rand::Rng;

/// Uniform random population: `npop` rows, each coordinate drawn independently
/// from `[lower[j], upper[j]]`. A degenerate interval yields the bound itself.
pub(crate) fn init_random<R: Rng + ?Sized>(
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut R,
) -> Array2<f64> {
    let n = lower.len();
    let mut pop = Array2::<f64>::zeros((npop, n));
    for i in 0..npop {
        for j in 0..n {
            let span = upper[j] - lower[j];
            pop[[i, j]] = if span > 0.0 {
                (lower[j] + rng.random::<f64>() * span).min(upper[j])
            } else {
                lower[j]
            };
        }
    }
    pop
}
