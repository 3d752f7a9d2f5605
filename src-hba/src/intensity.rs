use ndarray::Array1;
use std::f64::consts::PI;

/// Guard added to the distance so the inverse-square law stays finite
pub const DISTANCE_EPS: f64 = 1e-12;

/// Smell intensity of the prey as perceived by an agent at `x`
///
/// `I = r2 * S / (4 pi d^2)` with `S = |x - best|^2` and `d = |x - best| + eps`.
/// Never negative; zero when the agent sits on the best position.
pub fn intensity(x: &Array1<f64>, best: &Array1<f64>, r2: f64) -> f64 {
    let s: f64 = x.iter().zip(best.iter()).map(|(&a, &b)| (a - b) * (a - b)).sum();
    let d = s.sqrt() + DISTANCE_EPS;
    r2 * s / (4.0 * PI * d * d)
}
