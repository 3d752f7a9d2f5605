use ndarray::Array1;
use std::f64::consts::PI;

/// Random draws consumed by one digging move
#[derive(Debug, Clone, Copy)]
pub struct DiggingDraws {
    /// Direction flag, +1 or -1
    pub flag: f64,
    pub r3: f64,
    pub r4: f64,
    pub r5: f64,
}

/// Digging phase: cardioid motion around the best position
///
/// `x_new = best + F*beta*I*best + F*r3*alpha*(best - x)*|cos(2 pi r4) * (1 - cos(2 pi r5))|`
pub fn digging_move(
    x: &Array1<f64>,
    best: &Array1<f64>,
    alpha: f64,
    beta: f64,
    intensity: f64,
    draws: &DiggingDraws,
) -> Array1<f64> {
    let f = draws.flag;
    let cardioid = ((2.0 * PI * draws.r4).cos() * (1.0 - (2.0 * PI * draws.r5).cos())).abs();
    let scale = f * draws.r3 * alpha * cardioid;
    let mut out = best.clone();
    for j in 0..out.len() {
        let d = best[j] - x[j];
        out[j] += f * beta * intensity * best[j] + scale * d;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digging_stays_on_best_when_converged() {
        // agent on the best with zero intensity does not move
        let best = Array1::from(vec![0.5, -0.25]);
        let draws = DiggingDraws { flag: 1.0, r3: 0.9, r4: 0.1, r5: 0.6 };
        let out = digging_move(&best, &best, 2.0, 6.0, 0.0, &draws);
        assert_eq!(out, best);
    }

    #[test]
    fn test_digging_matches_formula() {
        let x = Array1::from(vec![1.0, 2.0]);
        let best = Array1::from(vec![0.0, 1.0]);
        let draws = DiggingDraws { flag: -1.0, r3: 0.5, r4: 0.5, r5: 0.5 };
        // |cos(pi) * (1 - cos(pi))| = 2
        let out = digging_move(&x, &best, 1.0, 6.0, 0.1, &draws);
        let scale = -1.0 * 0.5 * 1.0 * 2.0;
        let expected0 = 0.0 + (-1.0) * 6.0 * 0.1 * 0.0 + scale * (0.0 - 1.0);
        let expected1 = 1.0 + (-1.0) * 6.0 * 0.1 * 1.0 + scale * (1.0 - 2.0);
        assert!((out[0] - expected0).abs() < 1e-12);
        assert!((out[1] - expected1).abs() < 1e-12);
    }

    #[test]
    fn test_digging_vanishes_when_cardioid_is_zero() {
        // r5 = 0 zeroes (1 - cos(2 pi r5))
        let x = Array1::from(vec![4.0]);
        let best = Array1::from(vec![1.0]);
        let draws = DiggingDraws { flag: 1.0, r3: 1.0, r4: 0.3, r5: 0.0 };
        let out = digging_move(&x, &best, 2.0, 6.0, 0.0, &draws);
        assert_eq!(out[0], 1.0);
    }
}
