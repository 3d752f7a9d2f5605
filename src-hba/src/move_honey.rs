use ndarray::Array1;

/// Random draws consumed by one honey move
#[derive(Debug, Clone, Copy)]
pub struct HoneyDraws {
    /// Direction flag, +1 or -1
    pub flag: f64,
    pub r7: f64,
}

/// Honey phase: follow the honeyguide toward (or past) the best position
///
/// `x_new = best + F*beta*I*best + F*r7*alpha*(best - x)`
pub fn honey_move(
    x: &Array1<f64>,
    best: &Array1<f64>,
    alpha: f64,
    beta: f64,
    intensity: f64,
    draws: &HoneyDraws,
) -> Array1<f64> {
    let f = draws.flag;
    let scale = f * draws.r7 * alpha;
    let mut out = best.clone();
    for j in 0..out.len() {
        out[j] += f * beta * intensity * best[j] + scale * (best[j] - x[j]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honey_matches_formula() {
        let x = Array1::from(vec![2.0, -1.0]);
        let best = Array1::from(vec![1.0, 1.0]);
        let draws = HoneyDraws { flag: 1.0, r7: 0.25 };
        let out = honey_move(&x, &best, 2.0, 6.0, 0.05, &draws);
        // scale = 0.5, shift = 0.3 * best
        assert!((out[0] - (1.0 + 0.3 + 0.5 * -1.0)).abs() < 1e-12);
        assert!((out[1] - (1.0 + 0.3 + 0.5 * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_honey_flag_mirrors_step() {
        let x = Array1::from(vec![3.0]);
        let best = Array1::from(vec![0.0]);
        let up = honey_move(&x, &best, 1.0, 6.0, 0.0, &HoneyDraws { flag: 1.0, r7: 0.5 });
        let down = honey_move(&x, &best, 1.0, 6.0, 0.0, &HoneyDraws { flag: -1.0, r7: 0.5 });
        assert_eq!(up[0], -down[0]);
    }
}
