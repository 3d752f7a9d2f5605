//! Per-agent candidate generation
//!
//! Draws are sampled up front into [`MoveDraws`] so [`propose`] is a pure function
//! of (position, best, alpha, beta, draws). Acceptance lives in the engine.

use std::fmt;

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::intensity::intensity;
use crate::move_digging::{DiggingDraws, digging_move};
use crate::move_honey::{HoneyDraws, honey_move};

/// Which movement rule an agent used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Digging,
    Honey,
}

impl Phase {
    /// `r < 0.5` digs, anything else follows the honeyguide
    pub fn from_draw(r: f64) -> Self {
        if r < 0.5 { Phase::Digging } else { Phase::Honey }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Digging => "digging",
            Phase::Honey => "honey",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every random number one agent consumes in one iteration
#[derive(Debug, Clone, Copy)]
pub struct MoveDraws {
    /// Intensity scaling
    pub r2: f64,
    /// Phase selector
    pub phase: f64,
    /// Direction flag, +1 or -1
    pub flag: f64,
    pub r3: f64,
    pub r4: f64,
    pub r5: f64,
    pub r7: f64,
}

impl MoveDraws {
    /// Sample a fresh set. The count is fixed so the random stream does not depend
    /// on which phase gets picked.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let r2 = rng.random::<f64>();
        let phase = rng.random::<f64>();
        let flag = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let r3 = rng.random::<f64>();
        let r4 = rng.random::<f64>();
        let r5 = rng.random::<f64>();
        let r7 = rng.random::<f64>();
        Self { r2, phase, flag, r3, r4, r5, r7 }
    }
}

/// Candidate position for the agent at `x` (not yet clamped)
pub fn propose(
    x: &Array1<f64>,
    best: &Array1<f64>,
    alpha: f64,
    beta: f64,
    draws: &MoveDraws,
) -> (Phase, Array1<f64>) {
    let i = intensity(x, best, draws.r2);
    let phase = Phase::from_draw(draws.phase);
    let candidate = match phase {
        Phase::Digging => {
            let d = DiggingDraws { flag: draws.flag, r3: draws.r3, r4: draws.r4, r5: draws.r5 };
            digging_move(x, best, alpha, beta, i, &d)
        }
        Phase::Honey => {
            let d = HoneyDraws { flag: draws.flag, r7: draws.r7 };
            honey_move(x, best, alpha, beta, i, &d)
        }
    };
    (phase, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn draws(phase: f64) -> MoveDraws {
        MoveDraws { r2: 0.4, phase, flag: 1.0, r3: 0.3, r4: 0.2, r5: 0.7, r7: 0.6 }
    }

    #[test]
    fn test_phase_threshold() {
        assert_eq!(Phase::from_draw(0.0), Phase::Digging);
        assert_eq!(Phase::from_draw(0.4999), Phase::Digging);
        assert_eq!(Phase::from_draw(0.5), Phase::Honey);
        assert_eq!(Phase::Honey.to_string(), "honey");
    }

    #[test]
    fn test_propose_dispatches_on_phase() {
        let x = Array1::from(vec![1.0, -2.0]);
        let best = Array1::from(vec![0.5, 0.5]);

        let (phase, cand) = propose(&x, &best, 1.5, 6.0, &draws(0.1));
        assert_eq!(phase, Phase::Digging);
        let i = intensity(&x, &best, 0.4);
        let d = DiggingDraws { flag: 1.0, r3: 0.3, r4: 0.2, r5: 0.7 };
        assert_eq!(cand, digging_move(&x, &best, 1.5, 6.0, i, &d));

        let (phase, cand) = propose(&x, &best, 1.5, 6.0, &draws(0.9));
        assert_eq!(phase, Phase::Honey);
        assert_eq!(cand, honey_move(&x, &best, 1.5, 6.0, i, &HoneyDraws { flag: 1.0, r7: 0.6 }));
    }

    #[test]
    fn test_propose_is_pure() {
        let x = Array1::from(vec![3.0, 1.0, -1.0]);
        let best = Array1::from(vec![0.0, 0.2, 0.1]);
        let d = draws(0.2);
        assert_eq!(propose(&x, &best, 2.0, 6.0, &d), propose(&x, &best, 2.0, 6.0, &d));
    }

    #[test]
    fn test_sampled_draws_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let d = MoveDraws::sample(&mut rng);
            for r in [d.r2, d.phase, d.r3, d.r4, d.r5, d.r7] {
                assert!((0.0..1.0).contains(&r));
            }
            assert!(d.flag == 1.0 || d.flag == -1.0);
        }
    }
}
