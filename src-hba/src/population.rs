//! Agents and their cached fitness

use ndarray::{Array1, Array2};
use rand::Rng;
use serde::Serialize;

use badger_testfunctions::ProblemSpec;

use crate::argmin;
use crate::clip_inplace::clip_inplace;
use crate::error::{HBAError, Result};
use crate::init_random::init_random;

/// One candidate solution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    pub position: Array1<f64>,
    /// Penalty-adjusted fitness of `position`
    pub fitness: f64,
}

/// Ordered set of agents sharing one problem's bounds
///
/// Order never changes during a run, so agent `i` in one snapshot is agent `i`
/// in every other.
#[derive(Debug, Clone)]
pub struct Population {
    agents: Vec<Agent>,
    lower: Array1<f64>,
    upper: Array1<f64>,
    initial_non_finite: usize,
}

impl Population {
    /// Draw `n` agents uniformly inside the problem bounds and evaluate them
    pub fn initialize<R: Rng + ?Sized>(
        problem: &ProblemSpec,
        n: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if n == 0 {
            return Err(HBAError::InvalidConfiguration(
                "population size must be at least 1".to_string(),
            ));
        }
        let positions = init_random(n, problem.lower(), problem.upper(), rng);
        let mut initial_non_finite = 0;
        let mut agents = Vec::with_capacity(n);
        for (i, row) in positions.rows().into_iter().enumerate() {
            let position = row.to_owned();
            let eval = problem.evaluate_unchecked(&position);
            if eval.sanitized {
                initial_non_finite += 1;
                log::trace!("init agent {}: non-finite fitness replaced by sentinel", i);
            }
            agents.push(Agent { position, fitness: eval.fitness });
        }
        Ok(Self {
            agents,
            lower: problem.lower().clone(),
            upper: problem.upper().clone(),
            initial_non_finite,
        })
    }

    /// Initial evaluations whose fitness was replaced by the non-finite sentinel
    pub fn initial_non_finite(&self) -> usize {
        self.initial_non_finite
    }

    /// Clip `position` coordinate-wise into the bounds
    pub fn clamp_to_bounds(&self, position: &mut Array1<f64>) {
        clip_inplace(position, &self.lower, &self.upper);
    }

    /// Index and agent with the lowest fitness; ties go to the earliest index
    pub fn best_agent(&self) -> (usize, &Agent) {
        let (i, _) = argmin(&self.fitness());
        (i, &self.agents[i])
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, i: usize) -> Option<&Agent> {
        self.agents.get(i)
    }

    /// All positions as an `len() x dim()` matrix
    pub fn positions(&self) -> Array2<f64> {
        let mut out = Array2::zeros((self.len(), self.dim()));
        for (mut row, agent) in out.rows_mut().into_iter().zip(self.agents.iter()) {
            row.assign(&agent.position);
        }
        out
    }

    pub fn fitness(&self) -> Array1<f64> {
        self.agents.iter().map(|a| a.fitness).collect()
    }

    /// Greedy acceptance: replace agent `i` only when `fitness` is strictly lower.
    /// Returns whether the replacement happened (always false for an unknown index).
    pub fn try_replace(&mut self, i: usize, position: Array1<f64>, fitness: f64) -> bool {
        match self.agents.get_mut(i) {
            Some(agent) if fitness < agent.fitness => {
                agent.position = position;
                agent.fitness = fitness;
                true
            }
            _ => false,
        }
    }
}
