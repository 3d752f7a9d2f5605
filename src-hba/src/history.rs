//! Per-iteration population snapshots for replay and plotting

use ndarray::{Array1, Array2};
use serde::Serialize;

use crate::error::{HBAError, Result};
use crate::update_rule::Phase;

/// What one agent did during an iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgentMove {
    pub phase: Phase,
    /// Whether the candidate replaced the agent
    pub accepted: bool,
}

/// Population state after `iteration` completed iterations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub iteration: usize,
    /// Density factor used for this iteration (`c` for the initial snapshot)
    pub alpha: f64,
    /// One row per agent
    pub positions: Array2<f64>,
    pub fitness: Array1<f64>,
    /// Best-ever fitness so far
    pub best_fitness: f64,
    pub best_position: Array1<f64>,
    /// One entry per agent; empty for the initial snapshot
    pub moves: Vec<AgentMove>,
}

impl Snapshot {
    pub fn population_size(&self) -> usize {
        self.positions.nrows()
    }

    pub fn accepted_count(&self) -> usize {
        self.moves.iter().filter(|m| m.accepted).count()
    }

    pub fn phase_counts(&self) -> (usize, usize) {
        let digging = self.moves.iter().filter(|m| m.phase == Phase::Digging).count();
        (digging, self.moves.len() - digging)
    }
}

/// Append-only list of snapshots, starting with the initialized population
#[derive(Debug, Clone, Serialize)]
pub struct RunHistory {
    snapshots: Vec<Snapshot>,
}

impl RunHistory {
    pub(crate) fn new(initial: Snapshot) -> Self {
        Self { snapshots: vec![initial] }
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) -> &Snapshot {
        self.snapshots.push(snapshot);
        self.latest()
    }

    pub fn get(&self, index: usize) -> Result<&Snapshot> {
        self.snapshots
            .get(index)
            .ok_or(HBAError::IndexOutOfRange { index, len: self.snapshots.len() })
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Most recent snapshot (the initial one before any step)
    pub fn latest(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Best-ever fitness per snapshot
    pub fn convergence_curve(&self) -> Array1<f64> {
        self.snapshots.iter().map(|s| s.best_fitness).collect()
    }

    /// Best-ever position per snapshot, one row each
    pub fn best_trajectory(&self) -> Array2<f64> {
        let dim = self.latest().best_position.len();
        let mut out = Array2::zeros((self.len(), dim));
        for (mut row, s) in out.rows_mut().into_iter().zip(self.snapshots.iter()) {
            row.assign(&s.best_position);
        }
        out
    }

    /// Positions of `agent` over the last `length` snapshots ending at `window_end`
    /// (inclusive), oldest first. Shorter when the window reaches before snapshot 0.
    pub fn agent_trail(&self, agent: usize, window_end: usize, length: usize) -> Result<Array2<f64>> {
        let end = self.get(window_end)?;
        let npop = end.population_size();
        if agent >= npop {
            return Err(HBAError::IndexOutOfRange { index: agent, len: npop });
        }
        let start = (window_end + 1).saturating_sub(length);
        let dim = end.positions.ncols();
        let mut out = Array2::zeros((window_end + 1 - start, dim));
        for (mut row, s) in out.rows_mut().into_iter().zip(&self.snapshots[start..=window_end]) {
            row.assign(&s.positions.row(agent));
        }
        Ok(out)
    }
}

impl<'a> IntoIterator for &'a RunHistory {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
