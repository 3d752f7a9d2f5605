//! Honey Badger Algorithm (HBA) global optimizer in pure Rust using ndarray
//!
//! A population of agents hunts for the minimum of a bounded objective. Every
//! iteration each agent either digs around the best position found so far
//! (cardioid motion) or follows the honeyguide toward it, with a step size driven
//! by a decaying density factor and a smell intensity that falls off with the
//! distance to the prey.
//!
//! Supported features:
//! - Box bounds, enforced by clipping after every move
//! - Inequality-constrained engineering problems via a static exterior penalty
//! - Greedy (strictly better) acceptance and a never-regressing best
//! - Step-by-step execution with a full [`RunHistory`] for replay and plotting
//! - Seeded or injected random source for reproducible runs
//! - CSV/JSON export of recorded runs

#![allow(missing_docs)]
use ndarray::Array1;
use serde::{Deserialize, Serialize};

pub mod clip_inplace;
pub mod init_random;

pub mod density;
pub mod intensity;
pub mod move_digging;
pub mod move_honey;
pub mod update_rule;

pub mod engine;
pub mod error;
pub mod export;
pub mod history;
pub mod population;
pub mod run_recorded;

pub use engine::{EngineState, HBAReport, HoneyBadger};
pub use error::{HBAError, Result};
pub use export::{
	EngineeringResult, load_config_json, save_config_json, save_convergence_csv,
	save_engineering_result_json, save_history_json, save_positions_csv,
};
pub use history::{AgentMove, RunHistory, Snapshot};
pub use population::{Agent, Population};
pub use run_recorded::{RecordedFiles, run_recorded_hba};
pub use update_rule::{MoveDraws, Phase, propose};

pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = v[0];
	for (i, &val) in v.iter().enumerate() {
		if val < best_v {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}

/// Configuration for the Honey Badger optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HBAConfig {
	/// Number of agents N
	pub popsize: usize,
	/// Number of iterations t_max
	pub maxiter: usize,
	/// Initial density factor C
	pub c: f64,
	/// Intensity scaling beta (ability to get food)
	pub beta: f64,
	pub seed: Option<u64>,
}

impl Default for HBAConfig {
	fn default() -> Self {
		Self { popsize: 30, maxiter: 500, c: 2.0, beta: 6.0, seed: None }
	}
}

impl HBAConfig {
	/// Reject parameters the update rule cannot work with.
	/// `maxiter == 0` is allowed and yields a run that only holds the initial population.
	pub fn validate(&self) -> Result<()> {
		if self.popsize == 0 {
			return Err(HBAError::InvalidConfiguration(
				"population size must be at least 1".to_string(),
			));
		}
		if !self.c.is_finite() || self.c < 0.0 {
			return Err(HBAError::InvalidConfiguration(format!(
				"density factor C must be finite and non-negative, got {}",
				self.c
			)));
		}
		if !self.beta.is_finite() || self.beta < 0.0 {
			return Err(HBAError::InvalidConfiguration(format!(
				"intensity scale beta must be finite and non-negative, got {}",
				self.beta
			)));
		}
		Ok(())
	}
}

/// Fluent builder for `HBAConfig` for ergonomic configuration.
#[derive(Default)]
pub struct HBAConfigBuilder {
	cfg: HBAConfig,
}

impl HBAConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: HBAConfig::default() }
	}
	pub fn popsize(mut self, v: usize) -> Self {
		self.cfg.popsize = v;
		self
	}
	pub fn maxiter(mut self, v: usize) -> Self {
		self.cfg.maxiter = v;
		self
	}
	pub fn c(mut self, v: f64) -> Self {
		self.cfg.c = v;
		self
	}
	pub fn beta(mut self, v: f64) -> Self {
		self.cfg.beta = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn build(self) -> HBAConfig {
		self.cfg
	}
}
