//! The Honey Badger optimizer: step-driven state machine over a population

use std::fmt;
use std::time::{Duration, Instant};

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use badger_testfunctions::ProblemSpec;

use crate::HBAConfig;
use crate::density::density_factor;
use crate::error::Result;
use crate::history::{AgentMove, RunHistory, Snapshot};
use crate::population::Population;
use crate::update_rule::{MoveDraws, propose};

/// Lifecycle of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
	/// Population drawn, no iteration run yet
	Initialized,
	/// At least one iteration run, more to go
	Stepping,
	/// `maxiter` iterations done; further steps are no-ops
	Converged,
}

/// Result/Report of an HBA run
#[derive(Clone)]
pub struct HBAReport {
	pub x: Array1<f64>,
	pub fun: f64,
	pub success: bool,
	pub message: String,
	pub nit: usize,
	pub nfev: usize,
	/// Evaluations whose fitness was replaced by the non-finite sentinel
	pub non_finite: usize,
	/// Constraint satisfaction of `x`; `None` for unconstrained problems
	pub feasible: Option<bool>,
	pub population: Array2<f64>,
	pub population_fitness: Array1<f64>,
}

impl fmt::Debug for HBAReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HBAReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("success", &self.success)
			.field("message", &self.message)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("non_finite", &self.non_finite)
			.field("feasible", &self.feasible)
			.field(
				"population",
				&format!("{}x{}", self.population.nrows(), self.population.ncols()),
			)
			.field("population_fitness", &format!("len={}", self.population_fitness.len()))
			.finish()
	}
}

/// Honey Badger optimizer
///
/// Owns its problem, population, random source and history. One call to
/// [`HoneyBadger::step`] runs one full iteration over every agent.
pub struct HoneyBadger<R: Rng = StdRng> {
	problem: ProblemSpec,
	config: HBAConfig,
	population: Population,
	rng: R,
	iteration: usize,
	state: EngineState,
	best_x: Array1<f64>,
	best_f: f64,
	history: RunHistory,
	nfev: usize,
	non_finite: usize,
	timing_enabled: bool,
	t_step_tot: Duration,
}

impl HoneyBadger<StdRng> {
	/// Create an engine seeded from `config.seed` (or from the OS when unset)
	pub fn new(problem: ProblemSpec, config: HBAConfig) -> Result<Self> {
		let rng: StdRng = match config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};
		Self::with_rng(problem, config, rng)
	}
}

impl<R: Rng> HoneyBadger<R> {
	/// Create an engine drawing from an injected random source; `config.seed` is ignored
	pub fn with_rng(problem: ProblemSpec, config: HBAConfig, mut rng: R) -> Result<Self> {
		config.validate()?;
		let population = Population::initialize(&problem, config.popsize, &mut rng)?;
		let nfev = population.len();
		let non_finite = population.initial_non_finite();
		let (_, best) = population.best_agent();
		let best_x = best.position.clone();
		let best_f = best.fitness;

		let initial = Snapshot {
			iteration: 0,
			alpha: config.c,
			positions: population.positions(),
			fitness: population.fitness(),
			best_fitness: best_f,
			best_position: best_x.clone(),
			moves: Vec::new(),
		};
		let state =
			if config.maxiter == 0 { EngineState::Converged } else { EngineState::Initialized };

		log::info!(
			"HBA init: problem={}, dim={}, population={}, maxiter={}, C={}, beta={}, best_f={:.6e}",
			problem.name(),
			problem.dim(),
			config.popsize,
			config.maxiter,
			config.c,
			config.beta,
			best_f
		);

		Ok(Self {
			problem,
			config,
			population,
			rng,
			iteration: 0,
			state,
			best_x,
			best_f,
			history: RunHistory::new(initial),
			nfev,
			non_finite,
			timing_enabled: badger_env::timing_enabled(),
			t_step_tot: Duration::ZERO,
		})
	}

	/// Run one iteration and return its snapshot.
	/// Once converged this is a no-op returning the last snapshot.
	pub fn step(&mut self) -> &Snapshot {
		if self.state == EngineState::Converged {
			return self.history.latest();
		}
		let step_start = Instant::now();

		let t = self.iteration + 1;
		let alpha = density_factor(self.config.c, t, self.config.maxiter);
		let beta = self.config.beta;
		// x_best stays fixed for the whole iteration
		let best_x = self.best_x.clone();

		let npop = self.population.len();
		let mut moves = Vec::with_capacity(npop);
		for i in 0..npop {
			let draws = MoveDraws::sample(&mut self.rng);
			let (phase, mut candidate) =
				propose(&self.population.agents()[i].position, &best_x, alpha, beta, &draws);
			self.population.clamp_to_bounds(&mut candidate);

			let eval = self.problem.evaluate_unchecked(&candidate);
			self.nfev += 1;
			if eval.sanitized {
				self.non_finite += 1;
				log::trace!("iter {} agent {}: non-finite fitness replaced by sentinel", t, i);
			}
			let accepted = self.population.try_replace(i, candidate, eval.fitness);
			moves.push(AgentMove { phase, accepted });
		}

		let (_, best) = self.population.best_agent();
		if best.fitness < self.best_f {
			self.best_f = best.fitness;
			self.best_x = best.position.clone();
		}

		self.iteration = t;
		self.state = if t >= self.config.maxiter {
			EngineState::Converged
		} else {
			EngineState::Stepping
		};

		let snapshot = Snapshot {
			iteration: t,
			alpha,
			positions: self.population.positions(),
			fitness: self.population.fitness(),
			best_fitness: self.best_f,
			best_position: self.best_x.clone(),
			moves,
		};
		let accepted = snapshot.accepted_count();

		log::debug!(
			"HBA iter {:4}  best_f={:.6e}  alpha={:.4}  accepted={}/{}",
			t,
			self.best_f,
			alpha,
			accepted,
			npop
		);

		let step_dur = step_start.elapsed();
		self.t_step_tot += step_dur;
		if self.timing_enabled && (t <= 5 || t % 10 == 0) {
			log::info!("TIMING iter {:4}: step={:.3} ms", t, step_dur.as_secs_f64() * 1e3);
		}

		if self.state == EngineState::Converged {
			log::info!(
				"HBA finished after {} iterations: best_f={:.6e}, nfev={}",
				t,
				self.best_f,
				self.nfev
			);
			if self.timing_enabled {
				log::info!("TIMING total: steps={:.3} s", self.t_step_tot.as_secs_f64());
			}
		}

		self.history.push(snapshot)
	}

	/// Step until converged and return the full history
	pub fn run_all(&mut self) -> &RunHistory {
		while self.state != EngineState::Converged {
			self.step();
		}
		&self.history
	}

	/// Best-ever position and fitness
	pub fn current_best(&self) -> (&Array1<f64>, f64) {
		(&self.best_x, self.best_f)
	}

	pub fn history(&self) -> &RunHistory {
		&self.history
	}

	pub fn state(&self) -> EngineState {
		self.state
	}

	/// Completed iterations
	pub fn iteration(&self) -> usize {
		self.iteration
	}

	/// Density factor at the current iteration counter
	pub fn alpha(&self) -> f64 {
		density_factor(self.config.c, self.iteration, self.config.maxiter)
	}

	pub fn population(&self) -> &Population {
		&self.population
	}

	pub fn problem(&self) -> &ProblemSpec {
		&self.problem
	}

	pub fn config(&self) -> &HBAConfig {
		&self.config
	}

	pub fn non_finite_evaluations(&self) -> usize {
		self.non_finite
	}

	pub fn evaluations(&self) -> usize {
		self.nfev
	}

	/// Summary of the run so far
	pub fn report(&self) -> HBAReport {
		let success = self.state == EngineState::Converged;
		let message = if success {
			format!("Maximum iterations reached: {}", self.config.maxiter)
		} else {
			format!("Stopped after {} of {} iterations", self.iteration, self.config.maxiter)
		};
		let feasible = if self.problem.is_constrained() {
			Some(self.problem.evaluate_unchecked(&self.best_x).is_feasible())
		} else {
			None
		};
		HBAReport {
			x: self.best_x.clone(),
			fun: self.best_f,
			success,
			message,
			nit: self.iteration,
			nfev: self.nfev,
			non_finite: self.non_finite,
			feasible,
			population: self.population.positions(),
			population_fitness: self.population.fitness(),
		}
	}
}
