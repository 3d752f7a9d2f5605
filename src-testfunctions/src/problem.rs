//! Problem definitions consumed by the optimizer
//!
//! A [`ProblemSpec`] couples one catalogued objective with its bounds and, for the
//! engineering problems, a penalty policy turning constraint violations into extra
//! fitness. The catalogue is closed: [`ProblemKind`] lists every variant.

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::functions::*;
use crate::{FunctionMetadata, get_function_metadata};

/// Fitness substituted when an objective evaluates to NaN or infinity
pub const NON_FINITE_SENTINEL: f64 = 1.0e300;

/// Errors raised while building or evaluating a problem
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProblemError {
    /// Position (or bounds) length differs from the problem dimensionality
    #[error("dimension mismatch: expected {expected} variables, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A lower bound exceeds its upper bound
    #[error("invalid bounds at index {index}: lower ({lower}) > upper ({upper})")]
    InvalidBounds { index: usize, lower: f64, upper: f64 },

    /// A bound is NaN or infinite
    #[error("non-finite bound at index {index}")]
    NonFiniteBound { index: usize },

    /// Zero-dimensional problem
    #[error("a problem needs at least one dimension")]
    EmptyBounds,

    /// Registry lookup failed
    #[error("unknown problem: {0}")]
    UnknownProblem(String),
}

pub type Result<T> = std::result::Result<T, ProblemError>;

/// Every objective the optimizer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    Sphere,
    #[serde(rename = "schwefel_2_22")]
    Schwefel222,
    Rastrigin,
    Ackley,
    Griewank,
    SpringDesign,
    PressureVessel,
    WeldedBeam,
    SpeedReducer,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 9] = [
        ProblemKind::Sphere,
        ProblemKind::Schwefel222,
        ProblemKind::Rastrigin,
        ProblemKind::Ackley,
        ProblemKind::Griewank,
        ProblemKind::SpringDesign,
        ProblemKind::PressureVessel,
        ProblemKind::WeldedBeam,
        ProblemKind::SpeedReducer,
    ];

    /// Stable registry key
    pub fn key(&self) -> &'static str {
        match self {
            ProblemKind::Sphere => "sphere",
            ProblemKind::Schwefel222 => "schwefel_2_22",
            ProblemKind::Rastrigin => "rastrigin",
            ProblemKind::Ackley => "ackley",
            ProblemKind::Griewank => "griewank",
            ProblemKind::SpringDesign => "spring_design",
            ProblemKind::PressureVessel => "pressure_vessel",
            ProblemKind::WeldedBeam => "welded_beam",
            ProblemKind::SpeedReducer => "speed_reducer",
        }
    }

    pub fn is_engineering(&self) -> bool {
        self.fixed_dimension().is_some()
    }

    /// Engineering problems have a fixed number of design variables;
    /// benchmarks scale to any dimension.
    pub fn fixed_dimension(&self) -> Option<usize> {
        match self {
            ProblemKind::SpringDesign => Some(3),
            ProblemKind::PressureVessel | ProblemKind::WeldedBeam => Some(4),
            ProblemKind::SpeedReducer => Some(7),
            _ => None,
        }
    }

    /// Catalogue bounds for `dim` variables
    pub fn default_bounds(&self, dim: usize) -> Vec<(f64, f64)> {
        match self {
            ProblemKind::Sphere => vec![(-100.0, 100.0); dim],
            ProblemKind::Schwefel222 => vec![(-10.0, 10.0); dim],
            ProblemKind::Rastrigin => vec![(-5.12, 5.12); dim],
            ProblemKind::Ackley => vec![(-32.768, 32.768); dim],
            ProblemKind::Griewank => vec![(-600.0, 600.0); dim],
            ProblemKind::SpringDesign => vec![(0.05, 2.0), (0.25, 1.3), (2.0, 15.0)],
            ProblemKind::PressureVessel => vec![
                (0.0625, 99.0 * 0.0625),
                (0.0625, 99.0 * 0.0625),
                (10.0, 200.0),
                (10.0, 200.0),
            ],
            ProblemKind::WeldedBeam => vec![(0.1, 2.0), (0.1, 10.0), (0.1, 10.0), (0.1, 2.0)],
            ProblemKind::SpeedReducer => vec![
                (2.6, 3.6),
                (0.7, 0.8),
                (17.0, 28.0),
                (7.3, 8.3),
                (7.3, 8.3),
                (2.9, 3.9),
                (5.0, 5.5),
            ],
        }
    }

    fn objective(&self, x: &Array1<f64>) -> f64 {
        match self {
            ProblemKind::Sphere => sphere(x),
            ProblemKind::Schwefel222 => schwefel_2_22(x),
            ProblemKind::Rastrigin => rastrigin(x),
            ProblemKind::Ackley => ackley(x),
            ProblemKind::Griewank => griewank(x),
            ProblemKind::SpringDesign => spring_design_objective(x),
            ProblemKind::PressureVessel => pressure_vessel_objective(x),
            ProblemKind::WeldedBeam => welded_beam_objective(x),
            ProblemKind::SpeedReducer => speed_reducer_objective(x),
        }
    }

    fn constraints(&self, x: &Array1<f64>) -> Array1<f64> {
        match self {
            ProblemKind::SpringDesign => spring_design_constraints(x),
            ProblemKind::PressureVessel => pressure_vessel_constraints(x),
            ProblemKind::WeldedBeam => welded_beam_constraints(x),
            ProblemKind::SpeedReducer => speed_reducer_constraints(x),
            _ => Array1::zeros(0),
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProblemKind {
    type Err = ProblemError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let t = s.trim().to_lowercase().replace([' ', '-'], "_");
        match t.as_str() {
            "sphere" => Ok(ProblemKind::Sphere),
            "schwefel_2_22" | "schwefel222" | "schwefel_222" => Ok(ProblemKind::Schwefel222),
            "rastrigin" => Ok(ProblemKind::Rastrigin),
            "ackley" => Ok(ProblemKind::Ackley),
            "griewank" => Ok(ProblemKind::Griewank),
            "spring_design" | "spring" => Ok(ProblemKind::SpringDesign),
            "pressure_vessel" | "vessel" => Ok(ProblemKind::PressureVessel),
            "welded_beam" | "beam" => Ok(ProblemKind::WeldedBeam),
            "speed_reducer" | "reducer" => Ok(ProblemKind::SpeedReducer),
            _ => Err(ProblemError::UnknownProblem(s.to_string())),
        }
    }
}

/// Static exterior penalty for inequality constraints `g_i(x) <= 0`
///
/// With `v_i = max(0, g_i)` the penalty is zero on feasible points and
/// `offset + weight * sum(v_i^2)` otherwise. A NaN constraint counts as an
/// infinite violation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyPolicy {
    pub weight: f64,
    pub offset: f64,
}

impl Default for PenaltyPolicy {
    fn default() -> Self {
        Self { weight: 1.0e6, offset: 1.0e6 }
    }
}

impl PenaltyPolicy {
    pub fn penalty(&self, constraints: &Array1<f64>) -> f64 {
        let mut violated = false;
        let mut sum_sq = 0.0;
        for &g in constraints.iter() {
            let v = if g.is_nan() { f64::INFINITY } else { g.max(0.0) };
            if v > 0.0 {
                violated = true;
                sum_sq += v * v;
            }
        }
        if violated { self.offset + self.weight * sum_sq } else { 0.0 }
    }
}

/// Everything known about one evaluated position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Raw design objective (no penalty)
    pub objective: f64,
    /// Constraint values `g_i(x)`; empty for benchmarks
    pub constraints: Array1<f64>,
    /// Penalty added to the objective
    pub penalty: f64,
    /// Value the optimizer ranks by
    pub fitness: f64,
    /// True when the fitness was replaced by [`NON_FINITE_SENTINEL`]
    pub sanitized: bool,
}

impl Evaluation {
    pub fn is_feasible(&self) -> bool {
        self.constraints.iter().all(|&g| g <= 0.0)
    }
}

/// Objective + bounds + penalty policy. Immutable once built.
#[derive(Debug, Clone)]
pub struct ProblemSpec {
    kind: ProblemKind,
    lower: Array1<f64>,
    upper: Array1<f64>,
    penalty: PenaltyPolicy,
}

impl ProblemSpec {
    /// Problem with catalogue bounds in `dim` dimensions
    pub fn new(kind: ProblemKind, dim: usize) -> Result<Self> {
        Self::with_bounds(kind, &kind.default_bounds(dim))
    }

    /// Problem with catalogue bounds in its natural dimension
    /// (fixed for engineering problems, 2 for benchmarks)
    pub fn from_kind(kind: ProblemKind) -> Self {
        let dim = kind.fixed_dimension().unwrap_or(2);
        let bounds = kind.default_bounds(dim);
        Self {
            kind,
            lower: bounds.iter().map(|b| b.0).collect(),
            upper: bounds.iter().map(|b| b.1).collect(),
            penalty: PenaltyPolicy::default(),
        }
    }

    /// Registry lookup; `dim` is ignored for fixed-dimension problems
    pub fn from_name(name: &str, dim: usize) -> Result<Self> {
        let kind: ProblemKind = name.parse()?;
        Self::new(kind, kind.fixed_dimension().unwrap_or(dim))
    }

    /// Problem with explicit bounds
    pub fn with_bounds(kind: ProblemKind, bounds: &[(f64, f64)]) -> Result<Self> {
        if bounds.is_empty() {
            return Err(ProblemError::EmptyBounds);
        }
        if let Some(expected) = kind.fixed_dimension() {
            if bounds.len() != expected {
                return Err(ProblemError::DimensionMismatch { expected, got: bounds.len() });
            }
        }
        for (index, &(lower, upper)) in bounds.iter().enumerate() {
            if !lower.is_finite() || !upper.is_finite() {
                return Err(ProblemError::NonFiniteBound { index });
            }
            if lower > upper {
                return Err(ProblemError::InvalidBounds { index, lower, upper });
            }
        }
        Ok(Self {
            kind,
            lower: bounds.iter().map(|b| b.0).collect(),
            upper: bounds.iter().map(|b| b.1).collect(),
            penalty: PenaltyPolicy::default(),
        })
    }

    pub fn with_penalty(mut self, penalty: PenaltyPolicy) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn kind(&self) -> ProblemKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.key()
    }

    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &Array1<f64> {
        &self.lower
    }

    pub fn upper(&self) -> &Array1<f64> {
        &self.upper
    }

    pub fn bounds(&self) -> Vec<(f64, f64)> {
        self.lower.iter().zip(self.upper.iter()).map(|(&l, &u)| (l, u)).collect()
    }

    pub fn penalty_policy(&self) -> &PenaltyPolicy {
        &self.penalty
    }

    pub fn is_constrained(&self) -> bool {
        self.kind.is_engineering()
    }

    /// Display metadata (variable names, units, constraint formulas) for this problem
    pub fn metadata(&self) -> Option<FunctionMetadata> {
        get_function_metadata().remove(self.kind.key())
    }

    pub fn check_dimension(&self, x: &Array1<f64>) -> Result<()> {
        if x.len() != self.dim() {
            return Err(ProblemError::DimensionMismatch { expected: self.dim(), got: x.len() });
        }
        Ok(())
    }

    pub fn contains(&self, x: &Array1<f64>) -> bool {
        x.len() == self.dim()
            && x.iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(&xi, (&lo, &hi))| xi >= lo && xi <= hi)
    }

    pub fn raw_objective(&self, x: &Array1<f64>) -> Result<f64> {
        self.check_dimension(x)?;
        Ok(self.kind.objective(x))
    }

    pub fn constraint_values(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        self.check_dimension(x)?;
        Ok(self.kind.constraints(x))
    }

    pub fn is_feasible(&self, x: &Array1<f64>) -> Result<bool> {
        Ok(self.constraint_values(x)?.iter().all(|&g| g <= 0.0))
    }

    /// Objective, constraints and penalty in one pass
    pub fn evaluate_detailed(&self, x: &Array1<f64>) -> Result<Evaluation> {
        self.check_dimension(x)?;
        Ok(self.evaluate_unchecked(x))
    }

    /// Same as [`Self::evaluate_detailed`] for callers that already hold a position of
    /// length [`Self::dim`] (the optimizer only builds such positions).
    ///
    /// # Panics
    ///
    /// May panic when `x` is shorter than the problem dimensionality.
    pub fn evaluate_unchecked(&self, x: &Array1<f64>) -> Evaluation {
        let objective = self.kind.objective(x);
        let constraints = self.kind.constraints(x);
        let penalty = self.penalty.penalty(&constraints);
        let total = objective + penalty;
        let (fitness, sanitized) =
            if total.is_finite() { (total, false) } else { (NON_FINITE_SENTINEL, true) };
        Evaluation { objective, constraints, penalty, fitness, sanitized }
    }

    /// Penalty-adjusted fitness; non-finite values come back as [`NON_FINITE_SENTINEL`]
    pub fn evaluate(&self, x: &Array1<f64>) -> Result<f64> {
        Ok(self.evaluate_detailed(x)?.fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_problem_kind() {
        assert_eq!("sphere".parse::<ProblemKind>().unwrap(), ProblemKind::Sphere);
        assert_eq!("Spring Design".parse::<ProblemKind>().unwrap(), ProblemKind::SpringDesign);
        assert_eq!("welded-beam".parse::<ProblemKind>().unwrap(), ProblemKind::WeldedBeam);
        assert_eq!("schwefel222".parse::<ProblemKind>().unwrap(), ProblemKind::Schwefel222);
        assert!(matches!(
            "rosenbrock".parse::<ProblemKind>(),
            Err(ProblemError::UnknownProblem(_))
        ));
    }

    #[test]
    fn test_keys_round_trip() {
        for kind in ProblemKind::ALL {
            assert_eq!(kind.key().parse::<ProblemKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.key());
        }
    }

    #[test]
    fn test_serde_uses_registry_keys() {
        let json = serde_json::to_string(&ProblemKind::Schwefel222).unwrap();
        assert_eq!(json, "\"schwefel_2_22\"");
        let back: ProblemKind = serde_json::from_str("\"speed_reducer\"").unwrap();
        assert_eq!(back, ProblemKind::SpeedReducer);
    }

    #[test]
    fn test_bounds_validation() {
        assert_eq!(
            ProblemSpec::with_bounds(ProblemKind::Sphere, &[]).unwrap_err(),
            ProblemError::EmptyBounds
        );
        assert!(matches!(
            ProblemSpec::with_bounds(ProblemKind::Sphere, &[(1.0, -1.0)]),
            Err(ProblemError::InvalidBounds { index: 0, .. })
        ));
        assert!(matches!(
            ProblemSpec::with_bounds(ProblemKind::Sphere, &[(0.0, 1.0), (f64::NAN, 1.0)]),
            Err(ProblemError::NonFiniteBound { index: 1 })
        ));
        assert!(matches!(
            ProblemSpec::with_bounds(ProblemKind::SpringDesign, &[(0.0, 1.0); 2]),
            Err(ProblemError::DimensionMismatch { expected: 3, got: 2 })
        ));
        // degenerate interval is allowed
        assert!(ProblemSpec::with_bounds(ProblemKind::Sphere, &[(2.0, 2.0)]).is_ok());
    }

    #[test]
    fn test_from_name_ignores_dim_for_engineering() {
        let spring = ProblemSpec::from_name("spring_design", 10).unwrap();
        assert_eq!(spring.dim(), 3);
        let sphere = ProblemSpec::from_name("sphere", 5).unwrap();
        assert_eq!(sphere.dim(), 5);
        assert_eq!(sphere.bounds()[0], (-100.0, 100.0));
    }

    #[test]
    fn test_dimension_mismatch_on_evaluate() {
        let p = ProblemSpec::new(ProblemKind::Rastrigin, 3).unwrap();
        let err = p.evaluate(&Array1::zeros(2)).unwrap_err();
        assert_eq!(err, ProblemError::DimensionMismatch { expected: 3, got: 2 });
    }

    #[test]
    fn test_benchmark_has_no_penalty() {
        let p = ProblemSpec::new(ProblemKind::Sphere, 2).unwrap();
        let eval = p.evaluate_detailed(&Array1::from(vec![3.0, 4.0])).unwrap();
        assert_eq!(eval.objective, 25.0);
        assert_eq!(eval.fitness, 25.0);
        assert_eq!(eval.penalty, 0.0);
        assert!(eval.constraints.is_empty());
        assert!(eval.is_feasible());
        assert!(!eval.sanitized);
    }

    #[test]
    fn test_feasible_design_is_not_penalized() {
        let p = ProblemSpec::from_kind(ProblemKind::SpringDesign);
        // comfortably inside every constraint
        let x = Array1::from(vec![0.06, 0.5, 10.0]);
        let eval = p.evaluate_detailed(&x).unwrap();
        assert!(eval.is_feasible(), "constraints: {:?}", eval.constraints);
        assert_eq!(eval.penalty, 0.0);
        assert_eq!(eval.fitness, eval.objective);
    }

    #[test]
    fn test_penalty_grows_with_violation() {
        let policy = PenaltyPolicy::default();
        let small = policy.penalty(&Array1::from(vec![0.1, -1.0]));
        let large = policy.penalty(&Array1::from(vec![0.5, -1.0]));
        assert!(small >= policy.offset);
        assert!(large > small);
        assert_eq!(policy.penalty(&Array1::from(vec![-0.1, 0.0])), 0.0);
        assert!(policy.penalty(&Array1::from(vec![f64::NAN])).is_infinite());
    }

    #[test]
    fn test_infeasible_design_is_penalized() {
        let p = ProblemSpec::from_kind(ProblemKind::SpringDesign);
        // thick wire, outer diameter far above 1.5 in
        let x = Array1::from(vec![1.5, 1.2, 10.0]);
        let eval = p.evaluate_detailed(&x).unwrap();
        assert!(!eval.is_feasible());
        assert!(eval.penalty >= p.penalty_policy().offset);
        assert_eq!(eval.fitness, eval.objective + eval.penalty);
    }

    #[test]
    fn test_with_penalty_overrides_weight() {
        let base = ProblemSpec::from_kind(ProblemKind::SpringDesign);
        let heavy = base.clone().with_penalty(PenaltyPolicy { weight: 1.0e9, offset: 1.0e6 });
        assert_eq!(heavy.penalty_policy().weight, 1.0e9);

        let x = Array1::from(vec![1.5, 1.2, 10.0]);
        let light_eval = base.evaluate_detailed(&x).unwrap();
        let heavy_eval = heavy.evaluate_detailed(&x).unwrap();
        assert_eq!(heavy_eval.objective, light_eval.objective);
        assert!(heavy_eval.penalty > light_eval.penalty);
        assert!(heavy_eval.fitness > light_eval.fitness);
    }

    #[test]
    fn test_singular_point_maps_to_sentinel() {
        let p = ProblemSpec::from_kind(ProblemKind::SpringDesign);
        // d == D zeroes the surge-frequency denominator
        let x = Array1::from(vec![0.5, 0.5, 5.0]);
        let eval = p.evaluate_detailed(&x).unwrap();
        assert!(eval.sanitized);
        assert_eq!(eval.fitness, NON_FINITE_SENTINEL);
        assert_eq!(p.evaluate(&x).unwrap(), NON_FINITE_SENTINEL);
    }

    #[test]
    fn test_contains() {
        let p = ProblemSpec::from_kind(ProblemKind::WeldedBeam);
        assert!(p.contains(&Array1::from(vec![0.2, 3.0, 9.0, 0.2])));
        assert!(!p.contains(&Array1::from(vec![0.05, 3.0, 9.0, 0.2])));
        assert!(!p.contains(&Array1::from(vec![0.2, 3.0, 9.0])));
    }

    #[test]
    fn test_metadata_attached() {
        let p = ProblemSpec::from_kind(ProblemKind::PressureVessel);
        let meta = p.metadata().unwrap();
        assert_eq!(meta.variables.len(), 4);
        assert_eq!(meta.constraints.len(), 4);
    }
}
