//! Benchmark functions and engineering design problems
//!
//! This library provides the objectives the Honey Badger optimizer is exercised on.
//! Functions are organized by category:
//!
//! - **Unimodal**: single global optimum (sphere, Schwefel 2.22)
//! - **Multimodal**: many local minima (rastrigin, ackley, griewank)
//! - **Engineering**: constrained design problems (spring, pressure vessel, welded beam,
//!   speed reducer)
//!
//! [`ProblemSpec`] wraps one of them with bounds and a penalty policy, which is what the
//! optimizer consumes.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use badger_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let problem = ProblemSpec::from_name("rastrigin", 2).unwrap();
//! assert_eq!(problem.evaluate(&x).unwrap(), 0.0);
//!
//! let bounds = get_function_bounds("welded_beam").unwrap();
//! assert_eq!(bounds.len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod functions;
pub mod landscape;
pub mod problem;

pub use functions::*;
pub use landscape::sample_grid_2d;
pub use problem::{
    Evaluation, NON_FINITE_SENTINEL, PenaltyPolicy, ProblemError, ProblemKind, ProblemSpec,
};

/// One design variable as shown to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableInfo {
    pub name: String,
    pub unit: String,
    pub description: String,
}

/// One inequality constraint `g(x) <= 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintInfo {
    pub name: String,
    pub formula: String,
}

/// Metadata for a problem: bounds, known minima and display strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionMetadata {
    /// Registry key
    pub name: String,
    pub display_name: String,
    /// Bounds for each dimension (min, max); benchmarks list their 2-D default
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values (best known for engineering problems)
    pub global_minima: Vec<(Vec<f64>, f64)>,
    pub variables: Vec<VariableInfo>,
    /// Inequality constraints, empty for benchmarks
    pub constraints: Vec<ConstraintInfo>,
    pub description: String,
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

fn var(name: &str, unit: &str, description: &str) -> VariableInfo {
    VariableInfo {
        name: name.to_string(),
        unit: unit.to_string(),
        description: description.to_string(),
    }
}

fn con(name: &str, formula: &str) -> ConstraintInfo {
    ConstraintInfo { name: name.to_string(), formula: formula.to_string() }
}

fn benchmark_variables() -> Vec<VariableInfo> {
    vec![var("x1", "", "first coordinate"), var("x2", "", "second coordinate")]
}

/// Get metadata for all registered problems, keyed by registry name
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    // Benchmarks
    metadata.insert(
        "sphere".to_string(),
        FunctionMetadata {
            name: "sphere".to_string(),
            display_name: "Sphere".to_string(),
            bounds: ProblemKind::Sphere.default_bounds(2),
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            variables: benchmark_variables(),
            constraints: vec![],
            description: "Sum of squares, N-dimensional unimodal bowl".to_string(),
            multimodal: false,
            dimensions: vec![2, 10, 30],
        },
    );

    metadata.insert(
        "schwefel_2_22".to_string(),
        FunctionMetadata {
            name: "schwefel_2_22".to_string(),
            display_name: "Schwefel 2.22".to_string(),
            bounds: ProblemKind::Schwefel222.default_bounds(2),
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            variables: benchmark_variables(),
            constraints: vec![],
            description: "Sum plus product of absolute values, non-differentiable at the axes"
                .to_string(),
            multimodal: false,
            dimensions: vec![2, 10, 30],
        },
    );

    metadata.insert(
        "rastrigin".to_string(),
        FunctionMetadata {
            name: "rastrigin".to_string(),
            display_name: "Rastrigin".to_string(),
            bounds: ProblemKind::Rastrigin.default_bounds(2),
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            variables: benchmark_variables(),
            constraints: vec![],
            description: "N-dimensional multimodal function with a regular grid of local minima"
                .to_string(),
            multimodal: true,
            dimensions: vec![2, 10, 30],
        },
    );

    metadata.insert(
        "ackley".to_string(),
        FunctionMetadata {
            name: "ackley".to_string(),
            display_name: "Ackley".to_string(),
            bounds: ProblemKind::Ackley.default_bounds(2),
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            variables: benchmark_variables(),
            constraints: vec![],
            description: "N-dimensional multimodal function, nearly flat outer region".to_string(),
            multimodal: true,
            dimensions: vec![2, 10, 30],
        },
    );

    metadata.insert(
        "griewank".to_string(),
        FunctionMetadata {
            name: "griewank".to_string(),
            display_name: "Griewank".to_string(),
            bounds: ProblemKind::Griewank.default_bounds(2),
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            variables: benchmark_variables(),
            constraints: vec![],
            description: "N-dimensional multimodal function with product term".to_string(),
            multimodal: true,
            dimensions: vec![2, 10, 30],
        },
    );

    // Engineering design problems
    metadata.insert(
        "spring_design".to_string(),
        FunctionMetadata {
            name: "spring_design".to_string(),
            display_name: "Tension/Compression Spring Design".to_string(),
            bounds: ProblemKind::SpringDesign.default_bounds(3),
            global_minima: vec![(vec![0.051689, 0.356718, 11.288966], 0.012665)],
            variables: vec![
                var("d", "in", "wire diameter"),
                var("D", "in", "mean coil diameter"),
                var("N", "", "number of active coils"),
            ],
            constraints: vec![
                con("shear stress", "1 - D^3 N / (71785 d^4) <= 0"),
                con(
                    "surge frequency",
                    "(4D^2 - dD) / (12566 (D d^3 - d^4)) + 1 / (5108 d^2) - 1 <= 0",
                ),
                con("minimum deflection", "1 - 140.45 d / (D^2 N) <= 0"),
                con("outer diameter", "(D + d) / 1.5 - 1 <= 0"),
            ],
            description: "Minimize spring weight under shear, surge and deflection limits"
                .to_string(),
            multimodal: true,
            dimensions: vec![3],
        },
    );

    metadata.insert(
        "pressure_vessel".to_string(),
        FunctionMetadata {
            name: "pressure_vessel".to_string(),
            display_name: "Pressure Vessel Design".to_string(),
            bounds: ProblemKind::PressureVessel.default_bounds(4),
            global_minima: vec![(vec![0.8125, 0.4375, 42.098446, 176.636596], 6059.714)],
            variables: vec![
                var("Ts", "in", "shell thickness (multiple of 0.0625)"),
                var("Th", "in", "head thickness (multiple of 0.0625)"),
                var("R", "in", "inner radius"),
                var("L", "in", "cylindrical section length"),
            ],
            constraints: vec![
                con("shell thickness", "-Ts + 0.0193 R <= 0"),
                con("head thickness", "-Th + 0.00954 R <= 0"),
                con("volume", "-pi R^2 L - 4/3 pi R^3 + 1296000 <= 0"),
                con("length", "L - 240 <= 0"),
            ],
            description: "Minimize material, forming and welding cost of a capped cylinder"
                .to_string(),
            multimodal: true,
            dimensions: vec![4],
        },
    );

    metadata.insert(
        "welded_beam".to_string(),
        FunctionMetadata {
            name: "welded_beam".to_string(),
            display_name: "Welded Beam Design".to_string(),
            bounds: ProblemKind::WeldedBeam.default_bounds(4),
            global_minima: vec![(vec![0.205730, 3.470489, 9.036624, 0.205730], 1.724852)],
            variables: vec![
                var("h", "in", "weld thickness"),
                var("l", "in", "weld length"),
                var("t", "in", "beam thickness"),
                var("b", "in", "beam width"),
            ],
            constraints: vec![
                con("shear stress", "tau - 13600 <= 0"),
                con("bending stress", "sigma - 30000 <= 0"),
                con("weld width", "h - b <= 0"),
                con("minimum weld", "0.125 - h <= 0"),
                con("end deflection", "delta - 0.25 <= 0"),
                con("buckling load", "6000 - Pc <= 0"),
            ],
            description: "Minimize fabrication cost of a cantilever welded to a support"
                .to_string(),
            multimodal: true,
            dimensions: vec![4],
        },
    );

    metadata.insert(
        "speed_reducer".to_string(),
        FunctionMetadata {
            name: "speed_reducer".to_string(),
            display_name: "Speed Reducer Design".to_string(),
            bounds: ProblemKind::SpeedReducer.default_bounds(7),
            global_minima: vec![(
                vec![3.5, 0.7, 17.0, 7.3, 7.715320, 3.350215, 5.286654],
                2994.47,
            )],
            variables: vec![
                var("b", "cm", "face width"),
                var("m", "cm", "module of teeth"),
                var("z", "", "number of pinion teeth"),
                var("l1", "cm", "length of first shaft between bearings"),
                var("l2", "cm", "length of second shaft between bearings"),
                var("d1", "cm", "diameter of first shaft"),
                var("d2", "cm", "diameter of second shaft"),
            ],
            constraints: vec![
                con("gear bending stress", "27 / (b m^2 z) - 1 <= 0"),
                con("gear surface stress", "397.5 / (b m^2 z^2) - 1 <= 0"),
                con("shaft 1 deflection", "1.93 l1^3 / (m z d1^4) - 1 <= 0"),
                con("shaft 2 deflection", "1.93 l2^3 / (m z d2^4) - 1 <= 0"),
                con(
                    "shaft 1 stress",
                    "sqrt((745 l1 / (m z))^2 + 16.9e6) / (110 d1^3) - 1 <= 0",
                ),
                con(
                    "shaft 2 stress",
                    "sqrt((745 l2 / (m z))^2 + 157.5e6) / (85 d2^3) - 1 <= 0",
                ),
                con("pinion size", "m z / 40 - 1 <= 0"),
                con("width ratio lower", "5 m / b - 1 <= 0"),
                con("width ratio upper", "b / (12 m) - 1 <= 0"),
                con("shaft 1 length", "(1.5 d1 + 1.9) / l1 - 1 <= 0"),
                con("shaft 2 length", "(1.1 d2 + 1.9) / l2 - 1 <= 0"),
            ],
            description: "Minimize gearbox weight under stress, deflection and geometry limits"
                .to_string(),
            multimodal: true,
            dimensions: vec![7],
        },
    );

    metadata
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.bounds.clone())
}
