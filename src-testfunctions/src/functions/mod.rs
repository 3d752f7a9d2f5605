//! Objective and constraint implementations organized by category
//!
//! - `unimodal`: single-optimum benchmarks (sphere, Schwefel 2.22)
//! - `multimodal`: benchmarks with many local minima (rastrigin, ackley, griewank)
//! - `engineering`: constrained design problems (spring, pressure vessel, welded beam, speed reducer)

pub mod engineering;
pub mod multimodal;
pub mod unimodal;

// Re-export all functions for easy access
pub use engineering::*;
pub use multimodal::*;
pub use unimodal::*;
