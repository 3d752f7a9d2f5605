//! Environment utilities for the Honey Badger workspace
//!
//! Resolves where recorded runs are written and reads the few environment
//! switches the optimizer understands.

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
