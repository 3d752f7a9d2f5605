//! Error types for the Honey Badger optimizer.
//!
//! Configuration and contract errors are fatal to a run. History lookups fail
//! softly. Export errors wrap the underlying I/O, CSV, JSON or environment error.

use badger_env::EnvError;
use badger_testfunctions::ProblemError;
use thiserror::Error;

/// Errors that can occur while configuring, running or exporting an HBA run.
#[derive(Debug, Error)]
pub enum HBAError {
    /// Population size, density factor, intensity scale or bounds are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A position does not have the dimensionality of the problem.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Problem dimensionality
        expected: usize,
        /// Length of the offending position
        got: usize,
    },

    /// A history lookup past the recorded snapshots.
    #[error("snapshot index {index} out of range (history holds {len})")]
    IndexOutOfRange {
        /// Requested snapshot index
        index: usize,
        /// Number of snapshots recorded
        len: usize,
    },

    /// Registry lookup for a problem name failed.
    #[error("unknown problem: {0}")]
    UnknownProblem(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Env(#[from] EnvError),
}

/// A specialized `Result` type for HBA operations.
pub type Result<T> = std::result::Result<T, HBAError>;

impl From<ProblemError> for HBAError {
    fn from(err: ProblemError) -> Self {
        match err {
            ProblemError::DimensionMismatch { expected, got } => {
                HBAError::DimensionMismatch { expected, got }
            }
            ProblemError::UnknownProblem(name) => HBAError::UnknownProblem(name),
            other => HBAError::InvalidConfiguration(other.to_string()),
        }
    }
}

impl HBAError {
    /// Returns `true` if the run could not start because of its parameters.
    pub fn is_config_error(&self) -> bool {
        matches!(self, HBAError::InvalidConfiguration(_))
    }

    /// Returns `true` if a position had the wrong length.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, HBAError::DimensionMismatch { .. })
    }

    /// Returns `true` for failed lookups (history index, problem name).
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, HBAError::IndexOutOfRange { .. } | HBAError::UnknownProblem(_))
    }

    /// Returns `true` if writing or reading recorded data failed.
    ///
    /// This includes `Io`, `Csv`, `Json` and `Env`.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            HBAError::Io(_) | HBAError::Csv(_) | HBAError::Json(_) | HBAError::Env(_)
        )
    }
}
