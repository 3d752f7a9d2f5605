//! Environment variable utilities
//!
//! `HBA_DIR` points to the project root. Recorded runs land in
//! `$HBA_DIR/data_generated/records` unless a caller passes an explicit directory.

use crate::constants::{DATA_GENERATED, HBA_DIR_VAR, HBA_TIMING_VAR, RECORDS};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "HBA_DIR environment variable is not set. Please set it to the project root directory (e.g., export HBA_DIR=/path/to/badger)"
    )]
    HbaDirNotSet,

    #[error("HBA_DIR points to a non-existent directory: {0}")]
    HbaDirNotFound(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(std::io::Error),
}

/// Validate a raw `HBA_DIR` value
///
/// Split out of [`get_hba_dir`] so the rules can be checked without touching
/// the process environment.
pub fn resolve_hba_dir(value: Option<String>) -> Result<PathBuf, EnvError> {
    let raw = value.ok_or(EnvError::HbaDirNotSet)?;
    let path = PathBuf::from(raw);

    if !path.exists() {
        return Err(EnvError::HbaDirNotFound(path));
    }

    Ok(path)
}

/// Get the HBA_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if HBA_DIR is not set or points to a non-existent directory.
///
/// # Example
///
/// ```no_run
/// use badger_env::env_utils::get_hba_dir;
///
/// let root = get_hba_dir()?;
/// println!("Project directory: {}", root.display());
/// # Ok::<(), badger_env::env_utils::EnvError>(())
/// ```
pub fn get_hba_dir() -> Result<PathBuf, EnvError> {
    resolve_hba_dir(env::var(HBA_DIR_VAR).ok())
}

/// Create `dir` (and parents) if missing and return it
pub fn ensure_dir(dir: &Path) -> Result<PathBuf, EnvError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(EnvError::DirectoryCreationFailed)?;
    }
    Ok(dir.to_path_buf())
}

/// Get the path to the data_generated directory, creating it if necessary
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    let root = get_hba_dir()?;
    ensure_dir(&root.join(DATA_GENERATED))
}

/// Get the path to the records subdirectory within data_generated
///
/// # Example
///
/// ```no_run
/// use badger_env::env_utils::get_records_dir;
///
/// let records_dir = get_records_dir()?;
/// println!("Records directory: {}", records_dir.display());
/// # Ok::<(), badger_env::env_utils::EnvError>(())
/// ```
pub fn get_records_dir() -> Result<PathBuf, EnvError> {
    let data_generated = get_data_generated_dir()?;
    ensure_dir(&data_generated.join(RECORDS))
}

/// Interpret a switch value: unset or `"0"` is off, anything else is on
pub fn parse_switch(value: Option<&str>) -> bool {
    value.map(|v| v != "0").unwrap_or(false)
}

/// Whether `HBA_TIMING` asks for per-step timing logs
pub fn timing_enabled() -> bool {
    parse_switch(env::var(HBA_TIMING_VAR).ok().as_deref())
}
