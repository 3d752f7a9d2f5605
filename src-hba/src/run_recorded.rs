//! Recording wrapper for the Honey Badger optimizer for testing purposes

use std::path::{Path, PathBuf};

use badger_testfunctions::ProblemSpec;

use crate::HBAConfig;
use crate::engine::{HBAReport, HoneyBadger};
use crate::error::Result;
use crate::export::{save_convergence_csv, save_positions_csv};

/// Files written by [`run_recorded_hba`]
#[derive(Debug, Clone)]
pub struct RecordedFiles {
    pub convergence_csv: PathBuf,
    pub positions_csv: PathBuf,
}

/// Run HBA to completion and record the run to CSV
///
/// Writes `{name}_convergence.csv` and `{name}_positions.csv` into `output_dir`, or into
/// `$HBA_DIR/data_generated/records` when no directory is given.
pub fn run_recorded_hba(
    name: &str,
    problem: ProblemSpec,
    config: HBAConfig,
    output_dir: Option<&Path>,
) -> Result<(HBAReport, RecordedFiles)> {
    let dir = match output_dir {
        Some(dir) => badger_env::ensure_dir(dir)?,
        None => badger_env::get_records_dir()?,
    };

    let mut hba = HoneyBadger::new(problem, config)?;
    let history = hba.run_all();

    let files = RecordedFiles {
        convergence_csv: dir.join(format!("{}_convergence.csv", name)),
        positions_csv: dir.join(format!("{}_positions.csv", name)),
    };
    save_convergence_csv(history, &files.convergence_csv)?;
    save_positions_csv(history, &files.positions_csv)?;
    log::info!("recorded {} to {}", name, dir.display());

    Ok((hba.report(), files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HBAConfigBuilder;
    use badger_testfunctions::ProblemKind;

    #[test]
    fn test_run_recorded_basic() {
        let tmp = tempfile::tempdir().unwrap();
        let problem =
            ProblemSpec::with_bounds(ProblemKind::Sphere, &[(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
        let config = HBAConfigBuilder::new().seed(42).maxiter(60).popsize(10).build();

        let (report, files) =
            run_recorded_hba("test_sphere", problem, config, Some(tmp.path())).unwrap();

        assert!(report.success);
        assert_eq!(report.nit, 60);
        assert!(report.fun < 1e-2, "Function value too high: {}", report.fun);
        assert!(files.convergence_csv.exists());
        assert!(files.positions_csv.exists());

        let content = std::fs::read_to_string(&files.convergence_csv).unwrap();
        // header plus one line per snapshot
        assert_eq!(content.trim().lines().count(), 1 + 61);
    }

    #[test]
    fn test_run_recorded_rejects_bad_config() {
        let tmp = tempfile::tempdir().unwrap();
        let problem = ProblemSpec::new(ProblemKind::Sphere, 2).unwrap();
        let config = HBAConfigBuilder::new().popsize(0).build();
        let err = run_recorded_hba("bad", problem, config, Some(tmp.path())).unwrap_err();
        assert!(err.is_config_error());
    }
}
