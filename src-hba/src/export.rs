//! Export of recorded runs to CSV and JSON
//!
//! CSV files are meant for plotting scripts, JSON files for replaying a run or
//! reloading its parameters.

use std::fs::{File, create_dir_all};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use badger_testfunctions::ProblemSpec;

use crate::HBAConfig;
use crate::engine::HBAReport;
use crate::error::{HBAError, Result};
use crate::history::RunHistory;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// One row per snapshot: `iteration,best_fitness,alpha,accepted,x0..x{d-1}`
pub fn save_convergence_csv(history: &RunHistory, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut wtr = csv::Writer::from_path(path)?;

    let dim = history.latest().best_position.len();
    let mut header = vec![
        "iteration".to_string(),
        "best_fitness".to_string(),
        "alpha".to_string(),
        "accepted".to_string(),
    ];
    header.extend((0..dim).map(|j| format!("x{}", j)));
    wtr.write_record(&header)?;

    for s in history {
        let mut row = vec![
            s.iteration.to_string(),
            format!("{:.16e}", s.best_fitness),
            format!("{:.16}", s.alpha),
            s.accepted_count().to_string(),
        ];
        row.extend(s.best_position.iter().map(|v| format!("{:.16}", v)));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// One row per agent per snapshot: `iteration,agent,fitness,phase,accepted,x0..x{d-1}`
///
/// The initial snapshot has phase `init` and an empty accepted column.
pub fn save_positions_csv(history: &RunHistory, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut wtr = csv::Writer::from_path(path)?;

    let dim = history.latest().positions.ncols();
    let mut header = vec![
        "iteration".to_string(),
        "agent".to_string(),
        "fitness".to_string(),
        "phase".to_string(),
        "accepted".to_string(),
    ];
    header.extend((0..dim).map(|j| format!("x{}", j)));
    wtr.write_record(&header)?;

    for s in history {
        for (i, pos) in s.positions.rows().into_iter().enumerate() {
            let (phase, accepted) = match s.moves.get(i) {
                Some(m) => (m.phase.as_str().to_string(), m.accepted.to_string()),
                None => ("init".to_string(), String::new()),
            };
            let mut row = vec![
                s.iteration.to_string(),
                i.to_string(),
                format!("{:.16e}", s.fitness[i]),
                phase,
                accepted,
            ];
            row.extend(pos.iter().map(|v| format!("{:.16}", v)));
            wtr.write_record(&row)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Full history (every snapshot with positions, fitness and moves) as JSON
pub fn save_history_json(history: &RunHistory, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, history)?;
    Ok(())
}

pub fn save_config_json(config: &HBAConfig, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, config)?;
    Ok(())
}

/// Load parameters saved by [`save_config_json`]; missing fields take their defaults
pub fn load_config_json(path: &Path) -> Result<HBAConfig> {
    let reader = BufReader::new(File::open(path)?);
    let config: HBAConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableValue {
    pub name: String,
    pub unit: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintValue {
    pub name: String,
    pub formula: String,
    pub value: f64,
    pub satisfied: bool,
}

/// Best design of an engineering run with its constraint breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineeringResult {
    pub problem: String,
    pub display_name: String,
    pub fitness: f64,
    pub objective: f64,
    pub penalty: f64,
    pub feasible: bool,
    pub variables: Vec<VariableValue>,
    pub constraints: Vec<ConstraintValue>,
    pub iterations: usize,
    pub evaluations: usize,
    /// RFC 3339 timestamp
    pub generated_at: String,
}

impl EngineeringResult {
    /// Evaluate the report's best position against `problem` and attach display names
    pub fn from_report(problem: &ProblemSpec, report: &HBAReport) -> Result<Self> {
        let eval = problem.evaluate_detailed(&report.x)?;
        let meta = problem.metadata().ok_or_else(|| {
            HBAError::UnknownProblem(format!("no metadata for {}", problem.name()))
        })?;

        let variables = report
            .x
            .iter()
            .enumerate()
            .map(|(j, &value)| match meta.variables.get(j) {
                Some(v) => VariableValue { name: v.name.clone(), unit: v.unit.clone(), value },
                None => VariableValue { name: format!("x{}", j), unit: String::new(), value },
            })
            .collect();
        let constraints = eval
            .constraints
            .iter()
            .enumerate()
            .map(|(k, &value)| {
                let (name, formula) = match meta.constraints.get(k) {
                    Some(c) => (c.name.clone(), c.formula.clone()),
                    None => (format!("g{}", k + 1), String::new()),
                };
                ConstraintValue { name, formula, value, satisfied: value <= 0.0 }
            })
            .collect();

        Ok(Self {
            problem: problem.name().to_string(),
            display_name: meta.display_name,
            fitness: eval.fitness,
            objective: eval.objective,
            penalty: eval.penalty,
            feasible: eval.is_feasible(),
            variables,
            constraints,
            iterations: report.nit,
            evaluations: report.nfev,
            generated_at: chrono::Local::now().to_rfc3339(),
        })
    }
}

pub fn save_engineering_result_json(
    problem: &ProblemSpec,
    report: &HBAReport,
    path: &Path,
) -> Result<EngineeringResult> {
    let result = EngineeringResult::from_report(problem, report)?;
    ensure_parent(path)?;
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &result)?;
    Ok(result)
}
