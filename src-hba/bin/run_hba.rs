//! Honey Badger CLI: runs the optimizer on a catalogued problem and prints the result
//!
//! Parameters come from the defaults, then an optional JSON config file, then the
//! command-line flags (highest priority). With `--record` the run is written to
//! `--output-dir` or `$HBA_DIR/data_generated/records`.

use std::error::Error;
use std::path::PathBuf;

use badger_hba::{
    HBAConfig, HBAReport, HoneyBadger, load_config_json, run_recorded_hba, save_config_json,
    save_engineering_result_json,
};
use badger_testfunctions::{ProblemKind, ProblemSpec, get_function_metadata};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Run the Honey Badger Algorithm on a benchmark or engineering problem")]
struct Args {
    /// Problem name (see --list)
    #[arg(long, default_value = "sphere")]
    problem: String,

    /// Dimensionality for benchmark problems (ignored for engineering problems)
    #[arg(long, default_value_t = 2)]
    dim: usize,

    /// Number of agents
    #[arg(long)]
    popsize: Option<usize>,

    /// Number of iterations
    #[arg(long)]
    maxiter: Option<usize>,

    /// Initial density factor C
    #[arg(short = 'c')]
    c: Option<f64>,

    /// Intensity scaling beta
    #[arg(long)]
    beta: Option<f64>,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with HBA parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for recorded data
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Record convergence, positions, parameters (and the design for engineering problems)
    #[arg(long, default_value_t = false)]
    record: bool,

    /// List available problems and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn display_problem_list() {
    println!("Available problems:");
    let metadata = get_function_metadata();
    for kind in ProblemKind::ALL {
        let (display, description) = metadata
            .get(kind.key())
            .map(|m| (m.display_name.as_str(), m.description.as_str()))
            .unwrap_or(("", ""));
        let dim = match kind.fixed_dimension() {
            Some(d) => format!("{}-D", d),
            None => "N-D".to_string(),
        };
        println!("  {:<16} {:<36} {:>4}  {}", kind.key(), display, dim, description);
    }
}

fn build_config(args: &Args) -> HBAConfig {
    let mut config = match &args.config {
        Some(path) => match load_config_json(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("could not apply config file {}: {}; using defaults", path.display(), e);
                HBAConfig::default()
            }
        },
        None => HBAConfig::default(),
    };
    if let Some(v) = args.popsize {
        config.popsize = v;
    }
    if let Some(v) = args.maxiter {
        config.maxiter = v;
    }
    if let Some(v) = args.c {
        config.c = v;
    }
    if let Some(v) = args.beta {
        config.beta = v;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config
}

fn print_report(problem: &ProblemSpec, report: &HBAReport) -> Result<(), Box<dyn Error>> {
    println!("{:?}", report);
    println!("best fitness: {:.10e}", report.fun);

    let meta = problem.metadata();
    println!("best position:");
    for (j, v) in report.x.iter().enumerate() {
        let (name, unit) = meta
            .as_ref()
            .and_then(|m| m.variables.get(j))
            .map(|var| (var.name.clone(), var.unit.clone()))
            .unwrap_or_else(|| (format!("x{}", j), String::new()));
        println!("  {:<4} = {:>14.8} {}", name, v, unit);
    }

    if problem.is_constrained() {
        let eval = problem.evaluate_detailed(&report.x)?;
        println!("raw objective: {:.10e}  penalty: {:.3e}", eval.objective, eval.penalty);
        println!("constraints:");
        for (k, g) in eval.constraints.iter().enumerate() {
            let name = meta
                .as_ref()
                .and_then(|m| m.constraints.get(k))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("g{}", k + 1));
            let status = if *g <= 0.0 { "ok" } else { "VIOLATED" };
            println!("  g{:<2} {:<22} {:>14.6e}  {}", k + 1, name, g, status);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list {
        display_problem_list();
        return Ok(());
    }

    let problem = ProblemSpec::from_name(&args.problem, args.dim)?;
    let config = build_config(&args);
    config.validate()?;

    if args.record {
        let run_name =
            format!("{}_{}", problem.name(), chrono::Local::now().format("%Y%m%d_%H%M%S"));
        let (report, files) =
            run_recorded_hba(&run_name, problem.clone(), config.clone(), args.output_dir.as_deref())?;
        let dir = files.convergence_csv.parent().map(PathBuf::from).unwrap_or_default();
        save_config_json(&config, &dir.join(format!("{}_config.json", run_name)))?;
        if problem.is_constrained() {
            let path = dir.join(format!("{}_result.json", run_name));
            save_engineering_result_json(&problem, &report, &path)?;
            println!("design saved to {}", path.display());
        }
        print_report(&problem, &report)?;
        println!("convergence saved to {}", files.convergence_csv.display());
        println!("positions saved to {}", files.positions_csv.display());
    } else {
        let mut hba = HoneyBadger::new(problem, config)?;
        hba.run_all();
        print_report(hba.problem(), &hba.report())?;
    }

    Ok(())
}
