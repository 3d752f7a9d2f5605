use badger_hba::{HBAConfigBuilder, HoneyBadger};
use badger_testfunctions::{ProblemKind, ProblemSpec};

fn run(kind: ProblemKind, dim: usize, seed: u64) -> f64 {
    let problem = ProblemSpec::new(kind, dim).unwrap();
    let config = HBAConfigBuilder::new().seed(seed).popsize(30).maxiter(300).build();
    let mut hba = HoneyBadger::new(problem, config).unwrap();
    hba.run_all();
    hba.current_best().1
}

#[test]
fn test_hba_rastrigin_improves() {
    let problem = ProblemSpec::new(ProblemKind::Rastrigin, 2).unwrap();
    let config = HBAConfigBuilder::new().seed(3).popsize(30).maxiter(300).build();
    let mut hba = HoneyBadger::new(problem, config).unwrap();
    let initial = hba.history().latest().best_fitness;
    hba.run_all();
    let (_, f) = hba.current_best();
    assert!(f <= initial);
    // best-known value of the 2-D grid of local minima closest to the origin is ~0.995
    assert!(f < 2.0, "rastrigin best too high: {:.6e}", f);
}

#[test]
fn test_hba_ackley_and_griewank_stay_finite() {
    for (kind, seed) in [(ProblemKind::Ackley, 11), (ProblemKind::Griewank, 12)] {
        let f = run(kind, 2, seed);
        assert!(f.is_finite() && f >= 0.0, "{} best: {}", kind, f);
    }
}
