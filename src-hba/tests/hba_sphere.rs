use badger_hba::{HBAConfigBuilder, HoneyBadger, run_recorded_hba};
use badger_testfunctions::{ProblemKind, ProblemSpec};

#[test]
fn test_hba_sphere_2d_small_population() {
    let problem =
        ProblemSpec::with_bounds(ProblemKind::Sphere, &[(-10.0, 10.0), (-10.0, 10.0)]).unwrap();
    let config = HBAConfigBuilder::new().seed(42).popsize(5).maxiter(50).build();
    let mut hba = HoneyBadger::new(problem, config).unwrap();
    let history = hba.run_all();

    assert_eq!(history.len(), 51);
    let best = history.latest().best_fitness;
    assert!(best < 1e-3, "sphere best too high: {:.6e}", best);
}

#[test]
fn test_hba_sphere_5d() {
    let problem = ProblemSpec::with_bounds(ProblemKind::Sphere, &[(-5.0, 5.0); 5]).unwrap();
    let config = HBAConfigBuilder::new().seed(31).popsize(30).maxiter(300).build();
    let tmp = tempfile::tempdir().unwrap();
    let (report, _files) = run_recorded_hba("sphere_5d", problem, config, Some(tmp.path())).unwrap();
    assert!(report.fun < 1e-5, "sphere 5d best too high: {:.6e}", report.fun);
}

#[test]
fn test_hba_schwefel_2_22() {
    let problem = ProblemSpec::new(ProblemKind::Schwefel222, 3).unwrap();
    let config = HBAConfigBuilder::new().seed(7).popsize(20).maxiter(300).build();
    let mut hba = HoneyBadger::new(problem, config).unwrap();
    hba.run_all();
    let (_, f) = hba.current_best();
    assert!(f < 1e-3, "schwefel 2.22 best too high: {:.6e}", f);
}
