use badger_hba::{HBAConfigBuilder, HoneyBadger, save_engineering_result_json};
use badger_testfunctions::{ProblemKind, ProblemSpec};

#[test]
fn test_hba_spring_design_feasible() {
    let problem = ProblemSpec::from_kind(ProblemKind::SpringDesign);
    let config = HBAConfigBuilder::new().seed(42).popsize(30).maxiter(200).build();
    let mut hba = HoneyBadger::new(problem, config).unwrap();
    hba.run_all();

    let (x, f) = hba.current_best();
    let problem = hba.problem();
    let g = problem.constraint_values(x).unwrap();
    for (i, gi) in g.iter().enumerate() {
        assert!(*gi <= 0.0, "g{} = {} violated at {:?}", i + 1, gi, x);
    }
    // no penalty on a feasible design
    assert_eq!(f, problem.raw_objective(x).unwrap());
    assert!(f < 0.02, "spring weight too high: {}", f);
    assert!(problem.contains(x));
}

#[test]
fn test_hba_spring_design_report() {
    let problem = ProblemSpec::from_kind(ProblemKind::SpringDesign);
    let config = HBAConfigBuilder::new().seed(5).popsize(30).maxiter(200).build();
    let mut hba = HoneyBadger::new(problem, config).unwrap();
    hba.run_all();
    let report = hba.report();
    assert_eq!(report.feasible, Some(true));

    let tmp = tempfile::tempdir().unwrap();
    let result =
        save_engineering_result_json(hba.problem(), &report, &tmp.path().join("spring.json"))
            .unwrap();
    assert!(result.feasible);
    assert_eq!(result.penalty, 0.0);
    assert_eq!(result.objective, report.fun);
    let names: Vec<&str> = result.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["d", "D", "N"]);
}
