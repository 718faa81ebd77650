//! End-to-end runs of both solvers on small fixed and generated fields.

use std::sync::Arc;
use std::thread;

use u_tsp::field::{is_permutation, CityField, CityGenerator};
use u_tsp::ga::operators::order_crossover_at;
use u_tsp::ga::{GaConfig, GaRunner};
use u_tsp::random::create_rng;
use u_tsp::sa::{SaConfig, SaRunner};
use u_tsp::TspError;

fn square() -> CityField {
    CityField::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap()
}

#[test]
fn square_corners_reach_perimeter_with_both_solvers() {
    let field = square();

    let ga = GaRunner::run(&field, &GaConfig::default().with_seed(3)).unwrap();
    assert!((ga.best_distance - 40.0).abs() < 1e-9, "GA got {}", ga.best_distance);

    let sa = SaRunner::run(&field, &SaConfig::default().with_seed(3)).unwrap();
    assert!((sa.best_distance - 40.0).abs() < 1e-9, "SA got {}", sa.best_distance);
}

#[test]
fn two_cities_are_rejected_by_both_solvers() {
    let field = CityField::from_coords(&[(0.0, 0.0), (10.0, 0.0)]).unwrap();

    assert!(matches!(
        GaRunner::run(&field, &GaConfig::default()),
        Err(TspError::EmptyField { cities: 2, .. })
    ));
    assert!(matches!(
        SaRunner::run(&field, &SaConfig::default()),
        Err(TspError::EmptyField { cities: 2, .. })
    ));
}

#[test]
fn three_cities_are_rejected_by_both_solvers() {
    let field = CityField::from_coords(&[(0.0, 0.0), (10.0, 0.0), (5.0, 5.0)]).unwrap();
    assert!(GaRunner::run(&field, &GaConfig::default()).is_err());
    assert!(SaRunner::run(&field, &SaConfig::default()).is_err());
}

#[test]
fn reversed_parents_crossover_trace() {
    let child = order_crossover_at(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 1, 3);
    assert_eq!(child, vec![0, 1, 2, 3, 4]);
}

#[test]
fn generated_field_results_are_valid_and_replayable() {
    let field = CityGenerator::default().generate(&mut create_rng(2024)).unwrap();
    let n = field.len();

    let ga_config = GaConfig::default().with_generations(100).with_seed(17);
    let ga = GaRunner::run(&field, &ga_config).unwrap();
    let ga_again = GaRunner::run(&field, &ga_config).unwrap();
    assert!(is_permutation(&ga.best_tour, n));
    assert_eq!(ga.progress_trace.len(), 100);
    assert_eq!(ga.progress_trace, ga_again.progress_trace);
    assert_eq!(ga.best_tour, ga_again.best_tour);

    let sa_config = SaConfig::default().with_seed(17);
    let sa = SaRunner::run(&field, &sa_config).unwrap();
    let sa_again = SaRunner::run(&field, &sa_config).unwrap();
    assert!(is_permutation(&sa.best_tour, n));
    assert_eq!(sa.progress_trace.len(), sa_config.schedule_steps());
    assert_eq!(sa.progress_trace, sa_again.progress_trace);
    assert_eq!(sa.best_tour, sa_again.best_tour);

    for trace in [&ga.progress_trace, &sa.progress_trace] {
        assert!(trace.windows(2).all(|w| w[1] <= w[0]));
    }
}

#[test]
fn solvers_share_one_field_across_threads() {
    let field = CityGenerator::default()
        .with_cities(25)
        .generate(&mut create_rng(1))
        .unwrap();
    let field = Arc::new(field);

    let ga_field = Arc::clone(&field);
    let ga = thread::spawn(move || {
        GaRunner::run(&ga_field, &GaConfig::default().with_generations(50).with_seed(5))
    });
    let sa_field = Arc::clone(&field);
    let sa = thread::spawn(move || SaRunner::run(&sa_field, &SaConfig::default().with_seed(5)));

    let ga = ga.join().unwrap().unwrap();
    let sa = sa.join().unwrap().unwrap();

    // Same results as sequential runs: no shared state between solvers.
    let ga_config = GaConfig::default().with_generations(50).with_seed(5);
    let ga_seq = GaRunner::run(&field, &ga_config).unwrap();
    let sa_seq = SaRunner::run(&field, &SaConfig::default().with_seed(5)).unwrap();
    assert_eq!(ga.best_tour, ga_seq.best_tour);
    assert_eq!(sa.best_tour, sa_seq.best_tour);
}
