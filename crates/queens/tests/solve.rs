//! Facade entry points against the shared fixtures.

use queens::prelude::*;
use queens::{run_trials, solve, ConfigError};
use queens_test::{count_solutions, seeded_rng};

#[test]
fn test_solve_finds_valid_placement() {
    let config = QueensConfig::new().with_board_size(10);
    let solution = solve(&config, &mut seeded_rng(17)).unwrap();

    assert!(solution.outcome.is_solved());
    assert!(solution.board.is_solved());
    assert_eq!(solution.board.conflicts(), 0);
    assert!(solution.outcome.attempts >= 1);
    assert!(solution.outcome.total_cost >= solution.outcome.last.cost);
}

#[test]
fn test_solve_default_size() {
    let config = QueensConfig::new();
    let solution = solve(&config, &mut seeded_rng(1)).unwrap();
    assert_eq!(solution.board.size(), 21);
    assert!(solution.board.is_solved());
}

#[test]
fn test_solve_gives_up_on_unsolvable_board_when_bounded() {
    assert_eq!(count_solutions(3), 0);
    let config = QueensConfig::new()
        .with_board_size(3)
        .with_max_steps(10)
        .with_max_restarts(4);

    let solution = solve(&config, &mut seeded_rng(8)).unwrap();
    assert!(!solution.outcome.is_solved());
    assert_eq!(solution.outcome.attempts, 4);
}

#[test]
fn test_unbounded_solve_on_unsolvable_size_is_rejected() {
    for size in [2, 3] {
        assert_eq!(count_solutions(size), 0);
        let config = QueensConfig::new().with_board_size(size);
        assert!(matches!(
            solve(&config, &mut seeded_rng(0)),
            Err(ConfigError::Invalid(_))
        ));
    }
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = QueensConfig::new().with_board_size(0);
    assert!(matches!(
        solve(&config, &mut seeded_rng(0)),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        run_trials(Algorithm::MinConflicts, &config, 3, &mut seeded_rng(0)),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_trials_for_both_algorithms() {
    let config = QueensConfig::new().with_board_size(8);
    for algorithm in Algorithm::ALL {
        let result = run_trials(algorithm, &config, 6, &mut seeded_rng(99)).unwrap();
        assert_eq!(result.trial_count(), 6);
        assert_eq!(result.algorithm, algorithm.name());
        assert!((0.0..=1.0).contains(&result.solve_rate()));
    }
}
