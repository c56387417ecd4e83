//! N-Queens local search.
//!
//! Place N queens on an N×N board, one per column, so that no two share a row
//! or a diagonal. Searches start from a random placement and move one queen at
//! a time: steepest hill climbing takes the best single move until none
//! improves, min-conflicts repeatedly moves a conflicted queen to its least
//! attacked row.
//!
//! # Example
//!
//! ```rust
//! use queens::prelude::*;
//!
//! let config = QueensConfig::new().with_board_size(8).with_random_seed(5);
//! let mut rng = SearchBuilder::rng(&config);
//!
//! let solution = queens::solve(&config, &mut rng).unwrap();
//! assert!(solution.board.is_solved());
//! assert_eq!(solution.board.size(), 8);
//! ```

pub use queens_core::{
    attacks, column_conflicts, count_conflicts, Board, Configuration, QueensError,
};

pub use queens_solver::{
    Algorithm, ConfiguredSearch, LocalSearch, MinConflicts, RandomRestart, RestartOutcome,
    SearchBuilder, SearchOutcome, SearchStats, SteepestHillClimbing, UnknownAlgorithm,
};

pub use queens_config::{ConfigError, QueensConfig, DEFAULT_BOARD_SIZE, DEFAULT_MAX_STEPS};

pub use queens_benchmark::{
    CsvExporter, MarkdownReport, TrialConfig, TrialResult, TrialRun, TrialRunner,
    DEFAULT_TRIAL_COUNT,
};

#[cfg(feature = "console")]
pub use queens_console as console;

mod run;
pub use run::{run_trials, solve, Solution};

pub mod prelude {
    pub use super::{Algorithm, Board, Configuration, LocalSearch, QueensConfig, QueensError};
    pub use super::{MinConflicts, RandomRestart, SearchBuilder, SteepestHillClimbing};
    pub use super::{RestartOutcome, SearchOutcome, TrialResult};
}
