//! Solve-rate trials for N-Queens local search.
//!
//! A trial randomizes the board and runs one search on it. A batch of trials
//! reports how often the search reaches a zero-conflict board, along with
//! average time and cost, and can be exported to CSV and Markdown.
//!
//! # Example
//!
//! ```
//! use queens_benchmark::{TrialConfig, TrialRunner};
//! use queens_core::Board;
//! use queens_solver::MinConflicts;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let runner = TrialRunner::new(TrialConfig::new("8-Queens").with_trial_count(5));
//! let mut board = Board::new(8);
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! let result = runner.run(&mut board, &mut MinConflicts::default(), &mut rng);
//! assert_eq!(result.trial_count(), 5);
//! assert!((0.0..=1.0).contains(&result.solve_rate()));
//! ```

mod config;
mod report;
mod result;
mod runner;

pub use config::{TrialConfig, DEFAULT_TRIAL_COUNT};
pub use report::{CsvExporter, MarkdownReport};
pub use result::{TrialResult, TrialRun};
pub use runner::TrialRunner;
