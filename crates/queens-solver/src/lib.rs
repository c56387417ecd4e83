//! Queens Solver - local search over N-Queens boards
//!
//! This crate provides the search engine:
//! - [`SteepestHillClimbing`]: steepest descent on the conflict count
//! - [`MinConflicts`]: random conflicted queen, least-attacked row
//! - [`RandomRestart`]: randomize and rerun until solved
//! - [`SearchBuilder`]: wiring from `queens-config`
//! - [`SearchStats`](stats::SearchStats) and [`SearchOutcome`]: measurements
//!
//! Every search takes its random source as a parameter, so a seeded
//! generator makes a run fully reproducible.

pub mod builder;
pub mod hill_climbing;
pub mod min_conflicts;
pub mod outcome;
pub mod restart;
pub mod search;
pub mod stats;

pub use builder::{Algorithm, ConfiguredSearch, SearchBuilder, UnknownAlgorithm};
pub use hill_climbing::SteepestHillClimbing;
pub use min_conflicts::MinConflicts;
pub use outcome::{RestartOutcome, SearchOutcome};
pub use restart::RandomRestart;
pub use search::LocalSearch;
pub use stats::SearchStats;
