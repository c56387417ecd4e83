//! The local search contract shared by every algorithm.

use std::fmt::Debug;

use rand::Rng;
use tracing::info;

use queens_core::Board;

use crate::outcome::SearchOutcome;

/// A local search over a single board.
///
/// Implementations read the board's configuration, explore on a private
/// working copy and leave the board holding their final configuration. An
/// unsolved final board is a normal outcome, not an error.
pub trait LocalSearch: Debug {
    /// Returns the name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Runs the search, mutating `board` to the final configuration.
    fn search<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> SearchOutcome;
}

impl<T: LocalSearch + ?Sized> LocalSearch for &mut T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn search<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> SearchOutcome {
        (**self).search(board, rng)
    }
}

pub(crate) fn log_search_start(algorithm: &'static str, board: &Board, conflicts: usize) {
    info!(
        event = "search_start",
        algorithm = algorithm,
        size = board.size() as u64,
        conflicts = conflicts as u64,
    );
}

pub(crate) fn log_search_end(algorithm: &'static str, outcome: &SearchOutcome, speed: u64) {
    info!(
        event = "search_end",
        algorithm = algorithm,
        duration_ms = outcome.elapsed_ms(),
        cost = outcome.cost,
        conflicts = outcome.conflicts as u64,
        solved = outcome.is_solved(),
        speed = speed,
    );
}
