//! Random restart around a local search.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use queens_core::Board;

use crate::outcome::RestartOutcome;
use crate::search::LocalSearch;

/// Re-randomizes the board and reruns the wrapped search until it solves.
///
/// Without a bound this never returns on boards that have no solution
/// (N = 2 or 3).
///
/// # Example
///
/// ```
/// use queens_core::Board;
/// use queens_solver::{MinConflicts, RandomRestart};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut board = Board::new(8);
/// let outcome = RandomRestart::new(MinConflicts::default())
///     .solve(&mut board, &mut ChaCha8Rng::seed_from_u64(1));
///
/// assert!(outcome.is_solved());
/// assert!(board.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct RandomRestart<A> {
    search: A,
    max_restarts: Option<u64>,
}

impl<A: LocalSearch> RandomRestart<A> {
    /// Restarts `search` until the board is solved.
    pub fn new(search: A) -> Self {
        Self {
            search,
            max_restarts: None,
        }
    }

    /// Stops after `max_restarts` attempts even if unsolved.
    pub fn with_max_restarts(mut self, max_restarts: u64) -> Self {
        self.max_restarts = Some(max_restarts);
        self
    }

    /// Stops after `max_restarts` attempts when `Some`.
    pub fn with_restart_limit(mut self, max_restarts: Option<u64>) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    pub fn search(&self) -> &A {
        &self.search
    }

    pub fn max_restarts(&self) -> Option<u64> {
        self.max_restarts
    }

    /// Runs randomize + search until solved or out of attempts.
    pub fn solve<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> RestartOutcome {
        let start = Instant::now();
        let mut attempts = 0u64;
        let mut total_cost = 0u64;

        loop {
            board.randomize(rng);
            let last = self.search.search(board, rng);
            attempts += 1;
            total_cost += last.cost;

            debug!(
                event = "restart",
                attempt = attempts,
                cost = last.cost,
                conflicts = last.conflicts as u64,
            );

            let exhausted = self.max_restarts.is_some_and(|max| attempts >= max);
            if last.is_solved() || exhausted {
                let outcome = RestartOutcome {
                    last,
                    attempts,
                    total_cost,
                    total_elapsed: start.elapsed(),
                };
                info!(
                    event = "restart_end",
                    algorithm = self.search.name(),
                    attempts = attempts,
                    cost = total_cost,
                    duration_ms = outcome.total_elapsed.as_millis() as u64,
                    solved = outcome.is_solved(),
                );
                return outcome;
            }
        }
    }
}
