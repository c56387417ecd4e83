//! Steepest hill climbing.

use rand::Rng;
use tracing::debug;

use queens_core::{Board, Configuration};

use crate::outcome::SearchOutcome;
use crate::search::{log_search_end, log_search_start, LocalSearch};
use crate::stats::SearchStats;

/// Steepest descent on the conflict count.
///
/// Every step scans all single-queen moves, column by column and row by row,
/// and adopts the one with the fewest conflicts. The search stops as soon as
/// no move strictly improves the current configuration, which may leave the
/// board at a local optimum.
///
/// The search cost is the number of candidate moves evaluated.
///
/// # Example
///
/// ```
/// use queens_core::Board;
/// use queens_solver::{LocalSearch, SteepestHillClimbing};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut board = Board::new(8);
/// let before = board.conflicts();
/// let outcome = SteepestHillClimbing::new().search(&mut board, &mut ChaCha8Rng::seed_from_u64(0));
///
/// assert!(board.conflicts() < before);
/// assert_eq!(outcome.conflicts, board.conflicts());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SteepestHillClimbing;

impl SteepestHillClimbing {
    pub fn new() -> Self {
        Self
    }

    /// Returns the best single-queen successor of `current` and its conflicts.
    ///
    /// Ties keep the first candidate found. The first zero-conflict candidate
    /// is returned straight away without being counted. A solved `current` is
    /// its own successor.
    fn best_successor(
        current: &Configuration,
        current_conflicts: usize,
        stats: &mut SearchStats,
    ) -> (Configuration, usize) {
        if current_conflicts == 0 {
            return (current.clone(), 0);
        }

        let n = current.size();
        let mut trial = current.clone();
        let mut best: Option<Configuration> = None;
        let mut best_conflicts = current_conflicts;

        for column in 0..n {
            let original = current.row(column);
            for row in (0..n).filter(|&row| row != original) {
                trial.set_row(column, row);
                let conflicts = trial.conflicts();

                if conflicts == 0 {
                    return (trial, 0);
                }
                if conflicts < best_conflicts {
                    best = Some(trial.clone());
                    best_conflicts = conflicts;
                }
                stats.record_evaluation();
            }
            trial.set_row(column, original);
        }

        (best.unwrap_or(trial), best_conflicts)
    }
}

impl LocalSearch for SteepestHillClimbing {
    fn name(&self) -> &'static str {
        "Steepest Hill Climbing"
    }

    fn search<R: Rng + ?Sized>(&mut self, board: &mut Board, _rng: &mut R) -> SearchOutcome {
        let mut stats = SearchStats::started();
        let mut current = board.configuration().clone();
        let mut current_conflicts = current.conflicts();
        log_search_start(self.name(), board, current_conflicts);

        loop {
            let (successor, successor_conflicts) =
                Self::best_successor(&current, current_conflicts, &mut stats);
            if successor_conflicts >= current_conflicts {
                break;
            }

            current = successor;
            current_conflicts = successor_conflicts;
            let step = stats.record_step();
            debug!(
                event = "step",
                step = step,
                conflicts = current_conflicts as u64,
                cost = stats.evaluations,
            );
        }

        *board = Board::from(current);
        let outcome = SearchOutcome::new(stats.elapsed(), stats.evaluations, current_conflicts);
        log_search_end(self.name(), &outcome, stats.evaluations_per_second());
        outcome
    }
}
