//! Min-conflicts search.

use rand::Rng;
use tracing::debug;

use queens_config::DEFAULT_MAX_STEPS;
use queens_core::{Board, Configuration};

use crate::outcome::SearchOutcome;
use crate::search::{log_search_end, log_search_start, LocalSearch};
use crate::stats::SearchStats;

/// Min-conflicts with random variable selection.
///
/// Each step picks a random conflicted queen and moves it to the row where it
/// is attacked least. The search gives up after `max_steps` reassignments and
/// leaves whatever it reached on the board.
///
/// The search cost is the number of reassignments.
///
/// # Example
///
/// ```
/// use queens_core::Board;
/// use queens_solver::{LocalSearch, MinConflicts};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let mut board = Board::new(8);
/// board.randomize(&mut rng);
///
/// let outcome = MinConflicts::default().search(&mut board, &mut rng);
/// assert!(outcome.cost <= 1000);
/// assert_eq!(outcome.is_solved(), board.is_solved());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MinConflicts {
    max_steps: u64,
}

impl Default for MinConflicts {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STEPS)
    }
}

impl MinConflicts {
    /// Creates a min-conflicts search bounded to `max_steps` reassignments.
    pub fn new(max_steps: u64) -> Self {
        Self { max_steps }
    }

    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Draws columns uniformly until one is under attack.
    ///
    /// Must only be called on an unsolved configuration.
    fn select_conflicted_column<R: Rng + ?Sized>(config: &Configuration, rng: &mut R) -> usize {
        loop {
            let column = rng.random_range(0..config.size());
            if config.column_conflicts(column) > 0 {
                return column;
            }
        }
    }

    /// Returns the row with the fewest attacks on `column`.
    ///
    /// Rows are scanned in ascending order with `<=`, so ties go to the last
    /// row reaching the minimum.
    fn min_conflict_row(config: &Configuration, column: usize, stats: &mut SearchStats) -> usize {
        let mut trial = config.clone();
        let mut min = config.column_conflicts(column);
        let mut best_row = config.row(column);

        for row in 0..config.size() {
            trial.set_row(column, row);
            let conflicts = trial.column_conflicts(column);
            stats.record_evaluation();
            if conflicts <= min {
                min = conflicts;
                best_row = row;
            }
        }
        best_row
    }
}

impl LocalSearch for MinConflicts {
    fn name(&self) -> &'static str {
        "Min Conflicts"
    }

    fn search<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> SearchOutcome {
        let mut stats = SearchStats::started();
        let mut working = board.configuration().clone();
        log_search_start(self.name(), board, working.conflicts());

        for _ in 0..self.max_steps {
            if working.is_solved() {
                break;
            }

            let column = Self::select_conflicted_column(&working, rng);
            let row = Self::min_conflict_row(&working, column, &mut stats);
            working.set_row(column, row);

            let step = stats.record_step();
            debug!(event = "step", step = step, column = column as u64, row = row as u64);
        }

        let conflicts = working.conflicts();
        *board = Board::from(working);
        let outcome = SearchOutcome::new(stats.elapsed(), stats.step_count, conflicts);
        log_search_end(self.name(), &outcome, stats.evaluations_per_second());
        outcome
    }
}
