//! Results reported by a search.

use std::time::Duration;

/// What a single search run reports back.
///
/// The board itself carries the final configuration; this only holds the
/// measurements.
///
/// # Example
///
/// ```
/// use queens_solver::SearchOutcome;
/// use std::time::Duration;
///
/// let outcome = SearchOutcome::new(Duration::from_micros(1500), 42, 0);
/// assert_eq!(outcome.elapsed_ms(), 1);
/// assert!(outcome.is_solved());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
    /// Search cost: evaluated successors for hill climbing, reassignments for
    /// min-conflicts.
    pub cost: u64,
    /// Conflicts left on the board when the search returned.
    pub conflicts: usize,
}

impl SearchOutcome {
    pub fn new(elapsed: Duration, cost: u64, conflicts: usize) -> Self {
        Self {
            elapsed,
            cost,
            conflicts,
        }
    }

    /// Elapsed time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.conflicts == 0
    }
}

/// Result of a random restart run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartOutcome {
    /// Outcome of the final attempt, the one whose configuration is on the board.
    pub last: SearchOutcome,
    /// Number of randomize + search attempts made.
    pub attempts: u64,
    /// Cost summed over every attempt.
    pub total_cost: u64,
    /// Time spent over every attempt.
    pub total_elapsed: Duration,
}

impl RestartOutcome {
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.last.is_solved()
    }
}
