//! Trial result types.

use std::time::Duration;

use queens_solver::SearchOutcome;

/// One randomize + search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRun {
    /// Trial index (0-based).
    pub trial_index: usize,
    /// Time the search took.
    pub elapsed: Duration,
    /// Search cost reported by the algorithm.
    pub cost: u64,
    /// Conflicts left on the board.
    pub final_conflicts: usize,
}

impl TrialRun {
    /// Records a search outcome as trial `trial_index`.
    ///
    /// # Example
    ///
    /// ```
    /// use queens_benchmark::TrialRun;
    /// use queens_solver::SearchOutcome;
    /// use std::time::Duration;
    ///
    /// let outcome = SearchOutcome::new(Duration::from_millis(3), 17, 0);
    /// let run = TrialRun::from_outcome(4, &outcome);
    /// assert_eq!(run.trial_index, 4);
    /// assert_eq!(run.cost, 17);
    /// assert!(run.is_solved());
    /// ```
    pub fn from_outcome(trial_index: usize, outcome: &SearchOutcome) -> Self {
        Self {
            trial_index,
            elapsed: outcome.elapsed,
            cost: outcome.cost,
            final_conflicts: outcome.conflicts,
        }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.final_conflicts == 0
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Aggregated results of a batch of trials.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    /// Batch name.
    pub name: String,
    /// Name of the search that ran.
    pub algorithm: String,
    /// Board size the trials ran on.
    pub board_size: usize,
    /// Individual trials, in order.
    pub runs: Vec<TrialRun>,
}

impl TrialResult {
    pub fn new(name: impl Into<String>, algorithm: impl Into<String>, board_size: usize) -> Self {
        Self {
            name: name.into(),
            algorithm: algorithm.into(),
            board_size,
            runs: Vec::new(),
        }
    }

    pub fn add_run(&mut self, run: TrialRun) {
        self.runs.push(run);
    }

    pub fn trial_count(&self) -> usize {
        self.runs.len()
    }

    /// Number of trials that ended on a zero-conflict board.
    pub fn solved_count(&self) -> usize {
        self.runs.iter().filter(|r| r.is_solved()).count()
    }

    /// Fraction of solved trials, in `[0, 1]`. Zero when no trial ran.
    ///
    /// # Example
    ///
    /// ```
    /// use queens_benchmark::{TrialResult, TrialRun};
    /// use std::time::Duration;
    ///
    /// let mut result = TrialResult::new("Test", "Min Conflicts", 8);
    /// assert_eq!(result.solve_rate(), 0.0);
    ///
    /// for (trial_index, final_conflicts) in [(0, 0), (1, 2), (2, 0), (3, 1)] {
    ///     result.add_run(TrialRun {
    ///         trial_index,
    ///         elapsed: Duration::from_millis(1),
    ///         cost: 10,
    ///         final_conflicts,
    ///     });
    /// }
    /// assert_eq!(result.solved_count(), 2);
    /// assert!((result.solve_rate() - 0.5).abs() < f64::EPSILON);
    /// ```
    pub fn solve_rate(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.solved_count() as f64 / self.runs.len() as f64
    }

    pub fn avg_elapsed(&self) -> Duration {
        if self.runs.is_empty() {
            return Duration::ZERO;
        }
        let total: u128 = self.runs.iter().map(|r| r.elapsed.as_nanos()).sum();
        mean_duration(total, self.runs.len() as u128)
    }

    /// Average elapsed time in fractional milliseconds.
    pub fn avg_elapsed_ms(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        let total: f64 = self.runs.iter().map(|r| r.elapsed_ms()).sum();
        total / self.runs.len() as f64
    }

    pub fn avg_cost(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        let total: u64 = self.runs.iter().map(|r| r.cost).sum();
        total as f64 / self.runs.len() as f64
    }

    /// Fewest conflicts any trial ended with.
    pub fn best_conflicts(&self) -> Option<usize> {
        self.runs.iter().map(|r| r.final_conflicts).min()
    }

    /// Most conflicts any trial ended with.
    pub fn worst_conflicts(&self) -> Option<usize> {
        self.runs.iter().map(|r| r.final_conflicts).max()
    }

    pub fn min_elapsed(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.elapsed)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    pub fn max_elapsed(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.elapsed)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

/// `total_nanos / count` as a `Duration`, saturating at `u64::MAX` nanoseconds.
fn mean_duration(total_nanos: u128, count: u128) -> Duration {
    let nanos = total_nanos.checked_div(count).unwrap_or(0);
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(trial_index: usize, ms: u64, cost: u64, final_conflicts: usize) -> TrialRun {
        TrialRun {
            trial_index,
            elapsed: Duration::from_millis(ms),
            cost,
            final_conflicts,
        }
    }

    #[test]
    fn test_empty_result() {
        let result = TrialResult::new("Empty", "Steepest Hill Climbing", 21);
        assert_eq!(result.trial_count(), 0);
        assert_eq!(result.solved_count(), 0);
        assert_eq!(result.solve_rate(), 0.0);
        assert_eq!(result.avg_elapsed(), Duration::ZERO);
        assert_eq!(result.avg_elapsed_ms(), 0.0);
        assert_eq!(result.avg_cost(), 0.0);
        assert_eq!(result.best_conflicts(), None);
        assert_eq!(result.worst_conflicts(), None);
    }

    #[test]
    fn test_aggregates() {
        let mut result = TrialResult::new("Batch", "Min Conflicts", 8);
        result.add_run(run(0, 100, 10, 0));
        result.add_run(run(1, 200, 30, 3));
        result.add_run(run(2, 300, 20, 1));

        assert_eq!(result.trial_count(), 3);
        assert_eq!(result.solved_count(), 1);
        assert!((result.solve_rate() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.avg_elapsed(), Duration::from_millis(200));
        assert!((result.avg_elapsed_ms() - 200.0).abs() < 1e-9);
        assert!((result.avg_cost() - 20.0).abs() < 1e-12);
        assert_eq!(result.best_conflicts(), Some(0));
        assert_eq!(result.worst_conflicts(), Some(3));
        assert_eq!(result.min_elapsed(), Duration::from_millis(100));
        assert_eq!(result.max_elapsed(), Duration::from_millis(300));
    }

    #[test]
    fn test_avg_elapsed_ms_keeps_fractions() {
        let mut result = TrialResult::new("Fast", "Min Conflicts", 4);
        result.add_run(TrialRun {
            elapsed: Duration::from_micros(250),
            ..run(0, 0, 1, 0)
        });
        result.add_run(TrialRun {
            elapsed: Duration::from_micros(750),
            ..run(1, 0, 1, 0)
        });
        assert!((result.avg_elapsed_ms() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_avg_elapsed_keeps_sub_millisecond_remainder() {
        let mut result = TrialResult::new("Odd", "Min Conflicts", 4);
        result.add_run(run(0, 1, 1, 0));
        result.add_run(run(1, 2, 1, 0));
        assert_eq!(result.avg_elapsed(), Duration::from_micros(1500));
    }

    #[test]
    fn test_mean_duration_beyond_u32_counts() {
        // 2^32 runs would truncate to a zero divisor as a u32.
        let count = 1u128 << 32;
        let total = Duration::from_millis(3).as_nanos() * count;
        assert_eq!(mean_duration(total, count), Duration::from_millis(3));
        assert_eq!(mean_duration(total, count + 1), Duration::from_nanos(2_999_999));
        assert_eq!(mean_duration(0, 0), Duration::ZERO);
        assert_eq!(mean_duration(u128::MAX, 1), Duration::from_nanos(u64::MAX));
    }

    #[test]
    fn test_all_solved() {
        let mut result = TrialResult::new("Solved", "Min Conflicts", 4);
        result.add_run(run(0, 1, 0, 0));
        result.add_run(run(1, 1, 2, 0));
        assert_eq!(result.solve_rate(), 1.0);
    }
}
