//! Search statistics.
//!
//! Stack-allocated counters for a single search run.

use std::time::{Duration, Instant};

/// Counters for one search run.
///
/// # Example
///
/// ```
/// use queens_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_evaluation();
/// stats.record_evaluation();
/// stats.record_step();
///
/// assert_eq!(stats.evaluations, 2);
/// assert_eq!(stats.step_count, 1);
/// ```
#[derive(Debug, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Candidate placements whose conflicts were counted.
    pub evaluations: u64,
    /// Moves actually applied to the working configuration.
    pub step_count: u64,
}

impl SearchStats {
    /// Creates statistics with the clock already running.
    pub fn started() -> Self {
        let mut stats = Self::default();
        stats.start();
        stats
    }

    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records one candidate evaluation.
    pub fn record_evaluation(&mut self) {
        self.evaluations += 1;
    }

    /// Records an applied move and returns the new step count.
    pub fn record_step(&mut self) -> u64 {
        self.step_count += 1;
        self.step_count
    }

    /// Returns the evaluations per second rate.
    pub fn evaluations_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.evaluations as f64 / secs) as u64
        } else {
            0
        }
    }
}
