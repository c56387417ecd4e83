//! Trial runner.

use std::io;

use rand::Rng;
use tracing::{debug, info};

use queens_core::Board;
use queens_solver::LocalSearch;

use crate::config::TrialConfig;
use crate::report::{CsvExporter, MarkdownReport};
use crate::result::{TrialResult, TrialRun};

/// Runs a search against freshly randomized boards and collects the outcomes.
#[derive(Debug, Clone, Default)]
pub struct TrialRunner {
    config: TrialConfig,
}

impl TrialRunner {
    pub fn new(config: TrialConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Runs the configured number of trials.
    ///
    /// Each trial randomizes `board` from `rng` and runs `search` on it. The
    /// board is left holding the configuration of the last trial.
    pub fn run<A, R>(&self, board: &mut Board, search: &mut A, rng: &mut R) -> TrialResult
    where
        A: LocalSearch,
        R: Rng + ?Sized,
    {
        let mut result = TrialResult::new(self.config.name(), search.name(), board.size());

        for trial_index in 0..self.config.trial_count() {
            board.randomize(rng);
            let outcome = search.search(board, rng);
            let run = TrialRun::from_outcome(trial_index, &outcome);

            debug!(
                event = "trial_end",
                trial = trial_index as u64,
                duration_ms = outcome.elapsed_ms(),
                cost = run.cost,
                conflicts = run.final_conflicts as u64,
                solved = run.is_solved(),
            );
            result.add_run(run);
        }

        info!(
            event = "trials_end",
            name = self.config.name(),
            algorithm = search.name(),
            trials = result.trial_count() as u64,
            solved_count = result.solved_count() as u64,
            solve_rate = result.solve_rate(),
            avg_ms = result.avg_elapsed_ms(),
            avg_cost = result.avg_cost(),
        );

        result
    }

    /// Writes the CSV and Markdown reports to whichever paths are configured.
    pub fn export(&self, result: &TrialResult) -> io::Result<()> {
        if let Some(path) = self.config.csv_output() {
            CsvExporter::to_file(result, path)?;
        }
        if let Some(path) = self.config.markdown_output() {
            MarkdownReport::to_file(result, path)?;
        }
        Ok(())
    }
}
