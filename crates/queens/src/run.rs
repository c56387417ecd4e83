//! Entry points that wire configuration, board and search together.

use rand::Rng;

use queens_benchmark::{TrialConfig, TrialResult, TrialRunner};
use queens_config::{ConfigError, QueensConfig};
use queens_core::Board;
use queens_solver::{Algorithm, RestartOutcome, SearchBuilder};

/// A board found by [`solve`] together with how it was found.
#[derive(Debug, Clone)]
pub struct Solution {
    pub board: Board,
    pub outcome: RestartOutcome,
}

/// Runs random restart min-conflicts on a board of the configured size.
///
/// Without `restart.max_restarts` this loops until the board is solved, so it
/// never returns for sizes 2 and 3.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if `config` fails validation.
pub fn solve<R: Rng + ?Sized>(config: &QueensConfig, rng: &mut R) -> Result<Solution, ConfigError> {
    config.validate()?;

    let mut board = SearchBuilder::board(config);
    let outcome = SearchBuilder::restart(config).solve(&mut board, rng);
    Ok(Solution { board, outcome })
}

/// Runs `trial_count` randomize + search trials of `algorithm`.
///
/// Reports are written to the paths in the `[trials]` section when set.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if `config` fails validation and
/// [`ConfigError::Io`] if a report cannot be written.
///
/// # Example
///
/// ```
/// use queens::{run_trials, Algorithm, QueensConfig};
/// use queens_test::seeded_rng;
///
/// let config = QueensConfig::new().with_board_size(8);
/// let result = run_trials(Algorithm::MinConflicts, &config, 5, &mut seeded_rng(3)).unwrap();
/// assert_eq!(result.trial_count(), 5);
/// assert_eq!(result.algorithm, "Min Conflicts");
/// ```
pub fn run_trials<R: Rng + ?Sized>(
    algorithm: Algorithm,
    config: &QueensConfig,
    trial_count: usize,
    rng: &mut R,
) -> Result<TrialResult, ConfigError> {
    config.validate()?;

    let runner = TrialRunner::new(
        TrialConfig::from_config(algorithm.name(), config).with_trial_count(trial_count),
    );
    let mut board = SearchBuilder::board(config);
    let mut search = SearchBuilder::build(algorithm, config);

    let result = runner.run(&mut board, &mut search, rng);
    runner.export(&result)?;
    Ok(result)
}
