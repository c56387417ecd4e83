//! Builder module for constructing searches from configuration
//!
//! This module provides the wiring between `queens-config` and the search
//! implementations.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use queens_config::QueensConfig;
use queens_core::Board;

use crate::hill_climbing::SteepestHillClimbing;
use crate::min_conflicts::MinConflicts;
use crate::outcome::SearchOutcome;
use crate::restart::RandomRestart;
use crate::search::LocalSearch;

/// Error returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown algorithm '{0}', expected 'hill_climbing' or 'min_conflicts'")]
pub struct UnknownAlgorithm(pub String);

/// The available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    SteepestHillClimbing,
    MinConflicts,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::SteepestHillClimbing, Algorithm::MinConflicts];

    /// Returns the display name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::SteepestHillClimbing => "Steepest Hill Climbing",
            Algorithm::MinConflicts => "Min Conflicts",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses `hill_climbing`, `steepest_hill_climbing` or `min_conflicts`;
    /// dashes and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "hill_climbing" | "steepest_hill_climbing" | "hc" => {
                Ok(Algorithm::SteepestHillClimbing)
            }
            "min_conflicts" | "mc" => Ok(Algorithm::MinConflicts),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A search built from configuration.
#[derive(Debug, Clone, Copy)]
pub enum ConfiguredSearch {
    SteepestHillClimbing(SteepestHillClimbing),
    MinConflicts(MinConflicts),
}

impl LocalSearch for ConfiguredSearch {
    fn name(&self) -> &'static str {
        match self {
            ConfiguredSearch::SteepestHillClimbing(search) => search.name(),
            ConfiguredSearch::MinConflicts(search) => search.name(),
        }
    }

    fn search<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> SearchOutcome {
        match self {
            ConfiguredSearch::SteepestHillClimbing(search) => search.search(board, rng),
            ConfiguredSearch::MinConflicts(search) => search.search(board, rng),
        }
    }
}

/// Builder for constructing searches from configuration.
pub struct SearchBuilder;

impl SearchBuilder {
    /// Builds the given algorithm with settings from `config`.
    pub fn build(algorithm: Algorithm, config: &QueensConfig) -> ConfiguredSearch {
        match algorithm {
            Algorithm::SteepestHillClimbing => {
                ConfiguredSearch::SteepestHillClimbing(SteepestHillClimbing::new())
            }
            Algorithm::MinConflicts => ConfiguredSearch::MinConflicts(Self::min_conflicts(config)),
        }
    }

    /// Creates a min-conflicts search bounded by `min_conflicts.max_steps`.
    pub fn min_conflicts(config: &QueensConfig) -> MinConflicts {
        MinConflicts::new(config.min_conflicts.max_steps)
    }

    /// Creates the random restart min-conflicts search used to find a solution.
    pub fn restart(config: &QueensConfig) -> RandomRestart<MinConflicts> {
        RandomRestart::new(Self::min_conflicts(config))
            .with_restart_limit(config.restart.max_restarts)
    }

    /// Creates the random source: seeded when `random_seed` is set, from the
    /// operating system otherwise.
    pub fn rng(config: &QueensConfig) -> ChaCha8Rng {
        match config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }

    /// Creates an empty board of the configured size.
    pub fn board(config: &QueensConfig) -> Board {
        Board::new(config.board_size)
    }
}
