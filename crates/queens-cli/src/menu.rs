//! Menu parsing and result formatting.

use std::time::Duration;

use thiserror::Error;

use queens::{Algorithm, Board, RestartOutcome, TrialResult};

/// Invalid user input at a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("You must enter a number")]
    NotANumber(String),
}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FindSolution,
    SolveRate(Algorithm),
    Exit,
}

impl MenuChoice {
    /// Parses a menu line. Returns `None` for anything but `1` to `4`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::FindSolution),
            "2" => Some(Self::SolveRate(Algorithm::SteepestHillClimbing)),
            "3" => Some(Self::SolveRate(Algorithm::MinConflicts)),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Parses a trial count typed at the prompt.
pub fn parse_trial_count(line: &str) -> Result<usize, InputError> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

pub fn menu_text(board_size: usize) -> String {
    format!(
        "Select an option:\n\
         (1) Find a {board_size}-Queen solution\n\
         (2) Test solve rate for steepest hill climbing algorithm\n\
         (3) Test solve rate for min conflicts algorithm\n\
         (4) Exit\n"
    )
}

/// `[r0, r1, ...]`
pub fn format_rows(rows: &[usize]) -> String {
    let rows: Vec<String> = rows.iter().map(usize::to_string).collect();
    format!("[{}]", rows.join(", "))
}

/// Whole milliseconds, or `<1 ms` below one.
pub fn format_elapsed(elapsed: Duration) -> String {
    match elapsed.as_millis() {
        0 => "<1 ms".to_string(),
        ms => format!("{ms} ms"),
    }
}

pub fn format_solution(board: &Board, outcome: &RestartOutcome) -> String {
    format!(
        "{}{}\nTime to execute:\n{}\nSearch Cost\n{}\n",
        board.render(),
        format_rows(board.rows()),
        format_elapsed(outcome.last.elapsed),
        outcome.last.cost
    )
}

pub fn format_trial_summary(result: &TrialResult) -> String {
    format!(
        "{} Results:\n\
         Average execution time:\n{:.3} ms\n\
         Average search cost:\n{:.1}\n\
         Solve rate:\n{:.1}%\n",
        result.algorithm,
        result.avg_elapsed_ms(),
        result.avg_cost(),
        result.solve_rate() * 100.0
    )
}
