//! The interactive menu loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;

use queens::{run_trials, solve, Algorithm, QueensConfig};

use crate::menu::{
    format_solution, format_trial_summary, menu_text, parse_trial_count, MenuChoice,
};

/// Reads menu choices from `input` until `4` or end of input.
pub struct Session<'a, R: ?Sized> {
    config: &'a QueensConfig,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Session<'a, R> {
    pub fn new(config: &'a QueensConfig, rng: &'a mut R) -> Self {
        Self { config, rng }
    }

    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> Result<()> {
        loop {
            write!(output, "{}", menu_text(self.config.board_size))?;
            output.flush()?;

            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::FindSolution) => self.find_solution(&mut output)?,
                Some(MenuChoice::SolveRate(algorithm)) => {
                    writeln!(output, "Enter number of test cases to use: ")?;
                    output.flush()?;
                    let Some(line) = read_line(&mut input)? else {
                        return Ok(());
                    };
                    match parse_trial_count(&line) {
                        Ok(count) => self.solve_rate(algorithm, count, &mut output)?,
                        Err(err) => {
                            writeln!(output, "{err}")?;
                            continue;
                        }
                    }
                }
                Some(MenuChoice::Exit) => return Ok(()),
                None => writeln!(output, "Invalid option entered")?,
            }

            writeln!(output)?;
        }
    }

    pub fn find_solution<O: Write>(&mut self, output: &mut O) -> Result<()> {
        let solution = solve(self.config, &mut *self.rng)?;
        write!(output, "{}", format_solution(&solution.board, &solution.outcome))?;
        Ok(())
    }

    pub fn solve_rate<O: Write>(
        &mut self,
        algorithm: Algorithm,
        trial_count: usize,
        output: &mut O,
    ) -> Result<()> {
        let result = run_trials(algorithm, self.config, trial_count, &mut *self.rng)?;
        write!(output, "{}", format_trial_summary(&result))?;
        Ok(())
    }
}

/// Next line without its terminator, `None` at end of input.
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use queens_test::seeded_rng;
    use std::io::Cursor;

    fn run_session(config: &QueensConfig, input: &str) -> String {
        let mut rng = seeded_rng(21);
        let mut output = Vec::new();
        Session::new(config, &mut rng)
            .run(Cursor::new(input), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn small_config() -> QueensConfig {
        QueensConfig::new().with_board_size(6)
    }

    #[test]
    fn test_exit_immediately() {
        let output = run_session(&small_config(), "4\n");
        assert_eq!(output, menu_text(6));
    }

    #[test]
    fn test_end_of_input_exits() {
        let output = run_session(&small_config(), "");
        assert_eq!(output, menu_text(6));
    }

    #[test]
    fn test_invalid_option() {
        let output = run_session(&small_config(), "9\n4\n");
        assert!(output.contains("Invalid option entered\n\n"));
        assert_eq!(output.matches("Select an option:").count(), 2);
    }

    #[test]
    fn test_find_solution() {
        let output = run_session(&small_config(), "1\n4\n");
        assert!(output.contains("(1) Find a 6-Queen solution"));
        assert!(output.contains("Time to execute:\n"));
        assert!(output.contains("Search Cost\n"));
        // Six grid lines of six squares, one queen each.
        let grid: Vec<&str> = output
            .lines()
            .filter(|l| l.len() == 6 && l.chars().all(|c| c == 'Q' || c == '-'))
            .collect();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.concat().matches('Q').count(), 6);
    }

    #[test]
    fn test_solve_rate_prompts_for_count() {
        let output = run_session(&small_config(), "3\n4\n4\n");
        assert!(output.contains("Enter number of test cases to use: \n"));
        assert!(output.contains("Min Conflicts Results:\n"));
        assert!(output.contains("Solve rate:\n"));
    }

    #[test]
    fn test_hill_climbing_solve_rate() {
        let output = run_session(&small_config(), "2\n5\n4\n");
        assert!(output.contains("Steepest Hill Climbing Results:\n"));
        assert!(output.contains("Average search cost:\n"));
    }

    #[test]
    fn test_non_numeric_count_returns_to_menu() {
        let output = run_session(&small_config(), "2\nabc\n4\n");
        assert!(output.contains("You must enter a number\n"));
        assert!(!output.contains("Results:"));
        assert_eq!(output.matches("Select an option:").count(), 2);
    }

    #[test]
    fn test_end_of_input_at_count_prompt() {
        let output = run_session(&small_config(), "3\n");
        assert!(output.ends_with("Enter number of test cases to use: \n"));
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut input = Cursor::new("12\r\nnext\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("12"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("next"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
