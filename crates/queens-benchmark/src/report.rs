//! Report generation for trial results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::TrialResult;

/// CSV exporter for trial results.
///
/// One row per trial: index, elapsed time, cost, final conflicts and whether
/// the board was solved.
///
/// # Example
///
/// ```
/// use queens_benchmark::{CsvExporter, TrialResult, TrialRun};
/// use std::time::Duration;
///
/// let mut result = TrialResult::new("Test", "Min Conflicts", 8);
/// result.add_run(TrialRun {
///     trial_index: 0,
///     elapsed: Duration::from_micros(1500),
///     cost: 42,
///     final_conflicts: 0,
/// });
///
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.starts_with("trial_index,elapsed_ms,cost,final_conflicts,solved\n"));
/// assert!(csv.contains("0,1.500,42,0,true"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    pub fn to_string(result: &TrialResult) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render(result, &mut output);
        output
    }

    fn render(result: &TrialResult, output: &mut String) -> fmt::Result {
        writeln!(output, "trial_index,elapsed_ms,cost,final_conflicts,solved")?;
        for run in &result.runs {
            writeln!(
                output,
                "{},{:.3},{},{},{}",
                run.trial_index,
                run.elapsed_ms(),
                run.cost,
                run.final_conflicts,
                run.is_solved(),
            )?;
        }
        Ok(())
    }

    pub fn to_file(result: &TrialResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    pub fn write<W: Write>(result: &TrialResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Markdown report generator.
///
/// Produces a summary table (solve rate, timings, cost, conflicts) followed
/// by one row per trial.
///
/// # Example
///
/// ```
/// use queens_benchmark::{MarkdownReport, TrialResult};
///
/// let result = TrialResult::new("Test", "Steepest Hill Climbing", 21);
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Trials: Test"));
/// assert!(md.contains("*No trials run.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    pub fn to_string(result: &TrialResult) -> String {
        let mut output = String::new();
        let _ = Self::render(result, &mut output);
        output
    }

    fn render(result: &TrialResult, output: &mut String) -> fmt::Result {
        writeln!(output, "# Trials: {}", result.name)?;
        writeln!(output)?;
        writeln!(output, "- **Algorithm**: {}", result.algorithm)?;
        writeln!(
            output,
            "- **Board**: {}x{}",
            result.board_size, result.board_size
        )?;
        writeln!(output, "- **Trials**: {}", result.trial_count())?;
        writeln!(output)?;

        writeln!(output, "## Summary")?;
        writeln!(output)?;

        match (result.best_conflicts(), result.worst_conflicts()) {
            (Some(best), Some(worst)) => {
                writeln!(output, "| Metric | Value |")?;
                writeln!(output, "|--------|-------|")?;
                writeln!(
                    output,
                    "| Solve Rate | {:.2}% ({}/{}) |",
                    result.solve_rate() * 100.0,
                    result.solved_count(),
                    result.trial_count()
                )?;
                writeln!(output, "| Avg Time | {:.3} ms |", result.avg_elapsed_ms())?;
                writeln!(
                    output,
                    "| Min Time | {:.3} ms |",
                    result.min_elapsed().as_secs_f64() * 1000.0
                )?;
                writeln!(
                    output,
                    "| Max Time | {:.3} ms |",
                    result.max_elapsed().as_secs_f64() * 1000.0
                )?;
                writeln!(output, "| Avg Cost | {:.1} |", result.avg_cost())?;
                writeln!(output, "| Best Conflicts | {} |", best)?;
                writeln!(output, "| Worst Conflicts | {} |", worst)?;
            }
            _ => writeln!(output, "*No trials run.*")?,
        }
        writeln!(output)?;

        if !result.runs.is_empty() {
            writeln!(output, "## Trial Details")?;
            writeln!(output)?;
            writeln!(output, "| Trial | Time (ms) | Cost | Conflicts | Solved |")?;
            writeln!(output, "|-------|-----------|------|-----------|--------|")?;
            for run in &result.runs {
                writeln!(
                    output,
                    "| {} | {:.3} | {} | {} | {} |",
                    run.trial_index,
                    run.elapsed_ms(),
                    run.cost,
                    run.final_conflicts,
                    if run.is_solved() { "yes" } else { "no" },
                )?;
            }
        }

        Ok(())
    }

    pub fn to_file(result: &TrialResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    pub fn write<W: Write>(result: &TrialResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }

    /// Side-by-side summary of several batches, one row each.
    ///
    /// ```
    /// use queens_benchmark::{MarkdownReport, TrialResult};
    ///
    /// let hc = TrialResult::new("Compare", "Steepest Hill Climbing", 8);
    /// let mc = TrialResult::new("Compare", "Min Conflicts", 8);
    ///
    /// let md = MarkdownReport::comparison(&[&hc, &mc]);
    /// assert!(md.contains("## Comparison"));
    /// assert!(md.contains("| Min Conflicts | 8 | 0 | 0.00% |"));
    /// ```
    pub fn comparison(results: &[&TrialResult]) -> String {
        let mut output = String::new();
        let _ = Self::render_comparison(results, &mut output);
        output
    }

    fn render_comparison(results: &[&TrialResult], output: &mut String) -> fmt::Result {
        writeln!(output, "## Comparison")?;
        writeln!(output)?;
        writeln!(
            output,
            "| Algorithm | Board | Trials | Solve Rate | Avg Time (ms) | Avg Cost |"
        )?;
        writeln!(
            output,
            "|-----------|-------|--------|------------|---------------|----------|"
        )?;
        for result in results {
            writeln!(
                output,
                "| {} | {} | {} | {:.2}% | {:.3} | {:.1} |",
                result.algorithm,
                result.board_size,
                result.trial_count(),
                result.solve_rate() * 100.0,
                result.avg_elapsed_ms(),
                result.avg_cost(),
            )?;
        }
        Ok(())
    }
}
