//! Colorful console output for N-Queens search events.
//!
//! Provides a custom `tracing` layer that formats the events emitted by
//! `queens_solver` and `queens_benchmark` with colors, on stderr.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (search start/end, restart batches, trial batches)
//! - **DEBUG**: Individual steps, restarts and trials

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const TARGETS: [&str; 2] = ["queens_solver", "queens_benchmark"];

/// Initializes console output at the default `warn` level.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG`, when set, replaces the default filter.
pub fn init() {
    init_with_level(Level::WARN);
}

/// Initializes console output showing search events up to `level`.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init_with_level(level: Level) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(QueensConsoleLayer)
            .try_init();
    });
}

/// Maps a `-v` count onto a log level.
///
/// ```
/// use queens_console::verbosity_level;
/// use tracing::Level;
///
/// assert_eq!(verbosity_level(0), Level::WARN);
/// assert_eq!(verbosity_level(1), Level::INFO);
/// assert_eq!(verbosity_level(5), Level::TRACE);
/// ```
pub fn verbosity_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// A tracing layer that formats search events with colors.
pub struct QueensConsoleLayer;

impl<S: Subscriber> Layer<S> for QueensConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !TARGETS.iter().any(|prefix| target.starts_with(prefix)) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(
                io::stderr(),
                "{} {}",
                format!("{:>7.3}s", elapsed_secs()).bright_black(),
                output
            );
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    name: Option<String>,
    size: Option<u64>,
    conflicts: Option<u64>,
    cost: Option<u64>,
    duration_ms: Option<u64>,
    solved: Option<bool>,
    speed: Option<u64>,
    step: Option<u64>,
    column: Option<u64>,
    row: Option<u64>,
    attempt: Option<u64>,
    attempts: Option<u64>,
    trial: Option<u64>,
    trials: Option<u64>,
    solved_count: Option<u64>,
    avg_ms: Option<f64>,
    avg_cost: Option<f64>,
    solve_rate: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"');
        match field.name() {
            "event" => self.event = Some(s.to_string()),
            "algorithm" => self.algorithm = Some(s.to_string()),
            "name" => self.name = Some(s.to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "size" => self.size = Some(value),
            "conflicts" => self.conflicts = Some(value),
            "cost" => self.cost = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            "step" => self.step = Some(value),
            "column" => self.column = Some(value),
            "row" => self.row = Some(value),
            "attempt" => self.attempt = Some(value),
            "attempts" => self.attempts = Some(value),
            "trial" => self.trial = Some(value),
            "trials" => self.trials = Some(value),
            "solved_count" => self.solved_count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "avg_ms" => self.avg_ms = Some(value),
            "avg_cost" => self.avg_cost = Some(value),
            "solve_rate" => self.solve_rate = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "solved" {
            self.solved = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            "name" => self.name = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "step" => format_step(v),
        "restart" => format_restart(v),
        "restart_end" => format_restart_end(v),
        "trial_end" => format_trial_end(v),
        "trials_end" => format_trials_end(v),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_status(solved: bool) -> String {
    if solved {
        "SOLVED".bright_green().bold().to_string()
    } else {
        "UNSOLVED".bright_red().bold().to_string()
    }
}

fn format_search_start(v: &EventVisitor) -> String {
    let size = count(v.size);
    format!(
        "{} {} │ {}x{} board │ {} conflicts",
        "▶".bright_green().bold(),
        v.algorithm.as_deref().unwrap_or("Search").bright_white().bold(),
        size.bright_yellow(),
        size.bright_yellow(),
        count(v.conflicts).bright_yellow()
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} finished │ {} │ cost {} │ {} conflicts │ {}",
        "■".bright_cyan().bold(),
        v.algorithm.as_deref().unwrap_or("Search").bright_white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.cost).bright_yellow(),
        format_conflicts(v.conflicts.unwrap_or(0)),
        format_status(v.solved.unwrap_or(false))
    );

    if let Some(speed) = v.speed.filter(|&s| s > 0) {
        output.push_str(&format!(
            " │ {}/s",
            speed.to_formatted_string(&Locale::en).bright_magenta()
        ));
    }

    output
}

fn format_step(v: &EventVisitor) -> String {
    let mut output = format!(
        "  {} Step {:>8}",
        "·".bright_black(),
        count(v.step).bright_black()
    );

    // Min-conflicts steps carry the reassignment, hill-climbing steps the new
    // conflict count.
    if let (Some(column), Some(row)) = (v.column, v.row) {
        output.push_str(&format!(
            " │ column {:>4} → row {:>4}",
            column.to_formatted_string(&Locale::en),
            row.to_formatted_string(&Locale::en)
        ));
    }
    if let Some(conflicts) = v.conflicts {
        output.push_str(&format!(" │ {} conflicts", format_conflicts(conflicts)));
    }
    if let Some(cost) = v.cost {
        output.push_str(&format!(
            " │ cost {}",
            cost.to_formatted_string(&Locale::en).bright_black()
        ));
    }

    output
}

fn format_restart(v: &EventVisitor) -> String {
    format!(
        "  {} Attempt {:>6} │ cost {} │ {} conflicts",
        "↻".bright_blue(),
        count(v.attempt).bright_white(),
        count(v.cost).bright_black(),
        format_conflicts(v.conflicts.unwrap_or(0))
    )
}

fn format_restart_end(v: &EventVisitor) -> String {
    format!(
        "{} {} restarts │ {} attempts │ {} │ total cost {} │ {}",
        "■".bright_cyan().bold(),
        v.algorithm.as_deref().unwrap_or("Search").bright_white(),
        count(v.attempts).bright_yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.cost).bright_yellow(),
        format_status(v.solved.unwrap_or(false))
    )
}

fn format_trial_end(v: &EventVisitor) -> String {
    let icon = if v.solved.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "  {} Trial {:>6} │ {} │ cost {} │ {} conflicts",
        icon,
        count(v.trial).bright_black(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).bright_black(),
        count(v.cost).bright_black(),
        format_conflicts(v.conflicts.unwrap_or(0))
    )
}

fn format_trials_end(v: &EventVisitor) -> String {
    let label = v
        .name
        .as_deref()
        .or(v.algorithm.as_deref())
        .unwrap_or("Trials");
    let rate = v.solve_rate.unwrap_or(0.0) * 100.0;
    let rate = if rate >= 100.0 {
        format!("{rate:.1}%").bright_green().to_string()
    } else if rate > 0.0 {
        format!("{rate:.1}%").yellow().to_string()
    } else {
        format!("{rate:.1}%").bright_red().to_string()
    };

    format!(
        "{} {} │ {}/{} solved ({}) │ avg {:.3}ms │ avg cost {:.1}",
        "■".bright_cyan().bold(),
        label.bright_white().bold(),
        count(v.solved_count).bright_yellow(),
        count(v.trials).bright_yellow(),
        rate,
        v.avg_ms.unwrap_or(0.0),
        v.avg_cost.unwrap_or(0.0)
    )
}

fn format_conflicts(conflicts: u64) -> String {
    let text = conflicts.to_formatted_string(&Locale::en);
    if conflicts == 0 {
        text.bright_green().to_string()
    } else {
        text.bright_red().to_string()
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives(Level::WARN),
            "queens_solver=warn,queens_benchmark=warn"
        );
        assert_eq!(
            default_directives(Level::DEBUG),
            "queens_solver=debug,queens_benchmark=debug"
        );
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("phase_start")).is_empty());
        assert!(format_event(&EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_format_search_start() {
        let v = EventVisitor {
            algorithm: Some("Min Conflicts".to_string()),
            size: Some(21),
            conflicts: Some(1234),
            ..visitor("search_start")
        };
        let output = format_event(&v);
        assert!(output.contains("Min Conflicts"));
        assert!(output.contains("21"));
        assert!(output.contains("1,234"));
    }

    #[test]
    fn test_format_search_end_reports_status() {
        let solved = EventVisitor {
            solved: Some(true),
            cost: Some(42),
            ..visitor("search_end")
        };
        assert!(format_event(&solved).contains("SOLVED"));
        assert!(format_event(&solved).contains("42"));

        let stuck = EventVisitor {
            solved: Some(false),
            conflicts: Some(3),
            ..visitor("search_end")
        };
        assert!(format_event(&stuck).contains("UNSOLVED"));
    }

    #[test]
    fn test_format_min_conflicts_step() {
        let v = EventVisitor {
            step: Some(7),
            column: Some(3),
            row: Some(5),
            ..visitor("step")
        };
        let output = format_event(&v);
        assert!(output.contains("Step"));
        assert!(output.contains("column"));
        assert!(output.contains("row"));
        assert!(!output.contains("cost"));
    }

    #[test]
    fn test_format_hill_climbing_step() {
        let v = EventVisitor {
            step: Some(2),
            conflicts: Some(4),
            cost: Some(840),
            ..visitor("step")
        };
        let output = format_event(&v);
        assert!(output.contains("conflicts"));
        assert!(output.contains("840"));
        assert!(!output.contains("column"));
    }

    #[test]
    fn test_format_trials_end() {
        let v = EventVisitor {
            name: Some("Min Conflicts".to_string()),
            trials: Some(10),
            solved_count: Some(5),
            solve_rate: Some(0.5),
            avg_ms: Some(1.25),
            avg_cost: Some(30.0),
            ..visitor("trials_end")
        };
        let output = format_event(&v);
        assert!(output.contains("Min Conflicts"));
        assert!(output.contains("50.0%"));
        assert!(output.contains("1.250ms"));
        assert!(output.contains("30.0"));
    }

    #[test]
    fn test_format_trial_end_and_restart() {
        let trial = EventVisitor {
            trial: Some(3),
            solved: Some(true),
            ..visitor("trial_end")
        };
        assert!(format_event(&trial).contains("Trial"));

        let restart = EventVisitor {
            attempt: Some(2),
            ..visitor("restart")
        };
        assert!(format_event(&restart).contains("Attempt"));
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(0), "0ms");
        assert_eq!(format_duration_ms(999), "999ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_verbosity_level() {
        assert_eq!(verbosity_level(0), Level::WARN);
        assert_eq!(verbosity_level(2), Level::DEBUG);
        assert_eq!(verbosity_level(3), Level::TRACE);
    }
}
