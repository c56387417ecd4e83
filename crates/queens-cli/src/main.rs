//! N-Queens local search harness.
//!
//! Without a subcommand, runs the interactive menu on stdin:
//! - (1) random restart min-conflicts until a solution is found
//! - (2) solve rate of steepest hill climbing
//! - (3) solve rate of min-conflicts
//! - (4) exit

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use queens::console;
use queens::{run_trials, solve, Algorithm, MarkdownReport, QueensConfig, SearchBuilder};

mod menu;
mod session;

use menu::{format_solution, format_trial_summary};
use session::Session;

#[derive(Parser)]
#[command(name = "queens")]
#[command(version)]
#[command(about = "N-Queens by steepest hill climbing and min-conflicts local search")]
struct Cli {
    /// Board size (number of queens)
    #[arg(long)]
    size: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file (TOML, or YAML by .yaml/.yml extension)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum min-conflicts steps per search
    #[arg(long)]
    max_steps: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Find one solution with random restart min-conflicts
    Solve,

    /// Measure the solve rate of one algorithm
    Trials {
        /// hill_climbing or min_conflicts
        #[arg(long, default_value = "min_conflicts")]
        algorithm: Algorithm,

        /// Number of trials (defaults to trials.default_count)
        #[arg(long)]
        count: Option<usize>,

        /// Write per-trial CSV here
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write a Markdown report here
        #[arg(long)]
        markdown: Option<PathBuf>,
    },

    /// Run both algorithms and print a Markdown comparison
    Compare {
        /// Number of trials per algorithm (defaults to trials.default_count)
        #[arg(long)]
        count: Option<usize>,
    },
}

impl Cli {
    /// File configuration with command-line overrides applied.
    fn load_config(&self) -> Result<QueensConfig> {
        let mut config = match &self.config {
            Some(path) => QueensConfig::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => QueensConfig::default(),
        };

        if let Some(size) = self.size {
            config = config.with_board_size(size);
        }
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(max_steps) = self.max_steps {
            config = config.with_max_steps(max_steps);
        }

        config.validate()?;
        Ok(config)
    }
}

fn trial_count(count: Option<usize>, config: &QueensConfig) -> usize {
    count
        .or(config.trials.default_count)
        .unwrap_or(queens::DEFAULT_TRIAL_COUNT)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    console::init_with_level(console::verbosity_level(cli.verbose));

    let mut config = cli.load_config()?;
    let mut rng = SearchBuilder::rng(&config);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            Session::new(&config, &mut rng).run(stdin.lock(), io::stdout())?;
        }
        Commands::Solve => {
            let solution = solve(&config, &mut rng)?;
            print!("{}", format_solution(&solution.board, &solution.outcome));
        }
        Commands::Trials {
            algorithm,
            count,
            csv,
            markdown,
        } => {
            if csv.is_some() {
                config.trials.csv_output = csv;
            }
            if markdown.is_some() {
                config.trials.markdown_output = markdown;
            }
            let count = trial_count(count, &config);
            let result = run_trials(algorithm, &config, count, &mut rng)?;
            print!("{}", format_trial_summary(&result));
        }
        Commands::Compare { count } => {
            let count = trial_count(count, &config);
            let results = Algorithm::ALL
                .into_iter()
                .map(|algorithm| run_trials(algorithm, &config, count, &mut rng))
                .collect::<Result<Vec<_>, _>>()?;
            let results: Vec<_> = results.iter().collect();
            print!("{}", MarkdownReport::comparison(&results));
        }
    }

    Ok(())
}
