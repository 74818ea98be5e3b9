//! # Menu Knapsack CLI
//!
//! Finds every combination of menu items that adds up to a target price.
//!
//! ## Usage
//! ```text
//! menu solve lunch.txt --max 50         list combinations (fail above 50)
//! menu count lunch.txt                  count only
//! menu items lunch.txt                  show the parsed menu
//! cat lunch.txt | menu solve - -f json  read stdin, JSON output
//! menu solve                            solve the built-in sample menu
//! ```
//!
//! ## Exit Codes
//! ```text
//! 0  success
//! 1  no combination, or more than --max
//! 2  malformed menu
//! 3  I/O or configuration error
//! ```

mod config;
mod error;
mod render;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use menu_core::{MenuSolver, Outcome, SolveOptions, SAMPLE_MENU};

use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};

const EXIT_FAIL: u8 = 1;
const EXIT_MALFORMED: u8 = 2;
const EXIT_ERROR: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "menu", version, about = "Find every combination of menu items that adds up to a price", long_about = None)]
#[command(
    after_help = "Menu format:\n  $15.05\n  mixed fruit,$2.15\n  french fries,$2.75\n\nThe first line is the goal; every other line is name,price."
)]
struct Cli {
    /// Config file (default: <config dir>/menu-knapsack/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every combination that adds up to the goal
    Solve {
        #[command(flatten)]
        input: Input,

        /// Fail when there are more combinations than this (0 = unbounded)
        #[arg(long)]
        max: Option<u64>,

        /// Accept any number of combinations
        #[arg(long, conflicts_with = "max")]
        unbounded: bool,

        /// Report the count without listing combinations
        #[arg(long)]
        count_only: bool,

        /// Include the partition tree (JSON output only)
        #[arg(long)]
        tree: bool,
    },

    /// Count the combinations without listing them
    Count {
        #[command(flatten)]
        input: Input,
    },

    /// Print the parsed menu in price order
    Items {
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Menu file, or `-` for stdin. Uses the sample menu when omitted.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("menu: {:#}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = CliConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    debug!(?config, "Configuration loaded");

    let mut stdout = io::stdout().lock();

    let (input, options) = match cli.command {
        Command::Solve {
            input,
            max,
            unbounded,
            count_only,
            tree,
        } => {
            if let Some(max) = max {
                config.max_solutions = max;
            }
            if unbounded {
                config.max_solutions = 0;
            }
            config.count_only |= count_only;
            config.include_tree |= tree;
            (input, solve_options(&config))
        }
        Command::Count { input } => {
            config.count_only = true;
            (input, solve_options(&config))
        }
        Command::Items { input } => {
            let solver = MenuSolver::new(&read_menu(input.file.as_deref())?);
            return Ok(match (solver.parse_error(), solver.goal()) {
                (None, Some(goal)) => {
                    render::render_menu(&mut stdout, goal, &solver.items(), config.format)?;
                    ExitCode::SUCCESS
                }
                (error, _) => {
                    if let Some(error) = error {
                        eprintln!("menu: {}", error);
                    }
                    ExitCode::from(EXIT_MALFORMED)
                }
            });
        }
    };

    let text = read_menu(input.file.as_deref())?;
    let mut solver = MenuSolver::new(&text);
    let result = solver.solve(&options);
    info!(count = result.count, outcome = ?result.outcome(), "Solve finished");

    render::render_result(&mut stdout, &result, config.format)?;

    Ok(match result.outcome() {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::Fail => ExitCode::from(EXIT_FAIL),
        Outcome::Malformed => ExitCode::from(EXIT_MALFORMED),
    })
}

fn solve_options(config: &CliConfig) -> SolveOptions {
    SolveOptions {
        max: config.max(),
        count_only: config.count_only,
        include_tree: config.include_tree && config.format == OutputFormat::Json,
    }
}

/// Reads menu text from a file, stdin (`-`), or the built-in sample.
fn read_menu(file: Option<&Path>) -> CliResult<String> {
    match file {
        None => {
            info!("No menu given, using the sample menu");
            Ok(SAMPLE_MENU.to_string())
        }
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|error| CliError::Input {
                    source_name: "stdin".to_string(),
                    error,
                })?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|error| CliError::Input {
            source_name: path.display().to_string(),
            error,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
