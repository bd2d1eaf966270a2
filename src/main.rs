//! Wordle Minimax Solver - CLI
//!
//! Interactive solver that suggests the guess with the best worst-case
//! reduction of the dictionary, plus batch solve/analyze/benchmark modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_minimax::{
    commands::{SolveConfig, analyze_word, run_benchmark, run_play, solve_word},
    dictionary::{Dictionary, loader},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Session, SolverConfig},
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Wordle solver that maximizes the guaranteed dictionary reduction",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (default: search for dictionary.txt upward from the working directory)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Worker threads for guess selection (default: available parallelism)
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report the guaranteed reduction of a specific opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve the first N dictionary words and report the distribution
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Give up on a word after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = SolverConfig::new(cli.threads);
    let dictionary = load_dictionary(cli.dictionary.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, config),
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, dictionary, config),
        Commands::Analyze { word } => run_analyze_command(&word, &dictionary),
        Commands::Benchmark { count, max_guesses } => {
            run_benchmark_command(count, max_guesses, dictionary, config);
            Ok(())
        }
    }
}

fn load_dictionary(explicit: Option<&std::path::Path>) -> Result<Dictionary> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    loader::load(explicit, &cwd).context("Ensure that the working directory is set correctly")
}

fn run_play_command(dictionary: Dictionary, config: SolverConfig) -> Result<()> {
    let mut session = Session::new(dictionary, config);
    run_play(&mut session, io::stdin().lock())?;
    Ok(())
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    dictionary: Dictionary,
    config: SolverConfig,
) -> Result<()> {
    let mut session = Session::new(dictionary, config);
    let result = solve_word(SolveConfig::new(word.to_string()), &mut session)
        .with_context(|| format!("cannot solve {word:?}"))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(word: &str, dictionary: &Dictionary) -> Result<()> {
    let result =
        analyze_word(word, dictionary).with_context(|| format!("cannot analyze {word:?}"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    max_guesses: usize,
    dictionary: Dictionary,
    config: SolverConfig,
) {
    println!(
        "Running benchmark on {} words with {} workers...",
        count.min(dictionary.len()),
        config.workers
    );

    // Take first N words from the dictionary
    let targets: Vec<_> = dictionary.live().iter().take(count).cloned().collect();
    let mut session = Session::new(dictionary, config);

    let result = run_benchmark(&mut session, &targets, max_guesses);
    print_benchmark_result(&result);
}
