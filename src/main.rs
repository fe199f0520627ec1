//! Bulls and Cows - CLI
//!
//! Bulls and Cows solver and game with interactive and scripted modes.
//! The solver filters the 5040-code universe on observed feedback.

use anyhow::Result;
use bulls_and_cows::{
    commands::{
        SolveConfig, analyze_guess, print_test_all_statistics, run_benchmark, run_game,
        run_interactive, run_test_all, solve_secret,
    },
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Session, StrategyType},
    universe::full_universe,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bulls_and_cows",
    about = "Bulls and Cows solver using exact candidate filtering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: first (default), entropy, minimax, hybrid, random
    #[arg(short, long, global = true, default_value = "first")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver: the program guesses your number (default)
    Play,

    /// Classic game: guess the program's number
    Game,

    /// Solve a specific secret code
    Solve {
        /// The secret code to solve
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the information content of a specific guess
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_interactive(&cli.strategy).map_err(|e| anyhow::anyhow!(e)),
        Commands::Game => run_game().map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { secret, verbose } => run_solve_command(&cli.strategy, &secret, verbose),
        Commands::Analyze { code } => run_analyze_command(&code),
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.strategy, count);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&cli.strategy, limit);
            Ok(())
        }
    }
}

fn run_solve_command(strategy_name: &str, secret: &str, verbose: bool) -> Result<()> {
    let session = Session::with_strategy(StrategyType::from_name(strategy_name));
    let config = SolveConfig::new(secret.to_string());

    let result = solve_secret(config, session).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(code: &str) -> Result<()> {
    let universe = full_universe();
    let result = analyze_guess(code, &universe).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, count: usize) {
    use rand::seq::IndexedRandom;

    println!("Running benchmark on {count} random secrets...");

    let universe = full_universe();
    let secrets: Vec<_> = universe
        .choose_multiple(&mut rand::rng(), count)
        .copied()
        .collect();

    let strategy = StrategyType::from_name(strategy_name);
    let result = run_benchmark(&strategy, &secrets);
    print_benchmark_result(&result);
}

fn run_test_all_command(strategy_name: &str, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Bulls and Cows Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nStrategy: {strategy_name}");
    println!();

    let strategy = StrategyType::from_name(strategy_name);
    let stats = run_test_all(&strategy, limit);
    print_test_all_statistics(&stats);
}
