//! noughts CLI - alpha-beta move search for square-grid Tic-Tac-Toe
//!
//! This CLI provides a unified interface for:
//! - Choosing the best move for a position
//! - Inspecting the static heuristic line by line
//! - Running matches between the engine and baseline agents
//! - Printing and writing search configuration files

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Alpha-beta search for N x N Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose the best move for a position
    BestMove(noughts::cli::commands::best_move::BestMoveArgs),

    /// Score a position with the static heuristic
    Evaluate(noughts::cli::commands::evaluate::EvaluateArgs),

    /// Play a match between two agents
    Play(noughts::cli::commands::play::PlayArgs),

    /// Print or write the search configuration
    Config(noughts::cli::commands::show_config::ConfigArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::BestMove(args) => noughts::cli::commands::best_move::execute(args),
        Commands::Evaluate(args) => noughts::cli::commands::evaluate::execute(args),
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Config(args) => noughts::cli::commands::show_config::execute(args),
    }
}
