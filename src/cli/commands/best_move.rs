//! Best-move command - run the engine on one position

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{BoardSize, SearchArgs},
        output::{
            format_value, print_board, print_kv, print_search_stats, print_section,
            print_subsection,
        },
    },
    search::{Deadline, Engine},
    tictactoe::BoardState,
};

#[derive(Parser, Debug)]
#[command(about = "Choose the best move for a position")]
pub struct BestMoveArgs {
    /// Board cells in row-major order ('.' empty), optionally followed by
    /// `_X` or `_O` for the player to move. Whitespace is ignored.
    pub board: String,

    /// Board size
    #[arg(long, short = 's', value_enum, default_value_t = BoardSize::Three)]
    pub size: BoardSize,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Time budget in milliseconds (reported only, the depth bound rules)
    #[arg(long)]
    pub time_ms: Option<u64>,

    /// Also list every root candidate's value
    #[arg(long)]
    pub candidates: bool,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    match args.size {
        BoardSize::Three => run::<3>(&args),
        BoardSize::Four => run::<4>(&args),
    }
}

fn run<const N: usize>(args: &BestMoveArgs) -> Result<()> {
    let position = BoardState::<N>::from_string(&args.board)?;
    let config = args.search.resolve()?;
    let deadline = args
        .time_ms
        .map(|ms| Deadline::after(Duration::from_millis(ms)))
        .unwrap_or_default();

    let engine = Engine::new(config);
    let outcome = engine.choose_move(&position, deadline)?;

    print_section(&format!("Best move for {} ({N}x{N})", position.to_move));
    print_board(&position);

    print_subsection("Chosen position");
    print_board(&outcome.position);
    print_kv("Label", &outcome.position.encode());
    if outcome.passed {
        print_kv("Move", "pass (no successors)");
    } else if let [(row, col)] = outcome.position.changed_cells(&position).as_slice() {
        print_kv("Move", &format!("row {row}, col {col}"));
    }
    if let Some(value) = outcome.value {
        print_kv("Value", &format_value(value));
    }
    print_kv("Depth bound", &engine.config().max_depth.to_string());

    if args.candidates && !outcome.candidates.is_empty() {
        print_subsection("Root candidates");
        for candidate in &outcome.candidates {
            print_kv(&candidate.position.encode(), &format_value(candidate.value));
        }
    }

    print_subsection("Search statistics");
    print_search_stats(&outcome.stats);

    Ok(())
}
