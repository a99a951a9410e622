//! Evaluate command - show the static heuristic for a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{BoardSize, parse_player_token},
        output::{print_board, print_kv, print_section, print_subsection},
    },
    search::{evaluate, line_scores},
    tictactoe::BoardState,
};

#[derive(Parser, Debug)]
#[command(about = "Score a position with the static heuristic")]
pub struct EvaluateArgs {
    /// Board cells in row-major order ('.' empty), optionally followed by
    /// `_X` or `_O`. Whitespace is ignored.
    pub board: String,

    /// Board size
    #[arg(long, short = 's', value_enum, default_value_t = BoardSize::Three)]
    pub size: BoardSize,

    /// Score for this player (`x` or `o`); defaults to the player to move
    #[arg(long = "as")]
    pub maximizer: Option<String>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    match args.size {
        BoardSize::Three => run::<3>(&args),
        BoardSize::Four => run::<4>(&args),
    }
}

fn run<const N: usize>(args: &EvaluateArgs) -> Result<()> {
    let position = BoardState::<N>::from_string(&args.board)?;
    let maximizer = match &args.maximizer {
        Some(token) => parse_player_token(token, "--as")?,
        None => position.to_move,
    };

    print_section(&format!("Heuristic for {maximizer}"));
    print_board(&position);
    print_kv("Score", &evaluate(&position, maximizer).to_string());

    print_subsection("Lines");
    for score in line_scores(&position, maximizer) {
        print_kv(
            &score.kind.to_string(),
            &format!("streak {} -> {}", score.streak, score.weight),
        );
    }

    Ok(())
}
