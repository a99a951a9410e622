//! Play command - run an arena match between two agents

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{AgentKind, BoardSize, SearchArgs, parse_player_token},
        output::{create_match_progress, print_kv, print_section},
    },
    pipeline::{Agent, Arena, ArenaConfig, RandomAgent, SearchAgent},
    search::SearchConfig,
    tictactoe::{GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a match between two agents")]
pub struct PlayArgs {
    /// Board size
    #[arg(long, short = 's', value_enum, default_value_t = BoardSize::Three)]
    pub size: BoardSize,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: usize,

    /// Agent playing X
    #[arg(long, value_enum, default_value_t = AgentKind::Engine)]
    pub x: AgentKind,

    /// Agent playing O
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    pub o: AgentKind,

    /// Which token makes the first move (`x` or `o`)
    #[arg(long = "first-player", default_value = "x")]
    pub first_player: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Write the match summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    match args.size {
        BoardSize::Three => run::<3>(&args),
        BoardSize::Four => run::<4>(&args),
    }
}

fn create_agent<const N: usize>(
    kind: AgentKind,
    label: &str,
    config: &SearchConfig,
) -> Box<dyn Agent<N>> {
    match kind {
        AgentKind::Engine => Box::new(SearchAgent::new(format!("Engine-{label}"), config.clone())),
        AgentKind::Random => Box::new(RandomAgent::new(format!("Random-{label}"))),
    }
}

fn run<const N: usize>(args: &PlayArgs) -> Result<()> {
    let config = args.search.resolve()?;
    let first_player = parse_player_token(&args.first_player, "--first-player")?;

    let mut x_agent = create_agent::<N>(args.x, "X", &config);
    let mut o_agent = create_agent::<N>(args.o, "O", &config);

    let arena = Arena::<N>::new(ArenaConfig {
        first_player,
        seed: args.seed,
    });

    println!(
        "{} vs {} on {N}x{N}, {} games, {first_player} moves first",
        x_agent.name(),
        o_agent.name(),
        args.games
    );

    let progress = if args.no_progress {
        None
    } else {
        Some(create_match_progress(args.games as u64)?)
    };
    let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);

    let summary = arena.run_with(x_agent.as_mut(), o_agent.as_mut(), args.games, |_, game| {
        match game.outcome {
            Some(GameOutcome::Win(Player::X)) => x_wins += 1,
            Some(GameOutcome::Win(Player::O)) => o_wins += 1,
            Some(GameOutcome::Draw) => draws += 1,
            None => {}
        }
        if let Some(pb) = &progress {
            pb.set_message(format!("X:{x_wins} O:{o_wins} D:{draws}"));
            pb.inc(1);
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section("Match summary");
    print_kv("Games", &summary.games.to_string());
    print_kv(
        &format!("{} wins", summary.x_agent),
        &format!("{} ({:.1}%)", summary.x_wins, summary.x_win_rate() * 100.0),
    );
    print_kv(
        &format!("{} wins", summary.o_agent),
        &format!("{} ({:.1}%)", summary.o_wins, summary.o_win_rate() * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", summary.draws, summary.draw_rate() * 100.0),
    );

    if let Some(path) = &args.export {
        summary.write_json(path)?;
        println!("\nSummary exported to: {}", path.display());
    }

    Ok(())
}
