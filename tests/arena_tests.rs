//! Integration tests for arena matches

use noughts::{
    pipeline::{Agent, Arena, ArenaConfig, MatchSummary, RandomAgent, SearchAgent},
    search::SearchConfig,
    tictactoe::{GameOutcome, Player},
};
use tempfile::tempdir;

fn engine_agent(name: &str) -> SearchAgent {
    SearchAgent::new(name.to_string(), SearchConfig::default())
}

#[test]
fn test_engine_never_loses_to_random_as_x() {
    let arena = Arena::<3>::new(ArenaConfig {
        first_player: Player::X,
        seed: Some(11),
    });
    let mut x = engine_agent("Engine");
    let mut o = RandomAgent::new("Random".to_string());

    let summary = arena.run(&mut x, &mut o, 6).unwrap();
    assert_eq!(summary.games, 6);
    assert_eq!(summary.o_wins, 0);
    assert_eq!(summary.x_wins + summary.draws, 6);
}

#[test]
fn test_engine_never_loses_to_random_as_o() {
    let arena = Arena::<3>::new(ArenaConfig {
        first_player: Player::X,
        seed: Some(3),
    });
    let mut x = RandomAgent::new("Random".to_string());
    let mut o = engine_agent("Engine");

    let summary = arena.run(&mut x, &mut o, 6).unwrap();
    assert_eq!(summary.x_wins, 0);
}

#[test]
fn test_engine_self_play_is_a_draw() {
    let arena = Arena::<3>::default();
    let mut x = engine_agent("Engine-X");
    let mut o = engine_agent("Engine-O");

    let game = arena.play_game(&mut x, &mut o).unwrap();
    assert_eq!(game.outcome, Some(GameOutcome::Draw));
    assert_eq!(game.plies(), 9);
}

#[test]
fn test_o_can_move_first() {
    let arena = Arena::<3>::new(ArenaConfig {
        first_player: Player::O,
        seed: Some(5),
    });
    let mut x = RandomAgent::new("Random-X".to_string());
    let mut o = RandomAgent::new("Random-O".to_string());

    let game = arena.play_game(&mut x, &mut o).unwrap();
    assert_eq!(game.initial.to_move, Player::O);
    assert_eq!(game.positions[0].occupied_count(), 1);
    assert_eq!(game.positions[0].to_move, Player::X);
    assert!(game.outcome.is_some());
}

#[test]
fn test_seeded_matches_are_reproducible() {
    let arena = Arena::<4>::new(ArenaConfig {
        first_player: Player::X,
        seed: Some(99),
    });

    let run = || {
        let mut x = RandomAgent::new("Random-X".to_string());
        let mut o = RandomAgent::new("Random-O".to_string());
        let mut finals = Vec::new();
        let summary = arena
            .run_with(&mut x, &mut o, 8, |_, game| finals.push(game.current()))
            .unwrap();
        (summary, finals)
    };

    let (first, first_finals) = run();
    let (second, second_finals) = run();
    assert_eq!(first, second);
    assert_eq!(first_finals, second_finals);
    assert_eq!(first.games, 8);
}

#[test]
fn test_run_reports_every_game() {
    let arena = Arena::<3>::new(ArenaConfig {
        first_player: Player::X,
        seed: Some(1),
    });
    let mut x = RandomAgent::new("Random-X".to_string());
    let mut o = RandomAgent::new("Random-O".to_string());

    let mut seen = Vec::new();
    let summary = arena
        .run_with(&mut x, &mut o, 5, |index, game| {
            assert!(game.outcome.is_some());
            seen.push(index);
        })
        .unwrap();

    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 5);
}

#[test]
fn test_summary_json_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("summary.json");

    let mut summary = MatchSummary::new("Engine".into(), "Random".into());
    summary.record(GameOutcome::Win(Player::X));
    summary.record(GameOutcome::Draw);
    summary.write_json(&path).unwrap();

    let loaded = MatchSummary::read_json(&path).unwrap();
    assert_eq!(loaded, summary);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["x_wins"], 1);
    assert_eq!(raw["draws"], 1);
}

#[test]
fn test_agent_names_are_reported() {
    let x = engine_agent("Engine");
    let o = RandomAgent::new("Random".to_string());
    assert_eq!(Agent::<3>::name(&x), "Engine");
    assert_eq!(Agent::<3>::name(&o), "Random");
}
