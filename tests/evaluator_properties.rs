//! Properties of the line-streak heuristic over every 3x3 grid

mod common;

use common::{board3, board4};
use noughts::{
    search::{evaluate, line_scores, streak_weight},
    tictactoe::{BoardState, Cell, Player},
};

/// Every assignment of marks to a 3x3 grid, reachable or not.
fn all_grids() -> impl Iterator<Item = BoardState<3>> {
    (0..3_u32.pow(9)).map(|mut code| {
        let mut position = BoardState::<3>::new();
        for index in 0..9 {
            position.cells[index / 3][index % 3] = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            code /= 3;
        }
        position
    })
}

fn longest_streak(position: &BoardState<3>, maximizer: Player) -> u32 {
    line_scores(position, maximizer)
        .iter()
        .map(|score| score.streak)
        .max()
        .unwrap_or(0)
}

#[test]
fn test_longer_streak_always_outranks_shorter() {
    let mut min_by_streak = [i32::MAX; 4];
    let mut max_by_streak = [i32::MIN; 4];

    for position in all_grids() {
        let streak = longest_streak(&position, Player::X) as usize;
        let score = evaluate(&position, Player::X);

        if streak > 0 {
            assert!(score >= streak_weight(streak as u32), "{}", position.encode());
        }
        min_by_streak[streak] = min_by_streak[streak].min(score);
        max_by_streak[streak] = max_by_streak[streak].max(score);
    }

    for streak in 1..4 {
        assert!(
            min_by_streak[streak] > max_by_streak[streak - 1],
            "streak {streak} scores overlap streak {}",
            streak - 1
        );
    }
}

#[test]
fn test_scores_are_never_negative() {
    assert!(all_grids().all(|position| {
        evaluate(&position, Player::X) >= 0 && evaluate(&position, Player::O) >= 0
    }));
}

#[test]
fn test_contested_lines_contribute_nothing() {
    // Every line holds both marks.
    let blocked = board3("XOX OXO OXO_X");
    assert!(line_scores(&blocked, Player::X).iter().all(|s| s.weight == 0));
    assert_eq!(evaluate(&blocked, Player::X), 0);
    assert_eq!(evaluate(&blocked, Player::O), 0);
}

#[test]
fn test_four_by_four_weights() {
    // X X X .
    // . . . .
    // . . . .
    // . . . .
    let board = board4("XXX. .... .... ...._O");
    // Row 0 scores 100, three columns 1 each, the diagonal 1.
    assert_eq!(evaluate(&board, Player::X), 104);
    assert_eq!(evaluate(&board, Player::O), 0);
}
