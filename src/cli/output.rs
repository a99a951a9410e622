//! Output formatting and progress bars for CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    search::{LOSS_SCORE, SearchStats, WIN_SCORE},
    tictactoe::BoardState,
};

/// Create a progress bar for arena matches
pub fn create_match_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render a search value, naming the sentinels
pub fn format_value(value: i32) -> String {
    match value {
        WIN_SCORE => "win".to_string(),
        LOSS_SCORE => "loss".to_string(),
        v => v.to_string(),
    }
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board with two-space indentation
pub fn print_board<const N: usize>(board: &BoardState<N>) {
    for row in board.to_string().lines() {
        println!("  {row}");
    }
}

/// Print search counters
pub fn print_search_stats(stats: &SearchStats) {
    print_kv("Nodes", &format_number(stats.nodes));
    print_kv("Evaluations", &format_number(stats.evaluations));
    print_kv("Terminal leaves", &format_number(stats.terminal_leaves));
    print_kv("Depth leaves", &format_number(stats.depth_leaves));
    print_kv("Cutoffs", &format_number(stats.cutoffs));
}
