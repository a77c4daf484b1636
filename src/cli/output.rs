//! Output formatting for the CLI

use std::collections::HashMap;

use crate::minesweeper::SapperAgent;
use crate::types::Cell;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, String)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Render the agent's view of the board.
///
/// Revealed cells show their adjacency count, confirmed mines show `*`,
/// confirmed-but-unrevealed safes show `+`, everything else `.`.
pub fn render_agent_view(agent: &SapperAgent, revealed: &HashMap<Cell, usize>) -> String {
    let grid = agent.grid();
    let mut view = String::with_capacity(grid.len() * 2 + grid.height());
    for row in 0..grid.height() {
        for column in 0..grid.width() {
            let cell = Cell::new(row, column);
            let glyph = if let Some(count) = revealed.get(&cell) {
                char::from_digit(*count as u32, 10).unwrap_or('?')
            } else if agent.confirmed_mines().contains(&cell) {
                '*'
            } else if agent.confirmed_safes().contains(&cell) {
                '+'
            } else {
                '.'
            };
            if column > 0 {
                view.push(' ');
            }
            view.push(glyph);
        }
        view.push('\n');
    }
    view
}
