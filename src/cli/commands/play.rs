//! Play command - Run a single game verbosely

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::output,
    minesweeper::Board,
    pipeline::{GameSession, MovePolicy},
    types::Grid,
};

#[derive(Parser, Debug)]
#[command(about = "Play a single game with the inference agent")]
pub struct PlayArgs {
    /// Board height
    #[arg(long, default_value_t = 8)]
    pub height: usize,

    /// Board width
    #[arg(long, default_value_t = 8)]
    pub width: usize,

    /// Number of mines
    #[arg(long, short = 'm', default_value_t = 8)]
    pub mines: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let grid = Grid::new(args.height, args.width)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let board = Board::generate(grid, args.mines, &mut rng)?;
    let mut session = GameSession::new(board, seed);

    output::print_section(&format!(
        "sapper: {grid} board, {} mines, seed {seed}",
        args.mines
    ));

    let mut move_num = 0;
    loop {
        let Some(record) = session.step()? else {
            println!("\nBoard fully deduced.");
            break;
        };
        move_num += 1;
        let policy = match record.policy {
            MovePolicy::Safe => "safe",
            MovePolicy::Random => "random",
        };
        match record.adjacent_mines {
            None => {
                println!("move {move_num}: {} ({policy}) -> mine, game over", record.cell);
                break;
            }
            Some(count) => {
                println!("move {move_num}: {} ({policy}) -> {count} adjacent", record.cell);
                print!("{}", output::render_agent_view(session.agent(), session.revealed()));
                if session.is_complete() {
                    println!("\nAll safe cells revealed.");
                    break;
                }
            }
        }
    }

    output::print_stats_table(&[
        ("Moves", move_num.to_string()),
        ("Confirmed mines", session.agent().confirmed_mines().len().to_string()),
        ("Confirmed safes", session.agent().confirmed_safes().len().to_string()),
        ("Active sentences", session.agent().knowledge().len().to_string()),
    ]);
    Ok(())
}
