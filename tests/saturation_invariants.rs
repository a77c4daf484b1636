//! Knowledge-base invariants over full seeded games.
//!
//! These tests drive complete games against real boards and check, after
//! every single observation, that the base is saturated, that confirmed
//! facts only grow, and that every derived fact agrees with the board's
//! ground truth.

use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};
use sapper::{Board, Cell, GameSession, Grid};

mod common;

use common::{assert_facts_disjoint, assert_saturated};

fn drive_and_check(board: Board, seed: u64) {
    let oracle = board.clone();
    let mut session = GameSession::new(board, seed);

    let mut prior_mines: HashSet<Cell> = HashSet::new();
    let mut prior_safes: HashSet<Cell> = HashSet::new();

    loop {
        let Some(record) = session.step().expect("consistent boards never error") else {
            break;
        };
        if record.adjacent_mines.is_none() {
            // Random guess hit a mine; the knowledge base never pointed
            // the agent at it.
            assert!(!prior_safes.contains(&record.cell));
            break;
        }

        let agent = session.agent();
        assert_saturated(agent);
        assert_facts_disjoint(agent);

        assert!(
            agent.confirmed_mines().is_superset(&prior_mines),
            "confirmed mines must only grow"
        );
        assert!(
            agent.confirmed_safes().is_superset(&prior_safes),
            "confirmed safes must only grow"
        );
        prior_mines = agent.confirmed_mines().clone();
        prior_safes = agent.confirmed_safes().clone();

        for &mine in agent.confirmed_mines() {
            assert!(
                oracle.is_mine(mine).unwrap(),
                "agent confirmed {mine} as a mine but the board disagrees"
            );
        }
        for &safe in agent.confirmed_safes() {
            assert!(
                !oracle.is_mine(safe).unwrap(),
                "agent confirmed {safe} as safe but the board disagrees"
            );
        }

        if session.is_complete() {
            break;
        }
    }
}

#[test]
fn invariants_hold_across_seeded_random_boards() {
    for seed in 0..24 {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::new(6, 6).unwrap();
        let board = Board::generate(grid, 5, &mut rng).unwrap();
        drive_and_check(board, seed);
    }
}

#[test]
fn invariants_hold_on_dense_small_boards() {
    for seed in 0..24 {
        let mut rng = StdRng::seed_from_u64(1000 + seed);
        let grid = Grid::new(4, 4).unwrap();
        let board = Board::generate(grid, 6, &mut rng).unwrap();
        drive_and_check(board, seed);
    }
}

#[test]
fn invariants_hold_on_a_mine_free_board() {
    let grid = Grid::new(5, 5).unwrap();
    let board = Board::with_mines(grid, HashSet::new()).unwrap();
    drive_and_check(board, 42);
}

#[test]
fn fully_deduced_games_confirm_every_mine() {
    // On a mine-free board the agent must reveal everything; with a lone
    // corner mine, winning runs must have flagged it.
    let grid = Grid::new(3, 3).unwrap();
    let board = Board::with_mines(grid, HashSet::from([Cell::new(2, 2)])).unwrap();

    for seed in 0..16 {
        let mut session = GameSession::new(board.clone(), seed);
        let record = session.run().unwrap();
        if record.is_won() {
            // Either every safe cell was revealed, or the win came from
            // flagging the deduced mine first.
            assert!(
                session.revealed().len() == 8
                    || session.agent().confirmed_mines().contains(&Cell::new(2, 2))
            );
        }
    }
}
