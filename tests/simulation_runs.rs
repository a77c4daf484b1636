//! Batch simulation and observer integration.

use std::{
    fs,
    sync::{Arc, Mutex},
};

use sapper::{
    GameRecord, Grid, JsonlObserver, SessionObserver, Simulation, SimulationConfig,
    SimulationResult,
};
use serde_json::Value;

fn config(games: usize, seed: u64) -> SimulationConfig {
    SimulationConfig {
        games,
        grid: Grid::new(5, 5).unwrap(),
        mines: 3,
        seed,
    }
}

#[test]
fn batches_are_reproducible_from_the_seed() {
    let first = Simulation::new(config(25, 7)).run(&mut []).unwrap();
    let second = Simulation::new(config(25, 7)).run(&mut []).unwrap();
    assert_eq!(first, second, "same config must replay the same batch");

    let shifted = Simulation::new(config(25, 8)).run(&mut []).unwrap();
    assert_eq!(shifted.games, 25);
}

#[test]
fn sparse_boards_are_mostly_won() {
    let result = Simulation::new(SimulationConfig {
        games: 40,
        grid: Grid::new(6, 6).unwrap(),
        mines: 2,
        seed: 3,
    })
    .run(&mut [])
    .unwrap();

    assert_eq!(result.wins + result.losses, 40);
    assert!(
        result.wins > result.losses,
        "2 mines on 36 cells should be winnable most of the time, got {result:?}"
    );
}

#[test]
fn observers_see_every_game() {
    #[derive(Default)]
    struct Counts {
        started_with: Option<usize>,
        games_seen: usize,
        ended: bool,
    }

    struct CountingObserver(Arc<Mutex<Counts>>);

    impl SessionObserver for CountingObserver {
        fn on_session_start(&mut self, total_games: usize) -> sapper::Result<()> {
            self.0.lock().unwrap().started_with = Some(total_games);
            Ok(())
        }

        fn on_game_complete(&mut self, _game_num: usize, _record: &GameRecord) -> sapper::Result<()> {
            self.0.lock().unwrap().games_seen += 1;
            Ok(())
        }

        fn on_session_end(&mut self, _result: &SimulationResult) -> sapper::Result<()> {
            self.0.lock().unwrap().ended = true;
            Ok(())
        }
    }

    let counts = Arc::new(Mutex::new(Counts::default()));
    let mut observers: Vec<Box<dyn SessionObserver>> =
        vec![Box::new(CountingObserver(Arc::clone(&counts)))];
    Simulation::new(config(12, 5)).run(&mut observers).unwrap();

    let counts = counts.lock().unwrap();
    assert_eq!(counts.started_with, Some(12));
    assert_eq!(counts.games_seen, 12);
    assert!(counts.ended);
}

#[test]
fn jsonl_observer_writes_one_record_per_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("observations.jsonl");

    let mut observers: Vec<Box<dyn SessionObserver>> =
        vec![Box::new(JsonlObserver::create(&path).unwrap())];
    let result = Simulation::new(config(9, 21)).run(&mut observers).unwrap();
    drop(observers);

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), result.games);

    for (i, line) in lines.iter().enumerate() {
        let record: Value = serde_json::from_str(line).expect("every line is valid JSON");
        assert_eq!(record["game"], i);
        assert!(record["total_moves"].as_u64().unwrap() > 0);
        assert!(record["moves"].is_array());
    }
}
