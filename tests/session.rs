use skyline_life::domain::{FlatTerrain, RESTING};
use skyline_life::{Config, Error, Phase, Session, presets};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

fn config() -> Config {
    Config {
        columns: 16,
        rows: 16,
        tick_seconds: 0.1,
        max_terrain_level: 2,
        max_building_height: 4,
        easing: 0.25,
        seed: Some(2024),
        ..Config::default()
    }
}

/// Run until the session is simulating, then return.
fn run_until_simulating(session: &mut Session) {
    session.start();
    while session.phase() != Phase::Simulating {
        session.update(TICK);
    }
}

#[test]
fn block_still_life_grows_to_cap() {
    let mut session = Session::with_terrain(config(), Box::new(FlatTerrain)).unwrap();
    session.clear().unwrap();
    session.stamp(&presets::BLOCK, 8, 8).unwrap();
    let population = session.grid().population();
    assert_eq!(population, 4);

    run_until_simulating(&mut session);
    for _ in 0..10 {
        session.update(TICK);
    }

    assert_eq!(session.generation(), 10);
    assert_eq!(session.grid().population(), 4);
    for (cell, column) in session.grid().iter_cells() {
        if cell.is_alive() {
            assert_eq!(column.building_height(), 4);
        } else {
            assert_eq!(column.building_height(), 0);
        }
    }
}

#[test]
fn frames_between_ticks_only_animate() {
    let mut session = Session::with_terrain(config(), Box::new(FlatTerrain)).unwrap();
    session.clear().unwrap();
    session.stamp(&presets::BLOCK, 8, 8).unwrap();
    run_until_simulating(&mut session);

    // One tick at a coarse frame, then many short frames within one interval.
    assert_eq!(session.update(TICK), 1);
    let (cell, _) = session
        .grid()
        .iter_cells()
        .find(|(cell, _)| cell.is_alive())
        .unwrap();
    let (c, r) = cell.position();
    let before = session.grid().animator(c, r).unwrap().building_offset();

    for _ in 0..5 {
        assert_eq!(session.update(Duration::from_millis(10)), 0);
    }
    let column = session.grid().animator(c, r).unwrap();
    assert_eq!(column.building_height(), 1);
    assert!(column.building_offset() > before);
    assert!(column.building_offset() <= RESTING);
    assert_eq!(session.generation(), 1);
}

#[test]
fn lonely_cell_dies_then_collapses() {
    let mut session = Session::with_terrain(config(), Box::new(FlatTerrain)).unwrap();
    session.clear().unwrap();
    session.paint(8, 8, true).unwrap();
    run_until_simulating(&mut session);

    session.update(TICK);
    assert_eq!(session.grid().population(), 0);
    let column = session.grid().animator(8, 8).unwrap();
    // It died on this tick: no block ever grew.
    assert_eq!(column.building_height(), 0);
}

#[test]
fn edges_stay_dead_through_random_run() {
    let mut session = Session::new(config()).unwrap();
    run_until_simulating(&mut session);
    for _ in 0..200 {
        session.update(Duration::from_millis(37));
        for (cell, column) in session.grid().iter_cells() {
            if cell.is_edge() {
                assert!(!cell.is_alive());
                assert_eq!(column.building_height(), 0);
            }
            assert!(column.building_height() <= 4);
        }
    }
}

#[test]
fn reset_returns_to_editing() {
    let mut session = Session::new(config()).unwrap();
    run_until_simulating(&mut session);
    session.update(TICK * 5);
    assert_eq!(session.paint(8, 8, true), Err(Error::EditWhileRunning));

    session.reset();
    assert!(session.is_editing());
    assert_eq!(session.generation(), 0);
    session.clear().unwrap();
    assert_eq!(session.paint(8, 8, true), Ok(true));
    assert_eq!(session.update(Duration::from_secs(1)), 0);
    assert!(session.grid().cell(8, 8).unwrap().is_alive());
}
