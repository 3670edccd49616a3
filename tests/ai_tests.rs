use broadside::ai::{choose_from_density, density_total, destroy_density, new_density_grid, search_density};
use broadside::{
    AiPlayer, Board, Fleet, Move, Player, PlayerState, ShotOutcome, SquareState, DEFAULT_FLEET,
    GRID_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};

/// Tracking board with everything outside the top-left `size`×`size` corner missed.
fn sub_board(size: usize) -> Board {
    let mut board = Board::new();
    let mut fleet = Fleet::new(&[]);
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            if x >= size || y >= size {
                board.mark_shot(&mut fleet, x, y, ShotOutcome::MISS).unwrap();
            }
        }
    }
    board
}

#[test]
fn search_density_on_four_by_four_corner() {
    let board = sub_board(4);
    let grid = search_density(&board, &Fleet::new(&[2]));
    let edge = [1, 2, 2, 1];
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            let expected = if x < 4 && y < 4 { edge[x] + edge[y] } else { 0 };
            assert_eq!(grid[x][y], expected, "square ({}, {})", x, y);
        }
    }
    // 24 placements of two squares each
    assert_eq!(density_total(&grid), 48);
}

#[test]
fn search_density_counts_every_legal_placement() {
    let board = Board::new();
    let fleet = Fleet::new(&DEFAULT_FLEET);
    let grid = search_density(&board, &fleet);

    let mut brute_force = 0u64;
    for &length in DEFAULT_FLEET.iter() {
        for _orientation in 0..2 {
            for along in 0..GRID_SIZE {
                for _across in 0..GRID_SIZE {
                    if along + length <= GRID_SIZE {
                        brute_force += length as u64;
                    }
                }
            }
        }
    }
    assert_eq!(density_total(&grid), brute_force);
    assert_eq!(brute_force, 2560);
    // the centre is more likely than a corner
    assert!(grid[4][4] > grid[0][0]);
}

#[test]
fn search_density_skips_sunk_ships() {
    let board = Board::new();
    let mut fleet = Fleet::new(&[5, 2]);
    fleet.ship_mut(0).unwrap().mark_sunk();
    let grid = search_density(&board, &fleet);
    assert_eq!(density_total(&grid), 360);
}

#[test]
fn destroy_density_surrounds_the_hit() {
    let mut board = Board::new();
    let mut fleet = Fleet::new(&[2]);
    board.mark_shot(&mut fleet, 4, 4, ShotOutcome::HIT).unwrap();

    let grid = destroy_density(&board, &fleet, &[(4, 4)]);
    for (x, y) in [(3, 4), (5, 4), (4, 3), (4, 5)] {
        assert_eq!(grid[x][y], 1);
    }
    assert_eq!(grid[4][4], 4);
    assert_eq!(density_total(&grid), 8);

    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..20 {
        let (x, y) = choose_from_density(&grid, &board, &mut rng).unwrap();
        assert!([(3, 4), (5, 4), (4, 3), (4, 5)].contains(&(x, y)));
    }
}

#[test]
fn choose_prefers_unique_maximum_and_skips_shot_squares() {
    let mut board = Board::new();
    let mut fleet = Fleet::new(&[]);
    let mut grid = new_density_grid();
    grid[1][1] = 9;
    grid[7][2] = 5;
    let mut rng = SmallRng::seed_from_u64(11);
    assert_eq!(choose_from_density(&grid, &board, &mut rng), Some((1, 1)));

    board.mark_shot(&mut fleet, 1, 1, ShotOutcome::MISS).unwrap();
    assert_eq!(choose_from_density(&grid, &board, &mut rng), Some((7, 2)));
}

#[test]
fn choose_falls_back_to_any_unshot_square_on_zero_density() {
    let board = sub_board(1);
    let grid = new_density_grid();
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(choose_from_density(&grid, &board, &mut rng), Some((0, 0)));

    let mut full = sub_board(1);
    full.mark_shot(&mut Fleet::new(&[]), 0, 0, ShotOutcome::MISS).unwrap();
    assert_eq!(choose_from_density(&grid, &full, &mut rng), None);
}

#[test]
fn ai_hunts_next_to_a_hit_and_resolves_the_sink() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut ai = AiPlayer::new("ai", &[2]);

    ai.handle_shot_result(4, 4, ShotOutcome::HIT).unwrap();
    assert_eq!(ai.hit_list(), &[(4, 4)]);
    assert_eq!(ai.last_hit(), Some((4, 4)));
    assert_eq!(density_total(&ai.probability_grid()), 8);

    let Move::Fire { x, y } = ai.select_target(&mut rng) else {
        panic!("ai forfeited");
    };
    assert!([(3, 4), (5, 4), (4, 3), (4, 5)].contains(&(x, y)));

    ai.handle_shot_result(5, 4, ShotOutcome::sunk(0)).unwrap();
    assert!(ai.hit_list().is_empty());
    assert_eq!(density_total(&ai.probability_grid()), 0);
    let tracking = ai.state().tracking_board();
    assert_eq!(tracking.square_state_at(4, 4).unwrap(), SquareState::Ship);
    assert_eq!(tracking.square_state_at(5, 4).unwrap(), SquareState::Ship);
    assert!(ai.state().tracking_fleet().all_sunk());
}

#[test]
fn ai_keeps_the_leading_hit_when_a_sunk_run_is_too_long() {
    let mut ai = AiPlayer::new("ai", &[2, 3]);
    ai.handle_shot_result(3, 2, ShotOutcome::HIT).unwrap();
    ai.handle_shot_result(5, 2, ShotOutcome::HIT).unwrap();
    ai.handle_shot_result(4, 2, ShotOutcome::sunk(0)).unwrap();

    assert_eq!(ai.hit_list(), &[(3, 2)]);
    let tracking = ai.state().tracking_board();
    assert_eq!(tracking.square_state_at(3, 2).unwrap(), SquareState::Hit);
    assert_eq!(tracking.square_state_at(4, 2).unwrap(), SquareState::Ship);
    assert_eq!(tracking.square_state_at(5, 2).unwrap(), SquareState::Ship);
    assert!(ai.state().tracking_fleet().ship(0).unwrap().is_sunk());
    assert!(!ai.state().tracking_fleet().ship(1).unwrap().is_sunk());
}

#[test]
fn ai_resolves_only_the_fired_square_on_crossing_runs() {
    let mut ai = AiPlayer::new("ai", &[2, 3]);
    ai.handle_shot_result(3, 2, ShotOutcome::HIT).unwrap();
    ai.handle_shot_result(2, 3, ShotOutcome::HIT).unwrap();
    ai.handle_shot_result(2, 2, ShotOutcome::sunk(0)).unwrap();

    assert_eq!(ai.hit_list(), &[(3, 2), (2, 3)]);
    let tracking = ai.state().tracking_board();
    assert_eq!(tracking.square_state_at(2, 2).unwrap(), SquareState::Ship);
    assert_eq!(tracking.square_state_at(3, 2).unwrap(), SquareState::Hit);
    assert_eq!(tracking.square_state_at(2, 3).unwrap(), SquareState::Hit);
}

#[test]
fn ai_returns_to_search_when_no_ship_covers_its_hits() {
    let mut rng = SmallRng::seed_from_u64(23);
    let mut ai = AiPlayer::new("ai", &[2, 3]);
    ai.handle_shot_result(1, 0, ShotOutcome::MISS).unwrap();
    ai.handle_shot_result(0, 1, ShotOutcome::MISS).unwrap();
    ai.handle_shot_result(0, 0, ShotOutcome::HIT).unwrap();
    assert_eq!(ai.hit_list(), &[(0, 0)]);

    let (x, y) = ai.get_move(&mut rng).unwrap();
    assert!(ai.hit_list().is_empty());
    assert!(ai.state().tracking_board().valid_guess(x, y));
}

fn shots_to_sink(seed: u64) -> usize {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut target = PlayerState::new("target", &DEFAULT_FLEET);
    target.place_ships_randomly(&mut rng).unwrap();
    let mut ai = AiPlayer::new("ai", &DEFAULT_FLEET);

    let mut shots = 0;
    while !target.all_ships_sunk() {
        let Move::Fire { x, y } = ai.select_target(&mut rng) else {
            panic!("ai forfeited with ships afloat (seed {})", seed);
        };
        let outcome = target.fire_shot_at(x, y).unwrap();
        ai.handle_shot_result(x, y, outcome).unwrap();
        shots += 1;
        assert!(shots <= GRID_SIZE * GRID_SIZE, "seed {} needed more than 100 shots", seed);
    }
    shots
}

#[test]
fn ai_sinks_a_random_fleet_within_the_grid() {
    let runs: Vec<usize> = (0..30).map(shots_to_sink).collect();
    let mean = runs.iter().sum::<usize>() as f64 / runs.len() as f64;
    // a random shooter needs ~95 on average
    assert!(mean < 75.0, "mean shots {} over {:?}", mean, runs);
}
