use broadside::{Board, BoardError, Fleet, Orientation, Ship, ShotOutcome, SquareState};

fn single_ship_board(length: usize, x: isize, y: isize, orientation: Orientation) -> (Board, Fleet) {
    let mut board = Board::new();
    let mut fleet = Fleet::new(&[length]);
    let ship = fleet.ship_mut(0).unwrap();
    ship.set_orientation(orientation);
    ship.set_position(x, y);
    board.try_place_ship(&mut fleet, 0).unwrap();
    (board, fleet)
}

#[test]
fn three_long_ship_sinks_on_third_hit() {
    let (mut board, mut fleet) = single_ship_board(3, 0, 0, Orientation::Horizontal);
    assert!(fleet.all_placed());

    assert_eq!(board.fire_shot_at(&mut fleet, 0, 0).unwrap(), ShotOutcome::HIT);
    assert_eq!(board.fire_shot_at(&mut fleet, 1, 0).unwrap(), ShotOutcome::HIT);
    let last = board.fire_shot_at(&mut fleet, 2, 0).unwrap();
    assert!(last.hit);
    assert_eq!(last.sunken_index, Some(0));

    assert!(fleet.all_sunk());
    for x in 0..3 {
        assert_eq!(board.square_state_at(x, 0).unwrap(), SquareState::Hit);
    }
}

#[test]
fn blank_square_becomes_miss() {
    let (mut board, mut fleet) = single_ship_board(2, 0, 0, Orientation::Horizontal);
    assert_eq!(board.fire_shot_at(&mut fleet, 9, 9).unwrap(), ShotOutcome::MISS);
    assert_eq!(board.square_state_at(9, 9).unwrap(), SquareState::Miss);
    assert!(!board.valid_guess(9, 9));
}

#[test]
fn resolved_square_cannot_be_fired_at_again() {
    let (mut board, mut fleet) = single_ship_board(2, 0, 0, Orientation::Horizontal);
    board.fire_shot_at(&mut fleet, 0, 0).unwrap();
    board.fire_shot_at(&mut fleet, 4, 4).unwrap();
    assert_eq!(board.fire_shot_at(&mut fleet, 0, 0), Err(BoardError::AlreadyGuessed));
    assert_eq!(board.fire_shot_at(&mut fleet, 4, 4), Err(BoardError::AlreadyGuessed));
    assert_eq!(board.square_state_at(0, 0).unwrap(), SquareState::Hit);
    assert_eq!(
        board.fire_shot_at(&mut fleet, 10, 0),
        Err(BoardError::OutOfBounds { x: 10, y: 0 })
    );
}

#[test]
fn ship_fits_rejects_ships_misses_and_edges() {
    let (mut board, mut fleet) = single_ship_board(3, 2, 2, Orientation::Horizontal);
    let mut probe = Ship::new(2);

    probe.set_orientation(Orientation::Vertical);
    probe.set_position(3, 1);
    assert!(!board.ship_fits(&probe), "overlaps a ship");

    probe.set_position(6, 6);
    assert!(board.ship_fits(&probe));
    board.fire_shot_at(&mut fleet, 6, 7).unwrap();
    assert!(!board.ship_fits(&probe), "overlaps a miss");

    probe.set_position(9, 9);
    assert!(!board.ship_fits(&probe), "leaves the grid");

    probe.set_position(-1, 0);
    assert!(!board.ship_fits(&probe), "negative anchor");
}

#[test]
fn ship_fits_allows_known_hits() {
    let mut tracking = Board::new();
    let mut shadow = Fleet::new(&[3]);
    tracking.mark_shot(&mut shadow, 4, 4, ShotOutcome::HIT).unwrap();
    tracking.mark_shot(&mut shadow, 4, 5, ShotOutcome::MISS).unwrap();

    let mut probe = Ship::new(3);
    probe.set_position(3, 4);
    assert!(tracking.ship_fits(&probe));
    probe.set_orientation(Orientation::Vertical);
    probe.set_position(4, 3);
    assert!(!tracking.ship_fits(&probe));
}

#[test]
fn try_place_ship_checks_fit_and_repeat() {
    let (mut board, mut fleet) = single_ship_board(3, 0, 0, Orientation::Horizontal);
    assert_eq!(board.try_place_ship(&mut fleet, 0), Err(BoardError::ShipAlreadyPlaced));
    assert_eq!(board.try_place_ship(&mut fleet, 3), Err(BoardError::InvalidIndex));

    let mut other = Fleet::new(&[2]);
    other.ship_mut(0).unwrap().set_position(1, 0);
    assert_eq!(board.try_place_ship(&mut other, 0), Err(BoardError::ShipDoesNotFit));
    assert!(!other.all_placed());
    assert_eq!(board.count(SquareState::Ship), 3);
}

#[test]
fn mark_shot_updates_tracking_board_and_fleet() {
    let mut tracking = Board::new();
    let mut shadow = Fleet::new(&[5, 2]);

    tracking.mark_shot(&mut shadow, 3, 3, ShotOutcome::MISS).unwrap();
    tracking.mark_shot(&mut shadow, 4, 4, ShotOutcome::HIT).unwrap();
    tracking.mark_shot(&mut shadow, 4, 5, ShotOutcome::sunk(1)).unwrap();

    assert_eq!(tracking.square_state_at(3, 3).unwrap(), SquareState::Miss);
    assert_eq!(tracking.square_state_at(4, 5).unwrap(), SquareState::Hit);
    assert!(shadow.ship(1).unwrap().is_sunk());
    assert!(!shadow.ship(0).unwrap().is_sunk());
    assert!(!tracking.valid_guess(4, 4));
    assert!(tracking.valid_guess(0, 0));

    assert_eq!(
        tracking.mark_shot(&mut shadow, 0, 0, ShotOutcome::sunk(7)),
        Err(BoardError::InvalidIndex)
    );
    assert!(tracking.valid_guess(0, 0));
}

#[test]
fn valid_guess_rejects_off_grid() {
    let board = Board::new();
    assert!(board.valid_guess(9, 9));
    assert!(!board.valid_guess(10, 0));
    assert!(!board.valid_guess(0, 10));
}
