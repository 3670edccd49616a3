//! The player interface and the board/fleet bookkeeping every player shares.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::{
    board::Board,
    common::{BoardError, Move, ShotOutcome},
    config::GRID_SIZE,
    fleet::Fleet,
    ship::Orientation,
};
use log::debug;
use rand::{rngs::SmallRng, Rng};

/// Give up on random placement of one ship after this many rejected tries.
const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// A player's own waters plus its record of the opponent's.
///
/// The tracking fleet only mirrors the opponent's ship lengths and which of
/// them are sunk; it never learns where they are.
#[derive(Debug, Clone)]
pub struct PlayerState {
    name: String,
    primary_board: Board,
    primary_fleet: Fleet,
    tracking_board: Board,
    tracking_fleet: Fleet,
}

impl PlayerState {
    pub fn new(name: impl Into<String>, ship_lengths: &[usize]) -> Self {
        Self {
            name: name.into(),
            primary_board: Board::new(),
            primary_fleet: Fleet::new(ship_lengths),
            tracking_board: Board::new(),
            tracking_fleet: Fleet::new(ship_lengths),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_board(&self) -> &Board {
        &self.primary_board
    }

    pub fn primary_fleet(&self) -> &Fleet {
        &self.primary_fleet
    }

    pub fn tracking_board(&self) -> &Board {
        &self.tracking_board
    }

    pub fn tracking_fleet(&self) -> &Fleet {
        &self.tracking_fleet
    }

    /// Own board and fleet, for placement.
    pub fn primary_mut(&mut self) -> (&mut Board, &mut Fleet) {
        (&mut self.primary_board, &mut self.primary_fleet)
    }

    /// Tracking board and fleet, for bookkeeping about the opponent.
    pub fn tracking_mut(&mut self) -> (&mut Board, &mut Fleet) {
        (&mut self.tracking_board, &mut self.tracking_fleet)
    }

    /// Place every unplaced ship at a uniformly random anchor and orientation,
    /// one ship at a time, without backtracking.
    pub fn place_ships_randomly(&mut self, rng: &mut SmallRng) -> Result<(), BoardError> {
        for index in 0..self.primary_fleet.len() {
            if !self.primary_fleet.ship(index)?.is_placed() {
                self.place_ship_randomly(rng, index)?;
            }
        }
        Ok(())
    }

    /// Random placement of the ship at `index`.
    pub fn place_ship_randomly(&mut self, rng: &mut SmallRng, index: usize) -> Result<(), BoardError> {
        let ship = self.primary_fleet.ship_mut(index)?;
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let x = rng.random_range(0..GRID_SIZE) as isize;
            let y = rng.random_range(0..GRID_SIZE) as isize;
            let orientation = if rng.random() {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            ship.set_orientation(orientation);
            ship.set_position(x, y);
            if self.primary_board.ship_fits(ship) {
                debug!(
                    "{}: placed ship {} (length {}) at ({}, {}) {:?} after {} attempts",
                    self.name,
                    index,
                    ship.length(),
                    x,
                    y,
                    orientation,
                    attempt
                );
                self.primary_board.place_ship(ship);
                return Ok(());
            }
        }
        Err(BoardError::ShipDoesNotFit)
    }

    /// Resolve an opponent's shot against our own board.
    pub fn fire_shot_at(&mut self, x: usize, y: usize) -> Result<ShotOutcome, BoardError> {
        self.primary_board.fire_shot_at(&mut self.primary_fleet, x, y)
    }

    /// Record the outcome of our own shot on the tracking board.
    pub fn mark_shot(&mut self, x: usize, y: usize, outcome: ShotOutcome) -> Result<(), BoardError> {
        self.tracking_board.mark_shot(&mut self.tracking_fleet, x, y, outcome)
    }

    pub fn all_ships_placed(&self) -> bool {
        self.primary_fleet.all_placed()
    }

    pub fn all_ships_sunk(&self) -> bool {
        self.primary_fleet.all_sunk()
    }
}

/// Interface implemented by the different player types.
///
/// The game asks a player to place its ships, then alternately for a move and
/// reports back the outcome of that move, and finally tells it who won.
pub trait Player {
    fn state(&self) -> &PlayerState;

    fn state_mut(&mut self) -> &mut PlayerState;

    fn name(&self) -> &str {
        self.state().name()
    }

    /// Place all ships onto the primary board.
    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<(), BoardError>;

    /// Choose the next shot, or forfeit.
    fn select_target(&mut self, rng: &mut SmallRng) -> Move;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, x: usize, y: usize, outcome: ShotOutcome) -> Result<(), BoardError> {
        self.state_mut().mark_shot(x, y, outcome)
    }

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _x: usize, _y: usize, _outcome: ShotOutcome) {}

    /// Inform the player that the game ended.
    fn game_over(&mut self, _won: bool) {}
}
