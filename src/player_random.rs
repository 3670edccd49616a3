#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::{
    board::SquareState,
    common::{BoardError, Move},
    config::GRID_SIZE,
    player::{Player, PlayerState},
};
use rand::{rngs::SmallRng, Rng};

/// Places its ships randomly and fires at random unshot squares.
pub struct RandomComputer {
    state: PlayerState,
}

impl RandomComputer {
    pub fn new(name: impl Into<String>, ship_lengths: &[usize]) -> Self {
        Self {
            state: PlayerState::new(name, ship_lengths),
        }
    }
}

impl Player for RandomComputer {
    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<(), BoardError> {
        self.state.place_ships_randomly(rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> Move {
        let board = self.state.tracking_board();
        if board.count(SquareState::Blank) == 0 {
            return Move::Forfeit;
        }
        loop {
            let x = rng.random_range(0..GRID_SIZE);
            let y = rng.random_range(0..GRID_SIZE);
            if board.valid_guess(x, y) {
                return Move::Fire { x, y };
            }
        }
    }
}
