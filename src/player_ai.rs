#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::{
    ai::{self, Attribution, DensityGrid},
    common::{BoardError, Move, ShotOutcome},
    player::{Player, PlayerState},
};
use log::{debug, warn};
use rand::rngs::SmallRng;

/// Computer player that fires at the square most likely to hold a ship.
///
/// With no unresolved hits it searches the whole board; once something is
/// hit it concentrates on positions that would cover the known hits until
/// the ship sinks.
pub struct AiPlayer {
    state: PlayerState,
    hit_list: Vec<(usize, usize)>,
    last_hit: Option<(usize, usize)>,
}

impl AiPlayer {
    pub fn new(name: impl Into<String>, ship_lengths: &[usize]) -> Self {
        Self {
            state: PlayerState::new(name, ship_lengths),
            hit_list: Vec::new(),
            last_hit: None,
        }
    }

    /// Hits not yet attributed to a sunk ship, oldest first.
    pub fn hit_list(&self) -> &[(usize, usize)] {
        &self.hit_list
    }

    /// Most recent hit that did not sink anything.
    pub fn last_hit(&self) -> Option<(usize, usize)> {
        self.last_hit
    }

    /// Density grid for the current mode.
    pub fn probability_grid(&self) -> DensityGrid {
        let (board, fleet) = (self.state.tracking_board(), self.state.tracking_fleet());
        if self.hit_list.is_empty() {
            ai::search_density(board, fleet)
        } else {
            ai::destroy_density(board, fleet, &self.hit_list)
        }
    }

    /// Choose the next shot.
    pub fn get_move(&mut self, rng: &mut SmallRng) -> Option<(usize, usize)> {
        let board = self.state.tracking_board();
        let fleet = self.state.tracking_fleet();

        if !self.hit_list.is_empty() {
            let grid = ai::destroy_density(board, fleet, &self.hit_list);
            match ai::choose_from_density(&grid, board, rng) {
                Some((x, y)) if grid[x][y] > 0 => return Some((x, y)),
                _ => {
                    warn!(
                        "{}: no position covers the {} unresolved hits, back to search mode",
                        self.state.name(),
                        self.hit_list.len()
                    );
                    self.hit_list.clear();
                }
            }
        }

        let grid = ai::search_density(board, fleet);
        ai::choose_from_density(&grid, board, rng)
    }

    /// Resolve the squares of the ship of `length` sunk by the shot at (x, y)
    /// and drop them from the hit list.
    fn mark_as_sunk(&mut self, x: usize, y: usize, length: usize) -> Result<(), BoardError> {
        let (attribution, squares) = ai::attribute_sink(self.state.tracking_board(), x, y, length);
        if !matches!(attribution, Attribution::Line(_)) {
            debug!(
                "{}: could not place the sunk ship of length {} at ({}, {}): {:?}",
                self.state.name(),
                length,
                x,
                y,
                attribution
            );
        }
        let (board, _) = self.state.tracking_mut();
        for &(sx, sy) in &squares {
            board.mark_accounted(sx, sy)?;
            if let Some(pos) = self.hit_list.iter().position(|&h| h == (sx, sy)) {
                self.hit_list.remove(pos);
            }
        }
        Ok(())
    }
}

impl Player for AiPlayer {
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
        match self.get_move(rng) {
            Some((x, y)) => Move::Fire { x, y },
            None => Move::Forfeit,
        }
    }

    fn handle_shot_result(&mut self, x: usize, y: usize, outcome: ShotOutcome) -> Result<(), BoardError> {
        self.state.mark_shot(x, y, outcome)?;
        if outcome.hit {
            self.hit_list.push((x, y));
        }
        if let Some(index) = outcome.sunken_index {
            let length = self.state.tracking_fleet().ship(index)?.length();
            self.mark_as_sunk(x, y, length)?;
        } else if outcome.hit {
            self.last_hit = Some((x, y));
        }
        Ok(())
    }
}
