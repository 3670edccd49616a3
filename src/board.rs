//! The 10×10 grid: ship placement legality and shot resolution.
//!
//! A board does not own the fleet it describes. Operations that need to
//! attribute hits or sinks take the fleet as an argument, so a player keeps
//! each board and its fleet side by side.

use core::fmt;

use crate::common::{BoardError, ShotOutcome};
use crate::config::GRID_SIZE;
use crate::fleet::Fleet;
use crate::ship::Ship;

/// State of one grid square.
///
/// Squares only move forward: `Blank` → `Ship` on placement, then
/// `Ship`/`Blank` → `Hit`/`Miss` when fired at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SquareState {
    #[default]
    Blank,
    /// A placed ship on a primary board. On a tracking board the AI also
    /// uses it for hits it has attributed to a sunk ship.
    Ship,
    Hit,
    Miss,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[SquareState; GRID_SIZE]; GRID_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an all-blank board.
    pub fn new() -> Self {
        Board {
            grid: [[SquareState::Blank; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Returns true if (x, y) lies on the grid.
    pub fn in_bounds(x: isize, y: isize) -> bool {
        (0..GRID_SIZE as isize).contains(&x) && (0..GRID_SIZE as isize).contains(&y)
    }

    fn check_bounds(x: usize, y: usize) -> Result<(), BoardError> {
        if x < GRID_SIZE && y < GRID_SIZE {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    /// State of the square at (x, y).
    pub fn square_state_at(&self, x: usize, y: usize) -> Result<SquareState, BoardError> {
        Self::check_bounds(x, y)?;
        Ok(self.grid[x][y])
    }

    /// Read-only view of the whole grid, indexed `[x][y]`.
    pub fn grid(&self) -> &[[SquareState; GRID_SIZE]; GRID_SIZE] {
        &self.grid
    }

    /// Resolve a shot at (x, y) against this board and its `fleet`.
    ///
    /// A `Ship` square becomes `Hit` and the fleet is asked whether that hit
    /// sank something; anything else becomes `Miss`. Squares that were
    /// already fired at are rejected instead of being re-marked.
    pub fn fire_shot_at(
        &mut self,
        fleet: &mut Fleet,
        x: usize,
        y: usize,
    ) -> Result<ShotOutcome, BoardError> {
        match self.square_state_at(x, y)? {
            SquareState::Ship => {
                self.grid[x][y] = SquareState::Hit;
                Ok(ShotOutcome {
                    hit: true,
                    sunken_index: fleet.mark_ship_hit(x, y),
                })
            }
            SquareState::Blank => {
                self.grid[x][y] = SquareState::Miss;
                Ok(ShotOutcome::MISS)
            }
            SquareState::Hit | SquareState::Miss => Err(BoardError::AlreadyGuessed),
        }
    }

    /// Returns true if `ship` is positioned, lies fully on the grid, and
    /// none of its squares is a `Ship` or a `Miss`.
    ///
    /// `Hit` squares are allowed so destroy mode can lay ships over known hits.
    pub fn ship_fits(&self, ship: &Ship) -> bool {
        match ship.anchor() {
            Some((x, y)) if x >= 0 && y >= 0 => {}
            _ => return false,
        }
        ship.squares().iter().all(|&(x, y)| {
            Self::in_bounds(x, y)
                && !matches!(
                    self.grid[x as usize][y as usize],
                    SquareState::Ship | SquareState::Miss
                )
        })
    }

    /// Mark every square of `ship` as `Ship` and flag it placed. Callers
    /// must check `ship_fits` first.
    pub fn place_ship(&mut self, ship: &mut Ship) {
        for (x, y) in ship.mask().iter_set_bits() {
            self.grid[x][y] = SquareState::Ship;
        }
        ship.mark_placed();
    }

    /// Checked placement of the fleet's ship at `index`.
    pub fn try_place_ship(&mut self, fleet: &mut Fleet, index: usize) -> Result<(), BoardError> {
        let ship = fleet.ship_mut(index)?;
        if ship.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        if !self.ship_fits(ship) {
            return Err(BoardError::ShipDoesNotFit);
        }
        self.place_ship(ship);
        Ok(())
    }

    /// Record on a tracking board the outcome of a shot fired at the
    /// opponent. A sink marks the matching ship of the tracking `fleet`.
    pub fn mark_shot(
        &mut self,
        fleet: &mut Fleet,
        x: usize,
        y: usize,
        outcome: ShotOutcome,
    ) -> Result<(), BoardError> {
        Self::check_bounds(x, y)?;
        if let Some(index) = outcome.sunken_index {
            fleet.ship_mut(index)?.mark_sunk();
        }
        self.grid[x][y] = if outcome.hit {
            SquareState::Hit
        } else {
            SquareState::Miss
        };
        Ok(())
    }

    /// Flag (x, y) as accounted for by a sunk ship.
    pub fn mark_accounted(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        Self::check_bounds(x, y)?;
        self.grid[x][y] = SquareState::Ship;
        Ok(())
    }

    /// Returns true if (x, y) is on the grid and has not been fired at.
    pub fn valid_guess(&self, x: usize, y: usize) -> bool {
        matches!(self.square_state_at(x, y), Ok(SquareState::Blank))
    }

    /// Number of squares in the given state.
    pub fn count(&self, state: SquareState) -> usize {
        self.grid.iter().flatten().filter(|&&s| s == state).count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for y in 0..GRID_SIZE {
            write!(f, "  ")?;
            for x in 0..GRID_SIZE {
                let ch = match self.grid[x][y] {
                    SquareState::Blank => '.',
                    SquareState::Ship => 'S',
                    SquareState::Hit => 'X',
                    SquareState::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
