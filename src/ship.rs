//! A single vessel: its geometry and which of its squares were hit.
//!
//! Squares use signed coordinates so the AI can position hypothetical ships
//! that hang off the grid and let `Board::ship_fits` reject them.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::config::{GridBits, GRID_SIZE};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Squares advance along `x`.
    Horizontal,
    /// Squares advance along `y`.
    Vertical,
}

impl Orientation {
    /// Unit step between consecutive squares.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    anchor: Option<(isize, isize)>,
    squares: Vec<(isize, isize)>,
    hits: GridBits,
    placed: bool,
    sunk: bool,
}

impl Ship {
    /// An unpositioned, horizontal ship of `length` squares.
    pub fn new(length: usize) -> Self {
        Ship {
            length,
            orientation: Orientation::Horizontal,
            anchor: None,
            squares: Vec::with_capacity(length),
            hits: GridBits::new(),
            placed: false,
            sunk: false,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First square of the ship, or `None` before `set_position`.
    pub fn anchor(&self) -> Option<(isize, isize)> {
        self.anchor
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Toggle orientation. Squares are stale until the next `set_position`.
    pub fn rotate(&mut self) {
        self.orientation = self.orientation.rotated();
    }

    /// Set orientation. Squares are stale until the next `set_position`.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Anchor the ship at (x, y) and rebuild its squares from the current
    /// orientation. Any recorded hits are discarded.
    pub fn set_position(&mut self, x: isize, y: isize) {
        let (dx, dy) = self.orientation.step();
        self.anchor = Some((x, y));
        self.squares.clear();
        for i in 0..self.length as isize {
            self.squares.push((x + dx * i, y + dy * i));
        }
        self.hits.clear_all();
        self.sunk = false;
    }

    /// Squares the ship occupies, in order from the anchor.
    pub fn squares(&self) -> &[(isize, isize)] {
        &self.squares
    }

    /// Returns true if the ship occupies (x, y).
    pub fn contains(&self, x: isize, y: isize) -> bool {
        self.squares.contains(&(x, y))
    }

    /// Returns true if (x, y) is one of the ship's squares and has been hit.
    pub fn is_hit(&self, x: isize, y: isize) -> bool {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => self.hits.get(x, y).unwrap_or(false),
            _ => false,
        }
    }

    /// Record a hit at (x, y). Does nothing and returns `false` if the ship
    /// does not occupy that square.
    pub fn mark_hit(&mut self, x: usize, y: usize) -> bool {
        if x >= GRID_SIZE || y >= GRID_SIZE || !self.contains(x as isize, y as isize) {
            return false;
        }
        if self.hits.set(x, y).is_err() {
            return false;
        }
        self.sunk = self.cells().count() == self.length && self.hits.contains_all(&self.mask());
        true
    }

    /// Returns true once every square has been hit or the ship was marked sunk.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Force the sunk flag, for ships whose squares are not known.
    pub fn mark_sunk(&mut self) {
        self.sunk = true;
    }

    pub(crate) fn mark_placed(&mut self) {
        self.placed = true;
    }

    /// In-grid squares as unsigned coordinates. Off-grid squares are skipped.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.squares.iter().filter_map(|&(x, y)| {
            let x = usize::try_from(x).ok()?;
            let y = usize::try_from(y).ok()?;
            (x < GRID_SIZE && y < GRID_SIZE).then_some((x, y))
        })
    }

    /// Occupancy mask of the ship's in-grid squares.
    pub fn mask(&self) -> GridBits {
        // cells() only yields in-grid squares
        GridBits::from_cells(self.cells()).unwrap_or_default()
    }
}
