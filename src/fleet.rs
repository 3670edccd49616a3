//! An ordered collection of ships. A ship's index is its identity.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::BoardError;
use crate::config::GridBits;
use crate::ship::Ship;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// One unpositioned ship per entry of `lengths`, in order.
    pub fn new(lengths: &[usize]) -> Self {
        Fleet {
            ships: lengths.iter().map(|&len| Ship::new(len)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn ship(&self, index: usize) -> Result<&Ship, BoardError> {
        self.ships.get(index).ok_or(BoardError::InvalidIndex)
    }

    pub fn ship_mut(&mut self, index: usize) -> Result<&mut Ship, BoardError> {
        self.ships.get_mut(index).ok_or(BoardError::InvalidIndex)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Lengths of every ship, in fleet order.
    pub fn lengths(&self) -> Vec<usize> {
        self.ships.iter().map(Ship::length).collect()
    }

    /// Record a hit on the first ship occupying (x, y). Returns that ship's
    /// index if the hit sank it.
    pub fn mark_ship_hit(&mut self, x: usize, y: usize) -> Option<usize> {
        let index = self.ship_at(x, y)?;
        let ship = &mut self.ships[index];
        ship.mark_hit(x, y);
        ship.is_sunk().then_some(index)
    }

    /// Index of the ship occupying (x, y), if any.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<usize> {
        self.ships
            .iter()
            .position(|ship| ship.contains(x as isize, y as isize))
    }

    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Union of the squares of every placed ship.
    pub fn occupancy(&self) -> GridBits {
        self.ships
            .iter()
            .filter(|ship| ship.is_placed())
            .fold(GridBits::new(), |acc, ship| acc | ship.mask())
    }
}
