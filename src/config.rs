use crate::bitboard::BitBoard;

/// Width and height of every board.
pub const GRID_SIZE: usize = 10;

/// Ship lengths of the standard fleet, in fleet index order.
pub const DEFAULT_FLEET: [usize; 5] = [5, 4, 4, 3, 2];

/// File the battlelog is written to when no path is given.
pub const DEFAULT_LOG_FILE: &str = "battlelog.txt";

/// Bitboard sized for the game grid.
pub type GridBits = BitBoard<u128, GRID_SIZE>;
