//! Common types for Broadside: shot outcomes, moves and errors.

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Result of firing at a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    /// The shot landed on a ship.
    pub hit: bool,
    /// Fleet index of the ship this shot sank, if any.
    pub sunken_index: Option<usize>,
}

impl ShotOutcome {
    pub const MISS: ShotOutcome = ShotOutcome {
        hit: false,
        sunken_index: None,
    };

    pub const HIT: ShotOutcome = ShotOutcome {
        hit: true,
        sunken_index: None,
    };

    /// A hit that sank the ship at `index`.
    pub const fn sunk(index: usize) -> Self {
        ShotOutcome {
            hit: true,
            sunken_index: Some(index),
        }
    }

    /// Short label used in logs: `SUNK`, `HIT` or `MISS`.
    pub fn label(&self) -> &'static str {
        if self.sunken_index.is_some() {
            "SUNK"
        } else if self.hit {
            "HIT"
        } else {
            "MISS"
        }
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a player does on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Fire at (x, y) on the opponent's board.
    Fire { x: usize, y: usize },
    /// Give up the match.
    Forfeit,
}

/// Renders (x, y) the way players type it: column letter from `y`, then `x + 1`.
pub fn coord_label(x: usize, y: usize) -> String {
    let mut label = String::new();
    label.push((b'A' + y as u8) as char);
    // writing into a String cannot fail
    let _ = fmt::Write::write_fmt(&mut label, format_args!("{}", x + 1));
    label
}

/// Parses `B3`-style input back into (x, y). Case-insensitive.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let y = (letter as u8 - b'A') as usize;
    let x: usize = chars.as_str().parse().ok()?;
    if x == 0 {
        return None;
    }
    Some((x - 1, y))
}

/// Errors returned by Board, Fleet and Ship operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate is outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Fleet index is out of range.
    InvalidIndex,
    /// Ship has already been placed on this board.
    ShipAlreadyPlaced,
    /// Ship leaves the grid or overlaps something it may not.
    ShipDoesNotFit,
    /// Square has already been fired at.
    AlreadyGuessed,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => write!(f, "({}, {}) is off the board", x, y),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipDoesNotFit => write!(f, "Ship does not fit at that position"),
            BoardError::AlreadyGuessed => write!(f, "Square was already fired at"),
        }
    }
}

/// Errors that end a match without a winner being decided on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A player finished its placement phase with ships left over.
    PlacementFailed { player: String },
    /// A player asked to fire at a square that is off the grid or already resolved.
    IllegalShot { player: String, x: usize, y: usize },
    /// A player's tracking fleet does not mirror the opponent's fleet.
    FleetMismatch { player: String },
    /// A board operation failed while resolving a legal shot.
    Board { player: String, source: BoardError },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::PlacementFailed { player } => {
                write!(f, "{} failed to place all their ships", player)
            }
            GameError::IllegalShot { player, x, y } => {
                write!(f, "{} fired at an illegal square ({}, {})", player, x, y)
            }
            GameError::FleetMismatch { player } => {
                write!(f, "{} tracks a fleet that differs from its opponent's", player)
            }
            GameError::Board { player, source } => write!(f, "{}: {}", player, source),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board { source, .. } => Some(source),
            _ => None,
        }
    }
}
