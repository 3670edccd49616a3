// Probability-density targeting over a tracking board.
// Densities are plain placement counts: every legal position of every
// unsunk ship adds one to each square it would cover.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::{
    board::{Board, SquareState},
    config::GRID_SIZE,
    fleet::Fleet,
    ship::{Orientation, Ship},
};
use log::debug;
use rand::Rng;

/// Placement counts per square, indexed `[x][y]`.
pub type DensityGrid = [[u32; GRID_SIZE]; GRID_SIZE];

/// A grid with no probability mass anywhere.
pub fn new_density_grid() -> DensityGrid {
    [[0; GRID_SIZE]; GRID_SIZE]
}

/// Sum of every entry of `grid`.
pub fn density_total(grid: &DensityGrid) -> u64 {
    grid.iter().flatten().map(|&v| v as u64).sum()
}

fn add_to_density(ship: &Ship, grid: &mut DensityGrid) {
    for (x, y) in ship.cells() {
        grid[x][y] += 1;
    }
}

fn add_if_fits(board: &Board, ship: &mut Ship, orientation: Orientation, x: isize, y: isize, grid: &mut DensityGrid) {
    ship.set_orientation(orientation);
    ship.set_position(x, y);
    if board.ship_fits(ship) {
        add_to_density(ship, grid);
    }
}

/// Search mode: count every position, in both orientations, where each
/// unsunk ship of `fleet` fits on `board`.
pub fn search_density(board: &Board, fleet: &Fleet) -> DensityGrid {
    let mut grid = new_density_grid();
    for ship in fleet.ships().iter().filter(|s| !s.is_sunk()) {
        let mut probe = Ship::new(ship.length());
        for x in 0..GRID_SIZE as isize {
            for y in 0..GRID_SIZE as isize {
                add_if_fits(board, &mut probe, Orientation::Horizontal, x, y, &mut grid);
                add_if_fits(board, &mut probe, Orientation::Vertical, x, y, &mut grid);
            }
        }
    }
    grid
}

/// Destroy mode: like [`search_density`], but only positions that cover one
/// of the squares in `hit_list` are counted, once per covered hit.
pub fn destroy_density(board: &Board, fleet: &Fleet, hit_list: &[(usize, usize)]) -> DensityGrid {
    let mut grid = new_density_grid();
    for &(hx, hy) in hit_list {
        let (hx, hy) = (hx as isize, hy as isize);
        for ship in fleet.ships().iter().filter(|s| !s.is_sunk()) {
            let mut probe = Ship::new(ship.length());
            for k in 0..ship.length() as isize {
                add_if_fits(board, &mut probe, Orientation::Horizontal, hx - k, hy, &mut grid);
                add_if_fits(board, &mut probe, Orientation::Vertical, hx, hy - k, &mut grid);
            }
        }
    }
    grid
}

/// Pick uniformly among the unshot squares with the highest density.
///
/// Squares with zero density still qualify when nothing scores higher.
/// Returns `None` only when the board has no unshot square left.
pub fn choose_from_density<R: Rng + ?Sized>(
    grid: &DensityGrid,
    board: &Board,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let mut max = 0;
    let mut candidates: Vec<(usize, usize)> = Vec::new();
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            if !board.valid_guess(x, y) {
                continue;
            }
            let value = grid[x][y];
            if value > max {
                max = value;
                candidates.clear();
                candidates.push((x, y));
            } else if value == max {
                candidates.push((x, y));
            }
        }
    }
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

/// Best shot for a player that keeps no hit list of its own: hunt around
/// every unresolved hit on `board`, or search when there is none.
pub fn suggest_move<R: Rng + ?Sized>(board: &Board, fleet: &Fleet, rng: &mut R) -> Option<(usize, usize)> {
    let hits: Vec<(usize, usize)> = (0..GRID_SIZE)
        .flat_map(|x| (0..GRID_SIZE).map(move |y| (x, y)))
        .filter(|&(x, y)| matches!(board.square_state_at(x, y), Ok(SquareState::Hit)))
        .collect();
    if !hits.is_empty() {
        let grid = destroy_density(board, fleet, &hits);
        if let Some((x, y)) = choose_from_density(&grid, board, rng) {
            if grid[x][y] > 0 {
                return Some((x, y));
            }
        }
    }
    choose_from_density(&search_density(board, fleet), board, rng)
}

/// How the squares of a sunk ship were identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution {
    /// A run of hits along this axis was long enough.
    Line(Orientation),
    /// Both axes had a long enough run; only the fired square is resolved.
    Ambiguous,
    /// Neither axis had a long enough run; only the fired square is resolved.
    Unresolved,
}

/// Longest run of `Hit` squares along `orientation` inside the
/// `2 * length - 1` window centred on (x, y). Returns the run's first square
/// and its length.
pub fn find_consecutive_hits(
    board: &Board,
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
) -> (Option<(usize, usize)>, usize) {
    let (dx, dy) = orientation.step();
    let reach = length as isize - 1;
    let mut start = None;
    let mut run = 0;
    let mut best_start = None;
    let mut best_run = 0;
    for i in -reach..=reach {
        let sx = x as isize + dx * i;
        let sy = y as isize + dy * i;
        let is_hit = Board::in_bounds(sx, sy)
            && board.grid()[sx as usize][sy as usize] == SquareState::Hit;
        if is_hit {
            if start.is_none() {
                start = Some((sx as usize, sy as usize));
            }
            run += 1;
            if run > best_run {
                best_run = run;
                best_start = start;
            }
        } else {
            run = 0;
            start = None;
        }
    }
    (best_start, best_run)
}

/// Work out which squares belonged to the ship of `length` that the shot at
/// (x, y) just sank.
///
/// A run longer than the ship is trimmed from its front, keeping the last
/// `length` squares. That guess can be wrong when two ships lie end to end.
pub fn attribute_sink(
    board: &Board,
    x: usize,
    y: usize,
    length: usize,
) -> (Attribution, Vec<(usize, usize)>) {
    let horizontal = find_consecutive_hits(board, x, y, length, Orientation::Horizontal);
    let vertical = find_consecutive_hits(board, x, y, length, Orientation::Vertical);

    let (orientation, (start, run)) = match (horizontal.1 >= length, vertical.1 >= length) {
        (true, true) => return (Attribution::Ambiguous, vec![(x, y)]),
        (true, false) => (Orientation::Horizontal, horizontal),
        (false, true) => (Orientation::Vertical, vertical),
        (false, false) => return (Attribution::Unresolved, vec![(x, y)]),
    };
    let Some((sx, sy)) = start else {
        return (Attribution::Unresolved, vec![(x, y)]);
    };

    let (dx, dy) = orientation.step();
    let skip = run - length;
    if skip > 0 {
        debug!("sink at ({}, {}): run of {} for length {}, dropping {} leading squares", x, y, run, length, skip);
    }
    let squares = (skip..run)
        .map(|i| {
            (
                (sx as isize + dx * i as isize) as usize,
                (sy as isize + dy * i as isize) as usize,
            )
        })
        .collect();
    (Attribution::Line(orientation), squares)
}
