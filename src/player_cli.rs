#![cfg(feature = "std")]

use std::fmt::{self, Write as _};
use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::{
    ai::{self, DensityGrid},
    board::{Board, SquareState},
    common::{coord_label, parse_coord, BoardError, Move, ShotOutcome},
    config::GRID_SIZE,
    player::{Player, PlayerState},
    ship::Orientation,
};
use log::warn;
use rand::rngs::SmallRng;

/// Render a board with rows labelled by letter (`y`) and columns by number
/// (`x + 1`). Ships are shown only when `reveal` is set.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("  ");
    for x in 0..GRID_SIZE {
        let _ = write!(out, "{:>3}", x + 1);
    }
    out.push('\n');
    for y in 0..GRID_SIZE {
        out.push((b'A' + y as u8) as char);
        out.push(' ');
        for x in 0..GRID_SIZE {
            let ch = match board.grid()[x][y] {
                SquareState::Hit => 'X',
                SquareState::Miss => 'o',
                SquareState::Ship if reveal => 'S',
                // a resolved hit on a tracking board
                SquareState::Ship => '#',
                SquareState::Blank => '.',
            };
            let _ = write!(out, "{:>3}", ch);
        }
        out.push('\n');
    }
    out
}

/// Render a density grid in the same layout as [`render_board`].
pub fn render_density(grid: &DensityGrid) -> String {
    let mut out = String::from("  ");
    for x in 0..GRID_SIZE {
        let _ = write!(out, "{:>4}", x + 1);
    }
    out.push('\n');
    for y in 0..GRID_SIZE {
        out.push((b'A' + y as u8) as char);
        out.push(' ');
        for column in grid.iter() {
            let _ = write!(out, "{:>4}", column[y]);
        }
        out.push('\n');
    }
    out
}

/// Human player on a terminal, or on any line-oriented reader and writer.
///
/// End of input, or typing `quit`, abandons placement or forfeits the game.
pub struct CliPlayer<R, W> {
    state: PlayerState,
    input: R,
    output: W,
    show_density: bool,
}

impl CliPlayer<io::BufReader<Stdin>, Stdout> {
    /// Player reading from stdin and writing to stdout.
    pub fn stdio(name: impl Into<String>, ship_lengths: &[usize]) -> Self {
        Self::new(name, ship_lengths, io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(name: impl Into<String>, ship_lengths: &[usize], input: R, output: W) -> Self {
        Self {
            state: PlayerState::new(name, ship_lengths),
            input,
            output,
            show_density: false,
        }
    }

    /// Also print the search density before every shot.
    pub fn with_density(mut self, show: bool) -> Self {
        self.show_density = show;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args).and_then(|()| self.output.flush()) {
            warn!("failed to write to player output: {}", e);
        }
    }

    /// Next trimmed input line, or `None` at end of input or on `quit`.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let line = line.trim();
                if line.eq_ignore_ascii_case("quit") {
                    None
                } else {
                    Some(line.to_string())
                }
            }
            Err(e) => {
                warn!("failed to read player input: {}", e);
                None
            }
        }
    }

    fn show_boards(&mut self) {
        let tracking = render_board(self.state.tracking_board(), false);
        let own = render_board(self.state.primary_board(), true);
        self.say(format_args!("Opponent board:\n{}\nYour board:\n{}", tracking, own));
    }
}

/// Parses `B3`, `B3 h` or `B3 v`. Orientation defaults to horizontal.
fn parse_placement(line: &str) -> Option<(usize, usize, Orientation)> {
    let mut parts = line.split_whitespace();
    let (x, y) = parse_coord(parts.next()?)?;
    let orientation = match parts.next().map(|p| p.to_ascii_lowercase()) {
        None => Orientation::Horizontal,
        Some(p) if p.starts_with('h') => Orientation::Horizontal,
        Some(p) if p.starts_with('v') => Orientation::Vertical,
        Some(_) => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((x, y, orientation))
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<(), BoardError> {
        self.say(format_args!(
            "Place your ships (e.g. B3 h or B3 v). Press enter for random placement.\n"
        ));
        for index in 0..self.state.primary_fleet().len() {
            let length = self.state.primary_fleet().ship(index)?.length();
            loop {
                let board = render_board(self.state.primary_board(), true);
                self.say(format_args!("{}Ship {} (length {}): ", board, index + 1, length));
                let Some(line) = self.read_line() else {
                    return Ok(());
                };
                if line.is_empty() {
                    self.state.place_ship_randomly(rng, index)?;
                    break;
                }
                let Some((x, y, orientation)) = parse_placement(&line) else {
                    self.say(format_args!("Invalid input\n"));
                    continue;
                };
                let (board, fleet) = self.state.primary_mut();
                let ship = fleet.ship_mut(index)?;
                ship.set_orientation(orientation);
                ship.set_position(x as isize, y as isize);
                match board.try_place_ship(fleet, index) {
                    Ok(()) => break,
                    Err(e) => self.say(format_args!("Error: {}\n", e)),
                }
            }
        }
        Ok(())
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> Move {
        self.show_boards();
        if self.show_density {
            let grid = ai::search_density(self.state.tracking_board(), self.state.tracking_fleet());
            self.say(format_args!("Probability density:\n{}", render_density(&grid)));
        }
        let suggestion = ai::suggest_move(self.state.tracking_board(), self.state.tracking_fleet(), rng);
        loop {
            match suggestion {
                Some((x, y)) => self.say(format_args!("Fire at [{}]: ", coord_label(x, y))),
                None => self.say(format_args!("Fire at: ")),
            }
            let Some(line) = self.read_line() else {
                return Move::Forfeit;
            };
            let target = if line.is_empty() {
                suggestion
            } else {
                parse_coord(&line)
            };
            match target {
                Some((x, y)) if self.state.tracking_board().valid_guess(x, y) => {
                    return Move::Fire { x, y };
                }
                Some(_) => self.say(format_args!("That square is off the board or already fired at\n")),
                None => self.say(format_args!("Invalid coordinate\n")),
            }
        }
    }

    fn handle_shot_result(&mut self, x: usize, y: usize, outcome: ShotOutcome) -> Result<(), BoardError> {
        self.state.mark_shot(x, y, outcome)?;
        self.say(format_args!("You fired at {} -> {}\n", coord_label(x, y), outcome));
        Ok(())
    }

    fn handle_opponent_shot(&mut self, x: usize, y: usize, outcome: ShotOutcome) {
        self.say(format_args!("Opponent fired at {} -> {}\n", coord_label(x, y), outcome));
    }

    fn game_over(&mut self, won: bool) {
        self.show_boards();
        if won {
            self.say(format_args!("You have sunk all enemy ships. You win!\n"));
        } else {
            self.say(format_args!("All your ships have been destroyed. You lose.\n"));
        }
    }
}
