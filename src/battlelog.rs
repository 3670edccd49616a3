//! Move logs: a record of every shot and of the winner.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::common::ShotOutcome;

/// Receives every move of a game in order, then the winner.
pub trait MoveLog {
    /// Called once before the first move.
    fn start(&mut self, _first: &str, _second: &str) {}

    fn record_move(&mut self, mover: &str, x: usize, y: usize, outcome: ShotOutcome);

    fn record_winner(&mut self, name: &str);
}

/// One line of a [`MemoryLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "kind", rename_all = "snake_case"))]
pub enum LogEntry {
    Start { first: String, second: String },
    Move { mover: String, x: usize, y: usize, outcome: ShotOutcome },
    Winner { name: String },
}

/// Keeps the log as structured entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MemoryLog {
    entries: Vec<LogEntry>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of moves recorded so far.
    pub fn move_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, LogEntry::Move { .. }))
            .count()
    }

    pub fn winner(&self) -> Option<&str> {
        self.entries.iter().find_map(|e| match e {
            LogEntry::Winner { name } => Some(name.as_str()),
            _ => None,
        })
    }
}

impl MoveLog for MemoryLog {
    fn start(&mut self, first: &str, second: &str) {
        self.entries.push(LogEntry::Start {
            first: first.into(),
            second: second.into(),
        });
    }

    fn record_move(&mut self, mover: &str, x: usize, y: usize, outcome: ShotOutcome) {
        self.entries.push(LogEntry::Move {
            mover: mover.into(),
            x,
            y,
            outcome,
        });
    }

    fn record_winner(&mut self, name: &str) {
        self.entries.push(LogEntry::Winner { name: name.into() });
    }
}

#[cfg(feature = "std")]
pub use text::TextBattlelog;

#[cfg(feature = "std")]
mod text {
    use std::io::{self, Write};

    use log::warn;

    use super::MoveLog;
    use crate::common::{coord_label, ShotOutcome};

    /// Two-column text table, one column per player:
    ///
    /// ```text
    /// |=========================|
    /// | Alice      | Bob        |
    /// |=========================|
    /// | B3     HIT | A1    MISS |
    /// ```
    ///
    /// Write failures are reported through `log` and otherwise ignored so a
    /// broken log file never ends a game.
    pub struct TextBattlelog<W: Write> {
        out: W,
        first_player: bool,
    }

    impl<W: Write> TextBattlelog<W> {
        pub fn new(out: W) -> Self {
            Self {
                out,
                first_player: true,
            }
        }

        pub fn into_inner(self) -> W {
            self.out
        }

        fn emit(&mut self, result: io::Result<()>) {
            if let Err(e) = result.and_then(|()| self.out.flush()) {
                warn!("failed to write battlelog: {}", e);
            }
        }

        fn separator(out: &mut W) -> io::Result<()> {
            writeln!(out, "|{:=<25}|", "")
        }
    }

    impl<W: Write> MoveLog for TextBattlelog<W> {
        fn start(&mut self, first: &str, second: &str) {
            let out = &mut self.out;
            let result = Self::separator(out)
                .and_then(|()| writeln!(out, "| {:<10} | {:<10} |", first, second))
                .and_then(|()| Self::separator(out));
            self.emit(result);
        }

        fn record_move(&mut self, _mover: &str, x: usize, y: usize, outcome: ShotOutcome) {
            let out = &mut self.out;
            let lead = if self.first_player { "|" } else { "" };
            let mut result = write!(out, "{} {:<5} {:>4} |", lead, coord_label(x, y), outcome.label());
            if !self.first_player {
                result = result.and_then(|()| writeln!(out));
            }
            self.first_player = !self.first_player;
            self.emit(result);
        }

        fn record_winner(&mut self, name: &str) {
            let out = &mut self.out;
            let mut result = Ok(());
            if !self.first_player {
                result = writeln!(out, "{:12}|", "");
            }
            let result = result
                .and_then(|()| Self::separator(out))
                .and_then(|()| writeln!(out))
                .and_then(|()| writeln!(out, "{} wins!", name));
            self.emit(result);
        }
    }
}
