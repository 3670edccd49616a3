#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String};

use crate::{
    battlelog::MoveLog,
    common::{coord_label, BoardError, GameError, Move},
    player::Player,
};
use log::{info, warn};
use rand::rngs::SmallRng;

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// Index (0 or 1) of the winning player.
    pub winner_index: usize,
    pub winner: String,
    pub loser: String,
    /// Shots fired by both players together.
    pub shots: usize,
    /// The loser gave up instead of losing its fleet.
    pub forfeit: bool,
}

/// Runs a match between two players and reports every move to a log.
pub struct Game<L: MoveLog> {
    players: [Box<dyn Player>; 2],
    turn: usize,
    shots: usize,
    log: L,
}

impl<L: MoveLog> Game<L> {
    /// Player one moves first.
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>, log: L) -> Self {
        Self {
            players: [first, second],
            turn: 0,
            shots: 0,
            log,
        }
    }

    pub fn player(&self, index: usize) -> &dyn Player {
        self.players[index].as_ref()
    }

    /// Index of the player whose move is next.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn into_log(self) -> L {
        self.log
    }

    /// Play the match to the end: placement for both players, then
    /// alternating shots until a fleet is sunk or a player forfeits.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<GameOutcome, GameError> {
        self.log.start(self.players[0].name(), self.players[1].name());

        for (index, player) in self.players.iter().enumerate() {
            let opponent = &self.players[1 - index];
            if player.state().tracking_fleet().lengths() != opponent.state().primary_fleet().lengths() {
                return Err(GameError::FleetMismatch {
                    player: player.name().into(),
                });
            }
        }

        for player in self.players.iter_mut() {
            if let Err(e) = player.place_ships(rng) {
                warn!("{}: placement stopped: {}", player.name(), e);
            }
            if !player.state().all_ships_placed() {
                return Err(GameError::PlacementFailed {
                    player: player.name().into(),
                });
            }
        }

        loop {
            let turn = self.turn;
            let [first, second] = &mut self.players;
            let (mover, opponent) = if turn == 0 {
                (first, second)
            } else {
                (second, first)
            };

            let (x, y) = match mover.select_target(rng) {
                Move::Fire { x, y } => (x, y),
                Move::Forfeit => {
                    warn!("{} has forfeited the match", mover.name());
                    opponent.game_over(true);
                    return Ok(GameOutcome {
                        winner_index: 1 - turn,
                        winner: opponent.name().into(),
                        loser: mover.name().into(),
                        shots: self.shots,
                        forfeit: true,
                    });
                }
            };

            if !mover.state().tracking_board().valid_guess(x, y) {
                return Err(illegal_shot(mover.as_ref(), x, y));
            }
            let outcome = opponent
                .state_mut()
                .fire_shot_at(x, y)
                .map_err(|source| board_error(opponent.as_ref(), source))?;
            opponent.handle_opponent_shot(x, y, outcome);
            mover
                .handle_shot_result(x, y, outcome)
                .map_err(|source| board_error(mover.as_ref(), source))?;
            self.log.record_move(mover.name(), x, y, outcome);
            self.shots += 1;
            info!("{} fires at {}: {}", mover.name(), coord_label(x, y), outcome);

            if opponent.state().all_ships_sunk() {
                self.log.record_winner(mover.name());
                info!("{} wins after {} shots", mover.name(), self.shots);
                mover.game_over(true);
                opponent.game_over(false);
                return Ok(GameOutcome {
                    winner_index: turn,
                    winner: mover.name().into(),
                    loser: opponent.name().into(),
                    shots: self.shots,
                    forfeit: false,
                });
            }

            self.turn = 1 - turn;
        }
    }
}

fn illegal_shot(player: &dyn Player, x: usize, y: usize) -> GameError {
    GameError::IllegalShot {
        player: player.name().into(),
        x,
        y,
    }
}

fn board_error(player: &dyn Player, source: BoardError) -> GameError {
    GameError::Board {
        player: player.name().into(),
        source,
    }
}
