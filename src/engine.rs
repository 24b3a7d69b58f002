//! Turn sequencing and game outcome.
//!
//! A [`TurnEngine`] owns one board and walks the state machine
//! `AwaitingMove(A) -> AwaitingMove(B) -> ... -> Won(p) | Draw`. Each call
//! to [`TurnEngine::submit_move`] is one complete transition: either the
//! token is placed and the status updated, or nothing changes at all.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::board::{Board, Position, Rejected};
use crate::constants::MIN_WINNING_MOVE;
use crate::player::Player;
use crate::win::{Line, find_four};

/// Where the game stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of submitting a column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The token landed here. The status may now be terminal.
    Placed(Position),
    /// The drop was refused; same player to move.
    Rejected(Rejected),
    /// The game had already ended; nothing changed.
    GameAlreadyOver,
}

impl MoveOutcome {
    /// Convert into a `Result` for callers that prefer `?`.
    pub fn into_result(self) -> Result<Position, MoveError> {
        match self {
            MoveOutcome::Placed(pos) => Ok(pos),
            MoveOutcome::Rejected(r) => Err(MoveError::Rejected(r)),
            MoveOutcome::GameAlreadyOver => Err(MoveError::InvalidOperation),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Rejected(#[from] Rejected),
    #[error("the game has already ended")]
    InvalidOperation,
}

#[derive(Clone, Debug)]
pub struct TurnEngine {
    board: Board,
    active: Player,
    moves: usize,
    status: GameStatus,
    winning_line: Option<Line>,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a fresh game: empty board, player A to move.
pub fn new_game() -> TurnEngine {
    TurnEngine::new()
}

impl TurnEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Player::A,
            moves: 0,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Drop the active player's token into `column`.
    pub fn submit_move(&mut self, column: usize) -> MoveOutcome {
        if self.status.is_terminal() {
            warn!(column, status = ?self.status, "move submitted after the game ended");
            return MoveOutcome::GameAlreadyOver;
        }

        let player = self.active;
        let pos = match self.board.try_drop(column, player) {
            Ok(pos) => pos,
            Err(reason) => {
                debug!(%player, column, %reason, "drop rejected");
                return MoveOutcome::Rejected(reason);
            }
        };
        self.moves += 1;
        debug!(%player, row = pos.row, column = pos.column, moves = self.moves, "token placed");

        if self.moves >= MIN_WINNING_MOVE {
            if let Some(line) = find_four(&self.board) {
                info!(
                    winner = %player,
                    direction = ?line.direction,
                    moves = self.moves,
                    "four in a row"
                );
                self.winning_line = Some(line);
                self.status = GameStatus::Won(player);
                return MoveOutcome::Placed(pos);
            }
        }

        if self.board.is_full() {
            info!(moves = self.moves, "board full, game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.active = player.other();
        }
        MoveOutcome::Placed(pos)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Alias of [`TurnEngine::status`].
    pub fn current_status(&self) -> GameStatus {
        self.status
    }

    /// Read-only view of the board for rendering.
    pub fn snapshot(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the player who made the final move once the game
    /// has ended.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Number of tokens placed so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// The alignment that ended the game, if it was won.
    pub fn winning_line(&self) -> Option<&Line> {
        self.winning_line.as_ref()
    }
}
