//! Game orchestration: turn ownership, end-to-end move validation, and the
//! simplified king-capture end condition.
//!
//! `GameManager` is the only mutation path for a running game. Every move is
//! validated against a snapshot taken before any mutation, so a rejected
//! move is guaranteed to leave the board, the turn, and every piece flag
//! exactly as they were.

use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessError;
use crate::game_state::board::{Board, OccupancySnapshot};
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::movable_positions;
use crate::scoring::{calculate_each_score, Score};

/// Whether the game is still accepting moves. `Ended` is terminal until the
/// next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Ended,
}

/// Owns the board and the current turn; all mutation of either routes
/// through here.
#[derive(Debug)]
pub struct GameManager {
    board: Board,
    current_turn: Color,
    phase: GamePhase,
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

impl GameManager {
    /// Fresh factory board, light to move.
    pub fn new() -> Self {
        Self {
            board: Board::new_game(),
            current_turn: Color::Light,
            phase: GamePhase::Running,
        }
    }

    /// Validate and commit a move from `source` to `destination`.
    ///
    /// Validation runs in order: game still running, source occupied, piece
    /// belongs to the side on turn, destination in the piece's movable set.
    /// Only then does the board mutate; the turn flips, and the game ends if
    /// the move captured the opposing king.
    #[instrument(skip(self), level = "debug")]
    pub fn move_piece(
        &mut self,
        source: BoardLocation,
        destination: BoardLocation,
    ) -> Result<(), ChessError> {
        if self.is_ended() {
            return Err(ChessError::GameAlreadyEnded);
        }
        let piece = *self.board.find_piece_by(source)?;
        if piece.team != self.current_turn {
            return Err(ChessError::TurnMismatch(self.current_turn));
        }
        let snapshot = self.board.to_map();
        if !movable_positions(&piece, source, &snapshot).contains(&destination) {
            return Err(ChessError::NotMovable(destination));
        }

        self.board.move_piece(source, destination)?;
        debug!(%source, %destination, "move committed");

        self.current_turn = self.current_turn.opposite();
        if !self.board.is_king_alive_of(self.current_turn) {
            self.phase = GamePhase::Ended;
            info!(winner = %self.current_turn.opposite(), "king captured, game over");
        }
        Ok(())
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// King liveness of the side to move.
    #[inline]
    pub fn is_king_alive(&self) -> bool {
        self.board.is_king_alive_of(self.current_turn)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Occupancy snapshot for rendering and rule probing.
    pub fn board_snapshot(&self) -> OccupancySnapshot {
        self.board.to_map()
    }

    /// Material score of each side, in `Color` order.
    pub fn calculate_each_score(&self) -> BTreeMap<Color, Score> {
        calculate_each_score(&self.board.to_map())
    }

    /// Discard the current game: fresh factory board, light to move.
    #[instrument(skip(self), level = "debug")]
    pub fn reset_game(&mut self) {
        self.board = Board::new_game();
        self.current_turn = Color::Light;
        self.phase = GamePhase::Running;
        debug!("game reset");
    }
}
