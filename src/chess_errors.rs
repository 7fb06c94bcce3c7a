//! Errors used throughout the rule core.
//!
//! A single enum covers every failure mode the crate can surface: malformed
//! coordinates, moves that violate turn ownership, and the geometric or
//! occupancy rules a route can break. Every variant is recoverable; a failed
//! operation leaves the game state untouched and retry is the caller's
//! concern. Variants carry contextual payloads where they aid user-facing
//! messages.

use thiserror::Error;

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::Color;

/// Unified error type for the rule core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Coordinate text (or a raw file/rank pair) that does not name a square
    /// on the board.
    ///
    /// Payload: the offending input.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinateFormat(String),

    /// A move was attempted from an empty square.
    #[error("no piece at {0}")]
    NoPieceAtSource(BoardLocation),

    /// A move was attempted with a piece of the side not on turn.
    ///
    /// Payload: the side whose turn it actually is.
    #[error("it is the {0} side's turn")]
    TurnMismatch(Color),

    /// The requested destination is not in the piece's movable set.
    #[error("{0} is not a reachable destination")]
    NotMovable(BoardLocation),

    /// The move's shape is invalid for the piece type, or a diagonal pawn
    /// move has no enemy to capture.
    #[error("no legal route to {0}")]
    IllegalRoute(BoardLocation),

    /// An interior square on a sliding route is occupied.
    ///
    /// Payload: the first blocked square.
    #[error("path is blocked at {0}")]
    BlockedPath(BoardLocation),

    /// The destination square holds a piece of the moving side.
    #[error("{0} is occupied by an allied piece")]
    OccupiedByAlly(BoardLocation),

    /// A move was attempted after a king had already been captured.
    #[error("the game has already ended")]
    GameAlreadyEnded,
}
