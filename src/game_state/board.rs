//! Sparse board state and the starting-arrangement factory.
//!
//! The board is a location-to-piece map; an absent entry is an empty square.
//! All rule-relevant mutation funnels through `move_piece`, which the game
//! orchestrator only calls after full validation.

use std::collections::HashMap;

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::{
    BACK_RANK_ORDER, DARK_BACK_RANK, DARK_PAWN_RANK, LIGHT_BACK_RANK, LIGHT_PAWN_RANK,
};
use crate::game_state::chess_types::{Color, PieceKind, PieceRecord};

/// Immutable occupancy view used by legality evaluation and scoring.
pub type OccupancySnapshot = HashMap<BoardLocation, PieceRecord>;

#[derive(Debug, Clone, Default)]
pub struct Board {
    squares: HashMap<BoardLocation, PieceRecord>,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Factory for the standard starting arrangement: each side's pawns on
    /// its second rank, the canonical back-rank order behind them.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK_ORDER.iter().enumerate() {
            let file = file as i8;
            board.place_piece(
                factory_square(file, LIGHT_BACK_RANK),
                PieceRecord::new(kind, Color::Light),
            );
            board.place_piece(
                factory_square(file, LIGHT_PAWN_RANK),
                PieceRecord::new(PieceKind::Pawn, Color::Light),
            );
            board.place_piece(
                factory_square(file, DARK_BACK_RANK),
                PieceRecord::new(kind, Color::Dark),
            );
            board.place_piece(
                factory_square(file, DARK_PAWN_RANK),
                PieceRecord::new(PieceKind::Pawn, Color::Dark),
            );
        }
        board
    }

    /// Put a record on a square without any rule checking. Setup path for
    /// the factory and for tests; games in progress mutate through
    /// `move_piece` only.
    pub fn place_piece(&mut self, location: BoardLocation, record: PieceRecord) {
        self.squares.insert(location, record);
    }

    pub fn find_piece_by(&self, location: BoardLocation) -> Result<&PieceRecord, ChessError> {
        self.squares
            .get(&location)
            .ok_or(ChessError::NoPieceAtSource(location))
    }

    /// Commit a move: remove the record at `from`, mark it moved, and write
    /// it at `to`, overwriting any occupant. A capture is the overwrite;
    /// there is no separate captured-piece bookkeeping.
    pub fn move_piece(&mut self, from: BoardLocation, to: BoardLocation) -> Result<(), ChessError> {
        let mut piece = self
            .squares
            .remove(&from)
            .ok_or(ChessError::NoPieceAtSource(from))?;
        piece.has_moved = true;
        self.squares.insert(to, piece);
        Ok(())
    }

    /// Cloned occupancy snapshot reflecting a single consistent instant.
    pub fn to_map(&self) -> OccupancySnapshot {
        self.squares.clone()
    }

    pub fn is_king_alive_of(&self, team: Color) -> bool {
        self.squares
            .values()
            .any(|piece| piece.kind == PieceKind::King && piece.team == team)
    }
}

fn factory_square(file: i8, rank: i8) -> BoardLocation {
    BoardLocation::from_file_rank(file, rank).expect("factory coordinates are always on the board")
}
