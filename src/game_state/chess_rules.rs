//! Canonical chess-rule constants.
//!
//! This module stores the static literals describing the standard starting
//! arrangement used by the board factory.

use crate::game_state::chess_types::PieceKind;

/// Back-rank arrangement from file a through file h, identical for both
/// sides.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const LIGHT_BACK_RANK: i8 = 0;
pub const LIGHT_PAWN_RANK: i8 = 1;
pub const DARK_PAWN_RANK: i8 = 6;
pub const DARK_BACK_RANK: i8 = 7;
