//! Material scoring with the shared-file pawn rule.
//!
//! Scores are floating point so the halved pawn contributions stay exact.
//! Reports are keyed by `Color` and iterate in its ordering, which keeps
//! caller-side display deterministic.

use std::collections::BTreeMap;

use crate::board_location::BoardLocation;
use crate::game_state::board::OccupancySnapshot;
use crate::game_state::chess_types::{Color, PieceKind};

/// Numeric representation of a material score.
pub type Score = f32;

/// Pawns sharing a file each count for half their base value.
const SHARED_FILE_PAWN_DIVISOR: Score = 2.0;

/// Conventional material value for a piece kind.
///
/// The king scores zero: under the king-capture end condition both kings
/// stay on the board for as long as the score is meaningful, so a king value
/// would only cancel out.
pub fn conventional_score(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

/// Material score of each side, keyed and ordered by `Color`.
pub fn calculate_each_score(snapshot: &OccupancySnapshot) -> BTreeMap<Color, Score> {
    let mut scores = BTreeMap::new();
    for team in [Color::Light, Color::Dark] {
        scores.insert(team, calculate_side_score(snapshot, team));
    }
    scores
}

fn calculate_side_score(snapshot: &OccupancySnapshot, team: Color) -> Score {
    let non_pawns: Score = snapshot
        .values()
        .filter(|piece| piece.team == team && piece.kind != PieceKind::Pawn)
        .map(|piece| conventional_score(piece.kind))
        .sum();

    let pawns: Score = snapshot
        .iter()
        .filter(|(_, piece)| piece.team == team && piece.kind == PieceKind::Pawn)
        .map(|(&location, _)| pawn_score(snapshot, team, location))
        .sum();

    non_pawns + pawns
}

fn pawn_score(snapshot: &OccupancySnapshot, team: Color, location: BoardLocation) -> Score {
    let same_file_pawns = snapshot
        .iter()
        .filter(|(other, piece)| {
            piece.team == team
                && piece.kind == PieceKind::Pawn
                && other.is_same_file(location)
        })
        .count();

    let base = conventional_score(PieceKind::Pawn);
    if same_file_pawns > 1 {
        base / SHARED_FILE_PAWN_DIVISOR
    } else {
        base
    }
}
