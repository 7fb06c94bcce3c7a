use crate::board_location::BoardLocation;
use crate::chess_errors::ChessError;
use crate::moves::route::Route;
use crate::moves::{bishop_moves, rook_moves};

/// Candidate route for a queen move: the rook rule or the bishop rule,
/// whichever applies.
pub fn find_route(from: BoardLocation, to: BoardLocation) -> Result<Route, ChessError> {
    if from.is_same_file(to) || from.is_same_rank(to) {
        rook_moves::find_route(from, to)
    } else {
        bishop_moves::find_route(from, to)
    }
}
