use crate::board_location::BoardLocation;
use crate::chess_errors::ChessError;
use crate::moves::route::{Route, RouteKind};

/// The eight L offsets, counter-clockwise from east-north-east.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Candidate route for a knight move: the destination alone, since the
/// knight leaps over anything in between.
pub fn find_route(from: BoardLocation, to: BoardLocation) -> Result<Route, ChessError> {
    let delta = (from.file_distance(to), from.rank_distance(to));
    if !KNIGHT_OFFSETS.contains(&delta) {
        return Err(ChessError::IllegalRoute(to));
    }
    Ok(Route::new(RouteKind::Leap, vec![to]))
}
