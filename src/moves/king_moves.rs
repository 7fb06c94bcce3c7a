use crate::board_location::BoardLocation;
use crate::chess_errors::ChessError;
use crate::moves::route::{Route, RouteKind};

/// Candidate route for a king move: one square in any direction, so the
/// route is the destination alone.
pub fn find_route(from: BoardLocation, to: BoardLocation) -> Result<Route, ChessError> {
    let d_file = from.file_distance(to).abs();
    let d_rank = from.rank_distance(to).abs();

    if d_file > 1 || d_rank > 1 || (d_file == 0 && d_rank == 0) {
        return Err(ChessError::IllegalRoute(to));
    }
    Ok(Route::new(RouteKind::Leap, vec![to]))
}
