use crate::board_location::BoardLocation;
use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Color;
use crate::moves::route::{walk_toward, Route, RouteKind};

/// Candidate route for a pawn move.
///
/// Three shapes are legal: a one-step advance along the file, a two-step
/// advance when the pawn has not yet moved (the intermediate square is part
/// of the route), and a one-square diagonal step toward the enemy, which is
/// tagged `PawnCapture` because its occupancy rule differs from the straight
/// advances.
pub fn find_route(
    from: BoardLocation,
    to: BoardLocation,
    team: Color,
    has_moved: bool,
) -> Result<Route, ChessError> {
    let d_file = from.file_distance(to);
    let d_rank = from.rank_distance(to);
    let forward = team.pawn_direction();

    if d_file.abs() == 1 && d_rank == forward {
        return Ok(Route::new(RouteKind::PawnCapture, vec![to]));
    }
    if d_file == 0 && d_rank == forward {
        return Ok(Route::new(RouteKind::PawnAdvance, vec![to]));
    }
    if d_file == 0 && d_rank == 2 * forward && !has_moved {
        return Ok(Route::new(
            RouteKind::PawnAdvance,
            walk_toward(from, to, 0, forward),
        ));
    }

    Err(ChessError::IllegalRoute(to))
}
