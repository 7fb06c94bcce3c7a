use crate::board_location::BoardLocation;
use crate::chess_errors::ChessError;
use crate::moves::route::{walk_toward, Route, RouteKind};

/// Candidate route for a rook move: every square along the shared file or
/// rank, destination included.
pub fn find_route(from: BoardLocation, to: BoardLocation) -> Result<Route, ChessError> {
    if from == to || !(from.is_same_file(to) || from.is_same_rank(to)) {
        return Err(ChessError::IllegalRoute(to));
    }

    let file_step = from.file_distance(to).signum();
    let rank_step = from.rank_distance(to).signum();
    Ok(Route::new(
        RouteKind::Slide,
        walk_toward(from, to, file_step, rank_step),
    ))
}

#[cfg(test)]
mod tests {
    use super::find_route;
    use crate::board_location::BoardLocation;
    use crate::chess_errors::ChessError;
    use crate::moves::route::RouteKind;

    fn loc(text: &str) -> BoardLocation {
        BoardLocation::from_algebraic(text).expect("test coordinate should parse")
    }

    #[test]
    fn route_along_a_file() {
        let route = find_route(loc("a1"), loc("a3")).expect("a1 to a3 is a rook move");
        assert_eq!(route.kind, RouteKind::Slide);
        assert_eq!(route.squares, vec![loc("a2"), loc("a3")]);
    }

    #[test]
    fn route_along_a_rank() {
        let route = find_route(loc("a1"), loc("e1")).expect("a1 to e1 is a rook move");
        assert_eq!(
            route.squares,
            vec![loc("b1"), loc("c1"), loc("d1"), loc("e1")]
        );
    }

    #[test]
    fn route_runs_backwards_too() {
        let route = find_route(loc("h8"), loc("h5")).expect("h8 to h5 is a rook move");
        assert_eq!(route.squares, vec![loc("h7"), loc("h6"), loc("h5")]);
    }

    #[test]
    fn rejects_diagonals_and_zero_moves() {
        assert_eq!(
            find_route(loc("a1"), loc("b2")),
            Err(ChessError::IllegalRoute(loc("b2")))
        );
        assert_eq!(
            find_route(loc("d4"), loc("e6")),
            Err(ChessError::IllegalRoute(loc("e6")))
        );
        assert_eq!(
            find_route(loc("d4"), loc("d4")),
            Err(ChessError::IllegalRoute(loc("d4")))
        );
    }
}
