use crate::board_location::BoardLocation;
use crate::chess_errors::ChessError;
use crate::moves::route::{walk_toward, Route, RouteKind};

/// Candidate route for a bishop move: every square along the shared
/// diagonal, destination included.
pub fn find_route(from: BoardLocation, to: BoardLocation) -> Result<Route, ChessError> {
    if from.diagonal_direction(to).is_none() {
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
    fn route_along_a_negative_diagonal() {
        let route = find_route(loc("c1"), loc("a3")).expect("c1 to a3 is a bishop move");
        assert_eq!(route.kind, RouteKind::Slide);
        assert_eq!(route.squares, vec![loc("b2"), loc("a3")]);
    }

    #[test]
    fn route_along_a_positive_diagonal() {
        let route = find_route(loc("f1"), loc("h3")).expect("f1 to h3 is a bishop move");
        assert_eq!(route.squares, vec![loc("g2"), loc("h3")]);
    }

    #[test]
    fn rejects_straight_lines_and_zero_moves() {
        assert_eq!(
            find_route(loc("c1"), loc("c3")),
            Err(ChessError::IllegalRoute(loc("c3")))
        );
        assert_eq!(
            find_route(loc("c1"), loc("e2")),
            Err(ChessError::IllegalRoute(loc("e2")))
        );
        assert_eq!(
            find_route(loc("c1"), loc("c1")),
            Err(ChessError::IllegalRoute(loc("c1")))
        );
    }
}
