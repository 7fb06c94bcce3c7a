//! Board-wide legality: piece dispatch plus the movable-destination query.
//!
//! Route finding is purely geometric; this module joins it with the
//! occupancy of a board snapshot to answer the question the orchestrator
//! actually asks: which destinations are legal for this piece right now.

use std::collections::HashSet;

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessError;
use crate::game_state::board::OccupancySnapshot;
use crate::game_state::chess_types::{Color, PieceKind, PieceRecord};
use crate::moves::route::{validate_route, Occupancy, Route};
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};

/// Candidate route for `piece` standing on `from`, dispatched by kind.
pub fn find_route_for(
    piece: &PieceRecord,
    from: BoardLocation,
    to: BoardLocation,
) -> Result<Route, ChessError> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves::find_route(from, to, piece.team, piece.has_moved),
        PieceKind::Knight => knight_moves::find_route(from, to),
        PieceKind::Bishop => bishop_moves::find_route(from, to),
        PieceKind::Rook => rook_moves::find_route(from, to),
        PieceKind::Queen => queen_moves::find_route(from, to),
        PieceKind::King => king_moves::find_route(from, to),
    }
}

/// Occupancy of each route square as seen by the moving side, aligned with
/// `route.squares`.
pub fn classify_occupancy(
    route: &Route,
    snapshot: &OccupancySnapshot,
    mover: Color,
) -> Vec<Occupancy> {
    route
        .squares
        .iter()
        .map(|square| match snapshot.get(square) {
            None => Occupancy::Empty,
            Some(piece) if piece.team == mover => Occupancy::Ally,
            Some(_) => Occupancy::Enemy,
        })
        .collect()
}

/// Every destination currently legal for `piece` standing on `from`.
///
/// Pure query over the snapshot: neither the snapshot nor any piece flag is
/// touched, so it is safe to call while merely enumerating candidates.
pub fn movable_positions(
    piece: &PieceRecord,
    from: BoardLocation,
    snapshot: &OccupancySnapshot,
) -> HashSet<BoardLocation> {
    let mut destinations = HashSet::new();
    for to in BoardLocation::all() {
        if to == from {
            continue;
        }
        let route = match find_route_for(piece, from, to) {
            Ok(route) => route,
            Err(_) => continue,
        };
        let occupancy = classify_occupancy(&route, snapshot, piece.team);
        if validate_route(&route, &occupancy).is_ok() {
            destinations.insert(to);
        }
    }
    destinations
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{find_route_for, movable_positions};
    use crate::board_location::BoardLocation;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, PieceRecord};
    use crate::moves::route::RouteKind;

    fn loc(text: &str) -> BoardLocation {
        BoardLocation::from_algebraic(text).expect("test coordinate should parse")
    }

    fn targets(board: &Board, square: &str) -> HashSet<BoardLocation> {
        let from = loc(square);
        let piece = *board.find_piece_by(from).expect("square occupied");
        movable_positions(&piece, from, &board.to_map())
    }

    #[test]
    fn dispatch_reaches_every_kind() {
        let from = loc("d4");
        let cases = [
            (PieceKind::Pawn, "d5", RouteKind::PawnAdvance),
            (PieceKind::Knight, "e6", RouteKind::Leap),
            (PieceKind::Bishop, "f6", RouteKind::Slide),
            (PieceKind::Rook, "d8", RouteKind::Slide),
            (PieceKind::Queen, "a7", RouteKind::Slide),
            (PieceKind::King, "d5", RouteKind::Leap),
        ];
        for (kind, to, route_kind) in cases {
            let piece = PieceRecord::new(kind, Color::Light);
            let route = find_route_for(&piece, from, loc(to)).expect("shape should be legal");
            assert_eq!(route.kind, route_kind);
        }
    }

    #[test]
    fn knight_escapes_the_starting_rank() {
        let board = Board::new_game();
        let expected: HashSet<_> = [loc("a3"), loc("c3")].into_iter().collect();
        assert_eq!(targets(&board, "b1"), expected);
    }

    #[test]
    fn boxed_in_sliders_have_no_targets() {
        let board = Board::new_game();
        assert!(targets(&board, "a1").is_empty());
        assert!(targets(&board, "c1").is_empty());
        assert!(targets(&board, "d1").is_empty());
        assert!(targets(&board, "e1").is_empty());
    }

    #[test]
    fn starting_pawn_has_both_advances() {
        let board = Board::new_game();
        let expected: HashSet<_> = [loc("e3"), loc("e4")].into_iter().collect();
        assert_eq!(targets(&board, "e2"), expected);
    }

    #[test]
    fn pawn_capture_appears_only_with_an_enemy() {
        let mut board = Board::empty();
        board.place_piece(loc("e4"), {
            let mut pawn = PieceRecord::new(PieceKind::Pawn, Color::Light);
            pawn.has_moved = true;
            pawn
        });
        board.place_piece(loc("d5"), PieceRecord::new(PieceKind::Pawn, Color::Dark));

        let expected: HashSet<_> = [loc("e5"), loc("d5")].into_iter().collect();
        assert_eq!(targets(&board, "e4"), expected);
    }

    #[test]
    fn blocked_pawn_cannot_advance() {
        let mut board = Board::empty();
        board.place_piece(loc("e2"), PieceRecord::new(PieceKind::Pawn, Color::Light));
        board.place_piece(loc("e3"), PieceRecord::new(PieceKind::Pawn, Color::Dark));

        assert!(targets(&board, "e2").is_empty());
    }

    #[test]
    fn slider_stops_at_the_first_enemy() {
        let mut board = Board::empty();
        board.place_piece(loc("a1"), PieceRecord::new(PieceKind::Rook, Color::Light));
        board.place_piece(loc("a5"), PieceRecord::new(PieceKind::Pawn, Color::Dark));

        let reachable = targets(&board, "a1");
        assert!(reachable.contains(&loc("a5")));
        assert!(!reachable.contains(&loc("a6")));
    }

    #[test]
    fn probing_mutates_nothing() {
        let board = Board::new_game();
        let snapshot = board.to_map();
        let from = loc("e2");
        let piece = *board.find_piece_by(from).expect("square occupied");

        let _ = movable_positions(&piece, from, &snapshot);

        assert_eq!(snapshot, board.to_map());
        assert!(!board.find_piece_by(from).expect("occupied").has_moved);
    }
}
