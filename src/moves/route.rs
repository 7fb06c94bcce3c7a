//! Shared route representation and occupancy validation.
//!
//! Every per-piece module produces a `Route`: the ordered squares from just
//! after the origin up to and including the destination, tagged with the
//! validation category its occupancy check follows. Validation itself is
//! centralized here so the category semantics live in one place.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessError;

/// Validation category for a computed route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Rook/bishop/queen path: interior squares must be empty, the
    /// destination empty or enemy-held.
    Slide,
    /// Knight/king single-square route: only the destination is checked.
    Leap,
    /// Straight pawn move: every square must be empty, the destination
    /// included.
    PawnAdvance,
    /// Diagonal pawn move: the destination must hold an enemy.
    PawnCapture,
}

/// Occupancy of a route square as seen by the moving side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Ally,
    Enemy,
}

/// Ordered squares from just after the origin up to and including the
/// destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub kind: RouteKind,
    pub squares: Vec<BoardLocation>,
}

impl Route {
    pub fn new(kind: RouteKind, squares: Vec<BoardLocation>) -> Self {
        Self { kind, squares }
    }
}

/// Check a route against the occupancy of its squares.
///
/// `occupancy` is aligned with `route.squares`, origin excluded. Sliding
/// routes require an empty interior and an empty or enemy-held destination;
/// leaping routes check the destination only; pawn advances require every
/// square empty; pawn captures require an enemy on the destination.
pub fn validate_route(route: &Route, occupancy: &[Occupancy]) -> Result<(), ChessError> {
    let (destination, interior) = match route.squares.split_last() {
        Some((last, rest)) => (*last, rest),
        None => return Ok(()),
    };
    let (at_destination, along_interior) = match occupancy.split_last() {
        Some((last, rest)) => (*last, rest),
        None => return Ok(()),
    };

    match route.kind {
        RouteKind::Slide | RouteKind::Leap => {
            check_interior_empty(interior, along_interior)?;
            match at_destination {
                Occupancy::Ally => Err(ChessError::OccupiedByAlly(destination)),
                Occupancy::Empty | Occupancy::Enemy => Ok(()),
            }
        }
        RouteKind::PawnAdvance => {
            check_interior_empty(interior, along_interior)?;
            match at_destination {
                Occupancy::Empty => Ok(()),
                Occupancy::Ally => Err(ChessError::OccupiedByAlly(destination)),
                Occupancy::Enemy => Err(ChessError::BlockedPath(destination)),
            }
        }
        RouteKind::PawnCapture => match at_destination {
            Occupancy::Enemy => Ok(()),
            Occupancy::Empty | Occupancy::Ally => Err(ChessError::IllegalRoute(destination)),
        },
    }
}

fn check_interior_empty(
    interior: &[BoardLocation],
    occupancy: &[Occupancy],
) -> Result<(), ChessError> {
    for (square, state) in interior.iter().zip(occupancy.iter()) {
        if *state != Occupancy::Empty {
            return Err(ChessError::BlockedPath(*square));
        }
    }
    Ok(())
}

/// Squares strictly after `from` through `to`, stepping by the given unit
/// offsets. The caller guarantees `to` lies on the stepped line.
pub(crate) fn walk_toward(
    from: BoardLocation,
    to: BoardLocation,
    file_step: i8,
    rank_step: i8,
) -> Vec<BoardLocation> {
    let mut squares = Vec::new();
    let mut current = from;
    while let Some(next) = current.offset_by(file_step, rank_step) {
        squares.push(next);
        if next == to {
            break;
        }
        current = next;
    }
    squares
}
