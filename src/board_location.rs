//! File/rank coordinates for the eight-by-eight board.
//!
//! `BoardLocation` is the leaf value every other subsystem speaks in terms
//! of. Construction is bounds-checked, so a live location always names a real
//! square, and the algebraic text conversions used by the public move surface
//! live here as well.

use std::fmt;

use crate::chess_errors::ChessError;

/// Number of files and of ranks on the board.
pub const BOARD_SPAN: i8 = 8;

/// A file/rank pair, both in `0..8`. Equal and hashable by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardLocation {
    file: i8,
    rank: i8,
}

/// Direction of the diagonal two locations share, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalDirection {
    /// File and rank grow together (a1 towards h8).
    Positive,
    /// File grows while rank shrinks (a8 towards h1).
    Negative,
}

impl BoardLocation {
    pub fn from_file_rank(file: i8, rank: i8) -> Result<Self, ChessError> {
        if !(0..BOARD_SPAN).contains(&file) || !(0..BOARD_SPAN).contains(&rank) {
            return Err(ChessError::InvalidCoordinateFormat(format!(
                "file {file}, rank {rank}"
            )));
        }
        Ok(Self { file, rank })
    }

    /// Parse a two-character algebraic coordinate (for example: "e4").
    ///
    /// The file letter is case-normalized, so "E4" parses the same way. Any
    /// other pattern or out-of-range component is rejected.
    pub fn from_algebraic(text: &str) -> Result<Self, ChessError> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidCoordinateFormat(text.to_owned()));
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];

        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidCoordinateFormat(text.to_owned()));
        }

        Ok(Self {
            file: (file - b'a') as i8,
            rank: (rank - b'1') as i8,
        })
    }

    #[inline]
    pub fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> i8 {
        self.rank
    }

    /// Signed file difference from `self` to `other`.
    #[inline]
    pub fn file_distance(self, other: BoardLocation) -> i8 {
        other.file - self.file
    }

    /// Signed rank difference from `self` to `other`.
    #[inline]
    pub fn rank_distance(self, other: BoardLocation) -> i8 {
        other.rank - self.rank
    }

    #[inline]
    pub fn is_same_file(self, other: BoardLocation) -> bool {
        self.file == other.file
    }

    #[inline]
    pub fn is_same_rank(self, other: BoardLocation) -> bool {
        self.rank == other.rank
    }

    /// Classify the diagonal between `self` and `other`.
    ///
    /// Returns `None` when the two locations coincide or do not share a
    /// diagonal at all.
    pub fn diagonal_direction(self, other: BoardLocation) -> Option<DiagonalDirection> {
        let d_file = self.file_distance(other);
        let d_rank = self.rank_distance(other);

        if d_file == 0 || d_file.abs() != d_rank.abs() {
            return None;
        }
        if d_file == d_rank {
            Some(DiagonalDirection::Positive)
        } else {
            Some(DiagonalDirection::Negative)
        }
    }

    /// Offset by the given file/rank deltas, `None` when the result would
    /// leave the board.
    pub fn offset_by(self, d_file: i8, d_rank: i8) -> Option<BoardLocation> {
        Self::from_file_rank(self.file + d_file, self.rank + d_rank).ok()
    }

    /// Render as algebraic text (for example: "e4").
    pub fn to_algebraic(self) -> String {
        let file_char = char::from(b'a' + self.file as u8);
        let rank_char = char::from(b'1' + self.rank as u8);
        format!("{file_char}{rank_char}")
    }

    /// Iterate every location on the board, file-major.
    pub fn all() -> impl Iterator<Item = BoardLocation> {
        (0..BOARD_SPAN)
            .flat_map(|file| (0..BOARD_SPAN).map(move |rank| BoardLocation { file, rank }))
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
